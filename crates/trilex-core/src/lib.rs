pub mod collector;
pub mod matcher;
pub mod normalize;
pub mod record;
pub mod resolver;
pub mod wordlist;

pub use collector::{EntryLayout, ExtractionRule, PageCollector, ScrapedElement};
pub use resolver::Resolver;
pub use wordlist::WordListError;

#[cfg(test)]
mod tests;
