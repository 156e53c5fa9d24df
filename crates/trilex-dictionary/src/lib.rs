mod cambridge;
mod extract;

pub use cambridge::{CambridgeCollector, FetchError};
pub use extract::extract;
