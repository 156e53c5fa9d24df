use scraper::{ElementRef, Html, Selector};
use trilex_core::{ExtractionRule, ScrapedElement};

/// Apply extraction rules to an HTML document.
///
/// Returns one list per rule, in rule order. A rule with an unparsable block
/// selector matches nothing; an unparsable child selector reads as empty.
pub fn extract(html: &str, rules: &[ExtractionRule]) -> Vec<Vec<ScrapedElement>> {
    let document = Html::parse_document(html);

    rules
        .iter()
        .map(|rule| extract_rule(&document, rule))
        .collect()
}

fn extract_rule(document: &Html, rule: &ExtractionRule) -> Vec<ScrapedElement> {
    let block = match Selector::parse(&rule.block) {
        Ok(selector) => selector,
        Err(e) => {
            tracing::warn!("Invalid block selector '{}': {}", rule.block, e);
            return Vec::new();
        }
    };

    let children: Vec<(String, Option<Selector>)> = rule
        .children
        .iter()
        .map(|child| {
            let selector = Selector::parse(child)
                .inspect_err(|e| tracing::warn!("Invalid child selector '{}': {}", child, e))
                .ok();
            (child.clone(), selector)
        })
        .collect();

    document
        .select(&block)
        .map(|element| ScrapedElement {
            children: children
                .iter()
                .map(|(name, selector)| {
                    let text = selector
                        .as_ref()
                        .map(|s| child_text(element, s))
                        .unwrap_or_default();
                    (name.clone(), text)
                })
                .collect(),
        })
        .collect()
}

/// Concatenated text of every descendant matching `selector`
fn child_text(element: ElementRef<'_>, selector: &Selector) -> String {
    element
        .select(selector)
        .flat_map(|child| child.text())
        .collect()
}

#[cfg(test)]
mod tests {
    use trilex_core::EntryLayout;

    use super::*;

    const PAGE: &str = r#"
        <html><body>
          <span class="link dlink">
            <h2>eat</h2>
            <div class="dpos-g hdib">noun</div>
            <div class="def-body ddef_b ddef_b-t">
bouffe</div>
          </span>
          <span class="link dlink">
            <h2>eat</h2>
            <div class="dpos-g hdib">verb</div>
            <span class="pron-info dpron-info">/iːt/</span>
            <div class="def-body ddef_b ddef_b-t">
manger</div>
          </span>
        </body></html>
    "#;

    #[test]
    fn test_extract_collects_every_block() {
        let layout = EntryLayout::bilingual();
        let pages = extract(PAGE, &[layout.rule()]);

        assert_eq!(pages.len(), 1);
        let elements = &pages[0];
        assert_eq!(elements.len(), 2);
        assert_eq!(elements[0].child("div.dpos-g.hdib"), "noun");
        assert_eq!(elements[1].child("span.pron-info.dpron-info"), "/iːt/");
        assert_eq!(elements[0].child("span.pron-info.dpron-info"), "");
    }

    #[test]
    fn test_extract_feeds_candidates() {
        let layout = EntryLayout::bilingual();
        let pages = extract(PAGE, &[layout.rule()]);

        let verb = layout.candidate(&pages[0][1], 1);
        assert_eq!(verb.word, "eat");
        assert_eq!(verb.part_of_speech, "verb");
        assert_eq!(verb.translation, "manger");
    }

    #[test]
    fn test_extract_header_blob_keeps_separator() {
        let html = "<div class=\"pr entry-body__el\">\
                    <div class=\"pos-header dpos-h\">cat&nbsp;noun&nbsp;/kæt/</div>\
                    </div>";
        let layout = EntryLayout::gloss();
        let pages = extract(html, &[layout.rule()]);

        let candidate = layout.candidate(&pages[0][0], 2);
        assert_eq!(candidate.word, "cat");
        assert_eq!(candidate.part_of_speech, "noun");
        assert_eq!(candidate.transcription, "/kæt/");
    }

    #[test]
    fn test_invalid_selector_matches_nothing() {
        let rule = ExtractionRule {
            block: "span[".to_string(),
            children: vec![],
        };

        assert_eq!(extract(PAGE, &[rule]), vec![Vec::new()]);
    }

    #[test]
    fn test_no_matches() {
        let layout = EntryLayout::gloss();
        assert!(extract("<html></html>", &[layout.rule()])[0].is_empty());
    }
}
