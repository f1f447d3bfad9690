//! Rules for the package search results page.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::package::Package;
use crate::parse::Document;
use crate::Result;

/// Heading holding the "N packages found" count.
pub const TOTAL: &str = "main > div.a9b7335e > div > div:nth-child(1) > h2";
/// Container whose children are the result sections.
pub const RESULTS: &str = "main > div._23fffac0 > div";
/// Package name link inside a result section.
pub const RESULT_NAME: &str = "div.w-80 > div.flex.flex-row.items-end.pr3 > a";

static LEADING_COUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d[\d,]*)").expect("leading count pattern is valid"));

/// One page of search results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Packages on this page, in ranking order.
    pub packages: Vec<Package>,
    /// Total number of matches; `None` when the count could not be read.
    pub total: Option<u64>,
}

/// Reads the integer at the start of `text`, ignoring thousands separators.
///
/// Trailing text is ignored ("1,234 packages found" reads as 1234). Text that
/// does not start with a digit has no count.
pub fn parse_total(text: &str) -> Option<u64> {
    let digits = LEADING_COUNT.captures(text)?.get(1)?.as_str().replace(',', "");
    digits.parse().ok()
}

/// Extracts a search results page.
pub fn search(doc: &Document) -> Result<SearchResult> {
    let total = doc.select_first(TOTAL)?.and_then(|h2| parse_total(&h2.text()));
    if total.is_none() {
        tracing::debug!("search result count not found");
    }

    let mut packages = Vec::new();
    for container in doc.select(RESULTS)? {
        for section in container.children() {
            packages.push(Package::new(section.select_text(RESULT_NAME)?.trim()));
        }
    }

    Ok(SearchResult { packages, total })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("42 packages found", Some(42))]
    #[case("  1,234 packages found", Some(1234))]
    #[case("7", Some(7))]
    #[case("packages found", None)]
    #[case("", None)]
    fn test_parse_total(#[case] text: &str, #[case] expected: Option<u64>) {
        assert_eq!(parse_total(text), expected);
    }

    #[test]
    fn test_search_page() {
        let html = r#"
            <main>
                <div class="a9b7335e"><div><div><h2>2 packages found</h2></div><div><h2>sort</h2></div></div></div>
                <div class="_23fffac0"><div>
                    <section><div class="w-80"><div class="flex flex-row items-end pr3"><a>lodash</a></div></div></section>
                    <section><div class="w-80"><div class="flex flex-row items-end pr3"><a>lowdb</a></div></div></section>
                </div></div>
            </main>
        "#;
        let result = search(&Document::parse(html)).unwrap();
        assert_eq!(result.total, Some(2));
        assert_eq!(result.packages, vec![Package::new("lodash"), Package::new("lowdb")]);
    }

    #[test]
    fn test_search_page_with_changed_layout() {
        let result = search(&Document::parse("<main><h1>Something else</h1></main>")).unwrap();
        assert_eq!(result.total, None);
        assert!(result.packages.is_empty());
    }
}
