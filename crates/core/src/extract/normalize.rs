//! Label normalization for dynamically discovered fields.

use crate::parse::Element;

/// Key used for a sidebar value that has no label in front of it.
///
/// On npm package pages the weekly download counter is the only sidebar value
/// rendered without a heading, so an unlabeled value is keyed as such. This is
/// a property of that page layout, not a general rule.
pub const DEFAULT_SIDEBAR_KEY: &str = "weeklyDownloads";

/// Converts a human readable label into a camelCase key.
///
/// The first word gets its first letter lower-cased, every following word
/// gets its first letter upper-cased, and the words are joined without a
/// separator. The rest of each word is kept as is.
///
/// # Example
///
/// ```rust
/// use npmscrape_core::extract::normalize_label;
///
/// assert_eq!(normalize_label("Weekly Downloads"), "weeklyDownloads");
/// assert_eq!(normalize_label("total files"), "totalFiles");
/// ```
pub fn normalize_label(label: &str) -> String {
    let mut key = String::with_capacity(label.len());
    for (i, word) in label.split_whitespace().enumerate() {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            if i == 0 {
                key.extend(first.to_lowercase());
            } else {
                key.extend(first.to_uppercase());
            }
            key.push_str(chars.as_str());
        }
    }
    key
}

/// Key for a sidebar value, derived from the element right before it.
pub fn sidebar_key(label: Option<Element<'_>>) -> String {
    let key = label.map(|el| normalize_label(&el.text())).unwrap_or_default();
    if key.is_empty() {
        tracing::debug!("unlabeled sidebar value, using {DEFAULT_SIDEBAR_KEY}");
        DEFAULT_SIDEBAR_KEY.to_string()
    } else {
        key
    }
}
