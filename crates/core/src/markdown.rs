//! HTML to Markdown conversion for package readmes.

#[cfg(feature = "markdown")]
use crate::NpmError;
use crate::Result;

/// Options forwarded verbatim to the Markdown converter.
///
/// Consumed by a conversion: htmd's option set cannot be cloned.
#[derive(Debug, Default)]
pub struct MarkdownOptions {
    /// Tags dropped together with their content (e.g. `script`, `style`).
    pub skip_tags: Vec<String>,
    /// Converter formatting options (heading style, list markers, code fences).
    #[cfg(feature = "markdown")]
    pub options: htmd::options::Options,
}

/// Convert an HTML fragment to Markdown using htmd
#[cfg(feature = "markdown")]
pub fn html_to_markdown(html: &str, options: MarkdownOptions) -> Result<String> {
    let mut builder = htmd::HtmlToMarkdown::builder().options(options.options);
    // htmd rejects an empty skip list
    if !options.skip_tags.is_empty() {
        builder = builder.skip_tags(options.skip_tags.iter().map(String::as_str).collect());
    }
    let converter = builder.build();

    converter
        .convert(html)
        .map_err(|e| NpmError::MarkdownConversion(e.to_string()))
}

/// Fallback HTML to text conversion when markdown feature is disabled
#[cfg(not(feature = "markdown"))]
pub fn html_to_markdown(html: &str, options: MarkdownOptions) -> Result<String> {
    let _ = options;
    let doc = scraper::Html::parse_fragment(html);
    Ok(doc.root_element().text().collect::<String>())
}
