//! HTML parsing and DOM navigation.
//!
//! This module provides the [`Document`] and [`Element`] types that extraction
//! rules query with CSS selectors.
//!
//! # Example
//!
//! ```rust
//! use npmscrape_core::parse::Document;
//!
//! let html = r#"
//!     <html>
//!         <body>
//!             <h1>Title</h1>
//!             <p class="content">Paragraph</p>
//!         </body>
//!     </html>
//! "#;
//!
//! let doc = Document::parse(html);
//! let title = doc.select_first("h1").unwrap().map(|h1| h1.text_trimmed());
//! assert_eq!(title.as_deref(), Some("Title"));
//! ```

use scraper::{ElementRef, Html, Selector};

use crate::{NpmError, Result};

fn selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| NpmError::InvalidSelector(format!("{selector}: {e}")))
}

/// Represents a parsed HTML document.
///
/// # Example
///
/// ```rust
/// use npmscrape_core::parse::Document;
///
/// let html = "<html><head><title>Test</title></head><body><p>Hello</p></body></html>";
/// let doc = Document::parse(html);
/// assert_eq!(doc.title(), Some("Test".to_string()));
/// ```
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses HTML from a string.
    ///
    /// HTML parsing never fails: malformed markup is repaired the way browsers do.
    pub fn parse(html: &str) -> Self {
        Self { html: Html::parse_document(html) }
    }

    /// Gets the underlying `scraper::Html` instance.
    pub fn html(&self) -> &Html {
        &self.html
    }

    /// Selects elements using a CSS selector, in document order.
    ///
    /// # Errors
    ///
    /// Returns [`NpmError::InvalidSelector`] if the selector is invalid.
    ///
    /// # Example
    ///
    /// ```rust
    /// use npmscrape_core::parse::Document;
    ///
    /// let html = r#"<p class="content">First</p><p class="content">Second</p>"#;
    /// let doc = Document::parse(html);
    /// let elements = doc.select("p.content").unwrap();
    /// assert_eq!(elements.len(), 2);
    /// ```
    pub fn select(&'_ self, selector_str: &str) -> Result<Vec<Element<'_>>> {
        let sel = selector(selector_str)?;
        Ok(self.html.select(&sel).map(Element::new).collect())
    }

    /// Selects the first element matching a CSS selector.
    pub fn select_first(&'_ self, selector_str: &str) -> Result<Option<Element<'_>>> {
        let sel = selector(selector_str)?;
        Ok(self.html.select(&sel).next().map(Element::new))
    }

    /// Gets the title of the document.
    pub fn title(&self) -> Option<String> {
        let sel = Selector::parse("title").ok()?;
        self.html.select(&sel).next().map(|el| el.text().collect::<String>())
    }

    /// Gets all text content from the document.
    pub fn text_content(&self) -> String {
        self.html.root_element().text().collect()
    }
}

/// A wrapper around scraper's ElementRef for easier DOM navigation.
///
/// # Example
///
/// ```rust
/// use npmscrape_core::parse::Document;
///
/// let html = r#"<a href="https://example.com">Link text</a>"#;
/// let doc = Document::parse(html);
/// let link = &doc.select("a").unwrap()[0];
///
/// assert_eq!(link.text(), "Link text");
/// assert_eq!(link.attr("href"), Some("https://example.com"));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Element<'a> {
    element: ElementRef<'a>,
}

impl<'a> Element<'a> {
    fn new(element: ElementRef<'a>) -> Self {
        Self { element }
    }

    /// Gets the inner HTML of this element.
    pub fn inner_html(&self) -> String {
        self.element.inner_html()
    }

    /// Gets the outer HTML of this element.
    pub fn outer_html(&self) -> String {
        self.element.html()
    }

    /// Gets the concatenation of all text nodes within this element.
    pub fn text(&self) -> String {
        self.element.text().collect()
    }

    /// Gets the text content with surrounding whitespace removed.
    pub fn text_trimmed(&self) -> String {
        self.text().trim().to_string()
    }

    /// Gets the value of an attribute, or `None` when it is not present.
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.element.value().attr(name)
    }

    /// Gets the lowercase tag name.
    pub fn tag_name(&self) -> String {
        self.element.value().name().to_lowercase()
    }

    /// Selects descendant elements using a CSS selector.
    ///
    /// # Errors
    ///
    /// Returns [`NpmError::InvalidSelector`] if the selector is invalid.
    pub fn select(&self, selector_str: &str) -> Result<Vec<Element<'a>>> {
        let sel = selector(selector_str)?;
        Ok(self.element.select(&sel).map(Element::new).collect())
    }

    /// Selects the first descendant matching a CSS selector.
    pub fn select_first(&self, selector_str: &str) -> Result<Option<Element<'a>>> {
        let sel = selector(selector_str)?;
        Ok(self.element.select(&sel).next().map(Element::new))
    }

    /// Text of the first descendant matching `selector_str`, empty when none does.
    pub fn select_text(&self, selector_str: &str) -> Result<String> {
        Ok(self.select_first(selector_str)?.map(|el| el.text()).unwrap_or_default())
    }

    /// Child elements, skipping text and comment nodes.
    pub fn children(&self) -> Vec<Element<'a>> {
        self.element.children().filter_map(ElementRef::wrap).map(Element::new).collect()
    }

    /// Parent element, if the parent is an element.
    pub fn parent(&self) -> Option<Element<'a>> {
        self.element.parent().and_then(ElementRef::wrap).map(Element::new)
    }

    /// Closest preceding sibling that is an element.
    pub fn prev_sibling(&self) -> Option<Element<'a>> {
        self.element.prev_siblings().find_map(ElementRef::wrap).map(Element::new)
    }

    /// Closest following sibling that is an element.
    pub fn next_sibling(&self) -> Option<Element<'a>> {
        self.element.next_siblings().find_map(ElementRef::wrap).map(Element::new)
    }
}
