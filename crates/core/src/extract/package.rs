//! Rules for package pages (main tab, dependencies tab, versions tab).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::extract::normalize::sidebar_key;
use crate::package::Package;
use crate::parse::Document;
use crate::user::User;
use crate::Result;

/// Meta tag carrying the package description.
pub const DESCRIPTION: &str = r#"head > meta[name="description"]"#;
/// Sidebar holding install command, downloads, version, license and friends.
pub const SIDEBAR_VALUES: &str = "#top > div.fdbf4038 p";
/// Keyword list under the readme.
pub const KEYWORDS: &str = "#top > div._6620a4fd > section > div.pv4 > ul";
/// Rendered readme container.
pub const README: &str = "#readme";
/// One list per dependency group, normal dependencies first.
pub const DEPENDENCY_GROUPS: &str = "#dependencies > ul";
/// Version history list on the versions tab.
pub const VERSION_HISTORY: &str = "#versions > div > ul:nth-child(5)";
/// Collaborator avatars.
pub const COLLABORATOR_AVATARS: &str = "div > a > img";

/// Whatever labeled fields the package page exposes.
///
/// Field keys are the camelCase form of the labels on the page (see
/// [`normalize_label`](crate::extract::normalize_label)), kept in page order.
/// The set of keys is not fixed: it follows the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageSnippet {
    /// Keywords listed on the page.
    pub keywords: Vec<String>,
    /// Labeled fields, e.g. `description`, `install`, `version`, `license`.
    #[serde(flatten)]
    pub fields: IndexMap<String, String>,
}

impl PackageSnippet {
    /// Gets a field by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Number of labeled fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether no labeled field was found.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over labeled fields in page order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Dependencies of a package, split the way the page lists them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencySet {
    pub normal: Vec<Package>,
    pub dev: Vec<Package>,
}

/// Extracts the snippet from a package main page.
pub fn snippet(doc: &Document) -> Result<PackageSnippet> {
    let mut result = PackageSnippet::default();

    if let Some(content) = doc.select_first(DESCRIPTION)?.and_then(|meta| meta.attr("content")) {
        result.fields.insert("description".to_string(), content.to_string());
    }

    for value in doc.select(SIDEBAR_VALUES)? {
        result.fields.insert(sidebar_key(value.prev_sibling()), value.text_trimmed());
    }

    for list in doc.select(KEYWORDS)? {
        for item in list.children() {
            result.keywords.push(item.select_text("a")?.trim().to_string());
        }
    }

    Ok(result)
}

/// Extracts dependencies from the dependencies tab.
///
/// The first list is the normal dependencies; every later list, however many
/// the page has, is folded into `dev`.
pub fn dependencies(doc: &Document) -> Result<DependencySet> {
    let mut data = DependencySet::default();

    for (i, group) in doc.select(DEPENDENCY_GROUPS)?.into_iter().enumerate() {
        let target = if i == 0 { &mut data.normal } else { &mut data.dev };
        for item in group.children() {
            target.push(Package::new(item.select_text("a")?.trim()));
        }
    }

    Ok(data)
}

/// Extracts the raw readme HTML, empty when the page has no readme.
pub fn readme(doc: &Document) -> Result<String> {
    Ok(doc.select_first(README)?.map(|el| el.inner_html()).unwrap_or_default())
}

/// Extracts the version log of `name` from the versions tab.
pub fn versions(doc: &Document, name: &str) -> Result<Vec<Package>> {
    let mut data = Vec::new();
    for list in doc.select(VERSION_HISTORY)? {
        for item in list.children() {
            data.push(Package::with_version(name, item.select_text("a")?.trim()));
        }
    }
    Ok(data)
}

/// Extracts collaborators from the package main page.
pub fn collaborators(doc: &Document) -> Result<Vec<User>> {
    Ok(doc
        .select(COLLABORATOR_AVATARS)?
        .into_iter()
        .map(|img| User::new(img.attr("title").unwrap_or_default()))
        .collect())
}
