//! Rules for user profile pages.

use serde::{Deserialize, Serialize};

use crate::package::Package;
use crate::parse::Document;
use crate::Result;

pub const USERNAME: &str = "main div._73a8e6f0 > div:nth-child(2) > h2";
pub const DISPLAY_NAME: &str = "main div._73a8e6f0 > div:nth-child(2) > div > div";
pub const AVATAR: &str = "main div._73a8e6f0 > div:nth-child(1) > a > img";
/// Linked accounts (GitHub, Twitter, ...).
pub const CONNECTIONS: &str = "main div._73a8e6f0 > div:nth-child(2) > ul";
/// Grid whose children are the user's package cards.
pub const PACKAGE_GRID: &str = "main div.d2f60d44 > div > div";
pub const PACKAGE_NAME: &str = "a > h3";

/// Profile header of a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSnippet {
    pub username: String,
    pub name: String,
    /// Avatar image URL.
    pub avatar: String,
}

/// An account linked from a user profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    /// Account name as displayed.
    pub username: String,
    /// Link target.
    pub link: String,
}

/// Extracts the profile header.
pub fn snippet(doc: &Document) -> Result<UserSnippet> {
    Ok(UserSnippet {
        username: doc.select_first(USERNAME)?.map(|el| el.text_trimmed()).unwrap_or_default(),
        name: doc.select_first(DISPLAY_NAME)?.map(|el| el.text_trimmed()).unwrap_or_default(),
        avatar: doc
            .select_first(AVATAR)?
            .and_then(|img| img.attr("src"))
            .unwrap_or_default()
            .to_string(),
    })
}

/// Extracts linked accounts in page order.
pub fn connections(doc: &Document) -> Result<Vec<Connection>> {
    let mut data = Vec::new();
    for list in doc.select(CONNECTIONS)? {
        for item in list.children() {
            let link = item.select_first("a")?;
            data.push(Connection {
                username: link.map(|a| a.text_trimmed()).unwrap_or_default(),
                link: link.and_then(|a| a.attr("href")).unwrap_or_default().to_string(),
            });
        }
    }
    Ok(data)
}

/// Extracts the packages published by the user.
pub fn packages(doc: &Document) -> Result<Vec<Package>> {
    let mut data = Vec::new();
    for grid in doc.select(PACKAGE_GRID)? {
        for card in grid.children() {
            data.push(Package::new(card.select_text(PACKAGE_NAME)?.trim()));
        }
    }
    Ok(data)
}
