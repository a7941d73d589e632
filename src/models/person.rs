use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::wire::RawPerson;

/// A person reference: display name plus avatar URLs keyed by size token ("24x24", "48x48").
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Person {
    pub display_name: String,
    pub avatar_urls: HashMap<String, String>,
}

impl Person {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            avatar_urls: HashMap::new(),
        }
    }

    pub fn with_avatar(mut self, size: &str, url: impl Into<String>) -> Self {
        self.avatar_urls.insert(size.to_string(), url.into());
        self
    }

    /// First avatar found among `sizes`, in order.
    pub fn avatar_url(&self, sizes: &[&str]) -> Option<&str> {
        sizes
            .iter()
            .find_map(|size| self.avatar_urls.get(*size))
            .map(String::as_str)
    }
}

impl From<RawPerson> for Person {
    fn from(raw: RawPerson) -> Self {
        Self {
            display_name: raw.display_name,
            avatar_urls: raw.avatar_urls.unwrap_or_default(),
        }
    }
}

/// The four named role references carried by a ticket.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Roles {
    pub engineer: Option<Person>,
    pub owner: Option<Person>,
    pub reviewer: Option<Person>,
    pub qa: Option<Person>,
}

/// Role names after fallbacks: engineer and owner default to the assignee,
/// reviewer and QA to "Unassigned".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoles {
    pub engineer: String,
    pub owner: String,
    pub reviewer: String,
    pub qa: String,
}
