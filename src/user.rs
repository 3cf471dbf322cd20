//! User records as served by the remote `/users` endpoint.

use serde::{Deserialize, Serialize};

use crate::consts::PLACEHOLDER;

/// A full user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub address: Address,
    #[serde(default)]
    pub company: Company,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
    #[serde(default)]
    pub geo: Geo,
}

/// Coordinates are kept as strings, the way the API returns them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Geo {
    pub lat: String,
    pub lng: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    #[serde(rename = "catchPhrase")]
    pub catch_phrase: String,
    pub bs: String,
}

/// The user-editable subset of a [`User`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserDraft {
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub website: String,
}

impl Address {
    fn placeholder() -> Self {
        Self {
            street: PLACEHOLDER.to_string(),
            suite: PLACEHOLDER.to_string(),
            city: PLACEHOLDER.to_string(),
            zipcode: PLACEHOLDER.to_string(),
            geo: Geo {
                lat: "0".to_string(),
                lng: "0".to_string(),
            },
        }
    }
}

impl Company {
    fn placeholder() -> Self {
        Self {
            name: PLACEHOLDER.to_string(),
            catch_phrase: PLACEHOLDER.to_string(),
            bs: PLACEHOLDER.to_string(),
        }
    }
}

impl User {
    /// Build a locally created user. Address and company are not collected
    /// by the form, so they get placeholders.
    pub fn from_draft(id: u64, draft: UserDraft) -> Self {
        Self {
            id,
            name: draft.name,
            username: draft.username,
            email: draft.email,
            phone: draft.phone,
            website: draft.website,
            address: Address::placeholder(),
            company: Company::placeholder(),
        }
    }

    /// Copy of this user with the editable fields replaced.
    pub fn with_draft(&self, draft: UserDraft) -> Self {
        Self {
            name: draft.name,
            username: draft.username,
            email: draft.email,
            phone: draft.phone,
            website: draft.website,
            ..self.clone()
        }
    }

    pub fn draft(&self) -> UserDraft {
        UserDraft {
            name: self.name.clone(),
            username: self.username.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            website: self.website.clone(),
        }
    }

    /// Deterministic profile picture for this user.
    pub fn avatar_url(&self, size: u32) -> String {
        format!("https://picsum.photos/seed/{}/{size}/{size}", self.id)
    }

    /// Website as an openable URL (the API omits the scheme).
    pub fn website_url(&self) -> Option<String> {
        let site = self.website.trim();
        if site.is_empty() {
            return None;
        }
        if site.starts_with("http://") || site.starts_with("https://") {
            Some(site.to_string())
        } else {
            Some(format!("https://{site}"))
        }
    }
}
