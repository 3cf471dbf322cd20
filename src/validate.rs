//! Validation for the add/edit user form.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::user::UserDraft;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));

/// An editable form field. Ordered as the form presents them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Username,
    Email,
    Phone,
    Website,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Username,
        Field::Email,
        Field::Phone,
        Field::Website,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Username => "username",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Website => "website",
        }
    }

    pub fn required(self) -> bool {
        !matches!(self, Field::Website)
    }

    pub fn get(self, draft: &UserDraft) -> &str {
        match self {
            Field::Name => &draft.name,
            Field::Username => &draft.username,
            Field::Email => &draft.email,
            Field::Phone => &draft.phone,
            Field::Website => &draft.website,
        }
    }

    pub fn set(self, draft: &mut UserDraft, value: String) {
        match self {
            Field::Name => draft.name = value,
            Field::Username => draft.username = value,
            Field::Email => draft.email = value,
            Field::Phone => draft.phone = value,
            Field::Website => draft.website = value,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One message per failing field.
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("{}", summarize(.errors))]
pub struct ValidationErrors {
    errors: BTreeMap<Field, &'static str>,
}

impl ValidationErrors {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.errors.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.errors.iter().map(|(f, m)| (*f, *m))
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }
}

fn summarize(errors: &BTreeMap<Field, &'static str>) -> String {
    errors.values().copied().collect::<Vec<_>>().join("; ")
}

/// Check `draft` against the form rules.
pub fn validate(draft: &UserDraft) -> Result<(), ValidationErrors> {
    let mut errors = BTreeMap::new();

    if draft.name.trim().is_empty() {
        errors.insert(Field::Name, "Name is required");
    }
    if draft.username.trim().is_empty() {
        errors.insert(Field::Username, "Username is required");
    }
    if draft.email.trim().is_empty() {
        errors.insert(Field::Email, "Email is required");
    } else if !EMAIL.is_match(&draft.email) {
        errors.insert(Field::Email, "Email is invalid");
    }
    if draft.phone.trim().is_empty() {
        errors.insert(Field::Phone, "Phone is required");
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors { errors })
    }
}
