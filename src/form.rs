//! Interactive add/edit form.
//!
//! Each field is prompted with its current value as the default. After a
//! pass the draft is validated; only the failing fields are prompted again,
//! with their error shown, until the draft is valid or the user cancels.

use anyhow::Result;

use crate::input::LineInput;
use crate::user::{User, UserDraft};
use crate::validate::{Field, validate};

/// Typing this at any field prompt abandons the form.
pub const CANCEL: &str = "/cancel";

/// Typing this at a field prompt clears the field.
pub const CLEAR: &str = "-";

pub fn label(field: Field) -> &'static str {
    match field {
        Field::Name => "Name *",
        Field::Username => "Username *",
        Field::Email => "Email *",
        Field::Phone => "Phone *",
        Field::Website => "Website",
    }
}

pub fn placeholder(field: Field) -> &'static str {
    match field {
        Field::Name => "Enter full name",
        Field::Username => "Enter username",
        Field::Email => "Enter email address",
        Field::Phone => "Enter phone number",
        Field::Website => "Enter website URL",
    }
}

/// What a submitted form produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Add(UserDraft),
    Edit(User),
}

enum Mode {
    Add,
    Edit(User),
}

pub struct UserForm {
    mode: Mode,
    draft: UserDraft,
}

impl UserForm {
    pub fn add() -> Self {
        Self {
            mode: Mode::Add,
            draft: UserDraft::default(),
        }
    }

    pub fn edit(user: &User) -> Self {
        Self {
            draft: user.draft(),
            mode: Mode::Edit(user.clone()),
        }
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            Mode::Add => "Add New User",
            Mode::Edit(_) => "Edit User",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            Mode::Add => "Add User",
            Mode::Edit(_) => "Update User",
        }
    }

    pub fn draft(&self) -> &UserDraft {
        &self.draft
    }

    fn prompt_for(&self, field: Field) -> String {
        let current = field.get(&self.draft);
        if current.is_empty() {
            format!("  {} ({}): ", label(field), placeholder(field))
        } else {
            format!("  {} [{}]: ", label(field), current)
        }
    }

    /// Prompt until the draft validates. `Ok(None)` means cancelled.
    pub async fn run(mut self, input: &mut dyn LineInput) -> Result<Option<Submission>> {
        println!("  {}  (Enter keeps a value, `{CLEAR}` clears it, `{CANCEL}` aborts)", self.title());

        let mut pending: Vec<Field> = Field::ALL.to_vec();
        loop {
            for field in pending {
                let Some(line) = input.read_line(&self.prompt_for(field)).await? else {
                    return Ok(None);
                };
                match line.trim() {
                    CANCEL => return Ok(None),
                    "" => {}
                    CLEAR => field.set(&mut self.draft, String::new()),
                    _ => field.set(&mut self.draft, line),
                }
            }

            match validate(&self.draft) {
                Ok(()) => break,
                Err(errors) => {
                    for (field, message) in errors.iter() {
                        println!("    ✗ {}: {message}", label(field));
                    }
                    pending = errors.fields().collect();
                }
            }
        }

        println!("  → {}", self.submit_label());
        Ok(Some(match self.mode {
            Mode::Add => Submission::Add(self.draft),
            Mode::Edit(user) => Submission::Edit(user.with_draft(self.draft)),
        }))
    }
}
