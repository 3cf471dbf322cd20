//! In-memory user state and the reducer that drives it.
//!
//! All changes go through [`reduce`], a pure function from the current
//! [`UserState`] and a [`UserAction`] to the next state. [`UserStore`] owns
//! the state and wraps the reducer with the higher-level operations the
//! commands call.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::source::UserSource;
use crate::user::{User, UserDraft};

/// Everything the list view renders from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserState {
    pub users: Vec<User>,
    pub loading: bool,
    pub error: Option<String>,
    pub selected: Option<User>,
}

/// A state transition request.
#[derive(Debug, Clone)]
pub enum UserAction {
    SetLoading(bool),
    /// Replace the list with freshly fetched users. Clears loading and error.
    SetUsers(Vec<User>),
    /// Record (or clear) a fetch error. Clears loading.
    SetError(Option<String>),
    SetSelectedUser(Option<User>),
    /// Prepend a user.
    AddUser(User),
    /// Replace the user with the same id, including the selection.
    UpdateUser(User),
    /// Remove the user with this id, unselecting it if selected.
    DeleteUser(u64),
}

/// Compute the next state.
pub fn reduce(state: UserState, action: UserAction) -> UserState {
    match action {
        UserAction::SetLoading(loading) => UserState { loading, ..state },
        UserAction::SetUsers(users) => UserState {
            users,
            loading: false,
            error: None,
            ..state
        },
        UserAction::SetError(error) => UserState {
            error,
            loading: false,
            ..state
        },
        UserAction::SetSelectedUser(selected) => UserState { selected, ..state },
        UserAction::AddUser(user) => {
            let mut users = Vec::with_capacity(state.users.len() + 1);
            users.push(user);
            users.extend(state.users);
            UserState { users, ..state }
        }
        UserAction::UpdateUser(user) => {
            let users = state
                .users
                .into_iter()
                .map(|u| if u.id == user.id { user.clone() } else { u })
                .collect();
            let selected = match state.selected {
                Some(s) if s.id == user.id => Some(user),
                other => other,
            };
            UserState {
                users,
                selected,
                ..state
            }
        }
        UserAction::DeleteUser(id) => {
            let users = state.users.into_iter().filter(|u| u.id != id).collect();
            let selected = state.selected.filter(|s| s.id != id);
            UserState {
                users,
                selected,
                ..state
            }
        }
    }
}

/// Owns the [`UserState`] and applies actions to it.
#[derive(Debug, Default)]
pub struct UserStore {
    state: UserState,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            state: UserState {
                users,
                ..UserState::default()
            },
        }
    }

    pub fn state(&self) -> &UserState {
        &self.state
    }

    pub fn dispatch(&mut self, action: UserAction) {
        tracing::trace!(?action, "dispatch");
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, action);
    }

    /// Load users from `source`. Failures land in `state().error`.
    pub async fn fetch_users(&mut self, source: &dyn UserSource) {
        self.dispatch(UserAction::SetLoading(true));
        match source.fetch_users().await {
            Ok(users) => {
                tracing::info!(count = users.len(), "users loaded");
                self.dispatch(UserAction::SetUsers(users));
            }
            Err(e) => {
                let message = format!("{e:#}");
                tracing::warn!(error = %message, "failed to load users");
                self.dispatch(UserAction::SetError(Some(message)));
            }
        }
    }

    /// Create a user from `draft` and prepend it. Returns the new record.
    pub fn add_user(&mut self, draft: UserDraft) -> User {
        let user = User::from_draft(self.next_id(), draft);
        self.dispatch(UserAction::AddUser(user.clone()));
        user
    }

    pub fn update_user(&mut self, user: User) {
        self.dispatch(UserAction::UpdateUser(user));
    }

    pub fn delete_user(&mut self, id: u64) {
        self.dispatch(UserAction::DeleteUser(id));
    }

    pub fn select_user(&mut self, user: Option<User>) {
        self.dispatch(UserAction::SetSelectedUser(user));
    }

    pub fn find(&self, id: u64) -> Option<&User> {
        self.state.users.iter().find(|u| u.id == id)
    }

    fn next_id(&self) -> u64 {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        self.next_id_at(now)
    }

    /// `now` unless taken, otherwise one past the current maximum.
    fn next_id_at(&self, now: u64) -> u64 {
        if self.find(now).is_none() {
            return now;
        }
        self.state
            .users
            .iter()
            .map(|u| u.id)
            .max()
            .unwrap_or(now)
            .saturating_add(1)
    }
}
