//! The interactive session: user state plus everything around it.
//!
//! [`Session`] glues the [`UserStore`] to the user source, the search
//! term, the event bus, and the line input. Commands operate on it.

use std::time::Duration;

use anyhow::Result;

use crate::config::Config;
use crate::consts::DEFAULT_TIMEOUT_SECS;
use crate::events::{Event, EventBus};
use crate::input::LineInput;
use crate::search::filter_users;
use crate::source::UserSource;
use crate::spinner::Spinner;
use crate::store::{UserAction, UserState, UserStore};
use crate::toast::{Toast, Toaster};
use crate::user::{User, UserDraft};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("no user with id {0}")]
    UserNotFound(u64),
    #[error("no user selected (pass an id or /view one first)")]
    NoUserSelected,
}

/// Local changes made this session, for the farewell summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub added: usize,
    pub updated: usize,
    pub deleted: usize,
}

impl SessionStats {
    pub fn total(&self) -> usize {
        self.added + self.updated + self.deleted
    }
}

pub struct Session {
    store: UserStore,
    search: String,
    source: Box<dyn UserSource>,
    bus: EventBus,
    toaster: Toaster,
    input: Box<dyn LineInput>,
    config: Config,
    stats: SessionStats,
    spinner: bool,
    timeout: Duration,
}

impl Session {
    pub fn new(source: Box<dyn UserSource>, input: Box<dyn LineInput>, config: Config) -> Self {
        let bus = EventBus::default();
        let toaster = Toaster::new(&bus);
        Self {
            store: UserStore::new(),
            search: String::new(),
            source,
            bus,
            toaster,
            input,
            config,
            stats: SessionStats::default(),
            spinner: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// HTTP timeout used when the endpoint is changed mid-session.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Show a spinner while fetching (interactive terminals only).
    pub fn with_spinner(mut self, enabled: bool) -> Self {
        self.spinner = enabled;
        self
    }

    pub fn state(&self) -> &UserState {
        self.store.state()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn endpoint(&self) -> String {
        self.source.describe()
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    pub fn input(&mut self) -> &mut dyn LineInput {
        self.input.as_mut()
    }

    /// Read one line through the session's input.
    pub async fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        self.input.read_line(prompt).await
    }

    /// Swap the user source (e.g. after `/endpoint`). Does not refetch.
    pub fn set_source(&mut self, source: Box<dyn UserSource>) {
        tracing::info!(endpoint = %source.describe(), "user source changed");
        self.source = source;
    }

    /// Load users from the source. A failure is recorded in the state.
    pub async fn fetch_users(&mut self) {
        let spinner = self.spinner.then(|| Spinner::start("loading users"));
        self.store.fetch_users(self.source.as_ref()).await;
        if let Some(spinner) = spinner {
            let elapsed = spinner.stop().await;
            tracing::debug!(?elapsed, "fetch finished");
        }

        let state = self.store.state();
        let event = match &state.error {
            Some(message) => Event::FetchFailed {
                message: message.clone(),
            },
            None => Event::UsersLoaded {
                count: state.users.len(),
            },
        };
        self.bus.emit(event);
    }

    /// Recover after an operation was abandoned mid-flight (Ctrl+C). A fetch
    /// that never finished is reported as a cancelled request.
    pub fn interrupted(&mut self) {
        if self.store.state().loading {
            tracing::info!("fetch cancelled");
            self.store
                .dispatch(UserAction::SetError(Some("Request cancelled".to_string())));
        }
    }

    /// Set the search term exactly as typed; surrounding spaces count.
    pub fn set_search(&mut self, term: &str) {
        self.search = term.to_string();
    }

    pub fn clear_search(&mut self) {
        self.search.clear();
    }

    /// Users matching the current search term.
    pub fn visible_users(&self) -> Vec<&User> {
        filter_users(&self.store.state().users, &self.search)
    }

    /// Select a user for viewing.
    pub fn view(&mut self, id: u64) -> Result<User, SessionError> {
        let user = self
            .store
            .find(id)
            .cloned()
            .ok_or(SessionError::UserNotFound(id))?;
        self.store.select_user(Some(user.clone()));
        Ok(user)
    }

    pub fn close_view(&mut self) {
        self.store.select_user(None);
    }

    /// The user an edit or delete applies to: `id` if given, otherwise the
    /// selected user.
    pub fn target(&self, id: Option<u64>) -> Result<User, SessionError> {
        match id {
            Some(id) => self
                .store
                .find(id)
                .cloned()
                .ok_or(SessionError::UserNotFound(id)),
            None => self
                .store
                .state()
                .selected
                .clone()
                .ok_or(SessionError::NoUserSelected),
        }
    }

    pub fn add(&mut self, draft: UserDraft) -> User {
        let user = self.store.add_user(draft);
        tracing::info!(id = user.id, username = %user.username, "user added");
        self.stats.added += 1;
        self.bus.emit(Event::UserAdded { user: user.clone() });
        user
    }

    pub fn edit(&mut self, user: User) -> Result<(), SessionError> {
        if self.store.find(user.id).is_none() {
            return Err(SessionError::UserNotFound(user.id));
        }
        tracing::info!(id = user.id, "user updated");
        self.store.update_user(user.clone());
        self.stats.updated += 1;
        self.bus.emit(Event::UserUpdated { user });
        Ok(())
    }

    pub fn delete(&mut self, id: u64) -> Result<User, SessionError> {
        let user = self.target(Some(id))?;
        tracing::info!(id, "user deleted");
        self.store.delete_user(id);
        self.stats.deleted += 1;
        self.bus.emit(Event::UserDeleted { user: user.clone() });
        Ok(user)
    }

    /// Toasts produced since the last call.
    pub fn take_toasts(&mut self) -> Vec<Toast> {
        self.toaster.drain()
    }

    /// Print pending toasts.
    pub fn flush_toasts(&mut self) {
        self.toaster.flush();
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::input::ScriptedInput;
    use crate::source::mock::MockSource;

    pub(crate) fn sample_users() -> Vec<User> {
        [
            (1, "Leanne Graham", "Bret", "Sincere@april.biz"),
            (2, "Ervin Howell", "Antonette", "Shanna@melissa.tv"),
            (3, "Clementine Bauch", "Samantha", "Nathan@yesenia.net"),
        ]
        .into_iter()
        .map(|(id, name, username, email)| {
            User::from_draft(
                id,
                UserDraft {
                    name: name.to_string(),
                    username: username.to_string(),
                    email: email.to_string(),
                    phone: "1-770-736-8031".to_string(),
                    website: "hildegard.org".to_string(),
                },
            )
        })
        .collect()
    }

    pub(crate) fn session_with_input(lines: &[&str]) -> Session {
        Session::new(
            Box::new(MockSource::users(sample_users())),
            Box::new(ScriptedInput::new(lines.iter().copied())),
            Config::open(":memory:").unwrap(),
        )
    }

    pub(crate) async fn loaded_session(lines: &[&str]) -> Session {
        let mut session = session_with_input(lines);
        session.fetch_users().await;
        session
    }

    #[tokio::test]
    async fn fetch_populates_state() {
        let session = loaded_session(&[]).await;
        assert_eq!(session.state().users.len(), 3);
        assert!(!session.state().loading);
    }

    #[tokio::test]
    async fn fetch_failure_emits_event() {
        let mut session = Session::new(
            Box::new(MockSource::failing("Failed to fetch users")),
            Box::new(ScriptedInput::default()),
            Config::open(":memory:").unwrap(),
        );
        let mut rx = session.bus().subscribe();
        session.fetch_users().await;
        assert_eq!(
            session.state().error.as_deref(),
            Some("Failed to fetch users")
        );
        assert!(matches!(rx.try_recv().unwrap(), Event::FetchFailed { .. }));
        assert!(session.take_toasts().is_empty());
    }

    #[tokio::test]
    async fn search_filters_visible_users() {
        let mut session = loaded_session(&[]).await;
        session.set_search("ANTON");
        assert_eq!(session.search(), "ANTON");
        let visible = session.visible_users();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].username, "Antonette");
        session.clear_search();
        assert_eq!(session.visible_users().len(), 3);
    }

    #[tokio::test]
    async fn search_keeps_spaces_as_typed() {
        let mut session = loaded_session(&[]).await;
        session.set_search("graham");
        assert_eq!(session.visible_users().len(), 1);
        session.set_search("graham ");
        assert_eq!(session.search(), "graham ");
        assert!(session.visible_users().is_empty());
    }

    #[tokio::test]
    async fn view_selects_user() {
        let mut session = loaded_session(&[]).await;
        let user = session.view(2).unwrap();
        assert_eq!(user.name, "Ervin Howell");
        assert_eq!(session.state().selected.as_ref().unwrap().id, 2);
        session.close_view();
        assert!(session.state().selected.is_none());
    }

    #[tokio::test]
    async fn view_unknown_user_fails() {
        let mut session = loaded_session(&[]).await;
        assert_eq!(session.view(99), Err(SessionError::UserNotFound(99)));
    }

    #[tokio::test]
    async fn target_defaults_to_selection() {
        let mut session = loaded_session(&[]).await;
        assert_eq!(session.target(None), Err(SessionError::NoUserSelected));
        session.view(3).unwrap();
        assert_eq!(session.target(None).unwrap().id, 3);
        assert_eq!(session.target(Some(1)).unwrap().id, 1);
    }

    #[tokio::test]
    async fn add_prepends_and_toasts() {
        let mut session = loaded_session(&[]).await;
        let user = session.add(UserDraft {
            name: "New Person".to_string(),
            username: "newbie".to_string(),
            email: "new@example.com".to_string(),
            phone: "555".to_string(),
            website: String::new(),
        });
        assert_eq!(session.state().users[0].id, user.id);
        assert_eq!(session.stats().added, 1);
        let toasts = session.take_toasts();
        assert_eq!(toasts, vec![Toast::success("User added successfully!")]);
    }

    #[tokio::test]
    async fn edit_updates_and_toasts() {
        let mut session = loaded_session(&[]).await;
        let mut user = session.target(Some(1)).unwrap();
        user.name = "Leanne G.".to_string();
        session.edit(user).unwrap();
        assert_eq!(session.target(Some(1)).unwrap().name, "Leanne G.");
        assert_eq!(
            session.take_toasts(),
            vec![Toast::success("User updated successfully!")]
        );
    }

    #[tokio::test]
    async fn edit_unknown_user_fails() {
        let mut session = loaded_session(&[]).await;
        let ghost = User::from_draft(404, UserDraft::default());
        assert_eq!(session.edit(ghost), Err(SessionError::UserNotFound(404)));
        assert!(session.take_toasts().is_empty());
    }

    #[tokio::test]
    async fn delete_removes_and_toasts() {
        let mut session = loaded_session(&[]).await;
        session.view(2).unwrap();
        let removed = session.delete(2).unwrap();
        assert_eq!(removed.name, "Ervin Howell");
        assert_eq!(session.state().users.len(), 2);
        assert!(session.state().selected.is_none());
        assert_eq!(session.stats().deleted, 1);
        assert_eq!(
            session.take_toasts(),
            vec![Toast::success("User deleted successfully!")]
        );
    }

    #[tokio::test]
    async fn interrupted_fetch_becomes_error() {
        let mut session = session_with_input(&[]);
        session.store.dispatch(UserAction::SetLoading(true));
        session.interrupted();
        assert!(!session.state().loading);
        assert_eq!(session.state().error.as_deref(), Some("Request cancelled"));
    }

    #[tokio::test]
    async fn interrupted_when_idle_is_noop() {
        let mut session = loaded_session(&[]).await;
        session.interrupted();
        assert!(session.state().error.is_none());
    }

    #[test]
    fn stats_total() {
        let stats = SessionStats {
            added: 1,
            updated: 2,
            deleted: 3,
        };
        assert_eq!(stats.total(), 6);
    }

    #[tokio::test]
    async fn set_source_changes_endpoint() {
        let mut session = loaded_session(&[]).await;
        assert_eq!(session.endpoint(), "mock");
        session.set_source(Box::new(MockSource::users(vec![])));
        session.fetch_users().await;
        assert!(session.state().users.is_empty());
    }
}
