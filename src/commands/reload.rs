use async_trait::async_trait;

use super::{Command, CommandResult};
use crate::render;
use crate::session::Session;

pub struct ReloadCommand;

#[async_trait]
impl Command for ReloadCommand {
    fn name(&self) -> &str {
        "/reload"
    }

    fn aliases(&self) -> &[&str] {
        &["/retry"]
    }

    fn description(&self) -> &str {
        "fetch users again (discards local changes)"
    }

    async fn execute(&self, _args: &str, session: &mut Session) -> CommandResult {
        session.fetch_users().await;
        print!("{}", render::user_list(session.state(), session.search()));
        CommandResult::Handled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::loaded_session;
    use crate::user::UserDraft;

    #[tokio::test]
    async fn reload_replaces_local_changes() {
        let mut session = loaded_session(&[]).await;
        session.add(UserDraft {
            name: "Temp".to_string(),
            username: "temp".to_string(),
            email: "t@e.st".to_string(),
            phone: "1".to_string(),
            website: String::new(),
        });
        assert_eq!(session.state().users.len(), 4);

        ReloadCommand.execute("", &mut session).await;
        assert_eq!(session.state().users.len(), 3);
        assert!(session.state().error.is_none());
    }

    #[test]
    fn metadata() {
        assert_eq!(ReloadCommand.name(), "/reload");
        assert!(ReloadCommand.aliases().contains(&"/retry"));
    }
}
