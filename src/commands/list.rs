use async_trait::async_trait;

use super::{Command, CommandResult};
use crate::render;
use crate::session::Session;

pub struct ListCommand;

#[async_trait]
impl Command for ListCommand {
    fn name(&self) -> &str {
        "/list"
    }

    fn aliases(&self) -> &[&str] {
        &["/ls"]
    }

    fn description(&self) -> &str {
        "show users matching the current search"
    }

    async fn execute(&self, _args: &str, session: &mut Session) -> CommandResult {
        if !session.search().is_empty() {
            println!("  search: {}", session.search());
        }
        print!("{}", render::user_list(session.state(), session.search()));
        CommandResult::Handled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::loaded_session;

    #[tokio::test]
    async fn returns_handled() {
        let mut session = loaded_session(&[]).await;
        assert_eq!(
            ListCommand.execute("", &mut session).await,
            CommandResult::Handled
        );
    }

    #[test]
    fn metadata() {
        assert_eq!(ListCommand.name(), "/list");
        assert_eq!(ListCommand.aliases(), &["/ls"]);
    }
}
