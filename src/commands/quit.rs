use async_trait::async_trait;

use super::{Command, CommandResult};
use crate::session::Session;

pub struct QuitCommand;

#[async_trait]
impl Command for QuitCommand {
    fn name(&self) -> &str {
        "/quit"
    }

    fn aliases(&self) -> &[&str] {
        &["quit", "exit", "/exit"]
    }

    fn description(&self) -> &str {
        "exit the REPL"
    }

    async fn execute(&self, _args: &str, _session: &mut Session) -> CommandResult {
        CommandResult::Quit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::CommandRegistry;
    use crate::commands::tests::session_with_input;

    #[tokio::test]
    async fn returns_quit() {
        let mut session = session_with_input(&[]);
        assert_eq!(
            QuitCommand.execute("", &mut session).await,
            CommandResult::Quit
        );
    }

    #[tokio::test]
    async fn aliases_quit_through_registry() {
        let reg = CommandRegistry::new();
        let mut session = session_with_input(&[]);
        for input in ["quit", "exit", "/exit"] {
            assert_eq!(reg.dispatch(input, &mut session).await, CommandResult::Quit);
        }
    }
}
