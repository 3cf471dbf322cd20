use async_trait::async_trait;

use super::{Command, CommandResult};
use crate::session::Session;

pub struct HelpCommand;

#[async_trait]
impl Command for HelpCommand {
    fn name(&self) -> &str {
        "/help"
    }

    fn aliases(&self) -> &[&str] {
        &["/h", "/?"]
    }

    fn description(&self) -> &str {
        "show this help"
    }

    async fn execute(&self, _args: &str, _session: &mut Session) -> CommandResult {
        // Not reached: CommandRegistry::dispatch prints its own help_text()
        // for /help and its aliases before any command runs.
        CommandResult::Handled
    }
}
