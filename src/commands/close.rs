use async_trait::async_trait;

use super::{Command, CommandResult};
use crate::session::Session;

pub struct CloseCommand;

#[async_trait]
impl Command for CloseCommand {
    fn name(&self) -> &str {
        "/close"
    }

    fn description(&self) -> &str {
        "deselect the viewed user"
    }

    async fn execute(&self, _args: &str, session: &mut Session) -> CommandResult {
        if session.state().selected.is_some() {
            session.close_view();
            println!("  closed");
        }
        CommandResult::Handled
    }
}
