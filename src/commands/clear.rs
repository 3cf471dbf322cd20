use async_trait::async_trait;

use super::{Command, CommandResult};
use crate::render;
use crate::session::Session;

pub struct ClearCommand;

#[async_trait]
impl Command for ClearCommand {
    fn name(&self) -> &str {
        "/clear"
    }

    fn description(&self) -> &str {
        "clear the search and show everyone"
    }

    async fn execute(&self, _args: &str, session: &mut Session) -> CommandResult {
        session.clear_search();
        print!("{}", render::user_list(session.state(), session.search()));
        CommandResult::Handled
    }
}
