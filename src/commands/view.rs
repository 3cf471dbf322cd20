use async_trait::async_trait;

use super::{Command, CommandResult, parse_id};
use crate::render;
use crate::session::Session;

pub struct ViewCommand;

#[async_trait]
impl Command for ViewCommand {
    fn name(&self) -> &str {
        "/view"
    }

    fn aliases(&self) -> &[&str] {
        &["/v"]
    }

    fn usage(&self) -> &str {
        "<id>"
    }

    fn description(&self) -> &str {
        "show full details for a user and select them"
    }

    async fn execute(&self, args: &str, session: &mut Session) -> CommandResult {
        let id = match parse_id(args) {
            Ok(Some(id)) => id,
            Ok(None) => {
                eprintln!("  usage: /view <id>");
                return CommandResult::Handled;
            }
            Err(e) => {
                eprintln!("  ✗ {e}");
                return CommandResult::Handled;
            }
        };

        match session.view(id) {
            Ok(user) => print!("{}", render::user_details(&user)),
            Err(e) => eprintln!("  ✗ {e}"),
        }
        CommandResult::Handled
    }
}
