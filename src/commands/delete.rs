use async_trait::async_trait;

use super::{Command, CommandResult, parse_id};
use crate::render;
use crate::session::Session;

pub struct DeleteCommand;

#[async_trait]
impl Command for DeleteCommand {
    fn name(&self) -> &str {
        "/delete"
    }

    fn aliases(&self) -> &[&str] {
        &["/rm"]
    }

    fn usage(&self) -> &str {
        "[id]"
    }

    fn description(&self) -> &str {
        "delete a user after confirmation (defaults to the viewed user)"
    }

    async fn execute(&self, args: &str, session: &mut Session) -> CommandResult {
        let id = match parse_id(args) {
            Ok(id) => id,
            Err(e) => {
                eprintln!("  ✗ {e}");
                return CommandResult::Handled;
            }
        };
        let user = match session.target(id) {
            Ok(user) => user,
            Err(e) => {
                eprintln!("  ✗ {e}");
                return CommandResult::Handled;
            }
        };

        print!("{}", render::delete_prompt(&user));
        let answer = match session.read_line("\n  Delete User? [y/N]: ").await {
            Ok(answer) => answer.unwrap_or_default(),
            Err(e) => {
                eprintln!("  ✗ failed to read input: {e}");
                return CommandResult::Handled;
            }
        };

        if !is_yes(&answer) {
            println!("  cancelled");
            return CommandResult::Handled;
        }

        if let Err(e) = session.delete(user.id) {
            eprintln!("  ✗ {e}");
        }
        CommandResult::Handled
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
