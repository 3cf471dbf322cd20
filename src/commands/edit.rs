use async_trait::async_trait;

use super::{Command, CommandResult, parse_id};
use crate::form::{Submission, UserForm};
use crate::session::Session;

pub struct EditCommand;

#[async_trait]
impl Command for EditCommand {
    fn name(&self) -> &str {
        "/edit"
    }

    fn aliases(&self) -> &[&str] {
        &["/e"]
    }

    fn usage(&self) -> &str {
        "[id]"
    }

    fn description(&self) -> &str {
        "edit a user (defaults to the viewed user)"
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

        match UserForm::edit(&user).run(session.input()).await {
            Ok(Some(Submission::Edit(updated))) => {
                if let Err(e) = session.edit(updated) {
                    eprintln!("  ✗ {e}");
                }
            }
            Ok(Some(Submission::Add(_))) => {
                tracing::error!("edit form returned an add submission");
            }
            Ok(None) => println!("  cancelled"),
            Err(e) => eprintln!("  ✗ failed to read form input: {e}"),
        }
        CommandResult::Handled
    }
}
