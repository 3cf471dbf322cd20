use async_trait::async_trait;

use super::{Command, CommandResult};
use crate::form::{Submission, UserForm};
use crate::session::Session;

pub struct AddCommand;

#[async_trait]
impl Command for AddCommand {
    fn name(&self) -> &str {
        "/add"
    }

    fn aliases(&self) -> &[&str] {
        &["/new"]
    }

    fn description(&self) -> &str {
        "add a new user"
    }

    async fn execute(&self, _args: &str, session: &mut Session) -> CommandResult {
        match UserForm::add().run(session.input()).await {
            Ok(Some(Submission::Add(draft))) => {
                let user = session.add(draft);
                println!("  #{} {}  @{}", user.id, user.name, user.username);
            }
            Ok(Some(Submission::Edit(_))) => {
                tracing::error!("add form returned an edit submission");
            }
            Ok(None) => println!("  cancelled"),
            Err(e) => eprintln!("  ✗ failed to read form input: {e}"),
        }
        CommandResult::Handled
    }
}
