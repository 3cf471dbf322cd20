use async_trait::async_trait;

use super::{Command, CommandResult, parse_id};
use crate::session::Session;

pub struct OpenCommand;

#[async_trait]
impl Command for OpenCommand {
    fn name(&self) -> &str {
        "/open"
    }

    fn usage(&self) -> &str {
        "[id]"
    }

    fn description(&self) -> &str {
        "open a user's website in the browser"
    }

    async fn execute(&self, args: &str, session: &mut Session) -> CommandResult {
        let user = match parse_id(args).map(|id| session.target(id)) {
            Ok(Ok(user)) => user,
            Ok(Err(e)) => {
                eprintln!("  ✗ {e}");
                return CommandResult::Handled;
            }
            Err(e) => {
                eprintln!("  ✗ {e}");
                return CommandResult::Handled;
            }
        };

        let Some(url) = user.website_url() else {
            println!("  {} has no website", user.name);
            return CommandResult::Handled;
        };

        // Headless sessions (SSH, CI) can't open a browser; show the URL instead
        if let Err(e) = open::that(&url) {
            tracing::debug!(error = %e, %url, "could not launch browser");
        }
        println!("  {url}");
        CommandResult::Handled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::loaded_session;

    #[tokio::test]
    async fn nothing_selected_is_handled() {
        let mut session = loaded_session(&[]).await;
        assert_eq!(
            OpenCommand.execute("", &mut session).await,
            CommandResult::Handled
        );
    }

    #[tokio::test]
    async fn bad_id_is_handled() {
        let mut session = loaded_session(&[]).await;
        assert_eq!(
            OpenCommand.execute("x", &mut session).await,
            CommandResult::Handled
        );
    }

    #[test]
    fn metadata() {
        assert_eq!(OpenCommand.name(), "/open");
        assert_eq!(OpenCommand.usage(), "[id]");
    }
}
