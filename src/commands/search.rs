use async_trait::async_trait;

use super::{Command, CommandResult};
use crate::render;
use crate::session::Session;

pub struct SearchCommand;

#[async_trait]
impl Command for SearchCommand {
    fn name(&self) -> &str {
        "/search"
    }

    fn aliases(&self) -> &[&str] {
        &["/s"]
    }

    fn usage(&self) -> &str {
        "<term>"
    }

    fn description(&self) -> &str {
        "filter by name, email, or username (no term clears)"
    }

    async fn execute(&self, args: &str, session: &mut Session) -> CommandResult {
        if args.is_empty() {
            session.clear_search();
        } else {
            session.set_search(args);
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
    async fn sets_search_term() {
        let mut session = loaded_session(&[]).await;
        SearchCommand.execute("yesenia", &mut session).await;
        assert_eq!(session.search(), "yesenia");
        assert_eq!(session.visible_users()[0].name, "Clementine Bauch");
    }

    #[tokio::test]
    async fn multi_word_term_is_kept_whole() {
        let mut session = loaded_session(&[]).await;
        SearchCommand.execute("ervin howell", &mut session).await;
        assert_eq!(session.visible_users().len(), 1);
    }

    #[tokio::test]
    async fn empty_term_clears() {
        let mut session = loaded_session(&[]).await;
        session.set_search("bret");
        SearchCommand.execute("", &mut session).await;
        assert!(session.search().is_empty());
        assert_eq!(session.visible_users().len(), 3);
    }
}
