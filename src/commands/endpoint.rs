use async_trait::async_trait;

use super::{Command, CommandResult};
use crate::render;
use crate::session::Session;
use crate::source::UserSource;
use crate::source::http::HttpSource;

pub struct EndpointCommand;

#[async_trait]
impl Command for EndpointCommand {
    fn name(&self) -> &str {
        "/endpoint"
    }

    fn usage(&self) -> &str {
        "[url]"
    }

    fn description(&self) -> &str {
        "show or change (and remember) the REST endpoint, then reload"
    }

    async fn execute(&self, args: &str, session: &mut Session) -> CommandResult {
        if args.is_empty() {
            println!("  endpoint  {}", session.endpoint());
            return CommandResult::Handled;
        }

        if !is_http_url(args) {
            eprintln!("  ✗ endpoint must start with http:// or https://");
            return CommandResult::Handled;
        }

        let source = match HttpSource::new(args, session.timeout()) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("  ✗ {e}");
                return CommandResult::Handled;
            }
        };

        if let Err(e) = session.config().set_api_url(&source.describe()) {
            eprintln!("  ✗ failed to save endpoint: {e}");
        }
        session.set_source(Box::new(source));
        println!("  endpoint  {}", session.endpoint());

        session.fetch_users().await;
        print!("{}", render::user_list(session.state(), session.search()));
        CommandResult::Handled
    }
}

fn is_http_url(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::loaded_session;

    #[test]
    fn url_scheme_check() {
        assert!(is_http_url("http://localhost:3000"));
        assert!(is_http_url("https://jsonplaceholder.typicode.com"));
        assert!(!is_http_url("ftp://x"));
        assert!(!is_http_url("localhost"));
    }

    #[tokio::test]
    async fn no_args_shows_current() {
        let mut session = loaded_session(&[]).await;
        EndpointCommand.execute("", &mut session).await;
        assert_eq!(session.endpoint(), "mock");
    }

    #[tokio::test]
    async fn invalid_url_is_rejected() {
        let mut session = loaded_session(&[]).await;
        EndpointCommand.execute("not a url", &mut session).await;
        assert_eq!(session.endpoint(), "mock");
        assert!(session.config().api_url().unwrap().is_none());
    }

    #[tokio::test]
    async fn switch_saves_normalized_url() {
        let mut session = loaded_session(&[]).await;
        EndpointCommand
            .execute("http://127.0.0.1:9/", &mut session)
            .await;
        assert_eq!(session.endpoint(), "http://127.0.0.1:9");
        assert_eq!(
            session.config().api_url().unwrap().as_deref(),
            Some("http://127.0.0.1:9")
        );
        assert!(session.state().error.is_some());
    }
}
