//! Startup banner and session summary display.

use crate::consts::{AUTHOR, REPO};
use crate::session::SessionStats;

/// Session configuration for display in the startup banner.
pub struct BannerInfo<'a> {
    pub endpoint: &'a str,
    pub settings: &'a str,
    pub timeout_secs: u64,
}

/// Print the startup banner with session info.
pub fn print_banner(info: &BannerInfo) {
    println!(
        r#"
   ╔═══════════════════════════════════════╗
   ║        U S E R   R O S T E R          ║
   ║  manage your users, list to delete    ║
   ╚═══════════════════════════════════════╝

   version   {}
   by        {}
   repo      {}
   endpoint  {}
   timeout   {}s
   settings  {}

   type /help for commands, or any text to search
"#,
        env!("CARGO_PKG_VERSION"),
        AUTHOR,
        REPO,
        info.endpoint,
        info.timeout_secs,
        info.settings,
    );
}

/// One-line description of local changes, if there were any.
pub fn summary_line(stats: SessionStats) -> Option<String> {
    if stats.total() == 0 {
        return None;
    }
    Some(format!(
        "session: {} added, {} updated, {} deleted (local only, not sent to the server)",
        stats.added, stats.updated, stats.deleted
    ))
}

/// Print the session summary (local changes + farewell).
pub fn print_session_summary(stats: SessionStats) {
    if let Some(line) = summary_line(stats) {
        println!("{line}");
    }
    println!("goodbye.");
}
