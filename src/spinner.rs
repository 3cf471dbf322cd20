//! A minimal terminal spinner shown while the user list loads.

use std::io::Write;
use std::time::{Duration, Instant};

use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Braille spinner frames.
const FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Frame interval.
const INTERVAL: Duration = Duration::from_millis(80);

/// Elapsed time is only shown once a wait gets noticeable.
const SHOW_ELAPSED_AFTER: Duration = Duration::from_secs(1);

/// A terminal spinner that runs in a background task and writes to stderr,
/// so list output on stdout stays clean.
pub struct Spinner {
    handle: JoinHandle<()>,
    cancel: watch::Sender<bool>,
    started: Instant,
}

impl Spinner {
    /// Start a spinner with the given message (e.g. `"loading users"`).
    pub fn start(message: &str) -> Self {
        let (cancel, mut cancel_rx) = watch::channel(false);
        let message = message.to_string();
        let started = Instant::now();

        let handle = tokio::spawn(async move {
            let mut i = 0;
            loop {
                let line = frame_line(i, &message, started.elapsed());
                eprint!("\x1b[2K\r{line}");
                let _ = std::io::stderr().flush();

                tokio::select! {
                    _ = tokio::time::sleep(INTERVAL) => {}
                    _ = cancel_rx.changed() => break,
                }
                i += 1;
            }
            eprint!("\x1b[2K\r");
            let _ = std::io::stderr().flush();
        });

        Self {
            handle,
            cancel,
            started,
        }
    }

    /// Stop the spinner, clear its line, and report how long it ran.
    pub async fn stop(self) -> Duration {
        let _ = self.cancel.send(true);
        let _ = self.handle.await;
        self.started.elapsed()
    }
}

fn frame_line(tick: usize, message: &str, elapsed: Duration) -> String {
    let frame = FRAMES[tick % FRAMES.len()];
    if elapsed < SHOW_ELAPSED_AFTER {
        format!("{frame} {message}")
    } else {
        format!("{frame} {message} ({}s)", elapsed.as_secs())
    }
}
