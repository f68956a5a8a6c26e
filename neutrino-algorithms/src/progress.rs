use std::time::Instant;

use log::{debug, info};

/// Receives status messages while a long running algorithm works through its phases
///
/// Every phase starts with a call to [`action`](Progress::action) and ends with a call to
/// [`done`](Progress::done). Phases are never nested.
pub trait Progress {
    /// A new phase described by `message` starts
    fn action(&mut self, message: &str);
    /// The current phase has finished
    fn done(&mut self);
}

/// Reports progress through the `log` crate: `info` when a phase starts, `debug` with the elapsed time when it
/// is done
#[derive(Debug, Default)]
pub struct LogProgress {
    current: Option<(String, Instant)>,
}

impl LogProgress {
    pub fn new() -> Self {
        Default::default()
    }
}

impl Progress for LogProgress {
    fn action(&mut self, message: &str) {
        info!("{}...", message);
        self.current = Some((message.to_owned(), Instant::now()));
    }

    fn done(&mut self) {
        if let Some((message, start)) = self.current.take() {
            debug!(
                "{}: done in {:.3}s",
                message,
                start.elapsed().as_secs_f64()
            );
        }
    }
}

/// Discards all progress messages
#[derive(Debug, Default, Copy, Clone)]
pub struct SilentProgress;

impl Progress for SilentProgress {
    fn action(&mut self, _message: &str) {}

    fn done(&mut self) {}
}

/// Records all messages, useful for inspecting which phases ran
#[derive(Debug, Default, Clone)]
pub struct RecordingProgress {
    pub finished: Vec<String>,
    current: Option<String>,
}

impl Progress for RecordingProgress {
    fn action(&mut self, message: &str) {
        self.current = Some(message.to_owned());
    }

    fn done(&mut self) {
        if let Some(message) = self.current.take() {
            self.finished.push(message);
        }
    }
}
