//! Destinations for formatted log records.

use crate::error::Result;
use crate::log_message::LogMessage;
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, channel};

/// Where a [`Logger`](crate::Logger) sends its records.
#[derive(Clone)]
pub(crate) enum Sink {
    /// Records go through a channel to a writer thread that owns the file.
    File(Sender<LogMessage>),
    /// Records are kept in memory, shared between clones.
    Capture(Arc<Mutex<Vec<String>>>),
}

impl Sink {
    /// Opens (or creates) `path` in append mode and starts its writer thread.
    pub fn file(path: &Path) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let (sender, receiver) = channel();
        std::thread::spawn(move || run_writer(file, receiver));
        Ok(Sink::File(sender))
    }

    pub fn capture() -> Self {
        Sink::Capture(Arc::new(Mutex::new(Vec::new())))
    }

    pub fn deliver(&self, message: LogMessage) {
        match self {
            // A closed channel means the writer thread died; nothing left to do.
            Sink::File(sender) => {
                let _ = sender.send(message);
            }
            Sink::Capture(lines) => lines.lock().push(message.line()),
        }
    }

    /// Lines held by a capture sink. Always empty for file sinks.
    pub fn captured(&self) -> Vec<String> {
        match self {
            Sink::File(_) => Vec::new(),
            Sink::Capture(lines) => lines.lock().clone(),
        }
    }
}

/// Writer loop: runs until every sender has been dropped.
fn run_writer(mut file: File, receiver: Receiver<LogMessage>) {
    for message in receiver {
        let line = format!("{}\n", message.line());
        if let Err(e) = file.write_all(line.as_bytes()).and_then(|_| file.flush()) {
            eprintln!("Error writing log: {}", e);
        }
    }
}
