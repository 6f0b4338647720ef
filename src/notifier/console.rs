// file: src/notifier/console.rs
// description: simulated confirmation written to a console or any writer
// reference: https://doc.rust-lang.org/std/io/trait.Write.html

use super::write_failed;
use crate::error::Result;
use crate::models::Record;
use crate::pipeline::Notifier;
use std::io::{self, Stdout, Write};
use std::sync::{Mutex, PoisonError};

const NO_RECIPIENT: &str = "(no recipient)";

/// Writes a confirmation block naming the record and its owner.
pub struct ConsoleNotifier<W: Write = Stdout> {
    sink: Mutex<W>,
}

impl ConsoleNotifier<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleNotifier<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink: Mutex::new(sink),
        }
    }

    pub fn into_inner(self) -> W {
        self.sink.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ConsoleNotifier<Vec<u8>> {
    /// Everything written so far.
    pub fn output(&self) -> String {
        let sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&sink).into_owned()
    }
}

pub(crate) fn confirmation<R: Record>(record: &R) -> String {
    let details = record
        .fields()
        .into_iter()
        .map(|(name, value)| format!("{}: {}", name, value))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "--- Confirmation (simulated) ---\n\
         To: {}\n\
         {} {} confirmed. {}\n\
         --- Sent ---\n",
        record.owner().unwrap_or(NO_RECIPIENT),
        R::KIND,
        record.id(),
        details
    )
}

impl<R: Record, W: Write> Notifier<R> for ConsoleNotifier<W> {
    fn notify(&self, record: &R) -> Result<()> {
        let message = confirmation(record);
        let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        sink.write_all(message.as_bytes())
            .and_then(|_| sink.flush())
            .map_err(|e| write_failed("console", e))
    }
}
