// file: src/notifier/email.rs
// description: simulated e-mail announcement to a fixed recipient
// reference: https://docs.rs/regex

use super::write_failed;
use crate::error::{PipelineError, Result};
use crate::models::Record;
use crate::pipeline::Notifier;
use crate::utils::validation::Rules;
use std::io::{self, Stdout, Write};
use std::sync::{Mutex, PoisonError};

pub struct EmailNotifier<W: Write = Stdout> {
    to_address: String,
    sink: Mutex<W>,
}

impl EmailNotifier<Stdout> {
    pub fn stdout(to_address: &str) -> Result<Self> {
        Self::new(to_address, io::stdout())
    }
}

impl<W: Write> EmailNotifier<W> {
    /// Fails when `to_address` does not look like an e-mail address.
    pub fn new(to_address: &str, sink: W) -> Result<Self> {
        if !Rules::is_email(to_address) {
            return Err(PipelineError::Config(format!(
                "Invalid recipient address: {}",
                to_address
            )));
        }

        Ok(Self {
            to_address: to_address.trim().to_string(),
            sink: Mutex::new(sink),
        })
    }

    pub fn to_address(&self) -> &str {
        &self.to_address
    }

    pub fn into_inner(self) -> W {
        self.sink.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn compose<R: Record>(&self, record: &R) -> String {
        let fields = record.fields();
        let subject = fields
            .iter()
            .find(|(name, _)| *name == "title")
            .map(|(_, value)| value.clone())
            .unwrap_or_else(|| format!("{} {}", R::KIND, record.id()));
        let body = fields
            .iter()
            .filter(|(name, _)| *name != "title")
            .map(|(name, value)| format!("{}: {}", name, value))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "--- Email (simulated) ---\n\
             To: {}\n\
             Subject: {}\n\
             Reference: {} {}\n\
             Body:\n{}\n\
             --- Sent ---\n",
            self.to_address,
            subject,
            R::KIND,
            record.id(),
            body
        )
    }
}

impl<R: Record, W: Write> Notifier<R> for EmailNotifier<W> {
    fn notify(&self, record: &R) -> Result<()> {
        let message = self.compose(record);
        let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        sink.write_all(message.as_bytes())
            .and_then(|_| sink.flush())
            .map_err(|e| write_failed("email", e))
    }
}
