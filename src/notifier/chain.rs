// file: src/notifier/chain.rs
// description: ordered composite of notifiers
// reference: pluggable pipeline stages

use crate::error::Result;
use crate::pipeline::Notifier;

/// Runs each notifier in insertion order and stops at the first failure.
pub struct NotifierChain<'a, R> {
    notifiers: Vec<Box<dyn Notifier<R> + 'a>>,
}

impl<'a, R> NotifierChain<'a, R> {
    pub fn new() -> Self {
        Self {
            notifiers: Vec::new(),
        }
    }

    pub fn with(mut self, notifier: impl Notifier<R> + 'a) -> Self {
        self.push(notifier);
        self
    }

    pub fn push(&mut self, notifier: impl Notifier<R> + 'a) {
        self.notifiers.push(Box::new(notifier));
    }

    pub fn len(&self) -> usize {
        self.notifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notifiers.is_empty()
    }
}

impl<R> Default for NotifierChain<'_, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Notifier<R> for NotifierChain<'_, R> {
    fn notify(&self, record: &R) -> Result<()> {
        for notifier in &self.notifiers {
            notifier.notify(record)?;
        }
        Ok(())
    }
}
