//! User-facing notifications raised by the orchestrator.

use std::sync::Mutex;

/// Receives error notifications meant for the user.
pub trait Notifier: Send + Sync {
    fn error(&self, message: &str);
}

/// Notifier that keeps every message, in order.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages recorded so far.
    pub fn messages(&self) -> Vec<String> {
        match self.messages.lock() {
            Ok(messages) => messages.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn count(&self) -> usize {
        self.messages().len()
    }
}

impl Notifier for RecordingNotifier {
    fn error(&self, message: &str) {
        let mut messages = match self.messages.lock() {
            Ok(messages) => messages,
            Err(poisoned) => poisoned.into_inner(),
        };
        messages.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_notifier_keeps_order() {
        let notifier = RecordingNotifier::new();
        notifier.error("first");
        notifier.error("second");

        assert_eq!(notifier.count(), 2);
        assert_eq!(notifier.messages(), vec!["first", "second"]);
    }
}
