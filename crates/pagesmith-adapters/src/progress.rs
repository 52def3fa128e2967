//! Progress sinks.

use std::sync::mpsc::{self, Receiver, Sender};

use pagesmith_core::application::ports::ProgressSink;
use tracing::info;

/// Logs every progress event at INFO.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingProgress;

impl ProgressSink for TracingProgress {
    fn report(&self, percent: u8, message: &str) {
        info!(target: "pagesmith::progress", percent, "{message}");
    }
}

/// One progress event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressEvent {
    pub percent: u8,
    pub message: String,
}

/// Forwards events over a channel. A dropped receiver is ignored.
#[derive(Debug, Clone)]
pub struct ChannelProgress {
    sender: Sender<ProgressEvent>,
}

impl ChannelProgress {
    /// A sink and the receiving end of its channel.
    pub fn channel() -> (Self, Receiver<ProgressEvent>) {
        let (sender, receiver) = mpsc::channel();
        (Self { sender }, receiver)
    }
}

impl ProgressSink for ChannelProgress {
    fn report(&self, percent: u8, message: &str) {
        let _ = self.sender.send(ProgressEvent {
            percent,
            message: message.to_string(),
        });
    }
}
