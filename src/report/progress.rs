//! Spinner shown while a submission is being graded.

use indicatif::{ProgressBar, ProgressStyle};
use std::io::IsTerminal;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Status lines cycled while waiting for the grader.
pub const LOADING_MESSAGES: [&str; 6] = [
    "Analyzing file structure...",
    "Scanning for syntax errors...",
    "Checking command usage...",
    "Evaluating shell scripts...",
    "Grading your homework...",
    "Almost there...",
];

const MESSAGE_INTERVAL: Duration = Duration::from_millis(1500);

/// Spinner with rotating status messages. Must be started inside a tokio runtime.
pub struct LoadingIndicator {
    bar: ProgressBar,
    rotator: Option<JoinHandle<()>>,
}

impl LoadingIndicator {
    /// Start the spinner on stderr, or a hidden one when stderr is not a terminal.
    pub fn start(visible: bool) -> Self {
        if !visible || !std::io::stderr().is_terminal() {
            return Self {
                bar: ProgressBar::hidden(),
                rotator: None,
            };
        }

        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.green} AI Grader — {msg}") {
            bar.set_style(style);
        }
        bar.set_message(LOADING_MESSAGES[0]);
        bar.enable_steady_tick(Duration::from_millis(100));

        let rotating = bar.clone();
        let rotator = tokio::spawn(async move {
            let mut interval = tokio::time::interval(MESSAGE_INTERVAL);
            interval.tick().await;
            // Stay on the last message once the list is exhausted.
            for message in LOADING_MESSAGES.iter().skip(1) {
                interval.tick().await;
                rotating.set_message(*message);
            }
        });

        Self {
            bar,
            rotator: Some(rotator),
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.bar.is_hidden()
    }

    /// Stop the spinner and clear its line.
    pub fn finish(mut self) {
        if let Some(rotator) = self.rotator.take() {
            rotator.abort();
        }
        self.bar.finish_and_clear();
    }
}
