use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::io::IsTerminal;
use std::sync::Mutex;
use std::time::Duration;

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// This adapter implements the ProgressReporter port, writing progress
/// information to stderr so it doesn't interfere with the rendered view on
/// stdout. In-flight requests show an indicatif spinner.
pub struct StderrProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
    colored: bool,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
            colored: std::io::stderr().is_terminal(),
        }
    }

    fn clear_spinner(&self) {
        let mut spinner = self
            .spinner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(pb) = spinner.take() {
            pb.finish_and_clear();
        }
    }

    fn paint_error(&self, message: &str) -> String {
        if self.colored {
            message.red().to_string()
        } else {
            message.to_string()
        }
    }

    fn paint_success(&self, message: &str) -> String {
        if self.colored {
            message.green().to_string()
        } else {
            message.to_string()
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn report_waiting(&self, message: &str) {
        let mut spinner = self
            .spinner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        match spinner.as_ref() {
            Some(pb) => pb.set_message(message.to_string()),
            None => {
                let pb = ProgressBar::new_spinner();
                if let Ok(style) =
                    ProgressStyle::default_spinner().template("   {spinner:.cyan} {msg}")
                {
                    pb.set_style(style);
                }
                pb.set_message(message.to_string());
                pb.enable_steady_tick(Duration::from_millis(100));
                *spinner = Some(pb);
            }
        }
    }

    fn report_error(&self, message: &str) {
        self.clear_spinner();
        eprintln!("{}", self.paint_error(message));
    }

    fn report_completion(&self, message: &str) {
        self.clear_spinner();
        eprintln!("{}", self.paint_success(message));
    }
}
