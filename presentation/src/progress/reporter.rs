//! Progress reporting for backend requests

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use recap_application::RequestProgress;
use std::sync::Mutex;
use std::time::Duration;

/// Shows a spinner with the request's label while the backend works
pub struct RequestSpinner {
    bar: Mutex<Option<ProgressBar>>,
}

impl RequestSpinner {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap()
    }
}

impl Default for RequestSpinner {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestProgress for RequestSpinner {
    fn on_start(&self, label: &str) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(label.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));

        // A new request replaces any spinner left behind by a failed one.
        if let Some(old) = self.bar.lock().unwrap().replace(pb) {
            old.finish_and_clear();
        }
    }

    fn on_finish(&self) {
        if let Some(pb) = self.bar.lock().unwrap().take() {
            pb.finish_and_clear();
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl RequestProgress for SimpleProgress {
    fn on_start(&self, label: &str) {
        println!("{} {}", "->".cyan(), label);
    }

    fn on_finish(&self) {}
}
