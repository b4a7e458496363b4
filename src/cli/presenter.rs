//! CLI presenter for output formatting

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

/// Presenter for CLI output formatting
pub struct Presenter {
    progress: Option<ProgressBar>,
}

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self { progress: None }
    }

    /// Start a playback progress bar counting symbols
    pub fn start_progress(&mut self, total: u64, message: &str) {
        let bar = ProgressBar::new(total);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.cyan} {msg} [{bar:20.cyan/blue}] {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓░")
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏");
        bar.set_style(style);
        bar.set_message(message.to_string());
        bar.enable_steady_tick(std::time::Duration::from_millis(80));
        self.progress = Some(bar);
    }

    /// Handle for updating the progress bar from another task
    pub fn progress_handle(&self) -> Option<ProgressBar> {
        self.progress.clone()
    }

    /// Remove the progress bar
    pub fn finish_progress(&mut self) {
        if let Some(bar) = self.progress.take() {
            bar.finish_and_clear();
        }
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".cyan(), message);
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout (the translation result)
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Print a key-value pair (for config list)
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_progress_by_default() {
        let presenter = Presenter::new();
        assert!(presenter.progress_handle().is_none());
    }

    #[test]
    fn progress_handle_tracks_position() {
        let mut presenter = Presenter::new();
        presenter.start_progress(10, "Playing");

        let handle = presenter.progress_handle().unwrap();
        handle.set_position(4);
        assert_eq!(handle.position(), 4);
        assert_eq!(handle.length(), Some(10));

        presenter.finish_progress();
        assert!(presenter.progress_handle().is_none());
    }
}
