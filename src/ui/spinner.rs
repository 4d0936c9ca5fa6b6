use indicatif::ProgressBar;
use std::time::Duration;

/// A stderr spinner shown while a translation batch is in flight.
///
/// Clears itself when dropped, so an early exit never leaves a stale line.
pub struct Spinner {
    progress_bar: ProgressBar,
}

impl Spinner {
    /// Creates and starts a new spinner with the given message.
    pub fn new(message: String) -> Self {
        let progress_bar = ProgressBar::new_spinner();
        progress_bar.set_message(message);
        progress_bar.enable_steady_tick(Duration::from_millis(100));

        Self { progress_bar }
    }

    /// Stops the spinner and clears it from the terminal.
    pub fn stop(&self) {
        self.progress_bar.finish_and_clear();
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.progress_bar.finish_and_clear();
    }
}
