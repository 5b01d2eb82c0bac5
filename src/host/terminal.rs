use super::{Level, Notification, Phase, ProgressEvent, Reporter};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;

/// Draws build progress as an indicatif bar and prints notifications.
#[derive(Default)]
pub struct TerminalReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl TerminalReporter {
    pub fn new() -> Self {
        Self::default()
    }

    fn start_bar(title: &str) -> ProgressBar {
        let style = ProgressStyle::default_bar()
            .template("{prefix:.bold} [{elapsed_precise}] {bar:40.cyan/blue} {pos:>3}% {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");
        let pb = ProgressBar::new(100);
        pb.set_style(style);
        pb.set_prefix(title.to_string());
        pb
    }
}

impl Reporter for TerminalReporter {
    fn progress(&self, event: ProgressEvent) {
        let mut slot = self.bar.lock().unwrap_or_else(|e| e.into_inner());
        let pb = slot.get_or_insert_with(|| Self::start_bar(event.title));
        pb.set_position(u64::from(event.percent));

        match event.phase {
            Phase::Succeeded => pb.finish_with_message(event.message),
            Phase::Failed => pb.abandon_with_message(event.message),
            _ => pb.set_message(event.message),
        }
        if event.phase.is_terminal() {
            *slot = None;
        }
    }

    fn notify(&self, notification: Notification) {
        let line = match notification.level {
            Level::Info => format!("{} {}", "✓".green(), notification.message),
            Level::Error => format!("{} {}", "x".red(), notification.message.red()),
        };
        let slot = self.bar.lock().unwrap_or_else(|e| e.into_inner());
        match slot.as_ref() {
            Some(pb) => pb.suspend(|| println!("{}", line)),
            None => println!("{}", line),
        }
    }
}
