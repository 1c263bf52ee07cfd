//! Task label and the completion status message
//!
//! The host mirrors these into the DOM; only transitions are reported so
//! it can skip touching elements on most frames.

/// Label shown in the task name element once the task is done
pub const TASK_COMPLETE_LABEL: &str = "TASK COMPLETE!";

/// Message shown when the task completes
pub const COMPLETION_MESSAGE: &str = "Task Complete! NBL training perfects tools and complex \
procedures. This directly benefits Earth by informing the design of <strong>remote-controlled \
surgery</strong> and deep-sea exploration.";

/// Visibility change reported by [`StatusBanner::update`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerChange {
    Shown,
    Hidden,
}

/// Completion message with a hide countdown in host seconds
#[derive(Debug, Clone, PartialEq)]
pub struct StatusBanner {
    /// Seconds left before hiding; `None` while hidden
    remaining: Option<f32>,
    hide_after: f32,
}

impl StatusBanner {
    pub fn new(hide_after: f32) -> Self {
        Self {
            remaining: None,
            hide_after,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.remaining.is_some()
    }

    pub fn message(&self) -> &'static str {
        COMPLETION_MESSAGE
    }

    /// Show the message and (re)start the hide countdown
    pub fn show(&mut self) -> BannerChange {
        self.remaining = Some(self.hide_after);
        BannerChange::Shown
    }

    /// Advance the countdown by `dt` seconds
    pub fn update(&mut self, dt: f32) -> Option<BannerChange> {
        let remaining = self.remaining.as_mut()?;
        *remaining -= dt;
        if *remaining <= 0.0 {
            self.remaining = None;
            return Some(BannerChange::Hidden);
        }
        None
    }
}
