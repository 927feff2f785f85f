//! Simulated upload progress.
//!
//! The transfer itself reports nothing, so the bar creeps forward on a timer
//! until the upload resolves and then jumps to 100.

use gloo_timers::callback::Interval;
use leptos::prelude::*;

pub const PROGRESS_TICK_MS: u32 = 200;
pub const PROGRESS_STEP: u8 = 10;
/// Highest value reachable before the upload resolves
pub const PROGRESS_CEILING: u8 = 90;
pub const PROGRESS_COMPLETE: u8 = 100;
/// How long the full bar stays visible after a successful upload
pub const SETTLE_DELAY_MS: u64 = 500;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UploadProgress {
    busy: bool,
    percent: u8,
}

impl UploadProgress {
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn percent(&self) -> u8 {
        self.percent
    }

    pub fn begin(&mut self) {
        self.busy = true;
        self.percent = 0;
    }

    /// Advance one step. Returns `false` once the ceiling is reached or when
    /// no upload is running.
    pub fn tick(&mut self) -> bool {
        if !self.busy || self.percent >= PROGRESS_CEILING {
            return false;
        }
        self.percent = (self.percent + PROGRESS_STEP).min(PROGRESS_CEILING);
        true
    }

    /// Record the upload outcome. Success fills the bar and stays busy until
    /// [`reset`](Self::reset); failure resets immediately.
    pub fn finish(&mut self, succeeded: bool) {
        if succeeded {
            self.percent = PROGRESS_COMPLETE;
        } else {
            self.reset();
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Repeating timer that ticks an [`UploadProgress`] signal.
///
/// Scoped to one upload; the interval is cancelled when the ticker is
/// stopped or dropped.
pub struct ProgressTicker {
    _interval: Interval,
}

impl ProgressTicker {
    pub fn start(progress: RwSignal<UploadProgress>) -> Self {
        let interval = Interval::new(PROGRESS_TICK_MS, move || {
            progress.update(|p| {
                p.tick();
            });
        });
        Self { _interval: interval }
    }

    pub fn stop(self) {}
}
