//! Progress reporting for playlist resolution

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU8, AtomicUsize, Ordering};

/// Status of a resolution run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProgressStatus {
    /// Nothing dispatched yet
    #[default]
    NotStarted,
    /// Maps are being resolved
    Running,
    /// Every map has completed
    Completed,
}

impl ProgressStatus {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::Running => "running",
            Self::Completed => "completed",
        }
    }

    fn to_u8(self) -> u8 {
        match self {
            Self::NotStarted => 0,
            Self::Running => 1,
            Self::Completed => 2,
        }
    }

    fn from_u8(value: u8) -> Self {
        match value {
            1 => Self::Running,
            2 => Self::Completed,
            _ => Self::NotStarted,
        }
    }
}

impl std::fmt::Display for ProgressStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Shared progress sink
///
/// Safe to update from concurrently completing tasks. `done` never exceeds
/// `total`.
#[derive(Debug, Default)]
pub struct Progress {
    status: AtomicU8,
    total: AtomicUsize,
    done: AtomicUsize,
}

/// Point-in-time copy of a [`Progress`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    pub status: ProgressStatus,
    pub total: usize,
    pub done: usize,
}

impl ProgressSnapshot {
    /// Completion ratio in `0.0..=1.0` (an empty run counts as complete)
    pub fn fraction(&self) -> f32 {
        if self.total == 0 {
            return 1.0;
        }
        self.done as f32 / self.total as f32
    }
}

impl Progress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset counters and mark the run as started
    pub fn start(&self, total: usize) {
        self.done.store(0, Ordering::SeqCst);
        self.total.store(total, Ordering::SeqCst);
        self.status
            .store(ProgressStatus::Running.to_u8(), Ordering::SeqCst);
    }

    /// Count one completed item
    ///
    /// Returns the new `done` value, or `None` if the counter was already at
    /// `total`.
    pub fn increment(&self) -> Option<usize> {
        let total = self.total.load(Ordering::SeqCst);
        self.done
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |done| {
                (done < total).then_some(done + 1)
            })
            .ok()
            .map(|previous| previous + 1)
    }

    /// Mark the run as finished
    pub fn complete(&self) {
        self.status
            .store(ProgressStatus::Completed.to_u8(), Ordering::SeqCst);
    }

    pub fn status(&self) -> ProgressStatus {
        ProgressStatus::from_u8(self.status.load(Ordering::SeqCst))
    }

    pub fn total(&self) -> usize {
        self.total.load(Ordering::SeqCst)
    }

    pub fn done(&self) -> usize {
        self.done.load(Ordering::SeqCst)
    }

    pub fn snapshot(&self) -> ProgressSnapshot {
        ProgressSnapshot {
            status: self.status(),
            total: self.total(),
            done: self.done(),
        }
    }
}
