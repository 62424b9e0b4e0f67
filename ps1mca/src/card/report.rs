// ps1mca/src/card/report.rs

use crate::types::{FrameAddress, TransferOutcome};
use std::fmt;

/// Everything recorded about one frame exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameReport {
    /// The frame this report is about.
    pub address: FrameAddress,
    /// One entry per failed check, or a single `Success`.
    pub outcomes: Vec<TransferOutcome>,
}

impl FrameReport {
    /// Whether every check on this frame passed.
    pub fn is_success(&self) -> bool {
        self.outcomes == [TransferOutcome::Success]
    }
}

/// The fatal condition that stopped a write workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteAbort {
    /// Frame on which the card rejected the write.
    pub address: FrameAddress,
    /// The rejecting outcome.
    pub outcome: TransferOutcome,
}

/// Result of a write workflow.
#[derive(Debug, Clone)]
pub struct WriteReport {
    /// First frame actually attempted (after range normalization).
    pub first: FrameAddress,
    /// Last frame of the normalized range.
    pub last: FrameAddress,
    /// Per-frame reports, in attempt order.
    pub frames: Vec<FrameReport>,
    /// Set when the card rejected a write and the workflow stopped early.
    pub abort: Option<WriteAbort>,
}

impl WriteReport {
    /// Whether the whole range was attempted.
    pub fn is_complete(&self) -> bool {
        self.abort.is_none()
    }
}

/// Aggregate counts over a batch of frame reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Frames attempted.
    pub total: usize,
    /// Frames for which every check passed.
    pub good: usize,
    /// Frames with at least one recorded failure.
    pub failed: usize,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} frames: {} good, {} failed",
            self.total, self.good, self.failed
        )
    }
}

/// Count good and failed frames.
pub fn summarize(frames: &[FrameReport]) -> Summary {
    let good = frames.iter().filter(|r| r.is_success()).count();
    Summary {
        total: frames.len(),
        good,
        failed: frames.len() - good,
    }
}
