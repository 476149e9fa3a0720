// ─────────────────────────────────────────────────────────────────────
// Analiza Numerics — Progress Events
// © 1998–2026 Miroslav Šotek. All rights reserved.
// ─────────────────────────────────────────────────────────────────────
//! Structured per-iteration progress for the iterative routines.
//!
//! Every iterative routine takes an explicit observer. Events are
//! informational only and never change the routine's result.

use serde::{Deserialize, Serialize};

use crate::error::NumericResult;

/// One progress record emitted by a routine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ProgressEvent {
    /// A scalar root finder finished iteration `iteration` with `estimate`.
    RootStep {
        method: String,
        iteration: usize,
        estimate: f64,
    },
    RootConverged {
        method: String,
        iterations: usize,
        root: f64,
    },
    /// A linear solver finished pass `iteration`.
    LinearStep {
        method: String,
        iteration: usize,
        guess: Vec<f64>,
    },
    LinearConverged {
        method: String,
        iterations: usize,
    },
    /// The coefficient matrix was not diagonally dominant; rows are being rearranged.
    DominanceRepairAttempted,
    /// Greedy rearrangement found no assignment; the matrix is unchanged.
    DominanceRepairFailed,
    /// Still not dominant after repair. Convergence is not guaranteed.
    ConvergenceWarning,
    /// `R_target += scalar * R_source` when `target != source`,
    /// `R_target *= scalar` otherwise.
    RowOperation {
        target: usize,
        source: usize,
        scalar: f64,
    },
}

/// Receiver for [`ProgressEvent`]s.
pub trait ProgressObserver {
    fn on_event(&mut self, event: &ProgressEvent);
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ProgressObserver for NoopObserver {
    fn on_event(&mut self, _event: &ProgressEvent) {}
}

impl<F> ProgressObserver for F
where
    F: FnMut(&ProgressEvent),
{
    fn on_event(&mut self, event: &ProgressEvent) {
        self(event)
    }
}

/// Keeps every event in arrival order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordingObserver {
    events: Vec<ProgressEvent>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[ProgressEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of per-iteration step events (root or linear).
    pub fn step_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| {
                matches!(
                    e,
                    ProgressEvent::RootStep { .. } | ProgressEvent::LinearStep { .. }
                )
            })
            .count()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// JSON array of the recorded events.
    pub fn to_json(&self) -> NumericResult<String> {
        Ok(serde_json::to_string(&self.events)?)
    }
}

impl ProgressObserver for RecordingObserver {
    fn on_event(&mut self, event: &ProgressEvent) {
        self.events.push(event.clone());
    }
}
