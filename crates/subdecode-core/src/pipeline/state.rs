//! Run state machine.
//!
//! `Idle → Fetching → Classifying → Normalizing → LoadingPrior → Diffing →
//! Deciding → (Persisting | Skipping) → Notifying → Done`, with `Failed`
//! reachable from the states that call a fallible collaborator.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineState {
    Idle,
    Fetching,
    Classifying,
    Normalizing,
    LoadingPrior,
    Diffing,
    Deciding,
    Persisting,
    Skipping,
    Notifying,
    Done,
    Failed(String),
}

impl PipelineState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, PipelineState::Done | PipelineState::Failed(_))
    }

    /// Whether the machine may move from `self` to `next`
    pub fn can_transition_to(&self, next: &PipelineState) -> bool {
        use PipelineState::*;
        match (self, next) {
            (Idle, Fetching)
            | (Fetching, Classifying)
            | (Classifying, Normalizing)
            | (Normalizing, LoadingPrior)
            | (LoadingPrior, Diffing)
            | (Diffing, Deciding)
            | (Deciding, Persisting)
            | (Deciding, Skipping)
            | (Persisting, Notifying)
            | (Skipping, Notifying)
            | (Notifying, Done) => true,
            (Fetching | LoadingPrior | Deciding | Persisting, Failed(_)) => true,
            _ => false,
        }
    }
}

/// States visited by one run, in order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StateTrace {
    visited: Vec<PipelineState>,
}

impl StateTrace {
    pub fn new() -> Self {
        Self {
            visited: vec![PipelineState::Idle],
        }
    }

    pub fn current(&self) -> &PipelineState {
        // never empty: starts at Idle
        &self.visited[self.visited.len() - 1]
    }

    /// Record a transition
    pub fn advance(&mut self, next: PipelineState) {
        debug_assert!(
            self.current().can_transition_to(&next),
            "illegal transition {:?} -> {:?}",
            self.current(),
            next
        );
        tracing::debug!(from = ?self.current(), to = ?next, "pipeline transition");
        self.visited.push(next);
    }

    /// Record a transition into `Failed`
    pub fn fail(&mut self, reason: impl Into<String>) {
        self.advance(PipelineState::Failed(reason.into()));
    }

    pub fn visited(&self) -> &[PipelineState] {
        &self.visited
    }

    pub fn contains(&self, state: &PipelineState) -> bool {
        self.visited.contains(state)
    }
}

impl Default for StateTrace {
    fn default() -> Self {
        Self::new()
    }
}
