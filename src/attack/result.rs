//! To-hit calculation result
//!
//! A base number plus an ordered list of (delta, reason) modifiers, with
//! categorical overrides for attacks that need no roll. Compilers thread
//! the value functionally; nothing mutates a shared accumulator.

use serde::{Deserialize, Serialize};

use crate::board::hex::Arc;
use crate::board::los::Cover;

/// One signed adjustment with its human-readable justification.
///
/// The reason string is rendered verbatim in combat logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifier {
    pub delta: i32,
    pub reason: String,
}

/// Categorical outcome of a to-hit calculation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ToHitOutcome {
    /// Roll against the numeric target
    #[default]
    Number,
    /// The attack cannot legally be made
    Impossible(String),
    /// Hits without a roll
    AutoSuccess(String),
    /// Misses without a roll
    AutoFailure(String),
}

/// Hit-location table chosen for the attack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum HitTable {
    #[default]
    FullBody,
    /// Lower locations shielded by partial cover
    UpperHalf,
    Punch,
    Kick,
    /// Swarming infantry strike weak points
    Swarm,
}

/// Result of a to-hit evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToHitResult {
    base: i32,
    base_reason: String,
    pub modifiers: Vec<Modifier>,
    outcome: ToHitOutcome,
    pub hit_table: HitTable,
    /// Side of the target the attack arrives from
    pub side: Arc,
    pub cover: Cover,
}

impl ToHitResult {
    pub fn new(base: i32, reason: &str) -> Self {
        Self {
            base,
            base_reason: reason.into(),
            modifiers: Vec::new(),
            outcome: ToHitOutcome::Number,
            hit_table: HitTable::FullBody,
            side: Arc::Front,
            cover: Cover::None,
        }
    }

    /// A calculation that starts and ends impossible
    pub fn impossible(reason: &str) -> Self {
        let mut result = Self::new(0, "impossible");
        result.outcome = ToHitOutcome::Impossible(reason.into());
        result
    }

    pub fn base(&self) -> i32 {
        self.base
    }

    pub fn base_reason(&self) -> &str {
        &self.base_reason
    }

    /// Final numeric target: base plus the sum of all modifier deltas
    pub fn value(&self) -> i32 {
        self.base + self.modifiers.iter().map(|m| m.delta).sum::<i32>()
    }

    pub fn outcome(&self) -> &ToHitOutcome {
        &self.outcome
    }

    /// Append a modifier. Bookkeeping is allowed even after a terminal
    /// outcome; the category never changes because of it.
    pub fn with_modifier(mut self, delta: i32, reason: &str) -> Self {
        self.modifiers.push(Modifier {
            delta,
            reason: reason.into(),
        });
        self
    }

    /// Append a modifier only when the delta is nonzero
    pub fn with_nonzero(self, delta: i32, reason: &str) -> Self {
        if delta != 0 {
            self.with_modifier(delta, reason)
        } else {
            self
        }
    }

    /// Mark the attack impossible. The first terminal outcome wins; later
    /// attempts to change category are ignored.
    pub fn mark_impossible(mut self, reason: &str) -> Self {
        if !self.is_terminal() {
            self.outcome = ToHitOutcome::Impossible(reason.into());
        }
        self
    }

    pub fn mark_auto_success(mut self, reason: &str) -> Self {
        if !self.is_terminal() {
            self.outcome = ToHitOutcome::AutoSuccess(reason.into());
        }
        self
    }

    pub fn mark_auto_failure(mut self, reason: &str) -> Self {
        if !self.is_terminal() {
            self.outcome = ToHitOutcome::AutoFailure(reason.into());
        }
        self
    }

    pub fn with_hit_table(mut self, table: HitTable) -> Self {
        self.hit_table = table;
        self
    }

    pub fn with_side(mut self, side: Arc) -> Self {
        self.side = side;
        self
    }

    pub fn with_cover(mut self, cover: Cover) -> Self {
        self.cover = cover;
        self
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self.outcome, ToHitOutcome::Number)
    }

    pub fn needs_roll(&self) -> bool {
        matches!(self.outcome, ToHitOutcome::Number)
    }

    /// Does a given 2d6 roll hit?
    pub fn succeeds_on(&self, roll: u32) -> bool {
        match &self.outcome {
            ToHitOutcome::Number => roll as i32 >= self.value(),
            ToHitOutcome::AutoSuccess(_) => true,
            ToHitOutcome::Impossible(_) | ToHitOutcome::AutoFailure(_) => false,
        }
    }

    /// Render the calculation for a combat log
    pub fn describe(&self) -> String {
        match &self.outcome {
            ToHitOutcome::Impossible(reason) => format!("impossible: {reason}"),
            ToHitOutcome::AutoSuccess(reason) => format!("automatic hit: {reason}"),
            ToHitOutcome::AutoFailure(reason) => format!("automatic miss: {reason}"),
            ToHitOutcome::Number => {
                let mut text = format!("{} ({})", self.base, self.base_reason);
                for m in &self.modifiers {
                    text.push_str(&format!(" {:+} ({})", m.delta, m.reason));
                }
                text.push_str(&format!(" = {}", self.value()));
                text
            }
        }
    }
}
