use crate::GoalStatus;
use std::fmt;

/// What the enforcers should do for a given goal status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnforcementDecision {
    Block,
    Unblock,
}

impl EnforcementDecision {
    pub fn for_status(status: &GoalStatus) -> Self {
        if status.goal_reached_today {
            Self::Unblock
        } else {
            Self::Block
        }
    }
}

impl fmt::Display for EnforcementDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Block => f.write_str("block"),
            Self::Unblock => f.write_str("unblock"),
        }
    }
}

/// Change of `goalReachedToday` between two observations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalTransition {
    Initial(bool),
    Unchanged(bool),
    Changed { from: bool, to: bool },
}

/// In-memory state of the enforcement loop. Never persisted: a restart
/// re-derives everything from the current remote status. The last reset
/// date is owned by the goal source's `DailyResetTracker`, not by this state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnforcementState {
    last_state: Option<bool>,
}

impl EnforcementState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_state(&self) -> Option<bool> {
        self.last_state
    }

    pub fn record(&mut self, goal_reached_today: bool) -> GoalTransition {
        let transition = match self.last_state {
            None => GoalTransition::Initial(goal_reached_today),
            Some(prev) if prev == goal_reached_today => GoalTransition::Unchanged(prev),
            Some(prev) => GoalTransition::Changed {
                from: prev,
                to: goal_reached_today,
            },
        };
        self.last_state = Some(goal_reached_today);
        transition
    }
}
