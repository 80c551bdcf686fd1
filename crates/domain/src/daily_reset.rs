use chrono::NaiveDate;

/// Decides when the remote goal flag must be reset.
///
/// Fires at most once per calendar date: the first call on a date it has
/// not seen yet returns `true` and records the date, every later call on
/// that date returns `false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyResetTracker {
    last_reset: Option<NaiveDate>,
}

impl DailyResetTracker {
    /// Tracker that treats `today` as already handled. The daemon starts
    /// this way so a restart never wipes a goal reached earlier today.
    pub fn starting_on(today: NaiveDate) -> Self {
        Self {
            last_reset: Some(today),
        }
    }

    /// Tracker with no history; its first call always fires.
    pub fn fresh() -> Self {
        Self { last_reset: None }
    }

    pub fn should_reset(&mut self, today: NaiveDate) -> bool {
        if self.last_reset == Some(today) {
            return false;
        }
        self.last_reset = Some(today);
        true
    }

    pub fn last_reset(&self) -> Option<NaiveDate> {
        self.last_reset
    }
}
