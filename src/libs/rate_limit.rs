use chrono::{Local, NaiveDateTime};

/// Questions a user may ask per calendar day.
pub const DAILY_LIMIT: u32 = 10;

/// Outcome of a quota check.
///
/// Running out of quota is an expected, user-visible condition; it is
/// reported through this struct, never as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuotaStatus {
    pub allowed: bool,
    pub remaining: u32,
}

/// Per-day question quota.
///
/// The quota window is derived, not stored: the caller counts chat
/// records since the start of the local day and passes the count in.
#[derive(Debug, Clone, Copy)]
pub struct DailyQuota {
    limit: u32,
}

impl DailyQuota {
    pub fn new() -> Self {
        Self { limit: DAILY_LIMIT }
    }

    pub fn with_limit(limit: u32) -> Self {
        Self { limit }
    }

    pub fn check(&self, asked_today: u32) -> QuotaStatus {
        QuotaStatus {
            allowed: asked_today < self.limit,
            remaining: self.limit.saturating_sub(asked_today),
        }
    }

    /// Start of the current local calendar day, the window's lower bound.
    pub fn window_start() -> NaiveDateTime {
        Local::now().date_naive().and_hms_opt(0, 0, 0).unwrap()
    }
}

impl Default for DailyQuota {
    fn default() -> Self {
        Self::new()
    }
}
