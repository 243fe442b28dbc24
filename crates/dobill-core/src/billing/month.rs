//! Billing period and time-delta helpers

use chrono::{DateTime, Datelike, TimeZone, Utc};

/// Milliseconds in one hour
const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Milliseconds in one week
const MILLIS_PER_WEEK: f64 = 604_800_000.0;

/// Hours between two instants, rounded up to the next whole hour.
///
/// A partially elapsed hour bills as a full hour, matching how the provider
/// meters usage. Argument order does not matter.
#[must_use]
pub fn hours_between(a: DateTime<Utc>, b: DateTime<Utc>) -> f64 {
    ((a - b).num_milliseconds().abs() as f64 / MILLIS_PER_HOUR).ceil()
}

/// Weeks between two instants, rounded up to the next whole week
#[must_use]
pub fn weeks_between(a: DateTime<Utc>, b: DateTime<Utc>) -> f64 {
    ((a - b).num_milliseconds().abs() as f64 / MILLIS_PER_WEEK).ceil()
}

/// The billing month a summary is evaluated against.
///
/// Captures a single evaluation instant and derives both month boundaries
/// from it, so every estimator in one summary sees the same clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BillingPeriod {
    now: DateTime<Utc>,
    month_start: DateTime<Utc>,
    next_month_start: DateTime<Utc>,
}

impl BillingPeriod {
    /// Billing period for the current wall-clock instant
    #[must_use]
    pub fn current() -> Self {
        Self::at(Utc::now())
    }

    /// Billing period evaluated at a fixed instant
    #[must_use]
    pub fn at(now: DateTime<Utc>) -> Self {
        let month_start = first_of_month(now.year(), now.month());
        let next_month_start = if now.month() == 12 {
            first_of_month(now.year() + 1, 1)
        } else {
            first_of_month(now.year(), now.month() + 1)
        };

        Self {
            now,
            month_start,
            next_month_start,
        }
    }

    /// The evaluation instant
    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    /// First instant of the current month (UTC)
    #[must_use]
    pub fn month_start(&self) -> DateTime<Utc> {
        self.month_start
    }

    /// First instant of the next month (UTC)
    #[must_use]
    pub fn next_month_start(&self) -> DateTime<Utc> {
        self.next_month_start
    }

    /// Whole hours elapsed from `t` to the evaluation instant
    #[must_use]
    pub fn hours_since(&self, t: DateTime<Utc>) -> f64 {
        hours_between(self.now, t)
    }

    /// Whole weeks elapsed from `t` to the evaluation instant
    #[must_use]
    pub fn weeks_since(&self, t: DateTime<Utc>) -> f64 {
        weeks_between(self.now, t)
    }

    /// Whether a resource was created after this month began
    #[must_use]
    pub fn started_this_month(&self, created_at: DateTime<Utc>) -> bool {
        created_at > self.month_start
    }
}

fn first_of_month(year: i32, month: u32) -> DateTime<Utc> {
    // Midnight on the 1st always exists in UTC
    Utc.with_ymd_and_hms(year, month, 1, 0, 0, 0)
        .single()
        .expect("first of month is a valid UTC instant")
}
