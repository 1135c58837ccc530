//! Shared doubles for unit tests.

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use rstest::fixture;

/// Clock frozen at a single instant.
pub(crate) struct FixedClock(pub(crate) DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Clock frozen at 2025-11-06 06:57:00 UTC.
#[fixture]
pub(crate) fn clock() -> FixedClock {
    FixedClock(
        Utc.with_ymd_and_hms(2025, 11, 6, 6, 57, 0)
            .single()
            .expect("valid instant"),
    )
}
