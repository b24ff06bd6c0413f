//! System clock reading local wall-clock time.

use crate::domain::foundation::Timestamp;
use crate::ports::Clock;

/// Reads the host's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}
