//! Clock port.
//!
//! Every "as of now" query takes `now` explicitly; handlers obtain it from
//! this port so tests can pin the date.

use crate::domain::foundation::Timestamp;

/// Source of the current local wall-clock time.
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}
