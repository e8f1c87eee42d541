//! Clock port - source of the timestamps used in generated names

use chrono::NaiveDateTime;

/// Wall-clock time provider.
pub trait Clock {
    /// Current local time, without offset
    fn now(&self) -> NaiveDateTime;
}
