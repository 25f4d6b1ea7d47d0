// Wed Oct 14 2026 - Alex

pub mod logging;

pub use logging::{scoped_timer, LoggingUtils, ScopedTimer};

pub fn align_up(value: u64, alignment: u64) -> u64 {
    if alignment == 0 {
        return value;
    }
    (value + alignment - 1) & !(alignment - 1)
}
