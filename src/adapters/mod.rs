//! Adapters - Implementations of port interfaces.
//!
//! - `clock` - System and fixed clocks
//! - `memory` - In-memory internship reader

pub mod clock;
pub mod memory;

pub use clock::{FixedClock, SystemClock};
pub use memory::InMemoryInternshipReader;
