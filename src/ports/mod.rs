//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `Clock` - Current local time for "as of now" queries
//! - `InternshipReader` - Internship dates plus report and visit records

mod clock;
mod internship_reader;

pub use clock::Clock;
pub use internship_reader::{InternshipReader, InternshipRecord};
