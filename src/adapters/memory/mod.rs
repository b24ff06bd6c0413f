//! In-memory adapters for tests and local development.

mod internship_reader;

pub use internship_reader::InMemoryInternshipReader;
