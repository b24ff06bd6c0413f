//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (timestamps, calendar helpers, IDs, errors)
//! - `cycle` - Cycle models: enumeration, due dates and aggregate queries
//! - `status` - Report and visit status classification
//! - `compliance` - Dashboard summaries, overdue alerts and submission stamps

pub mod compliance;
pub mod cycle;
pub mod foundation;
pub mod status;
