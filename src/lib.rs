//! Placement Compliance - reporting and visit cycle engine
//!
//! This crate computes the expected compliance schedule for an internship:
//! which reporting cycles exist, when each report and mentor visit is due,
//! how many are expected as of today, and how a submitted record should be
//! classified. Two cycle models are supported, a fixed 28-day cycle and a
//! calendar-month cycle, chosen per institution.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
