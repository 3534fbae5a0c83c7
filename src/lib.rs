//! Talent AHP - Student Talent Ranking Engine
//!
//! This crate weights evaluation criteria with the Analytic Hierarchy Process,
//! combines the weights with per-student scores into composite scores, and
//! labels each student with the talent their strongest criterion points to.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
