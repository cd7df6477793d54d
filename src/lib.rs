//! Attendance Engine for daily sign-in timesheets
//!
//! This crate turns raw sign-in/sign-out times into classified shifts with
//! effective work hours and night allowance, and aggregates them into
//! monthly attendance statistics per labor company.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
