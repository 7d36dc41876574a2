//! `Ringside` — live scoring and timing for two-competitor combat matches
//!
//! This library provides the match engine behind the `ringside` operator
//! console: a frozen pre-match configuration, a command-driven bout state
//! machine, and a cancellable one-second countdown clock.

pub mod bout;
pub mod cli;
pub mod config;
pub mod error;
pub mod observability;
