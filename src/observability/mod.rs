//! Logging infrastructure for `ringside`.

pub mod logging;

pub use logging::{LogFormat, init_logging};
