//! Payload inspection tool for cdp-wire
//!
//! Decodes a captured protocol payload and classifies it against the
//! well-known error catalog.

pub mod config;
pub mod error;
pub mod logging;
pub mod reporter;

pub use config::Config;
pub use error::{InspectError, Result};
pub use logging::init_logging;
pub use reporter::Reporter;
