//! Logging utilities

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system
///
/// Call once at startup from binaries that embed the toolkit; library code
/// only emits through the `log` facade.
pub fn init() {
    let _ = env_logger::try_init();
}
