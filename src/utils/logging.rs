// ============================================================================
// Logging
// Optional tracing subscriber setup for binaries and tests
// ============================================================================
//
// The library itself only emits `tracing` events:
// - trace: every precise-tier result with its inputs
// - debug: decimal engine rejections (overflow, division by zero, ...)
//
// Nothing is printed unless the embedding application installs a
// subscriber. With the `logging` feature enabled, `init_logging` installs
// a plain `fmt` subscriber.
//
// # Usage
//
// ```ignore
// use roll_calculator::utils::init_logging;
//
// init_logging(tracing::Level::TRACE);
// ```
// ============================================================================

/// Install a global `fmt` subscriber at the given level.
///
/// # Returns
/// * `true` if the subscriber was installed
/// * `false` if a global subscriber was already set
#[cfg(feature = "logging")]
pub fn init_logging(level: tracing::Level) -> bool {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init()
        .is_ok()
}

// ============================================================================
// Stub implementation when logging feature is disabled
// ============================================================================

/// Without the `logging` feature no subscriber can be installed.
#[cfg(not(feature = "logging"))]
pub fn init_logging(_level: tracing::Level) -> bool {
    false
}
