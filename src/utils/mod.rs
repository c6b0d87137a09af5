// ============================================================================
// Utilities Module
// Helpers for embedding the calculator in applications
// ============================================================================

mod logging;

pub use logging::init_logging;
