//! Status logging macros.
//!
//! Events are routed through `tracing` under dedicated targets so the terminal
//! formatter can pick a symbol for them.

/// Target used for completed-step messages.
pub const SUCCESS_TARGET: &str = "invmap::success";

/// Logs a completed step. Rendered with its own marker by the CLI formatter.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::__tracing::info!(target: $crate::macros::SUCCESS_TARGET, $($arg)*)
    };
}
