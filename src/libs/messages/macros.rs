//! Convenience macros for application messaging and logging.
//!
//! The macros in this module are the single interface for user-facing output.
//! Each one renders a [`Message`](super::Message) to a line and hands it to
//! `msg_emit!`, which routes to the `tracing` system when debug mode is
//! active and to plain console output otherwise.
//!
//! Debug mode is considered active when either `TAPLOG_DEBUG` or `RUST_LOG`
//! is set in the environment. The check is performed once and cached.

use std::sync::OnceLock;

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Checks if debug mode is enabled, with caching for performance.
///
/// When active, the message macros emit through `tracing`, which lets log
/// output carry timestamps and levels.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("TAPLOG_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

/// Routing primitive behind the `msg_*` macros.
///
/// Errors go to stderr in console mode so they stay separable from data
/// output in shell pipelines.
#[doc(hidden)]
#[macro_export]
macro_rules! msg_emit {
    (info, $line:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $line);
        } else {
            println!("{}", $line);
        }
    };
    (warn, $line:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("{}", $line);
        } else {
            println!("{}", $line);
        }
    };
    (error, $line:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("{}", $line);
        } else {
            eprintln!("{}", $line);
        }
    };
}

/// Prints a general message; pass `true` as the second argument to surround
/// it with blank lines, which is used for section headers.
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        $crate::msg_emit!(info, format!("{}", $msg))
    };
    ($msg:expr, true) => {
        $crate::msg_emit!(info, format!("\n{}\n", $msg))
    };
}

/// Prints a success message with ✅ prefix.
#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        $crate::msg_emit!(info, format!("✅ {}", $msg))
    };
    ($msg:expr, true) => {
        $crate::msg_emit!(info, format!("\n✅ {}\n", $msg))
    };
}

/// Prints an error message with ❌ prefix.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        $crate::msg_emit!(error, format!("❌ {}", $msg))
    };
    ($msg:expr, true) => {
        $crate::msg_emit!(error, format!("\n❌ {}\n", $msg))
    };
}

/// Prints a warning message with ⚠️ prefix.
#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        $crate::msg_emit!(warn, format!("⚠️ {}", $msg))
    };
    ($msg:expr, true) => {
        $crate::msg_emit!(warn, format!("\n⚠️ {}\n", $msg))
    };
}

/// Prints an informational message with ℹ️ prefix.
#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        $crate::msg_emit!(info, format!("ℹ️ {}", $msg))
    };
    ($msg:expr, true) => {
        $crate::msg_emit!(info, format!("\nℹ️ {}\n", $msg))
    };
}

/// Debug-only output with 🔍 prefix, suppressed entirely outside debug mode.
///
/// Takes any displayable expression rather than a `Message`, since debug
/// details are developer-facing.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}

/// Creates an `anyhow::Error` from a message with ❌ prefix.
#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("❌ {}", $msg)
    };
}

/// Early return with an error created from a message.
#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        anyhow::bail!("❌ {}", $msg)
    };
}
