use taplog::commands::Cli;
use taplog::libs::messages::macros::is_debug_mode;
use taplog::libs::messages::Message;
use taplog::msg_error;
use tracing_subscriber::EnvFilter;

fn main() {
    // The message macros route through `tracing` in debug mode, so a
    // subscriber is only installed when that mode is active.
    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
            .with_target(false)
            .init();
    }

    if let Err(err) = Cli::menu() {
        msg_error!(Message::ErrorOccurred(format!("{:#}", err)));
        std::process::exit(1);
    }
}
