use nu_ansi_term::{AnsiGenericString, Color, Style};
use tracing_subscriber::EnvFilter;

/// Installs the fmt subscriber. `RUST_LOG` wins over `--verbose`.
/// Logs go to stderr so command output can be piped.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

pub fn bold<'a>(msg: impl AsRef<str> + 'a) -> AnsiGenericString<'a, str> {
    Style::new().bold().paint(msg.as_ref().to_owned())
}

pub fn green<'a>(msg: impl AsRef<str> + 'a) -> AnsiGenericString<'a, str> {
    Color::Green.paint(msg.as_ref().to_owned())
}

pub fn yellow<'a>(msg: impl AsRef<str> + 'a) -> AnsiGenericString<'a, str> {
    Color::Yellow.paint(msg.as_ref().to_owned())
}
