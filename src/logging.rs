//! Log setup for the `agenda` binary.
//!
//! Output from the binary (`agenda`) and the store (`agenda_core`) is written
//! to stderr, keeping stdout for command replies.

use tracing_subscriber::EnvFilter;

const CRATE_TARGETS: &[&str] = &["agenda", "agenda_core"];

/// Map the `-v` count to a level: none warns, `-v` info, `-vv` debug, more
/// traces. A set `RUST_LOG` takes precedence over the flag.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(target_directives(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn target_directives(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    CRATE_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}
