use tracing_subscriber::EnvFilter;

/// Initialise tracing from the `-v` count: none warn, `-v` info, `-vv` debug,
/// `-vvv` trace. `RUST_LOG` wins when set.
pub fn init(verbosity: u8) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn default_filter(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    format!("{}={level}", env!("CARGO_CRATE_NAME"))
}

// -- Tests -------------------------------------------------------------------
