use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize structured logging based on CLI arguments
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    // Determine log level from CLI arguments
    let level = match (verbose, log_level) {
        (true, None) => "pathgrid=debug,pathgrid_core=debug",
        (false, None) => "pathgrid=warn,pathgrid_core=warn",
        (_, Some(level)) => return init_with_level(level, log_json),
    };

    init_with_level(level, log_json)
}

fn init_with_level(level: &str, log_json: bool) -> Result<(), Box<dyn std::error::Error>> {
    // Support PATHGRID_LOG environment variable override
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("PATHGRID_LOG"))
        .unwrap_or_else(|_| {
            EnvFilter::new(if level.contains('=') {
                level.to_string()
            } else {
                format!("pathgrid={0},pathgrid_core={0}", level)
            })
        });

    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false)
                    .with_span_events(
                        tracing_subscriber::fmt::format::FmtSpan::NEW
                            | tracing_subscriber::fmt::format::FmtSpan::CLOSE,
                    ),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}
