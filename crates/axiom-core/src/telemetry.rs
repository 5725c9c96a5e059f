//! Log setup for the `axiom` binary.
//!
//! The console prompt and every report are written to stdout, so the
//! subscriber installed here always writes to stderr. Diagnostics can then be
//! redirected or silenced without breaking the prompt loop or piped JSON.

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Install the global subscriber writing to stderr.
///
/// `level` applies only when `RUST_LOG` is unset. With `json`, each event is
/// one JSON object per line. A second call leaves the first subscriber in
/// place.
pub fn init_tracing(json: bool, level: Level) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    if json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .json(),
            )
            .try_init()
            .ok();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .try_init()
            .ok();
    }
}
