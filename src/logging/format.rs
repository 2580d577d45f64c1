//! Log output: JSON lines (one object per line) or the human-readable formatter.

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset: the configured level for this
/// crate, plus HTTP access traces.
fn default_filter(level: &str) -> EnvFilter {
    EnvFilter::new(format!("{level},tower_http=info"))
}

pub struct StructuredLogger;

impl StructuredLogger {
    /// Install the global subscriber writing to stdout. `RUST_LOG` takes
    /// precedence over `default_level`.
    pub fn init(json: bool, default_level: &str) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(default_level));
        if json {
            let fmt = tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_events(FmtSpan::NONE)
                .with_writer(std::io::stdout);
            tracing_subscriber::registry().with(filter).with(fmt).init();
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
                .init();
        }
    }
}
