use std::sync::OnceLock;
use tracing_subscriber::{EnvFilter, fmt};

static INIT: OnceLock<()> = OnceLock::new();

/// Initialize stderr logging once for the whole process.
/// `RUST_LOG` wins over `default_filter` when set, e.g. `RUST_LOG=fen_board=debug`.
pub fn init_logging(default_filter: &str) {
    INIT.get_or_init(|| {
        let env_filter = if std::env::var_os("RUST_LOG").is_some() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::try_new(default_filter).unwrap_or_else(|_| EnvFilter::new("info"))
        };

        let subscriber = fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .finish();

        // Someone else may already own the global subscriber (tests, host app).
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}
