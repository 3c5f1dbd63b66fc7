pub mod adapter; // Row binding + mutation API
pub mod change;
pub mod config;
pub mod error;
pub mod formatter;
pub mod host; // Render host seam
pub mod list; // Ordered medicine list state
pub mod models;
pub mod preview;

pub use adapter::{ListAdapter, MedicineAdapter, MedicineRow, RowSlots};
pub use change::{ChangeKind, ListChange};
pub use error::ListError;
pub use formatter::{DefaultRowFormatter, RowFormatter};
pub use host::{ChannelHost, LoggingHost, RenderHost};
pub use list::MedicineList;
pub use models::{DaysOfWeek, Medicine};

use tracing_subscriber::EnvFilter;

/// Entry point of the preview binary.
pub fn run() -> std::process::ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("{} preview v{}", config::APP_NAME, config::APP_VERSION);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut stdout = std::io::stdout().lock();
    match preview::run_preview(&args, &mut stdout) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Preview failed: {e}");
            std::process::ExitCode::FAILURE
        }
    }
}
