use std::fs::File;
use std::sync::Arc;

use folio_tui::{SiteError, mount, run};
use tracing_subscriber::EnvFilter;

/// The alternate screen owns stdout, so logging goes to a file when
/// `FOLIO_LOG` names one (level via `RUST_LOG`, default info).
fn init_logging() {
    let Ok(path) = std::env::var("FOLIO_LOG") else {
        return;
    };
    match File::create(&path) {
        Ok(file) => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
                )
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .init();
        }
        Err(error) => eprintln!("could not open log file {path}: {error}"),
    }
}

fn main() -> Result<(), SiteError> {
    init_logging();

    let handle = mount()?;
    let result = run(&handle);
    handle.unmount();
    result
}
