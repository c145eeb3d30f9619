use std::fs::OpenOptions;
use std::path::PathBuf;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Installs the global subscriber.
///
/// `RUST_LOG` wins, then the filter from the config file, then a default
/// based on `verbose`. Logs go to stderr, or to `$SOLDER_LOG_DIR/solder.<pid>.log`
/// when that variable is set.
pub fn setup_tracing(verbose: bool, configured: Option<&str>) {
	let filter = || {
		EnvFilter::try_from_default_env().unwrap_or_else(|_| match configured {
			Some(directives) => EnvFilter::new(directives),
			None if verbose => EnvFilter::new("solder=debug,warn"),
			None => EnvFilter::new("solder=info,warn"),
		})
	};

	if let Some(log_dir) = std::env::var("SOLDER_LOG_DIR").ok().map(PathBuf::from)
		&& std::fs::create_dir_all(&log_dir).is_ok()
	{
		let log_path = log_dir.join(format!("solder.{}.log", std::process::id()));
		if let Ok(file) = OpenOptions::new().create(true).append(true).open(&log_path) {
			let file_layer = tracing_subscriber::fmt::layer().with_writer(file).with_ansi(false).with_target(true);
			tracing_subscriber::registry().with(filter()).with(file_layer).init();
			tracing::info!(path = ?log_path, "Tracing initialized");
			return;
		}
	}

	tracing_subscriber::fmt()
		.with_env_filter(filter())
		.with_writer(std::io::stderr)
		.init();
}
