use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Once;

use crate::errors::Result;

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("planner_core=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
    });
}

/// Creates the directory (and any missing parents) when absent.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Resolves well-known filesystem locations for planner data.
pub struct PathResolver;

impl PathResolver {
    /// Base data directory: explicit override, platform data dir, or a
    /// relative fallback for environments without one.
    pub fn resolve_base(root: Option<PathBuf>) -> PathBuf {
        if let Some(root) = root {
            return root;
        }
        dirs::data_dir()
            .map(|dir| dir.join("planner_core"))
            .unwrap_or_else(|| PathBuf::from(".planner_core"))
    }

    pub fn config_file_in(base: &Path) -> PathBuf {
        base.join("config.json")
    }
}
