//! CLI runtime configuration structures and loaders.
use std::env;
use std::path::PathBuf;

/// Configuration required to open a desk from the command line.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub data_dir: Option<PathBuf>,
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `FRONTDESK_DATA_DIR` - Directory for the collection files
    ///   (default: platform-specific data directory)
    pub fn from_env() -> Self {
        Self {
            data_dir: env::var("FRONTDESK_DATA_DIR").ok().map(PathBuf::from),
        }
    }

    /// Resolve the data directory, falling back to the platform default.
    pub fn resolve_data_dir(&self) -> PathBuf {
        if let Some(dir) = &self.data_dir {
            return dir.clone();
        }

        if let Some(dirs) = directories::ProjectDirs::from("", "", "frontdesk") {
            return dirs.data_dir().to_path_buf();
        }

        // Last resort when no home directory can be determined.
        PathBuf::from(".frontdesk")
    }
}
