use anyhow::{Context, Result};
use std::path::PathBuf;

pub(crate) const DEFAULT_USER: &str = "me";
pub(crate) const DEFAULT_LOG_FILTER: &str = "fintrack=info";
const LOG_FILE: &str = "fintrack.log";

/// Start-up settings, read once from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Config {
    /// Recorded as `created_by` on new expenses.
    pub(crate) user: String,
    pub(crate) log_filter: String,
    pub(crate) log_dir: PathBuf,
}

impl Config {
    pub(crate) fn from_env() -> Result<Self> {
        Self::resolve(|key| std::env::var(key).ok(), default_log_dir)
    }

    /// Build from a variable lookup. `default_dir` is only consulted when
    /// `FINTRACK_LOG_DIR` is unset.
    pub(crate) fn resolve(
        var: impl Fn(&str) -> Option<String>,
        default_dir: impl FnOnce() -> Result<PathBuf>,
    ) -> Result<Self> {
        let non_blank = |key: &str| var(key).filter(|v| !v.trim().is_empty());

        let user = non_blank("FINTRACK_USER")
            .map(|u| u.trim().to_string())
            .unwrap_or_else(|| DEFAULT_USER.to_string());
        let log_filter =
            non_blank("FINTRACK_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        let log_dir = match non_blank("FINTRACK_LOG_DIR") {
            Some(dir) => PathBuf::from(expand_home(&dir)),
            None => default_dir()?,
        };

        Ok(Self {
            user,
            log_filter,
            log_dir,
        })
    }

    pub(crate) fn log_path(&self) -> PathBuf {
        self.log_dir.join(LOG_FILE)
    }

    pub(crate) fn ensure_log_dir(&self) -> Result<()> {
        std::fs::create_dir_all(&self.log_dir).with_context(|| {
            format!("Failed to create log directory: {}", self.log_dir.display())
        })
    }
}

fn default_log_dir() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "fintrack", "Fintrack")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

fn expand_home(path: &str) -> String {
    match path.strip_prefix("~/") {
        Some(rest) => directories::UserDirs::new()
            .map(|d| d.home_dir().join(rest).display().to_string())
            .unwrap_or_else(|| path.to_string()),
        None => path.to_string(),
    }
}
