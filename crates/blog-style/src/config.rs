use std::path::{Path, PathBuf};

use style_data::loader::DataSource;

use crate::error::AppError;

const DATA_DIR_ENV: &str = "BLOG_STYLE_DATA_DIR";

/// Application configuration loaded explicitly from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the reference JSON files.
    pub data_dir: PathBuf,
}

impl Config {
    /// Optional:
    /// - `BLOG_STYLE_DATA_DIR`: directory holding the data files
    ///
    /// Without it, the first existing of `./.shared/data`, `<exe dir>/data` and
    /// `<exe dir>/../data` is used, falling back to `./.shared/data`.
    pub fn from_env() -> Result<Self, AppError> {
        let data_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(dir) if dir.is_empty() => {
                return Err(AppError::Config(format!(
                    "{DATA_DIR_ENV} is set but empty"
                )));
            }
            Some(dir) => PathBuf::from(dir),
            None => discover_data_dir(&default_candidates()),
        };

        Ok(Self { data_dir })
    }

    /// A `--data-dir` from the command line wins; the environment is only
    /// consulted without one.
    pub fn resolve(data_dir: Option<PathBuf>) -> Result<Self, AppError> {
        match data_dir {
            Some(data_dir) => Ok(Self { data_dir }),
            None => Self::from_env(),
        }
    }

    pub fn data_source(&self) -> DataSource {
        DataSource::new(&self.data_dir)
    }
}

fn default_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![Path::new(".shared").join("data")];
    if let Some(exe_dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        candidates.push(exe_dir.join("data"));
        candidates.push(exe_dir.join("..").join("data"));
    }
    candidates
}

fn discover_data_dir(candidates: &[PathBuf]) -> PathBuf {
    candidates
        .iter()
        .find(|dir| dir.is_dir())
        .or_else(|| candidates.first())
        .cloned()
        .unwrap_or_default()
}
