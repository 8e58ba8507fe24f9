// File: ./src/config.rs
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const DATA_DIR_ENV: &str = "DOWNY_DATA_DIR";
const DATA_FILE_NAME: &str = "tasks.txt";

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Where tasks are kept. Defaults to the platform data directory.
    #[serde(default)]
    pub data_file: Option<PathBuf>,
    #[serde(default = "default_true")]
    pub show_welcome: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: None,
            show_welcome: true,
        }
    }
}

impl Config {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("com", "downy", "downy")
    }

    pub fn get_path() -> Option<PathBuf> {
        Self::project_dirs().map(|proj| proj.config_dir().join("config.toml"))
    }

    /// Loads the platform config file, or the defaults when there is none
    pub fn load() -> Result<Self> {
        match Self::get_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config file {:?}", path))?;
        Ok(config)
    }

    /// `$DOWNY_DATA_DIR/tasks.txt`, then `data_file`, then the platform data
    /// directory, then `./tasks.txt`
    pub fn data_file(&self) -> PathBuf {
        self.resolve_data_file(env::var_os(DATA_DIR_ENV).map(PathBuf::from))
    }

    fn resolve_data_file(&self, env_dir: Option<PathBuf>) -> PathBuf {
        if let Some(dir) = env_dir {
            return dir.join(DATA_FILE_NAME);
        }
        if let Some(path) = &self.data_file {
            return path.clone();
        }
        if let Some(proj) = Self::project_dirs() {
            return proj.data_dir().join(DATA_FILE_NAME);
        }
        PathBuf::from(DATA_FILE_NAME)
    }
}
