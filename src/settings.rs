use std::path::PathBuf;

use anyhow::{Context, Result};
use config::{Config, Environment};
use serde::Deserialize;

pub const ENV_PREFIX: &str = "PROMPT_READER";
pub const DEFAULT_INPUT_FILE: &str = "prompt.md";
pub const DEFAULT_ARCHIVE_DIR: &str = "archive";

/// Where the prompt lives and where archives go. Paths are relative to
/// `workdir`.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub workdir: PathBuf,
    pub input_file: String,
    pub archive_dir: String,
}

impl Settings {
    /// Defaults, then `PROMPT_READER_*` environment variables.
    pub fn load() -> Result<Self> {
        Self::from_env(Environment::with_prefix(ENV_PREFIX).prefix_separator("_"))
    }

    fn from_env(env: Environment) -> Result<Self> {
        Config::builder()
            .set_default("workdir", ".")?
            .set_default("input_file", DEFAULT_INPUT_FILE)?
            .set_default("archive_dir", DEFAULT_ARCHIVE_DIR)?
            .add_source(env)
            .build()?
            .try_deserialize()
            .context("Invalid prompt_reader settings")
    }

    /// A directory given on the command line beats the environment.
    pub fn with_workdir(mut self, dir: Option<PathBuf>) -> Self {
        if let Some(dir) = dir {
            self.workdir = dir;
        }
        self
    }

    pub fn input_path(&self) -> PathBuf {
        self.workdir.join(&self.input_file)
    }

    pub fn archive_path(&self) -> PathBuf {
        self.workdir.join(&self.archive_dir)
    }
}
