//! Temporary directories holding request scripts

use crate::fixtures::Script;
use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Isolated directory for writing scripts; removed on drop
pub struct ScriptEnvironment {
    pub temp_dir: TempDir,
}

impl ScriptEnvironment {
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
        })
    }

    /// Write a script file and return its path
    pub fn write_script(&self, name: &str, script: &Script) -> Result<PathBuf> {
        self.write_raw(name, &script.render())
    }

    /// Write arbitrary script text, including malformed lines
    pub fn write_raw(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.temp_dir.path().join(name);
        fs::write(&path, content)?;
        Ok(path)
    }
}
