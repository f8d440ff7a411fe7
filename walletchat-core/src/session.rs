//! File-backed session store
//!
//! The expense tracker frontend keeps its bearer token in browser
//! localStorage under the key `token`. This is the CLI equivalent: a flat
//! JSON object on disk, read at call time. The chat client only ever reads
//! it; writes happen at sign-in (the `token set` command).

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Storage key for the bearer token
pub const TOKEN_KEY: &str = "token";

/// Key-value session state persisted as a JSON object
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl SessionStore {
    /// Load session state from `path`
    ///
    /// A missing file yields an empty store; an absent token is a legal
    /// state and produces an unauthenticated request downstream.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let values = if path.exists() {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read session file {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("Invalid session file {}", path.display()))?
        } else {
            HashMap::new()
        };

        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// The bearer token, if one is stored
    pub fn token(&self) -> Option<&str> {
        self.get(TOKEN_KEY)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Persist the current state back to the session file
    pub fn save(&self) -> Result<()> {
        let raw = serde_json::to_string_pretty(&self.values)?;
        std::fs::write(&self.path, raw)
            .with_context(|| format!("Failed to write session file {}", self.path.display()))
    }
}
