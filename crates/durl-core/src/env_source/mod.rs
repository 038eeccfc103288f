//! Layered placeholder value lookup.
//!
//! Live process environment first, then a `.env`-style override file from
//! the source's base directory. The file is read on the first lookup that
//! misses the environment and never again for the lifetime of the source,
//! even when later lookups miss too. Values already present in the live
//! environment always win over file entries.

mod parse;

use std::collections::HashMap;
use std::path::PathBuf;

use once_cell::sync::OnceCell;

use crate::error::ResolveError;

/// Override file probed in the source's base directory.
const ENV_FILE: &str = ".env";

/// Resolves placeholder values from the process environment with a
/// once-loaded local override file as fallback.
///
/// Construct one per process and share it by reference; the once-guard
/// makes concurrent first lookups race safely without loading the file
/// twice. A missing file still counts as the one load attempt.
#[derive(Debug)]
pub struct EnvSource {
    dir: PathBuf,
    overlay: OnceCell<HashMap<String, String>>,
}

impl EnvSource {
    /// Source rooted at the process working directory, where the host
    /// package manager runs.
    pub fn from_current_dir() -> std::io::Result<Self> {
        Ok(Self::at(std::env::current_dir()?))
    }

    /// Source rooted at an explicit directory.
    pub fn at(dir: PathBuf) -> Self {
        Self {
            dir,
            overlay: OnceCell::new(),
        }
    }

    /// Looks up `name`, loading the override file on the first miss.
    ///
    /// Empty values count as unset. Unresolvable names fail with
    /// [`ResolveError::MissingConfiguration`].
    pub fn resolve(&self, name: &str) -> Result<String, ResolveError> {
        if let Ok(value) = std::env::var(name) {
            if !value.is_empty() {
                return Ok(value);
            }
        }

        let overlay = self.overlay.get_or_init(|| self.load_overlay());
        match overlay.get(name) {
            Some(value) if !value.is_empty() => Ok(value.clone()),
            _ => Err(ResolveError::MissingConfiguration(name.to_string())),
        }
    }

    fn load_overlay(&self) -> HashMap<String, String> {
        let path = self.dir.join(ENV_FILE);
        match std::fs::read_to_string(&path) {
            Ok(text) => {
                let entries = parse::parse_env_file(&text);
                tracing::debug!(
                    "loaded {} override entries from {}",
                    entries.len(),
                    path.display()
                );
                entries
            }
            Err(err) => {
                tracing::debug!("no override file at {}: {}", path.display(), err);
                HashMap::new()
            }
        }
    }

    #[cfg(test)]
    fn overlay_loaded(&self) -> bool {
        self.overlay.get().is_some()
    }
}
