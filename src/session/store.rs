use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::catalog;
use crate::scoring::AnswerMap;
use crate::session::config::{ConfigError, SessionConfig};
use crate::session::session::Session;
use crate::types::CatalogVersion;

pub const SESSION_FILE: &str = "session.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Config(#[from] ConfigError),
    #[error("Snapshot was written for catalog {found}, current catalog is {expected}")]
    CatalogMismatch {
        expected: CatalogVersion,
        found: CatalogVersion,
    },
}

/// Persisted form of a session: enough to rebuild the order and answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub catalog_version: CatalogVersion,
    pub seed: u64,
    pub answers: AnswerMap,
}

impl SessionSnapshot {
    pub fn capture(session: &Session) -> Self {
        Self {
            catalog_version: catalog::version().clone(),
            seed: session.seed(),
            answers: session.answers().clone(),
        }
    }

    /// Rebuild a session. Fails if the snapshot targets another bank.
    pub fn restore(self, config: SessionConfig) -> Result<Session, StoreError> {
        let expected = catalog::version();
        if &self.catalog_version != expected {
            warn!(
                "Rejecting session snapshot for catalog {} (current {})",
                self.catalog_version, expected
            );
            return Err(StoreError::CatalogMismatch {
                expected: expected.clone(),
                found: self.catalog_version,
            });
        }
        Ok(Session::with_answers(config, self.seed, self.answers)?)
    }
}

impl Session {
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::capture(self)
    }
}

/// Directory-backed key-value store holding one session snapshot.
///
/// Single writer. Saves go through a temp file and an atomic rename so a
/// crash never leaves a torn `session.json`.
#[derive(Debug, Clone)]
pub struct SessionStore {
    root: PathBuf,
}

impl SessionStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path(&self) -> PathBuf {
        self.root.join(SESSION_FILE)
    }

    pub fn save(&self, session: &Session) -> Result<(), StoreError> {
        fs::create_dir_all(&self.root)?;

        let path = self.path();
        let temp_path = path.with_extension("json.tmp");

        let written = Self::write_snapshot(&temp_path, &path, &session.snapshot());
        if let Err(err) = written {
            warn!("Failed to save session to {}: {}", path.display(), err);
            let _ = fs::remove_file(&temp_path);
            return Err(err);
        }
        debug!("Saved session (seed {}) to {}", session.seed(), path.display());
        Ok(())
    }

    fn write_snapshot(
        temp_path: &Path,
        path: &Path,
        snapshot: &SessionSnapshot,
    ) -> Result<(), StoreError> {
        let f = fs::File::create(temp_path)?;
        serde_json::to_writer_pretty(&f, snapshot)?;
        f.sync_all()?;
        fs::rename(temp_path, path)?;
        Ok(())
    }

    /// Load the stored session. A missing file means nothing was saved yet.
    pub fn load(&self, config: SessionConfig) -> Result<Option<Session>, StoreError> {
        let f = match fs::File::open(self.path()) {
            Ok(f) => f,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let snapshot: SessionSnapshot = serde_json::from_reader(f)?;
        snapshot.restore(config).map(Some)
    }

    /// Load the stored session or start (and persist) a fresh one.
    pub fn load_or_start(&self, config: SessionConfig) -> Result<Session, StoreError> {
        if let Some(session) = self.load(config.clone())? {
            return Ok(session);
        }
        let session = Session::new(config)?;
        self.save(&session)?;
        Ok(session)
    }

    pub fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(self.path()) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
