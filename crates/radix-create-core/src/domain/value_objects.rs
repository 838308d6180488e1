//! Domain value objects: DependencyRoot, ProjectName.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity.
//! `ProjectName` is the only validated type: it rejects blank input and
//! nothing else. Filesystem legality is left to the materializer, whose own
//! failure path reports it.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

// ── DependencyRoot ───────────────────────────────────────────────────────────

/// Where the package manager runs inside a materialized project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DependencyRoot {
    /// `package.json` sits at the project root.
    ProjectRoot,
    /// Fullstack templates keep the front-end in `client/`.
    ClientSubdirectory,
}

impl DependencyRoot {
    /// Directory name appended to the project directory, if any.
    pub const CLIENT_DIR: &'static str = "client";

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ProjectRoot => "root-dir",
            Self::ClientSubdirectory => "client-dir",
        }
    }

    /// Resolve the install directory for a project directory.
    pub fn resolve(self, project_dir: &Path) -> PathBuf {
        match self {
            Self::ProjectRoot => project_dir.to_path_buf(),
            Self::ClientSubdirectory => project_dir.join(Self::CLIENT_DIR),
        }
    }
}

impl fmt::Display for DependencyRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── ProjectName ──────────────────────────────────────────────────────────────

/// A non-blank project name, kept exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectName(String);

impl ProjectName {
    /// Accept any string containing at least one non-whitespace character.
    pub fn parse(raw: impl Into<String>) -> Result<Self, DomainError> {
        let raw = raw.into();
        Self::validate(&raw)?;
        Ok(Self(raw))
    }

    /// Check a candidate without taking ownership.
    pub fn validate(raw: &str) -> Result<(), DomainError> {
        if raw.trim().is_empty() {
            return Err(DomainError::EmptyProjectName);
        }
        Ok(())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The project directory, relative to the current working directory.
    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ProjectName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ── tests ────────────────────────────────────────────────────────────────────
