//! Local mirror fetcher using walkdir.
//!
//! Serves templates from a directory laid out as
//! `<root>/<user>/<repo>/<subdir>`, e.g. a checkout of the examples
//! repository under `<root>/radixdlt/official-examples`. The ref part of a
//! reference is ignored: the mirror holds one revision.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};
use walkdir::WalkDir;

use radix_create_core::{
    application::{ApplicationError, ports::TemplateFetcher},
    domain::RemoteReference,
    error::CreateResult,
};

use super::{check_destination, map_io_error};

/// Offline fetcher that copies from a local directory tree.
#[derive(Debug, Clone)]
pub struct LocalMirrorFetcher {
    root: PathBuf,
    force: bool,
}

impl LocalMirrorFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            force: true,
        }
    }

    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    /// Directory a reference resolves to inside the mirror.
    pub fn source_dir(&self, reference: &RemoteReference) -> PathBuf {
        let mut dir = self.root.join(&reference.user).join(&reference.repo);
        if let Some(subdir) = &reference.subdir {
            dir.push(subdir);
        }
        dir
    }
}

impl TemplateFetcher for LocalMirrorFetcher {
    #[instrument(skip_all, fields(reference = %reference, destination = %destination.display()))]
    fn fetch(&self, reference: &RemoteReference, destination: &Path) -> CreateResult<()> {
        let source = self.source_dir(reference);
        if !source.is_dir() {
            return Err(ApplicationError::SourceNotFound { path: source }.into());
        }
        check_destination(destination, self.force)?;

        let mut copied = 0usize;
        let walker = WalkDir::new(&source)
            .min_depth(1)
            .into_iter()
            .filter_entry(|e| e.file_name() != ".git");

        for entry in walker {
            let entry = entry.map_err(|e| ApplicationError::ExtractionFailed {
                path: source.clone(),
                reason: e.to_string(),
            })?;
            let relative = entry
                .path()
                .strip_prefix(&source)
                .map_err(|e| ApplicationError::ExtractionFailed {
                    path: entry.path().to_path_buf(),
                    reason: e.to_string(),
                })?;
            let target = destination.join(relative);

            if entry.file_type().is_dir() {
                fs::create_dir_all(&target)
                    .map_err(|e| map_io_error(&target, e, "create directory"))?;
            } else {
                if let Some(parent) = target.parent() {
                    fs::create_dir_all(parent)
                        .map_err(|e| map_io_error(parent, e, "create directory"))?;
                }
                fs::copy(entry.path(), &target).map_err(|e| map_io_error(&target, e, "copy"))?;
                copied += 1;
            }
        }

        // An empty template still yields its directory.
        fs::create_dir_all(destination)
            .map_err(|e| map_io_error(destination, e, "create directory"))?;

        debug!(source = %source.display(), "Copied from mirror");
        info!(files = copied, "Template copied");
        Ok(())
    }
}
