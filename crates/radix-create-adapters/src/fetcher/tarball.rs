//! Remote tarball fetcher.
//!
//! Downloads the repository archive for a reference and unpacks only the
//! requested subdirectory. Nothing is cached: every call downloads afresh
//! and the archive is streamed straight into the destination.

use std::fs;
use std::io::{self, Read};
use std::path::{Component, Path, PathBuf};
use std::time::Duration;

use flate2::read::GzDecoder;
use reqwest::blocking::Client;
use reqwest::header::CACHE_CONTROL;
use tar::Archive;
use tracing::{debug, info, instrument, warn};

use radix_create_core::{
    application::{ApplicationError, ports::TemplateFetcher},
    domain::RemoteReference,
    error::{CreateError, CreateResult},
};

use super::{check_destination, map_io_error};

/// Production fetcher: GitHub, GitLab or Bitbucket tarballs over HTTPS.
#[derive(Debug, Clone)]
pub struct TarballFetcher {
    client: Client,
    force: bool,
}

impl TarballFetcher {
    /// `timeout` bounds each whole request; `None` leaves it unbounded.
    pub fn with_options(force: bool, timeout: Option<Duration>) -> CreateResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("create-radix-dapp/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| CreateError::Configuration {
                message: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self { client, force })
    }
}

impl TemplateFetcher for TarballFetcher {
    #[instrument(skip_all, fields(reference = %reference, destination = %destination.display()))]
    fn fetch(&self, reference: &RemoteReference, destination: &Path) -> CreateResult<()> {
        check_destination(destination, self.force)?;

        let url = reference.tarball_url();
        debug!(%url, "Downloading template archive");

        let response = self
            .client
            .get(&url)
            .header(CACHE_CONTROL, "no-cache")
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| ApplicationError::DownloadFailed {
                url: url.clone(),
                reason: e.to_string(),
            })?;

        let written = unpack_subdir(response, reference.subdir.as_deref(), destination)?;
        if written == 0 {
            return Err(ApplicationError::SubdirectoryNotFound {
                reference: reference.to_string(),
                subdir: reference.subdir.clone().unwrap_or_else(|| "/".into()),
            }
            .into());
        }

        info!(entries = written, "Template archive unpacked");
        Ok(())
    }
}

/// Unpack the entries of a gzipped tarball that live under `subdir` into
/// `destination`.
///
/// The archive's single top-level directory (`<repo>-<ref>/`) is stripped
/// first. Entries that would land outside `destination` are skipped: paths
/// with `..` or a root, symlinks pointing out of the tree, hard links, and
/// anything whose existing ancestors resolve elsewhere on disk.
/// Returns the number of entries written.
pub fn unpack_subdir<R: Read>(
    reader: R,
    subdir: Option<&str>,
    destination: &Path,
) -> Result<usize, ApplicationError> {
    let archive_error = |e: io::Error| ApplicationError::ExtractionFailed {
        path: destination.to_path_buf(),
        reason: format!("unreadable archive: {e}"),
    };

    let mut archive = Archive::new(GzDecoder::new(reader));
    archive.set_overwrite(true);

    let subdir = subdir.map(Path::new);
    let mut root = None;
    let mut written = 0;

    for entry in archive.entries().map_err(archive_error)? {
        let mut entry = entry.map_err(archive_error)?;
        let kind = entry.header().entry_type();
        if kind.is_pax_global_extensions() {
            continue;
        }

        let path = entry.path().map_err(archive_error)?.into_owned();
        let Some(relative) = strip_archive_root(&path, subdir) else {
            continue;
        };
        if relative.as_os_str().is_empty() {
            continue;
        }
        if !is_contained(&relative) {
            warn!(path = %path.display(), "Skipping archive entry outside the destination");
            continue;
        }
        if kind.is_hard_link() {
            warn!(path = %path.display(), "Skipping hard link");
            continue;
        }
        if kind.is_symlink() {
            let inside = entry
                .link_name()
                .map_err(archive_error)?
                .is_some_and(|link| link_stays_inside(&relative, &link));
            if !inside {
                warn!(path = %path.display(), "Skipping symlink that leaves the destination");
                continue;
            }
        }

        let root = canonical_root(destination, &mut root)?;
        let inside = stays_inside(&root, destination, &relative)
            .map_err(|e| map_io_error(destination, e, "inspect"))?;
        if !inside {
            warn!(path = %path.display(), "Skipping archive entry behind a symlink");
            continue;
        }

        let target = destination.join(&relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|e| map_io_error(parent, e, "create directory"))?;
        }
        entry
            .unpack(&target)
            .map_err(|e| map_io_error(&target, e, "write"))?;
        written += 1;
    }

    Ok(written)
}

/// Create `destination` on first use and remember its resolved path.
fn canonical_root(
    destination: &Path,
    cache: &mut Option<PathBuf>,
) -> Result<PathBuf, ApplicationError> {
    if let Some(root) = cache {
        return Ok(root.clone());
    }
    fs::create_dir_all(destination)
        .map_err(|e| map_io_error(destination, e, "create directory"))?;
    let root = destination
        .canonicalize()
        .map_err(|e| map_io_error(destination, e, "resolve"))?;
    *cache = Some(root.clone());
    Ok(root)
}

/// Every path from `destination` down to `relative` that already exists must
/// resolve under `root`. Missing parts are created later as plain directories.
fn stays_inside(root: &Path, destination: &Path, relative: &Path) -> io::Result<bool> {
    let mut current = destination.to_path_buf();
    for component in relative.components() {
        current.push(component);
        match fs::symlink_metadata(&current) {
            Ok(_) => match current.canonicalize() {
                Ok(resolved) if resolved.starts_with(root) => {}
                _ => return Ok(false),
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(true),
            Err(e) => return Err(e),
        }
    }
    Ok(true)
}

/// Resolve `link` lexically from the directory holding `relative`.
fn link_stays_inside(relative: &Path, link: &Path) -> bool {
    let mut depth = relative.components().count().saturating_sub(1);
    for component in link.components() {
        match component {
            Component::Normal(_) => depth += 1,
            Component::CurDir => {}
            Component::ParentDir => match depth.checked_sub(1) {
                Some(up) => depth = up,
                None => return false,
            },
            Component::RootDir | Component::Prefix(_) => return false,
        }
    }
    true
}

/// Drop the archive root, then keep only paths under `subdir`.
fn strip_archive_root(path: &Path, subdir: Option<&Path>) -> Option<PathBuf> {
    let mut components = path.components();
    components.next()?;
    let inner = components.as_path();
    match subdir {
        Some(subdir) => inner.strip_prefix(subdir).ok().map(Path::to_path_buf),
        None => Some(inner.to_path_buf()),
    }
}

fn is_contained(relative: &Path) -> bool {
    relative
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}
