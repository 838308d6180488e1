//! Template fetchers.
//!
//! Both fetchers share the destination rules: a non-empty destination is
//! only written when `force` is set, and existing files are overwritten.

mod local;
mod tarball;

use std::io;
use std::path::Path;

use radix_create_core::application::ApplicationError;

pub use local::LocalMirrorFetcher;
pub use tarball::{TarballFetcher, unpack_subdir};

/// Refuse a non-empty destination unless `force` is set.
fn check_destination(destination: &Path, force: bool) -> Result<(), ApplicationError> {
    if force {
        return Ok(());
    }
    let occupied = match std::fs::read_dir(destination) {
        Ok(mut entries) => entries.next().is_some(),
        Err(_) => false,
    };
    if occupied {
        return Err(ApplicationError::DestinationNotEmpty {
            path: destination.to_path_buf(),
        });
    }
    Ok(())
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> ApplicationError {
    ApplicationError::ExtractionFailed {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
}
