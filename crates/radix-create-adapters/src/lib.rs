//! Infrastructure adapters for create-radix-dapp.
//!
//! This crate implements the driven ports defined in
//! `radix-create-core::application::ports`. It contains the network and
//! subprocess I/O.

pub mod fetcher;
pub mod package_manager;

// Re-export commonly used adapters
pub use fetcher::{LocalMirrorFetcher, TarballFetcher};
pub use package_manager::NpmPackageManager;
