//! Package manager adapters.

mod npm;

pub use npm::{DEFAULT_INSTALL_ARGS, NpmPackageManager};
