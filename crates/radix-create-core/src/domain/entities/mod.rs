//! Domain entities.

pub mod answers;
pub mod outcome;
pub mod remote;
pub mod template;
