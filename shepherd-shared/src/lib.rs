//! Types shared across the Shepherd workspace.

pub mod errors;

pub use errors::{ShepherdError, ShepherdResult};
