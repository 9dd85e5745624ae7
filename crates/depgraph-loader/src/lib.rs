//! Graph loading from remote or local sources

pub mod error;
pub mod loader;
pub mod source;


pub use error::{LoadError, Result};
pub use loader::{GraphLoader, REMOTE_MAX_AGE, load};
pub use source::Source;
