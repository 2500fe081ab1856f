pub mod json_backend;

use crate::errors::PlannerError;

pub type Result<T> = std::result::Result<T, PlannerError>;

/// Abstraction over key-value persistence backends.
///
/// Keys are arbitrary strings and values opaque JSON blobs; a missing key is
/// `None`, never an error.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

pub use json_backend::JsonStorage;
