//! # Folio Storage
//!
//! Durable key/value slots for Folio.
//!
//! A slot is a named string value that survives process restarts. The page
//! keeps exactly one of them (the theme preference), but the trait is keyed
//! so other preferences can share the same backing file.
//!
//! ## Features
//!
//! - **SlotStore trait**: get/set/remove of string values by slot name
//! - **InMemorySlotStore**: volatile implementation for tests and fallback
//! - **FileSlotStore**: JSON-file implementation for real sessions
//!
//! ## Example
//!
//! ```rust,ignore
//! use folio_storage::{FileSlotStore, SlotStore};
//!
//! let store = FileSlotStore::open("/tmp/folio")?;
//! store.set("theme", "dark")?;
//! assert_eq!(store.get("theme")?.as_deref(), Some("dark"));
//! ```

pub mod error;
pub mod file;
pub mod memory;

// Re-exports
pub use error::StorageError;
pub use file::{FileSlotStore, PREFERENCES_FILE};
pub use memory::InMemorySlotStore;

/// A durable key/value slot store.
///
/// Every call is a single synchronous attempt; callers decide whether a
/// failure matters. Implementations must be shareable behind an `Arc`.
pub trait SlotStore: Send + Sync {
    /// Read the value stored under `slot`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read or is corrupt.
    fn get(&self, slot: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `slot`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    fn set(&self, slot: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `slot`. Removing an absent slot is not an error.
    fn remove(&self, slot: &str) -> Result<(), StorageError>;
}
