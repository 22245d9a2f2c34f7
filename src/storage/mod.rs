//! local preference storage
//!
//! the store only ever holds one interesting value: the theme the user last
//! picked on purpose. no value means "follow the os".
pub mod disk;
pub mod memory;

use crate::error::Result;

pub use {disk::RedbStore, memory::MemoryStore};

/// a string key/value store for preferences
pub trait PreferenceStore {
    /// read a value
    fn load(&self, key: &str) -> Result<Option<String>>;
    /// write a value
    fn save(&self, key: &str, value: &str) -> Result<()>;
    /// delete a value, doing nothing if it isn't there
    fn remove(&self, key: &str) -> Result<()>;
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for Box<T> {
    fn load(&self, key: &str) -> Result<Option<String>> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        (**self).save(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}
