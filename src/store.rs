//! Local persistence: a small key-value store plus the typed library
//! repository built on top of it (favorites, follows, likes, search
//! history, now-playing snapshot).

mod kv;
mod library;

pub use kv::{default_data_dir, JsonFileStore, KvStore, MemoryStore, StoreError};
pub use library::MusicLibrary;

#[cfg(test)]
mod tests;
