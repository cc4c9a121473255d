//! Application module: exposes the app model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and holds the navigation stack,
//! per-screen cursors and the cached catalog/library data.

mod model;

pub use model::*;

#[cfg(test)]
mod tests;
