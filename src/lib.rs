//! dashtheme keeps a dashboard's theme preference in one place
#![forbid(
    clippy::missing_docs_in_private_items,
    missing_docs,
    rustdoc::missing_crate_level_docs
)]

#[cfg(feature = "cli")]
pub mod app;
pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod macros;
pub mod storage;
pub mod surface;
pub mod theme;
pub mod watcher;
pub mod widgets;
