//! Game catalog data model, merge engine, and file I/O.
//!
//! This crate defines the persistent catalog schema (games and their
//! per-platform content entries), the video records that feed conversion,
//! and the JSON/CSV encodings used on disk. It has no network or clustering
//! dependencies so that every other crate can share these types.

pub mod error;
pub mod games_csv;
pub mod json;
pub mod merge;
pub mod types;
pub mod videos_csv;

pub use error::CatalogError;
pub use games_csv::{load_games_csv, read_games_csv, save_games_csv, write_games_csv};
pub use json::{load_catalog, read_catalog, save_catalog, sort_catalog, write_catalog};
pub use merge::merge_games;
pub use types::*;
pub use videos_csv::{load_videos_csv, read_videos_csv, save_videos_csv, write_videos_csv};
