//! Video-to-game conversion.
//!
//! Turns scraped [`VideoRecord`](gamecast_catalog::VideoRecord)s into
//! [`Game`](gamecast_catalog::Game)s: titles are normalized, grouped by
//! shared prefixes/suffixes within overlapping windows, optionally resolved
//! against a storefront, and folded together with the catalog merge engine.

pub mod cluster;
pub mod convert;
pub mod error;
pub mod lookup;
pub mod normalize;
pub mod pipeline;
pub mod window;

pub use cluster::{cluster_window, longest_common_prefix, longest_common_suffix, title_case};
pub use convert::{ConvertOptions, Converter, DEFAULT_WINDOW_SIZE};
pub use error::ConvertError;
pub use lookup::{LookupError, TitleCache, TitleLookup};
pub use normalize::normalize;
pub use pipeline::{ConvertSummary, convert_directory, read_video_dir};
pub use window::sliding_windows;
