//! Snapshot registry.
//!
//! The registry enumerates the snapshot directory once per run and holds one
//! [`SnapshotEntry`](crate::core::snapshot::SnapshotEntry) per file, keyed by
//! its full file name:
//!
//! - `<stem>.snap` is a chart snapshot
//! - `<stem>@audio.snap` is an audio snapshot
//!
//! ## Example
//!
//! ```rust,no_run
//! use gallery_verify::{GalleryLayout, SnapshotRegistry};
//! use std::path::Path;
//!
//! let layout = GalleryLayout::default();
//! let registry = SnapshotRegistry::build(&layout.snapshot_path(Path::new(".")), &layout).unwrap();
//!
//! for entry in registry.iter() {
//!     println!("{} ({})", entry.key(), entry.kind());
//! }
//! ```

pub mod store;
