//! # gallery-verify
//!
//! Checks that a directory of test snapshots and the documentation pages that
//! showcase them agree with each other.
//!
//! Snapshot tests record expected charts (`<stem>.snap`) and audio renderings
//! (`<stem>@audio.snap`). A documentation gallery embeds the rendered outputs
//! (`examples/snapshots/<stem>.snap.svg`, `examples/snapshots/<stem>@audio.snap.wav`).
//! Over time the two drift apart: snapshots are added without being shown, and
//! pages keep pointing at snapshots that were renamed or deleted.
//!
//! ## Features
//!
//! - **Missing references**: Chart snapshots without a `.svg`, audio snapshots without a `.wav`
//! - **Orphan references**: Page references whose snapshot does not exist
//! - **Unreferenced snapshots**: Snapshots no page mentions at all
//! - **Pending artifacts**: `.new.` references are ignored everywhere
//! - **Configurable layout**: Directory names, suffixes and markers are plain values
//!
//! ## Example
//!
//! ```rust,no_run
//! use gallery_verify::{AnalyzerConfig, ConsistencyAnalyzer, GalleryLayout, ReportPolicy, SnapshotRegistry};
//! use gallery_verify::parsing::pages::load_pages;
//! use std::path::Path;
//!
//! let root = Path::new(".");
//! let layout = GalleryLayout::default();
//!
//! let mut registry = SnapshotRegistry::build(&layout.snapshot_path(root), &layout).unwrap();
//! let pages = load_pages(&layout.pages_path(root), &layout.page_extension).unwrap();
//!
//! let analyzer = ConsistencyAnalyzer::new(&layout, AnalyzerConfig::default()).unwrap();
//! let report = analyzer.analyze(&mut registry, pages.iter().map(|p| p.text.as_str()));
//!
//! for orphan in &report.orphan_references {
//!     println!("orphan: {orphan}");
//! }
//! std::process::exit(i32::from(report.verdict(ReportPolicy::default()).exit_code()));
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Snapshot registry built from the snapshot directory
//! - [`core`]: Core data types and the gallery layout
//! - [`matching`]: Consistency analyzer and report
//! - [`parsing`]: Page loading and reference extraction
//! - [`cli`]: Command-line interface implementation

pub mod catalog;
pub mod cli;
pub mod core;
pub mod matching;
pub mod parsing;

// Re-export commonly used types for convenience
pub use catalog::store::SnapshotRegistry;
pub use core::layout::GalleryLayout;
pub use core::reference::ExtractedReference;
pub use core::snapshot::SnapshotEntry;
pub use core::types::*;
pub use matching::engine::{AnalyzerConfig, ConsistencyAnalyzer};
pub use matching::report::{ConsistencyReport, ReportPolicy, Verdict};
