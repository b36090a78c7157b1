//! Consistency analysis between snapshots and documentation references.
//!
//! - [`ConsistencyAnalyzer`](engine::ConsistencyAnalyzer): Folds page references into the registry
//! - [`ConsistencyReport`](report::ConsistencyReport): The derived finding lists
//! - [`Verdict`](report::Verdict): Pass/fail decision and exit status
//!
//! ## Rules
//!
//! 1. Every chart snapshot needs a `.svg` reference
//! 2. Every audio snapshot needs a `.wav` reference; its `.svg` is optional unless
//!    [`AnalyzerConfig::require_audio_chart`](engine::AnalyzerConfig) is set
//! 3. Every reference must point at an existing snapshot (otherwise it is an orphan)
//! 4. References containing `.new.` are pending artifacts and are ignored
//!
//! Snapshots touched by no reference are listed as unreferenced. This is
//! informational unless [`ReportPolicy::strict_unreferenced`](report::ReportPolicy) is set.
//!
//! ## Example
//!
//! ```rust
//! use gallery_verify::{AnalyzerConfig, ConsistencyAnalyzer, GalleryLayout, ReportPolicy, SnapshotRegistry};
//!
//! let layout = GalleryLayout::default();
//! let mut registry = SnapshotRegistry::from_keys(["sine.snap"], &layout);
//! let analyzer = ConsistencyAnalyzer::new(&layout, AnalyzerConfig::default()).unwrap();
//!
//! let report = analyzer.analyze(&mut registry, ["![sine](examples/snapshots/sine.snap.svg)"]);
//! assert!(report.missing_chart_refs.is_empty());
//! assert!(!report.verdict(ReportPolicy::default()).is_failure());
//! ```

pub mod engine;
pub mod report;
