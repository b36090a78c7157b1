//! Core data types for snapshot gallery verification.
//!
//! - [`SnapshotEntry`]: One snapshot file with its chart/audio reference marks
//! - [`ExtractedReference`]: A snapshot artifact mentioned by a documentation page
//! - [`SnapshotKind`], [`ReferenceKind`]: Chart/audio classification
//! - [`GalleryLayout`]: Directory locations and naming conventions
//!
//! ## Naming
//!
//! | File | Kind | Chart reference | Audio reference |
//! |------|------|-----------------|-----------------|
//! | `sine.snap` | chart | `sine.snap.svg` | - |
//! | `sine@audio.snap` | audio | `sine@audio.snap.svg` (optional) | `sine@audio.snap.wav` |
//!
//! [`SnapshotEntry`]: snapshot::SnapshotEntry
//! [`ExtractedReference`]: reference::ExtractedReference
//! [`SnapshotKind`]: types::SnapshotKind
//! [`ReferenceKind`]: types::ReferenceKind
//! [`GalleryLayout`]: layout::GalleryLayout

pub mod layout;
pub mod reference;
pub mod snapshot;
pub mod types;
