//! Reading documentation pages and extracting snapshot references from them.
//!
//! Pages are treated as plain text; no Markdown structure is parsed.
//!
//! - [`markdown`]: The [`ReferenceExtractor`](markdown::ReferenceExtractor) pattern scanner
//! - [`pages`]: Page discovery and lossy UTF-8 loading
//!
//! ## Example
//!
//! ```rust
//! use gallery_verify::parsing::markdown::ReferenceExtractor;
//! use gallery_verify::GalleryLayout;
//!
//! let extractor = ReferenceExtractor::new(&GalleryLayout::default()).unwrap();
//! let text = "![lfo](examples/snapshots/lfo.snap.svg)";
//!
//! let refs: Vec<_> = extractor.extract(text).collect();
//! assert_eq!(refs[0].underlying_key, "lfo.snap");
//! ```
//!
//! ## Recognized References
//!
//! | Reference | Kind | Counted |
//! |-----------|------|---------|
//! | `examples/snapshots/<name>.snap.svg` | chart | yes |
//! | `examples/snapshots/<name>.snap.wav` | audio | yes |
//! | anything containing `.new.` | - | no |

pub mod markdown;
pub mod pages;
