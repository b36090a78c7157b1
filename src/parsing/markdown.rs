use regex::Regex;
use thiserror::Error;

use crate::core::layout::GalleryLayout;
use crate::core::reference::ExtractedReference;
use crate::core::types::ReferenceKind;

#[derive(Error, Debug)]
pub enum ExtractorError {
    #[error("Invalid reference pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

/// Characters allowed in a referenced snapshot file name
const NAME_CHARS: &str = "[A-Za-z0-9_.@-]";

/// Marker that, directly after a match, flags a pending artifact (`foo.snap.svg.new`)
const PENDING_SUFFIX: &str = ".new";

/// Finds snapshot artifact references in free-form page text.
///
/// A reference looks like `<snapshot_dir>/<name><suffix>.<svg|wav>`, matched
/// case-insensitively. The pattern is compiled once in [`ReferenceExtractor::new`]
/// and only read afterwards.
#[derive(Debug, Clone)]
pub struct ReferenceExtractor {
    pattern: Regex,
    chart_extension: String,
    audio_extension: String,
    transient_marker: String,
}

impl ReferenceExtractor {
    /// Compile the reference pattern for a layout
    ///
    /// # Errors
    ///
    /// Returns `ExtractorError::InvalidPattern` if the layout values produce a
    /// pattern the regex engine rejects (e.g. one exceeding its size limit).
    pub fn new(layout: &GalleryLayout) -> Result<Self, ExtractorError> {
        let pattern = format!(
            r"(?i){prefix}/(?P<resource>{NAME_CHARS}+{suffix}\.(?P<ext>{chart}|{audio}))",
            prefix = regex::escape(&layout.reference_prefix()),
            suffix = regex::escape(&layout.snapshot_suffix),
            chart = regex::escape(&layout.chart_extension),
            audio = regex::escape(&layout.audio_extension),
        );

        Ok(Self {
            pattern: Regex::new(&pattern)?,
            chart_extension: layout.chart_extension.clone(),
            audio_extension: layout.audio_extension.clone(),
            transient_marker: layout.transient_marker.clone(),
        })
    }

    /// Yield every non-transient reference in `text`, left to right.
    ///
    /// Matches do not overlap. Calling this again on the same text yields the
    /// same sequence.
    pub fn extract<'a>(&'a self, text: &'a str) -> impl Iterator<Item = ExtractedReference> + 'a {
        self.pattern.captures_iter(text).filter_map(move |caps| {
            let whole = caps.get(0)?;
            if is_pending(&text[whole.end()..]) {
                return None;
            }

            let resource = caps.name("resource")?.as_str();
            if resource.contains(&self.transient_marker) {
                return None;
            }

            let kind = self.kind_of(caps.name("ext")?.as_str())?;
            Some(ExtractedReference::new(resource, kind))
        })
    }

    fn kind_of(&self, ext: &str) -> Option<ReferenceKind> {
        if ext.eq_ignore_ascii_case(&self.chart_extension) {
            Some(ReferenceKind::Chart)
        } else if ext.eq_ignore_ascii_case(&self.audio_extension) {
            Some(ReferenceKind::Audio)
        } else {
            None
        }
    }
}

fn is_pending(rest: &str) -> bool {
    rest.get(..PENDING_SUFFIX.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(PENDING_SUFFIX))
}
