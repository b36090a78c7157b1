use std::collections::BTreeSet;
use tracing::debug;

use crate::catalog::store::SnapshotRegistry;
use crate::core::layout::GalleryLayout;
use crate::core::snapshot::SnapshotEntry;
use crate::matching::report::ConsistencyReport;
use crate::parsing::markdown::{ExtractorError, ReferenceExtractor};

/// Configuration for the consistency analyzer
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyzerConfig {
    /// Audio snapshots must also have their chart referenced
    pub require_audio_chart: bool,
}

/// References seen so far in a run
#[derive(Debug, Default)]
struct Fold {
    referenced: BTreeSet<String>,
    orphans: BTreeSet<String>,
    pages: usize,
}

/// Cross-checks documentation references against the snapshot registry
#[derive(Debug, Clone)]
pub struct ConsistencyAnalyzer {
    extractor: ReferenceExtractor,
    config: AnalyzerConfig,
}

impl ConsistencyAnalyzer {
    /// Create an analyzer for a layout
    ///
    /// # Errors
    ///
    /// Returns `ExtractorError::InvalidPattern` if the layout yields an unusable pattern.
    pub fn new(layout: &GalleryLayout, config: AnalyzerConfig) -> Result<Self, ExtractorError> {
        Ok(Self::with_extractor(ReferenceExtractor::new(layout)?, config))
    }

    /// Create an analyzer around an already compiled extractor
    pub fn with_extractor(extractor: ReferenceExtractor, config: AnalyzerConfig) -> Self {
        Self { extractor, config }
    }

    /// Fold every reference in `pages` into `registry` and derive the report.
    ///
    /// Marks on registry entries only go from false to true, so page order and
    /// repeated runs over the same pages do not change the result.
    pub fn analyze<I, T>(&self, registry: &mut SnapshotRegistry, pages: I) -> ConsistencyReport
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut fold = Fold::default();
        for page in pages {
            self.fold_page(registry, page.as_ref(), &mut fold);
        }

        debug!(
            "Scanned {} pages: {} distinct references, {} orphans",
            fold.pages,
            fold.referenced.len(),
            fold.orphans.len()
        );

        self.derive_report(registry, fold)
    }

    fn fold_page(&self, registry: &mut SnapshotRegistry, text: &str, fold: &mut Fold) {
        fold.pages += 1;
        for reference in self.extractor.extract(text) {
            match registry.get_mut(&reference.underlying_key) {
                Some(entry) => entry.mark(reference.kind),
                None => {
                    fold.orphans.insert(reference.resource.clone());
                }
            }
            fold.referenced.insert(reference.resource);
        }
    }

    fn derive_report(&self, registry: &SnapshotRegistry, fold: Fold) -> ConsistencyReport {
        let missing_audio_svg_refs = if self.config.require_audio_chart {
            keys_where(registry, |e| e.is_audio() && !e.chart_referenced())
        } else {
            Vec::new()
        };

        ConsistencyReport {
            missing_chart_refs: keys_where(registry, |e| !e.is_audio() && !e.chart_referenced()),
            missing_audio_refs: keys_where(registry, |e| e.is_audio() && !e.audio_referenced()),
            missing_audio_svg_refs,
            orphan_references: fold.orphans.into_iter().collect(),
            unreferenced_snapshots: keys_where(registry, SnapshotEntry::is_unreferenced),
            total_snapshots: registry.len(),
            snapshots: registry.statuses(),
            referenced_resources: fold.referenced,
            pages_scanned: fold.pages,
        }
    }
}

fn keys_where(
    registry: &SnapshotRegistry,
    pred: impl Fn(&SnapshotEntry) -> bool,
) -> Vec<String> {
    registry
        .iter()
        .filter(|&e| pred(e))
        .map(|e| e.key().to_string())
        .collect()
}
