use serde::Serialize;
use std::collections::BTreeSet;

use crate::core::snapshot::SnapshotStatus;

/// Result of a consistency analysis.
///
/// Every list is sorted. Serializes to the report schema consumed by tooling;
/// the bookkeeping fields at the end are only used for verbose text output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConsistencyReport {
    /// Chart snapshots with no chart reference
    pub missing_chart_refs: Vec<String>,

    /// Audio snapshots with no audio reference
    pub missing_audio_refs: Vec<String>,

    /// Audio snapshots with no chart reference (only filled when required)
    pub missing_audio_svg_refs: Vec<String>,

    /// Referenced resources whose snapshot does not exist
    pub orphan_references: Vec<String>,

    /// Snapshots no reference touched (informational)
    pub unreferenced_snapshots: Vec<String>,

    pub total_snapshots: usize,

    pub snapshots: Vec<SnapshotStatus>,

    /// Distinct resources referenced by any page
    #[serde(skip)]
    pub referenced_resources: BTreeSet<String>,

    #[serde(skip)]
    pub pages_scanned: usize,
}

/// Options that turn informational findings into failures
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportPolicy {
    /// Unreferenced snapshots fail the run
    pub strict_unreferenced: bool,
}

/// Overall outcome of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Ok,
    Fail,
}

impl Verdict {
    #[must_use]
    pub fn is_failure(self) -> bool {
        self == Self::Fail
    }

    /// Process exit status: 0 for OK, 1 for FAIL
    #[must_use]
    pub fn exit_code(self) -> u8 {
        match self {
            Self::Ok => 0,
            Self::Fail => 1,
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ok => write!(f, "OK"),
            Self::Fail => write!(f, "FAIL"),
        }
    }
}

impl ConsistencyReport {
    /// Decide whether the run passes.
    ///
    /// Missing chart/audio references, missing audio chart references and orphans
    /// always fail. Unreferenced snapshots fail only under a strict policy.
    #[must_use]
    pub fn verdict(&self, policy: ReportPolicy) -> Verdict {
        let failed = !self.missing_chart_refs.is_empty()
            || !self.missing_audio_refs.is_empty()
            || !self.missing_audio_svg_refs.is_empty()
            || !self.orphan_references.is_empty()
            || (policy.strict_unreferenced && !self.unreferenced_snapshots.is_empty());

        if failed {
            Verdict::Fail
        } else {
            Verdict::Ok
        }
    }

    /// Serialize to pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
