use serde::Serialize;

use crate::core::types::{ReferenceKind, SnapshotKind};

/// One snapshot file found in the snapshot directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotEntry {
    /// Full file name, including the snapshot suffix (e.g. `sine@audio.snap`)
    key: String,

    /// Chart or audio, fixed at registration
    kind: SnapshotKind,

    /// A chart reference to this snapshot was found
    chart_referenced: bool,

    /// An audio reference to this snapshot was found
    audio_referenced: bool,
}

impl SnapshotEntry {
    pub fn new(key: impl Into<String>, audio_marker: &str) -> Self {
        let key = key.into();
        let kind = SnapshotKind::classify(&key, audio_marker);
        Self {
            key,
            kind,
            chart_referenced: false,
            audio_referenced: false,
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn kind(&self) -> SnapshotKind {
        self.kind
    }

    #[must_use]
    pub fn is_audio(&self) -> bool {
        self.kind == SnapshotKind::Audio
    }

    #[must_use]
    pub fn chart_referenced(&self) -> bool {
        self.chart_referenced
    }

    #[must_use]
    pub fn audio_referenced(&self) -> bool {
        self.audio_referenced
    }

    /// Record a reference of the given kind. Marks only ever go from false to true.
    pub fn mark(&mut self, kind: ReferenceKind) {
        match kind {
            ReferenceKind::Chart => self.chart_referenced = true,
            ReferenceKind::Audio => self.audio_referenced = true,
        }
    }

    /// True when no reference of any kind touched this snapshot
    #[must_use]
    pub fn is_unreferenced(&self) -> bool {
        !self.chart_referenced && !(self.is_audio() && self.audio_referenced)
    }

    /// Resource name a chart reference must use, e.g. `foo.snap.svg`
    #[must_use]
    pub fn expected_chart(&self, chart_extension: &str) -> String {
        format!("{}.{chart_extension}", self.key)
    }

    /// Resource name an audio reference must use, e.g. `foo@audio.snap.wav`
    #[must_use]
    pub fn expected_audio(&self, audio_extension: &str) -> String {
        format!("{}.{audio_extension}", self.key)
    }

    /// Serializable view used in reports
    #[must_use]
    pub fn status(&self) -> SnapshotStatus {
        SnapshotStatus {
            snap: self.key.clone(),
            is_audio: self.is_audio(),
            chart_referenced: self.chart_referenced,
            audio_referenced: self.audio_referenced,
        }
    }
}

/// Per-snapshot line of the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotStatus {
    pub snap: String,
    pub is_audio: bool,
    pub chart_referenced: bool,
    pub audio_referenced: bool,
}
