use serde::{Deserialize, Serialize};

/// Classification of a snapshot file on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapshotKind {
    /// Chart snapshot: `<stem>.snap`
    Chart,
    /// Audio snapshot: `<stem>@audio.snap`
    Audio,
}

impl SnapshotKind {
    /// Classify a snapshot key by the presence of the audio marker
    #[must_use]
    pub fn classify(key: &str, audio_marker: &str) -> Self {
        if key.contains(audio_marker) {
            Self::Audio
        } else {
            Self::Chart
        }
    }
}

impl std::fmt::Display for SnapshotKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Chart => write!(f, "chart"),
            Self::Audio => write!(f, "audio"),
        }
    }
}

/// Kind of rendered artifact a documentation reference points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceKind {
    /// Rendered chart image (`.svg`)
    Chart,
    /// Rendered audio file (`.wav`)
    Audio,
}

impl std::fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Chart => write!(f, "chart"),
            Self::Audio => write!(f, "audio"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_by_marker() {
        assert_eq!(SnapshotKind::classify("sine.snap", "@audio"), SnapshotKind::Chart);
        assert_eq!(
            SnapshotKind::classify("sine@audio.snap", "@audio"),
            SnapshotKind::Audio
        );
    }

    #[test]
    fn test_marker_anywhere_in_key() {
        // Containment, not suffix
        assert_eq!(
            SnapshotKind::classify("a@audio_b.snap", "@audio"),
            SnapshotKind::Audio
        );
    }
}
