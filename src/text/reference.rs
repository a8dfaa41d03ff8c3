//! Reference text loading and normalization.
//!
//! A [`Reference`] is the trusted wording the speaker is reciting (typically
//! a classical poem).  Loading strips everything except CJK ideographs up
//! front — punctuation, digits and latin text in the source are discarded
//! permanently, so the aligner always compares hanzi against hanzi.
//!
//! A missing or unreadable reference is **not** an error at the engine
//! level: [`ReferenceSource::load`] logs a warning and yields `None`, which
//! the orchestrator turns into a pass-through correction.

use std::path::{Path, PathBuf};

use thiserror::Error;

use super::is_hanzi;

// ---------------------------------------------------------------------------
// ReferenceError
// ---------------------------------------------------------------------------

/// Errors surfaced when a reference is loaded from an explicit file path.
#[derive(Debug, Error)]
pub enum ReferenceError {
    /// The file could not be read (missing, permissions, not UTF-8).
    #[error("cannot read reference file: {0}")]
    Io(#[from] std::io::Error),
}

// ---------------------------------------------------------------------------
// Reference
// ---------------------------------------------------------------------------

/// A normalized reference text: the hanzi-only payload of the source.
#[derive(Debug, Clone, PartialEq)]
pub struct Reference {
    payload: String,
}

impl Reference {
    /// Build a reference from an in-memory string, keeping only ideographs.
    pub fn from_text(text: &str) -> Self {
        let payload = text.trim().chars().filter(|&c| is_hanzi(c)).collect();
        Self { payload }
    }

    /// Load and normalize a reference from a UTF-8 text file.
    pub fn from_file(path: &Path) -> Result<Self, ReferenceError> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_text(&content))
    }

    /// The hanzi-only payload.
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// `true` when the source contained no ideographs at all.
    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }
}

// ---------------------------------------------------------------------------
// ReferenceSource
// ---------------------------------------------------------------------------

/// Where the reference text comes from, as supplied by the serving layer.
#[derive(Debug, Clone, PartialEq)]
pub enum ReferenceSource {
    /// Reference wording passed inline.
    Text(String),
    /// Path to a UTF-8 text file holding the reference.
    File(PathBuf),
    /// No reference supplied — correction becomes a pass-through.
    Absent,
}

impl ReferenceSource {
    /// Resolve the source into a [`Reference`].
    ///
    /// An unreadable file is downgraded to "no reference available" with a
    /// warning, never an error.
    pub fn load(&self) -> Option<Reference> {
        match self {
            Self::Text(text) => Some(Reference::from_text(text)),
            Self::File(path) => match Reference::from_file(path) {
                Ok(reference) => Some(reference),
                Err(e) => {
                    log::warn!(
                        "reference file {} unreadable ({e}); correction disabled",
                        path.display()
                    );
                    None
                }
            },
            Self::Absent => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
