//! Structural-change descriptions produced by list mutations.
//!
//! Every successful mutation of [`crate::list::MedicineList`] returns exactly
//! one [`ListChange`]. The adapter layer forwards it to the rendering host so
//! the host redraws only the affected row.

use serde::{Deserialize, Serialize};

/// Kind of structural change, without its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    Inserted,
    Changed,
    Removed,
}

impl ChangeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inserted => "inserted",
            Self::Changed => "changed",
            Self::Removed => "removed",
        }
    }
}

/// A single row-level change, emitted to the host as IPC-friendly JSON:
/// `{"type":"inserted","position":3}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ListChange {
    /// A row now exists at `position`; rows at and after it moved down one.
    Inserted { position: usize },
    /// The row at `position` has new content.
    Changed { position: usize },
    /// The row at `position` is gone; later rows moved up one.
    Removed { position: usize },
}

impl ListChange {
    pub fn kind(&self) -> ChangeKind {
        match self {
            Self::Inserted { .. } => ChangeKind::Inserted,
            Self::Changed { .. } => ChangeKind::Changed,
            Self::Removed { .. } => ChangeKind::Removed,
        }
    }

    pub fn position(&self) -> usize {
        match self {
            Self::Inserted { position }
            | Self::Changed { position }
            | Self::Removed { position } => *position,
        }
    }
}
