//! Shared types used across seqren.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How a rename plan is applied to the folder.
#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum RenameStrategy {
    /// Rename each file straight to its final name, in sorted order.
    /// Aborts if a target name is still held by another file.
    Direct,
    /// Move every file to a temporary name first, then to its final name.
    #[default]
    Staged,
}

impl std::fmt::Display for RenameStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenameStrategy::Direct => write!(f, "direct"),
            RenameStrategy::Staged => write!(f, "staged"),
        }
    }
}
