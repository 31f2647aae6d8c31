use serde::{Deserialize, Serialize};

use crate::core::naming::MAX_WIDTH;
use crate::error::{Error, Result};
use crate::types::RenameStrategy;

/// Default zero-padding width of the sequence number (`0001`).
pub const DEFAULT_WIDTH: usize = 4;

/// Rename parameters, built by the CLI or by library callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameParams {
    /// Minimum number of digits; larger numbers grow instead of being truncated
    pub width: usize,
    /// Sequence number given to the first file in sorted order
    pub start: usize,
    pub strategy: RenameStrategy,
    /// If true, build and report the plan without touching the filesystem
    pub dry_run: bool,
}

impl Default for RenameParams {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            start: 1,
            strategy: RenameStrategy::Staged,
            dry_run: false,
        }
    }
}

impl RenameParams {
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.width > MAX_WIDTH {
            return Err(Error::InvalidArgument {
                arg: "width",
                value: self.width.to_string(),
            });
        }
        if self.start == 0 {
            return Err(Error::InvalidArgument {
                arg: "start",
                value: self.start.to_string(),
            });
        }
        Ok(())
    }
}
