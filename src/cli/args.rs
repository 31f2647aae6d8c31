use clap::Parser;
use std::path::PathBuf;

use seqren::{RenameParams, RenameStrategy};

#[derive(Parser, Debug)]
#[command(
    name = "seqren",
    version,
    about = "Rename the files of a folder to zero-padded sequence numbers"
)]
pub struct CliArgs {
    /// Folder whose regular files are renamed (not recursive)
    #[arg(default_value = "songs")]
    pub folder: PathBuf,

    /// Minimum number of digits in the new names; larger numbers grow
    #[arg(long, default_value_t = seqren::DEFAULT_WIDTH)]
    pub width: usize,

    /// Sequence number of the first file
    #[arg(long, default_value_t = 1)]
    pub start: usize,

    /// How renames are applied (staged avoids collisions between files of the folder)
    #[arg(long, value_enum, default_value_t = RenameStrategy::Staged)]
    pub strategy: RenameStrategy,

    /// Print the planned renames without touching any file
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Print the final report as JSON instead of status lines
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Enable logging (to stderr; RUST_LOG overrides the level)
    #[arg(long, default_value_t = false)]
    pub log: bool,
}

impl CliArgs {
    pub fn params(&self) -> RenameParams {
        RenameParams {
            width: self.width,
            start: self.start,
            strategy: self.strategy,
            dry_run: self.dry_run,
        }
    }
}
