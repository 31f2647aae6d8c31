//! High-level library API: plan a sequential rename of a folder, or plan and
//! apply it in one call. Prefer these entrypoints over the `core` modules when
//! embedding seqren.
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use crate::core::apply::apply_plan;
use crate::core::params::RenameParams;
use crate::core::plan::{RenameEntry, RenamePlan};
use crate::error::Result;
use crate::io::list_regular_files;

/// Outcome of a rename pass
#[derive(Debug, Clone, Default, Serialize)]
pub struct RenameReport {
    pub folder: PathBuf,
    /// Regular files found in the folder
    pub files: usize,
    /// Files moved to a new name
    pub renamed: usize,
    /// Files that already carried their target name
    pub unchanged: usize,
    pub dry_run: bool,
    pub entries: Vec<RenameEntry>,
}

impl RenameReport {
    /// True when the folder held no regular files and nothing was attempted.
    pub fn is_empty(&self) -> bool {
        self.files == 0
    }
}

/// List the regular files of `folder` once and compute their new names.
pub fn plan_directory(folder: &Path, params: &RenameParams) -> Result<RenamePlan> {
    params.validate()?;
    let names = list_regular_files(folder)?;
    let plan = RenamePlan::build(folder, names, params)?;
    debug!("Planned {} renames in {:?}", plan.len(), folder);
    Ok(plan)
}

/// Rename every regular file of `folder` to its zero-padded sequence number.
pub fn rename_sequentially(folder: &Path, params: &RenameParams) -> Result<RenameReport> {
    rename_sequentially_with(folder, params, |_| {})
}

/// Like [`rename_sequentially`], calling `on_renamed` as soon as each file
/// carries its final name (or, in a dry run, for each planned entry).
pub fn rename_sequentially_with<F>(
    folder: &Path,
    params: &RenameParams,
    mut on_renamed: F,
) -> Result<RenameReport>
where
    F: FnMut(&RenameEntry),
{
    let plan = plan_directory(folder, params)?;

    let mut report = RenameReport {
        folder: folder.to_path_buf(),
        files: plan.len(),
        dry_run: params.dry_run,
        ..Default::default()
    };

    if plan.is_empty() {
        info!("No regular files in {:?}", folder);
        return Ok(report);
    }

    report.unchanged = plan.iter().filter(|e| e.is_unchanged()).count();

    if params.dry_run {
        plan.iter().for_each(&mut on_renamed);
    } else {
        info!(
            "Renaming {} files in {:?} ({} strategy)",
            plan.len(),
            folder,
            params.strategy
        );
        report.renamed = apply_plan(&plan, params.strategy, &mut on_renamed)?;
    }

    report.entries = plan.entries;
    Ok(report)
}
