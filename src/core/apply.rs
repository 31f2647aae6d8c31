//! Applying a `RenamePlan` to the folder it was built from.
//!
//! Renames commit one at a time and are not transactional: when a rename
//! fails, the pass stops and files already moved keep their new names.
use std::collections::HashSet;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::core::plan::{RenameEntry, RenamePlan};
use crate::error::{Error, Result};
use crate::types::RenameStrategy;

/// Apply `plan` with `strategy`, calling `on_renamed` for every entry once it
/// carries its final name. Returns the number of filesystem renames performed.
pub fn apply_plan<F>(plan: &RenamePlan, strategy: RenameStrategy, on_renamed: F) -> Result<usize>
where
    F: FnMut(&RenameEntry),
{
    match strategy {
        RenameStrategy::Direct => apply_direct(plan, on_renamed),
        RenameStrategy::Staged => apply_staged(plan, on_renamed),
    }
}

fn exists(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

fn rename(from: PathBuf, to: PathBuf) -> Result<()> {
    fs::rename(&from, &to).map_err(|source| Error::Rename { from, to, source })
}

fn apply_direct<F>(plan: &RenamePlan, mut on_renamed: F) -> Result<usize>
where
    F: FnMut(&RenameEntry),
{
    let mut renamed = 0;
    for entry in plan.iter() {
        if entry.is_unchanged() {
            debug!("Already named: {:?}", entry.original);
            on_renamed(entry);
            continue;
        }

        let from = plan.folder.join(&entry.original);
        let to = plan.folder.join(&entry.renamed);
        // std::fs::rename silently replaces an existing file on Unix
        if exists(&to) {
            return Err(Error::Collision { path: to });
        }

        rename(from, to)?;
        info!(
            "Renamed: {} -> {}",
            entry.original.to_string_lossy(),
            entry.renamed.to_string_lossy()
        );
        renamed += 1;
        on_renamed(entry);
    }
    Ok(renamed)
}

fn staging_name(entry: &RenameEntry) -> String {
    format!(".seqren-{}-{}.tmp", std::process::id(), entry.sequence)
}

/// Reject targets held by anything outside the set of files being renamed.
fn check_targets(plan: &RenamePlan) -> Result<()> {
    let originals: HashSet<&OsStr> = plan.iter().map(|e| e.original.as_os_str()).collect();
    for entry in plan.pending() {
        if originals.contains(entry.renamed.as_os_str()) {
            continue;
        }
        let to = plan.folder.join(&entry.renamed);
        if exists(&to) {
            return Err(Error::Collision { path: to });
        }
    }
    Ok(())
}

fn restore_staged(plan: &RenamePlan, staged: &[(&RenameEntry, PathBuf)]) {
    for (entry, stage) in staged.iter().rev() {
        let original = plan.folder.join(&entry.original);
        if let Err(e) = fs::rename(stage, &original) {
            warn!("Could not restore {:?} to {:?}: {}", stage, original, e);
        }
    }
}

fn apply_staged<F>(plan: &RenamePlan, on_renamed: F) -> Result<usize>
where
    F: FnMut(&RenameEntry),
{
    check_targets(plan)?;

    // Phase 1: move every pending file out of the way of the final names.
    let mut staged: Vec<(&RenameEntry, PathBuf)> = Vec::new();
    for entry in plan.pending() {
        let stage = plan.folder.join(staging_name(entry));
        let result = if exists(&stage) {
            Err(Error::Collision {
                path: stage.clone(),
            })
        } else {
            rename(plan.folder.join(&entry.original), stage.clone())
        };

        if let Err(e) = result {
            restore_staged(plan, &staged);
            return Err(e);
        }
        debug!("Staged: {:?} -> {:?}", entry.original, stage);
        staged.push((entry, stage));
    }

    finalize_staged(plan, &staged, on_renamed)
}

/// Phase 2: move staged files to their final names, reporting in plan order.
/// On failure, files still under a staging name go back to their original names.
fn finalize_staged<F>(
    plan: &RenamePlan,
    staged: &[(&RenameEntry, PathBuf)],
    mut on_renamed: F,
) -> Result<usize>
where
    F: FnMut(&RenameEntry),
{
    let mut next = 0;
    for entry in plan.iter() {
        match staged.get(next) {
            Some((pending, stage)) if std::ptr::eq(*pending, entry) => {
                if let Err(e) = rename(stage.clone(), plan.folder.join(&entry.renamed)) {
                    restore_staged(plan, &staged[next..]);
                    return Err(e);
                }
                info!(
                    "Renamed: {} -> {}",
                    entry.original.to_string_lossy(),
                    entry.renamed.to_string_lossy()
                );
                next += 1;
            }
            _ => debug!("Already named: {:?}", entry.original),
        }
        on_renamed(entry);
    }
    Ok(next)
}
