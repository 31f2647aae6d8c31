//! Ordered rename plans. A plan is computed once from a single listing and is
//! never re-read while it is applied.
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::{Serialize, Serializer};

use crate::core::naming::sequence_name;
use crate::core::params::RenameParams;
use crate::error::{Error, Result};

fn serialize_lossy<S: Serializer>(
    name: &OsString,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&name.to_string_lossy())
}

/// One file of the plan: its sequence number, current name and target name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenameEntry {
    pub sequence: usize,
    #[serde(serialize_with = "serialize_lossy")]
    pub original: OsString,
    #[serde(serialize_with = "serialize_lossy")]
    pub renamed: OsString,
}

impl RenameEntry {
    /// True when the file already carries its target name.
    pub fn is_unchanged(&self) -> bool {
        self.original == self.renamed
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePlan {
    pub folder: PathBuf,
    pub entries: Vec<RenameEntry>,
}

impl RenamePlan {
    /// Sort `names` bytewise (code point order for UTF-8 names) and assign
    /// consecutive sequence numbers.
    pub fn build(folder: &Path, mut names: Vec<OsString>, params: &RenameParams) -> Result<Self> {
        names.sort_unstable_by(|a, b| a.as_encoded_bytes().cmp(b.as_encoded_bytes()));

        let mut entries = Vec::with_capacity(names.len());
        for (i, original) in names.into_iter().enumerate() {
            let sequence = params
                .start
                .checked_add(i)
                .ok_or_else(|| Error::InvalidArgument {
                    arg: "start",
                    value: params.start.to_string(),
                })?;
            let renamed = sequence_name(&original, sequence, params.width);
            entries.push(RenameEntry {
                sequence,
                original,
                renamed,
            });
        }

        Ok(Self {
            folder: folder.to_path_buf(),
            entries,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RenameEntry> {
        self.entries.iter()
    }

    /// Entries that need a filesystem rename.
    pub fn pending(&self) -> impl Iterator<Item = &RenameEntry> {
        self.entries.iter().filter(|e| !e.is_unchanged())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<OsString> {
        list.iter().map(OsString::from).collect()
    }

    fn build(list: &[&str], params: &RenameParams) -> RenamePlan {
        RenamePlan::build(Path::new("songs"), names(list), params).expect("plan")
    }

    fn targets(plan: &RenamePlan) -> Vec<(String, String)> {
        plan.iter()
            .map(|e| {
                (
                    e.original.to_string_lossy().into_owned(),
                    e.renamed.to_string_lossy().into_owned(),
                )
            })
            .collect()
    }

    fn pairs(list: &[(&str, &str)]) -> Vec<(String, String)> {
        list.iter()
            .map(|(a, b)| (a.to_string(), b.to_string()))
            .collect()
    }

    #[test]
    fn assigns_numbers_in_sorted_order() {
        let plan = build(&["b.txt", "a.txt", "c.mp3"], &RenameParams::default());
        assert_eq!(
            targets(&plan),
            pairs(&[
                ("a.txt", "0001.txt"),
                ("b.txt", "0002.txt"),
                ("c.mp3", "0003.mp3"),
            ])
        );
        assert_eq!(plan.folder, PathBuf::from("songs"));
    }

    #[test]
    fn ordering_is_by_code_point() {
        let plan = build(&["b", "B", "a", "_", "Z", "é"], &RenameParams::default());
        let order: Vec<String> = targets(&plan).into_iter().map(|(o, _)| o).collect();
        assert_eq!(order, vec!["B", "Z", "_", "a", "b", "é"]);
    }

    #[test]
    fn dotfile_becomes_bare_number() {
        let plan = build(&[".env"], &RenameParams::default());
        assert_eq!(targets(&plan), pairs(&[(".env", "0001")]));
    }

    #[test]
    fn already_sequential_names_are_unchanged() {
        let plan = build(&["0002.txt", "0001.txt", "0003.mp3"], &RenameParams::default());
        assert!(plan.iter().all(RenameEntry::is_unchanged));
        assert_eq!(plan.pending().count(), 0);
    }

    #[test]
    fn start_and_width_are_honoured() {
        let params = RenameParams {
            width: 2,
            start: 9,
            ..Default::default()
        };
        let plan = build(&["x.png", "y.png"], &params);
        assert_eq!(
            targets(&plan),
            pairs(&[("x.png", "09.png"), ("y.png", "10.png")])
        );
    }

    #[test]
    fn sequence_overflow_is_an_invalid_start() {
        let params = RenameParams {
            start: usize::MAX,
            ..Default::default()
        };
        let err = RenamePlan::build(Path::new("."), names(&["a", "b"]), &params).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { arg: "start", .. }));

        // A single file still fits.
        let plan = build(&["a"], &params);
        assert_eq!(plan.entries[0].sequence, usize::MAX);
    }

    #[test]
    fn numbers_past_four_digits_grow() {
        let listing: Vec<OsString> = (0..10001)
            .map(|i| OsString::from(format!("f{:06}.dat", i)))
            .collect();
        let plan = RenamePlan::build(Path::new("."), listing, &RenameParams::default())
            .expect("plan");
        assert_eq!(plan.len(), 10001);
        assert_eq!(plan.entries[0].renamed, "0001.dat");
        assert_eq!(plan.entries[9998].renamed, "9999.dat");
        assert_eq!(plan.entries[9999].renamed, "10000.dat");
        assert_eq!(plan.entries[10000].renamed, "10001.dat");
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_names_sort_bytewise() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let listing = vec![
            OsStr::from_bytes(b"caf\xe9.mp3").to_os_string(),
            OsString::from("a.mp3"),
        ];
        let plan = RenamePlan::build(Path::new("."), listing, &RenameParams::default())
            .expect("plan");
        assert_eq!(plan.entries[0].original, "a.mp3");
        assert_eq!(plan.entries[1].original.as_encoded_bytes(), b"caf\xe9.mp3");
        assert_eq!(plan.entries[1].renamed, "0002.mp3");
    }

    #[test]
    fn entries_serialize_names_as_strings() {
        let plan = build(&["a.txt"], &RenameParams::default());
        let json = serde_json::to_value(&plan.entries[0]).expect("json");
        assert_eq!(json["original"], "a.txt");
        assert_eq!(json["renamed"], "0001.txt");
        assert_eq!(json["sequence"], 1);
    }
}
