#![doc = r#"
seqren — rename the files of a folder to zero-padded sequence numbers.

The regular files directly inside a folder are sorted by name (code point order)
and renamed to `0001.ext`, `0002.ext`, … keeping each file's extension. The
library powers the `seqren` CLI and can be embedded in your own tools.

Quick start
-----------
```rust,no_run
use std::path::Path;
use seqren::{rename_sequentially, RenameParams};

fn main() -> seqren::Result<()> {
    let report = rename_sequentially(Path::new("songs"), &RenameParams::default())?;
    println!("renamed={} unchanged={}", report.renamed, report.unchanged);
    Ok(())
}
```

Preview without touching the disk
---------------------------------
```rust,no_run
use std::path::Path;
use seqren::{plan_directory, RenameParams};

fn main() -> seqren::Result<()> {
    let plan = plan_directory(Path::new("songs"), &RenameParams::default())?;
    for entry in plan.iter() {
        println!(
            "{} -> {}",
            entry.original.to_string_lossy(),
            entry.renamed.to_string_lossy()
        );
    }
    Ok(())
}
```

Strategies
----------
- `RenameStrategy::Staged` (default): every file is first moved to a temporary
  name, then to its final name, so a target name held by another file of the
  same folder never blocks the pass.
- `RenameStrategy::Direct`: files are renamed straight to their final names in
  sorted order; the pass stops with `Error::Collision` instead of overwriting.

Renames are not transactional. On failure the pass stops and files already
renamed keep their new names.

Error handling
--------------
All public functions return `seqren::Result<T>`; match on `seqren::Error` to
inspect the cause and the offending path.

```rust,no_run
use std::path::Path;
use seqren::{rename_sequentially, Error, RenameParams};

fn main() {
    match rename_sequentially(Path::new("/missing"), &RenameParams::default()) {
        Ok(report) => println!("{} files", report.files),
        Err(Error::Collision { path }) => eprintln!("would overwrite {}", path.display()),
        Err(other) => eprintln!("An error occurred: {other}"),
    }
}
```
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

pub use crate::core::naming::{extension, sequence_name};
pub use crate::core::params::{DEFAULT_WIDTH, RenameParams};
pub use crate::core::plan::{RenameEntry, RenamePlan};
pub use error::{Error, Result};
pub use types::RenameStrategy;

pub use api::{RenameReport, plan_directory, rename_sequentially, rename_sequentially_with};
