//! Shared demo CV corpus for tests and benchmarks.
//!
//! The CVs live in `data/cvs.csv` (category, file, text) and are parsed once
//! on first access.

use once_cell::sync::Lazy;
use std::io;
use std::path::Path;

static CVS_CSV: &str = include_str!("../data/cvs.csv");

pub struct DemoCv {
    pub category: String,
    pub file_name: String,
    pub text: String,
}

impl DemoCv {
    /// `<category>/<file>`, the id cvscan assigns once written to disk
    pub fn id(&self) -> String {
        format!("{}/{}", self.category, self.file_name)
    }
}

pub static DEMO_CVS: Lazy<Vec<DemoCv>> = Lazy::new(|| {
    let mut reader = csv::Reader::from_reader(CVS_CSV.as_bytes());
    reader
        .records()
        .filter_map(|record| record.ok())
        .filter(|record| record.len() == 3)
        .map(|record| DemoCv {
            category: record[0].to_string(),
            file_name: record[1].to_string(),
            text: record[2].to_string(),
        })
        .collect()
});

/// Lay the demo CVs out as `<root>/<category>/<file>`. Returns the file count.
pub fn write_corpus(root: &Path) -> io::Result<usize> {
    for cv in DEMO_CVS.iter() {
        let dir = root.join(&cv.category);
        std::fs::create_dir_all(&dir)?;
        std::fs::write(dir.join(&cv.file_name), &cv.text)?;
    }
    Ok(DEMO_CVS.len())
}
