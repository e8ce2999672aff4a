use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::TempDir;

/// Throwaway working directory laid out like a store export.
#[derive(Debug)]
pub struct StoreWorkspace {
    dir: TempDir,
}

impl StoreWorkspace {
    pub fn new() -> Self {
        Self { dir: tempfile::Builder::new().prefix("sales_summary_").tempdir().unwrap() }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `contents` to `stores/<rel>`, creating parent directories.
    pub fn store_file(&self, rel: &str, contents: &str) -> PathBuf {
        self.write_file(&format!("stores/{rel}"), contents)
    }

    pub fn write_file(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }

    pub fn summary_path(&self) -> PathBuf {
        self.path().join("salesTotalDir").join("salesSummary.txt")
    }

    #[allow(dead_code)]
    pub fn read_summary(&self) -> String {
        fs::read_to_string(self.summary_path()).expect("summary exists")
    }

    /// Summary lines with the terminator stripped.
    #[allow(dead_code)]
    pub fn summary_lines(&self) -> Vec<String> {
        self.read_summary().lines().map(str::to_string).collect()
    }
}
