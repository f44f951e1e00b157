#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rovertime::models::entry::Entry;
use rovertime::store::{CsvEntryStore, EntryStore};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn rov() -> Command {
    cargo_bin_cmd!("rovertime")
}

/// Isolated store: its own HOME (so no real config is read) and CSV path.
pub struct TestStore {
    pub dir: TempDir,
    pub path: String,
}

impl TestStore {
    pub fn new(name: &str) -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let path = dir
            .path()
            .join(format!("{name}.csv"))
            .to_string_lossy()
            .to_string();
        Self { dir, path }
    }

    /// `rovertime --store <csv> --test …` with HOME pointing into the temp dir.
    pub fn cmd(&self) -> Command {
        let mut c = rov();
        c.env("HOME", self.dir.path())
            .env_remove("RUST_LOG")
            .args(["--store", &self.path, "--test"]);
        c
    }

    pub fn file(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn entries(&self) -> Vec<Entry> {
        CsvEntryStore::open(Path::new(&self.path))
            .list()
            .expect("list entries")
    }

    pub fn content(&self) -> String {
        fs::read_to_string(&self.path).expect("read store")
    }
}

/// Initialize the store and add the reference dataset:
/// one overtime session (+9.50) and one recup session (-3.00).
pub fn init_with_data(store: &TestStore) {
    store.cmd().arg("init").assert().success();

    store
        .cmd()
        .args([
            "add",
            "2025-01-10",
            "--start",
            "08:00",
            "--end",
            "17:30",
            "--note",
            "release night",
        ])
        .assert()
        .success();

    store
        .cmd()
        .args([
            "add",
            "2025-01-11",
            "--start",
            "09:00",
            "--end",
            "12:00",
            "--type",
            "recup",
        ])
        .assert()
        .success();
}

/// Write a minimal service credential file and return its path.
pub fn write_credentials(dir: &Path) -> String {
    let path = dir.join("credentials.json");
    fs::write(
        &path,
        r#"{"type":"service_account","client_email":"tracker@example.iam.gserviceaccount.com"}"#,
    )
    .expect("write credentials");
    path.to_string_lossy().to_string()
}
