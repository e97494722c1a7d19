use std::fs::read_to_string;
use std::path::PathBuf;

use tempfile::{TempDir, tempdir};
use util::test::build_temp_file;

/// A store and a trace log in a temporary directory, removed when dropped.
#[derive(Debug)]
pub struct Context {
    pub temp_dir: TempDir,

    pub store_arg: String,
    pub trace_log_arg: String,
    pub store_path: PathBuf,
    pub trace_log_path: PathBuf,
}

impl Context {
    pub fn new() -> Self {
        let temp_dir = tempdir().unwrap();

        let (store_path, _store_file_name) = build_temp_file(&temp_dir, "nail_planner", "json");
        let store_arg = format!("--store {}", store_path.to_str().unwrap());

        let (trace_log_path, _trace_log_file_name) = build_temp_file(&temp_dir, "trace", "log");
        let trace_log_arg = format!("--trace {}", trace_log_path.to_str().unwrap());

        Self {
            temp_dir,
            store_arg,
            trace_log_arg,
            store_path,
            trace_log_path,
        }
    }

    pub fn trace_content(&self) -> String {
        let content = read_to_string(&self.trace_log_path).unwrap();
        println!("{}", content);
        content
    }

    pub fn store_content(&self) -> String {
        let content = read_to_string(&self.store_path).unwrap();
        println!("{}", content);
        content
    }
}
