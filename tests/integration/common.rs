use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::sync::atomic::{AtomicUsize, Ordering};

pub fn binary_path() -> String {
    let raw = PathBuf::from(env!("CARGO_BIN_EXE_argbind"));
    if raw.is_absolute() {
        return raw.to_string_lossy().to_string();
    }
    let from_manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(&raw);
    if from_manifest.exists() {
        return from_manifest.to_string_lossy().to_string();
    }
    raw.to_string_lossy().to_string()
}

static COUNTER: AtomicUsize = AtomicUsize::new(0);

pub fn make_temp_dir(prefix: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "{prefix}-{}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos(),
        COUNTER.fetch_add(1, Ordering::Relaxed)
    ));
    let _ = fs::create_dir_all(&dir);
    dir
}

pub const SAMPLE_CONFIG: &str = r#"{
  "file_logging_enabled": { "value": false, "description": "file logging" },
  "choices": { "direction": ["north", "south", "east", "west"] },
  "commands": [
    { "name": "teleport", "aliases": ["tp"], "parameters": [
        { "name": "target", "type": "string" },
        { "name": "x", "type": "double" },
        { "name": "y", "type": "double" },
        { "name": "z", "type": "double" }
    ] },
    { "name": "walk", "parameters": [
        { "name": "dir", "type": "direction" },
        { "name": "steps", "type": "int", "default": "1" }
    ] },
    { "name": "broadcast", "parameters": [
        { "name": "message", "type": "string", "greedy": true }
    ] }
  ]
}"#;

pub fn write_config(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("argbind.json");
    fs::write(&path, contents).unwrap();
    path
}

pub fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(binary_path())
        .current_dir(dir)
        .args(args)
        .output()
        .expect("failed to run binary")
}

pub fn normalized_lines(buf: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(buf)
        .lines()
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .collect()
}

pub fn read_log_contents(dir: &Path) -> Option<String> {
    let mut entries = fs::read_dir(dir).ok()?;
    let entry = entries.find_map(|e| e.ok())?;
    fs::read_to_string(entry.path()).ok()
}
