//! Shared utilities for integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use http_protocols::{Protocol, ProtocolSet};

/// All eight sets, enumerated by toggling each protocol.
#[allow(dead_code)]
pub fn all_sets() -> Vec<ProtocolSet> {
    let mut sets = vec![ProtocolSet::default()];
    for protocol in Protocol::ALL {
        let with: Vec<_> = sets.iter().map(|s| s.with(protocol, true)).collect();
        sets.extend(with);
    }
    sets
}

/// A config file in the temp directory, removed on drop.
#[allow(dead_code)]
pub struct TempConfig {
    path: PathBuf,
}

#[allow(dead_code)]
impl TempConfig {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempConfig {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

/// Write `content` to a uniquely named file in the temp directory.
#[allow(dead_code)]
pub fn write_temp_config(name: &str, content: &str) -> TempConfig {
    let file_name = format!("http-protocols-{}-{}.toml", name, std::process::id());
    let path = std::env::temp_dir().join(file_name);
    fs::write(&path, content).unwrap();
    TempConfig { path }
}
