#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use gemx_solver::{Backend, BackendResolver, Platform};

pub fn init_test_logger() {
    static INIT: OnceLock<()> = OnceLock::new();
    let _ = INIT.get_or_init(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Install layout with an empty `bin` directory under `root`.
pub struct Install {
    pub root: tempfile::TempDir,
}

impl Install {
    pub fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir_all(root.path().join("bin")).unwrap();
        Self { root }
    }

    pub fn bin(&self) -> PathBuf {
        self.root.path().join("bin")
    }

    pub fn resolver(&self) -> BackendResolver {
        BackendResolver::with_base_dir(self.bin()).platform(Platform::current())
    }

    /// Writes `contents` as the module of `backend` inside `dir`.
    pub fn place_module(&self, dir: &Path, backend: Backend, contents: &[u8]) -> PathBuf {
        fs::create_dir_all(dir).unwrap();
        let path = dir.join(self.resolver().module_name(backend));
        fs::write(&path, contents).unwrap();
        path
    }
}
