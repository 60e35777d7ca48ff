//! Locating runtime data files (the game configuration).
use std::env;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// File name of the game configuration inside the data directory.
pub const CONFIG_FILE: &str = "delve.toml";

/// Cached path to the directory containing the engine's runtime data files.
static DATA_ROOT: LazyLock<PathBuf> = LazyLock::new(detect_data_root);

/// Construct a data path relative to the resolved data root.
pub fn data_path(relative: impl AsRef<Path>) -> PathBuf {
    DATA_ROOT.join(relative)
}

/// Resolve the most likely location of the runtime data directory.
fn detect_data_root() -> PathBuf {
    let mut candidates = vec![PathBuf::from("delve_engine/data"), PathBuf::from("data")];

    if let Ok(exe_path) = env::current_exe() {
        if let Some(dir) = exe_path.parent() {
            candidates.extend(data_dirs_near(dir));
            if let Some(parent) = dir.parent() {
                candidates.extend(data_dirs_near(parent));
            }
        }
    }

    candidates
        .into_iter()
        .find(|candidate| candidate.is_dir())
        .unwrap_or_else(|| PathBuf::from("delve_engine/data"))
}

fn data_dirs_near(dir: &Path) -> [PathBuf; 2] {
    [dir.join("delve_engine/data"), dir.join("data")]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_path_ends_with_file_name() {
        assert!(data_path(CONFIG_FILE).ends_with(CONFIG_FILE));
    }

    #[test]
    fn nearby_candidates_are_under_dir() {
        let base = Path::new("/opt/delve");
        for candidate in data_dirs_near(base) {
            assert!(candidate.starts_with(base));
        }
    }
}
