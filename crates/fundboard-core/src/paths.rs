use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const FUNDBOARD_DIR: &str = ".fundboard";
pub const CONFIG_FILE: &str = ".fundboard/config.yaml";
pub const PLAN_FILE: &str = ".fundboard/plan.yaml";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn fundboard_dir(root: &Path) -> PathBuf {
    root.join(FUNDBOARD_DIR)
}

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

pub fn plan_path(root: &Path) -> PathBuf {
    root.join(PLAN_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_hang_off_root() {
        let root = Path::new("/tmp/project");
        assert_eq!(fundboard_dir(root), PathBuf::from("/tmp/project/.fundboard"));
        assert_eq!(
            config_path(root),
            PathBuf::from("/tmp/project/.fundboard/config.yaml")
        );
        assert_eq!(plan_path(root), PathBuf::from("/tmp/project/.fundboard/plan.yaml"));
    }
}
