use std::path::PathBuf;

/// Repo root, resolved from this crate's manifest directory so the
/// binary works no matter where it is invoked from.
pub fn project_root() -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .expect("tasks/ always sits directly under the repo root")
        .to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_contains_the_workspace_manifest() {
        assert!(project_root().join("Cargo.toml").is_file());
    }
}
