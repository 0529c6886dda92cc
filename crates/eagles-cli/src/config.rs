//! Input and output directory resolution.

use std::path::{Path, PathBuf};

/// Environment variable overriding the default input directory.
pub const INPUT_DIR_ENV_VAR: &str = "EAGLES_INPUT_DIR";

/// Environment variable overriding the default output directory.
pub const OUTPUT_DIR_ENV_VAR: &str = "EAGLES_OUTPUT_DIR";

/// Root of the project checkout, two levels above this crate.
pub fn project_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../..")
}

/// Resolves the input directory.
///
/// An explicit path wins, then `EAGLES_INPUT_DIR`, then `<project>/input`.
pub fn resolve_input_dir(explicit: Option<&Path>) -> PathBuf {
    resolve(explicit, INPUT_DIR_ENV_VAR, "input")
}

/// Resolves the output directory.
///
/// An explicit path wins, then `EAGLES_OUTPUT_DIR`, then `<project>/output`.
pub fn resolve_output_dir(explicit: Option<&Path>) -> PathBuf {
    resolve(explicit, OUTPUT_DIR_ENV_VAR, "output")
}

fn resolve(explicit: Option<&Path>, env_var: &str, default_name: &str) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    if let Some(path) = std::env::var_os(env_var).filter(|value| !value.is_empty()) {
        return PathBuf::from(path);
    }
    project_root().join(default_name)
}
