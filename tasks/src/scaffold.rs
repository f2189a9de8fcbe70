use std::fs;
use std::io::{Error, ErrorKind};
use std::path::Path;

// The built-in example template. The standalone `[workspace]` table keeps
// the scaffolded crate out of the enclosing workspace, and the path
// dependency assumes the default demos/<name> location.
const CARGO_TEMPLATE: &str = r#"[package]
name = "{{name}}"
version = "0.1.0"
edition = "2021"

[workspace]

[dependencies]
fhevm-mock = { path = "../../crates/fhevm-mock" }
"#;

const LIB_TEMPLATE: &str = r#"//! {{name}}: describe what this example demonstrates.

use fhevm_mock::MockRuntime;

pub fn run() -> u64 {
    let mut rt = MockRuntime::new();
    let _handle = rt.trivial_encrypt(0);
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs() {
        assert_eq!(run(), 0);
    }
}
"#;

const README_TEMPLATE: &str = r#"# {{name}}

Describe the encrypted-computation pattern this example walks through.

## Run the tests

```
cargo test -p {{name}}
```
"#;

fn render(template: &str, name: &str) -> String {
    template.replace("{{name}}", name)
}

fn validate_name(name: &str) -> Result<(), Error> {
    let ok = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !ok {
        return Err(Error::new(
            ErrorKind::InvalidInput,
            format!("'{name}' is not a valid crate name (ascii alphanumerics, '-' and '_' only)"),
        ));
    }
    Ok(())
}

/// Writes a fresh example crate at `out_dir` from the built-in template.
/// Refuses to touch an existing directory.
pub fn new_example(name: &str, out_dir: &Path) -> Result<(), Error> {
    validate_name(name)?;
    if out_dir.exists() {
        return Err(Error::new(
            ErrorKind::AlreadyExists,
            format!("{} already exists, not overwriting", out_dir.display()),
        ));
    }

    fs::create_dir_all(out_dir.join("src"))?;

    let files = [
        ("Cargo.toml", CARGO_TEMPLATE),
        ("src/lib.rs", LIB_TEMPLATE),
        ("README.md", README_TEMPLATE),
    ];
    for (rel, template) in files {
        let path = out_dir.join(rel);
        fs::write(&path, render(template, name))?;
        log::info!("wrote {}", path.display());
    }

    log::info!("scaffolded example '{name}' at {}", out_dir.display());
    Ok(())
}
