use std::fs;
use std::io::Error;
use std::path::Path;

use walkdir::WalkDir;

struct IndexEntry {
    name: String,
    path: String,
    summary: String,
}

/// First non-empty `//!` line of a source file, used as its one-line
/// summary in the index.
fn first_doc_line(source: &str) -> Option<String> {
    source.lines().find_map(|line| {
        line.trim_start()
            .strip_prefix("//!")
            .map(|rest| rest.trim().to_string())
            .filter(|s| !s.is_empty())
    })
}

fn push_entry(entries: &mut Vec<IndexEntry>, root: &Path, name: &str, file: &Path) {
    let summary = fs::read_to_string(file)
        .ok()
        .and_then(|source| first_doc_line(&source))
        .unwrap_or_else(|| "(no description)".to_string());
    let path = file
        .strip_prefix(root)
        .unwrap_or(file)
        .display()
        .to_string();
    entries.push(IndexEntry {
        name: name.to_string(),
        path,
        summary,
    });
}

/// Walks `dir` for `src/lib.rs` files one level down and indexes each
/// containing crate under its directory name.
fn collect_crates(entries: &mut Vec<IndexEntry>, root: &Path, dir: &Path) {
    if !dir.is_dir() {
        return;
    }
    for entry in WalkDir::new(dir)
        .min_depth(3)
        .max_depth(3)
        .into_iter()
        .flatten()
    {
        let path = entry.path();
        if path.ends_with("src/lib.rs") {
            let name = path
                .parent()
                .and_then(|src| src.parent())
                .and_then(|krate| krate.file_name())
                .map(|n| n.to_string_lossy().into_owned());
            if let Some(name) = name {
                push_entry(entries, root, &name, path);
            }
        }
    }
}

/// Walks `dir` for flat module files and indexes each under its stem.
fn collect_modules(entries: &mut Vec<IndexEntry>, root: &Path, dir: &Path) {
    if !dir.is_dir() {
        return;
    }
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).into_iter().flatten() {
        let path = entry.path();
        let is_module = path.extension().is_some_and(|e| e == "rs")
            && !path.ends_with("mod.rs");
        if is_module {
            if let Some(stem) = path.file_stem() {
                let name = stem.to_string_lossy().into_owned();
                push_entry(entries, root, &name, path);
            }
        }
    }
}

fn render(entries: &[IndexEntry]) -> String {
    let mut out = String::from(
        "# Examples\n\n\
         Generated by `cargo run -p tasks -- gen-index`. Do not edit by hand.\n\n\
         | Example | Source | Summary |\n\
         |---|---|---|\n",
    );
    for entry in entries {
        out.push_str(&format!(
            "| {} | `{}` | {} |\n",
            entry.name, entry.path, entry.summary
        ));
    }
    out
}

/// Regenerates `EXAMPLES.md` at the repo root from the on-chain programs,
/// the mock runtime's demo modules and any scaffolded example crates.
pub fn generate(root: &Path) -> Result<(), Error> {
    let mut entries = Vec::new();

    collect_crates(&mut entries, root, &root.join("programs"));
    collect_modules(&mut entries, root, &root.join("crates/fhevm-mock/src/demos"));
    collect_crates(&mut entries, root, &root.join("demos"));

    entries.sort_by(|a, b| a.name.cmp(&b.name));

    let index_path = root.join("EXAMPLES.md");
    fs::write(&index_path, render(&entries))?;
    log::info!(
        "indexed {} examples into {}",
        entries.len(),
        index_path.display()
    );
    Ok(())
}
