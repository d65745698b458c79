use std::fs;
use std::path::Path;

use tempfile::TempDir;

pub fn run_cli(args: &[&str]) -> (String, String, i32) {
    match tldr_core::run_cli(args) {
        Ok(stdout) => (stdout, String::new(), 0),
        Err(error) => (String::new(), error.message, error.exit_code),
    }
}

/// Remove the bold escape sequences so layouts can be snapshotted.
#[allow(dead_code)]
pub fn strip_bold(text: &str) -> String {
    text.replace("\x1b[1m", "").replace("\x1b[0m", "")
}

/// A cache root containing a mirror with the given `(category, name, body)` pages.
#[allow(dead_code)]
pub fn mirror_with(pages: &[(&str, &str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (category, name, body) in pages {
        write_page(dir.path(), category, name, body);
    }
    dir
}

#[allow(dead_code)]
pub fn write_page(root: &Path, category: &str, name: &str, body: &str) {
    let pages = root.join("tldr").join("pages").join(category);
    fs::create_dir_all(&pages).unwrap();
    fs::write(pages.join(format!("{name}.md")), body).unwrap();
}
