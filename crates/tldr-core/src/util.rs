use crate::error::{Error, Result};

/// Join command words into a page name (`git commit` -> `git-commit`).
pub fn page_name(words: &[String]) -> String {
    words.join("-")
}

/// Reject names that cannot be a single page file.
///
/// The name ends up both in a filesystem path below the mirror and in a URL,
/// so separators and traversal components are refused.
pub fn validate_page_name(name: &str) -> Result<()> {
    let reject = |reason| {
        Err(Error::InvalidName {
            name: name.to_string(),
            reason,
        })
    };

    if name.trim().is_empty() {
        return reject("name cannot be empty");
    }
    if name.contains('/') || name.contains('\\') {
        return reject("name contains a path separator");
    }
    if name == "." || name == ".." {
        return reject("name contains an invalid path component");
    }
    if name.chars().any(char::is_control) {
        return reject("name contains control characters");
    }

    Ok(())
}
