//! Lifecycle of the offline mirror.
//!
//! The mirror is a plain git clone of the upstream page repository, so every
//! operation here is a thin wrapper around the version-control tool.

use std::fs;
use std::path::Path;
use std::process::Command;

use tracing::{debug, info};

use crate::config::Config;
use crate::error::{Error, Result};

/// Version-control operations the cache needs.
pub trait Vcs {
    /// Clone `url` into `dest`. The parent of `dest` already exists.
    fn clone_repo(&self, url: &str, dest: &Path) -> Result<()>;

    /// Bring an existing clone at `dir` up to date.
    fn pull(&self, dir: &Path) -> Result<()>;
}

/// The `git` executable found on `PATH`.
pub struct Git;

impl Git {
    fn run(&self, dir: &Path, args: &[&str]) -> Result<()> {
        let command = format!("git {}", args.join(" "));
        debug!(%command, dir = %dir.display(), "running");

        let output = Command::new("git")
            .args(args)
            .current_dir(dir)
            .output()
            .map_err(|source| Error::Spawn {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(Error::Vcs {
                command,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(())
    }
}

impl Vcs for Git {
    fn clone_repo(&self, url: &str, dest: &Path) -> Result<()> {
        let parent = dest.parent().unwrap_or(Path::new("."));
        let name = dest.file_name().unwrap_or(dest.as_os_str()).to_string_lossy();
        self.run(parent, &["clone", url, &*name])
    }

    fn pull(&self, dir: &Path) -> Result<()> {
        self.run(dir, &["pull"])
    }
}

/// Creates, refreshes and removes the offline mirror.
pub struct CacheManager<'a> {
    config: &'a Config,
    vcs: &'a dyn Vcs,
}

impl<'a> CacheManager<'a> {
    pub fn new(config: &'a Config, vcs: &'a dyn Vcs) -> Self {
        Self { config, vcs }
    }

    /// Whether a mirror is present.
    pub fn exists(&self) -> bool {
        self.config.mirror_dir().exists()
    }

    /// Create the cache root and clone the mirror into it.
    ///
    /// Fails with [`Error::AlreadyInitialized`] if a mirror is already present.
    pub fn init(&self) -> Result<()> {
        let root = self.config.cache_root();
        fs::create_dir_all(root).map_err(|e| Error::io(root, e))?;

        let mirror = self.config.mirror_dir();
        if mirror.exists() {
            return Err(Error::AlreadyInitialized(mirror));
        }

        info!(url = %self.config.repo_url, dest = %mirror.display(), "cloning offline mirror");
        self.vcs.clone_repo(&self.config.repo_url, &mirror)
    }

    /// Pull the latest pages into an existing mirror.
    ///
    /// Fails with [`Error::NotInitialized`] when there is nothing to update.
    pub fn update(&self) -> Result<()> {
        let mirror = self.config.mirror_dir();
        if !mirror.exists() {
            return Err(Error::NotInitialized);
        }

        info!(dir = %mirror.display(), "updating offline mirror");
        self.vcs.pull(&mirror)
    }

    /// Remove the cache root. Succeeds when there is nothing to remove.
    ///
    /// Returns whether anything was deleted.
    pub fn delete(&self) -> Result<bool> {
        let root = self.config.cache_root();
        if !root.exists() {
            debug!(root = %root.display(), "cache root absent");
            return Ok(false);
        }

        fs::remove_dir_all(root).map_err(|e| Error::io(root, e))?;
        info!(root = %root.display(), "deleted offline mirror");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use tempfile::TempDir;

    use super::*;
    use crate::error::ErrorKind;

    /// Stands in for git by creating and touching directories.
    #[derive(Default)]
    struct FakeVcs {
        calls: RefCell<Vec<String>>,
    }

    impl Vcs for FakeVcs {
        fn clone_repo(&self, url: &str, dest: &Path) -> Result<()> {
            self.calls.borrow_mut().push(format!("clone {url}"));
            fs::create_dir_all(dest.join("pages").join("common")).map_err(|e| Error::io(dest, e))
        }

        fn pull(&self, dir: &Path) -> Result<()> {
            self.calls.borrow_mut().push("pull".to_string());
            assert!(dir.exists());
            Ok(())
        }
    }

    fn config(dir: &TempDir) -> Config {
        Config::with_cache_root(dir.path().join(".tldr").join("cache"))
    }

    #[test]
    fn test_init_clones_into_mirror_dir() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir);
        let vcs = FakeVcs::default();
        let cache = CacheManager::new(&config, &vcs);

        cache.init().unwrap();

        assert!(cache.exists());
        assert!(config.mirror_dir().join("pages").join("common").is_dir());
        assert_eq!(
            *vcs.calls.borrow(),
            vec![format!("clone {}", config.repo_url)]
        );
    }

    #[test]
    fn test_init_twice_fails() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir);
        let vcs = FakeVcs::default();
        let cache = CacheManager::new(&config, &vcs);

        cache.init().unwrap();
        let err = cache.init().unwrap_err();

        assert_eq!(err.kind(), ErrorKind::CacheState);
        assert!(err.to_string().starts_with("Cache already exists"));
        assert_eq!(vcs.calls.borrow().len(), 1);
    }

    #[test]
    fn test_update_requires_init() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir);
        let vcs = FakeVcs::default();
        let cache = CacheManager::new(&config, &vcs);

        let err = cache.update().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CacheState);
        assert_eq!(
            err.to_string(),
            "Cache does not exist, run 'tldr cache init' to create"
        );
        assert!(vcs.calls.borrow().is_empty());

        cache.init().unwrap();
        cache.update().unwrap();
        assert_eq!(vcs.calls.borrow().last().unwrap(), "pull");
    }

    #[test]
    fn test_delete_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir);
        let vcs = FakeVcs::default();
        let cache = CacheManager::new(&config, &vcs);

        assert!(!cache.delete().unwrap());

        cache.init().unwrap();
        assert!(cache.delete().unwrap());
        assert!(!config.cache_root().exists());
        assert!(!cache.delete().unwrap());

        // A fresh init works after delete.
        cache.init().unwrap();
        assert!(cache.exists());
    }
}
