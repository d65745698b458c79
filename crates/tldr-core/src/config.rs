use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::BaseDirs;

use crate::category::{Category, Platform};
use crate::error::{Error, Result};

pub const DEFAULT_BASE_URL: &str = "https://raw.githubusercontent.com/tldr-pages/tldr/master";
pub const DEFAULT_REPO_URL: &str = "https://github.com/tldr-pages/tldr.git";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Name of the clone inside the cache root.
const MIRROR_DIR: &str = "tldr";

/// Read-only settings for one invocation.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the offline mirror, `~/.tldr/cache` by default.
    pub cache_root: PathBuf,
    /// Raw content root of the upstream page repository.
    pub base_url: String,
    /// Git remote cloned by `cache init`.
    pub repo_url: String,
    /// Global timeout applied to each remote request.
    pub timeout: Duration,
    pub platform: Platform,
}

impl Config {
    /// Defaults rooted at the user's home directory.
    pub fn new() -> Result<Self> {
        Ok(Self::with_cache_root(default_cache_root()?))
    }

    pub fn with_cache_root(cache_root: impl Into<PathBuf>) -> Self {
        Self {
            cache_root: cache_root.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            repo_url: DEFAULT_REPO_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            platform: Platform::current(),
        }
    }

    pub fn platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Root of the cloned page repository.
    pub fn mirror_dir(&self) -> PathBuf {
        self.cache_root.join(MIRROR_DIR)
    }

    /// Local path of a page inside the mirror.
    pub fn local_page(&self, category: Category, name: &str) -> PathBuf {
        self.mirror_dir().join(category.page_path(name))
    }

    pub fn remote_page(&self, category: Category, name: &str) -> String {
        category.page_url(&self.base_url, name)
    }

    /// Categories in lookup order.
    pub fn categories(&self) -> [Category; 3] {
        Category::priority(self.platform)
    }

    pub fn cache_root(&self) -> &Path {
        &self.cache_root
    }
}

fn default_cache_root() -> Result<PathBuf> {
    let dirs = BaseDirs::new().ok_or(Error::NoHomeDir)?;
    Ok(dirs.home_dir().join(".tldr").join("cache"))
}
