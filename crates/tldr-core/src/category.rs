use std::fmt;
use std::str::FromStr;

/// A platform grouping under which pages are filed.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Category {
    Common,
    Osx,
    Linux,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Common => "common",
            Category::Osx => "osx",
            Category::Linux => "linux",
        }
    }

    /// Path of a page relative to the mirror root.
    pub fn page_path(self, name: &str) -> String {
        format!("pages/{}/{}.md", self.as_str(), name)
    }

    /// Absolute URL of a page below `base_url`.
    pub fn page_url(self, base_url: &str, name: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.page_path(name))
    }

    /// Lookup order: `common` first, then the given platform, then the other one.
    pub fn priority(platform: Platform) -> [Category; 3] {
        match platform {
            Platform::Linux => [Category::Common, Category::Linux, Category::Osx],
            Platform::Osx => [Category::Common, Category::Osx, Category::Linux],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The platform whose pages are preferred after `common`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Platform {
    Linux,
    Osx,
}

impl Platform {
    /// Platform of the running binary. Anything other than macOS is treated as Linux.
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Self::Osx
        } else {
            Self::Linux
        }
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "linux" => Ok(Self::Linux),
            "osx" | "macos" => Ok(Self::Osx),
            _ => Err(format!("Invalid platform: {} (expected linux or osx)", s)),
        }
    }
}

/// Where a page was found, rendered as `<category>` or `<category>, cached`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Source {
    pub category: Category,
    pub cached: bool,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.cached {
            write!(f, "{}, cached", self.category)
        } else {
            write!(f, "{}", self.category)
        }
    }
}
