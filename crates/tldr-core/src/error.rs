use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Broad classes of failure, used by the CLI to decide how to report.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// No category had the page, locally or remotely.
    NotFound,
    /// Filesystem, network or subprocess failure other than a clean miss.
    Transport,
    /// The offline mirror is in the wrong state for the requested operation.
    CacheState,
    /// The command name itself was rejected.
    Usage,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("tldr for '{0}' could not be found")]
    NotFound(String),

    #[error("Invalid command name '{name}': {reason}")]
    InvalidName { name: String, reason: &'static str },

    #[error("Failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to fetch {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: ureq::Error,
    },

    #[error("Failed to run {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("{command} failed ({status}): {stderr}")]
    Vcs {
        command: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("Could not determine home directory")]
    NoHomeDir,

    #[error("Cache already exists at {}", .0.display())]
    AlreadyInitialized(PathBuf),

    #[error("Cache does not exist, run 'tldr cache init' to create")]
    NotInitialized,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NotFound(_) => ErrorKind::NotFound,
            Error::InvalidName { .. } => ErrorKind::Usage,
            Error::Io { .. }
            | Error::Http { .. }
            | Error::Spawn { .. }
            | Error::Vcs { .. }
            | Error::NoHomeDir => ErrorKind::Transport,
            Error::AlreadyInitialized(_) | Error::NotInitialized => ErrorKind::CacheState,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = Error::NotFound("git-commit".to_string());
        assert_eq!(err.to_string(), "tldr for 'git-commit' could not be found");
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_cache_state_messages() {
        let err = Error::AlreadyInitialized(PathBuf::from("/tmp/cache/tldr"));
        assert_eq!(err.to_string(), "Cache already exists at /tmp/cache/tldr");
        assert_eq!(err.kind(), ErrorKind::CacheState);
        assert_eq!(Error::NotInitialized.kind(), ErrorKind::CacheState);
    }

    #[test]
    fn test_io_is_transport() {
        let err = Error::io(
            "/nowhere",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.kind(), ErrorKind::Transport);
        assert_eq!(err.to_string(), "Failed to access /nowhere: denied");
    }
}
