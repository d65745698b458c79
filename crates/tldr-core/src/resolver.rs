//! Page resolution: offline mirror first, then the remote repository.

use std::fs::File;
use std::io::{self, BufReader};

use tracing::{debug, warn};
use ureq::Agent;

use crate::category::Source;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::page::Page;
use crate::util::validate_page_name;

/// Remote page access.
pub trait Fetch {
    /// Fetch the raw page at `url`. `Ok(None)` means the server has no such page.
    fn fetch(&self, url: &str) -> Result<Option<String>>;
}

/// HTTP fetcher backed by a ureq agent with a global timeout.
pub struct HttpFetcher {
    agent: Agent,
}

impl HttpFetcher {
    pub fn new(config: &Config) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(config.timeout))
            .build()
            .into();
        Self { agent }
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Option<String>> {
        let http_err = |source| Error::Http {
            url: url.to_string(),
            source,
        };

        match self.agent.get(url).call() {
            Ok(mut response) => {
                let bytes = response.body_mut().read_to_vec().map_err(http_err)?;
                Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
            }
            Err(ureq::Error::StatusCode(404)) => Ok(None),
            Err(e) => Err(http_err(e)),
        }
    }
}

/// Locates and parses the page for a command name.
pub struct Resolver<'a> {
    config: &'a Config,
    fetcher: &'a dyn Fetch,
}

impl<'a> Resolver<'a> {
    pub fn new(config: &'a Config, fetcher: &'a dyn Fetch) -> Self {
        Self { config, fetcher }
    }

    /// Resolve `name` against every category, mirror before network.
    ///
    /// The first category that has the page wins. A clean miss moves on to the
    /// next category; any other failure aborts resolution.
    pub fn resolve(&self, name: &str) -> Result<Page> {
        validate_page_name(name)?;

        if let Some(page) = self.resolve_cached(name)? {
            return Ok(page);
        }
        if let Some(page) = self.resolve_remote(name)? {
            return Ok(page);
        }

        Err(Error::NotFound(name.to_string()))
    }

    fn resolve_cached(&self, name: &str) -> Result<Option<Page>> {
        for category in self.config.categories() {
            let path = self.config.local_page(category, name);
            let file = match File::open(&path) {
                Ok(file) => file,
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    debug!(path = %path.display(), "not in offline mirror");
                    continue;
                }
                Err(e) => return Err(Error::io(path, e)),
            };

            let mut page =
                Page::from_reader(BufReader::new(file)).map_err(|e| Error::io(&path, e))?;
            page.source = Source {
                category,
                cached: true,
            }
            .to_string();
            warn_if_empty(&page, name);
            debug!(path = %path.display(), "found in offline mirror");
            return Ok(Some(page));
        }

        Ok(None)
    }

    fn resolve_remote(&self, name: &str) -> Result<Option<Page>> {
        for category in self.config.categories() {
            let url = self.config.remote_page(category, name);
            debug!(%url, "fetching");

            let Some(body) = self.fetcher.fetch(&url)? else {
                debug!(%url, "not found remotely");
                continue;
            };

            let mut page = Page::parse(&body);
            page.source = Source {
                category,
                cached: false,
            }
            .to_string();
            warn_if_empty(&page, name);
            return Ok(Some(page));
        }

        Ok(None)
    }
}

fn warn_if_empty(page: &Page, name: &str) {
    if page.is_empty() {
        warn!(command = name, source = %page.source, "page has no recognizable content");
    }
}
