//! Parsing of the line-prefix page format.
//!
//! Every non-blank line is classified by its first byte:
//!
//! - `#` sets the title
//! - `>` appends a description line
//! - `-` starts a new example
//! - `` ` `` sets the command of the most recent example
//!
//! Anything else is ignored.

use std::io::{self, Read};

/// One usage illustration on a page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Example {
    pub description: String,
    pub command: String,
}

/// A parsed page for a single command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    pub title: String,
    pub description: Vec<String>,
    /// Where the page was found, e.g. `common` or `linux, cached`.
    pub source: String,
    /// Examples in definition order.
    pub examples: Vec<Example>,
}

impl Page {
    /// Parse page text. Never fails; unknown lines are skipped.
    pub fn parse(text: &str) -> Self {
        let mut page = Page::default();

        // `lines` drops one `\r` before each `\n` but keeps a lone final one.
        let text = if text.ends_with('\n') {
            text
        } else {
            text.strip_suffix('\r').unwrap_or(text)
        };

        for line in text.lines() {
            let Some(first) = line.bytes().next() else {
                continue;
            };

            match first {
                b'#' => page.title = strip(line, "# ").to_string(),
                b'>' => page.description.push(strip(line, "> ").to_string()),
                b'-' => page.examples.push(Example {
                    description: strip(line, "- ").to_string(),
                    command: String::new(),
                }),
                b'`' => page.set_command(line.trim_matches('`')),
                _ => {}
            }
        }

        page
    }

    /// Read a whole stream and parse it.
    ///
    /// Only the read can fail. Invalid UTF-8 is replaced rather than rejected.
    pub fn from_reader<R: Read>(mut reader: R) -> io::Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Ok(Self::parse(&String::from_utf8_lossy(&bytes)))
    }

    /// A page with no title, description or examples.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.description.is_empty() && self.examples.is_empty()
    }

    fn set_command(&mut self, command: &str) {
        // A command with no preceding description gets a placeholder example.
        if self.examples.is_empty() {
            self.examples.push(Example::default());
        }
        if let Some(last) = self.examples.last_mut() {
            last.command = command.to_string();
        }
    }
}

fn strip<'a>(line: &'a str, prefix: &str) -> &'a str {
    line.strip_prefix(prefix).unwrap_or(line)
}
