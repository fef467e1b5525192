use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::info;
use url::Url;

use crate::error::{HostsError, Result};

pub const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

pub const CLIPBOARD_LOCATION: &str = "clipboard";

/// Shortcut codes for well-known published blocklists.
pub const SHORTCUTS: &[(&str, &str)] = &[
    (
        "base",
        "https://raw.githubusercontent.com/StevenBlack/hosts/master/hosts",
    ),
    (
        "adaway",
        "https://raw.githubusercontent.com/AdAway/adaway.github.io/master/hosts.txt",
    ),
    ("mvps", "https://winhelp2002.mvps.org/hosts.txt"),
    (
        "yoyo",
        "https://pgl.yoyo.org/adservers/serverlist.php?hostformat=hosts&mimetype=plaintext&useip=0.0.0.0",
    ),
    ("someonewhocares", "https://someonewhocares.org/hosts/zero/hosts"),
    ("urlhaus", "https://urlhaus.abuse.ch/downloads/hostfile/"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Url(String),
    Clipboard,
}

pub fn lookup_shortcut(code: &str) -> Option<&'static str> {
    let code = code.to_lowercase();
    SHORTCUTS
        .iter()
        .find(|(name, _)| *name == code)
        .map(|(_, url)| *url)
}

impl Source {
    /// Detects the source kind. An existing path takes precedence over a
    /// shortcut code of the same name.
    pub fn parse(input: &str) -> Self {
        Self::parse_with(input, |path| path.exists())
    }

    fn parse_with(input: &str, path_exists: impl Fn(&Path) -> bool) -> Self {
        let input = input.trim();
        let lowered = input.to_lowercase();

        if lowered == "clip" || lowered == CLIPBOARD_LOCATION {
            return Source::Clipboard;
        }
        if path_exists(Path::new(input)) {
            return Source::File(PathBuf::from(input));
        }
        if let Some(url) = lookup_shortcut(input) {
            return Source::Url(url.to_string());
        }
        if lowered.starts_with("http") {
            return Source::Url(input.to_string());
        }
        Source::File(PathBuf::from(input))
    }

    /// Origin descriptor recorded on the loaded list.
    pub fn location(&self) -> String {
        match self {
            Source::File(path) => path.display().to_string(),
            Source::Url(url) => url.clone(),
            Source::Clipboard => CLIPBOARD_LOCATION.to_string(),
        }
    }

    /// Reads the raw bytes. Blocks until the whole source is read or fails.
    pub fn fetch(&self) -> Result<Vec<u8>> {
        let start_time = Instant::now();
        info!(action = "start", component = "source_fetch", location = %self.location(), "Fetching hosts source");

        let bytes = match self {
            Source::File(path) => fs::read(path).map_err(|source| HostsError::Read {
                path: path.clone(),
                source,
            })?,
            Source::Url(url) => fetch_url(url)?,
            Source::Clipboard => {
                let mut clipboard = arboard::Clipboard::new()?;
                clipboard.get_text()?.into_bytes()
            }
        };

        info!(
            action = "complete",
            component = "source_fetch",
            bytes = bytes.len(),
            duration_ms = start_time.elapsed().as_millis(),
            "Source fetched"
        );
        Ok(bytes)
    }
}

fn fetch_url(url: &str) -> Result<Vec<u8>> {
    let parsed = Url::parse(url)?;

    let client = reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()?;
    let response = client.get(parsed.as_str()).send()?;

    let status = response.status();
    if !status.is_success() {
        return Err(HostsError::HttpStatus {
            url: url.to_string(),
            status,
        });
    }

    Ok(response.bytes()?.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_clipboard() {
        assert_eq!(Source::parse("clip"), Source::Clipboard);
        assert_eq!(Source::parse("Clipboard"), Source::Clipboard);
    }

    #[test]
    fn test_parse_url_prefix_is_case_insensitive() {
        assert_eq!(
            Source::parse("HTTPS://example.com/hosts"),
            Source::Url("HTTPS://example.com/hosts".to_string())
        );
        assert_eq!(
            Source::parse("http://example.com/hosts"),
            Source::Url("http://example.com/hosts".to_string())
        );
    }

    #[test]
    fn test_parse_shortcut() {
        assert_eq!(
            Source::parse("base"),
            Source::Url("https://raw.githubusercontent.com/StevenBlack/hosts/master/hosts".to_string())
        );
        assert!(lookup_shortcut("ADAWAY").is_some());
        assert!(lookup_shortcut("nope").is_none());
    }

    #[test]
    fn test_existing_file_wins_over_shortcut() {
        assert_eq!(
            Source::parse_with("mvps", |path| path == Path::new("mvps")),
            Source::File(PathBuf::from("mvps"))
        );
        assert_eq!(
            Source::parse_with("mvps", |_| false),
            Source::Url("https://winhelp2002.mvps.org/hosts.txt".to_string())
        );
    }

    #[test]
    fn test_parse_file() {
        assert_eq!(
            Source::parse("./data/hosts"),
            Source::File(PathBuf::from("./data/hosts"))
        );
        assert_eq!(Source::parse("./data/hosts").location(), "./data/hosts");
        assert_eq!(Source::Clipboard.location(), "clipboard");
    }

    #[test]
    fn test_fetch_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "0.0.0.0 a.com").unwrap();

        let bytes = Source::File(file.path().to_path_buf()).fetch().unwrap();
        assert_eq!(bytes, b"0.0.0.0 a.com\n");
    }

    #[test]
    fn test_fetch_missing_file_is_error() {
        let err = Source::File(PathBuf::from("/definitely/not/here/hosts"))
            .fetch()
            .unwrap_err();
        assert!(matches!(err, HostsError::Read { .. }));
    }

    #[test]
    fn test_fetch_malformed_url_is_error() {
        let err = Source::Url("http//missing-colon".to_string())
            .fetch()
            .unwrap_err();
        assert!(matches!(err, HostsError::InvalidUrl(_)));
    }
}
