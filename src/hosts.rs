use std::time::Instant;
use tracing::info;

use crate::canonical::{capture_header, clean_lines};
use crate::config::Config;
use crate::domain::{extract_domains, sort_by_registrable_domain};
use crate::error::Result;
use crate::source::Source;
use crate::stats::{dedup, tally_tlds, TldTally};

/// A processed hosts source. Built once, read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostList {
    pub raw: Vec<u8>,
    pub location: String,
    /// Leading blank and comment lines, byte for byte.
    pub header: Vec<Vec<u8>>,
    /// Unique domains, lexicographic or by registrable domain when custom sort is on.
    pub domains: Vec<String>,
    pub duplicates: Vec<String>,
    pub tld_tally: Vec<TldTally>,
}

impl HostList {
    /// Fetches the source and processes it. Any I/O failure aborts the load.
    pub fn load(source: &Source, config: &Config) -> Result<Self> {
        let raw = source.fetch()?;
        Ok(Self::from_bytes(raw, source.location(), config))
    }

    /// Runs the full pipeline over raw hosts text.
    pub fn from_bytes(raw: Vec<u8>, location: impl Into<String>, config: &Config) -> Self {
        let start_time = Instant::now();
        let location = location.into();
        info!(action = "start", component = "host_list", location = %location, bytes = raw.len(), "Processing hosts source");

        let header = capture_header(&raw);

        let text = String::from_utf8_lossy(&raw).into_owned();
        let tokens: Vec<String> = clean_lines(&text)
            .iter()
            .map(String::as_str)
            .flat_map(extract_domains)
            .collect();

        if tokens.is_empty() {
            info!(action = "complete", component = "host_list", domain_count = 0, "No host lines found");
            return Self {
                raw,
                location,
                header,
                ..Self::default()
            };
        }

        let token_count = tokens.len();
        let deduped = dedup(tokens);
        let tld_tally = tally_tlds(&deduped.unique);

        let mut domains = deduped.unique;
        if config.enable_custom_sort {
            sort_by_registrable_domain(&mut domains);
        }

        info!(
            action = "complete",
            component = "host_list",
            token_count = token_count,
            domain_count = domains.len(),
            duplicate_count = deduped.duplicates.len(),
            duration_ms = start_time.elapsed().as_millis(),
            "Hosts source processed"
        );

        Self {
            raw,
            location,
            header,
            domains,
            duplicates: deduped.duplicates,
            tld_tally,
        }
    }

    pub fn byte_count(&self) -> usize {
        self.raw.len()
    }
}
