use crate::args::Args;

pub const DEFAULT_IP_PREFIX: &str = "0.0.0.0";

/// Processing and output options, fixed for the whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub enable_tld_tally: bool,
    pub enable_custom_sort: bool,
    /// Omit the IP prefix on emitted lines.
    pub plain_output: bool,
    pub ip_prefix: String,
    pub include_header: bool,
    pub add_default_localhost_entries: bool,
    /// Maximum number of tally rows shown in the summary; `None` shows all.
    pub tally_limit: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enable_tld_tally: false,
            enable_custom_sort: false,
            plain_output: false,
            ip_prefix: DEFAULT_IP_PREFIX.to_string(),
            include_header: false,
            add_default_localhost_entries: false,
            tally_limit: None,
        }
    }
}

impl From<&Args> for Config {
    fn from(args: &Args) -> Self {
        Self {
            enable_tld_tally: args.tld,
            enable_custom_sort: args.sort,
            plain_output: args.plain,
            ip_prefix: args.ip.trim().to_string(),
            include_header: args.header,
            add_default_localhost_entries: args.defaults,
            tally_limit: args.tld_limit,
        }
    }
}
