use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "hostsift",
    about = "Reduce hosts-file blocklists to a canonical, deduplicated domain list",
    version,
    long_about = None
)]
pub struct Args {
    /// Hosts source: file path, http(s) URL, shortcut code, or "clip"; an existing file wins over a shortcut of the same name
    #[arg(short, long)]
    pub input: String,

    /// Second hosts source to compare against the input
    #[arg(short, long)]
    pub compare: Option<String>,

    /// Print the domains common to both lists
    #[arg(long, requires = "compare")]
    pub intersection: bool,

    /// Print the domains found only in the compared list
    #[arg(long, requires = "compare")]
    pub unique: bool,

    /// Sort domains by registrable domain instead of alphabetically
    #[arg(short, long)]
    pub sort: bool,

    /// Include the top-level domain tally in the summary
    #[arg(long)]
    pub tld: bool,

    /// Number of TLD tally entries to display
    #[arg(long)]
    pub tld_limit: Option<usize>,

    /// Emit bare domains without the IP prefix
    #[arg(short, long)]
    pub plain: bool,

    /// IP address placed before each domain
    #[arg(long, default_value = "0.0.0.0")]
    pub ip: String,

    /// Keep the source's leading comment block
    #[arg(long)]
    pub header: bool,

    /// Prepend the default localhost entries
    #[arg(short, long)]
    pub defaults: bool,

    /// Print a summary instead of the hosts list
    #[arg(long)]
    pub stats: bool,

    /// Print the duplicate domains removed during processing
    #[arg(long)]
    pub dupes: bool,

    /// Write output to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
