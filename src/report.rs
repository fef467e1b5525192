use crate::compare::Comparison;
use crate::config::Config;
use crate::hosts::HostList;
use crate::utils::format_number;

pub const DEFAULT_LOCALHOST_ENTRIES: &[&str] = &[
    "127.0.0.1 localhost",
    "127.0.0.1 localhost.localdomain",
    "127.0.0.1 local",
    "255.255.255.255 broadcasthost",
    "::1 localhost",
    "::1 ip6-localhost",
    "::1 ip6-loopback",
    "fe80::1%lo0 localhost",
    "ff00::0 ip6-localnet",
    "ff00::0 ip6-mcastprefix",
    "ff02::1 ip6-allnodes",
    "ff02::2 ip6-allrouters",
    "ff02::3 ip6-allhosts",
    "0.0.0.0 0.0.0.0",
];

/// Which comparison lists to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComparisonMode {
    pub intersection: bool,
    pub unique: bool,
}

/// Hosts-file output as bytes, so a preserved header is emitted exactly as read.
pub fn render_hosts(list: &HostList, config: &Config) -> Vec<u8> {
    let mut out = Vec::new();

    if config.include_header {
        for line in &list.header {
            out.extend_from_slice(line);
            out.push(b'\n');
        }
    }

    if config.add_default_localhost_entries {
        for entry in DEFAULT_LOCALHOST_ENTRIES {
            out.extend_from_slice(entry.as_bytes());
            out.push(b'\n');
        }
        out.push(b'\n');
    }

    for domain in &list.domains {
        if !config.plain_output {
            out.extend_from_slice(config.ip_prefix.as_bytes());
            out.push(b' ');
        }
        out.extend_from_slice(domain.as_bytes());
        out.push(b'\n');
    }

    out
}

pub fn render_summary(list: &HostList, config: &Config) -> String {
    let mut lines = vec![
        format!("Source: {}", list.location),
        format!("Domains: {}", format_number(list.domains.len())),
        format!("Bytes: {}", format_number(list.byte_count())),
        format!("Duplicates removed: {}", format_number(list.duplicates.len())),
    ];

    if config.enable_tld_tally {
        let shown = config
            .tally_limit
            .unwrap_or(list.tld_tally.len())
            .min(list.tld_tally.len());
        lines.push(String::new());
        lines.push(format!(
            "Top {} of {} TLDs:",
            shown,
            format_number(list.tld_tally.len())
        ));
        for entry in list.tld_tally.iter().take(shown) {
            lines.push(format!("- {}: {}", entry.tld, format_number(entry.count)));
        }
    }

    lines.join("\n") + "\n"
}

pub fn render_duplicates(list: &HostList) -> String {
    let mut out = format!(
        "Duplicates in {}: {}\n",
        list.location,
        format_number(list.duplicates.len())
    );
    for domain in &list.duplicates {
        out.push_str(domain);
        out.push('\n');
    }
    out
}

pub fn render_comparison(
    a: &HostList,
    b: &HostList,
    comparison: &Comparison,
    mode: ComparisonMode,
) -> String {
    let mut out = format!(
        "{}: {} domains\n{}: {} domains\n",
        a.location,
        format_number(a.domains.len()),
        b.location,
        format_number(b.domains.len())
    );

    out.push_str(&format!(
        "Intersection: {} domains\n",
        format_number(comparison.intersection.len())
    ));
    if mode.intersection {
        for domain in &comparison.intersection {
            out.push_str(domain);
            out.push('\n');
        }
    }

    out.push_str(&format!(
        "Unique to {}: {} domains\n",
        b.location,
        format_number(comparison.unique_in_b.len())
    ));
    if mode.unique {
        for domain in &comparison.unique_in_b {
            out.push_str(domain);
            out.push('\n');
        }
    }

    out
}
