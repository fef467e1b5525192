use once_cell::sync::Lazy;
use regex::Regex;
use std::net::IpAddr;
use tracing::warn;

pub const MAX_LABEL_LEN: usize = 63;

/// Fixed width each label is padded to in [`sort_key`]. Labels longer than
/// this break registrable-domain grouping.
pub const SORT_PAD_WIDTH: usize = 64;

const LABEL: &str = r"[a-z0-9_](?:-?[a-z0-9_])*";
const IPV4: &str = r"(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9]?[0-9])\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9]?[0-9])";

// Lines reaching the classifier are lowercased with single-space separators.
static HOST_LINE: Lazy<Regex> = Lazy::new(|| {
    let domain = format!(r"{LABEL}(?:\.{LABEL})+");
    Regex::new(&format!(r"^(?:{domain}|{IPV4}(?: {domain})+)$"))
        .expect("host line grammar is a valid regex")
});

/// Whether a cleaned line is a bare domain or an IPv4 address followed by domains.
pub fn is_host_line(line: &str) -> bool {
    HOST_LINE.is_match(line)
        && line
            .split(' ')
            .flat_map(|token| token.split('.'))
            .all(|label| label.len() <= MAX_LABEL_LEN)
}

/// Domain tokens of a host line, one per host. Non-matching lines yield nothing.
pub fn extract_domains(line: &str) -> Vec<String> {
    if !is_host_line(line) {
        return Vec::new();
    }

    let mut tokens = line.split_whitespace().peekable();
    if let Some(first) = tokens.peek() {
        if first.parse::<IpAddr>().is_ok() {
            tokens.next();
        }
    }

    tokens.map(str::to_string).collect()
}

/// Composite ordering key: second-level label, TLD, then the remaining labels
/// right to left, each right-padded to [`SORT_PAD_WIDTH`].
pub fn sort_key(domain: &str) -> String {
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return domain.to_string();
    }

    if let Some(long) = labels.iter().find(|label| label.len() > SORT_PAD_WIDTH) {
        warn!(
            action = "sort_key",
            component = "domain_sort",
            domain = domain,
            label_len = long.len(),
            pad_width = SORT_PAD_WIDTH,
            "Label exceeds sort pad width, ordering may be off"
        );
    }

    let n = labels.len();
    let ordered = [labels[n - 2], labels[n - 1]]
        .into_iter()
        .chain(labels[..n - 2].iter().rev().copied());

    let mut key = String::with_capacity(SORT_PAD_WIDTH * n);
    for label in ordered {
        key.push_str(&format!("{:<width$}", label, width = SORT_PAD_WIDTH));
    }
    key
}

/// Reorders domains by [`sort_key`], grouping subdomains under their registrable domain.
pub fn sort_by_registrable_domain(domains: &mut [String]) {
    domains.sort_by_cached_key(|domain| sort_key(domain));
}

pub fn tld(domain: &str) -> Option<&str> {
    domain.rfind('.').map(|idx| &domain[idx + 1..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_only_line() {
        assert!(is_host_line("example.com"));
        assert!(is_host_line("a-b.c_d.example.co"));
        assert!(!is_host_line("localhost"));
        assert!(!is_host_line("bad-.example.com"));
        assert!(!is_host_line("-bad.example.com"));
        assert!(!is_host_line("a.com b.com"));
    }

    #[test]
    fn test_ip_host_line() {
        assert!(is_host_line("0.0.0.0 ads.example.com"));
        assert!(is_host_line("127.0.0.1 a.com b.com c.com"));
        assert!(!is_host_line("256.0.0.1 a.com"));
        assert!(extract_domains("0.0.0.0").is_empty());
        assert!(!is_host_line("0.0.0.0 localhost"));
        assert!(!is_host_line("::1 ip6-localhost.net"));
    }

    #[test]
    fn test_label_length_limit() {
        let ok = format!("{}.com", "a".repeat(63));
        let too_long = format!("{}.com", "a".repeat(64));
        assert!(is_host_line(&ok));
        assert!(!is_host_line(&too_long));
    }

    #[test]
    fn test_prose_is_not_a_host_line() {
        assert!(!is_host_line("this is just some text."));
        assert!(extract_domains("welcome to the list of things").is_empty());
    }

    #[test]
    fn test_extract_fans_out_multi_host_lines() {
        assert_eq!(
            extract_domains("0.0.0.0 a.com b.com c.com"),
            vec!["a.com", "b.com", "c.com"]
        );
        assert_eq!(extract_domains("example.com"), vec!["example.com"]);
    }

    #[test]
    fn test_extract_keeps_unparseable_ip_prefix() {
        // Leading zeros satisfy the grammar but not the address parser.
        assert_eq!(
            extract_domains("010.0.0.1 a.com"),
            vec!["010.0.0.1", "a.com"]
        );
    }

    #[test]
    fn test_sort_key_groups_registrable_domain() {
        assert!(sort_key("aa.ca") < sort_key("zz.aa"));
        assert!(sort_key("cc.ca") < sort_key("aa.cc.ca"));
        assert!(sort_key("a.b.example.com") < sort_key("c.b.example.com"));
        assert!(sort_key("c.b.example.com") < sort_key("a.d.example.com"));
        assert_eq!(sort_key("single"), "single");
    }

    #[test]
    fn test_sort_key_keeps_labels_wider_than_pad() {
        let label = "a".repeat(SORT_PAD_WIDTH + 6);
        let key = sort_key(&format!("{}.com", label));
        assert!(key.starts_with(&label));
        assert_eq!(key.len(), label.len() + SORT_PAD_WIDTH);
        assert!(key.ends_with(&format!("{:<width$}", "com", width = SORT_PAD_WIDTH)));
    }

    #[test]
    fn test_sort_by_registrable_domain() {
        let mut domains = vec![
            "zz.aa".to_string(),
            "aa.cc.ca".to_string(),
            "cc.ca".to_string(),
            "aa.ca".to_string(),
        ];
        sort_by_registrable_domain(&mut domains);
        assert_eq!(domains, vec!["aa.ca", "cc.ca", "aa.cc.ca", "zz.aa"]);
    }

    #[test]
    fn test_tld() {
        assert_eq!(tld("ads.example.com"), Some("com"));
        assert_eq!(tld("localhost"), None);
    }
}
