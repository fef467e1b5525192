use std::collections::HashMap;

use crate::domain::tld;

/// Occurrences of one top-level label among the unique domains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TldTally {
    pub tld: String,
    pub count: usize,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DedupResult {
    pub unique: Vec<String>,
    /// Every removed occurrence, in scan order.
    pub duplicates: Vec<String>,
}

/// Sorts byte-wise and collapses adjacent repeats.
pub fn dedup(mut tokens: Vec<String>) -> DedupResult {
    tokens.sort_unstable();

    let mut result = DedupResult {
        unique: Vec::with_capacity(tokens.len()),
        duplicates: Vec::new(),
    };

    for token in tokens {
        if result.unique.last() == Some(&token) {
            result.duplicates.push(token);
        } else {
            result.unique.push(token);
        }
    }

    result
}

/// Counts domains per TLD, most frequent first, ties alphabetical.
pub fn tally_tlds(domains: &[String]) -> Vec<TldTally> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for domain in domains {
        if let Some(tld) = tld(domain) {
            *counts.entry(tld).or_insert(0) += 1;
        }
    }

    let mut tally: Vec<TldTally> = counts
        .into_iter()
        .map(|(tld, count)| TldTally {
            tld: tld.to_string(),
            count,
        })
        .collect();
    tally.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.tld.cmp(&b.tld)));
    tally
}
