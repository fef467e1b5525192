use std::collections::HashSet;

/// Domains present in both lists, ascending.
pub fn intersection<S: AsRef<str>>(a: &[S], b: &[S]) -> Vec<String> {
    let in_a: HashSet<&str> = a.iter().map(|domain| domain.as_ref()).collect();
    let mut common: Vec<String> = b
        .iter()
        .map(|domain| domain.as_ref())
        .filter(|domain| in_a.contains(domain))
        .collect::<HashSet<&str>>()
        .into_iter()
        .map(str::to_string)
        .collect();
    common.sort_unstable();
    common
}

/// Domains of `b` outside `intersection(a, b)`, ascending.
pub fn unique_in_b<S: AsRef<str>>(a: &[S], b: &[S]) -> Vec<String> {
    let common = intersection(a, b);
    let common: HashSet<&str> = common.iter().map(String::as_str).collect();
    let mut unique: Vec<String> = b
        .iter()
        .map(|domain| domain.as_ref())
        .filter(|domain| !common.contains(domain))
        .map(str::to_string)
        .collect();
    unique.sort_unstable();
    unique
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub intersection: Vec<String>,
    pub unique_in_b: Vec<String>,
}

impl Comparison {
    pub fn new<S: AsRef<str>>(a: &[S], b: &[S]) -> Self {
        Self {
            intersection: intersection(a, b),
            unique_in_b: unique_in_b(a, b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersection_is_sorted() {
        let a = ["cumquat", "apple", "orange", "pear"];
        let b = ["apple", "orange", "banana"];
        let common = intersection(&a, &b);
        assert_eq!(common, vec!["apple", "orange"]);
        assert_eq!(common.len(), 2);
    }

    #[test]
    fn test_intersection_disjoint() {
        let a = ["a.com"];
        let b = ["b.com"];
        assert!(intersection(&a, &b).is_empty());
    }

    #[test]
    fn test_unique_in_b() {
        let a = ["cumquat", "apple", "orange", "pear"];
        let b = ["orange", "banana", "apple", "kiwi"];
        assert_eq!(unique_in_b(&a, &b), vec!["banana", "kiwi"]);
        assert!(unique_in_b(&b, &b).is_empty());
    }

    #[test]
    fn test_comparison() {
        let a = vec!["a.com".to_string(), "b.com".to_string()];
        let b = vec!["b.com".to_string(), "c.com".to_string()];
        let cmp = Comparison::new(&a, &b);
        assert_eq!(cmp.intersection, vec!["b.com"]);
        assert_eq!(cmp.unique_in_b, vec!["c.com"]);
    }
}
