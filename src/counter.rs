use std::collections::BTreeMap;
use std::fmt;

/// Report key under which the sentinel bucket is printed.
pub const OTHER_KEY: &str = "other";

/// Aggregation key: a normalized letter, or the sentinel for terms with no
/// Latin letters. `Other` orders after every letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Bucket {
    Letter(char),
    Other,
}

impl Bucket {
    /// Bucket for `c`, if it is one of `a`–`z`.
    pub fn letter(c: char) -> Option<Self> {
        c.is_ascii_lowercase().then_some(Bucket::Letter(c))
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bucket::Letter(c) => write!(f, "{c}"),
            Bucket::Other => f.write_str(OTHER_KEY),
        }
    }
}

/// Occurrence count per bucket. At most 27 keys.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LetterCounter {
    counts: BTreeMap<Bucket, u64>,
}

impl LetterCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, bucket: Bucket) {
        *self.counts.entry(bucket).or_insert(0) += 1;
    }

    pub fn get(&self, bucket: Bucket) -> u64 {
        self.counts.get(&bucket).copied().unwrap_or(0)
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Number of distinct buckets seen.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Buckets in ascending order with their counts.
    pub fn iter(&self) -> impl Iterator<Item = (Bucket, u64)> + '_ {
        self.counts.iter().map(|(b, n)| (*b, *n))
    }

    pub fn sorted(&self) -> Vec<(Bucket, u64)> {
        self.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_and_orders_buckets() {
        let mut counter = LetterCounter::new();
        for c in ['b', 'a', 'b', 'z'] {
            counter.increment(Bucket::Letter(c));
        }
        counter.increment(Bucket::Other);
        assert_eq!(
            counter.sorted(),
            vec![
                (Bucket::Letter('a'), 1),
                (Bucket::Letter('b'), 2),
                (Bucket::Letter('z'), 1),
                (Bucket::Other, 1),
            ]
        );
        assert_eq!(counter.total(), 5);
        assert_eq!(counter.get(Bucket::Letter('q')), 0);
    }

    #[test]
    fn only_ascii_lowercase_makes_a_letter_bucket() {
        assert_eq!(Bucket::letter('k'), Some(Bucket::Letter('k')));
        assert_eq!(Bucket::letter('K'), None);
        assert_eq!(Bucket::letter('é'), None);
    }

    #[test]
    fn display_keys() {
        assert_eq!(Bucket::Letter('m').to_string(), "m");
        assert_eq!(Bucket::Other.to_string(), "other");
    }
}
