use std::fmt::Debug;

/// A key drawn from a small, fixed, ordered set.
pub trait Bucket: Copy + Eq + Debug + 'static {
    /// Every bucket, in tie-break priority order.
    const ALL: &'static [Self];

    fn label(&self) -> &'static str;
}

/// Occurrence counts over every bucket of `K`, kept in `K::ALL` order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram<K: Bucket> {
    counts: Vec<(K, u64)>,
}

impl<K: Bucket> Histogram<K> {
    pub fn new() -> Self {
        Self {
            counts: K::ALL.iter().map(|&bucket| (bucket, 0)).collect(),
        }
    }

    pub fn record(&mut self, bucket: K) {
        if let Some((_, count)) = self.counts.iter_mut().find(|(b, _)| *b == bucket) {
            *count += 1;
        }
    }

    pub fn count(&self, bucket: K) -> u64 {
        self.counts
            .iter()
            .find(|(b, _)| *b == bucket)
            .map_or(0, |&(_, count)| count)
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&(_, count)| count).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (K, u64)> + '_ {
        self.counts.iter().copied()
    }

    /// The most frequent bucket.
    ///
    /// Buckets are scanned in `K::ALL` order and one only replaces the running
    /// winner when its count is strictly greater, so the earliest bucket wins a
    /// tie. Returns `None` when nothing was recorded.
    pub fn mode(&self) -> Option<K> {
        let mut best = None;
        let mut highest = 0;
        for &(bucket, count) in &self.counts {
            if count > highest {
                highest = count;
                best = Some(bucket);
            }
        }
        best
    }
}

impl<K: Bucket> Default for Histogram<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Bucket> FromIterator<K> for Histogram<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut histogram = Self::new();
        for bucket in iter {
            histogram.record(bucket);
        }
        histogram
    }
}
