use std::collections::HashMap;
use std::hash::Hash;

/// Occurrence counter that remembers first-seen order.
///
/// `most_common` sorts by count descending with a stable sort, so equal
/// counts keep the order in which keys were first added.
#[derive(Debug, Clone)]
pub(crate) struct Tally<K> {
    index: HashMap<K, usize>,
    counts: Vec<(K, usize)>,
}

impl<K: Eq + Hash + Clone> Tally<K> {
    pub fn new() -> Self {
        Self {
            index: HashMap::new(),
            counts: Vec::new(),
        }
    }

    pub fn add(&mut self, key: K) {
        if let Some(&slot) = self.index.get(&key) {
            self.counts[slot].1 += 1;
        } else {
            self.index.insert(key.clone(), self.counts.len());
            self.counts.push((key, 1));
        }
    }

    pub fn most_common(self, n: usize) -> Vec<(K, usize)> {
        let mut counts = self.counts;
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts.truncate(n);
        counts
    }
}

impl<K: Eq + Hash + Clone> Extend<K> for Tally<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.add(key);
        }
    }
}
