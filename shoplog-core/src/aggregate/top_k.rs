use serde::Serialize;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathCount {
    pub path: String,
    pub count: u64,
}

/// Ranking wrapper: a greater `Ranked` is a better entry. Higher counts win,
/// equal counts prefer the lexicographically smaller path.
#[derive(PartialEq, Eq)]
struct Ranked<'a> {
    count: u64,
    path: &'a str,
}

impl Ord for Ranked<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.count
            .cmp(&other.count)
            .then_with(|| other.path.cmp(self.path))
    }
}

impl PartialOrd for Ranked<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Select the `k` best paths with a min-heap holding at most `k` entries.
pub fn top_k<'a, I>(counts: I, k: usize) -> Vec<PathCount>
where
    I: IntoIterator<Item = (&'a str, u64)>,
{
    if k == 0 {
        return Vec::new();
    }

    let mut heap: BinaryHeap<Reverse<Ranked<'a>>> = BinaryHeap::with_capacity(k + 1);
    for (path, count) in counts {
        let candidate = Ranked { count, path };
        if heap.len() < k {
            heap.push(Reverse(candidate));
            continue;
        }
        if heap.peek().is_some_and(|Reverse(worst)| candidate > *worst) {
            heap.pop();
            heap.push(Reverse(candidate));
        }
    }

    // Ascending order of Reverse is descending rank.
    heap.into_sorted_vec()
        .into_iter()
        .map(|Reverse(r)| PathCount {
            path: r.path.to_string(),
            count: r.count,
        })
        .collect()
}
