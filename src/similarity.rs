//! Sequence-matching similarity ratio for fuzzy deduplication.
//!
//! Implements the classic Ratcliff/Obershelp measure: recursively find the
//! longest matching block of two char sequences, then match the pieces to
//! its left and right, and report `2 * matched / (len(a) + len(b))`. The
//! result is in `[0, 1]`, deterministic, and symmetric for equal-length
//! inputs.
//!
//! For long inputs, characters that are very frequent in the second string
//! (more than 1% of it, once it exceeds 200 chars) are ignored when seeding
//! matches; without this, whitespace dominates the match search on real
//! paragraphs and the measure degenerates.

use std::collections::HashMap;

/// Threshold above which popular-character suppression kicks in.
const POPULARITY_LEN: usize = 200;

/// Similarity ratio of two strings in `[0, 1]`.
///
/// Two empty strings are identical by convention (ratio 1.0).
#[must_use]
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    let matched = Matcher::new(&b).total_matched(&a);
    2.0 * matched as f64 / total as f64
}

struct Matcher<'s> {
    b: &'s [char],
    /// Positions of each (non-popular) char of `b`.
    b2j: HashMap<char, Vec<usize>>,
}

impl<'s> Matcher<'s> {
    fn new(b: &'s [char]) -> Self {
        let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
        for (j, &ch) in b.iter().enumerate() {
            b2j.entry(ch).or_default().push(j);
        }
        if b.len() >= POPULARITY_LEN {
            let limit = b.len() / 100 + 1;
            b2j.retain(|_, positions| positions.len() <= limit);
        }
        Self { b, b2j }
    }

    /// Total length of all matching blocks between `a` and `self.b`.
    fn total_matched(&self, a: &[char]) -> usize {
        let mut total = 0;
        let mut pending = vec![(0, a.len(), 0, self.b.len())];
        while let Some((alo, ahi, blo, bhi)) = pending.pop() {
            let (i, j, size) = self.longest_match(a, alo, ahi, blo, bhi);
            if size == 0 {
                continue;
            }
            total += size;
            if alo < i && blo < j {
                pending.push((alo, i, blo, j));
            }
            if i + size < ahi && j + size < bhi {
                pending.push((i + size, ahi, j + size, bhi));
            }
        }
        total
    }

    /// Longest block where `a[i..i+size] == b[j..j+size]` within the given
    /// windows. Earliest block wins among equals.
    fn longest_match(
        &self,
        a: &[char],
        alo: usize,
        ahi: usize,
        blo: usize,
        bhi: usize,
    ) -> (usize, usize, usize) {
        let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0);
        // j2len[j] = length of the longest match ending at a[i], b[j]
        let mut j2len: HashMap<usize, usize> = HashMap::new();

        for (i, &ch) in a.iter().enumerate().take(ahi).skip(alo) {
            let mut new_j2len: HashMap<usize, usize> = HashMap::new();
            if let Some(positions) = self.b2j.get(&ch) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let k = j
                        .checked_sub(1)
                        .and_then(|prev| j2len.get(&prev))
                        .copied()
                        .unwrap_or(0)
                        + 1;
                    new_j2len.insert(j, k);
                    if k > best_size {
                        best_i = i + 1 - k;
                        best_j = j + 1 - k;
                        best_size = k;
                    }
                }
            }
            j2len = new_j2len;
        }

        // Extend over popular chars excluded from b2j: they still count as
        // matches when they flank the found block.
        while best_i > alo && best_j > blo && a[best_i - 1] == self.b[best_j - 1] {
            best_i -= 1;
            best_j -= 1;
            best_size += 1;
        }
        while best_i + best_size < ahi
            && best_j + best_size < bhi
            && a[best_i + best_size] == self.b[best_j + best_size]
        {
            best_size += 1;
        }

        (best_i, best_j, best_size)
    }
}
