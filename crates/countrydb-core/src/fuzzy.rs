// crates/countrydb-core/src/fuzzy.rs

//! Approximate name matching over the [`NameIndex`].
//!
//! Terms are the normalized names plus the individual words of multi-word
//! names, so "lanka" reaches "Sri Lanka" through its token. Candidates come
//! from a Levenshtein transducer (with transpositions) over a
//! character-level DAWG; the index is built lazily on the first non-empty
//! query and kept for the lifetime of the matcher.

use crate::error::{CountryError, Result};
use crate::name_index::NameIndex;
use crate::text::normalize;
use once_cell::sync::OnceCell;
use std::cmp::Ordering;
use std::collections::HashMap;
use tracing::{debug, trace};

#[cfg(feature = "fuzzy")]
use liblevenshtein::dictionary::dynamic_dawg_char::DynamicDawgChar;
#[cfg(feature = "fuzzy")]
use liblevenshtein::transducer::{Candidate, Transducer};

/// Words shorter than this are not indexed on their own.
const MIN_TOKEN_CHARS: usize = 3;

/// The best fuzzy candidate for a query.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FuzzyHit {
    /// Position of the matched name in the [`NameIndex`].
    pub entry: usize,
    /// Edit distance between the normalized query and the matched term.
    pub distance: usize,
    /// `distance / max(len(query), len(term))`.
    pub ratio: f64,
    /// True when the hit came from a single word of a longer name.
    pub token: bool,
}

#[derive(Clone, Copy, Debug)]
struct Posting {
    entry: usize,
    token: bool,
}

struct FuzzyIndex {
    #[cfg(feature = "fuzzy")]
    dictionary: DynamicDawgChar<()>,
    /// term -> name index entries it came from, in index order
    postings: HashMap<String, Vec<Posting>>,
}

impl FuzzyIndex {
    fn build(names: &NameIndex) -> Result<Self> {
        if cfg!(not(feature = "fuzzy")) {
            return Err(CountryError::MissingCapability(
                "fuzzy matching requires the `fuzzy` feature",
            ));
        }

        let mut postings: HashMap<String, Vec<Posting>> = HashMap::new();
        for (entry, e) in names.entries().iter().enumerate() {
            let full = normalize(&e.name);
            if full.is_empty() {
                continue;
            }
            let words: Vec<&str> = full.split_whitespace().collect();
            if words.len() > 1 {
                for word in words {
                    if word.chars().count() >= MIN_TOKEN_CHARS {
                        postings
                            .entry(word.to_string())
                            .or_default()
                            .push(Posting { entry, token: true });
                    }
                }
            }
            postings
                .entry(full)
                .or_default()
                .push(Posting { entry, token: false });
        }

        debug!(
            names = names.len(),
            terms = postings.len(),
            "built fuzzy name index"
        );

        Ok(Self {
            #[cfg(feature = "fuzzy")]
            dictionary: DynamicDawgChar::from_terms(postings.keys()),
            postings,
        })
    }

    /// `(term, distance)` pairs within `max_distance` of `query`.
    #[cfg(feature = "fuzzy")]
    fn candidates(&self, query: &str, max_distance: usize) -> Vec<(String, usize)> {
        let transducer = Transducer::with_transposition(self.dictionary.clone());
        transducer
            .query_with_distance(query, max_distance)
            .map(|candidate: Candidate| (candidate.term, candidate.distance))
            .collect()
    }

    #[cfg(not(feature = "fuzzy"))]
    fn candidates(&self, _query: &str, _max_distance: usize) -> Vec<(String, usize)> {
        Vec::new()
    }
}

/// Lazily-built fuzzy matcher.
///
/// The index is built at most once, behind a `OnceCell`, so concurrent first
/// queries do not build it twice.
pub struct FuzzyMatcher {
    threshold: f64,
    index: OnceCell<FuzzyIndex>,
}

impl FuzzyMatcher {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            index: OnceCell::new(),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Whether the index has been built yet.
    pub fn is_built(&self) -> bool {
        self.index.get().is_some()
    }

    /// Best candidate for `query`, or `None` when nothing is close enough.
    ///
    /// The ratio only decides whether a candidate qualifies. Among those
    /// that do, the lowest edit distance wins, then name index order (first
    /// record encountered). A full name beats a word of the same entry.
    ///
    /// Blank queries return `Ok(None)` without building the index.
    pub fn best_match(&self, names: &NameIndex, query: &str) -> Result<Option<FuzzyHit>> {
        let q = normalize(query);
        if q.is_empty() {
            return Ok(None);
        }

        let index = self.index.get_or_try_init(|| FuzzyIndex::build(names))?;

        let q_len = q.chars().count();
        let mut best: Option<FuzzyHit> = None;
        for (term, distance) in index.candidates(&q, max_distance(q_len, self.threshold)) {
            let longest = q_len.max(term.chars().count());
            let ratio = distance as f64 / longest as f64;
            if ratio > self.threshold {
                continue;
            }
            let Some(postings) = index.postings.get(&term) else {
                continue;
            };
            for p in postings {
                let hit = FuzzyHit {
                    entry: p.entry,
                    distance,
                    ratio,
                    token: p.token,
                };
                if best.map_or(true, |b| rank(&hit, &b) == Ordering::Less) {
                    best = Some(hit);
                }
            }
        }

        if let Some(hit) = &best {
            trace!(query, entry = hit.entry, distance = hit.distance, "fuzzy hit");
        }
        Ok(best)
    }
}

impl std::fmt::Debug for FuzzyMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FuzzyMatcher")
            .field("threshold", &self.threshold)
            .field("built", &self.is_built())
            .finish()
    }
}

fn rank(a: &FuzzyHit, b: &FuzzyHit) -> Ordering {
    a.distance
        .cmp(&b.distance)
        .then(a.entry.cmp(&b.entry))
        .then(a.token.cmp(&b.token))
}

/// Largest edit distance that can still satisfy `ratio <= threshold`.
///
/// A term is at least `distance - q_len` characters longer than the query,
/// so `d / (q_len + d) <= t` bounds `d` by `t * q_len / (1 - t)`.
fn max_distance(q_len: usize, threshold: f64) -> usize {
    if threshold >= 1.0 {
        return q_len;
    }
    // epsilon keeps exact boundaries such as 0.3 * 7 / 0.7 from rounding down
    ((threshold * q_len as f64) / (1.0 - threshold) + 1e-9).floor() as usize
}
