// crates/countrydb-core/src/traits.rs
use crate::model::{CountryRecord, NameTable};
use crate::text::normalize;

/// Name-based matching helpers for types that carry name variants.
///
/// Comparisons go through [`normalize`], so they ignore case and
/// surrounding whitespace. Implementors provide the variants via
/// [`NameMatch::name_variants`], and get:
/// - [`NameMatch::is_named`]: equality on normalized form
/// - [`NameMatch::names_contain`]: substring match on normalized form
///
/// # Examples
/// ```rust
/// use countrydb_core::traits::NameMatch;
///
/// struct Place(&'static [&'static str]);
/// impl NameMatch for Place {
///     fn name_variants(&self) -> impl Iterator<Item = &str> {
///         self.0.iter().copied()
///     }
/// }
///
/// let lk = Place(&["Sri Lanka", "Ceylon"]);
/// assert!(lk.is_named(" CEYLON "));
/// assert!(lk.names_contain("lank"));
/// assert!(!lk.names_contain(""));
/// ```
pub trait NameMatch {
    /// Every name variant used for matching.
    fn name_variants(&self) -> impl Iterator<Item = &str>;

    /// True if any variant equals `q` after normalization.
    fn is_named(&self, q: &str) -> bool {
        let q = normalize(q);
        !q.is_empty() && self.name_variants().any(|n| normalize(n) == q)
    }

    /// True if any normalized variant contains the normalized `q`.
    /// A blank `q` never matches.
    fn names_contain(&self, q: &str) -> bool {
        let q = normalize(q);
        !q.is_empty() && self.names_contain_normalized(&q)
    }

    /// Like [`NameMatch::names_contain`] for an already-normalized needle.
    #[inline]
    fn names_contain_normalized(&self, needle: &str) -> bool {
        self.name_variants().any(|n| normalize(n).contains(needle))
    }
}

impl NameMatch for NameTable {
    fn name_variants(&self) -> impl Iterator<Item = &str> {
        self.variants()
    }
}

impl NameMatch for CountryRecord {
    fn name_variants(&self) -> impl Iterator<Item = &str> {
        self.names.variants()
    }
}
