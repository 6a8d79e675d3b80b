//! The keyword matcher: mutation, extraction, replacement, fuzzy lookup.

use std::fmt;
use std::str::FromStr;

use crate::automaton::{self, RawHit};
use crate::error::{Error, Result};
use crate::fold;
use crate::similarity;
use crate::trie::Trie;

/// How overlapping hits are reported by an extraction call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MatchStrategy {
    /// Keep every hit, ordered by start byte then end byte. Overlapping and
    /// nested hits are all reported.
    #[default]
    All,
    /// Greedy leftmost-longest selection: of the hits starting at a given
    /// position only the longest survives, and surviving hits never overlap.
    Longest,
}

impl MatchStrategy {
    fn as_str(self) -> &'static str {
        match self {
            MatchStrategy::All => "all",
            MatchStrategy::Longest => "longest",
        }
    }
}

impl fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchStrategy {
    type Err = Error;

    /// Parse `"all"` / `"longest"`, ASCII case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("all") {
            Ok(MatchStrategy::All)
        } else if s.eq_ignore_ascii_case("longest") {
            Ok(MatchStrategy::Longest)
        } else {
            Err(Error::UnknownStrategy(s.to_string()))
        }
    }
}

/// Customary threshold for [`KeywordMatcher::fuzzy_search`]: strict enough
/// to reject unrelated words, loose enough to admit one-typo variants of
/// medium-length keywords.
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 0.8;

/// A reported keyword occurrence.
///
/// `start`/`end` are byte offsets into the UTF-8 encoding of the scanned
/// text, so `&text[m.start..m.end]` is always a valid slice equal (under the
/// matcher's folding) to one of the registered keywords.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeywordMatch {
    /// Clean name registered for the matched keyword.
    pub value: String,
    /// Byte offset of the first byte of the occurrence.
    pub start: usize,
    /// Byte offset one past the last byte of the occurrence.
    pub end: usize,
}

/// A mutable set of `keyword → clean name` associations with linear-time
/// multi-pattern extraction and replacement.
///
/// Case sensitivity is fixed at construction. Matching is substring-based:
/// `"programming"` matches inside `"reprogramming"`; no token boundaries are
/// consulted.
///
/// Extraction and replacement take `&mut self`: the first query after a
/// mutation rebuilds the internal automaton in place, in time linear in the
/// total scalar length of the registered keywords.
///
/// ```
/// use keyscan::KeywordMatcher;
///
/// let mut matcher = KeywordMatcher::default();
/// matcher.add_keyword_with_clean_name("NYC", "New York")?;
/// matcher.add_keyword("Chicago")?;
///
/// let found = matcher.extract_keywords("flights from nyc to chicago");
/// assert_eq!(found, vec!["New York", "Chicago"]);
/// # Ok::<(), keyscan::Error>(())
/// ```
pub struct KeywordMatcher {
    trie: Trie,
    case_sensitive: bool,
    links_built: bool,
}

impl Default for KeywordMatcher {
    /// Case-insensitive matcher with no keywords.
    fn default() -> Self {
        Self::new(false)
    }
}

impl fmt::Debug for KeywordMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeywordMatcher")
            .field("keywords", &self.trie.len())
            .field("case_sensitive", &self.case_sensitive)
            .finish()
    }
}

impl KeywordMatcher {
    /// Create an empty matcher. With `case_sensitive = false`, keywords and
    /// scanned text are both folded per-scalar before comparison; reported
    /// spans always index the original text.
    pub fn new(case_sensitive: bool) -> Self {
        Self {
            trie: Trie::new(),
            case_sensitive,
            links_built: true,
        }
    }

    /// Whether this matcher compares case-sensitively.
    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Number of registered keywords.
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    /// Register `keyword`, reporting the keyword itself on a match.
    ///
    /// Fails with [`Error::EmptyKeyword`] if `keyword` has no scalars.
    /// Re-adding an existing keyword overwrites its clean name.
    pub fn add_keyword(&mut self, keyword: impl AsRef<str>) -> Result<()> {
        let keyword = keyword.as_ref();
        self.insert(keyword, keyword.to_string())
    }

    /// Register `keyword`, reporting `clean_name` on a match.
    ///
    /// Distinct keywords may share a clean name.
    pub fn add_keyword_with_clean_name(
        &mut self,
        keyword: impl AsRef<str>,
        clean_name: impl Into<String>,
    ) -> Result<()> {
        self.insert(keyword.as_ref(), clean_name.into())
    }

    /// Register every keyword from an iterator, keyword-as-clean-name.
    ///
    /// Stops at the first empty keyword; keywords added before the failure
    /// stay registered.
    pub fn add_keywords<I, S>(&mut self, keywords: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for keyword in keywords {
            self.add_keyword(keyword)?;
        }
        Ok(())
    }

    /// Register `(keyword, clean_name)` pairs from an iterator.
    pub fn add_keywords_with_clean_names<I, K, V>(&mut self, entries: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (keyword, clean_name) in entries {
            self.add_keyword_with_clean_name(keyword, clean_name)?;
        }
        Ok(())
    }

    /// Unregister `keyword`. Returns whether it was present. Other keywords
    /// sharing a prefix or suffix path are unaffected.
    pub fn remove_keyword(&mut self, keyword: impl AsRef<str>) -> bool {
        let folded = self.fold_keyword(keyword.as_ref());
        let removed = self.trie.remove(&folded);
        if removed {
            self.links_built = false;
        }
        removed
    }

    /// Unregister every keyword from an iterator; absent ones are skipped.
    /// Returns how many were actually removed.
    pub fn remove_keywords<I, S>(&mut self, keywords: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        keywords
            .into_iter()
            .filter(|k| self.remove_keyword(k.as_ref()))
            .count()
    }

    /// Enumerate `(keyword, clean_name)` pairs in unspecified order.
    /// Keywords come back exactly as added, unfolded.
    pub fn keywords(&self) -> impl Iterator<Item = (&str, &str)> {
        self.trie.iter()
    }

    /// Extract clean names with [`MatchStrategy::All`].
    pub fn extract_keywords(&mut self, text: &str) -> Vec<String> {
        self.extract_keywords_with_strategy(text, MatchStrategy::All)
    }

    /// Extract the clean names of every selected hit.
    pub fn extract_keywords_with_strategy(
        &mut self,
        text: &str,
        strategy: MatchStrategy,
    ) -> Vec<String> {
        self.selected_hits(text, strategy)
            .into_iter()
            .map(|h| self.clean_name(h.node).to_string())
            .collect()
    }

    /// Extract hits with byte spans, using [`MatchStrategy::All`].
    pub fn extract_spans(&mut self, text: &str) -> Vec<KeywordMatch> {
        self.extract_spans_with_strategy(text, MatchStrategy::All)
    }

    /// Extract selected hits with their byte spans in `text`.
    pub fn extract_spans_with_strategy(
        &mut self,
        text: &str,
        strategy: MatchStrategy,
    ) -> Vec<KeywordMatch> {
        self.selected_hits(text, strategy)
            .into_iter()
            .map(|h| KeywordMatch {
                value: self.clean_name(h.node).to_string(),
                start: h.start,
                end: h.end,
            })
            .collect()
    }

    /// Rewrite `text`, substituting each keyword occurrence with its clean
    /// name under [`MatchStrategy::Longest`] selection.
    ///
    /// ```
    /// use keyscan::KeywordMatcher;
    ///
    /// let mut matcher = KeywordMatcher::default();
    /// matcher.add_keyword_with_clean_name("python", "Python")?;
    /// assert_eq!(matcher.replace_keywords("I love python"), "I love Python");
    /// # Ok::<(), keyscan::Error>(())
    /// ```
    pub fn replace_keywords(&mut self, text: &str) -> String {
        let hits = self.selected_hits(text, MatchStrategy::Longest);
        let mut out = String::with_capacity(text.len());
        let mut tail = 0;
        for h in &hits {
            out.push_str(&text[tail..h.start]);
            out.push_str(self.clean_name(h.node));
            tail = h.end;
        }
        out.push_str(&text[tail..]);
        out
    }

    /// Score every registered keyword against `query` with normalized
    /// Levenshtein similarity (on scalars, under the matcher's folding) and
    /// return `(keyword, similarity)` pairs at or above `threshold`, best
    /// first, ties broken by keyword. [`DEFAULT_FUZZY_THRESHOLD`] is a
    /// reasonable starting point for `threshold`.
    ///
    /// Fails with [`Error::ThresholdOutOfRange`] unless
    /// `0.0 <= threshold <= 1.0`. Linear in the number of keywords; this is
    /// a lookup aid, not the matching hot path.
    pub fn fuzzy_search(&self, query: &str, threshold: f64) -> Result<Vec<(String, f64)>> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(Error::ThresholdOutOfRange(threshold));
        }

        let query = self.fold_string(query);
        let mut scored: Vec<(String, f64)> = self
            .trie
            .iter()
            .filter_map(|(keyword, _)| {
                let candidate = self.fold_string(keyword);
                let sim = similarity::levenshtein_similarity(&query, &candidate);
                (sim >= threshold).then(|| (keyword.to_string(), sim))
            })
            .collect();

        scored.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        Ok(scored)
    }

    fn insert(&mut self, keyword: &str, clean_name: String) -> Result<()> {
        let folded = self.fold_keyword(keyword);
        if folded.is_empty() {
            return Err(Error::EmptyKeyword);
        }
        self.trie.insert(&folded, keyword, clean_name);
        self.links_built = false;
        Ok(())
    }

    fn fold_keyword(&self, keyword: &str) -> Vec<char> {
        if self.case_sensitive {
            keyword.chars().collect()
        } else {
            keyword.chars().map(fold::fold_scalar).collect()
        }
    }

    fn fold_string(&self, s: &str) -> String {
        if self.case_sensitive {
            s.to_string()
        } else {
            fold::fold(s)
        }
    }

    fn ensure_built(&mut self) {
        if !self.links_built {
            automaton::build_links(&mut self.trie);
            self.links_built = true;
        }
    }

    fn selected_hits(&mut self, text: &str, strategy: MatchStrategy) -> Vec<RawHit> {
        self.ensure_built();
        let hits = automaton::scan(&self.trie, text, !self.case_sensitive);
        match strategy {
            MatchStrategy::All => order_all(hits),
            MatchStrategy::Longest => longest_cover(hits),
        }
    }

    fn clean_name(&self, node: usize) -> &str {
        self.trie.node(node).clean_name.as_deref().unwrap_or("")
    }
}

/// Order hits by `(start, end)`. The sort is stable, so hits with identical
/// spans keep their emission order.
fn order_all(mut hits: Vec<RawHit>) -> Vec<RawHit> {
    hits.sort_by_key(|h| (h.start, h.end));
    hits
}

/// Greedy leftmost-longest non-overlapping cover: keep the longest hit per
/// start position, then sweep left to right accepting hits that begin at or
/// after the previous accepted end.
fn longest_cover(mut hits: Vec<RawHit>) -> Vec<RawHit> {
    hits.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));

    let mut out: Vec<RawHit> = Vec::new();
    let mut prev_start = usize::MAX;
    let mut last_end = 0;
    for h in hits {
        if h.start == prev_start {
            continue;
        }
        prev_start = h.start;
        if h.start >= last_end {
            last_end = h.end;
            out.push(h);
        }
    }
    out
}
