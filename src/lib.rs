//! # keyscan
//!
//! Dynamic multi-pattern keyword extraction and replacement over Unicode text.
//!
//! A [`KeywordMatcher`] holds `keyword → clean name` associations and finds
//! every occurrence of every keyword in one linear pass over the input,
//! reporting byte-accurate spans into the original text. Keywords can be
//! added and removed at any time; the matching automaton is rebuilt lazily
//! on the next query. Overlap handling is chosen per call via
//! [`MatchStrategy`], [`KeywordMatcher::replace_keywords`] rewrites every
//! hit in a single pass, and [`KeywordMatcher::fuzzy_search`] provides
//! approximate lookup over the registered keywords.
//!
//! ```
//! use keyscan::{KeywordMatcher, MatchStrategy};
//!
//! let mut matcher = KeywordMatcher::default();
//! matcher.add_keyword_with_clean_name("Big Apple", "New York")?;
//! matcher.add_keyword_with_clean_name("Apple", "Just Apple")?;
//!
//! let spans = matcher.extract_spans("I ❤ the big apple");
//! assert_eq!(spans.len(), 2); // "Big Apple" and the nested "Apple"
//!
//! let longest = matcher.extract_keywords_with_strategy(
//!     "I ❤ the big apple",
//!     MatchStrategy::Longest,
//! );
//! assert_eq!(longest, vec!["New York"]);
//! # Ok::<(), keyscan::Error>(())
//! ```

pub mod error;
pub mod fold;
pub mod matcher;
pub mod similarity;

mod automaton;
mod trie;

pub use error::{Error, Result};
pub use matcher::{KeywordMatch, KeywordMatcher, MatchStrategy, DEFAULT_FUZZY_THRESHOLD};
