//! Per-scalar case folding and the offset-carrying scalar stream.

/// Fold a single scalar to its simple lowercase form.
///
/// Single-scalar-in, single-scalar-out: scalars whose lowercase mapping
/// expands to more than one scalar (e.g. `İ` U+0130) are kept unchanged, so
/// a folded stream always has the same scalar count as its input and byte
/// offsets computed over the original text stay valid.
pub fn fold_scalar(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// Fold every scalar of `text` with [`fold_scalar`].
pub fn fold(text: &str) -> String {
    text.chars().map(fold_scalar).collect()
}

/// One scalar of the input with its byte span in the original string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Scalar {
    /// The scalar, folded when the stream was built case-insensitively.
    pub ch: char,
    /// Byte offset of the scalar's first byte in the original text.
    pub start: usize,
    /// Byte offset one past the scalar's last byte in the original text.
    pub end: usize,
}

/// Iterate scalars with their original byte spans.
///
/// `start`/`end` always index the text as given, even when `fold` rewrites
/// the scalar to one with a different UTF-8 length (e.g. `K` U+212A → `k`).
/// No folded copy of the text is allocated.
pub(crate) fn scalars(text: &str, fold: bool) -> impl Iterator<Item = Scalar> + '_ {
    text.char_indices().map(move |(start, c)| Scalar {
        ch: if fold { fold_scalar(c) } else { c },
        start,
        end: start + c.len_utf8(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_scalar_simple_mappings() {
        assert_eq!(fold_scalar('A'), 'a');
        assert_eq!(fold_scalar('ü'), 'ü');
        assert_eq!(fold_scalar('Σ'), 'σ');
        assert_eq!(fold_scalar('東'), '東');
    }

    #[test]
    fn test_fold_scalar_keeps_multi_scalar_expansions() {
        // U+0130 LATIN CAPITAL LETTER I WITH DOT ABOVE lowercases to two
        // scalars; the per-scalar fold must leave it alone.
        assert_eq!(fold_scalar('\u{0130}'), '\u{0130}');
    }

    #[test]
    fn test_fold_scalar_kelvin_sign_changes_utf8_length() {
        // U+212A KELVIN SIGN (3 bytes) folds to 'k' (1 byte).
        assert_eq!(fold_scalar('\u{212A}'), 'k');
    }

    #[test]
    fn test_scalars_report_original_byte_spans() {
        let text = "a東\u{212A}";
        let stream: Vec<Scalar> = scalars(text, true).collect();
        assert_eq!(
            stream,
            vec![
                Scalar { ch: 'a', start: 0, end: 1 },
                Scalar { ch: '東', start: 1, end: 4 },
                Scalar { ch: 'k', start: 4, end: 7 },
            ]
        );
    }

    #[test]
    fn test_scalars_without_folding_are_identity() {
        let text = "AbÇ";
        let collected: String = scalars(text, false).map(|s| s.ch).collect();
        assert_eq!(collected, text);
    }

    #[test]
    fn test_fold_matches_per_scalar_lowercase() {
        assert_eq!(fold("Big Ben"), "big ben");
        assert_eq!(fold("МОСКВА"), "москва");
    }
}
