#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let s = String::from_utf8_lossy(data);

    let mut matcher = keyscan::KeywordMatcher::default();
    matcher
        .add_keywords_with_clean_names([
            ("François", "francois"),
            ("Müller", "muller"),
            ("北京", "beijing"),
            ("hello", "hello"),
            ("🎉", "party"),
        ])
        .expect("fuzz keywords are non-empty");

    let spans = matcher.extract_spans(&s);
    let mut last = (0usize, 0usize);
    for m in &spans {
        debug_assert!(m.start < m.end);
        debug_assert!(m.end <= s.len());
        debug_assert!(s.is_char_boundary(m.start));
        debug_assert!(s.is_char_boundary(m.end));
        debug_assert!((m.start, m.end) >= last);
        last = (m.start, m.end);
    }

    let longest = matcher.extract_spans_with_strategy(&s, keyscan::MatchStrategy::Longest);
    let mut last_end = 0usize;
    for m in &longest {
        debug_assert!(last_end <= m.start);
        debug_assert!(spans.contains(m));
        last_end = m.end;
    }
});
