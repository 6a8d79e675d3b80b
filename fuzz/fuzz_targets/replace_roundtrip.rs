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

    let replaced = matcher.replace_keywords(&s);

    // Replacement must equal a manual splice of the longest-strategy spans.
    let spans = matcher.extract_spans_with_strategy(&s, keyscan::MatchStrategy::Longest);
    let mut expected = String::new();
    let mut tail = 0usize;
    for m in &spans {
        expected.push_str(&s[tail..m.start]);
        expected.push_str(&m.value);
        tail = m.end;
    }
    expected.push_str(&s[tail..]);

    debug_assert_eq!(replaced, expected);
});
