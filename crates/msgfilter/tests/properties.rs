//! Behavioural properties of the banned-word filter.

use msgfilter::{FilterError, MessageFilter, NormalizationPolicy, normalize};

#[test]
fn normalization_is_idempotent() {
    let inputs = [
        "",
        "Hello, World!",
        "b-a-d",
        "\u{0430}bad",
        "\u{FF22}\u{FF21}\u{FF24}",
        "mixed \u{0421}\u{0435}\u{0442} and \u{03BF}\u{03BA}",
        "\u{1100}.\u{1161}",
        "tab\tand\nnewline",
    ];
    for input in inputs {
        let once = normalize(input);
        assert_eq!(normalize(&once), once, "{input:?}");
    }
}

#[test]
fn case_spacing_and_punctuation_variants_are_equal() {
    let bad = normalize("bad");
    for variant in ["BAD", "b-a-d", "b a d", "B . A . D"] {
        assert_eq!(normalize(variant), bad, "{variant:?}");
    }
}

#[test]
fn cyrillic_homoglyph_is_equal_to_latin() {
    assert_eq!(normalize("\u{0430}bad"), normalize("abad"));
}

#[test]
fn ban_check_unban_cycle() {
    let mut filter = MessageFilter::new();
    filter.ban_word("bad").unwrap();
    assert!(filter.check_message("this is bad"));
    assert!(!filter.check_message("this is good"));

    filter.unban_word("bad").unwrap();
    assert!(!filter.check_message("this is bad"));
}

#[test]
fn noise_only_words_fail_and_leave_set_unchanged() {
    let mut filter = MessageFilter::new();
    filter.ban_word("evil").unwrap();
    for word in ["", "   !!!"] {
        assert!(matches!(
            filter.ban_word(word),
            Err(FilterError::InvalidWord { .. })
        ));
    }
    assert_eq!(filter.banned_words(), ["evil"]);
}

#[test]
fn duplicate_spellings_collapse() {
    let mut filter = MessageFilter::new();
    filter.ban_word("Bad").unwrap();
    filter.ban_word("BAD").unwrap();
    filter.ban_word("evil").unwrap();
    assert_eq!(filter.banned_words(), ["bad", "evil"]);
}

#[test]
fn substring_not_whole_word() {
    let mut filter = MessageFilter::new();
    filter.ban_word("ad").unwrap();
    assert!(filter.check_message("badge"));
}

#[test]
fn evasion_attempts_are_caught() {
    let mut filter = MessageFilter::new();
    filter.ban_word("spam").unwrap();
    let attempts = [
        "S P A M",
        "s.p.a.m",
        "s_p-a*m",
        "\u{0455}\u{0440}\u{0430}m",        // Cyrillic ѕра + Latin m
        "\u{FF33}\u{FF30}\u{FF21}\u{FF2D}", // fullwidth ＳＰＡＭ
        "s\u{200B}p\u{200B}a\u{200B}m",     // zero-width spaces
        "buy cheap sp am now",
    ];
    for attempt in attempts {
        assert!(filter.check_message(attempt), "{attempt:?}");
    }
    assert!(!filter.check_message("sample"));
}

#[test]
fn leetspeak_needs_strict_policy() {
    let mut lenient = MessageFilter::new();
    lenient.ban_word("bad").unwrap();
    assert!(!lenient.check_message("b4d"));

    let mut strict = MessageFilter::with_policy(NormalizationPolicy::strict());
    strict.ban_word("bad").unwrap();
    assert!(strict.check_message("b4d"));
    assert!(strict.check_message("b@d"));
}

#[test]
fn many_words_rehydrate_in_one_call() {
    let words: Vec<String> = (0..1_000).map(|i| format!("word{i}")).collect();
    let mut filter = MessageFilter::new();
    assert_eq!(filter.ban_words(&words).unwrap(), 1_000);
    assert_eq!(filter.banned_words().len(), 1_000);
    assert!(filter.check_message("this has WORD-999 in it"));
    assert!(!filter.check_message("this has none"));
}
