// Full case folding
//
// `char::to_lowercase` is the simple per-char mapping. Full case folding
// differs from it for a small set of lowercase characters: sharp s and the
// ligatures expand (`ß` -> `ss`), final and symbol variants of Greek letters
// fold to the ordinary letter (`ς` -> `σ`), and Cherokee folds to its
// uppercase block. Applying [`fold`] to the output of `to_lowercase` gives
// the full folding of the original character.

/// Lowercase characters whose full case folding is not themselves, sorted.
/// Cherokee is handled by range in [`fold`].
const FULL_FOLDING: &[(char, &str)] = &[
    ('\u{00B5}', "\u{03BC}"),
    ('\u{00DF}', "\u{0073}\u{0073}"),
    ('\u{0149}', "\u{02BC}\u{006E}"),
    ('\u{017F}', "\u{0073}"),
    ('\u{01F0}', "\u{006A}\u{030C}"),
    ('\u{0345}', "\u{03B9}"),
    ('\u{0390}', "\u{03B9}\u{0308}\u{0301}"),
    ('\u{03B0}', "\u{03C5}\u{0308}\u{0301}"),
    ('\u{03C2}', "\u{03C3}"),
    ('\u{03D0}', "\u{03B2}"),
    ('\u{03D1}', "\u{03B8}"),
    ('\u{03D5}', "\u{03C6}"),
    ('\u{03D6}', "\u{03C0}"),
    ('\u{03F0}', "\u{03BA}"),
    ('\u{03F1}', "\u{03C1}"),
    ('\u{03F5}', "\u{03B5}"),
    ('\u{0587}', "\u{0565}\u{0582}"),
    ('\u{1C80}', "\u{0432}"),
    ('\u{1C81}', "\u{0434}"),
    ('\u{1C82}', "\u{043E}"),
    ('\u{1C83}', "\u{0441}"),
    ('\u{1C84}', "\u{0442}"),
    ('\u{1C85}', "\u{0442}"),
    ('\u{1C86}', "\u{044A}"),
    ('\u{1C87}', "\u{0463}"),
    ('\u{1C88}', "\u{A64B}"),
    ('\u{1E96}', "\u{0068}\u{0331}"),
    ('\u{1E97}', "\u{0074}\u{0308}"),
    ('\u{1E98}', "\u{0077}\u{030A}"),
    ('\u{1E99}', "\u{0079}\u{030A}"),
    ('\u{1E9A}', "\u{0061}\u{02BE}"),
    ('\u{1E9B}', "\u{1E61}"),
    ('\u{1F50}', "\u{03C5}\u{0313}"),
    ('\u{1F52}', "\u{03C5}\u{0313}\u{0300}"),
    ('\u{1F54}', "\u{03C5}\u{0313}\u{0301}"),
    ('\u{1F56}', "\u{03C5}\u{0313}\u{0342}"),
    ('\u{1F80}', "\u{1F00}\u{03B9}"),
    ('\u{1F81}', "\u{1F01}\u{03B9}"),
    ('\u{1F82}', "\u{1F02}\u{03B9}"),
    ('\u{1F83}', "\u{1F03}\u{03B9}"),
    ('\u{1F84}', "\u{1F04}\u{03B9}"),
    ('\u{1F85}', "\u{1F05}\u{03B9}"),
    ('\u{1F86}', "\u{1F06}\u{03B9}"),
    ('\u{1F87}', "\u{1F07}\u{03B9}"),
    ('\u{1F90}', "\u{1F20}\u{03B9}"),
    ('\u{1F91}', "\u{1F21}\u{03B9}"),
    ('\u{1F92}', "\u{1F22}\u{03B9}"),
    ('\u{1F93}', "\u{1F23}\u{03B9}"),
    ('\u{1F94}', "\u{1F24}\u{03B9}"),
    ('\u{1F95}', "\u{1F25}\u{03B9}"),
    ('\u{1F96}', "\u{1F26}\u{03B9}"),
    ('\u{1F97}', "\u{1F27}\u{03B9}"),
    ('\u{1FA0}', "\u{1F60}\u{03B9}"),
    ('\u{1FA1}', "\u{1F61}\u{03B9}"),
    ('\u{1FA2}', "\u{1F62}\u{03B9}"),
    ('\u{1FA3}', "\u{1F63}\u{03B9}"),
    ('\u{1FA4}', "\u{1F64}\u{03B9}"),
    ('\u{1FA5}', "\u{1F65}\u{03B9}"),
    ('\u{1FA6}', "\u{1F66}\u{03B9}"),
    ('\u{1FA7}', "\u{1F67}\u{03B9}"),
    ('\u{1FB2}', "\u{1F70}\u{03B9}"),
    ('\u{1FB3}', "\u{03B1}\u{03B9}"),
    ('\u{1FB4}', "\u{03AC}\u{03B9}"),
    ('\u{1FB6}', "\u{03B1}\u{0342}"),
    ('\u{1FB7}', "\u{03B1}\u{0342}\u{03B9}"),
    ('\u{1FBE}', "\u{03B9}"),
    ('\u{1FC2}', "\u{1F74}\u{03B9}"),
    ('\u{1FC3}', "\u{03B7}\u{03B9}"),
    ('\u{1FC4}', "\u{03AE}\u{03B9}"),
    ('\u{1FC6}', "\u{03B7}\u{0342}"),
    ('\u{1FC7}', "\u{03B7}\u{0342}\u{03B9}"),
    ('\u{1FD2}', "\u{03B9}\u{0308}\u{0300}"),
    ('\u{1FD3}', "\u{03B9}\u{0308}\u{0301}"),
    ('\u{1FD6}', "\u{03B9}\u{0342}"),
    ('\u{1FD7}', "\u{03B9}\u{0308}\u{0342}"),
    ('\u{1FE2}', "\u{03C5}\u{0308}\u{0300}"),
    ('\u{1FE3}', "\u{03C5}\u{0308}\u{0301}"),
    ('\u{1FE4}', "\u{03C1}\u{0313}"),
    ('\u{1FE6}', "\u{03C5}\u{0342}"),
    ('\u{1FE7}', "\u{03C5}\u{0308}\u{0342}"),
    ('\u{1FF2}', "\u{1F7C}\u{03B9}"),
    ('\u{1FF3}', "\u{03C9}\u{03B9}"),
    ('\u{1FF4}', "\u{03CE}\u{03B9}"),
    ('\u{1FF6}', "\u{03C9}\u{0342}"),
    ('\u{1FF7}', "\u{03C9}\u{0342}\u{03B9}"),
    ('\u{FB00}', "\u{0066}\u{0066}"),
    ('\u{FB01}', "\u{0066}\u{0069}"),
    ('\u{FB02}', "\u{0066}\u{006C}"),
    ('\u{FB03}', "\u{0066}\u{0066}\u{0069}"),
    ('\u{FB04}', "\u{0066}\u{0066}\u{006C}"),
    ('\u{FB05}', "\u{0073}\u{0074}"),
    ('\u{FB06}', "\u{0073}\u{0074}"),
    ('\u{FB13}', "\u{0574}\u{0576}"),
    ('\u{FB14}', "\u{0574}\u{0565}"),
    ('\u{FB15}', "\u{0574}\u{056B}"),
    ('\u{FB16}', "\u{057E}\u{0576}"),
    ('\u{FB17}', "\u{0574}\u{056D}"),
];

/// Cherokee small letters U+13F8..=U+13FD fold to U+13F0..=U+13F5.
const CHEROKEE_SMALL_TAIL: (u32, u32, u32) = (0x13F8, 0x13FD, 0x13F0);

/// Cherokee small letters U+AB70..=U+ABBF fold to U+13A0..=U+13EF.
const CHEROKEE_SMALL: (u32, u32, u32) = (0xAB70, 0xABBF, 0x13A0);

/// The case folding of an already lowercased character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Folded {
    /// The character folds to itself or to one other character.
    Char(char),
    /// The character expands to several characters.
    Str(&'static str),
}

impl IntoIterator for Folded {
    type Item = char;
    type IntoIter = FoldedChars;

    fn into_iter(self) -> FoldedChars {
        match self {
            Folded::Char(c) => FoldedChars::One(Some(c)),
            Folded::Str(s) => FoldedChars::Many(s.chars()),
        }
    }
}

/// Iterator over the characters of a [`Folded`].
#[derive(Debug, Clone)]
pub enum FoldedChars {
    One(Option<char>),
    Many(std::str::Chars<'static>),
}

impl Iterator for FoldedChars {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        match self {
            FoldedChars::One(c) => c.take(),
            FoldedChars::Many(chars) => chars.next(),
        }
    }
}

/// Full case folding of a character that `to_lowercase` already produced.
pub fn fold(c: char) -> Folded {
    let cp = c as u32;
    for (first, last, target) in [CHEROKEE_SMALL_TAIL, CHEROKEE_SMALL] {
        if (first..=last).contains(&cp) {
            return char::from_u32(target + (cp - first)).map_or(Folded::Char(c), Folded::Char);
        }
    }
    match FULL_FOLDING.binary_search_by_key(&c, |&(from, _)| from) {
        Ok(i) => {
            let to = FULL_FOLDING[i].1;
            let mut chars = to.chars();
            match (chars.next(), chars.next()) {
                (Some(single), None) => Folded::Char(single),
                _ => Folded::Str(to),
            }
        }
        Err(_) => Folded::Char(c),
    }
}

/// Lowercase then fully case-fold a character.
pub fn case_fold(c: char) -> impl Iterator<Item = char> {
    c.to_lowercase().flat_map(fold)
}

/// Fully case-fold a string.
pub fn case_fold_str(s: &str) -> String {
    s.chars().flat_map(case_fold).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted() {
        for pair in FULL_FOLDING.windows(2) {
            assert!(pair[0].0 < pair[1].0, "{:?} not before {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn sharp_s_expands() {
        assert_eq!(case_fold_str("Stra\u{00DF}e"), "strasse");
        assert_eq!(case_fold_str("STRASSE"), "strasse");
        // Capital sharp s lowercases to ß first.
        assert_eq!(case_fold_str("\u{1E9E}"), "ss");
    }

    #[test]
    fn final_sigma_folds_to_sigma() {
        // ΚΑΚΟΣ and κακος fold to the same string.
        let upper = case_fold_str("\u{039A}\u{0391}\u{039A}\u{039F}\u{03A3}");
        let lower = case_fold_str("\u{03BA}\u{03B1}\u{03BA}\u{03BF}\u{03C2}");
        assert_eq!(upper, lower);
        assert_eq!(fold('\u{03C2}'), Folded::Char('\u{03C3}'));
    }

    #[test]
    fn ligatures_and_variants() {
        assert_eq!(case_fold_str("\u{FB01}ne"), "fine");
        assert_eq!(case_fold_str("\u{017F}"), "s");
        assert_eq!(case_fold_str("\u{00B5}"), "\u{03BC}");
    }

    #[test]
    fn cherokee_folds_to_upper_block() {
        assert_eq!(case_fold_str("\u{AB70}"), "\u{13A0}");
        assert_eq!(case_fold_str("\u{13A0}"), "\u{13A0}");
        assert_eq!(case_fold_str("\u{13F8}"), "\u{13F0}");
    }

    #[test]
    fn ordinary_letters_are_lowercased() {
        assert_eq!(case_fold_str("Hello \u{0416}"), "hello \u{0436}");
    }

    #[test]
    fn folding_is_idempotent() {
        for s in ["Stra\u{00DF}e", "\u{1F80}\u{0390}", "\u{0149}", "\u{AB70}\u{13F8}"] {
            let once = case_fold_str(s);
            assert_eq!(case_fold_str(&once), once, "{s:?}");
        }
    }
}
