// Homoglyph and leetspeak folding tables
//
// Every table is a `const` slice sorted by source code point and searched
// with a binary search, so there is no initialization step and nothing to
// synchronize. Sources are lowercase: case folding always runs first.

use crate::policy::FoldingMode;

/// Cyrillic and Greek letters that look like a Latin letter.
///
/// Lowercase forms of capital lookalikes are included (`В` folds to `в`
/// before lookup, so `в` maps to `b`).
const VISUAL: &[(char, char)] = &[
    ('\u{03B1}', 'a'), // α
    ('\u{03B2}', 'b'), // β
    ('\u{03B5}', 'e'), // ε
    ('\u{03B7}', 'n'), // η
    ('\u{03B9}', 'i'), // ι
    ('\u{03BA}', 'k'), // κ
    ('\u{03BD}', 'v'), // ν
    ('\u{03BF}', 'o'), // ο
    ('\u{03C1}', 'p'), // ρ
    ('\u{03C4}', 't'), // τ
    ('\u{03C5}', 'u'), // υ
    ('\u{03C7}', 'x'), // χ
    ('\u{03F2}', 'c'), // ϲ lunate sigma
    ('\u{03F3}', 'j'), // ϳ
    ('\u{0430}', 'a'), // а
    ('\u{0432}', 'b'), // в (В)
    ('\u{0435}', 'e'), // е
    ('\u{043A}', 'k'), // к
    ('\u{043C}', 'm'), // м (М)
    ('\u{043D}', 'h'), // н (Н)
    ('\u{043E}', 'o'), // о
    ('\u{0440}', 'p'), // р
    ('\u{0441}', 'c'), // с
    ('\u{0442}', 't'), // т (Т)
    ('\u{0443}', 'y'), // у
    ('\u{0445}', 'x'), // х
    ('\u{044C}', 'b'), // ь
    ('\u{0451}', 'e'), // ё
    ('\u{0455}', 's'), // ѕ
    ('\u{0456}', 'i'), // і
    ('\u{0458}', 'j'), // ј
    ('\u{04BB}', 'h'), // һ
    ('\u{04CF}', 'l'), // ӏ palochka
    ('\u{0501}', 'd'), // ԁ
    ('\u{051B}', 'q'), // ԛ
    ('\u{051D}', 'w'), // ԝ
];

/// Cyrillic letters transliterated by sound rather than by shape.
///
/// `с` becomes `s` (not `c`), `в` becomes `v`, `н` becomes `n`, `р` becomes
/// `r`. Letters that also look like their Latin counterpart (`а`, `о`, `х`)
/// map to that counterpart.
const PHONETIC: &[(char, char)] = &[
    ('\u{0430}', 'a'), // а
    ('\u{0431}', 'b'), // б
    ('\u{0432}', 'v'), // в
    ('\u{0433}', 'g'), // г
    ('\u{0434}', 'd'), // д
    ('\u{0435}', 'e'), // е
    ('\u{0437}', 'z'), // з
    ('\u{0438}', 'i'), // и
    ('\u{043A}', 'k'), // к
    ('\u{043B}', 'l'), // л
    ('\u{043C}', 'm'), // м
    ('\u{043D}', 'n'), // н
    ('\u{043E}', 'o'), // о
    ('\u{043F}', 'p'), // п
    ('\u{0440}', 'r'), // р
    ('\u{0441}', 's'), // с
    ('\u{0442}', 't'), // т
    ('\u{0443}', 'u'), // у
    ('\u{0444}', 'f'), // ф
    ('\u{0445}', 'x'), // х
    ('\u{0456}', 'i'), // і
];

/// Digits and symbols standing in for letters.
const LEETSPEAK: &[(char, char)] = &[
    ('!', 'i'),
    ('$', 's'),
    ('0', 'o'),
    ('1', 'i'),
    ('3', 'e'),
    ('4', 'a'),
    ('5', 's'),
    ('6', 'g'),
    ('7', 't'),
    ('8', 'b'),
    ('@', 'a'),
];

/// A read-only substitution table from a confusable character to its Latin
/// target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HomoglyphTable {
    entries: &'static [(char, char)],
}

impl HomoglyphTable {
    /// Visually confusable Cyrillic and Greek letters.
    pub const VISUAL: Self = Self { entries: VISUAL };
    /// Phonetic Cyrillic transliteration.
    pub const PHONETIC: Self = Self { entries: PHONETIC };
    /// Leetspeak digit and symbol substitutes.
    pub const LEETSPEAK: Self = Self { entries: LEETSPEAK };
    /// A table that folds nothing.
    pub const EMPTY: Self = Self { entries: &[] };

    /// Return the table for a folding mode.
    pub const fn for_mode(mode: FoldingMode) -> Self {
        match mode {
            FoldingMode::Visual => Self::VISUAL,
            FoldingMode::Phonetic => Self::PHONETIC,
            FoldingMode::None => Self::EMPTY,
        }
    }

    /// Look up the Latin target of a character.
    pub fn lookup(&self, c: char) -> Option<char> {
        self.entries
            .binary_search_by_key(&c, |&(from, _)| from)
            .ok()
            .map(|i| self.entries[i].1)
    }

    /// Fold a character, returning it unchanged when it has no entry.
    pub fn fold(&self, c: char) -> char {
        self.lookup(c).unwrap_or(c)
    }

    /// All `(source, target)` pairs, sorted by source.
    pub fn entries(&self) -> &'static [(char, char)] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
