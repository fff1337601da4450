// Character classification for structural-noise removal
//
// Letters and digits carry the content of a word. Everything else
// (whitespace, punctuation, symbols, invisible format characters, combining
// marks that are not alphabetic) is noise that can be inserted between the
// letters of a word without changing what a reader sees.

/// Character class as seen by the normalizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// Any Unicode alphabetic character (`char::is_alphabetic`).
    Letter,
    /// Any Unicode numeric character (`char::is_numeric`).
    Digit,
    /// White space, including invisible separators such as ZWSP.
    Whitespace,
    /// ASCII punctuation and the common typographic punctuation marks.
    Punctuation,
    /// Symbols, control and format characters, non-alphabetic marks.
    Other,
}

/// Returns the character class for a given character.
pub fn classify(c: char) -> CharClass {
    if c.is_alphabetic() {
        return CharClass::Letter;
    }
    if c.is_numeric() {
        return CharClass::Digit;
    }
    if c.is_whitespace() || is_invisible_separator(c) {
        return CharClass::Whitespace;
    }
    if c.is_ascii_punctuation() || is_typographic_punctuation(c) {
        return CharClass::Punctuation;
    }
    CharClass::Other
}

/// Check whether a character is dropped by the noise-removal step.
///
/// Letters are always kept. Digits are kept unless `keep_digits` is false.
pub fn is_noise(c: char, keep_digits: bool) -> bool {
    match classify(c) {
        CharClass::Letter => false,
        CharClass::Digit => !keep_digits,
        CharClass::Whitespace | CharClass::Punctuation | CharClass::Other => true,
    }
}

/// Zero-width characters that render as nothing but split a word in two.
fn is_invisible_separator(c: char) -> bool {
    matches!(
        c,
        '\u{180E}' // MONGOLIAN VOWEL SEPARATOR
            | '\u{200B}' // ZERO WIDTH SPACE
            | '\u{200C}' // ZERO WIDTH NON-JOINER
            | '\u{200D}' // ZERO WIDTH JOINER
            | '\u{2060}' // WORD JOINER
            | '\u{FEFF}' // ZERO WIDTH NO-BREAK SPACE
    )
}

/// Non-ASCII punctuation commonly used to break up words.
fn is_typographic_punctuation(c: char) -> bool {
    matches!(
        c,
        '\u{00A1}' // INVERTED EXCLAMATION MARK
            | '\u{00AB}' // LEFT-POINTING DOUBLE ANGLE QUOTATION MARK
            | '\u{00AD}' // SOFT HYPHEN
            | '\u{00B7}' // MIDDLE DOT
            | '\u{00BB}' // RIGHT-POINTING DOUBLE ANGLE QUOTATION MARK
            | '\u{00BF}' // INVERTED QUESTION MARK
            | '\u{2010}' // HYPHEN
            | '\u{2011}' // NON-BREAKING HYPHEN
            | '\u{2012}' // FIGURE DASH
            | '\u{2013}' // EN DASH
            | '\u{2014}' // EM DASH
            | '\u{2018}' // LEFT SINGLE QUOTATION MARK
            | '\u{2019}' // RIGHT SINGLE QUOTATION MARK
            | '\u{201C}' // LEFT DOUBLE QUOTATION MARK
            | '\u{201D}' // RIGHT DOUBLE QUOTATION MARK
            | '\u{201E}' // DOUBLE LOW-9 QUOTATION MARK
            | '\u{2022}' // BULLET
            | '\u{2026}' // HORIZONTAL ELLIPSIS
            | '\u{2039}' // SINGLE LEFT-POINTING ANGLE QUOTATION MARK
            | '\u{203A}' // SINGLE RIGHT-POINTING ANGLE QUOTATION MARK
            | '\u{3001}' // IDEOGRAPHIC COMMA
            | '\u{3002}' // IDEOGRAPHIC FULL STOP
    )
}
