// Normalization policy

use serde::{Deserialize, Serialize};

/// Which homoglyph table the normalizer folds with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoldingMode {
    /// Fold letters that look like Latin letters (`с` → `c`).
    #[default]
    Visual,
    /// Fold Cyrillic letters by sound (`с` → `s`).
    Phonetic,
    /// No homoglyph folding.
    None,
}

/// Settings controlling how text is canonicalized.
///
/// All fields have defaults, so a partial TOML or JSON document is a valid
/// policy:
///
/// ```toml
/// homoglyphs = "phonetic"
/// leetspeak = true
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct NormalizationPolicy {
    /// Apply Unicode NFKC before case folding (fullwidth forms, ligatures,
    /// mathematical alphanumerics). Default: true.
    pub compatibility: bool,
    /// Homoglyph table to fold with. Default: visual.
    pub homoglyphs: FoldingMode,
    /// Fold leetspeak substitutes (`4` → `a`, `$` → `s`). Default: false.
    pub leetspeak: bool,
    /// Keep digits after noise removal. Default: true.
    pub keep_digits: bool,
}

impl Default for NormalizationPolicy {
    fn default() -> Self {
        Self {
            compatibility: true,
            homoglyphs: FoldingMode::Visual,
            leetspeak: false,
            keep_digits: true,
        }
    }
}

impl NormalizationPolicy {
    /// The policy used by the original banned-word filter: phonetic
    /// transliteration, no compatibility folding.
    pub fn phonetic() -> Self {
        Self {
            compatibility: false,
            homoglyphs: FoldingMode::Phonetic,
            ..Self::default()
        }
    }

    /// The most aggressive policy: visual homoglyphs plus leetspeak.
    pub fn strict() -> Self {
        Self {
            leetspeak: true,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy() {
        let p = NormalizationPolicy::default();
        assert!(p.compatibility);
        assert_eq!(p.homoglyphs, FoldingMode::Visual);
        assert!(!p.leetspeak);
        assert!(p.keep_digits);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let p: NormalizationPolicy = toml::from_str("homoglyphs = \"phonetic\"\nleetspeak = true\n")
            .expect("valid policy");
        assert_eq!(p.homoglyphs, FoldingMode::Phonetic);
        assert!(p.leetspeak);
        assert!(p.compatibility);
        assert!(p.keep_digits);
    }

    #[test]
    fn kebab_case_keys() {
        let p: NormalizationPolicy =
            toml::from_str("keep-digits = false\n").expect("valid policy");
        assert!(!p.keep_digits);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result: Result<NormalizationPolicy, _> = toml::from_str("leet = true\n");
        assert!(result.is_err());
    }

    #[test]
    fn json_round_trip_keeps_mode_names() {
        let json = serde_json::to_string(&NormalizationPolicy::phonetic()).expect("serialize");
        assert!(json.contains("\"homoglyphs\":\"phonetic\""));
        assert!(json.contains("\"keep-digits\":true"));
        let back: NormalizationPolicy = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, NormalizationPolicy::phonetic());
    }

    #[test]
    fn empty_json_is_default() {
        let p: NormalizationPolicy = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(p, NormalizationPolicy::default());
    }
}
