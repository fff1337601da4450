// MessageFilter: the banned-word handle.
//
// Owns a Normalizer and a FilterSet. Words are canonicalized once when they
// are banned, messages once per check, and both under the same policy, so
// the canonical forms compare directly.

use msgfilter_core::{NormalizationPolicy, Normalizer};
use tracing::debug;

use crate::error::FilterError;
use crate::set::FilterSet;

/// A per-instance banned-word filter.
///
/// Instances share no state. The normalization policy is fixed at
/// construction because the stored words were canonicalized under it.
///
/// ```
/// use msgfilter::MessageFilter;
///
/// let mut filter = MessageFilter::new();
/// filter.ban_word("bad").unwrap();
/// assert!(filter.check_message("this is B-A-D"));
/// assert!(!filter.check_message("this is good"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MessageFilter {
    normalizer: Normalizer,
    set: FilterSet,
}

impl MessageFilter {
    /// Create an empty filter with the default normalization policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty filter with a custom normalization policy.
    pub fn with_policy(policy: NormalizationPolicy) -> Self {
        Self {
            normalizer: Normalizer::new(policy),
            set: FilterSet::new(),
        }
    }

    pub fn policy(&self) -> &NormalizationPolicy {
        self.normalizer.policy()
    }

    /// Canonical form of `text` under this filter's policy.
    pub fn normalize(&self, text: &str) -> String {
        self.normalizer.normalize(text)
    }

    fn canonical_word(&self, word: &str) -> Result<String, FilterError> {
        let canonical = self.normalizer.normalize(word);
        if canonical.is_empty() {
            return Err(FilterError::InvalidWord {
                word: word.to_string(),
            });
        }
        Ok(canonical)
    }

    // =========================================================================
    // Banned-word list
    // =========================================================================

    /// Add a word to the banned list.
    ///
    /// Banning a word that is already banned (in any spelling with the same
    /// canonical form) is a no-op. Fails with [`FilterError::InvalidWord`]
    /// when the word has no letters or digits; the list is then unchanged.
    pub fn ban_word(&mut self, word: &str) -> Result<(), FilterError> {
        let canonical = self.canonical_word(word)?;
        if self.set.insert(&canonical)? {
            debug!(word = %canonical, total = self.set.len(), "banned word");
        }
        Ok(())
    }

    /// Remove a word from the banned list.
    ///
    /// Removing a word that is not banned is a no-op. Fails with
    /// [`FilterError::InvalidWord`] under the same condition as
    /// [`ban_word`](Self::ban_word).
    pub fn unban_word(&mut self, word: &str) -> Result<(), FilterError> {
        let canonical = self.canonical_word(word)?;
        if self.set.remove(&canonical)? {
            debug!(word = %canonical, total = self.set.len(), "unbanned word");
        }
        Ok(())
    }

    /// Ban many words at once, rebuilding the match index a single time.
    ///
    /// Every word is validated before anything is inserted: if one of them
    /// is invalid the list is left unchanged. Returns the number of words
    /// that were not already banned.
    pub fn ban_words<I, S>(&mut self, words: I) -> Result<usize, FilterError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let canonical = words
            .into_iter()
            .map(|w| self.canonical_word(w.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        let added = self.set.extend(canonical)?;
        debug!(added, total = self.set.len(), "banned words");
        Ok(added)
    }

    /// Remove every banned word.
    pub fn clear(&mut self) {
        self.set.clear();
        debug!("cleared banned words");
    }

    /// The canonical banned words, in the order they were first banned.
    pub fn banned_words(&self) -> &[String] {
        self.set.words()
    }

    /// Whether `word` (in any spelling) is currently banned.
    pub fn is_banned(&self, word: &str) -> bool {
        let canonical = self.normalizer.normalize(word);
        !canonical.is_empty() && self.set.contains(&canonical)
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    // =========================================================================
    // Message checks
    // =========================================================================

    /// Check whether `message` contains any banned word.
    ///
    /// Matching is substring containment on canonical forms: a banned `ad`
    /// matches inside `badge`.
    pub fn check_message(&self, message: &str) -> bool {
        if self.set.is_empty() {
            return false;
        }
        let canonical = self.normalizer.normalize(message);
        self.set.is_match(&canonical)
    }

    /// The distinct banned words contained in `message`, in banned-list order.
    pub fn matched_words(&self, message: &str) -> Vec<String> {
        if self.set.is_empty() {
            return Vec::new();
        }
        let canonical = self.normalizer.normalize(message);
        self.set
            .matches(&canonical)
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// The library version string.
    pub fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use msgfilter_core::FoldingMode;

    #[test]
    fn ban_and_check() {
        let mut filter = MessageFilter::new();
        filter.ban_word("bad").unwrap();
        assert!(filter.check_message("this is bad"));
        assert!(!filter.check_message("this is good"));
    }

    #[test]
    fn unban_restores_clean_state() {
        let mut filter = MessageFilter::new();
        filter.ban_word("bad").unwrap();
        filter.unban_word("bad").unwrap();
        assert!(!filter.check_message("this is bad"));
        assert!(filter.banned_words().is_empty());
    }

    #[test]
    fn unban_uses_canonical_form() {
        let mut filter = MessageFilter::new();
        filter.ban_word("bad").unwrap();
        filter.unban_word("B-A-D").unwrap();
        assert!(filter.is_empty());
    }

    #[test]
    fn invalid_words_are_rejected() {
        let mut filter = MessageFilter::new();
        filter.ban_word("evil").unwrap();
        for word in ["", "   !!!", "-_-"] {
            assert!(matches!(
                filter.ban_word(word),
                Err(FilterError::InvalidWord { word: w }) if w == word
            ));
            assert!(matches!(
                filter.unban_word(word),
                Err(FilterError::InvalidWord { .. })
            ));
        }
        assert_eq!(filter.banned_words(), ["evil"]);
    }

    #[test]
    fn duplicates_collapse_in_insertion_order() {
        let mut filter = MessageFilter::new();
        filter.ban_word("Bad").unwrap();
        filter.ban_word("BAD").unwrap();
        filter.ban_word("evil").unwrap();
        assert_eq!(filter.banned_words(), ["bad", "evil"]);
    }

    #[test]
    fn substring_semantics() {
        let mut filter = MessageFilter::new();
        filter.ban_word("ad").unwrap();
        assert!(filter.check_message("badge"));
    }

    #[test]
    fn empty_message_never_matches() {
        let mut filter = MessageFilter::new();
        filter.ban_word("bad").unwrap();
        assert!(!filter.check_message(""));
        assert!(!filter.check_message("  ...  "));
    }

    #[test]
    fn empty_filter_never_matches() {
        let filter = MessageFilter::new();
        assert!(!filter.check_message("bad"));
        assert!(filter.matched_words("bad").is_empty());
    }

    #[test]
    fn ban_words_is_all_or_nothing() {
        let mut filter = MessageFilter::new();
        let err = filter.ban_words(["bad", "  ", "evil"]).unwrap_err();
        assert!(matches!(err, FilterError::InvalidWord { word } if word == "  "));
        assert!(filter.is_empty());

        assert_eq!(filter.ban_words(["bad", "BAD", "evil"]).unwrap(), 2);
        assert_eq!(filter.banned_words(), ["bad", "evil"]);
    }

    #[test]
    fn matched_words_reports_each_hit_once() {
        let mut filter = MessageFilter::new();
        filter.ban_words(["bad", "evil", "nice"]).unwrap();
        assert_eq!(
            filter.matched_words("EVIL and bad, bad, b.a.d"),
            vec!["bad".to_string(), "evil".to_string()]
        );
    }

    #[test]
    fn is_banned_uses_canonical_form() {
        let mut filter = MessageFilter::new();
        filter.ban_word("bad").unwrap();
        assert!(filter.is_banned("B a D"));
        assert!(!filter.is_banned("ba"));
        assert!(!filter.is_banned(""));
    }

    #[test]
    fn policy_applies_to_words_and_messages() {
        let mut filter = MessageFilter::with_policy(NormalizationPolicy {
            homoglyphs: FoldingMode::Phonetic,
            ..NormalizationPolicy::default()
        });
        // "нет" in Cyrillic is stored as "net" under the phonetic table.
        filter.ban_word("\u{043D}\u{0435}\u{0442}").unwrap();
        assert_eq!(filter.banned_words(), ["net"]);
        assert!(filter.check_message("internet"));
    }

    #[test]
    fn instances_are_independent() {
        let mut a = MessageFilter::new();
        let b = MessageFilter::new();
        a.ban_word("bad").unwrap();
        assert!(a.check_message("bad"));
        assert!(!b.check_message("bad"));
    }

    #[test]
    fn version_is_set() {
        assert!(!MessageFilter::version().is_empty());
    }
}
