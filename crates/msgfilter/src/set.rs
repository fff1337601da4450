// FilterSet: insertion-ordered banned words plus the derived match index
//
// Words stored here are already canonical. Every mutation builds the new
// searcher before touching the word list, so a failed build leaves the set
// exactly as it was.

use std::hash::BuildHasher;

use aho_corasick::{AhoCorasick, MatchKind};
use hashbrown::{DefaultHashBuilder, HashSet, HashTable};

use crate::error::FilterError;

/// A set of canonical banned words with an Aho-Corasick index over them.
///
/// Pattern `i` of the searcher is `words[i]`.
#[derive(Debug, Clone, Default)]
pub struct FilterSet {
    words: Vec<String>,
    /// Positions in `words`, hashed by the word they point at.
    positions: HashTable<usize>,
    hasher: DefaultHashBuilder,
    /// `None` while the set is empty.
    searcher: Option<AhoCorasick>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, word: &str) -> Option<usize> {
        let hash = self.hasher.hash_one(word);
        self.positions
            .find(hash, |&i| self.words[i] == word)
            .copied()
    }

    fn push(&mut self, word: String) {
        let hash = self.hasher.hash_one(word.as_str());
        let (words, hasher) = (&self.words, &self.hasher);
        self.positions
            .insert_unique(hash, words.len(), |&i| hasher.hash_one(words[i].as_str()));
        self.words.push(word);
    }

    fn reindex(&mut self) {
        self.positions.clear();
        let words = std::mem::take(&mut self.words);
        for word in words {
            self.push(word);
        }
    }

    /// Insert a canonical word. Returns `true` if the set changed.
    pub fn insert(&mut self, word: &str) -> Result<bool, FilterError> {
        if word.is_empty() {
            return Err(FilterError::InvalidWord { word: String::new() });
        }
        if self.position(word).is_some() {
            return Ok(false);
        }
        let searcher = build_searcher(self.words.iter().map(String::as_str).chain([word]))?;
        self.push(word.to_owned());
        self.commit(searcher);
        Ok(true)
    }

    /// Insert several canonical words, rebuilding the index once.
    ///
    /// Returns the number of words that were not already present.
    pub fn extend<I>(&mut self, words: I) -> Result<usize, FilterError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut incoming: Vec<String> = words.into_iter().collect();
        if incoming.iter().any(String::is_empty) {
            return Err(FilterError::InvalidWord { word: String::new() });
        }

        let fresh: Vec<usize> = {
            let mut seen: HashSet<&str> = HashSet::new();
            incoming
                .iter()
                .enumerate()
                .filter_map(|(i, w)| {
                    (self.position(w).is_none() && seen.insert(w.as_str())).then_some(i)
                })
                .collect()
        };
        if fresh.is_empty() {
            return Ok(0);
        }

        let searcher = build_searcher(
            self.words
                .iter()
                .chain(fresh.iter().map(|&i| &incoming[i]))
                .map(String::as_str),
        )?;
        for &i in &fresh {
            self.push(std::mem::take(&mut incoming[i]));
        }
        self.commit(searcher);
        Ok(fresh.len())
    }

    /// Remove a canonical word. Returns `true` if the set changed.
    pub fn remove(&mut self, word: &str) -> Result<bool, FilterError> {
        let Some(pos) = self.position(word) else {
            return Ok(false);
        };
        let searcher = build_searcher(
            self.words
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != pos)
                .map(|(_, w)| w.as_str()),
        )?;
        self.words.remove(pos);
        self.reindex();
        self.commit(searcher);
        Ok(true)
    }

    /// Remove every word.
    pub fn clear(&mut self) {
        self.words.clear();
        self.positions.clear();
        self.searcher = None;
    }

    fn commit(&mut self, searcher: Option<AhoCorasick>) {
        if let Some(ac) = &searcher {
            tracing::trace!(
                patterns = ac.patterns_len(),
                bytes = ac.memory_usage(),
                "rebuilt match index"
            );
        }
        self.searcher = searcher;
    }

    pub fn contains(&self, word: &str) -> bool {
        self.position(word).is_some()
    }

    /// The banned words in insertion order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The current match index, `None` while the set is empty.
    pub fn searcher(&self) -> Option<&AhoCorasick> {
        self.searcher.as_ref()
    }

    /// Return `true` if any banned word occurs in the canonical `message`.
    pub fn is_match(&self, message: &str) -> bool {
        match &self.searcher {
            Some(ac) if !message.is_empty() => ac.is_match(message),
            _ => false,
        }
    }

    /// The distinct banned words occurring in the canonical `message`, in
    /// insertion order of the set.
    pub fn matches(&self, message: &str) -> Vec<&str> {
        let Some(ac) = &self.searcher else {
            return Vec::new();
        };
        let mut hit = vec![false; self.words.len()];
        for m in ac.find_overlapping_iter(message) {
            hit[m.pattern().as_usize()] = true;
        }
        self.words
            .iter()
            .zip(hit)
            .filter_map(|(word, hit)| hit.then_some(word.as_str()))
            .collect()
    }
}

/// Build the searcher for a word list. Overlapping search needs the
/// standard match semantics.
fn build_searcher<'a, I>(words: I) -> Result<Option<AhoCorasick>, FilterError>
where
    I: IntoIterator<Item = &'a str>,
{
    let words: Vec<&str> = words.into_iter().collect();
    if words.is_empty() {
        return Ok(None);
    }
    let searcher = AhoCorasick::builder()
        .match_kind(MatchKind::Standard)
        .build(&words)?;
    Ok(Some(searcher))
}
