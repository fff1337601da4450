// Error type for banned-word operations

/// Error returned by [`MessageFilter`](crate::MessageFilter) mutations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum FilterError {
    /// The word normalizes to the empty string: it was empty or made only
    /// of whitespace, punctuation and symbols.
    #[error("word cannot be empty: {word:?} has no letters or digits")]
    InvalidWord { word: String },

    /// The match index could not be built, e.g. because the word list
    /// exceeds the automaton's size limits.
    #[error("failed to build match index: {0}")]
    Index(#[from] aho_corasick::BuildError),
}
