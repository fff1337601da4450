// SharedMessageFilter: a MessageFilter behind Arc<RwLock<_>>.
//
// Checks take the read lock and run concurrently; ban/unban take the write
// lock. Mutations validate before they change anything, so a lock poisoned
// by a panicking holder still guards a consistent filter and is recovered.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use msgfilter_core::NormalizationPolicy;

use crate::error::FilterError;
use crate::filter::MessageFilter;

/// A cloneable, thread-safe handle to one [`MessageFilter`].
///
/// Clones share the same banned-word list.
#[derive(Debug, Clone, Default)]
pub struct SharedMessageFilter {
    inner: Arc<RwLock<MessageFilter>>,
}

impl From<MessageFilter> for SharedMessageFilter {
    fn from(filter: MessageFilter) -> Self {
        Self {
            inner: Arc::new(RwLock::new(filter)),
        }
    }
}

impl SharedMessageFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: NormalizationPolicy) -> Self {
        MessageFilter::with_policy(policy).into()
    }

    fn read(&self) -> RwLockReadGuard<'_, MessageFilter> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, MessageFilter> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn ban_word(&self, word: &str) -> Result<(), FilterError> {
        self.write().ban_word(word)
    }

    pub fn unban_word(&self, word: &str) -> Result<(), FilterError> {
        self.write().unban_word(word)
    }

    pub fn ban_words<I, S>(&self, words: I) -> Result<usize, FilterError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.write().ban_words(words)
    }

    pub fn clear(&self) {
        self.write().clear();
    }

    pub fn check_message(&self, message: &str) -> bool {
        self.read().check_message(message)
    }

    pub fn matched_words(&self, message: &str) -> Vec<String> {
        self.read().matched_words(message)
    }

    /// A copy of the banned words, in the order they were first banned.
    pub fn banned_words(&self) -> Vec<String> {
        self.read().banned_words().to_vec()
    }

    pub fn is_banned(&self, word: &str) -> bool {
        self.read().is_banned(word)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Canonical form of `text` under this filter's policy.
    pub fn normalize(&self, text: &str) -> String {
        self.read().normalize(text)
    }

    pub fn policy(&self) -> NormalizationPolicy {
        *self.read().policy()
    }

    /// An independent copy of the filter as it is now.
    pub fn snapshot(&self) -> MessageFilter {
        self.read().clone()
    }
}
