//! Banned-word message filtering.
//!
//! Each [`MessageFilter`] owns its own banned-word list. Words and messages
//! are canonicalized (case, homoglyph and noise folding, see
//! [`msgfilter_core`]) and messages are scanned once with an
//! [`aho_corasick::AhoCorasick`] searcher built over the banned words.
//!
//! - [`filter`] -- the [`MessageFilter`] handle
//! - [`set`] -- the [`FilterSet`] word list and match index
//! - [`shared`] -- [`SharedMessageFilter`], a thread-safe handle
//! - [`error`] -- [`FilterError`]

pub mod error;
pub mod filter;
pub mod set;
pub mod shared;

pub use error::FilterError;
pub use filter::MessageFilter;
pub use set::FilterSet;
pub use shared::SharedMessageFilter;

pub use msgfilter_core::{FoldingMode, NormalizationPolicy, Normalizer, normalize};
