//! Text canonicalization for banned-word matching.
//!
//! Maps arbitrary text into a comparison-stable form so that `BAD`, `b-a-d`,
//! `b a d` and `bаd` (with a Cyrillic `а`) all compare equal to `bad`.
//!
//! # Architecture
//!
//! - [`case`] -- full Unicode case folding
//! - [`character`] -- character classes and the noise predicate
//! - [`homoglyph`] -- read-only homoglyph and leetspeak tables
//! - [`policy`] -- the configurable [`NormalizationPolicy`]
//! - [`normalize`] -- the [`Normalizer`] pipeline

pub mod case;
pub mod character;
pub mod homoglyph;
pub mod normalize;
pub mod policy;

pub use case::case_fold_str;
pub use character::{CharClass, classify, is_noise};
pub use homoglyph::HomoglyphTable;
pub use normalize::{Normalizer, normalize};
pub use policy::{FoldingMode, NormalizationPolicy};
