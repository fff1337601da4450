// Text canonicalization: compatibility, case, homoglyph and noise folding
//
// Pipeline (fixed order, each step relies on the previous one):
//
// 0. NFKC compatibility folding (policy `compatibility`)
// 1. full Unicode case folding (lowercase, then the full-folding expansions)
// 2. homoglyph folding (policy `homoglyphs`), then leetspeak (policy `leetspeak`)
// 3. structural-noise removal: keep letters and digits only
//
// The result is idempotent: normalize(normalize(x)) == normalize(x).

use unicode_normalization::{UnicodeNormalization, is_nfkc};

use crate::case::case_fold;
use crate::character::is_noise;
use crate::homoglyph::HomoglyphTable;
use crate::policy::NormalizationPolicy;

/// Upper bound on NFKC settling passes. Removing noise can put a base letter
/// next to a conjoining letter (Hangul jamo) that NFKC then composes; one
/// extra pass settles every case seen in practice.
const MAX_SETTLE_PASSES: usize = 4;

/// Canonicalizes text under a fixed [`NormalizationPolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Normalizer {
    policy: NormalizationPolicy,
}

impl Normalizer {
    pub fn new(policy: NormalizationPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &NormalizationPolicy {
        &self.policy
    }

    /// Map `input` into its canonical form.
    ///
    /// Total: any string, including the empty string, has a canonical form.
    /// Input made only of noise characters yields an empty string.
    pub fn normalize(&self, input: &str) -> String {
        let mut out = self.single_pass(input);
        if self.policy.compatibility {
            let mut passes = 0;
            while passes < MAX_SETTLE_PASSES && !is_nfkc(&out) {
                out = self.single_pass(&out);
                passes += 1;
            }
        }
        out
    }

    fn single_pass(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        if self.policy.compatibility {
            self.fold_into(input.nfkc(), &mut out);
        } else {
            self.fold_into(input.chars(), &mut out);
        }
        out
    }

    fn fold_into(&self, chars: impl Iterator<Item = char>, out: &mut String) {
        let homoglyphs = HomoglyphTable::for_mode(self.policy.homoglyphs);
        for ch in chars {
            for lower in case_fold(ch) {
                let mut folded = homoglyphs.fold(lower);
                if self.policy.leetspeak {
                    folded = HomoglyphTable::LEETSPEAK.fold(folded);
                }
                if !is_noise(folded, self.policy.keep_digits) {
                    out.push(folded);
                }
            }
        }
    }
}

/// Canonicalize `input` under the default policy.
pub fn normalize(input: &str) -> String {
    Normalizer::default().normalize(input)
}
