// WASM bindings for the banned-word filter.
//
// Provides a `WasmMessageFilter` class exported via wasm-bindgen that wraps
// a `MessageFilter`. Policies cross the boundary as plain JS objects and
// structured results are serialized with serde-wasm-bindgen.
//
// Usage from JavaScript:
//
//   const filter = new WasmMessageFilter();            // default policy
//   const strict = new WasmMessageFilter({ leetspeak: true });
//   filter.banWord("bad");
//   filter.checkMessage("this is B-A-D");  // => true
//   filter.getBannedWords();               // => ["bad"]
//   filter.matchedWords("bad and evil");   // => ["bad"]
//   filter.inspect("b a d");
//   // => { blocked: true, canonical: "bad", matchedWords: ["bad"] }
//   filter.unbanWord("bad");
//   filter.terminate();                    // optional cleanup

use serde::Serialize;
use wasm_bindgen::prelude::*;

use msgfilter::{FilterError, MessageFilter, NormalizationPolicy};

// ============================================================================
// Serde-serializable DTO types for JS interop
// ============================================================================

/// Result of inspecting one message.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsInspection {
    blocked: bool,
    canonical: String,
    matched_words: Vec<String>,
}

// ============================================================================
// Conversion helpers
// ============================================================================

fn filter_error_to_js(e: FilterError) -> JsError {
    JsError::new(&e.to_string())
}

fn inspect_message(filter: &MessageFilter, message: &str) -> JsInspection {
    let matched_words = filter.matched_words(message);
    JsInspection {
        blocked: !matched_words.is_empty(),
        canonical: filter.normalize(message),
        matched_words,
    }
}

// ============================================================================
// WasmMessageFilter
// ============================================================================

/// Banned-word filter for WebAssembly.
///
/// Each instance holds its own banned-word list.
#[wasm_bindgen]
pub struct WasmMessageFilter {
    filter: MessageFilter,
}

#[wasm_bindgen]
impl WasmMessageFilter {
    /// Create an empty filter.
    ///
    /// - `policy`: optional normalization policy object, e.g.
    ///   `{ homoglyphs: "phonetic", leetspeak: true }`. Omitted fields take
    ///   their defaults; unknown fields are an error.
    #[wasm_bindgen(constructor)]
    pub fn new(policy: JsValue) -> Result<WasmMessageFilter, JsError> {
        let policy: NormalizationPolicy = if policy.is_undefined() || policy.is_null() {
            NormalizationPolicy::default()
        } else {
            serde_wasm_bindgen::from_value(policy)
                .map_err(|e| JsError::new(&format!("invalid policy: {e}")))?
        };
        Ok(WasmMessageFilter {
            filter: MessageFilter::with_policy(policy),
        })
    }

    /// Ban a word. Throws if the word has no letters or digits.
    #[wasm_bindgen(js_name = "banWord")]
    pub fn ban_word(&mut self, word: &str) -> Result<(), JsError> {
        self.filter.ban_word(word).map_err(filter_error_to_js)
    }

    /// Unban a word. Throws under the same condition as `banWord`.
    #[wasm_bindgen(js_name = "unbanWord")]
    pub fn unban_word(&mut self, word: &str) -> Result<(), JsError> {
        self.filter.unban_word(word).map_err(filter_error_to_js)
    }

    /// Ban many words at once. Returns how many were newly banned.
    ///
    /// If any word is invalid nothing is banned.
    #[wasm_bindgen(js_name = "banWords")]
    pub fn ban_words(&mut self, words: Vec<String>) -> Result<usize, JsError> {
        self.filter.ban_words(words).map_err(filter_error_to_js)
    }

    /// Remove every banned word.
    pub fn clear(&mut self) {
        self.filter.clear();
    }

    /// Check whether a message contains a banned word.
    #[wasm_bindgen(js_name = "checkMessage")]
    pub fn check_message(&self, message: &str) -> bool {
        self.filter.check_message(message)
    }

    /// The canonical banned words, in the order they were first banned.
    #[wasm_bindgen(js_name = "getBannedWords")]
    pub fn get_banned_words(&self) -> Vec<String> {
        self.filter.banned_words().to_vec()
    }

    /// The distinct banned words contained in a message.
    #[wasm_bindgen(js_name = "matchedWords")]
    pub fn matched_words(&self, message: &str) -> Vec<String> {
        self.filter.matched_words(message)
    }

    /// Inspect a message.
    ///
    /// Returns `{ blocked, canonical, matchedWords }`.
    pub fn inspect(&self, message: &str) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(&inspect_message(&self.filter, message))
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Canonical form of a string under this filter's policy.
    pub fn normalize(&self, text: &str) -> String {
        self.filter.normalize(text)
    }

    /// The normalization policy as a plain object.
    pub fn policy(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(self.filter.policy())
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Get the library version string.
    #[wasm_bindgen(js_name = "getVersion")]
    pub fn get_version() -> String {
        MessageFilter::version().to_string()
    }

    /// Release resources held by this instance.
    ///
    /// After calling this method, the instance should not be used.
    pub fn terminate(self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inspection_of_blocked_message() {
        let mut filter = MessageFilter::new();
        filter.ban_words(["bad", "evil"]).unwrap();
        let report = inspect_message(&filter, "so E.V.I.L and b a d");
        assert!(report.blocked);
        assert_eq!(report.canonical, "soevilandbad");
        assert_eq!(report.matched_words, ["bad", "evil"]);
    }

    #[test]
    fn inspection_of_clean_message() {
        let mut filter = MessageFilter::new();
        filter.ban_word("bad").unwrap();
        let report = inspect_message(&filter, "all good");
        assert!(!report.blocked);
        assert!(report.matched_words.is_empty());
    }
}
