//! Test assertion helpers - fluent API for verifying tool replies
#![allow(dead_code)] // Test utilities may not all be used in every test

use serde_json::Value;

// ============================================================================
// Reply Assertions
// ============================================================================

pub struct ReplyAssertion {
    text: String,
    is_error: bool,
}

impl ReplyAssertion {
    /// Wrap a `tools/call` result object
    pub fn of(result: &Value) -> Self {
        let text = result["content"][0]["text"]
            .as_str()
            .unwrap_or_else(|| panic!("result has no text content: {}", result))
            .to_string();
        let is_error = result["isError"].as_bool().unwrap_or(false);
        Self { text, is_error }
    }

    pub fn succeeded(self) -> Self {
        assert!(!self.is_error, "expected success, got error: {}", self.text);
        self
    }

    pub fn failed(self) -> Self {
        assert!(self.is_error, "expected an error, got: {}", self.text);
        assert!(
            self.text.starts_with("❌ Error: "),
            "error text lacks marker: {}",
            self.text
        );
        self
    }

    pub fn contains(self, fragment: &str) -> Self {
        assert!(
            self.text.contains(fragment),
            "expected {:?} in reply:\n{}",
            fragment,
            self.text
        );
        self
    }

    pub fn lacks(self, fragment: &str) -> Self {
        assert!(
            !self.text.contains(fragment),
            "did not expect {:?} in reply:\n{}",
            fragment,
            self.text
        );
        self
    }

    pub fn equals(self, expected: &str) -> Self {
        assert_eq!(self.text, expected);
        self
    }

    /// Assert the fragments appear in this order
    pub fn in_order(self, fragments: &[&str]) -> Self {
        let mut cursor = 0;
        for fragment in fragments {
            match self.text[cursor..].find(fragment) {
                Some(offset) => cursor += offset + fragment.len(),
                None => panic!(
                    "expected {:?} after position {} in reply:\n{}",
                    fragment, cursor, self.text
                ),
            }
        }
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
