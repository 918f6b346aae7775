//! Argument vector construction: pure translation from typed options to
//! the ordered token list a backend tool expects. No I/O.
//!
//! Flag-emission order is fixed by the handler's call order, never by the
//! iteration order of any map. Value-taking tokens are always immediately
//! followed by their value token; comma-separated lists are expanded into
//! one token/value pair per element.

/// Incremental builder for a backend argument vector.
///
/// Each method corresponds to one option shape: boolean flags, scalar
/// values, comma-separated lists, and a raw passthrough. Identical call
/// sequences produce byte-identical vectors.
#[derive(Debug, Clone, Default)]
pub struct ArgBuilder {
    args: Vec<String>,
}

impl ArgBuilder {
    pub fn new() -> Self {
        Self { args: Vec::new() }
    }

    /// Boolean flag: emit the canonical token when enabled, nothing otherwise.
    pub fn flag(mut self, token: &str, enabled: bool) -> Self {
        if enabled {
            self.args.push(token.to_string());
        }
        self
    }

    /// Scalar option: when present and non-empty, emit the token followed
    /// by the value as the next token.
    pub fn scalar(mut self, token: &str, value: Option<&str>) -> Self {
        if let Some(value) = value {
            if !value.is_empty() {
                self.args.push(token.to_string());
                self.args.push(value.to_string());
            }
        }
        self
    }

    /// Comma-separated list option: one fresh token/value pair per element,
    /// in input order. Empty elements are preserved; the backend decides
    /// what they mean.
    pub fn list(mut self, token: &str, values: Option<&str>) -> Self {
        if let Some(values) = values {
            if !values.is_empty() {
                for element in values.split(',') {
                    self.args.push(token.to_string());
                    self.args.push(element.to_string());
                }
            }
        }
        self
    }

    /// Raw passthrough: whitespace-tokenized and appended verbatim at this
    /// position. Content is never validated.
    pub fn raw(mut self, options: Option<&str>) -> Self {
        if let Some(options) = options {
            self.args.extend(options.split_whitespace().map(String::from));
        }
        self
    }

    pub fn build(self) -> Vec<String> {
        self.args
    }
}

/// Split a comma-separated target string into an ordered target list.
///
/// Empty entries are not filtered: `"a,,b"` yields three elements. The
/// empty input string is the "no targets" error condition and is rejected
/// by the validator before this runs.
pub fn split_targets(raw: &str) -> Vec<String> {
    raw.split(',').map(String::from).collect()
}
