//! Command line tokenization
//!
//! A raw terminal line is trimmed and split on whitespace. The first one or two
//! tokens are lower-cased to build dispatch keys (`"git status"`, `"help"`),
//! while every token keeps its original spelling so that file names, branch
//! names and commit messages stay case-sensitive.
//!
//! The parser never fails: deciding whether a key means anything is the job of
//! the dispatcher.

/// A non-empty, tokenized command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    raw: String,
    tokens: Vec<String>,
}

impl ParsedCommand {
    /// Tokenize a raw line
    ///
    /// Returns `None` for empty or whitespace-only input, which must not
    /// produce any history entry.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        Some(Self {
            raw: raw.to_string(),
            tokens: raw.split_whitespace().map(str::to_string).collect(),
        })
    }

    /// The trimmed line exactly as typed
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Lower-cased first token (`git`, `clear`, `ls`, ...)
    pub fn program(&self) -> String {
        self.tokens[0].to_lowercase()
    }

    /// Lower-cased second token, if any
    pub fn subcommand(&self) -> Option<String> {
        self.tokens.get(1).map(|token| token.to_lowercase())
    }

    /// Dispatch key built from the first two tokens joined by a single space
    pub fn long_key(&self) -> Option<String> {
        self.subcommand()
            .map(|subcommand| format!("{} {}", self.program(), subcommand))
    }

    /// Dispatch key built from the first token only
    pub fn short_key(&self) -> String {
        self.program()
    }

    /// Tokens following a key made of `key_len` tokens, case preserved
    pub fn args(&self, key_len: usize) -> &[String] {
        self.tokens.get(key_len..).unwrap_or(&[])
    }
}
