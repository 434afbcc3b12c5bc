//! Whitespace tokenizer, kept deliberately thin: `str::split_whitespace`
//! already gives a correct zero-copy token stream, so there's nothing here
//! worth hand-rolling. The 31-byte token length limit is a parser-level
//! concern (see `parser::MAX_TOKEN_LEN`), not a lexing one.

/// Splits `input` into whitespace-separated tokens, in order.
pub fn tokenize(input: &str) -> impl Iterator<Item = &str> {
    input.split_whitespace()
}
