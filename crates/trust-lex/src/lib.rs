#![forbid(unsafe_code)]
#![deny(unused_must_use)]
#![warn(clippy::dbg_macro, clippy::todo, clippy::unimplemented)]

//! Tokenizer for the Trust language.
//!
//! Tokenizing is total and lossless: it never fails, unrecognized input
//! comes back as [`TokKind::Unknown`] tokens, and the token texts concatenate
//! back to the input.
//!
//! ```
//! use trust_lex::{tokenize, TokKind};
//!
//! let toks = tokenize("let x = 0x10;");
//! assert_eq!(toks[0].kind, TokKind::Let);
//! assert_eq!(toks.iter().map(|t| t.text).collect::<String>(), "let x = 0x10;");
//! ```

mod lexer;
mod token;

pub use lexer::Lexer;
pub use token::{keyword, symbol, Tok, TokKind, KEYWORDS};

/// Tokenize `src`. Span offsets are `u32`; past 4 GiB they saturate at
/// `u32::MAX`, while token texts stay exact.
pub fn tokenize(src: &str) -> Vec<Tok<'_>> {
    let toks: Vec<Tok<'_>> = Lexer::new(src).collect();
    for t in toks.iter().filter(|t| t.kind == TokKind::Unknown) {
        tracing::trace!(text = t.text, start = t.span.start, "unrecognized input");
    }
    tracing::debug!(count = toks.len(), bytes = src.len(), "tokenized");
    toks
}

/// Tokens other than whitespace and comments.
pub fn significant<'t, 'a>(toks: &'t [Tok<'a>]) -> impl Iterator<Item = &'t Tok<'a>> {
    toks.iter().filter(|t| !t.kind.is_trivia())
}

pub fn unknowns<'t, 'a>(toks: &'t [Tok<'a>]) -> impl Iterator<Item = &'t Tok<'a>> {
    toks.iter().filter(|t| t.kind == TokKind::Unknown)
}

/// Debug dump: one `<Kind>: <text>` line per significant token.
pub fn render_tokens(toks: &[Tok<'_>]) -> String {
    let mut out = String::new();
    for t in significant(toks) {
        out.push_str(t.kind.name());
        out.push_str(": ");
        out.push_str(t.text);
        out.push('\n');
    }
    out
}
