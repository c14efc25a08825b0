//! Driver pieces shared by the `trust` binary and its tests.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Serialize;
use trust_ast::tree::Node;
use trust_check::CheckReport;
use trust_lex::Tok;

/// Maximum source file size in bytes (1MB)
pub const MAX_SOURCE_SIZE: usize = 1_000_000;

/// Source file the original driver reads when none is given.
pub const DEFAULT_SOURCE: &str = "test.trust";

pub fn load_source(path: &Path) -> Result<String> {
    let src = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read input file '{}'", path.display()))?;
    if src.len() > MAX_SOURCE_SIZE {
        bail!(
            "source file exceeds {}MB limit ({} bytes)",
            MAX_SOURCE_SIZE / 1_000_000,
            src.len()
        );
    }
    Ok(src)
}

/// Read a syntax tree serialized as JSON; `null` means no tree.
pub fn load_tree(path: &Path) -> Result<Option<Node>> {
    let text = load_source(path)?;
    serde_json::from_str(&text)
        .with_context(|| format!("'{}' is not a syntax tree", path.display()))
}

#[derive(Debug, Serialize)]
pub struct LexOutput<'a> {
    pub tokens: Vec<Tok<'a>>,
    pub unknown: usize,
}

impl<'a> LexOutput<'a> {
    /// Tokenize `src`, keeping trivia only when `all` is set.
    pub fn new(src: &'a str, all: bool) -> Self {
        let tokens: Vec<Tok<'a>> = trust_lex::tokenize(src)
            .into_iter()
            .filter(|t| all || !t.kind.is_trivia())
            .collect();
        let unknown = trust_lex::unknowns(&tokens).count();
        Self { tokens, unknown }
    }

    /// `Tokens:` header, then one `<Kind>: <text>` line per token.
    pub fn pretty(&self) -> String {
        let mut out = String::from("Tokens:\n");
        for t in &self.tokens {
            if t.kind.is_trivia() {
                out.push_str(&format!("{}: {}\n", t.kind, t.text.escape_debug()));
            } else {
                out.push_str(&format!("{}: {}\n", t.kind, t.text));
            }
        }
        out
    }
}

pub fn declared_summary(report: &CheckReport) -> String {
    let names: Vec<&str> = report.declared.iter().map(String::as_str).collect();
    format!("Declared: {}", names.join(", "))
}
