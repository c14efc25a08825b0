// crates/trust-check/src/checker.rs
// Declaration checker - flags re-declared and undeclared variables

use indexmap::IndexSet;
use trust_ast::tree::{Node, IDENTIFIER, IDENT_NAME_CHILD, LET_DECLARATION, LET_NAME_CHILD};

/// Category of a declaration problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum DiagnosticKind {
    /// A `let` names a variable that is already declared
    DuplicateDeclaration,
    /// A use site names a variable that has not been declared yet
    UndeclaredVariable,
}

/// A non-fatal finding; checking continues after it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub name: String,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            DiagnosticKind::DuplicateDeclaration => {
                write!(f, "variable '{}' is already declared", self.name)
            }
            DiagnosticKind::UndeclaredVariable => {
                write!(f, "variable '{}' is not declared", self.name)
            }
        }
    }
}

/// Fatal checker errors: the tree does not have the shape the checker reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    /// A tagged node lacks the child that carries its variable name
    MalformedTree {
        node: String,
        index: usize,
        found: usize,
    },
}

impl std::fmt::Display for CheckError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckError::MalformedTree { node, index, found } => write!(
                f,
                "malformed tree: '{}' node needs a name at child {}, but has {} children",
                node, index, found
            ),
        }
    }
}

impl std::error::Error for CheckError {}

/// Outcome of one checker run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CheckReport {
    /// Declared names in declaration order, each once
    pub declared: IndexSet<String>,
    pub diagnostics: Vec<Diagnostic>,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn of_kind(&self, kind: DiagnosticKind) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(move |d| d.kind == kind)
    }
}

/// Pre-order walk keeping one flat list of declared names.
///
/// There are no scopes: a name declared anywhere is visible to everything
/// visited after it, including code outside the block that declared it.
/// A scope-aware checker would push a frame per block and look names up
/// through the enclosing frames; this one deliberately does not.
#[derive(Debug, Default)]
pub struct DeclChecker {
    declared: IndexSet<String>,
    diagnostics: Vec<Diagnostic>,
}

impl DeclChecker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check a whole tree. `None` (no tree) and an empty node check clean.
    pub fn check(mut self, tree: Option<&Node>) -> Result<CheckReport, CheckError> {
        let Some(root) = tree else {
            return Ok(self.finish());
        };

        // explicit stack: tree depth is bounded only by the producer
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            let name_slot = self.visit(node)?;
            // a name child is literal text, never a tag
            stack.extend(
                node.children
                    .iter()
                    .enumerate()
                    .rev()
                    .filter(|(i, _)| Some(*i) != name_slot)
                    .map(|(_, child)| child),
            );
        }

        Ok(self.finish())
    }

    /// Returns the index of the child read as a variable name, if any.
    fn visit(&mut self, node: &Node) -> Result<Option<usize>, CheckError> {
        match node.name.as_str() {
            LET_DECLARATION => {
                let name = name_at(node, LET_NAME_CHILD)?;
                if self.is_declared(name) {
                    self.report(DiagnosticKind::DuplicateDeclaration, name);
                } else {
                    tracing::trace!(name, "declared");
                    self.declared.insert(name.to_string());
                }
                Ok(Some(LET_NAME_CHILD))
            }
            IDENTIFIER => {
                let name = name_at(node, IDENT_NAME_CHILD)?;
                if !self.is_declared(name) {
                    self.report(DiagnosticKind::UndeclaredVariable, name);
                }
                Ok(Some(IDENT_NAME_CHILD))
            }
            _ => Ok(None),
        }
    }

    fn is_declared(&self, name: &str) -> bool {
        self.declared.contains(name)
    }

    fn report(&mut self, kind: DiagnosticKind, name: &str) {
        let diag = Diagnostic {
            kind,
            name: name.to_string(),
        };
        tracing::debug!(?kind, name, "{}", diag);
        self.diagnostics.push(diag);
    }

    fn finish(self) -> CheckReport {
        CheckReport {
            declared: self.declared,
            diagnostics: self.diagnostics,
        }
    }
}

fn name_at(node: &Node, index: usize) -> Result<&str, CheckError> {
    node.child(index)
        .map(|c| c.name.as_str())
        .ok_or_else(|| CheckError::MalformedTree {
            node: node.name.clone(),
            index,
            found: node.children.len(),
        })
}

/// Run a fresh [`DeclChecker`] over `tree`.
pub fn check(tree: Option<&Node>) -> Result<CheckReport, CheckError> {
    DeclChecker::new().check(tree)
}
