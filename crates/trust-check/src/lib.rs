#![deny(unused_must_use)]
#![warn(clippy::dbg_macro, clippy::todo, clippy::unimplemented)]
#![forbid(unsafe_code)]

mod checker;


pub use checker::{check, CheckError, CheckReport, DeclChecker, Diagnostic, DiagnosticKind};
