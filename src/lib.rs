/*
 * ==========================================================================
 * FNSPEC - Signatures with Claws!
 * ==========================================================================
 *
 * File:     lib.rs
 * Purpose:  Crate root for the FNSPEC function notation library.
 *
 * This module wires together the whole pipeline, including:
 *   - Character tokenization
 *   - Token merging into lexemes
 *   - Declaration / call grammar parsing
 *   - Call normalization against registered declarations
 *   - Diagnostics and registry snapshots
 *
 * Author:   Sam Wilcox
 * Email:    sam@pawx-lang.com
 * Website:  https://www.pawx-lang.com
 * Github:   https://github.com/samwilcox/fnspec
 *
 * License:
 * This file is part of the FNSPEC function notation project.
 *
 * FNSPEC is dual-licensed under the terms of:
 *   - The MIT License
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 * Full license text available at:
 *    https://license.pawx-lang.com
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

//! # Introduction
//!
//! FNSPEC parses a small textual notation for declaring and invoking named
//! functions with positional and keyword parameters, and resolves calls
//! against previously registered declarations: positional arguments are
//! bound to parameter names, and parameters the call omitted are filled in
//! from their declared defaults.
//!
//! ## Processing pipeline
//!
//! ```text
//! Input Text → Tokenizer → Lexer → Parser → Declaration / Call → Reconciler
//! ```
//!
//! 1. [`tokenizer`] — classifies raw characters into typed runs.
//! 2. [`lexer`] — merges adjacent runs into names and number literals,
//!    dropping whitespace.
//! 3. [`parser`] — builds [`FunctionDeclaration`] and [`FunctionCall`]
//!    values from the lexeme stream.
//! 4. [`registry`] — keyed store of declarations plus the [`normalize`]
//!    reconciler.
//! 5. [`diagnostics`] — compiler-style reports for [`FnspecError`].
//! 6. [`snapshot`] — JSON import/export of a whole registry.
//!
//! ## The notation
//!
//! ```text
//! funky_function(a, b=24, c="abc", d)     declaration
//! funky_function(1, d=10, b=24, c=56)     call
//! funky_function(a=1, d=10, b=24, c=56)   the call, normalized
//! ```
//!
//! Values are number literals (`123`, `4.56`) or quoted string literals
//! (`"foo"`, backslash escapes supported); they are carried verbatim and
//! never evaluated.

/// Declaration and call structures:
/// - `ParameterSpec` / `FunctionDeclaration`
/// - `CallArgument` / `FunctionCall`
/// - `Display` back to source notation
pub mod ast;

/// Compiler-style diagnostics rendering:
/// - header with stable error code
/// - offending line with caret
pub mod diagnostics;

/// The crate-wide error type, stable error codes, and `Result` alias.
pub mod error;

/// Token-merging lexer:
/// - name and number-literal runs
/// - whitespace-insensitive lexeme stream
pub mod lexer;

/// Name validity checking against `[_a-zA-Z][_a-zA-Z0-9]*`.
pub mod names;

/// Grammar parsing:
/// - `parse_declaration` / `parse_call` entry points
/// - strict separator discipline
pub mod parser;

/// Declaration registry and the call reconciler.
pub mod registry;

/// Registry snapshots: versioned JSON import/export.
pub mod snapshot;

/// Line/column source positions.
pub mod span;

/// Character-level tokenizer.
pub mod tokenizer;

/// Re-export the public surface so callers can use `fnspec::parse_call(..)`
/// without spelling out module paths.
pub use ast::{CallArgument, FunctionCall, FunctionDeclaration, ParameterSpec};
pub use diagnostics::DiagnosticPrinter;
pub use error::{FnspecError, Result};
pub use lexer::{lex, Lexeme, LexemeKind, Lexer};
pub use parser::{parse_call, parse_declaration};
pub use registry::{normalize, Registry};
pub use snapshot::{RegistrySnapshot, SNAPSHOT_VERSION};
pub use span::Span;
pub use tokenizer::{tokenize, Token, TokenKind, Tokenizer};
