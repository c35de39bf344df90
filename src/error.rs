/*
 * ==========================================================================
 * FNSPEC - Signatures with Claws!
 * ==========================================================================
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
 *   - The MIT license
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

use std::fmt;

use crate::span::Span;

/// Stable error codes carried by every [`FnspecError`].
///
/// Callers match on these instead of parsing messages.
pub mod codes {
    /// Input does not match the grammar at some position: missing
    /// parenthesis, stray comma, malformed literal, unterminated string,
    /// positional argument after a named one, nested parenthesis.
    pub const E_SYNTAX: &str = "E_SYNTAX";

    /// A lookup or normalization referenced a function name that is not
    /// registered.
    pub const E_UNKNOWN_FUNCTION: &str = "E_UNKNOWN_FUNCTION";

    /// A call supplied more positional arguments than the declaration has
    /// parameters.
    pub const E_ARITY: &str = "E_ARITY";

    /// Strict registration rejected a name that is already registered.
    pub const E_DUPLICATE: &str = "E_DUPLICATE";

    /// A registry snapshot could not be serialized, deserialized, read,
    /// or written.
    pub const E_SNAPSHOT: &str = "E_SNAPSHOT";
}

/// Crate-wide result alias. Every fallible operation in the pipeline
/// returns this.
pub type Result<T> = std::result::Result<T, FnspecError>;

#[derive(Debug, Clone)]
pub struct FnspecError {
    /// Stable error code (E_SYNTAX, E_ARITY, …)
    pub code: &'static str,

    /// Human-readable error message
    pub message: String,

    /// Source position where the problem was detected.
    ///
    /// Present for syntax errors; registry-level errors (unknown function,
    /// arity, duplicate) have no meaningful position.
    pub span: Option<Span>,

    /// The offending input text, kept alongside the span so the error is
    /// self-describing even after the caller dropped the source.
    pub input: Option<String>,

    /// Optional note / help text
    pub help: Option<String>,
}

impl FnspecError {
    /// Generic constructor
    pub fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            span: None,
            input: None,
            help: None,
        }
    }

    /// Syntax error (input rejected by the tokenizer, lexer, or parser)
    pub fn syntax_error(
        message: impl Into<String>,
        span: Span,
        input: impl Into<String>,
    ) -> Self {
        let mut error = Self::new(codes::E_SYNTAX, message);
        error.span = Some(span);
        error.input = Some(input.into());
        error
    }

    /// Unknown function error (name absent from the registry)
    pub fn unknown_function(name: &str) -> Self {
        Self::new(
            codes::E_UNKNOWN_FUNCTION,
            format!("unknown function '{}'", name),
        )
    }

    /// Unknown function error raised when a call is normalized against a
    /// declaration carrying a different name.
    pub fn declaration_mismatch(call_name: &str, declaration_name: &str) -> Self {
        Self::new(
            codes::E_UNKNOWN_FUNCTION,
            format!(
                "call to '{}' does not match declaration '{}'",
                call_name, declaration_name
            ),
        )
    }

    /// Arity error (too many positional arguments)
    pub fn arity_error(name: &str, supplied: usize, declared: usize) -> Self {
        Self::new(
            codes::E_ARITY,
            format!(
                "call to '{}' has {} positional arguments, but the declaration has {} parameters",
                name, supplied, declared
            ),
        )
    }

    /// Duplicate declaration error (strict registration only)
    pub fn duplicate_function(name: &str) -> Self {
        Self::new(
            codes::E_DUPLICATE,
            format!("function '{}' is already registered", name),
        )
    }

    /// Snapshot error (registry import/export failure)
    pub fn snapshot_error(message: impl Into<String>) -> Self {
        Self::new(codes::E_SNAPSHOT, message)
    }

    /// Attach a help message to the error (builder-style).
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl fmt::Display for FnspecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error[{}]: {}", self.code, self.message)?;
        if let Some(span) = self.span {
            write!(f, " at {}", span)?;
        }
        Ok(())
    }
}

impl std::error::Error for FnspecError {}
