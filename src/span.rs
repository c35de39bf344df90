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

/// A position within the raw input text.
///
/// Every token and lexeme carries the span of its first character, and
/// every error reports the span where the problem was detected.
///
/// # Conventions
/// - `line` is **1-based** (the first line of input is line 1)
/// - `column` is **0-based** (diagnostics add 1 when displaying it)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Line number within the input, starting at 1.
    pub line: usize,

    /// Column within the line, starting at 0.
    pub column: usize,
}

impl Span {
    /// Creates a span at an explicit line/column position.
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// The span of the very first character of any input.
    pub fn start() -> Self {
        Self { line: 1, column: 0 }
    }
}

impl Default for Span {
    fn default() -> Self {
        Self::start()
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Columns are displayed 1-based, matching the diagnostic output.
        write!(f, "{}:{}", self.line, self.column + 1)
    }
}
