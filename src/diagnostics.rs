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

use crate::error::FnspecError;
use crate::span::Span;

/// Responsible for rendering human-friendly, compiler-style diagnostics
/// for FNSPEC errors.
///
/// This printer:
/// - Formats errors with label/line/column information
/// - Displays the offending input line
/// - Highlights the exact error position using a caret (`^`)
/// - Optionally shows a helpful follow-up hint
///
/// The output is intentionally inspired by `rustc` diagnostics, but
/// simplified for FNSPEC and designed to remain readable without color.
pub struct DiagnosticPrinter {
    /// Full input text the error refers to.
    ///
    /// Stored as a single string so we can easily extract specific
    /// lines for error reporting.
    source: String,

    /// Label shown in place of a file name (e.g. `<input>` or the name of
    /// the file the text came from).
    ///
    /// Used only for display purposes in diagnostics.
    label: String,
}

impl DiagnosticPrinter {
    /// Creates a new diagnostic printer for a given piece of input.
    ///
    /// # Arguments
    /// - `label` → Where the input came from, for display
    /// - `source` → The full input text
    ///
    /// Both parameters accept any type convertible into `String`
    /// for ergonomic call-sites.
    pub fn new(label: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            source: source.into(),
        }
    }

    /// Renders a formatted error diagnostic as a string.
    ///
    /// This function:
    /// 1. Prints a compiler-style error header
    /// 2. If the error carries a span, locates the corresponding line of
    ///    input and renders it with a caret pointing at the error
    /// 3. Optionally appends a helpful suggestion
    ///
    /// # Output Example
    /// ```text
    /// error[E_SYNTAX]: unexpected ','
    ///   --> <input>:1:8
    ///    |
    ///   1 | foo(a, , b)
    ///    |        ^
    /// ```
    pub fn render(&self, error: &FnspecError) -> String {
        // The main error header: stable error code plus message.
        let mut report = format!("error[{}]: {}\n", error.code, error.message);

        if let Some(Span { line, column }) = error.span {
            // Columns are 0-based internally, 1-based in reports.
            report.push_str(&format!("  --> {}:{}:{}\n", self.label, line, column + 1));

            // Split the input into individual lines so we can fetch the
            // exact line where the error occurred. Lines are 1-indexed in
            // diagnostics, vectors are 0-indexed.
            let lines: Vec<&str> = self.source.lines().collect();
            let source_line = lines.get(line.saturating_sub(1)).copied().unwrap_or("");

            // Visual separator (matches rustc style).
            report.push_str("   |\n");

            // The offending input line with its line number.
            report.push_str(&format!("{:>3} | {}\n", line, source_line));

            // A caret underline pointing exactly at the error column.
            let mut underline = String::new();
            for _ in 0..column {
                underline.push(' ');
            }
            underline.push('^');

            report.push_str(&format!("   | {}\n", underline));
        }

        // If the error includes an optional help message, display it as a
        // follow-up suggestion.
        if let Some(help) = &error.help {
            report.push_str(&format!("\nhelp: {}\n", help));
        }

        report
    }

    /// Prints a formatted error diagnostic to stderr. See
    /// [`DiagnosticPrinter::render`] for the format.
    pub fn print(&self, error: &FnspecError) {
        eprint!("{}", self.render(error));
    }
}
