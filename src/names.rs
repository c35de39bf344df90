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

use std::sync::OnceLock;

use regex::Regex;

/// Compiled once on first use and shared for the lifetime of the process.
static NAME_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Determines whether a string is a **valid FNSPEC name**.
///
/// Name rules are the same for functions and parameters:
///
/// ```text
/// [_a-zA-Z][_a-zA-Z0-9]*
/// ```
///
/// The lexer merges any adjacent unquoted character runs into a single
/// `Name` lexeme, so text like `f@o` or `$row` can reach the parser looking
/// like a name. This check is what separates names the notation accepts
/// from runs it merely lexed.
///
/// # Parameters
/// - `name`: The candidate name extracted from the input.
///
/// # Returns
/// - `true` if the name is valid according to the notation rules.
/// - `false` otherwise (including the empty string).
///
/// # Examples
/// ```text
/// funky_function  -> valid
/// _private9       -> valid
/// 9lives          -> invalid (leading digit)
/// fn-name         -> invalid ('-' is an operator)
/// ```
pub fn is_valid_name(name: &str) -> bool {
    let pattern = NAME_PATTERN
        .get_or_init(|| Regex::new(r"^[_a-zA-Z][_a-zA-Z0-9]*$").unwrap());

    pattern.is_match(name)
}
