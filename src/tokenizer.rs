/*
 * ==========================================================================
 * FNSPEC - Signatures with Claws!
 * ==========================================================================
 *
 * Character Tokenizer
 * -------------------
 * First stage of the FNSPEC pipeline. Classifies raw input characters into
 * typed spans (tokens):
 *
 *  - whitespace runs
 *  - parentheses
 *  - operators (= + - / *)
 *  - punctuation (. , : ;)
 *  - quoted string literals (backslash escaping)
 *  - unquoted character runs
 *  - digit runs
 *  - end-of-input
 *
 * The tokenizer is stateless beyond a cursor over the remaining input and
 * never interprets what it classifies. Merging runs into meaningful units
 * (names, number literals) is the lexer's job.
 *
 * --------------------------------------------------------------------------
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

use crate::span::Span;

/// Represents the **classification of a raw character run** in FNSPEC input.
///
/// `TokenKind` is decided character by character; a token of a run kind
/// extends for as long as consecutive characters classify identically.
///
/// # Pipeline Role
/// ```text
/// Input Text → Tokenizer → Token → Lexer → Lexeme → Parser
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Any whitespace run (space, tab, newline, vertical tab, …).
    Whitespace,

    /// A left parenthesis `(`. Always exactly one character.
    LParen,

    /// A right parenthesis `)`. Always exactly one character.
    RParen,

    /// One of `= + - / *`. Always exactly one character; operators never
    /// merge, so `+-` is two tokens.
    Operator,

    /// One of `. , : ;`. Always exactly one character.
    ///
    /// A `.` between digits is still tokenized as punctuation here; the
    /// lexer absorbs it into a number literal.
    Punctuation,

    /// A `"`-delimited string literal, including both quotes and any
    /// backslash escapes, exactly as written.
    ///
    /// Only a `"` at the **start** of a token opens a quoted string; a `"`
    /// in the middle of an unquoted run stays part of that run.
    QuotedString,

    /// An unquoted character run: anything that is not whitespace, a digit,
    /// or one of the single-character kinds above.
    String,

    /// A digit run (ASCII digits only), without any decimal point.
    Number,

    /// The terminal token. Returned once the input is exhausted; repeated
    /// calls keep returning it.
    EndOfInput,
}

/// One maximal run of identically-classified characters.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Classification of this run.
    pub kind: TokenKind,

    /// The run's text, exactly as it appears in the input.
    pub text: String,

    /// Position of the run's first character.
    pub span: Span,
}

/// Classifies a single character.
///
/// `"` deliberately falls through to `TokenKind::String`: quoted strings
/// are only opened by a quote at token start, which `peek_next_token`
/// checks before calling this.
fn classify_character(c: char) -> TokenKind {
    match c {
        '(' => TokenKind::LParen,
        ')' => TokenKind::RParen,
        '=' | '+' | '-' | '/' | '*' => TokenKind::Operator,
        '.' | ',' | ':' | ';' => TokenKind::Punctuation,
        _ if c.is_whitespace() => TokenKind::Whitespace,
        _ if c.is_ascii_digit() => TokenKind::Number,
        _ => TokenKind::String,
    }
}

/// The FNSPEC character tokenizer.
///
/// Holds the decomposed input and a cursor; `peek_next_token` computes the
/// next token without consuming it, `get_next_token` consumes it. Line and
/// column are tracked so every token carries an accurate [`Span`].
pub struct Tokenizer {
    chars: Vec<char>,
    current: usize,
    line: usize,
    column: usize,
}

impl Tokenizer {
    /// Creates a new tokenizer over raw input text.
    pub fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            current: 0,
            line: 1,
            column: 0,
        }
    }

    /// The span of the next character to be consumed (or of end-of-input).
    pub fn position(&self) -> Span {
        Span::new(self.line, self.column)
    }

    /// Returns the next token **without consuming it**.
    ///
    /// # Behavior
    /// - At end of input, returns an [`TokenKind::EndOfInput`] token with
    ///   empty text. Peeking never changes that.
    /// - A `"` at the cursor opens a quoted string scan. If the literal is
    ///   never terminated, the returned token has **zero-length text**;
    ///   that is the malformed-literal marker the lexer turns into a
    ///   syntax error.
    /// - Any other character is classified and extended into a maximal run
    ///   of the same classification, except for the single-character kinds
    ///   (parentheses, operators, punctuation).
    pub fn peek_next_token(&self) -> Token {
        if self.is_at_end() {
            return Token {
                kind: TokenKind::EndOfInput,
                text: String::new(),
                span: self.position(),
            };
        }

        let span = self.position();
        let first = self.chars[self.current];

        if first == '"' {
            let length = self.quoted_string_length();
            return Token {
                kind: TokenKind::QuotedString,
                text: self.chars[self.current..self.current + length]
                    .iter()
                    .collect(),
                span,
            };
        }

        let kind = classify_character(first);
        let length = match kind {
            // Parentheses, operators, and punctuation never merge.
            TokenKind::LParen
            | TokenKind::RParen
            | TokenKind::Operator
            | TokenKind::Punctuation => 1,

            // Run kinds extend while consecutive characters classify
            // identically.
            _ => {
                let mut length = 1;
                while self.current + length < self.chars.len()
                    && classify_character(self.chars[self.current + length]) == kind
                {
                    length += 1;
                }
                length
            }
        };

        Token {
            kind,
            text: self.chars[self.current..self.current + length]
                .iter()
                .collect(),
            span,
        }
    }

    /// Returns the next token and consumes it.
    ///
    /// Consuming a zero-length token (end-of-input, or the unterminated
    /// string-literal marker) leaves the cursor where it was.
    pub fn get_next_token(&mut self) -> Token {
        let token = self.peek_next_token();
        self.advance_past(&token.text);
        token
    }

    /// Moves the cursor past consumed text, keeping line/column in sync.
    fn advance_past(&mut self, text: &str) {
        for c in text.chars() {
            self.current += 1;
            if c == '\n' {
                self.line += 1;
                self.column = 0;
            } else {
                self.column += 1;
            }
        }
    }

    /// Measures a quoted string literal starting at the cursor, **including
    /// both quotes**, honoring backslash escapes (`\"` does not terminate,
    /// `\\` is a literal backslash).
    ///
    /// Returns 0 when no unescaped closing quote exists — the caller emits
    /// a zero-length token to signal the malformed literal.
    fn quoted_string_length(&self) -> usize {
        let mut is_escaped = false;
        let mut is_quoted = false;

        for (i, &c) in self.chars[self.current..].iter().enumerate() {
            if c == '\\' {
                is_escaped = !is_escaped;
            } else if c == '"' && !is_escaped {
                is_quoted = !is_quoted;

                // Quotation mark that terminated the string literal.
                if !is_quoted {
                    return i + 1;
                }
            } else if is_escaped {
                is_escaped = false;
            }
        }

        0
    }

    /// Determines whether all input has been consumed.
    fn is_at_end(&self) -> bool {
        self.current >= self.chars.len()
    }
}

/// Tokenizes input to completion, collecting every token before
/// end-of-input.
///
/// Convenience wrapper over [`Tokenizer`] for callers (and tests) that want
/// the whole sequence at once. A zero-length quoted-string token marks an
/// unterminated literal and cannot advance the cursor, so collection stops
/// there.
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut tokenizer = Tokenizer::new(input);
    let mut tokens = Vec::new();

    loop {
        let token = tokenizer.get_next_token();
        if token.kind == TokenKind::EndOfInput {
            break;
        }

        let is_unterminated = token.text.is_empty();
        tokens.push(token);
        if is_unterminated {
            break;
        }
    }

    tokens
}
