/*
 * ==========================================================================
 * FNSPEC - Signatures with Claws!
 * ==========================================================================
 *
 * Token-Merging Lexer
 * -------------------
 * Second stage of the FNSPEC pipeline. Pulls tokens from the tokenizer and
 * merges adjacent runs into the units the grammar actually works with:
 *
 *  - `abc` + `123`        → name `abc123`
 *  - `123` + `.` + `456`  → number literal `123.456`
 *
 * Whitespace separates lexemes and is dropped. Parentheses, operators,
 * punctuation (other than a decimal point), and quoted strings pass through
 * unchanged. Malformed runs (`123abc`, `12.`, `1.2.3`, a leading `.`) and
 * unterminated string literals are syntax errors here rather than later.
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

use std::collections::VecDeque;

use crate::error::{FnspecError, Result};
use crate::span::Span;
use crate::tokenizer::{Token, TokenKind, Tokenizer};

/// Represents the **kind of a lexeme**, the unit the grammar parser
/// consumes.
///
/// # Pipeline Role
/// ```text
/// Input Text → Tokenizer → Token → Lexer → Lexeme → Parser
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexemeKind {
    /// An identifier-shaped unit: one or more merged unquoted/digit runs,
    /// such as `abc` or `abc123`. Whether it is a *legal* name is the
    /// parser's call.
    Name,

    /// A number literal, either an integer (`123`) or one with a single
    /// decimal point (`123.456`).
    NumberLiteral,

    /// A quoted string literal, verbatim, quotes and escapes included.
    StringLiteral,

    /// One of `= + - / *`.
    Operator,

    /// Separator punctuation: `,`, `:` or `;`. A `.` never surfaces as
    /// punctuation; it is either absorbed into a number literal or
    /// rejected.
    Punctuation,

    /// A left parenthesis `(`.
    LParen,

    /// A right parenthesis `)`.
    RParen,

    /// The terminal lexeme. Returned once the input is exhausted; repeated
    /// calls keep returning it.
    EndOfInput,
}

/// One grammar-level unit of input with its source position.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexeme {
    /// Classification of this unit.
    pub kind: LexemeKind,

    /// The unit's text. For merged runs this is the concatenation of every
    /// contributing token, in input order.
    pub text: String,

    /// Position of the unit's first character.
    pub span: Span,
}

/// Determines whether a token ends the run currently being merged.
///
/// Everything is terminal except unquoted runs, digit runs, and a lone `.`
/// (a decimal-point candidate).
fn is_terminal_token(token: &Token) -> bool {
    match token.kind {
        TokenKind::EndOfInput
        | TokenKind::Whitespace
        | TokenKind::LParen
        | TokenKind::RParen
        | TokenKind::QuotedString
        | TokenKind::Operator => true,
        TokenKind::Punctuation => token.text != ".",
        TokenKind::String | TokenKind::Number => false,
    }
}

/// Maps a pass-through token kind to its lexeme kind.
fn lexeme_kind_for(kind: TokenKind) -> LexemeKind {
    match kind {
        TokenKind::LParen => LexemeKind::LParen,
        TokenKind::RParen => LexemeKind::RParen,
        TokenKind::Operator => LexemeKind::Operator,
        TokenKind::Punctuation => LexemeKind::Punctuation,
        TokenKind::QuotedString => LexemeKind::StringLiteral,
        TokenKind::String => LexemeKind::Name,
        TokenKind::Number => LexemeKind::NumberLiteral,
        TokenKind::EndOfInput => LexemeKind::EndOfInput,
        // Whitespace is dropped before it can reach a lexeme.
        TokenKind::Whitespace => unreachable!("whitespace is not a lexeme"),
    }
}

/// What a merged run is accumulating into.
enum RunKind {
    Name,
    Number,
}

/// Accumulates consecutive non-terminal tokens into a single lexeme.
///
/// A name run absorbs unquoted and digit tokens. A number run absorbs digit
/// tokens and at most one decimal point, and is incomplete while a decimal
/// point is still waiting for digits.
struct LexemeBuilder {
    kind: RunKind,
    text: String,
    span: Span,
    has_decimal_point: bool,
    complete: bool,
}

impl LexemeBuilder {
    /// Creates the builder for the run's first token.
    ///
    /// A `.` cannot open a run (there is nothing for it to join), so inputs
    /// like `.5` or a stray dot are rejected here.
    fn for_token(token: &Token, input: &str) -> Result<Self> {
        let kind = match token.kind {
            TokenKind::String => RunKind::Name,
            TokenKind::Number => RunKind::Number,
            _ => {
                return Err(FnspecError::syntax_error(
                    format!("unexpected '{}'", token.text),
                    token.span,
                    input,
                ));
            }
        };

        Ok(Self {
            kind,
            text: String::new(),
            span: token.span,
            has_decimal_point: false,
            complete: false,
        })
    }

    /// Feeds the next token of the run into the builder.
    fn consume(&mut self, token: &Token, input: &str) -> Result<()> {
        match self.kind {
            RunKind::Name => match token.kind {
                TokenKind::String | TokenKind::Number => {
                    self.text.push_str(&token.text);
                    self.complete = true;
                }
                TokenKind::Punctuation => {
                    return Err(FnspecError::syntax_error(
                        format!("unexpected '.' after '{}'", self.text),
                        token.span,
                        input,
                    ));
                }
                _ => unreachable!("terminal token inside a name run"),
            },
            RunKind::Number => match token.kind {
                TokenKind::Number => {
                    self.text.push_str(&token.text);
                    self.complete = true;
                }
                TokenKind::Punctuation => {
                    if self.has_decimal_point {
                        return Err(FnspecError::syntax_error(
                            format!(
                                "multiple decimal points in number literal '{}{}'",
                                self.text, token.text
                            ),
                            token.span,
                            input,
                        ));
                    }

                    self.text.push_str(&token.text);
                    self.has_decimal_point = true;

                    // A trailing dot needs digits after it.
                    self.complete = false;
                }
                TokenKind::String => {
                    return Err(FnspecError::syntax_error(
                        format!("invalid number literal '{}{}'", self.text, token.text),
                        token.span,
                        input,
                    ));
                }
                _ => unreachable!("terminal token inside a number run"),
            },
        }

        Ok(())
    }

    /// Finalizes the run into a lexeme.
    fn produce(self, input: &str) -> Result<Lexeme> {
        if !self.complete {
            return Err(FnspecError::syntax_error(
                format!("number literal '{}' ends with a decimal point", self.text),
                self.span,
                input,
            ));
        }

        let kind = match self.kind {
            RunKind::Name => LexemeKind::Name,
            RunKind::Number => LexemeKind::NumberLiteral,
        };

        Ok(Lexeme {
            kind,
            text: self.text,
            span: self.span,
        })
    }
}

/// The FNSPEC lexer.
///
/// Wraps a [`Tokenizer`] and buffers the tokens of the run currently being
/// merged. Lexemes are produced on demand via [`Lexer::next_lexeme`]; after
/// the input is exhausted every further call yields
/// [`LexemeKind::EndOfInput`].
pub struct Lexer {
    tokenizer: Tokenizer,
    pending: VecDeque<Token>,
    input: String,
}

impl Lexer {
    /// Creates a new lexer over raw input text.
    pub fn new(input: &str) -> Self {
        Self {
            tokenizer: Tokenizer::new(input),
            pending: VecDeque::new(),
            input: input.to_string(),
        }
    }

    /// Produces the next lexeme.
    ///
    /// # Behavior
    /// - Tokens are pulled and buffered until a terminal token (whitespace,
    ///   parenthesis, operator, quoted string, separator punctuation, or
    ///   end of input) closes the run being merged.
    /// - Whitespace between lexemes is consumed and dropped, so lexing is
    ///   insensitive to spacing.
    /// - A terminal token that arrives with nothing buffered is itself the
    ///   next lexeme.
    ///
    /// # Errors
    /// Returns a syntax error for an unterminated string literal or a
    /// malformed run (`123abc`, `12.`, `1.2.3`, `abc.def`, a stray `.`).
    pub fn next_lexeme(&mut self) -> Result<Lexeme> {
        let mut next = self.tokenizer.peek_next_token();

        while next.kind != TokenKind::EndOfInput {
            if is_terminal_token(&next) && !(self.pending.is_empty() && next.kind == TokenKind::Whitespace)
            {
                if self.pending.is_empty() {
                    let token = self.tokenizer.get_next_token();

                    // A zero-length quoted string marks a literal that was
                    // never closed.
                    if token.kind == TokenKind::QuotedString && token.text.is_empty() {
                        return Err(FnspecError::syntax_error(
                            "unterminated string literal",
                            token.span,
                            self.input.as_str(),
                        ));
                    }

                    self.push_token(token);
                }

                return self.build_lexeme();
            }

            let token = self.tokenizer.get_next_token();
            self.push_token(token);
            next = self.tokenizer.peek_next_token();
        }

        self.build_lexeme()
    }

    /// Buffers a token for the run in progress, dropping whitespace.
    fn push_token(&mut self, token: Token) {
        if token.kind != TokenKind::Whitespace {
            self.pending.push_back(token);
        }
    }

    /// Builds one lexeme from the buffered tokens.
    ///
    /// An empty buffer means the input is exhausted. A terminal token at
    /// the front passes through directly; anything else opens a merge run
    /// that continues until the buffer empties or a terminal token is next.
    fn build_lexeme(&mut self) -> Result<Lexeme> {
        let token = match self.pending.pop_front() {
            Some(token) => token,
            None => {
                return Ok(Lexeme {
                    kind: LexemeKind::EndOfInput,
                    text: String::new(),
                    span: self.tokenizer.position(),
                });
            }
        };

        if is_terminal_token(&token) {
            return Ok(Lexeme {
                kind: lexeme_kind_for(token.kind),
                text: token.text,
                span: token.span,
            });
        }

        let mut builder = LexemeBuilder::for_token(&token, &self.input)?;
        builder.consume(&token, &self.input)?;

        while self
            .pending
            .front()
            .map_or(false, |front| !is_terminal_token(front))
        {
            if let Some(next) = self.pending.pop_front() {
                builder.consume(&next, &self.input)?;
            }
        }

        builder.produce(&self.input)
    }
}

/// Lexes input to completion, collecting every lexeme before end-of-input.
///
/// Convenience wrapper over [`Lexer`] for callers (and tests) that want the
/// whole sequence at once.
pub fn lex(input: &str) -> Result<Vec<Lexeme>> {
    let mut lexer = Lexer::new(input);
    let mut lexemes = Vec::new();

    loop {
        let lexeme = lexer.next_lexeme()?;
        if lexeme.kind == LexemeKind::EndOfInput {
            break;
        }

        lexemes.push(lexeme);
    }

    Ok(lexemes)
}
