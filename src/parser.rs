/*
 * ==========================================================================
 * FNSPEC - Signatures with Claws!
 * ==========================================================================
 *
 * Grammar Parser
 * --------------
 * Third stage of the FNSPEC pipeline. Turns a lexeme stream into structure:
 *
 *  - parse_declaration: `funky_function(a, b=24, c="abc", d)`
 *  - parse_call:        `funky_function(1, d=10, b=24, c=56)`
 *
 * One grammar skeleton serves both forms:
 *
 *     form    := name '(' list? ')' end-of-input
 *     list    := item (',' item)*
 *     item    := name ('=' literal)?          (declaration)
 *              | (name '=')? literal          (call)
 *     literal := number-literal | string-literal
 *
 * Single left-to-right pass with one lexeme of lookahead. Separators are
 * strict: every argument is followed by ',' or ')', stray and trailing
 * commas are rejected, and nothing may follow the closing parenthesis.
 * Within a call, a positional argument may never follow a named one.
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

use crate::ast::{CallArgument, FunctionCall, FunctionDeclaration, ParameterSpec};
use crate::error::{FnspecError, Result};
use crate::lexer::{Lexeme, LexemeKind, Lexer};
use crate::names;
use crate::span::Span;

/// Parses a function declaration such as `foo(a, b=2, c="x")`.
///
/// # Parameters
/// - `input`: The declaration text, whitespace-insensitive.
///
/// # Returns
/// The parsed [`FunctionDeclaration`] with parameters in source order and
/// default values kept as raw literal text.
///
/// # Errors
/// A syntax error (`E_SYNTAX`) describing the first problem found, with the
/// span where it was detected and the offending input attached.
pub fn parse_declaration(input: &str) -> Result<FunctionDeclaration> {
    let mut parser = Parser::new(input)?;
    let declaration = parser.declaration()?;
    validate_declaration(&declaration)?;
    Ok(declaration)
}

/// Parses a function call such as `foo(1, d=10, b=24)`.
///
/// # Parameters
/// - `input`: The call text, whitespace-insensitive.
///
/// # Returns
/// The parsed [`FunctionCall`] with arguments in source order. Positional
/// arguments have no name yet; binding them to declaration parameters is
/// the reconciler's job.
///
/// # Errors
/// A syntax error (`E_SYNTAX`) for grammar violations, including a
/// positional argument appearing after a named one.
pub fn parse_call(input: &str) -> Result<FunctionCall> {
    let mut parser = Parser::new(input)?;
    let (call, argument_spans) = parser.call()?;
    validate_call(&call, &argument_spans, input)?;
    Ok(call)
}

/// Declaration-level validation pass.
///
/// Currently nothing beyond the grammar is enforced; this is the hook for
/// future rules (duplicate parameter names, defaults-last ordering).
fn validate_declaration(_declaration: &FunctionDeclaration) -> Result<()> {
    Ok(())
}

/// Call-level validation pass: named arguments form a suffix.
///
/// `argument_spans` holds the start span of each argument, parallel to
/// `call.arguments`, so the report can point at the offending argument.
fn validate_call(call: &FunctionCall, argument_spans: &[Span], input: &str) -> Result<()> {
    let mut named_seen = false;

    for (argument, span) in call.arguments.iter().zip(argument_spans) {
        if argument.name.is_some() {
            named_seen = true;
        } else if named_seen {
            return Err(FnspecError::syntax_error(
                "positional argument after named argument",
                *span,
                input,
            ));
        }
    }

    Ok(())
}

/// Cursor over a fully lexed input.
struct Parser {
    lexemes: Vec<Lexeme>,
    current: usize,
    input: String,
}

impl Parser {
    /// Lexes the whole input up front. The lexeme vector always ends with
    /// the end-of-input lexeme, so the cursor never runs off the end.
    fn new(input: &str) -> Result<Self> {
        let mut lexer = Lexer::new(input);
        let mut lexemes = Vec::new();

        loop {
            let lexeme = lexer.next_lexeme()?;
            let done = lexeme.kind == LexemeKind::EndOfInput;
            lexemes.push(lexeme);

            if done {
                break;
            }
        }

        Ok(Self {
            lexemes,
            current: 0,
            input: input.to_string(),
        })
    }

    // ---------------------------------------------------------------------
    // Grammar productions
    // ---------------------------------------------------------------------

    fn declaration(&mut self) -> Result<FunctionDeclaration> {
        let name = self.name_and_open_paren()?;
        let parameters = self.declaration_parameters()?;
        self.end_of_input()?;

        Ok(FunctionDeclaration { name, parameters })
    }

    fn call(&mut self) -> Result<(FunctionCall, Vec<Span>)> {
        let name = self.name_and_open_paren()?;
        let (arguments, argument_spans) = self.call_arguments()?;
        self.end_of_input()?;

        Ok((FunctionCall { name, arguments }, argument_spans))
    }

    /// Shared prefix of both forms: `name '('`.
    fn name_and_open_paren(&mut self) -> Result<String> {
        let name = self.consume(LexemeKind::Name, "expected function name")?;
        self.expect_valid_name(&name, "function name")?;
        self.consume(LexemeKind::LParen, "expected '(' after function name")?;

        Ok(name.text)
    }

    fn declaration_parameters(&mut self) -> Result<Vec<ParameterSpec>> {
        let mut parameters = Vec::new();

        if self.match_kind(LexemeKind::RParen) {
            return Ok(parameters);
        }

        loop {
            parameters.push(self.parameter()?);

            let separator = self.advance();
            match separator.kind {
                LexemeKind::RParen => break,
                LexemeKind::Punctuation if separator.text == "," => continue,
                LexemeKind::EndOfInput => {
                    return Err(
                        self.error("missing ')' to close the parameter list", separator.span)
                    );
                }
                _ => {
                    return Err(self.error(
                        format!(
                            "expected ',' or ')' after parameter, found '{}'",
                            separator.text
                        ),
                        separator.span,
                    ));
                }
            }
        }

        Ok(parameters)
    }

    fn call_arguments(&mut self) -> Result<(Vec<CallArgument>, Vec<Span>)> {
        let mut arguments = Vec::new();
        let mut argument_spans = Vec::new();

        if self.match_kind(LexemeKind::RParen) {
            return Ok((arguments, argument_spans));
        }

        loop {
            argument_spans.push(self.peek().span);
            arguments.push(self.argument()?);

            let separator = self.advance();
            match separator.kind {
                LexemeKind::RParen => break,
                LexemeKind::Punctuation if separator.text == "," => continue,
                LexemeKind::EndOfInput => {
                    return Err(
                        self.error("missing ')' to close the argument list", separator.span)
                    );
                }
                _ => {
                    return Err(self.error(
                        format!(
                            "expected ',' or ')' after argument, found '{}'",
                            separator.text
                        ),
                        separator.span,
                    ));
                }
            }
        }

        Ok((arguments, argument_spans))
    }

    /// One declaration parameter: `name` or `name=literal`.
    fn parameter(&mut self) -> Result<ParameterSpec> {
        let lexeme = self.advance();
        match lexeme.kind {
            LexemeKind::Name => {
                self.expect_valid_name(&lexeme, "parameter name")?;

                let default = if self.match_operator("=") {
                    Some(self.value()?)
                } else {
                    None
                };

                Ok(ParameterSpec {
                    name: lexeme.text,
                    default,
                })
            }
            LexemeKind::Punctuation if lexeme.text == "," => {
                Err(self.error("unexpected ','", lexeme.span))
            }
            // Only reachable after a comma; an empty list never enters the
            // parameter loop.
            LexemeKind::RParen => Err(self.error("trailing ',' before ')'", lexeme.span)),
            LexemeKind::LParen => {
                Err(self.error("nested parentheses are not supported", lexeme.span))
            }
            LexemeKind::EndOfInput => Err(self.error(
                "unexpected end of input, expected a parameter name",
                lexeme.span,
            )),
            _ => Err(self.error(
                format!("expected parameter name, found '{}'", lexeme.text),
                lexeme.span,
            )),
        }
    }

    /// One call argument: `literal` or `name=literal`.
    fn argument(&mut self) -> Result<CallArgument> {
        let lexeme = self.advance();
        match lexeme.kind {
            LexemeKind::Name => {
                self.expect_valid_name(&lexeme, "argument name")?;
                self.consume_operator("=", "expected '=' after argument name")?;
                let value = self.value()?;

                Ok(CallArgument {
                    name: Some(lexeme.text),
                    value,
                })
            }
            LexemeKind::NumberLiteral | LexemeKind::StringLiteral => Ok(CallArgument {
                name: None,
                value: lexeme.text,
            }),
            LexemeKind::Punctuation if lexeme.text == "," => {
                Err(self.error("unexpected ','", lexeme.span))
            }
            LexemeKind::RParen => Err(self.error("trailing ',' before ')'", lexeme.span)),
            LexemeKind::LParen => {
                Err(self.error("nested parentheses are not supported", lexeme.span))
            }
            LexemeKind::EndOfInput => Err(self.error(
                "unexpected end of input, expected an argument",
                lexeme.span,
            )),
            _ => Err(self.error(
                format!("expected an argument, found '{}'", lexeme.text),
                lexeme.span,
            )),
        }
    }

    /// A literal value position: number or quoted string, kept verbatim.
    fn value(&mut self) -> Result<String> {
        let lexeme = self.advance();
        match lexeme.kind {
            LexemeKind::NumberLiteral | LexemeKind::StringLiteral => Ok(lexeme.text),
            LexemeKind::LParen => {
                Err(self.error("nested parentheses are not supported", lexeme.span))
            }
            LexemeKind::EndOfInput => {
                Err(self.error("unexpected end of input, expected a value", lexeme.span))
            }
            _ => Err(self.error(
                format!("expected a number or string literal, found '{}'", lexeme.text),
                lexeme.span,
            )),
        }
    }

    /// Everything after the closing parenthesis must be end-of-input.
    fn end_of_input(&mut self) -> Result<()> {
        let lexeme = self.peek();
        if lexeme.kind == LexemeKind::EndOfInput {
            Ok(())
        } else {
            Err(self.error(
                format!("unexpected '{}' after ')'", lexeme.text),
                lexeme.span,
            ))
        }
    }

    // ---------------------------------------------------------------------
    // Cursor helpers
    // ---------------------------------------------------------------------

    /// Returns the current lexeme without consuming it.
    fn peek(&self) -> &Lexeme {
        &self.lexemes[self.current]
    }

    /// Consumes and returns the current lexeme.
    ///
    /// The end-of-input lexeme is never consumed; once reached, the cursor
    /// stays on it and every further call returns it again.
    fn advance(&mut self) -> Lexeme {
        let lexeme = self.lexemes[self.current].clone();
        if lexeme.kind != LexemeKind::EndOfInput {
            self.current += 1;
        }

        lexeme
    }

    /// Checks the current lexeme's kind without consuming it.
    fn check(&self, kind: LexemeKind) -> bool {
        self.peek().kind == kind
    }

    /// Consumes the current lexeme if it has the given kind.
    fn match_kind(&mut self, kind: LexemeKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes the current lexeme if it is the given operator.
    fn match_operator(&mut self, op: &str) -> bool {
        if self.check(LexemeKind::Operator) && self.peek().text == op {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes a required lexeme kind or fails with the given message.
    fn consume(&mut self, kind: LexemeKind, message: &str) -> Result<Lexeme> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            let span = self.peek().span;
            Err(self.error(message, span))
        }
    }

    /// Consumes a required operator or fails with the given message.
    fn consume_operator(&mut self, op: &str, message: &str) -> Result<()> {
        if self.match_operator(op) {
            Ok(())
        } else {
            let span = self.peek().span;
            Err(self.error(message, span))
        }
    }

    /// Builds a syntax error carrying this parser's input for diagnostics.
    fn error(&self, message: impl Into<String>, span: Span) -> FnspecError {
        FnspecError::syntax_error(message, span, self.input.as_str())
    }

    /// Rejects names that do not match `[_a-zA-Z][_a-zA-Z0-9]*`.
    ///
    /// The lexer merges any unquoted run into a name lexeme, so shapes like
    /// `a#b` arrive here and are rejected with the span of the whole name.
    fn expect_valid_name(&self, lexeme: &Lexeme, what: &str) -> Result<()> {
        if names::is_valid_name(&lexeme.text) {
            Ok(())
        } else {
            Err(self.error(
                format!("invalid {} '{}'", what, lexeme.text),
                lexeme.span,
            ))
        }
    }
}
