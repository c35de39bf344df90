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

use fnspec::error::codes;
use fnspec::lexer::{lex, Lexeme, LexemeKind, Lexer};

fn kinds_and_texts(lexemes: &[Lexeme]) -> Vec<(LexemeKind, &str)> {
    lexemes
        .iter()
        .map(|lexeme| (lexeme.kind, lexeme.text.as_str()))
        .collect()
}

#[test]
fn simple_inputs_lex_to_one_lexeme() {
    let cases: &[(&str, LexemeKind)] = &[
        ("abc123", LexemeKind::Name),
        ("123.456", LexemeKind::NumberLiteral),
        (r#"" some \"fancy string \\""#, LexemeKind::StringLiteral),
        ("(", LexemeKind::LParen),
        (")", LexemeKind::RParen),
        ("+", LexemeKind::Operator),
        ("=", LexemeKind::Operator),
    ];

    for (input, kind) in cases {
        let lexemes = lex(input).unwrap();
        assert_eq!(lexemes.len(), 1, "input {:?}", input);
        assert_eq!(lexemes[0].kind, *kind, "input {:?}", input);
        assert_eq!(lexemes[0].text, *input, "input {:?}", input);
    }
}

#[test]
fn empty_input_lexes_to_nothing() {
    assert!(lex("").unwrap().is_empty());
    assert!(lex("  \t\n ").unwrap().is_empty());
}

#[test]
fn compound_inputs() {
    let cases: &[(&str, &[(LexemeKind, &str)])] = &[
        (
            r#" abc 123 def 456 "foo""#,
            &[
                (LexemeKind::Name, "abc"),
                (LexemeKind::NumberLiteral, "123"),
                (LexemeKind::Name, "def"),
                (LexemeKind::NumberLiteral, "456"),
                (LexemeKind::StringLiteral, r#""foo""#),
            ],
        ),
        (
            "abc123(a=1)",
            &[
                (LexemeKind::Name, "abc123"),
                (LexemeKind::LParen, "("),
                (LexemeKind::Name, "a"),
                (LexemeKind::Operator, "="),
                (LexemeKind::NumberLiteral, "1"),
                (LexemeKind::RParen, ")"),
            ],
        ),
        // Same as above, with whitespace sprinkled everywhere.
        (
            " abc123 ( a = 1 ) ",
            &[
                (LexemeKind::Name, "abc123"),
                (LexemeKind::LParen, "("),
                (LexemeKind::Name, "a"),
                (LexemeKind::Operator, "="),
                (LexemeKind::NumberLiteral, "1"),
                (LexemeKind::RParen, ")"),
            ],
        ),
        (
            r#" abc123(first=4.56, second="foo") "#,
            &[
                (LexemeKind::Name, "abc123"),
                (LexemeKind::LParen, "("),
                (LexemeKind::Name, "first"),
                (LexemeKind::Operator, "="),
                (LexemeKind::NumberLiteral, "4.56"),
                (LexemeKind::Punctuation, ","),
                (LexemeKind::Name, "second"),
                (LexemeKind::Operator, "="),
                (LexemeKind::StringLiteral, r#""foo""#),
                (LexemeKind::RParen, ")"),
            ],
        ),
    ];

    for (input, expected) in cases {
        let lexemes = lex(input).unwrap();
        assert_eq!(kinds_and_texts(&lexemes), *expected, "input {:?}", input);
    }
}

#[test]
fn lexing_is_whitespace_insensitive() {
    let spaced = lex(" abc123 ( a = 1 ) ").unwrap();
    let tight = lex("abc123(a=1)").unwrap();

    assert_eq!(kinds_and_texts(&spaced), kinds_and_texts(&tight));
}

#[test]
fn malformed_runs_are_syntax_errors() {
    let cases = [
        "1.2.3",       // second decimal point
        "12.",         // trailing decimal point
        ".5",          // decimal point with nothing to join
        ".",           // bare decimal point
        "abc.def",     // decimal point inside a name
        "123abc",      // letters inside a number
        r#""abc"#,     // unterminated string literal
        r#"x "abc"#,   // unterminated literal after a valid lexeme
    ];

    for input in cases {
        let err = lex(input).unwrap_err();
        assert_eq!(err.code, codes::E_SYNTAX, "input {:?}", input);
        assert!(err.span.is_some(), "input {:?}", input);
    }
}

#[test]
fn number_error_messages_name_the_problem() {
    let err = lex("1.2.3").unwrap_err();
    assert!(err.message.contains("decimal"), "message: {}", err.message);

    let err = lex("123abc").unwrap_err();
    assert!(
        err.message.contains("invalid number literal '123abc'"),
        "message: {}",
        err.message
    );

    let err = lex(r#""abc"#).unwrap_err();
    assert!(
        err.message.contains("unterminated string literal"),
        "message: {}",
        err.message
    );
}

#[test]
fn end_of_input_is_idempotent() {
    let mut lexer = Lexer::new("abc");

    assert_eq!(lexer.next_lexeme().unwrap().kind, LexemeKind::Name);
    assert_eq!(lexer.next_lexeme().unwrap().kind, LexemeKind::EndOfInput);
    assert_eq!(lexer.next_lexeme().unwrap().kind, LexemeKind::EndOfInput);
}

#[test]
fn lexemes_carry_the_span_of_their_first_character() {
    let lexemes = lex(" abc123 ( a = 1 ) ").unwrap();

    let columns: Vec<usize> = lexemes.iter().map(|lexeme| lexeme.span.column).collect();
    assert_eq!(columns, vec![1, 8, 10, 12, 14, 16]);
    assert!(lexemes.iter().all(|lexeme| lexeme.span.line == 1));
}
