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

use fnspec::tokenizer::{tokenize, Token, TokenKind, Tokenizer};

fn kinds_and_texts(tokens: &[Token]) -> Vec<(TokenKind, &str)> {
    tokens
        .iter()
        .map(|token| (token.kind, token.text.as_str()))
        .collect()
}

#[test]
fn single_token_inputs() {
    // \u{b} is vertical tab; every whitespace flavor lands in one run.
    let cases: &[(&str, TokenKind)] = &[
        (" \u{b}\t\n\r ", TokenKind::Whitespace),
        ("123", TokenKind::Number),
        ("0", TokenKind::Number),
        ("abcd", TokenKind::String),
        ("+", TokenKind::Operator),
        ("-", TokenKind::Operator),
        ("*", TokenKind::Operator),
        ("/", TokenKind::Operator),
        ("=", TokenKind::Operator),
        ("(", TokenKind::LParen),
        (")", TokenKind::RParen),
        (".", TokenKind::Punctuation),
        (",", TokenKind::Punctuation),
        (":", TokenKind::Punctuation),
        (";", TokenKind::Punctuation),
        (r#""""#, TokenKind::QuotedString),
        (r#""abc""#, TokenKind::QuotedString),
        (r#"" ""#, TokenKind::QuotedString),
        (r#""\"""#, TokenKind::QuotedString),
    ];

    for (input, kind) in cases {
        let tokens = tokenize(input);
        assert_eq!(tokens.len(), 1, "input {:?}", input);
        assert_eq!(tokens[0].kind, *kind, "input {:?}", input);
        assert_eq!(tokens[0].text, *input, "input {:?}", input);
    }
}

#[test]
fn single_character_kinds_never_merge() {
    let cases: &[(&str, &[(TokenKind, &str)])] = &[
        (
            "((",
            &[(TokenKind::LParen, "("), (TokenKind::LParen, "(")],
        ),
        (
            "))",
            &[(TokenKind::RParen, ")"), (TokenKind::RParen, ")")],
        ),
        (
            "+-*/=",
            &[
                (TokenKind::Operator, "+"),
                (TokenKind::Operator, "-"),
                (TokenKind::Operator, "*"),
                (TokenKind::Operator, "/"),
                (TokenKind::Operator, "="),
            ],
        ),
    ];

    for (input, expected) in cases {
        let tokens = tokenize(input);
        assert_eq!(kinds_and_texts(&tokens), *expected, "input {:?}", input);
    }
}

#[test]
fn compound_inputs_split_on_classification_boundaries() {
    let cases: &[(&str, &[(TokenKind, &str)])] = &[
        (
            "a1()",
            &[
                (TokenKind::String, "a"),
                (TokenKind::Number, "1"),
                (TokenKind::LParen, "("),
                (TokenKind::RParen, ")"),
            ],
        ),
        (
            "(1( )2)",
            &[
                (TokenKind::LParen, "("),
                (TokenKind::Number, "1"),
                (TokenKind::LParen, "("),
                (TokenKind::Whitespace, " "),
                (TokenKind::RParen, ")"),
                (TokenKind::Number, "2"),
                (TokenKind::RParen, ")"),
            ],
        ),
        (
            "function_name(arg=1)",
            &[
                (TokenKind::String, "function_name"),
                (TokenKind::LParen, "("),
                (TokenKind::String, "arg"),
                (TokenKind::Operator, "="),
                (TokenKind::Number, "1"),
                (TokenKind::RParen, ")"),
            ],
        ),
        (
            "function_name123test(arg=1)",
            &[
                (TokenKind::String, "function_name"),
                (TokenKind::Number, "123"),
                (TokenKind::String, "test"),
                (TokenKind::LParen, "("),
                (TokenKind::String, "arg"),
                (TokenKind::Operator, "="),
                (TokenKind::Number, "1"),
                (TokenKind::RParen, ")"),
            ],
        ),
    ];

    for (input, expected) in cases {
        let tokens = tokenize(input);
        assert_eq!(kinds_and_texts(&tokens), *expected, "input {:?}", input);
    }
}

#[test]
fn peek_does_not_consume() {
    let mut tokenizer = Tokenizer::new("abc 123");

    let first_peek = tokenizer.peek_next_token();
    let second_peek = tokenizer.peek_next_token();
    assert_eq!(first_peek, second_peek);

    let consumed = tokenizer.get_next_token();
    assert_eq!(consumed, first_peek);
    assert_eq!(consumed.text, "abc");

    assert_eq!(tokenizer.peek_next_token().kind, TokenKind::Whitespace);
}

#[test]
fn end_of_input_is_idempotent() {
    let mut tokenizer = Tokenizer::new("");

    for _ in 0..3 {
        let token = tokenizer.get_next_token();
        assert_eq!(token.kind, TokenKind::EndOfInput);
        assert_eq!(token.text, "");
    }
}

#[test]
fn tokens_carry_line_and_column_spans() {
    let tokens = tokenize("a(\nb=1)");

    let positions: Vec<(usize, usize)> = tokens
        .iter()
        .map(|token| (token.span.line, token.span.column))
        .collect();

    // a ( \n b = 1 )
    assert_eq!(
        positions,
        vec![(1, 0), (1, 1), (1, 2), (2, 0), (2, 1), (2, 2), (2, 3)]
    );
}

#[test]
fn quote_mid_run_stays_in_the_run() {
    // Only a quote at token start opens a string literal.
    let tokens = tokenize(r#"ab"cd"#);

    assert_eq!(
        kinds_and_texts(&tokens),
        vec![(TokenKind::String, r#"ab"cd"#)]
    );
}

#[test]
fn unterminated_string_yields_zero_length_token() {
    let tokens = tokenize(r#""abc"#);

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::QuotedString);
    assert_eq!(tokens[0].text, "");

    // The malformed token cannot be consumed; the cursor stays put.
    let mut tokenizer = Tokenizer::new(r#""abc"#);
    let first = tokenizer.get_next_token();
    let second = tokenizer.get_next_token();
    assert_eq!(first, second);
}

#[test]
fn escaped_quotes_extend_the_literal() {
    let input = r#"" some \"fancy string \\""#;
    let tokens = tokenize(input);

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::QuotedString);
    assert_eq!(tokens[0].text, input);
}
