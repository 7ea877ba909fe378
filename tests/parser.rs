use spi::{
    ast::{BinaryOperator, Expr},
    error::{Error, SyntaxError},
    interpreter::{
        lexer::{Lexer, Token, TokenKind},
        parser::core::{MAX_NESTING_DEPTH, MAX_OPERATORS, Parser},
    },
    parse_line,
};

fn tree(src: &str) -> String {
    parse_line(src).unwrap_or_else(|e| panic!("`{src}` failed to parse: {e}"))
                   .to_string()
}

fn syntax_error(src: &str) -> SyntaxError {
    match parse_line(src) {
        Err(Error::Syntax(e)) => e,
        Err(e) => panic!("`{src}` failed with a non-syntax error: {e}"),
        Ok(expr) => panic!("`{src}` parsed as {expr}"),
    }
}

#[test]
fn literal() {
    assert_eq!(parse_line("42").unwrap(), Expr::Literal { value: 42, position: 0 });
    assert_eq!(parse_line("  42").unwrap(), Expr::Literal { value: 42, position: 2 });
}

#[test]
fn binary_nodes_carry_the_operator_position() {
    let expected = Expr::binary(Expr::Literal { value: 1, position: 0 },
                                BinaryOperator::Add,
                                Expr::Literal { value: 2, position: 4 },
                                2);
    assert_eq!(parse_line("1 + 2").unwrap(), expected);
    assert_eq!(expected.position(), 2);
}

#[test]
fn precedence() {
    assert_eq!(tree("1 + 2 * 3"), "(+ 1 (* 2 3))");
    assert_eq!(tree("1 * 2 + 3"), "(+ (* 1 2) 3)");
    assert_eq!(tree("1 - 6 / 3"), "(- 1 (/ 6 3))");
}

#[test]
fn associativity() {
    assert_eq!(tree("10 - 2 - 3"), "(- (- 10 2) 3)");
    assert_eq!(tree("8 / 2 / 2"), "(/ (/ 8 2) 2)");
    assert_eq!(tree("1 + 2 - 3 + 4"), "(+ (- (+ 1 2) 3) 4)");
}

#[test]
fn parentheses_leave_no_node() {
    assert_eq!(tree("(1 + 2) * 3"), "(* (+ 1 2) 3)");
    assert_eq!(tree("((7))"), "7");
    assert_eq!(tree("2 * (3 - (4 + 5))"), "(* 2 (- 3 (+ 4 5)))");
}

#[test]
fn missing_operand() {
    assert_eq!(syntax_error("3 +"),
               SyntaxError::UnexpectedToken { found:    TokenKind::EndOfInput,
                                              expected: vec![TokenKind::Integer, TokenKind::LeftParen],
                                              position: 3, });
    assert_eq!(syntax_error("* 3"),
               SyntaxError::UnexpectedToken { found:    TokenKind::Multiply,
                                              expected: vec![TokenKind::Integer, TokenKind::LeftParen],
                                              position: 0, });
}

#[test]
fn unclosed_parenthesis() {
    assert_eq!(syntax_error("(1 + 2"),
               SyntaxError::UnexpectedToken { found:    TokenKind::EndOfInput,
                                              expected: vec![TokenKind::RightParen],
                                              position: 6, });
    assert_eq!(syntax_error("(1 2)"),
               SyntaxError::UnexpectedToken { found:    TokenKind::Integer,
                                              expected: vec![TokenKind::RightParen],
                                              position: 3, });
}

#[test]
fn trailing_tokens_are_rejected() {
    assert_eq!(syntax_error("3 + 4 )"),
               SyntaxError::UnexpectedTrailingTokens { found:    TokenKind::RightParen,
                                                       position: 6, });
    assert_eq!(syntax_error("(1) (2)"),
               SyntaxError::UnexpectedTrailingTokens { found:    TokenKind::LeftParen,
                                                       position: 4, });
}

#[test]
fn empty_line_is_a_syntax_error() {
    assert_eq!(syntax_error("").position(), 0);
    assert_eq!(syntax_error("   ").position(), 3);
}

#[test]
fn lex_errors_pass_through() {
    assert!(matches!(parse_line("1 + @"), Err(Error::Lex(_))));
    assert!(matches!(parse_line("@"), Err(Error::Lex(_))));
}

#[test]
fn parser_holds_one_token_of_look_ahead() {
    let mut parser = Parser::new(Lexer::new("(5 $")).unwrap();
    assert_eq!(parser.current_token(), Token::LeftParen);
    assert_eq!(parser.current_position(), 0);

    assert_eq!(parser.eat(TokenKind::LeftParen).unwrap(), (Token::LeftParen, 0));
    assert_eq!(parser.current_token(), Token::Integer(5));

    // Consuming the integer pulls the invalid character.
    assert!(matches!(parser.eat(TokenKind::Integer), Err(Error::Lex(_))));
}

#[test]
fn eat_rejects_other_kinds() {
    let mut parser = Parser::new(Lexer::new("+")).unwrap();
    let err = parser.eat(TokenKind::Integer).unwrap_err();
    assert_eq!(err.to_string(), "Syntax error at position 0: Expected integer, found '+'.");
    assert_eq!(parser.current_token(), Token::Plus);
}

#[test]
fn nesting_limit() {
    let deepest = format!("{}1{}", "(".repeat(MAX_NESTING_DEPTH), ")".repeat(MAX_NESTING_DEPTH));
    assert_eq!(tree(&deepest), "1");

    let too_deep =
        format!("{}1{}", "(".repeat(MAX_NESTING_DEPTH + 1), ")".repeat(MAX_NESTING_DEPTH + 1));
    assert_eq!(syntax_error(&too_deep),
               SyntaxError::NestingTooDeep { limit:    MAX_NESTING_DEPTH,
                                             position: MAX_NESTING_DEPTH, });
}

#[test]
fn nesting_depth_is_per_group() {
    let wide = vec!["(1)"; MAX_NESTING_DEPTH + 10].join(" + ");
    assert!(parse_line(&wide).is_ok());
}

#[test]
fn operator_limit() {
    let largest = format!("{}1", "1+".repeat(MAX_OPERATORS));
    assert!(parse_line(&largest).is_ok());

    let too_large = format!("{}1", "1+".repeat(MAX_OPERATORS + 1));
    assert_eq!(syntax_error(&too_large),
               SyntaxError::ExpressionTooLarge { limit:    MAX_OPERATORS,
                                                 position: 2 * MAX_OPERATORS + 1, });
    assert_eq!(syntax_error(&too_large).to_string(),
               format!("Expression too large at position {}: A line may hold at most {MAX_OPERATORS} operators.",
                       2 * MAX_OPERATORS + 1));
}

#[test]
fn operator_limit_counts_the_whole_line() {
    let grouped = format!("({}1) * 2", "1+".repeat(MAX_OPERATORS - 1));
    assert!(parse_line(&grouped).is_ok());

    let grouped = format!("({}1) * 2 + 1", "1+".repeat(MAX_OPERATORS - 1));
    assert!(matches!(syntax_error(&grouped), SyntaxError::ExpressionTooLarge { .. }));
}
