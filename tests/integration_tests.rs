//! Integration tests for the lexer → parser pipeline.
//!
//! These tests go through the public API only, the way an embedding shell
//! would: one fresh lexer and parser per input.

use exprlang::{
    ast::ast::{Expr, Stmt},
    lexer::lexer::{tokenize, Lexer},
    lexer::tokens::TokenKind,
    parser::parser::{parse, Parser},
    render_error,
};

#[test]
fn test_parse_program_end_to_end() {
    let source = "let x = 5 * 2;\nlet y = -x + 10;\nreturn x == y;\nx / y";
    let mut parser = Parser::new(Lexer::with_file(source.to_string(), "test.lang".to_string()));
    let program = parser.parse_program();

    assert!(parser.errors().is_empty(), "{:?}", parser.errors());
    assert_eq!(program.len(), 4);
    assert_eq!(
        program.to_string(),
        "let x = (5 * 2);let y = ((-x) + 10);return (x == y);(x / y)"
    );
}

#[test]
fn test_each_line_gets_fresh_parser() {
    let lines = ["let a = 1;", "a + 1", "let b 2;"];
    let error_counts: Vec<usize> = lines
        .iter()
        .map(|line| {
            let mut parser = Parser::new(Lexer::new(line.to_string()));
            parser.parse_program();
            parser.errors().len()
        })
        .collect();

    assert_eq!(error_counts, vec![0, 0, 1]);
}

#[test]
fn test_diagnostics_do_not_stop_parsing() {
    let (program, errors) = parse(Lexer::new("let 5; !; foo; let x = 9999999999999999999; bar".to_string()));

    assert_eq!(errors.len(), 3);
    let names: Vec<&str> = errors.iter().map(|error| error.get_error_name()).collect();
    assert_eq!(names, vec!["UnexpectedToken", "NoPrefixParseFn", "IntegerParseError"]);

    let kept: Vec<String> = program.iter().map(|stmt| stmt.to_string()).collect();
    assert_eq!(kept, vec!["foo".to_string(), "bar".to_string()]);
}

#[test]
fn test_tree_shape_matches_precedence() {
    let (program, errors) = parse(Lexer::new("1 * 2 + 3 * 4".to_string()));
    assert!(errors.is_empty());

    let Stmt::Expression(stmt) = &program.statements[0] else {
        panic!("Expected expression statement");
    };
    let Expr::Infix(sum) = &stmt.expression else {
        panic!("Expected infix expression");
    };
    assert_eq!(sum.operator, "+");
    assert!(matches!(sum.left.as_ref(), Expr::Infix(left) if left.operator == "*"));
    assert!(matches!(sum.right.as_ref(), Expr::Infix(right) if right.operator == "*"));
}

#[test]
fn test_tokenize_matches_lexer_pull() {
    let source = "let x = !y;".to_string();
    let pulled: Vec<TokenKind> = Lexer::new(source.clone()).map(|token| token.kind).collect();
    let collected: Vec<TokenKind> = tokenize(source, None).into_iter().map(|token| token.kind).collect();

    assert_eq!(pulled, collected);
    assert_eq!(collected.last(), Some(&TokenKind::EOF));
}

#[test]
fn test_render_error() {
    let source = "let x 5;";
    let (_, errors) = parse(Lexer::new(source.to_string()));

    assert_eq!(
        render_error(&errors[0], source),
        "Error: UnexpectedToken (expected `Assignment`, found `Integer`)\n\
         -> shell\n  |\n1 | let x 5;\n  | ------^\n"
    );
}

#[test]
fn test_render_error_on_later_line() {
    let source = "let a = 1;\n  a + @;\n";
    let (_, errors) = parse(Lexer::with_file(source.to_string(), "main.lang".to_string()));

    assert_eq!(errors.len(), 1);
    assert_eq!(
        render_error(&errors[0], source),
        "Error: NoPrefixParseFn\n-> main.lang\n  |\n2 | a + @;\n  | ----^\n"
    );
}
