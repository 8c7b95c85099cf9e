//! Integration tests for the whole front end.
//!
//! These tests run source text through tokenization and parsing and check
//! the shape of the resulting tree, the way a consumer of the crate sees it.

use myco::{
    ast::types::{ForKind, LiteralKind},
    errors::errors::{ErrorImpl, ErrorPhase},
    lexer::tokens::TokenKind,
    parse, parse_source, tokenize, NodeKind,
};
use pretty_assertions::assert_eq;

const SAMPLE: &str = r#"# sample program
use ./lib/math.myco as math
let greeting = "hi\n";
let add(a: int, b: int) -> int:
    return a + b;
end
let square = x => x * x;
let config = {name: "demo", sizes: [1, 2, 3]};
config.name = "new";
config["key"] = 5;
/* stepped loop
   over evens */
for i in 0:10: 2:
    if i % 4 == 0 and i != 0:
        print(i, square(i));
    else:
        print(-i);
    end
end
switch greeting:
    case "hi": print(1); end
    default: print(0); end
end
try:
    math.risky(.5);
catch err:
    print(err);
end
"#;

fn statement(source: &str) -> String {
    let tree = parse_source(source).unwrap();
    tree.children[0].to_string()
}

#[test]
fn test_sample_program_tokenizes() {
    let tokens = tokenize(SAMPLE).unwrap();

    assert_eq!(tokens.last().unwrap().kind, TokenKind::EOF);
    assert_eq!(tokens.last().unwrap().line, 29);
}

#[test]
fn test_sample_program_parses() {
    let tree = parse_source(SAMPLE).unwrap();
    let kinds: Vec<NodeKind> = tree.children.iter().map(|node| node.kind.clone()).collect();

    assert_eq!(
        kinds,
        vec![
            NodeKind::ModuleUse,
            NodeKind::Let,
            NodeKind::FunctionDef {
                return_type: Some(myco::ast::types::TypeMarker::Int)
            },
            NodeKind::Let,
            NodeKind::Let,
            NodeKind::PropertyAssign,
            NodeKind::IndexAssign,
            NodeKind::For(ForKind::Step),
            NodeKind::Switch,
            NodeKind::Try,
        ]
    );
}

#[test]
fn test_sample_program_lines() {
    let tree = parse_source(SAMPLE).unwrap();
    let lines: Vec<u32> = tree.children.iter().map(|node| node.line).collect();

    assert_eq!(lines, vec![2, 3, 4, 7, 8, 9, 10, 13, 20, 24]);
}

#[test]
fn test_sample_program_details() {
    let tree = parse_source(SAMPLE).unwrap();

    assert_eq!(tree.children[1].to_string(), r#"(Let greeting "hi\n")"#);
    assert_eq!(
        tree.children[3].to_string(),
        "(Let square (Lambda (Parameter x) (* x x)))"
    );
    assert_eq!(
        tree.children[4].to_string(),
        r#"(Let config (ObjectLiteral (ObjectField name "demo") (ObjectField sizes (ArrayLiteral 1 2 3))))"#
    );
    assert_eq!(
        tree.children[7].to_string(),
        "(ForStep i 0 10 2 (Block (If (and (== (% i 4) 0) (!= i 0)) \
         (Block (Print i (Call square i))) (Block (Print (neg i))))))"
    );
    assert_eq!(
        tree.children[9].to_string(),
        "(Try err (Block (ExpressionStmt (Call (MemberAccess risky math) .5))) (Block (Print err)))"
    );
}

#[test]
fn test_sample_switch_clauses() {
    let tree = parse_source(SAMPLE).unwrap();

    assert_eq!(
        tree.children[8].to_string(),
        r#"(Switch greeting (Case "hi" (Block (Print 1))) (Default (Block (Print 0))))"#
    );
}

#[test]
fn test_round_trip_relex() {
    let tokens = tokenize(SAMPLE).unwrap();
    let joined = tokens
        .iter()
        .filter_map(|token| token.text.as_deref())
        .collect::<Vec<_>>()
        .join(" ");
    let relexed = tokenize(&joined).unwrap();

    let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();
    let relexed_kinds: Vec<TokenKind> = relexed.iter().map(|token| token.kind).collect();
    assert_eq!(kinds, relexed_kinds);
}

#[test]
fn test_multiplication_nests_right_of_addition() {
    let tree = parse_source("let r = 1 + 2 * 3;").unwrap();
    let expr = &tree.children[0].children[0];

    assert_eq!(expr.text(), "+");
    assert_eq!(expr.children[1].text(), "*");
    assert_eq!(expr.to_string(), "(+ 1 (* 2 3))");
}

#[test]
fn test_subtraction_is_left_associative() {
    assert_eq!(statement("let r = 1 - 2 - 3;"), "(Let r (- (- 1 2) 3))");
}

#[test]
fn test_property_assignment_chain() {
    let tree = parse_source("a.b.c = 1;").unwrap();
    let node = &tree.children[0];

    assert_eq!(node.kind, NodeKind::PropertyAssign);
    assert_eq!(node.children.len(), 4);
    assert_eq!(node.to_string(), "(PropertyAssign a b c 1)");
}

#[test]
fn test_property_assignment_depth_five_fails() {
    let error = parse_source("a.b.c.d.e = 1;").unwrap_err();

    assert_eq!(error.phase(), ErrorPhase::Parse);
    assert_eq!(
        error.get_impl(),
        &ErrorImpl::UnsupportedChainDepth { depth: 5, max: 4 }
    );
}

#[test]
fn test_lambda_versus_plain_expression() {
    let tree = parse_source("let f = x => x + 1; let g = x + 1; let h = g;").unwrap();

    let lambda = &tree.children[0].children[0];
    assert_eq!(lambda.kind, NodeKind::Lambda);
    assert_eq!(
        lambda
            .children
            .iter()
            .filter(|child| matches!(child.kind, NodeKind::Parameter { .. }))
            .count(),
        1
    );

    assert_eq!(tree.children[1].to_string(), "(Let g (+ x 1))");
    assert_eq!(tree.children[2].to_string(), "(Let h g)");
}

#[test]
fn test_for_step_disambiguation() {
    let stepped = parse_source("for i in 0:10: 1: print(i); end").unwrap();
    let node = &stepped.children[0];
    assert_eq!(node.kind, NodeKind::For(ForKind::Step));
    assert_eq!(node.children[2].text(), "1");

    let ranged = parse_source("for i in 0:10: print(i); end").unwrap();
    let node = &ranged.children[0];
    assert_eq!(node.kind, NodeKind::For(ForKind::Range));
    assert_eq!(node.to_string(), "(For i 0 10 (Block (Print i)))");
}

#[test]
fn test_unterminated_string_is_lex_error() {
    let error = tokenize("\"abc").unwrap_err();

    assert_eq!(error.phase(), ErrorPhase::Lex);
    assert_eq!(error.get_impl(), &ErrorImpl::UnterminatedString);
    assert_eq!(error.to_string(), "line 1: unterminated string literal");
}

#[test]
fn test_trailing_commas_rejected() {
    let array = parse_source("let a = [1, 2,];").unwrap_err();
    assert_eq!(
        array.get_impl(),
        &ErrorImpl::TrailingComma {
            context: "array literal".to_string()
        }
    );

    let object = parse_source("let o = {a: 1,};").unwrap_err();
    assert_eq!(
        object.get_impl(),
        &ErrorImpl::TrailingComma {
            context: "object literal".to_string()
        }
    );
}

#[test]
fn test_lex_error_stops_before_parse() {
    let error = parse_source("let a = 1;\nlet b = !a;").unwrap_err();

    assert_eq!(error.phase(), ErrorPhase::Lex);
    assert_eq!(error.get_line(), 2);
}

#[test]
fn test_parse_from_token_slice() {
    let tokens = tokenize("print(\"a\", 1.5, true);").unwrap();
    let tree = parse(&tokens).unwrap();
    let print = &tree.children[0];

    assert_eq!(print.kind, NodeKind::Print);
    assert_eq!(print.children[0].kind, NodeKind::Literal(LiteralKind::String));
    assert_eq!(print.children[1].kind, NodeKind::Literal(LiteralKind::Float));
    assert_eq!(print.children[2].kind, NodeKind::Literal(LiteralKind::Bool));
}

#[test]
fn test_long_operator_chain_prints() {
    let source = format!("let a = 1{};", " + 1".repeat(20_000));
    let tree = parse_source(&source).unwrap();
    let rendered = tree.to_string();

    assert!(rendered.starts_with("(Block (Let a (+ (+ (+ "));
    assert!(rendered.ends_with(" 1) 1) 1)))"));
    assert_eq!(rendered.matches('+').count(), 20_000);
}

#[test]
fn test_tree_release() {
    let mut tree = parse_source(SAMPLE).unwrap();
    assert!(tree.node_count() > 50);

    tree.free_tree();
    assert_eq!(tree.node_count(), 1);
    tree.free_tree();
    assert_eq!(tree.node_count(), 1);
}
