//! End-to-end parsing of simplecc programs with the built-in grammar

use rstest::rstest;
use simplecc::simplecc::diagnostics::ErrorManager;
use simplecc::simplecc::formats::sexp::to_sexp_str;
use simplecc::simplecc::grammar::{builtin, TokenKind};
use simplecc::simplecc::loader::SourceLoader;
use simplecc::simplecc::parsing::ParseErrorKind;
use simplecc::simplecc::testing::assert_cst;
use simplecc::simplecc::token::Location;
use std::path::PathBuf;

fn program_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("programs")
        .join(name)
}

fn load(name: &str) -> SourceLoader {
    SourceLoader::from_path(program_path(name)).expect("fixture program")
}

#[rstest]
#[case("minimal_main", "minimal_main.c")]
#[case("squares", "squares.c")]
#[case("control_flow", "control_flow.c")]
fn program_trees(#[case] snapshot: &str, #[case] file: &str) {
    let grammar = builtin::grammar();
    let tree = load(file).parse().expect("parse");
    insta::assert_snapshot!(snapshot, to_sexp_str(&tree, grammar));
}

#[test]
fn tree_leaves_are_the_token_stream() {
    let loader = load("squares.c");
    let tokens = loader.tokenize();
    let tree = loader.parse().expect("parse");

    let leaves = tree.leaves();
    assert_eq!(leaves.len(), tokens.len());
    for (leaf, token) in leaves.iter().zip(&tokens) {
        let terminal = *leaf;
        assert_eq!(terminal.kind(), token.kind);
        assert_eq!(leaf.location(), token.location);
        if token.kind == TokenKind::EndMarker {
            assert_eq!(leaf.text(), None);
        } else {
            assert_eq!(leaf.text(), Some(token.text.as_str()));
        }
    }
}

#[test]
fn identifiers_are_case_insensitive() {
    let grammar = builtin::grammar();
    let tree = SourceLoader::from_string("VOID Main() { }")
        .parse()
        .expect("parse");
    assert_cst(&tree, grammar)
        .symbol("program")
        .child_symbols(&["declaration", "ENDMARKER"])
        .child(0, |decl| {
            decl.child_symbols(&["type_name", "NAME", "OP", "OP", "compound_stmt"])
                .child(1, |main| main.terminal(TokenKind::Name).text("main").location(1, 5))
        })
        .child(1, |end| end.terminal(TokenKind::EndMarker).no_text().location(1, 0));
}

#[test]
fn end_marker_sits_on_last_line() {
    let tree = load("control_flow.c").parse().expect("parse");
    let leaves = tree.leaves();
    let end = leaves.last().expect("leaves");
    assert_eq!(end.location(), Location::new(10, 0));
}

#[rstest]
#[case::unclosed_params("unclosed_params.c", ParseErrorKind::UnexpectedToken, 1, 0, "")]
#[case::stray_character("stray_character.c", ParseErrorKind::LexicalMismatch, 3, 8, "$")]
#[case::unterminated_string("unterminated_string.c", ParseErrorKind::LexicalMismatch, 2, 9, "\"open);")]
fn malformed_programs(
    #[case] file: &str,
    #[case] kind: ParseErrorKind,
    #[case] line: usize,
    #[case] column: usize,
    #[case] text: &str,
) {
    let err = load(file).parse().expect_err("must not parse");
    let err = err.as_parse_error().expect("syntax error");
    assert_eq!(err.kind, kind);
    assert_eq!(err.location, Location::new(line, column));
    assert_eq!(err.text, text);
}

#[test]
fn syntax_error_is_rendered_with_source_context() {
    let loader = load("stray_character.c");
    let err = loader.parse().expect_err("must not parse");
    let err = err.as_parse_error().expect("syntax error");

    let mut manager = ErrorManager::default();
    let mut out = Vec::new();
    manager
        .report_parse_error(&mut out, err, Some(loader.source()))
        .expect("write");
    assert_eq!(manager.error_count(), 1);
    assert_eq!(
        String::from_utf8(out).expect("utf8"),
        "SyntaxError at 3:8: error token '$'\n     1 | void main() {\n     2 |   int x;\n>>   3 |   x = 1 $ 2;\n     4 | }\n"
    );
}

#[test]
fn end_of_input_error_is_rendered() {
    let loader = load("unclosed_params.c");
    let err = loader.parse().expect_err("must not parse");
    let err = err.as_parse_error().expect("syntax error");

    let mut out = Vec::new();
    ErrorManager::new("ParseError", 0)
        .report_parse_error(&mut out, err, Some(loader.source()))
        .expect("write");
    assert_eq!(
        String::from_utf8(out).expect("utf8"),
        "ParseError at 1:0: unexpected end of input\n>>   1 | int main(\n"
    );
}
