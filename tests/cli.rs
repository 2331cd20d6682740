use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;

fn program_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("programs")
        .join(name)
}

#[test]
fn parse_prints_sexp_by_default() {
    let mut cmd = cargo_bin_cmd!("simplecc");
    cmd.arg("parse").arg(program_path("minimal_main.c"));

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("(program:\n  (declaration:\n"))
        .stdout(predicate::str::contains("(compound_stmt:\n      (OP: '{'),"))
        .stdout(predicate::str::ends_with("(ENDMARKER))\n"));
}

#[test]
fn parse_with_treeviz_format() {
    let mut cmd = cargo_bin_cmd!("simplecc");
    cmd.arg("parse")
        .arg(program_path("minimal_main.c"))
        .arg("--format")
        .arg("cst-treeviz");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("⧉ program"))
        .stdout(predicate::str::contains("▸ declaration"));
}

#[test]
fn parse_with_json_format() {
    let mut cmd = cargo_bin_cmd!("simplecc");
    cmd.arg("parse")
        .arg(program_path("squares.c"))
        .arg("-f")
        .arg("cst-json");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"symbol\": \"program\""));
}

#[test]
fn unknown_format_is_rejected() {
    let mut cmd = cargo_bin_cmd!("simplecc");
    cmd.arg("parse")
        .arg(program_path("minimal_main.c"))
        .arg("--format")
        .arg("cst-xml");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unknown format 'cst-xml'"));
}

#[test]
fn syntax_error_exits_with_diagnostic() {
    let mut cmd = cargo_bin_cmd!("simplecc");
    cmd.arg("parse").arg(program_path("stray_character.c"));

    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("SyntaxError at 3:8: error token '$'"))
        .stderr(predicate::str::contains(">>   3 |   x = 1 $ 2;"));
}

#[test]
fn config_file_changes_error_type() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = dir.path().join("simplecc.toml");
    fs::write(&config, "[diagnostics]\nerror_type = \"CompileError\"\ncontext_lines = 0\n")
        .expect("write config");

    let mut cmd = cargo_bin_cmd!("simplecc");
    cmd.arg("parse")
        .arg(program_path("unclosed_params.c"))
        .arg("--config")
        .arg(&config);

    cmd.assert().failure().stderr(predicate::eq(
        "CompileError at 1:0: unexpected end of input\n>>   1 | int main(\n",
    ));
}

#[test]
fn missing_source_file_fails() {
    let mut cmd = cargo_bin_cmd!("simplecc");
    cmd.arg("parse").arg(program_path("does_not_exist.c"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error: cannot read"));
}

#[test]
fn tokens_lists_one_token_per_line() {
    let mut cmd = cargo_bin_cmd!("simplecc");
    cmd.arg("tokens").arg(program_path("minimal_main.c"));

    cmd.assert().success().stdout(predicate::eq(
        "1:0     NAME        void\n\
         1:5     NAME        main\n\
         1:9     OP          (\n\
         1:10    OP          )\n\
         1:12    OP          {\n\
         1:14    OP          }\n\
         1:0     ENDMARKER\n",
    ));
}

#[test]
fn tokens_as_json() {
    let mut cmd = cargo_bin_cmd!("simplecc");
    cmd.arg("tokens")
        .arg(program_path("minimal_main.c"))
        .arg("--json");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"kind\": \"ENDMARKER\""));
}

#[test]
fn grammar_check_passes_for_builtin_tables() {
    let mut cmd = cargo_bin_cmd!("simplecc");
    cmd.arg("grammar").arg("--check");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("grammar simplecc is well formed"));
}

#[test]
fn grammar_dump_lists_nonterminals() {
    let mut cmd = cargo_bin_cmd!("simplecc");
    cmd.arg("grammar");

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with(
            "grammar simplecc (start: program, 27 nonterminals, 63 labels)\n",
        ))
        .stdout(predicate::str::contains("\nwhile_stmt  (first: 'while')\n"));
}

#[test]
fn parse_with_external_grammar_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let grammar = dir.path().join("repeat.json");
    fs::write(&grammar, simplecc::simplecc::testing::fixtures::REPEAT_GRAMMAR_JSON)
        .expect("write grammar");
    let source = dir.path().join("input.txt");
    fs::write(&source, "a a\n").expect("write source");

    let mut cmd = cargo_bin_cmd!("simplecc");
    cmd.arg("parse").arg(&source).arg("--grammar").arg(&grammar);

    cmd.assert().success().stdout(predicate::eq(
        "(s:\n  (NAME: a),\n  (s:\n    (NAME: a),\n    (ENDMARKER)))\n",
    ));
}

#[test]
fn list_formats_shows_registered_formats() {
    let mut cmd = cargo_bin_cmd!("simplecc");
    cmd.arg("list-formats");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("cst-sexp"))
        .stdout(predicate::str::contains("cst-treeviz"))
        .stdout(predicate::str::contains("cst-json"))
        .stdout(predicate::str::contains("cst-dot"));
}

#[test]
fn parse_with_dot_format() {
    let mut cmd = cargo_bin_cmd!("simplecc");
    cmd.arg("parse")
        .arg(program_path("minimal_main.c"))
        .arg("--format")
        .arg("cst-dot");

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("digraph \"Concrete Syntax Tree\" {\n"))
        .stdout(predicate::str::contains("\tNode0 [shape=record,label=\"{program}\"];\n"))
        .stdout(predicate::str::contains("label=\"{NAME|main}\""))
        .stdout(predicate::str::contains("label=\"{OP|\\{}\""))
        .stdout(predicate::str::ends_with("}\n"));
}
