//! Command-line interface for simplecc
//! Tokenizes and parses simplecc source files and inspects grammar tables.
//!
//! Usage:
//!   simplecc parse `<path>` [--format `<format>`] [--grammar `<tables>`] [--config `<file>`]
//!   simplecc tokens `<path>` [--json]
//!   simplecc grammar [--grammar `<tables>`] [--check]
//!   simplecc list-formats
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (e.g. `RUST_LOG=trace`).

use clap::{Arg, ArgAction, ArgMatches, Command};
use simplecc::simplecc::config::{Loader, SimpleccConfig};
use simplecc::simplecc::diagnostics::ErrorManager;
use simplecc::simplecc::formats::{
    grammar_dump, tokens::format_tokens, FormatRegistry, TreevizFormatter,
};
use simplecc::simplecc::grammar::{builtin, Grammar};
use simplecc::simplecc::loader::{LoaderError, SourceLoader};
use std::borrow::Cow;
use std::io;
use std::process;

fn main() {
    env_logger::init();

    let matches = Command::new("simplecc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Table-driven parser for the simplecc teaching language")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("parse")
                .about("Parse a source file and print its concrete syntax tree")
                .arg(path_arg())
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (see list-formats); defaults to the configured one"),
                )
                .arg(grammar_arg())
                .arg(config_arg()),
        )
        .subcommand(
            Command::new("tokens")
                .about("Print the token stream of a source file")
                .arg(path_arg())
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print tokens as JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("grammar")
                .about("Dump grammar tables")
                .arg(grammar_arg())
                .arg(
                    Arg::new("check")
                        .long("check")
                        .help("Verify the tables are well formed instead of dumping them")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("list-formats").about("List available tree formats"))
        .get_matches();

    match matches.subcommand() {
        Some(("parse", parse_matches)) => handle_parse_command(parse_matches),
        Some(("tokens", tokens_matches)) => handle_tokens_command(tokens_matches),
        Some(("grammar", grammar_matches)) => handle_grammar_command(grammar_matches),
        Some(("list-formats", _)) => handle_list_formats_command(),
        _ => unreachable!(),
    }
}

fn path_arg() -> Arg {
    Arg::new("path")
        .help("Path to the simplecc source file")
        .required(true)
        .index(1)
}

fn grammar_arg() -> Arg {
    Arg::new("grammar")
        .long("grammar")
        .short('g')
        .help("Grammar tables (.json, .yaml, .yml) to use instead of the built-in grammar")
}

fn config_arg() -> Arg {
    Arg::new("config")
        .long("config")
        .short('c')
        .help("Configuration file layered over the defaults")
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("Error: {}", message);
    process::exit(1);
}

fn load_config(matches: &ArgMatches) -> SimpleccConfig {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader
            .set_override("output.format", format.as_str())
            .unwrap_or_else(|e| fail(e));
    }
    if let Some(grammar) = matches.get_one::<String>("grammar") {
        loader = loader
            .set_override("grammar.path", grammar.as_str())
            .unwrap_or_else(|e| fail(e));
    }
    loader.build().unwrap_or_else(|e| fail(e))
}

fn resolve_grammar(path: Option<&std::path::Path>) -> Cow<'static, Grammar> {
    match path {
        Some(path) => Cow::Owned(Grammar::from_path(path).unwrap_or_else(|e| fail(e))),
        None => Cow::Borrowed(builtin::load().unwrap_or_else(|e| fail(e))),
    }
}

fn handle_parse_command(matches: &ArgMatches) {
    let config = load_config(matches);
    let grammar = resolve_grammar(config.grammar.path.as_deref());

    let mut registry = FormatRegistry::with_defaults();
    registry.register(TreevizFormatter::new(
        config.treeviz.show_line_numbers,
        config.treeviz.max_label_chars,
    ));
    if !registry.has(&config.output.format) {
        fail(format!(
            "unknown format '{}' (available: {})",
            config.output.format,
            registry.list_formats().join(", ")
        ));
    }

    let path = matches
        .get_one::<String>("path")
        .unwrap_or_else(|| fail("missing source path"));
    let loader = SourceLoader::from_path(path).unwrap_or_else(|e| fail(e));

    match loader.parse_with(&grammar) {
        Ok(tree) => {
            let output = registry
                .format(&tree, &grammar, &config.output.format)
                .unwrap_or_else(|e| fail(e));
            if output.ends_with('\n') {
                print!("{}", output);
            } else {
                println!("{}", output);
            }
        }
        Err(LoaderError::Parse(err)) => {
            let mut manager = ErrorManager::new(
                config.diagnostics.error_type.clone(),
                config.diagnostics.context_lines,
            );
            if let Err(e) = manager.report_parse_error(&mut io::stderr(), &err, Some(loader.source())) {
                fail(e);
            }
            process::exit(1);
        }
        Err(e) => fail(e),
    }
}

fn handle_tokens_command(matches: &ArgMatches) {
    let path = matches
        .get_one::<String>("path")
        .unwrap_or_else(|| fail("missing source path"));
    let tokens = SourceLoader::from_path(path)
        .unwrap_or_else(|e| fail(e))
        .tokenize();
    let output = format_tokens(&tokens, matches.get_flag("json")).unwrap_or_else(|e| fail(e));
    print!("{}", output);
}

fn handle_grammar_command(matches: &ArgMatches) {
    let path = matches.get_one::<String>("grammar").map(std::path::Path::new);
    let grammar = resolve_grammar(path);

    if !matches.get_flag("check") {
        print!("{}", grammar_dump::dump_grammar(&grammar));
        return;
    }

    let issues = grammar.check_well_formed();
    if issues.is_empty() {
        println!("grammar {} is well formed", grammar.name());
        return;
    }
    for issue in &issues {
        eprintln!("{}", issue);
    }
    eprintln!("{} issue(s) found", issues.len());
    process::exit(1);
}

fn handle_list_formats_command() {
    println!("Available formats:\n");
    for (name, description) in FormatRegistry::with_defaults().describe_formats() {
        println!("  {}", name);
        println!("    {}", description);
    }
}
