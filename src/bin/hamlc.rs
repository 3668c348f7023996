//! Command-line interface for hamlc
//! Compiles a template to JavaScript, or prints the line tree the parser recovered.
//!
//! Usage:
//!   hamlc [`<path>`] [--format js|tree|json|yaml] [--config `<file>`] [--doctypes]
//!
//! Reads standard input when no path is given. Set `RUST_LOG=hamlc=debug` for diagnostics.

use clap::{Arg, ArgAction, Command};
use hamlc::hamlc::config::Loader;
use hamlc::hamlc::formats::to_treeviz_str;
use hamlc::hamlc::transforms::standard::TEMPLATE_TO_TREE;
use hamlc::{Compiler, JavaScriptBackend};
use std::io::Read;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hamlc=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let matches = Command::new("hamlc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Compile HAML-like templates to JavaScript")
        .arg(
            Arg::new("path")
                .help("Template file (standard input when omitted)")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output: compiled JavaScript or the parsed line tree")
                .value_parser(["js", "tree", "json", "yaml"])
                .default_value("js"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("doctypes")
                .long("doctypes")
                .help("Expand `!!!` doctype shortcut lines")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let source = read_source(matches.get_one::<String>("path")).unwrap_or_else(|e| {
        eprintln!("Error reading template: {}", e);
        std::process::exit(1);
    });
    let format = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("js");

    let output = match format {
        "js" => compile(
            &source,
            matches.get_one::<String>("config"),
            matches.get_flag("doctypes"),
        ),
        other => show_tree(&source, other),
    };

    match output {
        Ok(text) => println!("{}", text.trim_end()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn read_source(path: Option<&String>) -> std::io::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut source = String::new();
            std::io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}

fn compile(source: &str, config: Option<&String>, doctypes: bool) -> Result<String, String> {
    let mut loader = Loader::new();
    if let Some(path) = config {
        loader = loader.with_file(path);
    }
    if doctypes {
        loader = loader
            .set_override("compiler.doctypes", true)
            .map_err(|e| e.to_string())?;
    }
    let config = loader.build().map_err(|e| e.to_string())?;

    let compiler = Compiler::with_options(JavaScriptBackend::new(config.javascript), config.compiler);
    compiler.convert(source).map_err(|e| e.to_string())
}

fn show_tree(source: &str, format: &str) -> Result<String, String> {
    let tree = TEMPLATE_TO_TREE
        .run(source.to_string())
        .map_err(|e| e.to_string())?;
    match format {
        "tree" => Ok(to_treeviz_str(&tree)),
        "json" => serde_json::to_string_pretty(&tree).map_err(|e| e.to_string()),
        "yaml" => serde_yaml::to_string(&tree).map_err(|e| e.to_string()),
        other => Err(format!("unknown format '{}'", other)),
    }
}
