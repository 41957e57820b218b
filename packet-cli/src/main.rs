//! Command-line interface for packet
//! This binary converts packet documents (plain text, or JSON styled-run
//! records as produced by a container extractor) into structured formats.
//!
//! Usage:
//!   packet `<path>` [--from `<source>`] [--format `<format>`]

use clap::{Arg, Command};
use packet_babel::compiler_for;
use packet_parser::packet::source::{paragraphs_from_json, paragraphs_from_text, Paragraph};

fn main() {
    let matches = Command::new("packet")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for converting quiz bowl packets into structured formats")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the packet file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("from")
                .long("from")
                .short('s')
                .help("Input representation: 'json' (styled-run records), 'text', or 'auto' by extension")
                .default_value("auto"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format: 'json' or 'html'")
                .default_value("json"),
        )
        .get_matches();

    let path = matches.get_one::<String>("path").expect("path is required");
    let from = matches.get_one::<String>("from").unwrap();
    let format = matches.get_one::<String>("format").unwrap();
    handle_convert_command(path, from, format);
}

/// Handle the convert command
fn handle_convert_command(path: &str, from: &str, format: &str) {
    let input = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Cannot read '{}': {}", path, e);
        std::process::exit(1);
    });

    let paragraphs = load_paragraphs(path, from, &input);

    let packet = packet_parser::packet::parse_paragraphs(&paragraphs).unwrap_or_else(|e| {
        eprintln!("Parse error: {}", e);
        std::process::exit(1);
    });

    let compiler = compiler_for(format).unwrap_or_else(|e| {
        eprintln!("{}", e);
        eprintln!("Available formats: json, html");
        std::process::exit(1);
    });
    let output = compiler.compile(&packet).unwrap_or_else(|e| {
        eprintln!("Cannot compile packet: {}", e);
        std::process::exit(1);
    });

    print!("{}", output);
}

/// Pick the source adapter and build the paragraph sequence.
fn load_paragraphs(path: &str, from: &str, input: &str) -> Vec<Paragraph> {
    let kind = match from {
        "auto" => {
            if path.ends_with(".json") {
                "json"
            } else {
                "text"
            }
        }
        other => other,
    };
    match kind {
        "json" => paragraphs_from_json(input).unwrap_or_else(|e| {
            eprintln!("Cannot read '{}' as styled-run records: {}", path, e);
            std::process::exit(1);
        }),
        "text" => paragraphs_from_text(input),
        other => {
            eprintln!("Unknown input representation '{}'", other);
            eprintln!("Available representations: json, text, auto");
            std::process::exit(1);
        }
    }
}
