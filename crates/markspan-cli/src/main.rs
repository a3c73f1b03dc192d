use std::env;
use std::fs;
use std::io::{self, Read};
use std::process;

use chrono::FixedOffset;
use markspan_core::{
    ConvertOptions, LongDateTime, MarkupEntity, MarkupKind, convert_with, emit_html,
    emit_html_sanitized,
};
use serde::Deserialize;

/// The document the upstream markup detector hands over.
#[derive(Debug, Deserialize)]
struct Input {
    text: String,
    #[serde(default)]
    markup: Vec<WireEntity>,
}

#[derive(Debug, Deserialize)]
struct WireEntity {
    typ: String,
    op: usize,
    #[serde(default)]
    oplen: usize,
    cl: usize,
    #[serde(default)]
    cllen: usize,
    url: Option<String>,
    repl: Option<String>,
    time: Option<String>,
    #[serde(default)]
    childs: Vec<WireEntity>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let mut input: Option<String> = None;
    let mut sanitized = false;
    let mut utc = false;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_usage();
                return;
            }
            "--sanitized" => sanitized = true,
            "--utc" => utc = true,
            _ => {
                if input.is_none() {
                    input = Some(arg);
                } else {
                    eprintln!("unexpected argument: {}", arg);
                    print_usage();
                    process::exit(2);
                }
            }
        }
    }

    let raw = match input {
        Some(path) => fs::read_to_string(&path).unwrap_or_else(|err| {
            eprintln!("failed to read {}: {}", path, err);
            process::exit(1);
        }),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .unwrap_or_else(|err| {
                    eprintln!("failed to read stdin: {}", err);
                    process::exit(1);
                });
            buffer
        }
    };

    let document: Input = serde_json::from_str(&raw).unwrap_or_else(|err| {
        eprintln!("invalid input document: {}", err);
        process::exit(1);
    });

    let time = LongDateTime {
        zone: if utc { FixedOffset::east_opt(0) } else { None },
    };
    let options = ConvertOptions { time: &time };

    let markup: Vec<MarkupEntity> = document.markup.iter().map(to_entity).collect();
    let tree = convert_with(&document.text, &markup, &options);

    let html = if sanitized {
        emit_html_sanitized(&tree)
    } else {
        emit_html(&tree)
    };

    print!("{}", html);
}

fn print_usage() {
    eprintln!("Usage: markspan-cli [--sanitized] [--utc] [input]");
    eprintln!("Reads {{\"text\": ..., \"markup\": [...]}} as JSON from a file or stdin and prints HTML.");
}

fn kind(typ: &str) -> MarkupKind {
    match typ {
        "bold" => MarkupKind::Bold,
        "italic" => MarkupKind::Italic,
        "underscore" => MarkupKind::Underscore,
        "strike" => MarkupKind::Strike,
        "code" => MarkupKind::Code,
        "codeblock" => MarkupKind::CodeBlock,
        "quote" => MarkupKind::Quote,
        "link" => MarkupKind::Link,
        "time" => MarkupKind::Time,
        // Anything the detector emits beyond the known set renders as the
        // escaped generic container.
        _ => MarkupKind::Unsafe,
    }
}

fn to_entity(wire: &WireEntity) -> MarkupEntity {
    MarkupEntity {
        kind: kind(&wire.typ),
        open: wire.op,
        open_len: wire.oplen,
        close: wire.cl,
        close_len: wire.cllen,
        url: wire.url.clone(),
        replacement: wire.repl.clone(),
        time: wire.time.clone(),
        children: wire.childs.iter().map(to_entity).collect(),
    }
}
