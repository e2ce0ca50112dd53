use hunkwise::DiffSession;
use hunkwise::markup::MarkupRenderer;
use hunkwise::markup::RenderConfig;
use hunkwise::markup::presets;
use std::env;
use std::fs;
use std::io;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Unified,
    Tango,
    Html,
    Bracket,
}

fn main() -> io::Result<()> {
    env_logger::init();

    let args = env::args().skip(1).collect::<Vec<_>>();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        print_help();
        return Ok(());
    }

    let mut format = Format::Unified;
    let mut keep_groups: Vec<usize> = Vec::new();
    let mut paths: Vec<&str> = Vec::new();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--format" => {
                let v = parse_string(&args, &mut i, "--format")?;
                format = match v.as_str() {
                    "unified" => Format::Unified,
                    "tango" => Format::Tango,
                    "html" => Format::Html,
                    "bracket" => Format::Bracket,
                    other => {
                        return Err(io::Error::new(
                            io::ErrorKind::InvalidInput,
                            format!("unknown format: {other}"),
                        ));
                    }
                };
            }
            "--keep-group" => {
                let v = parse_string(&args, &mut i, "--keep-group")?;
                let index = v.parse::<usize>().map_err(|_| {
                    io::Error::new(io::ErrorKind::InvalidInput, "invalid --keep-group value")
                })?;
                keep_groups.push(index);
            }
            other => {
                paths.push(other);
                i += 1;
            }
        }
    }

    let [old, new] = paths.as_slice() else {
        print_help();
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "expected exactly two files",
        ));
    };

    let source = fs::read_to_string(old)?;
    let changed = fs::read_to_string(new)?;
    let name = Path::new(old)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| old.to_string());

    let mut session = DiffSession::new(name, source, changed);
    log::info!(
        "{} edits in {} groups",
        session.total_edits(),
        session.group_count()
    );

    let diff = if keep_groups.is_empty() {
        session.unified_all()
    } else {
        for group in keep_groups {
            if !session.keep_group(group) {
                log::warn!("no group {group}, ignoring");
            }
        }
        session.unified_kept()
    }
    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    let config: Option<RenderConfig> = match format {
        Format::Unified => None,
        Format::Tango => Some(presets::tango()),
        Format::Html => Some(presets::html()),
        Format::Bracket => Some(presets::bracket()),
    };
    match config {
        None => print!("{diff}"),
        Some(config) => println!("{}", MarkupRenderer::from(config).render_diff(&diff)),
    }
    Ok(())
}

fn parse_string(args: &[String], i: &mut usize, flag: &str) -> io::Result<String> {
    let Some(v) = args.get(*i + 1) else {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("missing value for {flag}"),
        ));
    };
    *i += 2;
    Ok(v.clone())
}

fn print_help() {
    eprintln!(
        "Usage: cargo run -p hunkwise --example review -- [options] <old> <new>\n\n\
Options:\n\
  --format <unified|tango|html|bracket>  Output format (default: unified)\n\
  --keep-group <N>                       Keep group N and print only kept edits (repeatable)\n\
  -h, --help                             Show this help\n\n\
Logging goes through env_logger; try RUST_LOG=hunkwise_core=debug."
    );
}
