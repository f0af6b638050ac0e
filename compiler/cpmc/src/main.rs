//! C+- front-end CLI.

use cpmc::{init_tracing, run_file, Command, DriverConfig, DriverError};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("error: no input file");
        eprintln!("Usage: cpm <file.c>");
        std::process::exit(1);
    }

    let command = &args[1];

    match command.as_str() {
        "segment" => run_command(Command::Segment, &args[2..]),
        "lex" => run_command(Command::Lex, &args[2..]),
        "help" | "--help" | "-h" => print_usage(),
        "version" | "--version" | "-V" => {
            println!("cpm {}", env!("CARGO_PKG_VERSION"));
        }
        _ => run_command(Command::Segment, &args[1..]),
    }
}

/// Parse `<file> [flags]` (in any order) and run.
fn run_command(command: Command, args: &[String]) {
    let mut config = DriverConfig::new(command);
    let mut file_path = None;

    for arg in args {
        if arg.starts_with('-') {
            if !config.apply_flag(arg) {
                eprintln!("error: unknown flag '{arg}'");
                eprintln!();
                let _ = DriverConfig::write_flags(&mut std::io::stderr());
                std::process::exit(1);
            }
        } else if file_path.is_none() {
            file_path = Some(arg.as_str());
        } else {
            eprintln!("error: unexpected argument '{arg}'");
            std::process::exit(1);
        }
    }

    let Some(path) = file_path else {
        eprintln!("error: missing file path");
        eprintln!("Usage: cpm [segment|lex] <file.c> [flags]");
        std::process::exit(1);
    };

    let mut stdout = std::io::stdout().lock();
    if let Err(err) = run_file(&config, path, &mut stdout) {
        drop(stdout);
        match err {
            DriverError::Lex(diagnostic) => eprintln!("{diagnostic}"),
            other => eprintln!("error: {other}"),
        }
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("cpm: C+- front end");
    println!();
    println!("Usage: cpm <command> [options]");
    println!();
    println!("Commands:");
    println!("  <file.c>                 Same as `segment <file.c>`");
    println!("  segment <file.c>         Group tokens into expressions and print them");
    println!("  lex <file.c>             Print the raw token stream");
    println!("  help                     Show this help message");
    println!("  version                  Show version information");
    println!();
    let _ = DriverConfig::write_flags(&mut std::io::stdout());
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=cpm_segment=trace) for a trace on stderr.");
}
