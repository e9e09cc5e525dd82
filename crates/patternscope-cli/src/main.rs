//! patternscope - overlay geometry and taxonomy tools
//!
//! Usage:
//!   patternscope render <patterns.json> [options]    Render stored patterns to SVG
//!   patternscope validate <patterns.json> [options]  Re-validate stored types
//!   patternscope normalize <label>... [--json]       Map labels to the taxonomy
//!   patternscope types                               List the taxonomy
//!   patternscope showcase [options]                  Sample page of shape classes

use std::env;

mod cli;

use patternscope::PatternType;

fn main() {
    // Coercion diagnostics and friends go to stderr, filtered by RUST_LOG.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage(&args[0]);
        std::process::exit(1);
    }

    match args[1].as_str() {
        "render" => cli::cmd_render(&args[2..]),
        "validate" => cli::cmd_validate(&args[2..]),
        "normalize" => cli::cmd_normalize(&args[2..]),
        "showcase" => cli::cmd_showcase(&args[2..]),
        "types" => cmd_types(),
        "help" | "--help" | "-h" => print_usage(&args[0]),
        other => {
            eprintln!("Unknown command: {}", other);
            print_usage(&args[0]);
            std::process::exit(1);
        }
    }
}

fn cmd_types() {
    println!("Pattern taxonomy:");
    for t in PatternType::all() {
        println!("  {:10}  {}", t.name(), t.description());
    }
}

fn print_usage(prog: &str) {
    eprintln!("patternscope - overlay geometry and taxonomy tools");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  {} render <patterns.json> [options]", prog);
    eprintln!("  {} validate <patterns.json> [options]", prog);
    eprintln!("  {} normalize <label>... [--json]", prog);
    eprintln!("  {} types", prog);
    eprintln!("  {} showcase [options]", prog);
    eprintln!();
    eprintln!("Render options:");
    eprintln!("  -o, --output <file>    Output file (- for stdout, default: stdout)");
    eprintln!("  -f, --format <fmt>     Output format: svg, json (default: svg)");
    eprintln!("  --width <px>           Viewport width (default: 390)");
    eprintln!("  --height <px>          Viewport height (default: 520)");
    eprintln!("  --style <file.yaml>    Stroke/background styling");
    eprintln!();
    eprintln!("Validate options:");
    eprintln!("  -o, --output <file>    Write healed records as JSON");
    eprintln!("  --json                 Report as JSON instead of a table");
    eprintln!();
    eprintln!("Showcase options:");
    eprintln!("  -o, --output <file>    Output file (- for stdout, default: stdout)");
    eprintln!("  --seed <n>             Jitter seed (default: 7)");
    eprintln!();
    eprintln!("Stdin support:");
    eprintln!("  Use '-' as the input file to read JSON from stdin:");
    eprintln!("  cat patterns.json | {} render - -o overlay.svg", prog);
}
