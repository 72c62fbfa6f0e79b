use std::{fs, path::PathBuf, process, time::Instant};

use algo::{
    Error,
    interpreter::{evaluator::Interpreter, lexer::Lexer, parser::Parser},
};
use clap::Parser as _;
use log::{LevelFilter, debug, info};

/// algo runs programs written in a small, pseudocode-like teaching language.
#[derive(clap::Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The program to run.
    #[arg(default_value = "script.algo")]
    file: PathBuf,

    /// Log more about each stage to stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print the final symbol table to stderr after the run.
    #[arg(short, long)]
    symbols: bool,

    /// Print the elapsed wall-clock time to stderr.
    #[arg(short, long)]
    time: bool,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = init_logging(args.verbose) {
        eprintln!("Failed to initialise logging: {e}");
    }

    let source = fs::read_to_string(&args.file).unwrap_or_else(|e| {
                                                   eprintln!("Failed to read the input file '{}': {e}",
                                                             args.file.display());
                                                   process::exit(1);
                                               });

    info!("running '{}' ({} bytes)", args.file.display(), source.len());
    let start = Instant::now();
    let result = execute(&source, args.symbols);

    if args.time {
        eprintln!("Execution time: {}ms", start.elapsed().as_millis());
    }

    if let Err(e) = result {
        debug!("run failed with code {}", e.code());
        eprintln!("{e}");
        process::exit(1);
    }
}

fn execute(source: &str, dump_symbols: bool) -> Result<(), Error> {
    let mut interpreter = Interpreter::new(Parser::new(Lexer::new(source))?);
    let result = interpreter.interpret();

    if dump_symbols {
        eprint!("{}", interpreter.symbols());
    }

    result
}

/// Installs a dispatcher that writes log records to stderr. Standard output
/// is left to `PRINT`.
fn init_logging(verbosity: u8) -> Result<(), log::SetLoggerError> {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    fern::Dispatch::new().format(|out, message, record| {
                             out.finish(format_args!("[{:<5}] [{}] {}",
                                                     record.level(),
                                                     record.target(),
                                                     message));
                         })
                         .level(level)
                         .chain(std::io::stderr())
                         .apply()
}
