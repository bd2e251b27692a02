//! Lectern CLI entry point.

use lectern_runtime::{DEFAULT_QUESTION_FILE, SessionConfig, run_session};
use std::env;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    question_file: Option<PathBuf>,
    log_path: Option<PathBuf>,
    report_dir: Option<PathBuf>,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "--log" => {
                i += 1;
                if i >= args.len() {
                    return Err("--log requires a path".into());
                }
                config.log_path = Some(PathBuf::from(&args[i]));
            }
            "--reports" => {
                i += 1;
                if i >= args.len() {
                    return Err("--reports requires a directory".into());
                }
                config.report_dir = Some(PathBuf::from(&args[i]));
            }
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}").into());
            }
            path => {
                if config.question_file.is_some() {
                    return Err(format!("unexpected argument: {path}").into());
                }
                config.question_file = Some(PathBuf::from(path));
            }
        }
        i += 1;
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("lectern {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    print_banner();

    let question_file = match config.question_file {
        Some(path) => {
            println!("Using your file: {}", path.display());
            path
        }
        None => prompt_for_question_file()?,
    };

    let mut session = SessionConfig::new().with_question_file(question_file);
    if let Some(path) = config.log_path {
        session = session.with_log_path(path);
    }
    if let Some(dir) = config.report_dir {
        session = session.with_report_dir(dir);
    }

    run_session(&session)?;

    println!("Game ended. Thanks for playing!");
    Ok(())
}

/// Asks for a question file path; empty input selects the shipped default.
fn prompt_for_question_file() -> Result<PathBuf, Box<dyn std::error::Error>> {
    println!("Please type the path to your question file (XML, JSON, or CSV)");
    print!("Or just press Enter to use the default file: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    let input = input.trim();

    if input.is_empty() {
        let path = PathBuf::from(DEFAULT_QUESTION_FILE);
        println!("Using default file: {}", path.display());
        Ok(path)
    } else {
        let path = PathBuf::from(input);
        println!("Using your file: {}", path.display());
        Ok(path)
    }
}

fn print_banner() {
    println!("===================================================");
    println!("                   L E C T E R N");
    println!("===================================================");
}

fn print_help() {
    println!(
        "\x1b[1mLectern\x1b[0m - Multiplayer quiz game for the terminal

\x1b[1mUSAGE:\x1b[0m
    lectern [OPTIONS] [QUESTION_FILE]

\x1b[1mARGUMENTS:\x1b[0m
    [QUESTION_FILE]    Question resource to load (.csv, .json, or .xml);
                       prompted for interactively when omitted

\x1b[1mOPTIONS:\x1b[0m
    -h, --help         Print help information
    -V, --version      Print version information
    --log <PATH>       Audit log to append to (default: game_log.csv)
    --reports <DIR>    Directory for end-of-game reports (default: .)

\x1b[1mEXAMPLES:\x1b[0m
    lectern                        Prompt for a question file, then play
    lectern data/questions.csv     Play with the CSV question set
    lectern --log audit.csv        Append audit events to audit.csv
    lectern --reports out          Write reports into out/

\x1b[1mGAME INPUT:\x1b[0m
    quit                 End the game at a category prompt
    Ctrl+D               Quit
    Ctrl+C               Quit

For more information, visit https://github.com/ndouglas/lectern"
    );
}
