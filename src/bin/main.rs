use clap::{Parser, Subcommand};
use crossterm::style::Stylize;
use serde::Serialize;
use std::error::Error;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process;
use translit_core::loader::load_user_exceptions;
use translit_core::persistence::{load_compiled, save_compiled, save_user_exceptions};
use translit_core::{Lexicon, LexiconPaths, Transliterator, TransliteratorOptions};

#[derive(Parser)]
#[command(name = "translit", about = "Latin ⇄ Georgian transliteration")]
struct Cli {
    /// Directory holding words.dat, shis.dat, chis.dat, dzis.dat and exceptions.dat
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,
    /// Load a compiled lexicon snapshot instead of the word lists
    #[arg(long)]
    snapshot: Option<PathBuf>,
    /// Translate Georgian to Latin instead
    #[arg(long)]
    reverse: bool,
    /// Print one JSON object per line
    #[arg(long)]
    json: bool,
    /// Do not emit a space after the last word
    #[arg(long)]
    no_trailing_space: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Compile the word lists into a snapshot file
    Compile {
        /// Path of the snapshot to write
        output: PathBuf,
    },
}

#[derive(Serialize)]
struct Record<'a> {
    input: &'a str,
    output: &'a str,
}

fn main() {
    translit_core::logging::init();
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("{} {}", "error:".red().bold(), e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let paths = LexiconPaths::in_dir(&cli.data_dir);

    if let Some(Command::Compile { output }) = &cli.command {
        let lexicon = Lexicon::load(&paths)?;
        save_compiled(&lexicon, output)?;
        println!("Snapshot written to '{}'", output.display());
        return Ok(());
    }

    let lexicon = match &cli.snapshot {
        Some(path) => load_compiled(path)?,
        None => Lexicon::load(&paths)?,
    };
    let user_exceptions = load_user_exceptions(&paths.user_exceptions)?;
    let mut translator = Transliterator::from_lexicon(lexicon, user_exceptions)
        .with_options(TransliteratorOptions { trailing_separator: !cli.no_trailing_space });

    run_loop(&mut translator, cli, &paths.user_exceptions)
}

fn run_loop(
    translator: &mut Transliterator,
    cli: &Cli,
    exceptions_path: &Path,
) -> Result<(), Box<dyn Error>> {
    let interactive = io::stdin().is_terminal();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    if interactive {
        println!("{}", "Georgian transliterator. Empty line or ':exit' to quit.".bold());
        println!(
            "{}",
            "Commands: :add <latin> <georgian>, :rm <latin>, :lat <text>, :save".dark_grey()
        );
        prompt(&mut stdout)?;
    }

    for line in stdin.lock().lines() {
        let input = line?;
        if input.is_empty() {
            break;
        }

        match input.split_once(' ').unwrap_or((input.as_str(), "")) {
            (":exit", _) => break,
            (":add", rest) => match rest.split_once(' ') {
                Some((key, value)) if !key.is_empty() && !value.is_empty() => {
                    translator.add_exception(key, value);
                    status(&format!("added '{key}' -> '{value}'"));
                }
                _ => status("usage: :add <latin> <georgian>"),
            },
            (":rm", key) if !key.is_empty() => {
                translator.remove_exception(key);
                status(&format!("removed '{key}'"));
            }
            (":lat", text) => emit(&mut stdout, cli.json, text, &translator.to_latin(text))?,
            (":save", _) => {
                match save_user_exceptions(translator.user_exceptions(), exceptions_path) {
                    Ok(()) => status(&format!("saved to '{}'", exceptions_path.display())),
                    Err(e) => eprintln!("{}", format!("not saved: {e}").red()),
                }
            }
            _ => {
                let output = if cli.reverse {
                    translator.to_latin(&input)
                } else {
                    translator.to_native(&input)
                };
                emit(&mut stdout, cli.json, &input, &output)?;
            }
        }

        if interactive {
            prompt(&mut stdout)?;
        }
    }
    Ok(())
}

fn emit(
    stdout: &mut io::Stdout,
    json: bool,
    input: &str,
    output: &str,
) -> Result<(), Box<dyn Error>> {
    if json {
        writeln!(stdout, "{}", serde_json::to_string(&Record { input, output })?)?;
    } else {
        writeln!(stdout, "{output}")?;
    }
    Ok(())
}

fn status(message: &str) {
    eprintln!("{}", message.green());
}

fn prompt(stdout: &mut io::Stdout) -> io::Result<()> {
    write!(stdout, "{} ", ">".dark_grey())?;
    stdout.flush()
}
