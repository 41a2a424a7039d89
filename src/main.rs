use calc::cli::{generate_completions, AppConfig, Args, Commands, Mode};
use calc::diagnostic::render_diagnostics;
use calc::{Interpreter, ParsingError, Token};
use clap::Parser;
use owo_colors::OwoColorize;
use std::io::{self, BufRead, Write};
use std::path::Path;

fn main() {
    let args = Args::parse();

    if let Some(Commands::Complete { shell }) = args.command {
        generate_completions(shell);
        return;
    }

    let config = AppConfig::from_args(&args);

    verbose_log(&config, "Starting calc");

    if let Some(file) = &args.file {
        let source = match read_file(file) {
            Ok(s) => s,
            Err(e) => {
                error_message(&config, &e);
                std::process::exit(1);
            }
        };
        verbose_log(&config, &format!("Read {} bytes from {}", source.len(), file.display()));

        let file_name = file.display().to_string();
        if !run_source(&source, &file_name, &config) {
            std::process::exit(1);
        }
    } else if !args.exprs.is_empty() {
        for expr in &args.exprs {
            if !run_source(expr, "input", &config) {
                std::process::exit(1);
            }
        }
    } else {
        run_interactive_mode(&config);
    }
}

/// Runs every non-blank line of `source`, stopping at the first error.
/// Errors are rendered against the whole source so line numbers stay right.
fn run_source(source: &str, file_name: &str, config: &AppConfig) -> bool {
    let mut line_start = 0;

    for raw_line in source.split_inclusive('\n') {
        let offset = line_start;
        line_start += raw_line.len();

        let line = raw_line.trim_end_matches(['\n', '\r']);
        if line.trim().is_empty() {
            continue;
        }

        verbose_log(config, &format!("Running: {}", line));
        if let Err(e) = run_line(line, config) {
            report(source, file_name, &e.offset_by(offset), config);
            return false;
        }
    }

    true
}

fn run_line(line: &str, config: &AppConfig) -> Result<(), ParsingError> {
    match config.mode {
        Mode::Evaluate => {
            let result = Interpreter::new(line).expr()?;
            println!("{}", result);
        }
        Mode::Tokens => print_tokens(line)?,
    }
    Ok(())
}

fn print_tokens(line: &str) -> Result<(), ParsingError> {
    let mut interpreter = Interpreter::new(line);
    loop {
        let token = interpreter.next_token()?;
        println!("{}", token);
        if token == Token::Eof {
            return Ok(());
        }
    }
}

fn run_interactive_mode(config: &AppConfig) {
    verbose_log(config, "Entering interactive mode");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("calc> ");
        let _ = io::stdout().flush();

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                error_message(config, &format!("Error reading input: {}", e));
                break;
            }
            None => {
                println!();
                break;
            }
        };

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed == "exit" || trimmed == "quit" {
            break;
        }

        let line = line.trim_end_matches('\r');
        if let Err(e) = run_line(line, config) {
            report(line, "input", &e, config);
        }
    }
}

fn report(source: &str, file_name: &str, error: &ParsingError, config: &AppConfig) {
    let rendered = render_diagnostics(source, file_name, &[error.to_diagnostic()], config.color_enabled);
    eprint!("{}", rendered);
}

fn read_file(path: &Path) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", path.display(), e))
}

fn verbose_log(config: &AppConfig, message: &str) {
    if config.verbose {
        eprintln!("[calc:debug] {}", message);
    }
}

fn error_message(config: &AppConfig, message: &str) {
    if config.color_enabled {
        eprintln!("{}", message.red().bold());
    } else {
        eprintln!("{}", message);
    }
}
