// gridcell-cli/src/main.rs
// Interactive command-line front end for gridcell.
//
// A thin REPL over gridcell-core's Sheet. Commands:
//
//   set A1 =SUM(A1:A3)    assign a cell
//   clear A1              clear a cell back to empty
//   get A1                print a cell's text and value
//   values                render the used region as evaluated values
//   texts                 render the used region as display text
//   help                  list commands
//   quit                  exit

use clap::Parser;
use gridcell_core::{Position, Sheet};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

#[derive(Parser)]
#[command(name = "gridcell")]
#[command(author, version, about = "Interactive gridcell spreadsheet REPL", long_about = None)]
struct Cli {
    /// Run a single command non-interactively instead of starting the REPL.
    #[arg(short, long)]
    command: Option<String>,

    /// Render `get` results as JSON instead of tab-separated text.
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let mut sheet = Sheet::new();

    if let Some(command) = cli.command {
        run_line(&mut sheet, &command, cli.json);
        return;
    }

    let mut rl = DefaultEditor::new().expect("failed to initialize line editor");
    println!("gridcell — type `help` for commands, `quit` to exit.");
    loop {
        match rl.readline("gridcell> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);
                if trimmed == "quit" || trimmed == "exit" {
                    break;
                }
                run_line(&mut sheet, trimmed, cli.json);
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("readline error: {e}");
                break;
            }
        }
    }
}

fn run_line(sheet: &mut Sheet, line: &str, json: bool) {
    let mut parts = line.splitn(2, char::is_whitespace);
    let cmd = parts.next().unwrap_or("");
    let rest = parts.next().unwrap_or("").trim();

    match cmd {
        "help" => print_help(),
        "set" => {
            let mut args = rest.splitn(2, char::is_whitespace);
            let Some(reference) = args.next().filter(|s| !s.is_empty()) else {
                eprintln!("usage: set <cell> <text>");
                return;
            };
            let text = args.next().unwrap_or("");
            match parse_position(reference) {
                Some(pos) => match sheet.set_cell(pos, text) {
                    Ok(()) => {}
                    Err(e) => eprintln!("error: {e}"),
                },
                None => eprintln!("error: invalid cell reference `{reference}`"),
            }
        }
        "clear" => match parse_position(rest) {
            Some(pos) => {
                if let Err(e) = sheet.clear_cell(pos) {
                    eprintln!("error: {e}");
                }
            }
            None => eprintln!("error: invalid cell reference `{rest}`"),
        },
        "get" => match parse_position(rest) {
            Some(pos) => match (sheet.get_text(pos), sheet.get_value(pos)) {
                (Ok(Some(text)), Ok(Some(value))) => {
                    if json {
                        match serde_json::to_string(&value) {
                            Ok(rendered) => println!(r#"{{"text":{text:?},"value":{rendered}}}"#),
                            Err(e) => eprintln!("error: {e}"),
                        }
                    } else {
                        println!("{text}\t{value}");
                    }
                }
                (Ok(_), Ok(_)) => println!("{}", if json { "null" } else { "(empty)" }),
                (Err(e), _) | (_, Err(e)) => eprintln!("error: {e}"),
            },
            None => eprintln!("error: invalid cell reference `{rest}`"),
        },
        "values" => {
            let mut out = String::new();
            if sheet.print_values(&mut out).is_ok() {
                print!("{out}");
            }
        }
        "texts" => {
            let mut out = String::new();
            if sheet.print_texts(&mut out).is_ok() {
                print!("{out}");
            }
        }
        other => eprintln!("unrecognized command `{other}` — try `help`"),
    }
}

fn parse_position(reference: &str) -> Option<Position> {
    Position::from_a1(reference.trim())
}

fn print_help() {
    println!(
        "commands:\n\
         \u{20}set <cell> <text>   assign a cell, e.g. `set B2 =A2/A1`\n\
         \u{20}clear <cell>        clear a cell back to empty\n\
         \u{20}get <cell>          print a cell's text and value\n\
         \u{20}values              render the used region as evaluated values\n\
         \u{20}texts               render the used region as display text\n\
         \u{20}quit                exit"
    );
}
