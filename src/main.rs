//! notedown - Markdown note viewer with incremental heading highlighting

mod display;
mod error;
mod syntax;
mod theme;

use std::env;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process;

use display::TerminalSurface;
use error::Result;
use syntax::{markdown_table, RestyleDriver};
use theme::Theme;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// What the command line asked for
#[derive(Debug, PartialEq, Eq)]
enum CliCommand {
    Help,
    Version,
    Run {
        file: PathBuf,
        theme_path: Option<PathBuf>,
        no_color: bool,
    },
}

/// Parse arguments (excluding the program name)
fn parse_args(args: &[String]) -> std::result::Result<CliCommand, String> {
    let mut file: Option<PathBuf> = None;
    let mut theme_path: Option<PathBuf> = None;
    let mut no_color = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--no-color" => {
                no_color = true;
            }
            "--theme" => {
                i += 1;
                match args.get(i) {
                    Some(path) => theme_path = Some(PathBuf::from(path)),
                    None => return Err("--theme requires a file argument".to_string()),
                }
            }
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option '{}'", arg));
            }
            arg => {
                if file.is_some() {
                    return Err(format!("unexpected extra argument '{}'", arg));
                }
                file = Some(PathBuf::from(arg));
            }
        }
        i += 1;
    }

    match file {
        Some(file) => Ok(CliCommand::Run {
            file,
            theme_path,
            no_color,
        }),
        None => Err("no input file given".to_string()),
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    let (file, theme_path, no_color) = match parse_args(&args) {
        Ok(CliCommand::Help) => {
            print_usage();
            return Ok(());
        }
        Ok(CliCommand::Version) => {
            print_version();
            return Ok(());
        }
        Ok(CliCommand::Run {
            file,
            theme_path,
            no_color,
        }) => (file, theme_path, no_color),
        Err(message) => {
            eprintln!("Error: {}", message);
            process::exit(1);
        }
    };

    // The matcher table is validated here; a broken rule set aborts startup
    let driver = RestyleDriver::new(markdown_table()?);

    let theme = if no_color {
        Theme::plain()
    } else {
        match theme_path {
            Some(path) => Theme::load_from(&path)?,
            None => Theme::load(),
        }
    };

    let content = std::fs::read_to_string(&file)?;

    let stdout = io::stdout();
    let mut surface = TerminalSurface::new(stdout.lock(), theme);
    if stdout.is_terminal() {
        if let Ok((cols, _)) = crossterm::terminal::size() {
            surface = surface.with_width(cols as usize);
        }
    }

    surface.render(&content, &driver)?;
    Ok(())
}

fn print_usage() {
    println!("notedown {} - Markdown note viewer", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: notedown [OPTIONS] FILE");
    println!();
    println!("Options:");
    println!("  -h, --help      Show this help message");
    println!("  -V, --version   Show version information");
    println!("      --theme F   Load heading styles from a TOML theme file");
    println!("      --no-color  Disable all styling");
    println!();
    println!("Headings (lines starting with 1-3 '#') are colored by level;");
    println!("the '#' markers themselves are dimmed.");
}

fn print_version() {
    println!("notedown {}", env!("CARGO_PKG_VERSION"));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_basic() {
        let cmd = parse_args(&args(&["notes.md"])).unwrap();
        assert_eq!(
            cmd,
            CliCommand::Run {
                file: PathBuf::from("notes.md"),
                theme_path: None,
                no_color: false,
            }
        );
    }

    #[test]
    fn test_parse_options() {
        let cmd = parse_args(&args(&["--no-color", "--theme", "t.toml", "notes.md"])).unwrap();
        assert_eq!(
            cmd,
            CliCommand::Run {
                file: PathBuf::from("notes.md"),
                theme_path: Some(PathBuf::from("t.toml")),
                no_color: true,
            }
        );
    }

    #[test]
    fn test_parse_help_and_version() {
        assert_eq!(parse_args(&args(&["-h"])), Ok(CliCommand::Help));
        assert_eq!(parse_args(&args(&["--version", "notes.md"])), Ok(CliCommand::Version));
    }

    #[test]
    fn test_extra_file_rejected() {
        // A second positional argument is an error, not a silent override
        let err = parse_args(&args(&["a.md", "b.md"])).unwrap_err();
        assert!(err.contains("b.md"));
    }

    #[test]
    fn test_unknown_option_rejected() {
        let err = parse_args(&args(&["--frobnicate", "notes.md"])).unwrap_err();
        assert!(err.contains("--frobnicate"));
    }

    #[test]
    fn test_theme_requires_argument() {
        assert!(parse_args(&args(&["notes.md", "--theme"])).is_err());
    }

    #[test]
    fn test_no_file_rejected() {
        assert!(parse_args(&args(&[])).is_err());
        assert!(parse_args(&args(&["--no-color"])).is_err());
    }
}
