use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use pinpoint_core::annotator::{key_action, Annotator, ClickOutcome, KeyAction};
use pinpoint_core::geometry::PixelPos;
use pinpoint_core::io::image_io::{load_image, save_image};
use tracing::debug;

use super::load_config;
use crate::summary::print_export_report;

#[derive(Args)]
pub struct SessionArgs {
    /// Input image
    pub file: PathBuf,

    /// Config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Frame written after every change
    #[arg(short, long, default_value = "annotated.png")]
    pub output: PathBuf,
}

const HELP: &str = "\
Commands:
  click X Y   first click sets the origin, later clicks add points
  s           set scale factor
  p           set unit per pixel
  h           toggle coordinate labels
  c           clear points
  r           reset origin and points
  q           quit and print results";

/// One line of session input.
#[derive(Debug, PartialEq)]
enum Input {
    Click(PixelPos),
    Key(char),
    Blank,
    Unknown(String),
}

fn parse_input(line: &str) -> Input {
    let mut words = line.split_whitespace();
    let Some(first) = words.next() else {
        return Input::Blank;
    };
    let rest: Vec<&str> = words.collect();

    match (first.to_ascii_lowercase().as_str(), rest.as_slice()) {
        ("click", [x, y]) => match (x.parse(), y.parse()) {
            (Ok(x), Ok(y)) => Input::Click(PixelPos::new(x, y)),
            _ => Input::Unknown(line.trim().to_string()),
        },
        ("quit" | "esc", []) => Input::Key('q'),
        (word, []) if word.chars().count() == 1 => word
            .chars()
            .next()
            .map_or(Input::Blank, Input::Key),
        _ => Input::Unknown(line.trim().to_string()),
    }
}

fn prompt(text: &str) -> io::Result<()> {
    print!("{text}");
    io::stdout().flush()
}

fn save_frame(annotator: &Annotator, path: &Path) -> Result<()> {
    save_image(annotator.frame(), path)?;
    debug!(path = %path.display(), "frame saved");
    Ok(())
}

pub fn run(args: &SessionArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let base = load_image(&args.file)?;
    let mut annotator = Annotator::new(base, &config)?;
    save_frame(&annotator, &args.output)?;

    let (w, h) = annotator.dimensions();
    println!("Loaded {} ({w}x{h})", args.file.display());
    println!("Frame is written to {}", args.output.display());
    println!("{HELP}");

    let mut lines = io::stdin().lock().lines();
    loop {
        prompt("> ")?;
        let Some(line) = lines.next() else { break };
        let line = line?;

        match parse_input(&line) {
            Input::Blank => {}
            Input::Unknown(text) => eprintln!("Unknown command '{text}'\n{HELP}"),
            Input::Click(pos) => match annotator.on_primary_click(pos) {
                ClickOutcome::OriginSet(origin) => {
                    println!("Origin set at {origin}");
                    save_frame(&annotator, &args.output)?;
                }
                ClickOutcome::PointAdded(point) => {
                    if let Some(coord) = annotator.session().physical(&point) {
                        println!(
                            "Point {}: pixel {}, relative {}",
                            point.sequence_index, point.pixel, coord
                        );
                    }
                    save_frame(&annotator, &args.output)?;
                }
                ClickOutcome::Ignored => eprintln!("{pos} is outside the {w}x{h} image"),
            },
            Input::Key(key) => match key_action(key) {
                Some(KeyAction::Prompt(kind)) => {
                    prompt(&format!("Enter {}: ", kind.to_string().to_lowercase()))?;
                    let Some(raw) = lines.next() else { break };
                    match annotator.on_numeric_setting(kind, &raw?) {
                        Ok(value) => {
                            println!("{kind} set to {value:.3}");
                            save_frame(&annotator, &args.output)?;
                        }
                        Err(e) => eprintln!("{e}"),
                    }
                }
                Some(KeyAction::Command(command)) => {
                    if annotator.on_command(command).is_break() {
                        break;
                    }
                    save_frame(&annotator, &args.output)?;
                }
                None => eprintln!("Unknown key '{key}'\n{HELP}"),
            },
        }
    }

    print_export_report(annotator.export_results().as_ref());
    Ok(())
}
