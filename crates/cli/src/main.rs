//! CLI tool for converting Markdown slide outlines into PowerPoint files.

use anyhow::{Context, Result};
use clap::Parser;
use deck_core::{Deck, DeckBuilder, Error, DEFAULT_SLIDE_TITLE};
use deck_pptx::{PptxReader, PptxWriter, SlideSize, OUTPUT_FILE_NAME};
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

/// Convert Markdown outlines into PowerPoint decks.
///
/// Slides are separated by `---` lines; a `# ` line is the slide title.
#[derive(Parser, Debug)]
#[command(name = "md2pptx")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input Markdown file(s)
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Output directory (default: same as input file)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the slide outline as JSON instead of writing a .pptx
    /// (also accepts .pptx inputs to inspect an existing deck)
    #[arg(short = 'p', long)]
    outline: bool,

    /// Title for slides without a `# ` heading
    #[arg(short = 't', long, default_value = DEFAULT_SLIDE_TITLE)]
    default_title: String,

    /// Use 16:9 slides instead of 4:3
    #[arg(short, long)]
    widescreen: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let builder = DeckBuilder::new().with_default_title(args.default_title.as_str());
    let slide_size = if args.widescreen {
        SlideSize::Widescreen
    } else {
        SlideSize::Standard
    };
    let writer = PptxWriter::new().with_slide_size(slide_size);

    for input_path in &args.input {
        if args.verbose {
            eprintln!("Processing: {}", input_path.display());
        }

        let result = if args.outline {
            print_outline(input_path, &builder)
        } else {
            convert_file(input_path, &args, &builder, &writer)
        };

        if let Err(e) = result {
            match e.downcast_ref::<Error>() {
                Some(err) if err.is_empty_input() => {
                    eprintln!("Skipping {}: {}", input_path.display(), err)
                }
                _ => eprintln!("Error processing {}: {:#}", input_path.display(), e),
            }
        }
    }

    Ok(())
}

/// Convert one Markdown file and write the .pptx next to it (or into `--output`).
fn convert_file(
    input_path: &Path,
    args: &Args,
    builder: &DeckBuilder,
    writer: &PptxWriter,
) -> Result<()> {
    let markdown = read_markdown(input_path)?;
    let bytes = deck_pptx::convert_with(&markdown, builder, writer)?;

    let output_path = get_output_path(input_path, args.output.as_ref())?;
    write_output(&output_path, &bytes)?;

    if args.verbose {
        eprintln!("Written to: {}", output_path.display());
    }
    Ok(())
}

/// Print the slide model of a Markdown file, or of an existing .pptx, as JSON.
fn print_outline(input_path: &Path, builder: &DeckBuilder) -> Result<()> {
    let deck = if is_pptx(input_path) {
        log::debug!("Reading existing deck");
        let file = File::open(input_path)
            .with_context(|| format!("Failed to open {}", input_path.display()))?;
        PptxReader::new().read(BufReader::new(file))?
    } else {
        let markdown = read_markdown(input_path)?;
        if markdown.trim().is_empty() {
            return Err(Error::EmptyInput.into());
        }
        builder.build(&markdown)
    };

    println!("{}", outline_json(&deck)?);
    Ok(())
}

fn outline_json(deck: &Deck) -> Result<String> {
    serde_json::to_string_pretty(deck).context("Failed to serialize outline")
}

fn read_markdown(input_path: &Path) -> Result<String> {
    std::fs::read_to_string(input_path)
        .with_context(|| format!("Failed to read {}", input_path.display()))
}

fn is_pptx(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("pptx"))
}

/// Determine the output path for a converted file.
fn get_output_path(input_path: &Path, output_dir: Option<&PathBuf>) -> Result<PathBuf> {
    let output_filename = match input_path.file_stem().and_then(|s| s.to_str()) {
        Some(stem) if !stem.is_empty() => format!("{}.pptx", stem),
        _ => OUTPUT_FILE_NAME.to_string(),
    };

    let output_path = match output_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
            dir.join(output_filename)
        }
        None => {
            if let Some(parent) = input_path.parent() {
                parent.join(output_filename)
            } else {
                PathBuf::from(output_filename)
            }
        }
    };

    Ok(output_path)
}

/// Write output to a file.
fn write_output(path: &Path, content: &[u8]) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;

    file.write_all(content)
        .with_context(|| format!("Failed to write to {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_uses_input_stem() {
        let path = get_output_path(Path::new("talks/intro.md"), None).unwrap();
        assert_eq!(path, PathBuf::from("talks/intro.pptx"));
    }

    #[test]
    fn test_output_path_falls_back_to_fixed_name() {
        let path = get_output_path(Path::new(""), None).unwrap();
        assert_eq!(path, PathBuf::from("presentation.pptx"));
    }

    #[test]
    fn test_is_pptx() {
        assert!(is_pptx(Path::new("deck.PPTX")));
        assert!(!is_pptx(Path::new("notes.md")));
    }

    #[test]
    fn test_outline_json() {
        let deck = DeckBuilder::new().build("# Hi\n- *there*");
        let json = outline_json(&deck).unwrap();
        assert!(json.contains("\"title\": \"Hi\""));
        assert!(json.contains("\"italic\": true"));
    }

    #[test]
    fn test_blank_file_is_reported_as_empty_input() {
        let path = std::env::temp_dir().join(format!("md2pptx-blank-{}.md", std::process::id()));
        std::fs::write(&path, "  \n\t\n").unwrap();

        let builder = DeckBuilder::new();
        let err = print_outline(&path, &builder).unwrap_err();
        std::fs::remove_file(&path).unwrap();

        let err = err.downcast_ref::<Error>().unwrap();
        assert!(err.is_empty_input());
    }

    #[test]
    fn test_args_parse() {
        let args = Args::parse_from(["md2pptx", "-w", "-t", "Untitled", "a.md", "b.md"]);
        assert!(args.widescreen);
        assert_eq!(args.default_title, "Untitled");
        assert_eq!(args.input.len(), 2);
        assert!(!args.outline);
    }
}
