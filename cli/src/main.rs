//! pdfsections CLI - section outline inference for PDF documents

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;

use pdfsections::analysis::classify_all;
use pdfsections::{
    extract_elements, parse_file_with_options, render, ContentMode, FontProfile, JsonFormat,
    PageSelection, ParseOptions, PreamblePolicy,
};

#[derive(Parser)]
#[command(name = "pdfsections")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Infer section headers and their content from PDF documents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a PDF into its section outline
    Parse {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Include the flat reading-order text
        #[arg(long)]
        raw_text: bool,

        /// What to do with content before the first header
        #[arg(long, value_enum, default_value = "collect")]
        preamble: Preamble,

        /// Join each section's content into a single node
        #[arg(long)]
        joined: bool,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: Format,

        /// Page range (e.g., "1-3", "1,3,5")
        #[arg(long)]
        pages: Option<String>,

        /// Skip unreadable pages instead of failing
        #[arg(long)]
        lenient: bool,
    },

    /// Show the extracted text elements and their classification
    Elements {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Page range (e.g., "1-3", "1,3,5")
        #[arg(long)]
        pages: Option<String>,

        /// Print elements as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Preamble {
    /// Gather leading content into a "Preamble" section
    Collect,
    /// Discard leading content
    Drop,
    /// Treat the first line as a header
    PromoteFirst,
}

impl From<Preamble> for PreamblePolicy {
    fn from(preamble: Preamble) -> Self {
        match preamble {
            Preamble::Collect => PreamblePolicy::Collect,
            Preamble::Drop => PreamblePolicy::Drop,
            Preamble::PromoteFirst => PreamblePolicy::PromoteFirst,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Format {
    /// `{"result": ...}` JSON
    Json,
    /// Markdown headings and paragraphs
    Markdown,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Parse {
            input,
            output,
            raw_text,
            preamble,
            joined,
            compact,
            format,
            pages,
            lenient,
        } => parse_page_selection(pages.as_deref()).and_then(|pages| {
            let mut options = ParseOptions::new()
                .with_raw_text(raw_text)
                .with_preamble(preamble.into())
                .with_pages(pages);
            if joined {
                options = options.with_content_mode(ContentMode::Joined);
            }
            if lenient {
                options = options.lenient();
            }
            cmd_parse(&input, output.as_deref(), &options, format, compact)
        }),
        Commands::Elements { input, pages, json } => parse_page_selection(pages.as_deref())
            .and_then(|pages| cmd_elements(&input, pages, json)),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn parse_page_selection(pages: Option<&str>) -> Result<PageSelection, Box<dyn std::error::Error>> {
    match pages {
        Some(p) => Ok(PageSelection::parse(p)?),
        None => Ok(PageSelection::All),
    }
}

fn cmd_parse(
    input: &Path,
    output: Option<&Path>,
    options: &ParseOptions,
    format: Format,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = parse_file_with_options(input, options)?;
    log::info!(
        "{}: {} sections, {} content lines",
        input.display(),
        result.section_count(),
        result.content_count()
    );

    let rendered = match format {
        Format::Json if compact => render::to_json(&result, JsonFormat::Compact)?,
        Format::Json => render::to_json(&result, JsonFormat::Pretty)?,
        Format::Markdown => render::to_markdown(&result),
    };

    write_output(output, &rendered)
}

/// Label/value rows describing a font profile.
fn profile_summary(profile: &FontProfile, size_delta: f32) -> Vec<(&'static str, String)> {
    let mut rows = vec![
        ("Elements", profile.sample_count.to_string()),
        ("Average size", format!("{:.2}pt", profile.average_font_size)),
    ];
    if let Some(body) = profile.body_size() {
        rows.push(("Body size", format!("{:.1}pt", body)));
    }
    if let Some(max) = profile.max_size() {
        rows.push(("Largest size", format!("{:.1}pt", max)));
    }
    rows.push(("Distinct sizes", profile.distinct_sizes().to_string()));
    rows.push((
        "Header threshold",
        format!("{:.2}pt", profile.average_font_size + size_delta),
    ));
    rows
}

fn cmd_elements(
    input: &Path,
    pages: PageSelection,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = ParseOptions::new().lenient().with_pages(pages);
    let data = fs::read(input)?;
    let elements = extract_elements(&data, &options)?;

    let profile = FontProfile::compute(&elements);
    let classified = classify_all(elements, &profile, &options.outline.rules);

    if json {
        println!("{}", serde_json::to_string_pretty(&classified)?);
        return Ok(());
    }

    println!("{}", "Font Profile".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    for (label, value) in profile_summary(&profile, options.outline.rules.size_delta) {
        println!("{}: {}", label.bold(), value);
    }
    println!();
    println!("{}", "Elements".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    for item in &classified {
        let position = &item.element.position;
        let location = format!("p{} y={:.0} x={:.0}", position.page, position.y, position.x);
        let line = format!(
            "{:>4} {:>6.2}pt {:<20} {}",
            item.order_index(),
            item.element.font_size,
            location.dimmed(),
            item.text()
        );
        if item.role.is_header() {
            println!("{} {}", "H".green().bold(), line.bold());
        } else {
            println!("  {}", line);
        }
    }

    Ok(())
}

fn write_output(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_version() {
    println!("{} {}", "pdfsections".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Section outline inference for PDF documents");
    println!();
    println!(
        "Repository: {}",
        "https://github.com/iyulab/pdfsections".dimmed()
    );
    println!("License: MIT");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command_args() {
        let cli = Cli::try_parse_from([
            "pdfsections",
            "parse",
            "resume.pdf",
            "--raw-text",
            "--preamble",
            "promote-first",
            "--format",
            "markdown",
            "--pages",
            "1-2",
        ])
        .unwrap();

        match cli.command {
            Commands::Parse {
                input,
                raw_text,
                preamble,
                format,
                pages,
                joined,
                ..
            } => {
                assert_eq!(input, PathBuf::from("resume.pdf"));
                assert!(raw_text);
                assert!(!joined);
                assert!(preamble == Preamble::PromoteFirst);
                assert!(format == Format::Markdown);
                assert_eq!(pages.as_deref(), Some("1-2"));
            }
            _ => panic!("expected parse command"),
        }
    }

    #[test]
    fn test_page_selection_arg() {
        assert_eq!(
            parse_page_selection(Some("2-4")).unwrap(),
            PageSelection::Range(2..=4)
        );
        assert_eq!(parse_page_selection(None).unwrap(), PageSelection::All);
        assert!(parse_page_selection(Some("x")).is_err());
        assert_eq!(
            parse_page_selection(Some("1,1-4294967295")).unwrap(),
            PageSelection::Ranges(vec![1..=u32::MAX])
        );
    }

    #[test]
    fn test_profile_summary() {
        use pdfsections::{Position, TextElement};

        let elements: Vec<TextElement> = [("EDUCATION", 16.0), ("BSc", 10.0), ("MSc", 10.0)]
            .iter()
            .enumerate()
            .map(|(i, (text, size))| TextElement::new(*text, *size, Position::default(), i))
            .collect();
        let profile = FontProfile::compute(&elements);

        let rows = profile_summary(&profile, 0.7);
        let value = |label: &str| {
            rows.iter()
                .find(|(l, _)| *l == label)
                .map(|(_, v)| v.as_str())
        };
        assert_eq!(value("Elements"), Some("3"));
        assert_eq!(value("Average size"), Some("12.00pt"));
        assert_eq!(value("Body size"), Some("10.0pt"));
        assert_eq!(value("Largest size"), Some("16.0pt"));
        assert_eq!(value("Distinct sizes"), Some("2"));
        assert_eq!(value("Header threshold"), Some("12.70pt"));
    }

    #[test]
    fn test_write_output_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        write_output(Some(&path), "{}").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }
}
