//! specdoc CLI - catalogue to DOCX renderer

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;

use specdoc::{Catalogue, EntityKind, JsonFormat, Labels, RenderOptions};

#[derive(Parser)]
#[command(name = "specdoc")]
#[command(version)]
#[command(about = "Render class catalogues into DOCX specification sections", long_about = None)]
struct Cli {
    /// Input catalogue (JSON)
    #[arg(value_name = "CATALOGUE")]
    input: Option<PathBuf>,

    /// Output DOCX file
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(flatten)]
    style: StyleArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a catalogue to DOCX
    Docx {
        /// Input catalogue (JSON)
        #[arg(value_name = "CATALOGUE")]
        input: PathBuf,

        /// Output file (catalogue name with .docx if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        style: StyleArgs,
    },

    /// Print a plain text preview of the rendered section
    Preview {
        /// Input catalogue (JSON)
        #[arg(value_name = "CATALOGUE")]
        input: PathBuf,

        #[command(flatten)]
        style: StyleArgs,
    },

    /// Print the rendered paragraph structure as JSON
    Json {
        /// Input catalogue (JSON)
        #[arg(value_name = "CATALOGUE")]
        input: PathBuf,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        #[command(flatten)]
        style: StyleArgs,
    },

    /// Show catalogue information
    Info {
        /// Input catalogue (JSON)
        #[arg(value_name = "CATALOGUE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

#[derive(Args, Clone)]
struct StyleArgs {
    /// Override the catalogue title
    #[arg(long)]
    title: Option<String>,

    /// Label language
    #[arg(long, value_enum, env = "SPECDOC_LANG")]
    lang: Option<Language>,

    /// Serif font family for body text
    #[arg(long, env = "SPECDOC_SERIF_FONT")]
    serif_font: Option<String>,

    /// Monospaced font family for code
    #[arg(long, env = "SPECDOC_MONO_FONT")]
    mono_font: Option<String>,

    /// Font size in points
    #[arg(long, env = "SPECDOC_FONT_SIZE")]
    font_size: Option<f32>,
}

impl StyleArgs {
    fn render_options(&self) -> RenderOptions {
        let mut options = RenderOptions::new();
        if let Some(lang) = self.lang {
            options = options.with_labels(lang.into());
        }
        if let Some(ref family) = self.serif_font {
            options = options.with_serif_font(family.as_str());
        }
        if let Some(ref family) = self.mono_font {
            options = options.with_mono_font(family.as_str());
        }
        if let Some(size) = self.font_size {
            options = options.with_point_size(size);
        }
        options
    }

    fn load(&self, input: &Path) -> Result<Catalogue, Box<dyn std::error::Error>> {
        let mut catalogue = Catalogue::from_path(input)?;
        if let Some(ref title) = self.title {
            catalogue.title = title.clone();
        }
        Ok(catalogue)
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Language {
    /// English labels (Class, Structure, Fields:, Methods:)
    En,
    /// Russian labels (Класс, Структура, Поля:, Методы:)
    Ru,
}

impl From<Language> for Labels {
    fn from(lang: Language) -> Self {
        match lang {
            Language::En => Labels::english(),
            Language::Ru => Labels::russian(),
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Docx {
            input,
            output,
            style,
        }) => cmd_docx(&input, output.as_deref(), &style),
        Some(Commands::Preview { input, style }) => cmd_preview(&input, &style),
        Some(Commands::Json {
            input,
            compact,
            style,
        }) => cmd_json(&input, compact, &style),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: render to DOCX if input is provided
            if let Some(input) = cli.input {
                cmd_docx(&input, cli.output.as_deref(), &cli.style)
            } else {
                println!("{}", "Usage: specdoc <CATALOGUE> [OUTPUT]".yellow());
                println!("       specdoc --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn default_output(input: &Path) -> PathBuf {
    input.with_extension("docx")
}

fn cmd_docx(
    input: &Path,
    output: Option<&Path>,
    style: &StyleArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let catalogue = style.load(input)?;
    let options = style.render_options();
    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_output(input));

    let stats = specdoc::render_to_file(&catalogue, &output, &options)?;

    println!("{} {}", "Saved to".green(), output.display());
    println!(
        "  {} {} entities ({} classes, {} structures)",
        "├─".dimmed(),
        stats.entity_count,
        stats.class_count,
        stats.structure_count
    );
    println!(
        "  {} {} items ({} fields, {} methods)",
        "├─".dimmed(),
        stats.item_count(),
        stats.field_count,
        stats.method_count
    );
    println!("  {} {} paragraphs", "└─".dimmed(), stats.paragraph_count);

    Ok(())
}

fn cmd_preview(input: &Path, style: &StyleArgs) -> Result<(), Box<dyn std::error::Error>> {
    let catalogue = style.load(input)?;
    let text = specdoc::to_text(&catalogue, &style.render_options())?;
    print!("{}", text);
    Ok(())
}

fn cmd_json(
    input: &Path,
    compact: bool,
    style: &StyleArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let catalogue = style.load(input)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = specdoc::to_json(&catalogue, &style.render_options(), format)?;
    println!("{}", json);
    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let catalogue = Catalogue::from_path(input)?;

    println!("{}", "Catalogue Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Title".bold(), catalogue.title);
    println!("{}: {}", "Entities".bold(), catalogue.len());
    println!(
        "{}: {}",
        "Classes".bold(),
        catalogue.count_kind(EntityKind::Class)
    );
    println!(
        "{}: {}",
        "Structures".bold(),
        catalogue.count_kind(EntityKind::Structure)
    );
    println!("{}: {}", "Fields".bold(), catalogue.field_count());
    println!("{}: {}", "Methods".bold(), catalogue.method_count());

    match catalogue.validate() {
        Ok(()) => println!("{}: {}", "Valid".bold(), "yes".green()),
        Err(e) => println!("{}: {} ({})", "Valid".bold(), "no".red(), e),
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "specdoc".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Catalogue to DOCX specification renderer");
    println!();
    println!("License: MIT");
}
