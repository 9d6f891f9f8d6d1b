//! xlfind CLI - find and preview local Excel/CSV files
//!
//! A command-line front end for scanning folders for spreadsheets, filtering
//! them by name, and rendering the first sheet of a file.

use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use xlfind::finder::{Finder, Notice, Opened, Picked, DEFAULT_WORKBOOK_PATH};
use xlfind::render::{render_page, to_html, to_json, to_text, JsonFormat, RenderOptions};
use xlfind::{EntryInfo, FileHandle, PathPicker, SelectedFile, Worksheet};

/// Find local Excel/CSV files and preview their first sheet
#[derive(Parser)]
#[command(
    name = "xlfind",
    author = "iyulab",
    version,
    about = "Find and preview local Excel/CSV files",
    long_about = "xlfind - Excel Finder & Viewer.\n\n\
                  Scans folders for .xlsx, .xls, .xlsb and .csv files, filters them by \
                  name, and renders the first sheet as an HTML table, text, or JSON."
)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List spreadsheet files below a folder
    Scan {
        /// Folder to scan
        dir: PathBuf,

        /// Filter by name or path (case-insensitive)
        #[arg(short, long, default_value = "")]
        query: String,

        /// Print the list as JSON
        #[arg(long)]
        json: bool,
    },

    /// List spreadsheet files from an explicit selection
    Files {
        /// Selected files
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Filter by name or path (case-insensitive)
        #[arg(short, long, default_value = "")]
        query: String,
    },

    /// Render one file from a folder scan
    Open {
        /// Folder to scan
        dir: PathBuf,

        /// Position in the filtered list (0-based)
        #[arg(short, long)]
        index: usize,

        /// Filter by name or path (case-insensitive)
        #[arg(short, long, default_value = "")]
        query: String,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Render the first sheet of a single file
    View {
        /// Input file path
        input: PathBuf,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Render the bundled sample workbook (data/sample.xlsx)
    Sample {
        /// Site root containing data/sample.xlsx
        #[arg(long, default_value = ".")]
        root: PathBuf,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Browse a folder interactively
    Browse {
        /// Folder to scan
        dir: PathBuf,

        /// Maximum body rows shown per sheet
        #[arg(long, default_value = "20")]
        max_rows: usize,
    },

    /// Write a standalone HTML page with the file list and an opened sheet
    Page {
        /// Folder to scan
        dir: PathBuf,

        /// Filter by name or path (case-insensitive)
        #[arg(short, long, default_value = "")]
        query: String,

        /// Position in the filtered list to open (0-based)
        #[arg(short, long)]
        index: Option<usize>,

        /// Output HTML file
        #[arg(short, long)]
        output: PathBuf,

        /// Maximum body rows to render
        #[arg(long)]
        max_rows: Option<usize>,
    },

    /// Show version information
    Version,
}

#[derive(clap::Args)]
struct RenderArgs {
    /// Output format
    #[arg(short, long, default_value = "html")]
    format: OutputFormat,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Maximum body rows to render
    #[arg(long)]
    max_rows: Option<usize>,

    /// CSS class of the HTML table
    #[arg(long, default_value = xlfind::render::DEFAULT_TABLE_CLASS)]
    table_class: String,

    /// Output compact JSON (no indentation)
    #[arg(long)]
    compact: bool,
}

impl RenderArgs {
    fn options(&self) -> RenderOptions {
        RenderOptions::new()
            .with_table_class(self.table_class.clone())
            .with_max_rows(self.max_rows)
    }
}

/// Output format
#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// HTML table
    Html,
    /// Column-aligned plain text
    Text,
    /// Raw values as JSON
    Json,
}

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn run(cli: Cli) -> CliResult<()> {
    match cli.command {
        Commands::Scan { dir, query, json } => {
            let mut finder = scan_folder(&dir)?;
            finder.set_query(query);

            if json {
                let infos: Vec<EntryInfo> =
                    finder.visible().iter().map(|e| e.info()).collect();
                println!("{}", serde_json::to_string_pretty(&infos)?);
            } else {
                print_list(&finder);
            }
        }

        Commands::Files { files, query } => {
            let selection = files
                .iter()
                .map(|path| selected_file(path))
                .collect::<Result<Vec<_>, _>>()?;

            let mut finder = Finder::new();
            finder.pick_files(selection);
            finder.set_query(query);
            print_list(&finder);
        }

        Commands::Open {
            dir,
            index,
            query,
            render,
        } => {
            let mut finder = Finder::with_options(render.options());
            pick_into(&mut finder, &dir)?;
            finder.set_query(query);

            let pb = create_spinner("Decoding workbook...");
            let opened = finder.open(index);
            pb.finish_and_clear();

            match opened {
                Opened::Rendered => emit_sheet(&finder, &render)?,
                Opened::NoSuchEntry => {
                    return Err(format!(
                        "No entry at index {} ({})",
                        index,
                        finder.count_label()
                    )
                    .into())
                }
                Opened::Failed => return Err(notices_error(&mut finder).into()),
            }
        }

        Commands::View { input, render } => {
            debug!("viewing {}", input.display());
            let pb = create_spinner("Decoding workbook...");
            let sheet = xlfind::first_worksheet_from_bytes(fs::read(&input)?)?;
            pb.finish_and_clear();

            let content = render_sheet(&sheet, &render)?;
            write_output(render.output.as_ref(), &content)?;
            if let Some(output) = &render.output {
                println!(
                    "{} Rendered {} to {}",
                    "✓".green().bold(),
                    input.display(),
                    output.display()
                );
            }
        }

        Commands::Sample { root, render } => {
            let mut finder = Finder::with_options(render.options());
            let source = FileHandle::new(root.join(DEFAULT_WORKBOOK_PATH));
            debug!("loading sample workbook from {}", source.path().display());

            match finder.load_default(&source) {
                Opened::Rendered => emit_sheet(&finder, &render)?,
                _ => return Err(notices_error(&mut finder).into()),
            }
        }

        Commands::Browse { dir, max_rows } => {
            let options = RenderOptions::new().with_max_rows(Some(max_rows));
            let mut finder = Finder::with_options(options);
            pick_into(&mut finder, &dir)?;
            browse(&mut finder)?;
        }

        Commands::Page {
            dir,
            query,
            index,
            output,
            max_rows,
        } => {
            let options = RenderOptions::new().with_max_rows(max_rows);
            let mut finder = Finder::with_options(options);
            pick_into(&mut finder, &dir)?;
            finder.set_query(query);

            if let Some(index) = index {
                if finder.open(index) != Opened::Rendered {
                    print_notices(&mut finder);
                }
            }

            let title = format!("Excel Finder - {}", dir.display());
            fs::write(&output, render_page(&finder, &title))?;
            println!(
                "{} Wrote page: {} ({})",
                "✓".green().bold(),
                output.display(),
                finder.count_label()
            );
        }

        Commands::Version => {
            print_version();
        }
    }

    Ok(())
}

/// Scan `dir` into a new finder.
fn scan_folder(dir: &Path) -> CliResult<Finder> {
    let mut finder = Finder::new();
    pick_into(&mut finder, dir)?;
    Ok(finder)
}

/// Scan `dir` into `finder`; a declined grant leaves it empty.
fn pick_into(finder: &mut Finder, dir: &Path) -> CliResult<()> {
    debug!("scanning {}", dir.display());
    let pb = create_spinner("Scanning folder...");
    let picked = finder.pick_folder(&PathPicker::new(dir));
    pb.finish_and_clear();

    match picked {
        Picked::Scanned(_) => Ok(()),
        Picked::Cancelled => {
            println!(
                "{} No read access to {}",
                "!".yellow().bold(),
                dir.display()
            );
            Ok(())
        }
        Picked::Failed | Picked::Unsupported => Err(notices_error(finder).into()),
    }
}

fn selected_file(path: &Path) -> CliResult<SelectedFile> {
    let file = SelectedFile::read_from(path)?;
    if path.components().count() > 1 {
        let hint = path.to_string_lossy().replace('\\', "/");
        Ok(file.with_relative_path(hint))
    } else {
        Ok(file)
    }
}

fn browse(finder: &mut Finder) -> CliResult<()> {
    println!(
        "{}",
        "Type /text to search, a number to open, q to quit.".dimmed()
    );
    print_list(finder);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("{} ", ">".cyan().bold());
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let line = line.trim();

        if line == "q" || line == "quit" {
            break;
        } else if let Some(query) = line.strip_prefix('/') {
            finder.set_query(query);
            print_list(finder);
        } else if let Ok(index) = line.parse::<usize>() {
            match finder.open(index) {
                Opened::Rendered => {
                    if let Some(sheet) = finder.worksheet() {
                        println!("{}", to_text(sheet, finder.options()));
                    }
                    println!("{}", finder.info().dimmed());
                }
                Opened::NoSuchEntry => {
                    println!("{} No entry at index {}", "!".yellow().bold(), index)
                }
                Opened::Failed => print_notices(finder),
            }
        } else if line.is_empty() {
            print_list(finder);
        } else {
            println!("{} Unknown command: {}", "!".yellow().bold(), line);
        }
    }

    Ok(())
}

fn print_list(finder: &Finder) {
    println!("{}", finder.count_label().cyan().bold());
    println!("{}", "─".repeat(40));
    for (i, entry) in finder.visible().iter().enumerate() {
        if entry.path().is_empty() || entry.path() == entry.name() {
            println!("{:>4}  {}", i, entry.name().bold());
        } else {
            println!("{:>4}  {}  {}", i, entry.name().bold(), entry.path().dimmed());
        }
    }
}

fn print_notices(finder: &mut Finder) {
    for notice in finder.take_notices() {
        eprintln!("{} {}", "!".yellow().bold(), notice);
    }
}

/// Collapse pending notices into one error message.
fn notices_error(finder: &mut Finder) -> String {
    let messages: Vec<String> = finder
        .take_notices()
        .iter()
        .map(Notice::to_string)
        .collect();
    if messages.is_empty() {
        "Operation failed".to_string()
    } else {
        messages.join("\n")
    }
}

fn render_sheet(sheet: &Worksheet, render: &RenderArgs) -> CliResult<String> {
    let options = render.options();
    let content = match render.format {
        OutputFormat::Html => to_html(sheet, &options),
        OutputFormat::Text => to_text(sheet, &options),
        OutputFormat::Json => {
            let format = if render.compact {
                JsonFormat::Compact
            } else {
                JsonFormat::Pretty
            };
            to_json(sheet, format)?
        }
    };
    Ok(content)
}

/// Write the finder's current sheet and report its status line.
fn emit_sheet(finder: &Finder, render: &RenderArgs) -> CliResult<()> {
    let Some(sheet) = finder.worksheet() else {
        return Err("Nothing rendered".into());
    };

    let content = match render.format {
        OutputFormat::Html => finder.display().unwrap_or_default().to_string(),
        _ => render_sheet(sheet, render)?,
    };
    write_output(render.output.as_ref(), &content)?;

    if let Some(output) = &render.output {
        println!("{} {}", "✓".green().bold(), finder.info());
        println!("  written to {}", output.display());
    } else {
        eprintln!("{}", finder.info().dimmed());
    }
    Ok(())
}

fn print_version() {
    println!("{} {}", "xlfind".green().bold(), env!("CARGO_PKG_VERSION"));
    println!("Find local Excel/CSV files and preview their first sheet");
    println!();
    println!(
        "Supported extensions: {}",
        xlfind::SUPPORTED_EXTENSIONS.join(", ")
    );
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner:.blue} {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

fn write_output(path: Option<&PathBuf>, content: &str) -> CliResult<()> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{}", content)?;
        }
    }
    Ok(())
}
