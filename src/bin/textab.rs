//! textab CLI - render CSV or JSON data as a LaTeX table

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use textable::formatters::NumberFormat;
use textable::sources::{read_csv, read_json, CsvOptions};
use textable::{
    tex_preamble, write_tex, CellPos, CellValue, FloatOptions, FontSize, LineStyle, Location,
    LongOptions, Range, RenderOptions, Style, Table, TabularKind,
};

#[derive(Parser)]
#[command(name = "textab")]
#[command(version)]
#[command(about = "Render CSV or JSON data as a LaTeX table", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input file path (reads from stdin if not provided)
    input_file: Option<PathBuf>,

    /// Output file path; `.tex` is appended when missing (stdout if not provided)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Input format (guessed from the file extension by default)
    #[arg(short, long, value_enum)]
    format: Option<InputFormat>,

    /// Treat the first record as data rather than a header row
    #[arg(long)]
    no_header: bool,

    /// Keep every field as text instead of detecting numbers
    #[arg(long)]
    raw: bool,

    /// Rule style under the header row and around the table
    #[arg(long, value_enum, default_value_t = Rules::Plain)]
    rules: Rules,

    /// Do not bold the header row
    #[arg(long)]
    plain_header: bool,

    /// Decimal digits for floating-point values
    #[arg(short, long)]
    digits: Option<usize>,

    /// Escape LaTeX special characters in every cell
    #[arg(long)]
    escape: bool,

    /// Table caption; produces a floating table
    #[arg(short, long)]
    caption: Option<String>,

    /// Table label (used with --caption or --long)
    #[arg(short, long)]
    label: Option<String>,

    /// Horizontal position of the table
    #[arg(long, value_enum, default_value_t = Justify::Center)]
    location: Justify,

    /// Emit a page-breaking longtable with the header repeated on every page
    #[arg(long)]
    long: bool,

    /// Table note, may be given several times
    #[arg(short, long = "note")]
    notes: Vec<String>,

    /// Spaces per indentation level
    #[arg(long, default_value_t = 2)]
    indent: usize,

    /// Strict mode: exit with error if any warnings occur
    #[arg(long)]
    strict: bool,

    /// Quiet mode: suppress warning output to stderr
    #[arg(short, long)]
    quiet: bool,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the \usepackage lines the generated tables need
    Preamble,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum InputFormat {
    Csv,
    Tsv,
    Json,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Rules {
    None,
    Plain,
    Booktabs,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Justify {
    Center,
    Left,
    Right,
}

impl From<Justify> for Location {
    fn from(j: Justify) -> Self {
        match j {
            Justify::Center => Location::Center,
            Justify::Left => Location::Left,
            Justify::Right => Location::Right,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Some(Commands::Preamble) = cli.command {
        println!("{}", tex_preamble());
        return Ok(());
    }

    let (input, format) = read_input(cli.input_file.as_deref(), cli.format)?;
    let mut table = load_table(&input, format, &cli)?;
    log::info!("loaded {}x{} table", table.row_count(), table.col_count());

    style_table(&mut table, &cli)?;

    let options = RenderOptions::new().with_indent(cli.indent);
    let output = table.render_with_options(&options)?;

    if !cli.quiet {
        for warning in &output.warnings {
            eprintln!("{}", warning);
        }
    }

    if cli.strict && output.has_warnings() {
        bail!("{} warning(s) in strict mode", output.warnings.len());
    }

    match cli.output {
        Some(ref path) => {
            let written = write_tex(path, &output.content)
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("Output written to: {}", written.display());
        }
        None => println!("{}", output.content),
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn read_input(path: Option<&Path>, format: Option<InputFormat>) -> Result<(String, InputFormat)> {
    let guessed = path
        .and_then(|p| p.extension())
        .and_then(|ext| ext.to_str())
        .and_then(|ext| match ext.to_ascii_lowercase().as_str() {
            "json" => Some(InputFormat::Json),
            "tsv" | "tab" => Some(InputFormat::Tsv),
            "csv" => Some(InputFormat::Csv),
            _ => None,
        });
    let format = format.or(guessed).unwrap_or(InputFormat::Csv);

    let text = match path {
        Some(p) => {
            fs::read_to_string(p).with_context(|| format!("failed to read {}", p.display()))?
        }
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            buffer
        }
    };
    Ok((text, format))
}

fn load_table(input: &str, format: InputFormat, cli: &Cli) -> Result<Table> {
    let table = match format {
        InputFormat::Json => read_json(input)?,
        InputFormat::Csv | InputFormat::Tsv => {
            let base = if format == InputFormat::Tsv {
                CsvOptions::tsv()
            } else {
                CsvOptions::default()
            };
            let options = CsvOptions {
                has_header: !cli.no_header,
                auto_detect_types: !cli.raw,
                ..base
            };
            read_csv(input.as_bytes(), &options)?
        }
    };
    if table.row_count() == 0 {
        bail!("input contains no rows");
    }
    Ok(table)
}

fn style_table(table: &mut Table, cli: &Cli) -> Result<()> {
    let has_header = !cli.no_header;
    let last = table.row_count() - 1;

    if cli.escape {
        table.escape_special(Range::all())?;
    }

    if let Some(digits) = cli.digits {
        let floats: Vec<CellPos> = (0..table.row_count())
            .flat_map(|r| (0..table.col_count()).map(move |c| CellPos::new(r, c)))
            .filter(|pos| matches!(table.value(pos.row, pos.col), Some(CellValue::Float(_))))
            .collect();
        for pos in floats {
            table.apply(pos, Style::Format(NumberFormat::Fixed(digits)))?;
        }
    }

    if has_header && !cli.plain_header {
        table.apply(Range::row(0), Style::Bold(true))?;
    }

    match cli.rules {
        Rules::None => {}
        Rules::Plain => {
            if has_header && last > 0 {
                table.line_below(Range::row(0), LineStyle::single())?;
            }
        }
        Rules::Booktabs => {
            table.line_above(Range::row(0), LineStyle::booktabs())?;
            if has_header && last > 0 {
                table.line_below(Range::row(0), LineStyle::booktabs())?;
            }
            table.line_below(Range::row(last), LineStyle::booktabs())?;
        }
    }

    for note in &cli.notes {
        table.add_note(note.clone(), FontSize::FootnoteSize);
    }

    let location = Location::from(cli.location);
    if cli.long {
        table.set_kind(TabularKind::LongTable);
        let mut options = LongOptions {
            caption: cli.caption.clone(),
            label: cli.label.clone(),
            location,
            repeats: usize::from(has_header),
        };
        if options.caption.is_none() {
            options.label = None;
        }
        table.set_long(options);
    } else if let Some(ref caption) = cli.caption {
        let mut options = FloatOptions::new(caption.clone()).with_location(location);
        if let Some(ref label) = cli.label {
            options = options.with_label(label.clone());
        }
        table.set_float(options);
    } else if cli.label.is_some() {
        log::warn!("--label has no effect without --caption or --long");
    }

    Ok(())
}
