use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use glob::Pattern;
use shape::Precision;
use shapecodec_tools::{
    decode_points, encode_points, format_points_pretty, inspect_shape, parse_points_json, to_hex,
    InspectReport, ShapeFormat,
};

#[derive(Parser)]
#[command(
    name = "shapecodec-tools",
    version,
    about = "Encode, decode and inspect delta-encoded shapes"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode a JSON list of points.
    Encode {
        /// Path to a JSON array of `[lon, lat]` pairs or `{"lon", "lat"}` objects.
        points_path: PathBuf,
        #[command(flatten)]
        codec: CodecArgs,
        /// Write the encoded bytes to a file instead of stdout.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Decode an encoded shape into points.
    Decode {
        /// Path to the encoded bytes.
        shape_path: PathBuf,
        #[command(flatten)]
        codec: CodecArgs,
        /// Output format.
        #[arg(long, value_enum, default_value_t = DecodeOutput::Json)]
        output: DecodeOutput,
    },
    /// Show the samples that make up an encoded shape.
    Inspect {
        /// Path to the encoded bytes, or a directory of them.
        shape_path: PathBuf,
        #[command(flatten)]
        codec: CodecArgs,
        /// Optional glob filter when inspecting a directory.
        #[arg(long)]
        glob: Option<String>,
        /// Sort inspected files.
        #[arg(long, value_enum)]
        sort: Option<InspectSort>,
        /// Limit the number of inspected files (after sorting).
        #[arg(long)]
        limit: Option<usize>,
        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
    },
}

#[derive(clap::Args)]
struct CodecArgs {
    /// Sample codec of the shape.
    #[arg(long, value_enum, default_value_t = FormatArg::Varint5)]
    format: FormatArg,
    /// Decimal digits of precision agreed with the other side.
    #[arg(long, default_value_t = shape::DIGITS_PRECISION)]
    digits: u8,
}

impl CodecArgs {
    fn format(&self) -> ShapeFormat {
        match self.format {
            FormatArg::Varint5 => ShapeFormat::Varint5,
            FormatArg::Varint7 => ShapeFormat::Varint7,
        }
    }

    fn precision(&self) -> Result<Precision> {
        Precision::new(self.digits).with_context(|| {
            format!(
                "precision of {} digits is out of range (max {})",
                self.digits,
                Precision::MAX_DIGITS
            )
        })
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatArg {
    Varint5,
    Varint7,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DecodeOutput {
    Json,
    Pretty,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum InspectSort {
    Size,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Encode {
            points_path,
            codec,
            out,
        } => {
            let contents = fs::read_to_string(&points_path)
                .with_context(|| format!("read points {}", points_path.display()))?;
            let points = parse_points_json(&contents)?;
            let bytes = encode_points(&points, codec.format(), codec.precision()?);
            match out {
                Some(path) => {
                    fs::write(&path, &bytes)
                        .with_context(|| format!("write shape {}", path.display()))?;
                }
                None if codec.format().is_text() => {
                    println!("{}", String::from_utf8_lossy(&bytes));
                }
                None => println!("{}", to_hex(&bytes)),
            }
        }
        Command::Decode {
            shape_path,
            codec,
            output,
        } => {
            let bytes = fs::read(&shape_path)
                .with_context(|| format!("read shape {}", shape_path.display()))?;
            let precision = codec.precision()?;
            let points = decode_points(&bytes, codec.format(), precision)
                .with_context(|| format!("decode shape {}", shape_path.display()))?;
            match output {
                DecodeOutput::Json => {
                    let json = serde_json::to_string_pretty(&points).context("serialize json")?;
                    println!("{json}");
                }
                DecodeOutput::Pretty => {
                    print!("{}", format_points_pretty(&points, precision));
                }
            }
        }
        Command::Inspect {
            shape_path,
            codec,
            glob,
            sort,
            limit,
            json,
        } => {
            let format = codec.format();
            let precision = codec.precision()?;
            if shape_path.is_dir() {
                let entries = collect_shape_entries(&shape_path, glob.as_deref())?;
                let mut entries = maybe_sort_entries(entries, sort);
                let limit = limit.or(sort.map(|InspectSort::Size| 10));
                if let Some(limit) = limit {
                    entries.truncate(limit);
                }
                for entry in entries {
                    let bytes = fs::read(&entry.path)
                        .with_context(|| format!("read shape {}", entry.path.display()))?;
                    let report = inspect_shape(&bytes, format, precision);
                    println!("== {} ({} bytes) ==", entry.path.display(), entry.size);
                    print_report(&report, json)?;
                }
            } else {
                let bytes = fs::read(&shape_path)
                    .with_context(|| format!("read shape {}", shape_path.display()))?;
                let report = inspect_shape(&bytes, format, precision);
                print_report(&report, json)?;
            }
        }
    }
    Ok(())
}

struct ShapeEntry {
    path: PathBuf,
    size: u64,
}

fn collect_shape_entries(dir: &Path, glob: Option<&str>) -> Result<Vec<ShapeEntry>> {
    let mut entries = Vec::new();
    let pattern = match glob {
        Some(value) => Some(Pattern::new(value).context("invalid glob pattern")?),
        None => None,
    };

    for entry in fs::read_dir(dir).with_context(|| format!("read dir {}", dir.display()))? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if let Some(pattern) = &pattern {
            let matches_path = pattern.matches_path(&path);
            let matches_name = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| pattern.matches(name));
            if !matches_path && !matches_name {
                continue;
            }
        }
        let size = entry.metadata()?.len();
        entries.push(ShapeEntry { path, size });
    }
    Ok(entries)
}

fn maybe_sort_entries(mut entries: Vec<ShapeEntry>, sort: Option<InspectSort>) -> Vec<ShapeEntry> {
    match sort {
        Some(InspectSort::Size) => {
            entries.sort_by(|a, b| b.size.cmp(&a.size).then_with(|| a.path.cmp(&b.path)));
        }
        None => {}
    }
    entries
}

fn print_report(report: &InspectReport, json: bool) -> Result<()> {
    if json {
        let json = serde_json::to_string_pretty(report).context("serialize json")?;
        println!("{json}");
        return Ok(());
    }
    println!(
        "format: {} digits: {} bytes: {} points: {}",
        report.format.name(),
        report.digits,
        report.byte_len,
        report.point_count
    );
    if let Some(avg) = report.bytes_per_point() {
        println!("bytes/point: {avg:.2}");
    }
    println!("samples:");
    for sample in &report.samples {
        println!(
            "  @{:<6} {:>2}B {:?} delta {:>11} value {:>11} ({})",
            sample.offset, sample.len, sample.axis, sample.delta, sample.value, sample.coordinate
        );
    }
    if let Some(error) = &report.error {
        println!("error: {error}");
    }
    Ok(())
}
