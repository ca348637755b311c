use std::io::{Read, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use env_logger::Env;
use log::info;

use grna_finder::guide::{self, DnaSequence, LogObserver, ScanObserver, ScanOpt};
use grna_finder::io::fasta::{self, FastaReader};
use grna_finder::output::{self, RecordGuides, ReportMeta, ScanReport};

#[derive(Parser, Debug)]
#[command(name = "grna-finder", author, version, about = "Find CRISPR guide-RNA sites upstream of NGG PAMs", arg_required_else_help = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Tsv,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Scan both strands for 20-nt spacers followed by an NGG PAM
    Scan {
        /// FASTA input ("-" for stdin)
        #[arg(default_value = "-")]
        input: String,
        /// Output path (stdout if omitted)
        #[arg(short, long)]
        out: Option<String>,
        #[arg(short, long, value_enum, default_value_t = Format::Tsv)]
        format: Format,
        /// Minimum spacer GC percentage (inclusive)
        #[arg(long = "min-gc", default_value_t = 40.0)]
        min_gc: f64,
        /// Maximum spacer GC percentage (inclusive)
        #[arg(long = "max-gc", default_value_t = 60.0)]
        max_gc: f64,
        /// Treat input as multi-FASTA and scan every record
        #[arg(long)]
        multi: bool,
        #[arg(short = 't', long = "threads", default_value_t = 1)]
        threads: usize,
    },
    /// Print the reverse complement of a single-record FASTA
    Revcomp {
        /// FASTA input ("-" for stdin)
        #[arg(default_value = "-")]
        input: String,
        #[arg(short, long)]
        out: Option<String>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Scan { input, out, format, min_gc, max_gc, multi, threads } => {
            let opt = ScanOpt { min_gc, max_gc, parallel: threads > 1 };
            if threads > 1 {
                rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build_global()
                    .context("cannot configure thread pool")?;
            }
            run_scan(&input, out.as_deref(), format, multi, opt)
        }
        Commands::Revcomp { input, out } => run_revcomp(&input, out.as_deref()),
    }
}

fn read_input(path: &str) -> Result<String> {
    let mut raw = String::new();
    if path == "-" {
        std::io::stdin()
            .read_to_string(&mut raw)
            .context("cannot read FASTA from stdin")?;
    } else {
        raw = std::fs::read_to_string(path)
            .with_context(|| format!("cannot open FASTA '{}'", path))?;
    }
    Ok(raw)
}

fn open_output(out_path: Option<&str>) -> Result<Box<dyn Write>> {
    Ok(if let Some(p) = out_path {
        let f = std::fs::File::create(p).with_context(|| format!("cannot create '{}'", p))?;
        Box::new(std::io::BufWriter::new(f))
    } else {
        Box::new(std::io::BufWriter::new(std::io::stdout()))
    })
}

fn run_scan(
    input: &str,
    out_path: Option<&str>,
    format: Format,
    multi: bool,
    opt: ScanOpt,
) -> Result<()> {
    opt.validate()?;
    let raw = read_input(input)?;

    // normalize everything before writing anything
    let mut sequences: Vec<(String, DnaSequence)> = Vec::new();
    if multi {
        for rec in FastaReader::new(std::io::Cursor::new(raw.as_bytes())) {
            let rec = rec.with_context(|| format!("invalid FASTA '{}'", input))?;
            let id = rec.id;
            let seq = DnaSequence::from_bases(rec.seq)
                .with_context(|| format!("record '{}'", id))?;
            sequences.push((id, seq));
        }
        if sequences.is_empty() {
            anyhow::bail!("FASTA '{}' contains no sequences", input);
        }
    } else {
        let rec = fasta::parse_single(&raw).with_context(|| format!("invalid FASTA '{}'", input))?;
        let seq = DnaSequence::from_bases(rec.seq).with_context(|| format!("record '{}'", rec.id))?;
        sequences.push((rec.id, seq));
    }

    let mut records = Vec::with_capacity(sequences.len());
    let mut n_guides = 0usize;
    for (id, seq) in sequences {
        LogObserver.on_normalized(seq.len());
        let guides = guide::scan_sequence(&seq, &opt, &LogObserver);
        info!("{}: {} bp, {} guides", id, seq.len(), guides.len());
        n_guides += guides.len();
        records.push(RecordGuides { id, length: seq.len(), guides });
    }
    info!("records: {}, guides: {}", records.len(), n_guides);

    let mut out = open_output(out_path)?;
    match format {
        Format::Tsv => output::write_tsv(&mut out, &records)?,
        Format::Json => {
            let meta = ReportMeta::now(
                Some(input.to_string()),
                Some(std::env::args().collect::<Vec<_>>().join(" ")),
            );
            output::write_json(&mut out, &ScanReport { meta, records })?;
        }
    }
    out.flush()?;
    Ok(())
}

fn run_revcomp(input: &str, out_path: Option<&str>) -> Result<()> {
    let raw = read_input(input)?;
    let rec = fasta::parse_single(&raw).with_context(|| format!("invalid FASTA '{}'", input))?;
    let seq = DnaSequence::from_bases(rec.seq).with_context(|| format!("record '{}'", rec.id))?;
    let rc = guide::reverse_complement(&seq);

    let mut out = open_output(out_path)?;
    writeln!(out, ">{} reverse complement", rec.id)?;
    for chunk in rc.as_bytes().chunks(60) {
        out.write_all(chunk)?;
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}
