// src/cli.rs
use std::{env, path::PathBuf};

use crate::config::options::{AppOptions, ExportFormat};
use crate::enrich::DEFAULT_TAGS;
use crate::progress::Progress;
use crate::{runner, stats};

pub enum Mode {
    Cli(Params),
    Gui,
}

#[derive(Clone, Debug, Default)]
pub struct Params {
    pub options: AppOptions,
    /// Print aggregate counts to stdout after the run.
    pub summary: bool,
    /// Skip the export file, run + summary only.
    pub no_export: bool,
}

// Decide CLI vs GUI
pub fn detect_mode() -> Result<Mode, Box<dyn std::error::Error>> {
    if env::args().len() == 1 {
        // only program name
        return Ok(Mode::Gui);
    }
    let params = parse_cli()?;
    Ok(Mode::Cli(params))
}

/// Prints pipeline progress as plain lines.
struct StdoutProgress;
impl Progress for StdoutProgress {
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn step_done(&mut self, label: &str) {
        println!("done: {label}");
    }
}

pub fn run(params: Params) -> Result<(), Box<dyn std::error::Error>> {
    let options = params.options.clone();
    if params.no_export {
        // In-memory half only; nothing touches the disk.
        let (records, _) = runner::load_and_enrich(&options.load, Some(&mut StdoutProgress))?;
        if params.summary {
            print_summary(&records);
        }
        println!("{} record(s) enriched (no export)", records.len());
        return Ok(());
    }

    let (summary, records) = runner::run(&options, Some(&mut StdoutProgress))?;
    if params.summary {
        print_summary(&records);
    }
    match &summary.written {
        Some(path) => println!(
            "{} record(s) from {} file(s) → {}",
            summary.records, summary.files_read, path.display()
        ),
        None => println!("No records; nothing written."),
    }
    Ok(())
}

fn print_summary(records: &[crate::records::EnrichedRecord]) {
    println!("-- Regiões --");
    for (region, n) in stats::counts_by_region(records) {
        println!("{:<20} {}", region.label(), n);
    }
    println!("-- Senioridade --");
    for (tier, n) in stats::counts_by_seniority(records) {
        println!("{:<20} {}", tier.label(), n);
    }
    println!("-- Fontes --");
    for (source, n) in stats::counts_by_source(records) {
        println!("{:<20} {}", source.label(), n);
    }
    println!("-- Top 10 empresas --");
    for (company, n) in stats::top_companies(records, 10) {
        println!("{:<30} {}", company, n);
    }
    println!("-- Tecnologias --");
    for (tag, n) in stats::technology_counts(records, &DEFAULT_TAGS) {
        println!("{:<20} {}", tag, n);
    }
    let sal = stats::salary_stats(records);
    if sal.count > 0 {
        println!(
            "-- Salários -- n={} média=R$ {:.2} mediana=R$ {:.2}",
            sal.count, sal.mean, sal.median
        );
    } else {
        println!("-- Salários -- nenhum valor numérico");
    }
}

fn parse_cli() -> Result<Params, Box<dyn std::error::Error>> {
    let mut params = Params::default();
    let mut inputs: Vec<PathBuf> = Vec::new();

    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "-i" | "--input" => {
                let v = args.next().ok_or("Missing value for --input")?;
                inputs.push(PathBuf::from(v));
            }
            "-o" | "--out" => {
                let v = args.next().ok_or("Missing output path")?;
                params.options.export.set_path(&v);
            }
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                params.options.export.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => ExportFormat::Csv,
                    "tsv" => ExportFormat::Tsv,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };
            }
            "--no-headers" => params.options.export.include_headers = false,
            "--summary" | "-s" => params.summary = true,
            "--no-export" => params.no_export = true,
            "-j" | "--jobs" => {
                let v: usize = args.next().ok_or("Missing value for --jobs")?.parse()?;
                if v == 0 { return Err("--jobs must be at least 1".into()); }
                params.options.load.jobs = v;
            }
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    if !inputs.is_empty() {
        params.options.load.inputs = inputs;
    }
    Ok(params)
}
