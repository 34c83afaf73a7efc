//! Command line front end for the amortization engine
//!
//! `amortize schedule` prints the summary and payment table for one loan.
//! `amortize sweep` evaluates a grid of rates and terms and writes it as CSV.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use loan_amortization::{
    amortization::amortize,
    export::{schedule_json, write_schedule_csv, write_sweep_csv},
    scenarios::{run_sweep, SweepParams},
    AmortizationSchedule, LoanParams,
};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "amortize", version, about = "Fixed-rate loan amortization schedules")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the payment schedule for one loan
    Schedule(ScheduleArgs),
    /// Evaluate a grid of rates and terms for one principal
    Sweep(SweepArgs),
}

#[derive(Args)]
struct ScheduleArgs {
    /// JSON file with principal, annual_rate_percent and term_months
    #[arg(long)]
    params: Option<PathBuf>,

    /// Loan amount
    #[arg(long)]
    principal: Option<f64>,

    /// Annual interest rate in percent
    #[arg(long)]
    rate: Option<f64>,

    /// Term in months
    #[arg(long)]
    term: Option<f64>,

    #[arg(long, value_enum, default_value = "table")]
    format: OutputFormat,

    /// Write to this file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct SweepArgs {
    #[arg(long)]
    principal: f64,

    #[arg(long)]
    rate_start: f64,

    #[arg(long)]
    rate_end: f64,

    #[arg(long, default_value_t = 0.25)]
    rate_step: f64,

    /// Comma-separated terms in months
    #[arg(long, value_delimiter = ',', default_value = "180,360")]
    terms: Vec<u32>,

    /// Write to this file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Schedule(args) => run_schedule(args),
        Commands::Sweep(args) => run_sweep_command(args),
    }
}

fn open_output(path: Option<&PathBuf>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}

fn run_schedule(args: ScheduleArgs) -> Result<()> {
    let base = match &args.params {
        Some(path) => LoanParams::from_json_file(path)?,
        None => LoanParams::default(),
    };
    let params = base.with_overrides(args.principal, args.rate, args.term);
    let input = params.to_input().context("Cannot build a schedule for these inputs")?;

    let schedule = amortize(&input);
    let mut out = open_output(args.output.as_ref())?;

    match args.format {
        OutputFormat::Table => print_table(out.as_mut(), &params, &schedule)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &schedule_json(&schedule))?;
            writeln!(out)?;
        }
        OutputFormat::Csv => write_schedule_csv(&mut out, &schedule)?,
    }
    out.flush()?;

    if let Some(path) = &args.output {
        log::info!("Output written to {}", path.display());
    }
    Ok(())
}

fn run_sweep_command(args: SweepArgs) -> Result<()> {
    let params = SweepParams {
        principal: args.principal,
        rate_start: args.rate_start,
        rate_end: args.rate_end,
        rate_step: args.rate_step,
        terms: args.terms,
    };

    let start = Instant::now();
    let rows = run_sweep(&params).context("Invalid sweep grid")?;
    log::info!("Sweep of {} points complete in {:?}", rows.len(), start.elapsed());

    let mut out = open_output(args.output.as_ref())?;
    write_sweep_csv(&mut out, &rows)?;
    out.flush()?;
    Ok(())
}

fn print_table(
    out: &mut dyn Write,
    params: &LoanParams,
    schedule: &AmortizationSchedule,
) -> Result<()> {
    // to_input() succeeded, so the summary is present
    let Some(summary) = schedule.summary() else {
        return Ok(());
    };

    writeln!(out, "Loan Summary:")?;
    writeln!(out, "  Principal:        ${}", money(params.principal))?;
    writeln!(out, "  Annual rate:      {}%", params.annual_rate_percent)?;
    writeln!(out, "  Term:             {} months", params.term_months)?;
    writeln!(out, "  Monthly payment:  ${}", money(summary.monthly_payment))?;
    writeln!(out, "  Total payments:   ${}", money(summary.total_payments))?;
    writeln!(out, "  Total interest:   ${}", money(summary.total_interest))?;
    writeln!(out)?;

    writeln!(
        out,
        "{:>6} {:>16} {:>16} {:>16} {:>18}",
        "Month", "Payment", "Principal", "Interest", "Balance"
    )?;
    for p in schedule.payments() {
        writeln!(
            out,
            "{:>6} {:>16} {:>16} {:>16} {:>18}",
            p.payment_number,
            money(p.payment_amount),
            money(p.principal_amount),
            money(p.interest_amount),
            money(p.remaining_balance),
        )?;
    }
    Ok(())
}

/// Two decimals with thousands separators
fn money(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (whole, cents) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && formatted != "0.00" { "-" } else { "" };
    format!("{sign}{grouped}.{cents}")
}
