use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::Table;
use lead_import::{
    BulkImportReport, BulkImporter, ImportSummary, InMemoryLeadStore, LeadInput,
    PipelineOptions, parse_csv,
};
use lead_model::{ValidatedLead, ValidationStatus};
use lead_standards::default_registry;
use serde::Serialize;
use tracing::info_span;

use lead_cli::render::{
    country_table, import_report_table, lead_table, leads_to_csv, leads_to_json, summary_table,
};

use crate::cli::{CheckArgs, CountriesArgs, DialectArgs, ImportArgs, OutputFormatArg};

/// JSON document written by `import --json`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ImportOutcome {
    summary: ImportSummary,
    report: BulkImportReport,
}

/// Returns the status counts of every classified lead, before `--only`.
pub fn run_check(args: &CheckArgs, styled: bool) -> Result<ImportSummary> {
    let _span = info_span!("check", file = %args.file.display()).entered();
    let leads = classify_file(&args.file, &args.dialect)?;
    let summary = ImportSummary::from_leads(&leads);

    let shown: Vec<ValidatedLead> = match args.only {
        Some(status) => {
            let status = ValidationStatus::from(status);
            leads
                .into_iter()
                .filter(|lead| lead.status() == status)
                .collect()
        }
        None => leads,
    };

    match args.format {
        OutputFormatArg::Table => {
            print_table(lead_table(&shown), styled);
            print_table(summary_table(&summary), styled);
        }
        OutputFormatArg::Json => println!("{}", leads_to_json(&shown)?),
        OutputFormatArg::Csv => print!("{}", leads_to_csv(&shown)?),
    }
    Ok(summary)
}

/// Imports the importable leads of a file into a fresh in-memory store.
pub fn run_import(args: &ImportArgs, styled: bool) -> Result<BulkImportReport> {
    let _span = info_span!("import", file = %args.file.display()).entered();
    let leads = classify_file(&args.file, &args.dialect)?;
    let summary = ImportSummary::from_leads(&leads);
    let inputs: Vec<LeadInput> = leads
        .iter()
        .filter(|lead| lead.is_importable())
        .map(|lead| LeadInput::from(&lead.lead))
        .collect();

    let store = InMemoryLeadStore::new();
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .context("start async runtime")?;
    let report = runtime
        .block_on(BulkImporter::new(&store).import(&inputs))
        .context("import leads")?;

    if args.json {
        let outcome = ImportOutcome { summary, report };
        let json = serde_json::to_string_pretty(&outcome).context("serialize import report")?;
        println!("{json}");
        return Ok(outcome.report);
    }

    print_table(summary_table(&summary), styled);
    print_table(import_report_table(&report), styled);
    Ok(report)
}

pub fn run_countries(args: &CountriesArgs, styled: bool) -> Result<()> {
    let registry = default_registry();
    let countries = registry.search(args.search.as_deref().unwrap_or_default());
    print_table(country_table(&countries), styled);
    Ok(())
}

fn classify_file(path: &Path, dialect: &DialectArgs) -> Result<Vec<ValidatedLead>> {
    let text = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let options = PipelineOptions::default()
        .with_delimiter(dialect.delimiter)
        .with_quote(dialect.quote);
    parse_csv(&text, &options, default_registry())
        .with_context(|| format!("parse {}", path.display()))
}

fn print_table(mut table: Table, styled: bool) {
    if styled {
        table.enforce_styling();
    } else {
        table.force_no_tty();
    }
    println!("{table}");
}
