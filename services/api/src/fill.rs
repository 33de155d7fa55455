use chrono::NaiveDate;
use clap::Args;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::info;
use va_form_filler::config::AppConfig;
use va_form_filler::error::AppError;
use va_form_filler::forms::va21_0966::{FillOptions, FilledForm, FormFiller, SigningDate};
use va_form_filler::forms::writer::JsonFieldDump;
use va_form_filler::telemetry;

#[derive(Args, Debug)]
pub(crate) struct FillArgs {
    /// Applicant record in JSON
    pub(crate) input: PathBuf,
    /// Directory for the field dump (defaults to FORM_OUTPUT_DIR)
    #[arg(long)]
    pub(crate) output_dir: Option<PathBuf>,
    /// Signing date (YYYY-MM-DD) used when the record leaves date_signed empty. Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) signed_on: Option<NaiveDate>,
    /// Print every field assignment, including personal data, to stdout
    #[arg(long)]
    pub(crate) print: bool,
}

pub(crate) fn run_fill(args: FillArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| config.forms.output_dir.clone());
    let (form, location) = fill_to_dir(&args.input, &output_dir, args.signed_on)?;

    info!(
        fields = form.fields.len(),
        checked = form.fields.checked_count(),
        location = %location.display(),
        "form fields written"
    );
    render_fill_summary(&form, &location, args.print);
    Ok(())
}

pub(crate) fn fill_to_dir(
    input: &Path,
    output_dir: &Path,
    signed_on: Option<NaiveDate>,
) -> Result<(FilledForm, PathBuf), AppError> {
    let raw = read_record(input)?;
    let filler = FormFiller::new(fill_options(signed_on));
    Ok(filler.fill_into(&raw, &JsonFieldDump, output_dir)?)
}

fn fill_options(signed_on: Option<NaiveDate>) -> FillOptions {
    FillOptions {
        signing_date: signed_on.map_or(SigningDate::Today, SigningDate::On),
    }
}

fn read_record(path: &Path) -> Result<Value, AppError> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

fn render_fill_summary(form: &FilledForm, location: &Path, print_fields: bool) {
    println!("VA Form 21-0966 fill");
    println!("  Output file: {}", form.output_file_name);
    println!("  Field dump: {}", location.display());
    println!(
        "  Fields written: {} ({} checkbox{} checked)",
        form.fields.len(),
        form.fields.checked_count(),
        if form.fields.checked_count() == 1 { "" } else { "es" }
    );

    if print_fields {
        println!("\nField assignments");
        for (identifier, value) in form.fields.iter() {
            println!("  {identifier} = {:?}", value.as_str());
        }
    }
}
