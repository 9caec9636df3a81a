use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::{info, info_span};

use evreg_cli::settings::{Settings, to_toml};
use evreg_cli::store::JsonStore;
use evreg_cli::workflow::{PreparedDraft, export_event, prepare_draft, submit_draft};
use evreg_export::{ExportFormat, ExportReport};
use evreg_model::{RegistrationDraft, RegistrationStats, StatsSource};
use evreg_rules::{SubmissionOutcome, form_for_event, resolve_policy};

use crate::cli::{DraftArgs, ExportArgs, PolicyArgs, RegisterArgs, StatsArgs, StoreArgs};
use crate::summary::print_policy;

pub fn run_policy(args: &PolicyArgs) {
    let policy = resolve_policy(&args.event_title);
    print_policy(&args.event_title, &policy, form_for_event(&args.event_title));
}

pub fn run_draft(args: &DraftArgs) -> Result<PreparedDraft> {
    let draft = match &args.input {
        Some(path) => read_draft(path)?,
        None => RegistrationDraft::default(),
    };
    let participation = match (args.team, args.individual) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    };
    let prepared = prepare_draft(&args.event_title, draft, participation, args.size);
    let json = serde_json::to_string_pretty(&prepared.draft).context("serialize draft")?;
    println!("{json}");
    Ok(prepared)
}

pub fn run_register(args: &RegisterArgs, settings: &Settings) -> Result<SubmissionOutcome> {
    let span = info_span!("register", event_id = %args.target.event);
    let _guard = span.enter();
    let store = open_store(&args.target, settings)?;
    let draft = read_draft(&args.draft)?;
    let outcome = submit_draft(
        &store,
        &args.target.event,
        draft,
        args.reconcile,
        Utc::now(),
    )?;
    info!(
        registration_id = %outcome.receipt.registration_id,
        "registration stored"
    );
    Ok(outcome)
}

pub fn run_export(args: &ExportArgs, settings: &Settings) -> Result<ExportReport> {
    let span = info_span!("export", event_id = %args.target.event);
    let _guard = span.enter();
    let store = open_store(&args.target, settings)?;
    let output_dir = args
        .output_dir
        .clone()
        .or_else(|| settings.export.output_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."));
    let format = args
        .format
        .map_or(settings.export.format, ExportFormat::from);
    let options = settings
        .export
        .export_options()
        .context("invalid export settings")?;
    export_event(
        &store,
        &args.target.event,
        &output_dir,
        format,
        &options,
        Utc::now(),
    )
}

pub fn run_stats(args: &StatsArgs, settings: &Settings) -> Result<RegistrationStats> {
    let store = open_store(&args.target, settings)?;
    store
        .get_stats(&args.target.event)
        .with_context(|| format!("compute statistics for {}", args.target.event))
}

pub fn run_settings(settings: &Settings) -> Result<()> {
    let text = to_toml(settings).context("serialize settings")?;
    print!("{text}");
    Ok(())
}

fn open_store(target: &StoreArgs, settings: &Settings) -> Result<JsonStore> {
    JsonStore::open(&target.store, settings.stats.stats_options())
        .with_context(|| format!("open store {}", target.store.display()))
}

fn read_draft(path: &Path) -> Result<RegistrationDraft> {
    let content =
        fs::read_to_string(path).with_context(|| format!("read draft {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("parse draft {}", path.display()))
}
