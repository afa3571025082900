use anyhow::{bail, Result};
use clap::Parser;
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

use adbgen::cli::Cli;
use adbgen::client::zosmf::ZosmfFiles;
use adbgen::client::RestCaller;
use adbgen::config::{Config, Endpoint, GenDefaults};
use adbgen::gen::Gen;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();
    let cfg = Config::load();
    let defaults = GenDefaults::from_config(&cfg)?;
    let ssid = args.ssid.clone().unwrap_or_else(|| defaults.subsystem.clone());

    let mut gen = Gen::new(&defaults);
    if ssid != defaults.subsystem {
        gen.retarget(&ssid);
    }

    for spec in &args.tables {
        let (q, n) = split_qualified(spec)?;
        gen.requests.add_table(q, n);
    }
    for spec in &args.views {
        let (q, n) = split_qualified(spec)?;
        gen.requests.add_view(q, n);
    }
    for spec in &args.indexes {
        let (q, n) = split_qualified(spec)?;
        gen.requests.add_index(q, n);
    }
    for spec in &args.aliases {
        let (q, n) = split_qualified(spec)?;
        gen.requests.add_alias(q, n);
    }
    for spec in &args.synonyms {
        let (q, n) = split_qualified(spec)?;
        gen.requests.add_synonym(q, n);
    }
    for spec in &args.triggers {
        let (q, n) = split_qualified(spec)?;
        gen.requests.add_trigger(q, n);
    }
    for spec in &args.udts {
        let (q, n) = split_qualified(spec)?;
        gen.requests.add_user_defined_type(q, n);
    }
    for spec in &args.udfs {
        let (q, n) = split_qualified(spec)?;
        gen.requests.add_user_defined_function(q, n);
    }
    for spec in &args.procedures {
        let (q, n) = split_qualified(spec)?;
        gen.requests.add_stored_procedure(q, n);
    }
    for spec in &args.sequences {
        let (q, n) = split_qualified(spec)?;
        gen.requests.add_sequence(q, n);
    }
    for spec in &args.sequence_aliases {
        let (q, n) = split_qualified(spec)?;
        gen.requests.add_sequence_alias(q, n);
    }
    for spec in &args.tablespaces {
        let (db, ts) = split_qualified(spec)?;
        gen.requests.add_tablespace(db, ts);
    }
    for name in &args.databases {
        gen.requests.add_database(name);
    }
    for name in &args.stogroups {
        gen.requests.add_stogroup(name);
    }
    for name in &args.schemas {
        gen.requests.add_schema(name);
    }

    if gen.requests.is_empty() {
        bail!("no objects requested; pass --table, --database, --tablespace, ...");
    }

    if let Some(v) = &args.all_gen {
        gen.options.set_all_gen(v);
    }
    if let Some(v) = &args.all_grants {
        gen.options.set_all_grants(v);
    }
    if args.statistics {
        gen.options.catalogstatistics = "Y".into();
    }
    if args.no_report {
        gen.rpt_output.dsname.clear();
    } else if let Some(ds) = &args.report_ds {
        gen.rpt_output.dsname = ds.clone();
    }
    gen.debug_proc = args.debug_proc;

    let endpoint = Endpoint::resolve(&cfg, &defaults, &ssid)?;
    let caller = RestCaller::from_config(&cfg, &defaults, &endpoint)?;
    let reports = if gen.rpt_output.dsname.is_empty() {
        None
    } else {
        Some(ZosmfFiles::from_config(&cfg)?)
    };

    gen.execute(&caller, reports.as_ref()).await?;
    print!("{}", gen.ddl_as_string()?);

    if !args.expect.is_empty() {
        let rows: Vec<Vec<&str>> = args.expect.iter().map(|r| r.split('|').collect()).collect();
        let row_refs: Vec<&[&str]> = rows.iter().map(|r| r.as_slice()).collect();
        gen.assert_text_between_terminators(&row_refs, ';')?;
        eprintln!("{}", "all checklist rows satisfied".green());
    }

    Ok(())
}

fn split_qualified(spec: &str) -> Result<(&str, &str)> {
    match spec.split_once('.') {
        Some((q, n)) if !q.is_empty() && !n.is_empty() => Ok((q, n)),
        _ => bail!("expected QUALIFIER.NAME, got '{spec}'"),
    }
}
