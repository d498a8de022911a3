#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # weblab
//!
//! A batch autograder for student front-end labs.
//!
//! Point it at `{group}/{student}/{task}` submission paths and it grades each
//! one against its registered rubric, writing per-submission reports, a batch
//! summary, and a machine-readable grade collection.

use std::path::PathBuf;

use anyhow::Result;
use bpaf::*;
use dotenvy::dotenv;
use tracing::{Level, metadata::LevelFilter};
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};
use weblab::{
    config::{AdvisoryConfig, AuditConfig, CheckConfig},
    rubric::RubricRegistry,
    run,
};

/// Arguments of the `check` subcommand.
#[derive(Debug, Clone)]
struct CheckArgs {
    /// Grade only this task identifier.
    only:     Option<String>,
    /// Minimum acceptable Lighthouse accessibility score.
    a11y_min: u32,
    /// Minimum Lighthouse best-practices score for quality credit.
    bp_min:   u32,
    /// Upper bound on concurrently graded submissions.
    jobs:     usize,
    /// Output root for reports, the summary, and grades.json.
    out:      PathBuf,
    /// Top-level directory submissions must live under.
    group:    String,
    /// Skip the dynamic Lighthouse audit.
    no_audit: bool,
    /// Student task paths to grade.
    paths:    Vec<String>,
}

/// Top-level CLI commands.
#[derive(Debug, Clone)]
enum Cmd {
    /// Grade a batch of submissions
    Check(CheckArgs),
    /// List the registered rubrics
    Rubrics,
}

/// Parse the command line arguments and return a `Cmd` enum
fn options() -> Cmd {
    let only = long("only")
        .help("Grade only this task identifier")
        .argument::<String>("TASK")
        .optional();
    let a11y_min = long("a11y-min")
        .help("Minimum acceptable Lighthouse accessibility score")
        .argument::<u32>("N")
        .fallback(90);
    let bp_min = long("bp-min")
        .help("Minimum Lighthouse best-practices score for quality credit")
        .argument::<u32>("N")
        .fallback(90);
    let jobs = long("jobs")
        .help("How many submissions to grade concurrently")
        .argument::<usize>("N")
        .fallback(1);
    let out = long("out")
        .help("Directory reports and the summary are written under")
        .argument::<PathBuf>("DIR")
        .fallback(PathBuf::from("out"));
    let group = long("group")
        .help("Top-level directory submissions must live under")
        .argument::<String>("DIR")
        .fallback(String::from("students"));
    let no_audit = long("no-audit")
        .help("Skip the dynamic Lighthouse audit")
        .switch();
    let paths = positional::<String>("PATH")
        .help("Student task paths shaped {group}/{student}/{task}")
        .many();

    let check = construct!(CheckArgs {
        only,
        a11y_min,
        bp_min,
        jobs,
        out,
        group,
        no_audit,
        paths
    })
    .map(Cmd::Check)
    .to_options()
    .command("check")
    .help("Grade a batch of student submissions");

    let rubrics = pure(Cmd::Rubrics)
        .to_options()
        .command("rubrics")
        .help("List the registered rubrics");

    let cmd = construct!([check, rubrics]);

    cmd.to_options()
        .descr("Autograder for front-end labs")
        .run()
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let fmt = fmt::layer()
        .without_time()
        .with_file(false)
        .with_line_number(false);
    let filter_layer = LevelFilter::from_level(Level::INFO);
    tracing_subscriber::registry()
        .with(fmt)
        .with(filter_layer)
        .init();

    match options() {
        Cmd::Check(args) => {
            let mut audit = AuditConfig::from_env();
            audit.enabled = !args.no_audit;

            let config = CheckConfig::builder()
                .paths(args.paths)
                .out_root(args.out)
                .group_root(args.group)
                .maybe_only(args.only)
                .a11y_min(args.a11y_min)
                .bp_min(args.bp_min)
                .jobs(args.jobs)
                .audit(audit)
                .maybe_advisory(AdvisoryConfig::from_env())
                .build();

            let summary = run::run_check(config).await?;
            tracing::info!(
                "Done: {} graded, {} skipped.",
                summary.results.len(),
                summary.skipped.len()
            );
        }
        Cmd::Rubrics => {
            for rubric in RubricRegistry::with_defaults()?.iter() {
                println!("{}\t{}", rubric.id(), rubric.title());
            }
        }
    }

    Ok(())
}
