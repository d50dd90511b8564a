#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::missing_crate_level_docs
)]

//! Batch email dispatcher CLI

use std::{fs, path::PathBuf, sync::Arc};

use anyhow::Result;
use clap::{Parser, ValueEnum};
use mailrun::{
    domain::campaign::{
        credentials::{discover_accounts, ConfigMap},
        dispatcher::Dispatcher,
        feed::{parse_recipients, parse_subjects},
        plan::DeliveryPlan,
    },
    infrastructure::{
        email::smtp::{SmtpMailer, SmtpServerConfig},
        log::file::FileDeliveryLog,
    },
};

/// How recipients are mapped to sending accounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Each recipient row names its sender; rows gate on the status marker
    Bound,

    /// Senders are discovered from configuration and cycled across
    /// successful sends
    Rotation,
}

/// Command-line arguments / environment variables
#[derive(Debug, Parser)]
pub struct Args {
    /// The delivery mode
    #[clap(long, env = "MAILRUN_MODE", value_enum, default_value = "bound")]
    pub mode: Mode,

    /// The recipient feed (comma-delimited, header row discarded)
    #[clap(long, env = "RECIPIENTS_FILE", default_value = "emails.csv")]
    pub recipients: PathBuf,

    /// The subject list cycled in rotation mode (one subject per line)
    #[clap(long, env = "SUBJECTS_FILE")]
    pub subjects: Option<PathBuf>,

    /// Where successful sends are appended
    #[clap(long, env = "DELIVERY_LOG_FILE", default_value = "sent_log.csv")]
    pub delivery_log: PathBuf,

    /// The SMTP relay configuration
    #[clap(flatten)]
    pub smtp: SmtpServerConfig,
}

#[mutants::skip]
#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let vars: ConfigMap = std::env::vars().collect();

    let recipients = parse_recipients(&fs::read_to_string(&args.recipients)?);

    let plan = match args.mode {
        Mode::Bound => DeliveryPlan::bound(vars),
        Mode::Rotation => {
            let accounts = discover_accounts(&vars)?;

            let subjects = match &args.subjects {
                Some(path) => parse_subjects(&fs::read_to_string(path)?),
                None => Vec::new(),
            };

            DeliveryPlan::rotation(accounts, subjects)
        }
    };

    let dispatcher = Dispatcher::new(
        Arc::new(SmtpMailer::new(args.smtp)),
        Arc::new(FileDeliveryLog::new(&args.delivery_log)),
        plan,
    );

    let report = dispatcher.run(&recipients).await;

    tracing::info!(
        sent = report.sent,
        failed = report.failed,
        skipped = report.skipped,
        "done"
    );

    Ok(())
}
