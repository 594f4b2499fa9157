//! `veritas`: the audit CLI.
//!
//! `clap` derive parsing, `tracing-subscriber` initialization gated on
//! `--verbose`, and a process exit code derived from the final audit
//! status rather than from `?` propagation alone.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use veritas_core::config::VeritasConfig;
use veritas_core::state::AuditStatus;
use veritas_core::{AuditId, AuditTier, VerdictMode};
use veritas_database::{DatabaseClient, DatabaseConfig, SqliteAuditRepository};
use veritas_evidence::EvidenceStore;
use veritas_runner::AuditRunner;

#[derive(Debug, Clone, Copy, ValueEnum)]
#[value(rename_all = "snake_case")]
enum TierArg {
    QuickScan,
    StandardAudit,
    DeepForensic,
}

impl From<TierArg> for AuditTier {
    fn from(value: TierArg) -> Self {
        match value {
            TierArg::QuickScan => AuditTier::QuickScan,
            TierArg::StandardAudit => AuditTier::StandardAudit,
            TierArg::DeepForensic => AuditTier::DeepForensic,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum VerdictModeArg {
    Simple,
    Expert,
}

impl From<VerdictModeArg> for VerdictMode {
    fn from(value: VerdictModeArg) -> Self {
        match value {
            VerdictModeArg::Simple => VerdictMode::Simple,
            VerdictModeArg::Expert => VerdictMode::Expert,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ReportArg {
    Pdf,
    Html,
    None,
}

/// Run a forensic trust audit against a URL.
#[derive(Debug, Parser)]
#[command(name = "veritas", about = "Web URL forensic trust auditor")]
struct Cli {
    /// Target URL to audit.
    url: String,

    #[arg(long, value_enum, default_value = "standard_audit")]
    tier: TierArg,

    #[arg(long = "verdict-mode", value_enum, default_value = "expert")]
    verdict_mode: VerdictModeArg,

    /// Comma-separated list of security module names to run; omit to run all.
    #[arg(long = "security-modules", value_delimiter = ',')]
    security_modules: Option<Vec<String>>,

    /// Emit the final result as JSON on stdout.
    #[arg(long)]
    json: bool,

    /// Write the final JSON result to a file.
    #[arg(long)]
    output: Option<PathBuf>,

    #[arg(long, value_enum, default_value = "none")]
    report: ReportArg,

    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(EnvFilter::new(filter)).init();

    match run(cli).await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("veritas: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = VeritasConfig::from_env();

    let database = DatabaseClient::connect(DatabaseConfig::new(config.database_path())).await?;
    let repository = Arc::new(SqliteAuditRepository::new(database));
    let evidence = Arc::new(EvidenceStore::new(config.evidence_root()).await?);
    let runner = AuditRunner::new(repository, evidence);

    let audit_id = AuditId::generate();
    println!("Starting audit {audit_id} for {}", cli.url);

    let outcome = runner
        .run(audit_id, cli.url.clone(), cli.tier.into(), cli.verdict_mode.into(), cli.security_modules.clone())
        .await?;

    if !matches!(cli.report, ReportArg::None) {
        eprintln!("veritas: report rendering ({:?}) is not implemented by this build", cli.report);
    }

    let result_json = serde_json::to_value(&outcome.final_state.judge_decision)?;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result_json)?);
    }
    if let Some(path) = &cli.output {
        tokio::fs::write(path, serde_json::to_vec_pretty(&result_json)?).await?;
    }

    if !cli.json {
        println!("status: {}", outcome.audit_row.status);
        if let Some(score) = outcome.audit_row.trust_score {
            println!("trust_score: {score}");
        }
        if let Some(risk) = &outcome.audit_row.risk_level {
            println!("risk_level: {risk}");
        }
        if let Some(narrative) = &outcome.audit_row.narrative {
            println!("{narrative}");
        }
    }

    let exit_code = match outcome.final_state.status {
        AuditStatus::Completed => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    };
    Ok(exit_code)
}
