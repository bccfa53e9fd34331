//! Sync command: one source into one artifact

use std::path::PathBuf;
use std::time::Duration;

use clap::Args;
use subdecode_core::diff::render_human_summary;
use subdecode_core::{
    EmptySourcePolicy, NoopNotifier, Notify, Origin, Pipeline, PipelineConfig, RunOutcome,
    RunReport, SourceEncoding,
};
use subdecode_fetch::{resolve_source, FetchOptions, Fetcher, UserAgent};
use subdecode_store::FsStateStore;

use crate::clipboard::ClipboardNotifier;

#[derive(Debug, Args)]
pub struct SyncArgs {
    /// Subscription URL or local file
    #[arg(short, long)]
    pub link: String,

    /// Optional HTTP/HTTPS proxy (e.g. http://127.0.0.1:10809)
    #[arg(short, long, env = "SUBDECODE_PROXY", hide_env_values = true)]
    pub proxy: Option<String>,

    /// User agent: chrome, firefox, edge or curl
    #[arg(long, env = "SUBDECODE_UA", default_value = "chrome")]
    pub ua: UserAgent,

    /// Directory holding the artifacts
    #[arg(short, long, env = "SUBDECODE_OUTPUT", default_value = "output")]
    pub output: PathBuf,

    /// Total request timeout in seconds
    #[arg(
        long,
        env = "SUBDECODE_TIMEOUT",
        default_value_t = 15,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,

    /// Accept an empty source even if it wipes the stored entries
    #[arg(long)]
    pub allow_empty: bool,

    /// Do not copy the result to the clipboard
    #[arg(long)]
    pub no_clipboard: bool,

    /// Print the run report as JSON
    #[arg(long)]
    pub json: bool,
}

impl SyncArgs {
    fn fetch_options(&self) -> FetchOptions {
        let options = FetchOptions::default()
            .with_user_agent(self.ua)
            .with_timeout(Duration::from_secs(self.timeout));
        match &self.proxy {
            Some(proxy) if !proxy.trim().is_empty() => options.with_proxy(proxy.trim()),
            _ => options,
        }
    }

    fn pipeline_config(&self) -> PipelineConfig {
        let policy = if self.allow_empty {
            EmptySourcePolicy::Overwrite
        } else {
            EmptySourcePolicy::Refuse
        };
        PipelineConfig::default().with_empty_source_policy(policy)
    }
}

pub fn execute(args: SyncArgs) -> Result<(), Box<dyn std::error::Error>> {
    let source = resolve_source(&args.link)?;
    tracing::debug!(
        source_id = source.id(),
        output = %args.output.display(),
        user_agent = %args.ua,
        proxy = args.proxy.is_some(),
        timeout_secs = args.timeout,
        "sync options resolved"
    );

    let fetcher = Fetcher::new(args.fetch_options());
    let store = FsStateStore::new(&args.output);
    let clipboard = ClipboardNotifier;
    let noop = NoopNotifier;
    let notifier: &dyn Notify = if args.no_clipboard { &noop } else { &clipboard };

    let report = Pipeline::new(&fetcher, &store, notifier)
        .with_config(args.pipeline_config())
        .run(&source)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report, args.no_clipboard);
    }

    Ok(())
}

fn print_report(report: &RunReport, clipboard_disabled: bool) {
    match (report.origin, report.encoding) {
        (Origin::Remote, SourceEncoding::Base64) => {
            println!("ℹ Base64 subscription detected from URL")
        }
        (Origin::Remote, SourceEncoding::Plain) => {
            println!("ℹ Plain text subscription detected from URL")
        }
        (Origin::LocalFile, SourceEncoding::Base64) => {
            println!("ℹ Base64 configs read from local file: {}", report.source_id)
        }
        (Origin::LocalFile, SourceEncoding::Plain) => {
            println!("ℹ Read configs from local file: {}", report.source_id)
        }
    }

    match report.outcome {
        RunOutcome::UpToDate => {
            println!("ℹ No updates detected, file is already up to date.");
        }
        RunOutcome::Updated => {
            println!("✅ Subscription updated!");
            println!("{}", render_human_summary(&report.diff));
            if report.notified && !clipboard_disabled {
                println!("📋 Copied to clipboard");
            } else if !clipboard_disabled {
                println!("⚠ Clipboard unavailable, copy skipped");
            }
            println!("📄 Saved to {}", report.artifact_location);
        }
    }
}
