use std::path::Path;
use std::sync::Arc;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use serde::Serialize;

use rominfo_lib::{
    DispatchMode, OutputFormat, ParseOutcome, ParsePool, ParserRegistry, RomProperties, Settings,
    default_registry,
};

use crate::cli_types::InfoArgs;
use crate::error::CliError;

/// One element of the `--json` output array.
#[derive(Serialize)]
struct JsonEntry {
    path: String,
    platform: Option<&'static str>,
    properties: RomProperties,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl From<ParseOutcome> for JsonEntry {
    fn from(outcome: ParseOutcome) -> Self {
        let path = outcome.path.display().to_string();
        match outcome.result {
            Ok(Some((platform, properties))) => Self {
                path,
                platform: Some(platform.short_name()),
                properties,
                error: None,
            },
            Ok(None) => Self {
                path,
                platform: None,
                properties: RomProperties::new(),
                error: None,
            },
            Err(e) => Self {
                path,
                platform: None,
                properties: RomProperties::new(),
                error: Some(e.to_string()),
            },
        }
    }
}

/// Build the registry the flags and settings ask for.
pub(crate) fn build_registry(args: &InfoArgs, settings: &Settings) -> ParserRegistry {
    let registry =
        default_registry().with_sniff_content(settings.parse.sniff_content && !args.no_sniff);
    match &args.consoles {
        Some(platforms) => registry.with_platforms(platforms),
        None => registry,
    }
}

/// Run the info command. Returns `false` when any file could not be read.
pub(crate) fn run_info(args: InfoArgs, settings: &Settings, quiet: bool) -> Result<bool, CliError> {
    let registry = build_registry(&args, settings);
    let jobs = args.jobs.unwrap_or_else(|| settings.jobs()).max(1);
    let mode = if args.buffer {
        DispatchMode::Content
    } else {
        DispatchMode::Path
    };
    let format = if args.json {
        OutputFormat::Json
    } else {
        settings.output.format
    };

    log::debug!(
        "Parsing {} file(s) with {} job(s), {:?} dispatch, sniffing {}",
        args.paths.len(),
        jobs,
        mode,
        if registry.sniff_content() { "on" } else { "off" },
    );

    let outcomes = parse_all(Arc::new(registry), args.paths, jobs, mode, quiet)?;
    let all_read = outcomes.iter().all(|o| o.result.is_ok());

    match format {
        OutputFormat::Text => print_text(&outcomes),
        OutputFormat::Json => {
            let entries: Vec<JsonEntry> = outcomes.into_iter().map(JsonEntry::from).collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
    }

    Ok(all_read)
}

fn parse_all(
    registry: Arc<ParserRegistry>,
    paths: Vec<std::path::PathBuf>,
    jobs: usize,
    mode: DispatchMode,
    quiet: bool,
) -> Result<Vec<ParseOutcome>, CliError> {
    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::runtime(format!("Failed to create tokio runtime: {}", e)))?;

    let total = paths.len();
    let pb = if total > 1 && !quiet {
        let pb = ProgressBar::new(total as u64);
        pb.set_style(
            ProgressStyle::with_template("  {bar:30.cyan/blue} {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut outcomes = rt.block_on(async {
        let mut pool = ParsePool::start(registry, paths, jobs, mode);
        let mut outcomes = Vec::with_capacity(total);
        while let Some(outcome) = pool.recv().await {
            pb.inc(1);
            pb.set_message(file_name(&outcome.path));
            outcomes.push(outcome);
        }
        outcomes
    });
    pb.finish_and_clear();

    outcomes.sort_by_key(|o| o.index);
    Ok(outcomes)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn print_text(outcomes: &[ParseOutcome]) {
    for (i, outcome) in outcomes.iter().enumerate() {
        if i > 0 {
            log::info!("");
        }
        log::info!(
            "{}",
            outcome.path.display().if_supports_color(Stdout, |t| t.bold())
        );

        match &outcome.result {
            Ok(Some((platform, props))) => {
                log::info!(
                    "  Platform: {}",
                    platform
                        .display_name()
                        .if_supports_color(Stdout, |t| t.cyan())
                );
                let width = props.iter().map(|(k, _)| k.len()).max().unwrap_or(0) + 1;
                for (key, value) in props.iter() {
                    log::info!("    {:<width$} {}", format!("{}:", key), value, width = width);
                }
            }
            Ok(None) => log::info!(
                "  {}",
                "Unrecognized format".if_supports_color(Stdout, |t| t.dimmed())
            ),
            Err(e) => log::warn!(
                "  {} {}",
                "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
                e
            ),
        }
    }
}

#[cfg(test)]
#[path = "tests/info_tests.rs"]
mod tests;
