//! Application startup and command dispatch

use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;

use crate::app::cli::{Args, Command, FileConfig};
use crate::core::logging::init_logging;
use crate::manifest::writer::DEFAULT_OUT_DIR;
use crate::manifest::{ManifestWriter, VersionStrategy};
use crate::poller::manager::DEFAULT_POLL_INTERVAL;
use crate::poller::{HttpVersionFetcher, VersionPoller};

/// Parse arguments, initialise logging and run the selected command.
/// Returns the process exit code.
pub fn run() -> i32 {
    let args = Args::parse();

    let config = match FileConfig::load(args.config_file.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return 1;
        }
    };

    let log_level = args.log_level.clone().or_else(|| config.log_level.clone());
    let log_format = args.log_format.clone().or_else(|| config.log_format.clone());
    let log_file = args
        .log_file
        .clone()
        .or_else(|| config.log_file.clone())
        .map(|p| p.to_string_lossy().to_string());

    if let Err(e) = init_logging(
        log_level.as_deref(),
        log_format.as_deref(),
        log_file.as_deref(),
        args.use_color(),
    ) {
        eprintln!("Error initialising logging: {e}");
        return 1;
    }

    match args.command {
        Command::Stamp {
            out_dir,
            file_name,
            strategy,
        } => run_stamp(
            out_dir.or(config.stamp.out_dir),
            file_name.or(config.stamp.file_name),
            strategy.or(config.stamp.strategy),
        ),
        Command::Watch { url, interval } => {
            run_watch(url.or(config.watch.url), interval.or(config.watch.interval))
        }
    }
}

fn run_stamp(
    out_dir: Option<PathBuf>,
    file_name: Option<String>,
    strategy: Option<String>,
) -> i32 {
    let strategy = match strategy.as_deref().map(VersionStrategy::from_str) {
        Some(Ok(strategy)) => strategy,
        Some(Err(e)) => {
            log::error!("FATAL: {e}");
            return 1;
        }
        None => VersionStrategy::default(),
    };

    let mut writer = ManifestWriter::new(out_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR)))
        .with_strategy(strategy);
    if let Some(file_name) = file_name {
        writer = writer.with_file_name(file_name);
    }

    match writer.write() {
        Ok(path) => {
            println!("{}", path.display());
            0
        }
        // Fatal to the build step that invoked us
        Err(e) => {
            log::error!("FATAL: {e}");
            1
        }
    }
}

fn run_watch(url: Option<String>, interval: Option<u64>) -> i32 {
    let Some(url) = url else {
        log::error!("FATAL: No URL to watch; pass --url or set watch.url in the config file");
        return 1;
    };
    let poll_interval = interval
        .map(Duration::from_secs)
        .unwrap_or(DEFAULT_POLL_INTERVAL);

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            log::error!("FATAL: Failed to start runtime: {e}");
            return 1;
        }
    };

    runtime.block_on(async move {
        let fetcher = match HttpVersionFetcher::new(&url) {
            Ok(fetcher) => Arc::new(fetcher),
            Err(e) => {
                log::error!("FATAL: {e}");
                return 1;
            }
        };

        log::info!(
            "Watching {url} every {} seconds",
            poll_interval.as_secs()
        );

        // Explicit invocation: the dev-mode guard is for embedded use
        let mut handle = VersionPoller::builder(fetcher)
            .poll_interval(poll_interval)
            .dev_mode(false)
            .build()
            .start();

        tokio::select! {
            _ = handle.join() => {
                log::info!("New version detected; exiting");
            }
            _ = tokio::signal::ctrl_c() => {
                log::info!("Interrupted");
            }
        }
        handle.stop();
        0
    })
}
