use anyhow::Result;
use clap::{CommandFactory, Parser};
use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};
use tracing_appender::non_blocking::WorkerGuard;
use xlsxsplit::{
    AppConfig, AppDirs, Cli, Command, LoggingConfig, cli::render_version, init_logging,
    split_workbook,
};

fn main() {
    // process::exit skips destructors, so the logging guard must be dropped
    // (flushing the non-blocking appender) before it is reached.
    let code = run();
    std::process::exit(code);
}

fn run() -> i32 {
    let cli = Cli::parse();

    let _guard = match bootstrap() {
        Ok(guard) => guard,
        Err(error) => {
            eprintln!("✗ {error:#}");
            return 1;
        }
    };

    match catch_unwind(AssertUnwindSafe(|| dispatch(cli))) {
        Ok(Ok(())) => 0,
        Ok(Err(error)) => {
            tracing::error!(error = %format!("{error:#}"), "run failed");
            eprintln!("✗ {error:#}");
            1
        }
        Err(panic) => {
            let message = panic_message(panic.as_ref());
            tracing::error!(%message, "crashed");
            eprintln!("✗ crashed: {message}");
            1
        }
    }
}

/// Resolves platform directories, loads config, initializes logging, and
/// clears the temp directory. Everything the commands rely on being in place.
fn bootstrap() -> Result<WorkerGuard> {
    let dirs = AppDirs::discover()?;
    let config = AppConfig::load(&dirs.config_dir)?;
    let guard = init_logging(&LoggingConfig {
        level: config.logs.level.clone(),
        report_caller: config.logs.report_caller,
        log_dir: dirs.logs_dir.clone(),
    })?;
    dirs.clear_temp();
    Ok(guard)
}

fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
        Some(Command::Split(args)) => {
            let report = split_workbook(&args.file, &args.output)?;
            tracing::info!(sheets = report.sheets.len(), "finished");
            Ok(())
        }
        Some(Command::Version(args)) => {
            print!("{}", render_version(args.short));
            Ok(())
        }
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "unexpected runtime fault".to_string()
    }
}
