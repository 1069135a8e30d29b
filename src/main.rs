use clap::Parser;
use riskshield::{Cli, run};
use std::panic;
use std::process::ExitCode;

fn main() -> ExitCode {
    panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::force_capture();
        log::error!("CRITICAL PANIC:\n{}\nStack Trace:\n{}", info, backtrace);
    }));

    let (global_level, my_code_level) = if cfg!(debug_assertions) {
        (log::LevelFilter::Warn, log::LevelFilter::Debug)
    } else {
        (log::LevelFilter::Error, log::LevelFilter::Warn)
    };

    // RUST_LOG, when set, overrides the defaults above.
    env_logger::Builder::new()
        .filter(None, global_level)
        .filter(Some("riskshield"), my_code_level)
        .parse_default_env()
        .init();

    let args = Cli::parse();
    if let Err(e) = run(args) {
        log::error!("{:#}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
