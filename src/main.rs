use env_logger::Env;
use log::debug;
use std::io::stdout;
use std::process::ExitCode;

use binlog_curd_stat::cli;
use binlog_curd_stat::{Analyzer, StatError};

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!("run failed: {:?}", e);
            if e.is_user_notice() {
                println!("{}", e);
            } else {
                eprintln!("{}", e);
            }
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<(), StatError> {
    let args = cli::parse_args()?;
    let report = Analyzer::new(args.config()).analyze_file(&args.file)?;

    let mut writer = stdout().lock();
    report.write_to(&mut writer)
}
