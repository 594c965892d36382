use std::process::ExitCode;

use log::{error, info};
use peek_cli::{options, probes, AppConfig};
use tracing_subscriber::EnvFilter;

const EXIT_FALSE: u8 = 1;
const EXIT_USAGE: u8 = 2;
const EXIT_FATAL: u8 = 3;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter)
                                     .with_writer(std::io::stderr)
                                     .try_init();
}

fn main() -> ExitCode {
    init_tracing();
    let app = AppConfig::from_env();

    let cli = match options::parse(&app.program, std::env::args_os()) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("{}", e.render());
            eprint!("{}", options::usage(&app.program));
            return ExitCode::from(EXIT_USAGE);
        }
    };
    if cli.help {
        eprint!("{}", options::usage(&app.program));
    }

    let catalog = match app.catalog() {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("catalog: {e}");
            eprintln!("{e}");
            return ExitCode::from(EXIT_FATAL);
        }
    };
    info!("catalog loaded: {} types", catalog.len());

    match peekflow::run(probes::standard(), catalog, cli.into_config()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(EXIT_FALSE),
        Err(e) => {
            error!("run failed: {e}");
            eprintln!("{e}");
            if e.is_configuration() {
                eprint!("{}", options::usage(&app.program));
            }
            ExitCode::from(EXIT_FATAL)
        }
    }
}
