use clap::Parser;
use passmint::Error;

mod cli;

use cli::{Cli, prompts};

fn main() {
    #[cfg(target_os = "linux")]
    unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) };

    let args = Cli::parse();
    init_logging(args.verbose);

    match cli::run(args) {
        Ok(()) => {}
        Err(Error::EmptyPool) => {
            prompts::placeholder();
            std::process::exit(2);
        }
        Err(e) => {
            prompts::error(&e.to_string());
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}
