use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use clap::Parser;
use lstree::cli::Cli;
use lstree::fs::RealFileSystem;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help lands on stdout and succeeds; anything else is a usage error.
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    if let Err(err) = lstree::logging::init_logging() {
        eprintln!("lstree: {err:#}");
    }

    let targets = match cli.targets() {
        Ok(targets) => targets,
        Err(err) => {
            eprintln!("lstree: {err:#}");
            return ExitCode::from(1);
        }
    };

    let mut out = BufWriter::new(io::stdout().lock());
    let mut diagnostics = io::stderr();
    let listed = lstree::list_targets(
        &RealFileSystem,
        &targets,
        &cli.options(),
        &mut out,
        &mut diagnostics,
    )
    .await;
    let result = listed.and_then(|()| out.flush());

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("lstree: {err}");
            ExitCode::from(1)
        }
    }
}
