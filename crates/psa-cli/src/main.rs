use clap::Parser;
use docker_psa::{Cli, Invocation, classify, handlers, logging, run};

fn main() {
    // Reset SIGPIPE to default behavior to prevent panic on broken pipe
    // (e.g., when piping to `head` or `less` that exits early)
    #[cfg(unix)]
    reset_sigpipe();

    logging::init();

    let args: Vec<String> = std::env::args().collect();
    tracing::debug!(?args, "received arguments");

    let result = match classify(args) {
        Invocation::Metadata => handlers::metadata::handle(),
        Invocation::Listing(normalized) => {
            for flag in &normalized.unknown {
                eprintln!("Warning: unknown flag ignored: {}", flag);
            }
            run(Cli::parse_from(normalized.args))
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(unix)]
fn reset_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}
