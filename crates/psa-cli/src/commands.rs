use super::args::Cli;
use super::handlers::{self, ListOptions};
use crate::presentation::{Renderer, Theme};
use crate::ui::AnsiTerminal;
use anyhow::Result;
use is_terminal::IsTerminal;
use psa_runtime::{ColorChoice, Config, DockerSource};

pub fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;

    if !cli.extra.is_empty() {
        eprintln!(
            "Warning: only one filter is supported; ignoring {}",
            cli.extra.join(" ")
        );
    }

    let choice = cli.color.map(ColorChoice::from).unwrap_or(config.display.color);
    let colored = use_color(
        choice,
        std::env::var_os("NO_COLOR").is_some_and(|value| !value.is_empty()),
        std::io::stdout().is_terminal(),
    );

    let options = ListOptions {
        pattern: cli.pattern().to_string(),
        verbosity: cli.verbosity(),
    };
    tracing::debug!(?options, watch = cli.watch, colored, "resolved options");

    let renderer = Renderer::new(Theme::for_color(colored));
    let source = DockerSource::connect()?;

    if cli.watch {
        handlers::watch::handle(&source, &renderer, &options, config.watch.interval())
    } else {
        let mut terminal = AnsiTerminal::new();
        handlers::list::handle(&source, &mut terminal, &renderer, &options)
    }
}

fn use_color(choice: ColorChoice, no_color: bool, stdout_is_terminal: bool) -> bool {
    match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => !no_color && stdout_is_terminal,
    }
}
