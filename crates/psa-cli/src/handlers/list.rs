use super::{ListOptions, emit_listing};
use crate::presentation::Renderer;
use crate::ui::TerminalWriter;
use anyhow::Result;
use chrono::Utc;
use psa_runtime::ContainerSource;

/// One-shot listing. Failing to fetch the listing is fatal here.
pub fn handle<S, T>(
    source: &S,
    terminal: &mut T,
    renderer: &Renderer,
    options: &ListOptions,
) -> Result<()>
where
    S: ContainerSource + ?Sized,
    T: TerminalWriter + ?Sized,
{
    let records = source.list_all()?;

    emit_listing(terminal, renderer, records, options, Utc::now());
    terminal.flush();

    Ok(())
}
