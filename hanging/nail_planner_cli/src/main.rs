use clap::Parser;
use stores::{JsonFileStore, Storage};
use tracing::debug;

use crate::opts::{Command, Opts};

mod commands;
mod opts;

fn main() -> anyhow::Result<()> {
    let args = argfile::expand_args(argfile::parse_fromfile, argfile::PREFIX)?;

    let opts = Opts::parse_from(args);

    cli::tracing::configure_tracing(opts.trace.clone(), opts.verbose.clone())?;

    debug!("Using store. path: {}", opts.store.display());
    let mut storage = Storage::new(JsonFileStore::new(opts.store.clone()));

    match opts.command {
        Command::Calculate {
            frame,
            anchor,
            center,
            unit,
            json,
        } => commands::calculate(&mut storage, &frame, &anchor, center.as_deref(), unit.map(Into::into), json)?,
        Command::Convert {
            raw,
            from,
            to,
        } => commands::convert(&raw, from.into(), to.into())?,
        Command::Unit {
            unit,
        } => commands::unit(&mut storage, unit.map(Into::into)),
        Command::Theme {
            theme,
        } => commands::theme(&mut storage, theme.map(Into::into)),
        Command::Preset(command) => commands::preset(&mut storage, command)?,
    }

    Ok(())
}
