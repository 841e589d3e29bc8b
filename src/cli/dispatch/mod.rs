use crate::cli::{
    actions::{Action, server::Args},
    commands::{self, random},
};
use anyhow::{Context, Result};

/// # Errors
/// Returns an error if a required argument is missing.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let port = matches
        .get_one::<u16>(commands::ARG_PORT)
        .copied()
        .context("missing required argument: --port")?;

    let random_seed = random::parse(matches);

    Ok(Action::Server(Args { port, random_seed }))
}
