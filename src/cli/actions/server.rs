use crate::{
    api::{self, handlers::AppState},
    cli::telemetry,
    tools::SharedRng,
};
use anyhow::Result;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub port: u16,
    pub random_seed: Option<u64>,
}

/// Build the shared random source: seeded when requested, otherwise from OS entropy.
#[must_use]
pub fn shared_rng(random_seed: Option<u64>) -> SharedRng {
    match random_seed {
        Some(seed) => {
            warn!("Random seed is fixed, short unique strings are reproducible");
            SharedRng::seed_from_u64(seed)
        }
        None => SharedRng::from_entropy(),
    }
}

/// Execute the server action.
/// # Errors
/// Returns an error if the server fails to bind or serve.
pub async fn execute(args: Args) -> Result<()> {
    let state = AppState::new(shared_rng(args.random_seed));

    let result = api::new(args.port, state).await;

    telemetry::shutdown_tracer();

    result
}
