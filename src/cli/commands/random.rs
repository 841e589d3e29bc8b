use clap::{Arg, ArgMatches, Command};

pub const ARG_RANDOM_SEED: &str = "random-seed";

/// Fixed seed for the shared random source, if one was given.
#[must_use]
pub fn parse(matches: &ArgMatches) -> Option<u64> {
    matches.get_one::<u64>(ARG_RANDOM_SEED).copied()
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command.arg(
        Arg::new(ARG_RANDOM_SEED)
            .long(ARG_RANDOM_SEED)
            .help("Seed the shared random source")
            .long_help(
                "Seed the shared random source used for short unique strings.\n\nOnly meant for reproducible test runs: every instance started with the same seed hands out the same sequence of identifiers.",
            )
            .env("NTOOLS_RANDOM_SEED")
            .value_parser(clap::value_parser!(u64)),
    )
}
