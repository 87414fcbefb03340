//! CLI subcommand implementations.

pub mod practices;
pub mod suggest;
pub mod util;
