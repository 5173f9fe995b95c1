/// Command modules for the `dialscope` CLI.
///
/// Each submodule implements one subcommand. The `run` function in each
/// module takes the parsed arguments and returns `Ok(())` on success or
/// a [`crate::error::CliError`] on failure.
pub mod inspect;
pub mod ip;
pub mod locate;
