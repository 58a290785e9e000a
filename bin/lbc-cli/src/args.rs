//! Command line arguments for the `lbc-cli` binary.

use std::path::PathBuf;

use alloy_primitives::Address;
use argh::FromArgs;

/// Args.
#[derive(FromArgs)]
pub(crate) struct Args {
    #[argh(switch, description = "log as JSON instead of compact text")]
    pub(crate) json_logs: bool,

    #[argh(subcommand)]
    pub(crate) subc: Subcommand,
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand)]
pub(crate) enum Subcommand {
    GenKey(SubcGenKey),
    HashQuote(SubcHashQuote),
    SignQuote(SubcSignQuote),
    VerifyQuote(SubcVerifyQuote),
    Simulate(SubcSimulate),
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(
    subcommand,
    name = "genkey",
    description = "generates a provider signing key"
)]
pub(crate) struct SubcGenKey {
    #[argh(option, description = "write the secret key to this file", short = 'o')]
    pub(crate) output: Option<PathBuf>,

    #[argh(switch, description = "force overwrite", short = 'f')]
    pub(crate) force: bool,
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(
    subcommand,
    name = "hashquote",
    description = "prints the canonical digest of a JSON quote"
)]
pub(crate) struct SubcHashQuote {
    #[argh(positional, description = "quote file (.json)")]
    pub(crate) quote: PathBuf,
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(
    subcommand,
    name = "signquote",
    description = "signs the canonical digest of a JSON quote"
)]
pub(crate) struct SubcSignQuote {
    #[argh(option, description = "file holding the hex secret key", short = 'k')]
    pub(crate) key_file: PathBuf,

    #[argh(positional, description = "quote file (.json)")]
    pub(crate) quote: PathBuf,
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(
    subcommand,
    name = "verifyquote",
    description = "checks a quote signature against a signer"
)]
pub(crate) struct SubcVerifyQuote {
    #[argh(positional, description = "quote file (.json)")]
    pub(crate) quote: PathBuf,

    #[argh(option, description = "expected signer address")]
    pub(crate) signer: Address,

    #[argh(option, description = "hex encoded 65 byte signature")]
    pub(crate) signature: String,
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(
    subcommand,
    name = "simulate",
    description = "runs a JSON script of operations against an in-memory bridge"
)]
pub(crate) struct SubcSimulate {
    #[argh(option, description = "bridge config (.toml)", short = 'c')]
    pub(crate) config: PathBuf,

    #[argh(positional, description = "script file (.json)")]
    pub(crate) script: PathBuf,
}
