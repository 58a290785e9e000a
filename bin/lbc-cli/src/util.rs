//! Subcommand execution for the `lbc-cli` binary.

use std::{fs, path::Path};

use anyhow::{bail, Context};
use lbc_common::logging::{self, LoggerConfig};
use lbc_config::Config;
use lbc_crypto::{address_from_secret, sign_digest, verify};
use lbc_quote::{hash_quote, Quote};
use serde_json::json;

use crate::{
    args::{
        Args, SubcGenKey, SubcHashQuote, SubcSignQuote, SubcSimulate, SubcVerifyQuote,
        Subcommand,
    },
    keys::{encode_secret, generate_secret, read_secret},
    simulate::{run_script, Script},
};

/// Service name reported in logs.
const SERVICE_NAME: &str = "lbc-cli";

/// Executes a subcommand.
pub(super) fn exec_subc(args: Args) -> anyhow::Result<()> {
    match args.subc {
        Subcommand::GenKey(subc) => exec_genkey(subc),
        Subcommand::HashQuote(subc) => exec_hashquote(subc),
        Subcommand::SignQuote(subc) => exec_signquote(subc),
        Subcommand::VerifyQuote(subc) => exec_verifyquote(subc),
        Subcommand::Simulate(subc) => exec_simulate(subc, args.json_logs),
    }
}

pub(crate) fn read_quote(path: &Path) -> anyhow::Result<Quote> {
    let raw =
        fs::read(path).with_context(|| format!("reading quote file {}", path.display()))?;
    serde_json::from_slice(&raw).context("decoding quote json")
}

fn print_json(v: &serde_json::Value) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(v)?);
    Ok(())
}

fn exec_genkey(cmd: SubcGenKey) -> anyhow::Result<()> {
    let sk = generate_secret();
    let secret = encode_secret(&sk);
    let address = address_from_secret(&sk);

    match cmd.output {
        Some(path) => {
            if path.exists() && !cmd.force {
                bail!("not overwriting file, add --force to overwrite");
            }
            fs::write(&path, &secret)
                .with_context(|| format!("writing key file {}", path.display()))?;
            print_json(&json!({ "address": address, "key_file": path }))
        }
        None => print_json(&json!({ "address": address, "secret": secret })),
    }
}

fn exec_hashquote(cmd: SubcHashQuote) -> anyhow::Result<()> {
    let quote = read_quote(&cmd.quote)?;
    print_json(&json!({
        "kind": quote.kind().to_string(),
        "digest": hash_quote(&quote),
    }))
}

fn exec_signquote(cmd: SubcSignQuote) -> anyhow::Result<()> {
    let sk = read_secret(&cmd.key_file)?;
    let quote = read_quote(&cmd.quote)?;
    let digest = hash_quote(&quote);
    let signer = address_from_secret(&sk);

    if signer != quote.liquidity_provider() {
        eprintln!(
            "WARNING: signer {signer} is not the quote's liquidity provider {}",
            quote.liquidity_provider()
        );
    }

    let sig = sign_digest(&sk, &digest);
    print_json(&json!({
        "digest": digest,
        "signer": signer,
        "signature": format!("0x{}", hex::encode(sig)),
    }))
}

fn exec_verifyquote(cmd: SubcVerifyQuote) -> anyhow::Result<()> {
    let quote = read_quote(&cmd.quote)?;
    let digest = hash_quote(&quote);
    let sig_hex = cmd.signature.trim();
    let sig = hex::decode(sig_hex.strip_prefix("0x").unwrap_or(sig_hex))
        .context("signature is not hex")?;

    let valid = verify(cmd.signer, &digest, &sig)?;
    print_json(&json!({ "digest": digest, "signer": cmd.signer, "valid": valid }))?;
    if !valid {
        bail!("signature does not match {}", cmd.signer);
    }
    Ok(())
}

fn exec_simulate(cmd: SubcSimulate, json_logs: bool) -> anyhow::Result<()> {
    let config = Config::load(&cmd.config)
        .with_context(|| format!("loading config {}", cmd.config.display()))?;

    let logger: LoggerConfig = config
        .logging
        .logger_config(SERVICE_NAME)?
        .with_stderr(true);
    let logger = if json_logs {
        logger.with_json_logging(true)
    } else {
        logger
    };
    logging::init(logger)?;

    let raw = fs::read(&cmd.script)
        .with_context(|| format!("reading script {}", cmd.script.display()))?;
    let script: Script = serde_json::from_slice(&raw).context("decoding script json")?;

    let report = run_script(config.bridge.init_params()?, &script)?;
    print_json(&serde_json::to_value(&report)?)
}
