//! Operator tool for the liquidity bridge.
//!
//! # Warning
//!
//! Keys are handled as plain hex files.  This tool is intended for testing and
//! development only.

use std::process;

mod args;
mod keys;
mod simulate;
mod util;

use util::exec_subc;

fn main() {
    let args: args::Args = argh::from_env();
    let inner = || -> anyhow::Result<()> {
        exec_subc(args)?;
        Ok(())
    };
    if let Err(e) = inner() {
        eprintln!("ERROR\n{e:?}");
        process::exit(1);
    }
}
