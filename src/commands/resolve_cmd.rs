//! The `resolve` command: dry-run the resolution pass and print the result.

use super::seed_store;
use crate::cli::ResolveArgs;
use crate::error::Result;
use crate::resolve::{StoreEvaluator, resolve_all};

pub fn cmd_resolve(args: ResolveArgs) -> Result<()> {
    let mut store = seed_store(&args.settings, None)?;
    let resolved = resolve_all(&mut store, &StoreEvaluator, &args.settings.overrides())?;

    println!("Resolved packaging settings:");
    println!();
    for (key, value) in resolved.entries() {
        println!("  {key} = {value}");
    }

    Ok(())
}
