//! `composekit check` - run the reconciliation cycle

use std::path::Path;

use anyhow::Result;

use crate::cli::CheckArgs;
use crate::commands::build_coordinator;

pub async fn run(args: CheckArgs, storage_root: Option<&Path>) -> Result<()> {
    let mut coordinator = build_coordinator(storage_root)?;
    coordinator.run_check(args.first_run).await;
    Ok(())
}
