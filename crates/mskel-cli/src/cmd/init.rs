use anyhow::Result;
use clap::Args;
use mskel_core::config::ProjectConfig;
use std::path::Path;

pub const CONFIG_FILE: &str = "mskel.toml";

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Overwrite an existing `mskel.toml`.
    #[arg(long)]
    pub force: bool,
}

/// Execute `msk init`: write a default `mskel.toml` into the project
/// root.
///
/// # Errors
///
/// Returns an error if `mskel.toml` already exists and `--force` is
/// not set, or if the file cannot be written.
pub fn run_init(args: &InitArgs, project_root: &Path) -> Result<()> {
    let config_path = project_root.join(CONFIG_FILE);

    if config_path.exists() && !args.force {
        anyhow::bail!("mskel.toml already exists. Use `msk init --force` to overwrite.");
    }

    ProjectConfig::default().save(&config_path)?;

    println!("✓ Wrote {CONFIG_FILE}.");
    println!();
    println!("Next steps:");
    println!("  Fill in the [header] defaults (회사명/소속/반), then:");
    println!("    msk eval session.json");

    Ok(())
}
