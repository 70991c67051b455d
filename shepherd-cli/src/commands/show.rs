use clap::Args;
use shepherd::{SheepdogBackend, Volume};

use crate::cli::GlobalFlags;
use crate::formatter::{self, OutputFormat, format_bytes};

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Volume name
    pub name: String,

    /// Output format: table, json
    #[arg(long, default_value = "table")]
    pub format: String,
}

pub fn execute(args: ShowArgs, global: &GlobalFlags) -> anyhow::Result<()> {
    let format = OutputFormat::from_str(&args.format)?;
    let pool = global.load_pool()?;

    let backend = SheepdogBackend::new();
    let mut vol = Volume::new(args.name, 0);
    backend.refresh_volume(&pool, &mut vol)?;

    match format {
        OutputFormat::Json => {
            println!("{}", formatter::format_json(&vol)?);
        }
        OutputFormat::Table => {
            println!("Name:       {}", vol.name);
            println!("Key:        {}", vol.key);
            println!("Capacity:   {}", format_bytes(vol.capacity));
            println!("Allocation: {}", format_bytes(vol.allocation));
        }
    }

    Ok(())
}
