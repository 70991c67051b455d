use clap::Args;
use shepherd::SheepdogBackend;

use crate::cli::GlobalFlags;
use crate::formatter::{self, OutputFormat, format_bytes};

#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Output format: table, json
    #[arg(long, default_value = "table")]
    pub format: String,
}

pub fn execute(args: InfoArgs, global: &GlobalFlags) -> anyhow::Result<()> {
    let format = OutputFormat::from_str(&args.format)?;
    let mut pool = global.load_pool()?;

    let backend = SheepdogBackend::new();
    backend.refresh_pool(&mut pool)?;

    match format {
        OutputFormat::Json => {
            println!("{}", formatter::format_json(&pool)?);
        }
        OutputFormat::Table => {
            println!("Source:     {}", pool.source_name);
            println!("Capacity:   {}", format_bytes(pool.capacity));
            println!("Allocation: {}", format_bytes(pool.allocation));
            println!("Available:  {}", format_bytes(pool.available));
            println!("Volumes:    {}", pool.volumes.len());
        }
    }

    Ok(())
}
