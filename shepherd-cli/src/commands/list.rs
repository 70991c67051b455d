use clap::Args;
use shepherd::{SheepdogBackend, Volume};
use tabled::Tabled;

use crate::cli::GlobalFlags;
use crate::formatter::{self, OutputFormat, format_bytes};

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Output format: table, json
    #[arg(long, default_value = "table")]
    pub format: String,
}

#[derive(Tabled)]
struct VolumeRow {
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "CAPACITY")]
    capacity: String,
    #[tabled(rename = "ALLOCATION")]
    allocation: String,
    #[tabled(rename = "KEY")]
    key: String,
}

impl From<&Volume> for VolumeRow {
    fn from(vol: &Volume) -> Self {
        VolumeRow {
            name: vol.name.clone(),
            capacity: format_bytes(vol.capacity),
            allocation: format_bytes(vol.allocation),
            key: vol.key.clone(),
        }
    }
}

pub fn execute(args: ListArgs, global: &GlobalFlags) -> anyhow::Result<()> {
    let format = OutputFormat::from_str(&args.format)?;
    let mut pool = global.load_pool()?;

    let backend = SheepdogBackend::new();
    backend.refresh_pool(&mut pool)?;

    match format {
        OutputFormat::Json => {
            println!("{}", formatter::format_json(&pool.volumes)?);
        }
        OutputFormat::Table => {
            let rows: Vec<VolumeRow> = pool.volumes.iter().map(VolumeRow::from).collect();
            println!("{}", formatter::create_table(rows));
        }
    }

    Ok(())
}
