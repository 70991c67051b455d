use clap::Args;
use shepherd::{SheepdogBackend, Volume};

use crate::cli::GlobalFlags;

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Volume name
    pub name: String,
}

pub fn execute(args: DeleteArgs, global: &GlobalFlags) -> anyhow::Result<()> {
    let pool = global.load_pool()?;

    let backend = SheepdogBackend::new();
    let vol = Volume::new(args.name, 0);
    backend.delete_volume(&pool, &vol, 0)?;

    println!("Deleted volume {}", vol.name);
    Ok(())
}
