use clap::Args;
use shepherd::{SheepdogBackend, Volume};

use crate::cli::{GlobalFlags, parse_capacity};
use crate::formatter::format_bytes;

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Volume name
    pub name: String,

    /// Capacity in bytes, or with a K/M/G/T suffix
    pub capacity: String,
}

pub fn execute(args: CreateArgs, global: &GlobalFlags) -> anyhow::Result<()> {
    let capacity = parse_capacity(&args.capacity)?;
    let pool = global.load_pool()?;

    let backend = SheepdogBackend::new();
    let mut vol = Volume::new(args.name, capacity);
    backend.create_volume(&pool, &mut vol)?;

    println!(
        "Created volume {} ({}), key {}",
        vol.name,
        format_bytes(vol.capacity),
        vol.key
    );
    Ok(())
}
