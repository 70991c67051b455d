use clap::Args;
use shepherd::{SheepdogBackend, Volume};

use crate::cli::{GlobalFlags, parse_capacity};
use crate::formatter::format_bytes;

#[derive(Args, Debug)]
pub struct ResizeArgs {
    /// Volume name
    pub name: String,

    /// New capacity in bytes, or with a K/M/G/T suffix
    pub capacity: String,
}

pub fn execute(args: ResizeArgs, global: &GlobalFlags) -> anyhow::Result<()> {
    let capacity = parse_capacity(&args.capacity)?;
    let pool = global.load_pool()?;

    let backend = SheepdogBackend::new();
    let vol = Volume::new(args.name, 0);
    backend.resize_volume(&pool, &vol, capacity, 0)?;

    println!("Resized volume {} to {}", vol.name, format_bytes(capacity));
    Ok(())
}
