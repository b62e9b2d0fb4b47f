use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use pinpoint_core::io::image_io::image_info;

#[derive(Args)]
pub struct InfoArgs {
    /// Input image
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let info = image_info(&args.file)?;

    println!("File:        {}", args.file.display());
    println!("Dimensions:  {}x{}", info.width, info.height);
    println!("Color type:  {}", info.color);

    Ok(())
}
