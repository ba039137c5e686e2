// cli.rs - Command-line interface configuration
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "cube-viewer")]
#[command(about = "Interactive textured cube viewer", long_about = None)]
pub struct Cli {
    /// Image file to texture the cube with (checkerboard if omitted)
    #[arg(long = "texture")]
    pub texture: Option<PathBuf>,

    /// Edge length of the cube
    #[arg(long = "cube-width", default_value = "0.3")]
    pub cube_width: f32,

    /// Initial window width in pixels
    #[arg(long = "width", default_value = "800")]
    pub width: u32,

    /// Initial window height in pixels
    #[arg(long = "height", default_value = "600")]
    pub height: u32,
}
