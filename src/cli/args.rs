use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub const DEFAULT_SHEET: &str = "public/icon-sheet.png";
pub const DEFAULT_SLICE_OUTPUT_DIR: &str = "public/icons";
pub const DEFAULT_SOURCE: &str = "public/icon-source.jpg";
pub const DEFAULT_RESIZE_OUTPUT_DIR: &str = "public";

#[derive(Parser)]
#[command(name = "iconkit", version, about = "iconkit CLI")]
pub struct CliArgs {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(long, global = true, default_value_t = false)]
    pub log: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Slice a 3x3 icon sheet into trimmed, squared PNG icons
    Slice(SliceArgs),
    /// Resize one source image into PWA icons, an Apple touch icon and a favicon
    Resize(ResizeArgs),
}

#[derive(Args)]
pub struct SliceArgs {
    /// Icon sheet image
    #[arg(short, long, default_value = DEFAULT_SHEET)]
    pub input: PathBuf,

    /// Directory receiving one PNG per icon
    #[arg(short, long, default_value = DEFAULT_SLICE_OUTPUT_DIR)]
    pub output_dir: PathBuf,
}

#[derive(Args)]
pub struct ResizeArgs {
    /// Source image
    #[arg(short, long, default_value = DEFAULT_SOURCE)]
    pub input: PathBuf,

    /// Directory receiving the resized icons
    #[arg(short, long, default_value = DEFAULT_RESIZE_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Also write icons.manifest.json listing the generated files
    #[arg(long, default_value_t = false)]
    pub manifest: bool,
}
