use anyhow::Result;
use clap::Parser;
use plane_icon::icon_gen::{self, DEFAULT_OUTPUT, REFERENCE_SIZE};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "plane-icon",
    about = "Render the paper-plane app icon as an opaque PNG"
)]
struct Args {
    /// Output PNG file. Its directory must already exist.
    #[clap(short, long, value_name = "FILE", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Edge of the square icon in pixels. The glyph scales with it.
    #[clap(long, value_name = "PIXELS", default_value_t = REFERENCE_SIZE)]
    size: u32,

    /// Top color of the background gradient (CSS color format)
    #[clap(long, value_name = "COLOR", default_value = "#781ed2")]
    top_color: String,

    /// Bottom color of the background gradient (CSS color format)
    #[clap(long, value_name = "COLOR", default_value = "#326efa")]
    bottom_color: String,

    /// Round glyph vertices to the nearest pixel instead of truncating
    #[clap(long)]
    round_vertices: bool,

    /// Also write an asset catalog Contents.json next to the icon
    #[clap(long)]
    contents_json: bool,
}

impl From<Args> for icon_gen::Args {
    fn from(args: Args) -> Self {
        Self {
            output: args.output,
            size: args.size,
            top_color: args.top_color,
            bottom_color: args.bottom_color,
            round_vertices: args.round_vertices,
            contents_json: args.contents_json,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    icon_gen::generate_icon(args.into())
}
