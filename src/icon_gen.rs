use crate::contents_json::ContentsFile;
use crate::glyph::{PlaneGlyph, VertexRounding};
use crate::palette::{self, lerp_rgb, with_alpha};
use crate::raster::{composite_layer, fill_polygon, paint_column, paint_row, stroke_line};
use anyhow::{Context, Result};
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    ColorType, DynamicImage, ImageEncoder, Rgb, RgbImage, Rgba, RgbaImage,
};
use std::{
    io::Write,
    path::{Path, PathBuf},
};

/// Where the icon lands when no `--output` is given: the 1024pt slot of the
/// app's asset catalog.
pub const DEFAULT_OUTPUT: &str =
    "/Users/sara/work/flyaway/FlyAway/FlyAway/Assets.xcassets/AppIcon.appiconset/AppIcon-1024.png";

/// Edge of the reference canvas, in pixels.
pub const REFERENCE_SIZE: u32 = 1024;
/// Scale constant of the glyph on the reference canvas.
pub const REFERENCE_SCALE: f64 = 360.0;
/// Crease stroke width on the reference canvas.
pub const REFERENCE_CREASE_WIDTH: f64 = 4.0;
/// Largest accepted canvas edge, in pixels.
pub const MAX_SIZE: u32 = 8192;

/// Command-line options, as seen by the library.
#[derive(Debug)]
pub struct Args {
    pub output: PathBuf,
    pub size: u32,
    pub top_color: String,
    pub bottom_color: String,
    pub round_vertices: bool,
    pub contents_json: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            size: REFERENCE_SIZE,
            top_color: "#781ed2".to_string(),
            bottom_color: "#326efa".to_string(),
            round_vertices: false,
            contents_json: false,
        }
    }
}

/// Every constant that shapes the rendered icon.
#[derive(Debug, Clone, PartialEq)]
pub struct IconStyle {
    pub size: u32,
    pub gradient_top: Rgb<u8>,
    pub gradient_bottom: Rgb<u8>,
    pub tint_left: Rgb<u8>,
    pub tint_right: Rgb<u8>,
    pub tint_max_alpha: u8,
    pub scale: f64,
    pub upper_wing: Rgba<u8>,
    pub lower_body: Rgba<u8>,
    pub tail_fin: Rgba<u8>,
    pub crease: Rgba<u8>,
    pub crease_width: f64,
    pub rounding: VertexRounding,
}

impl Default for IconStyle {
    fn default() -> Self {
        Self {
            size: REFERENCE_SIZE,
            gradient_top: palette::GRADIENT_TOP,
            gradient_bottom: palette::GRADIENT_BOTTOM,
            tint_left: palette::TINT_LEFT,
            tint_right: palette::TINT_RIGHT,
            tint_max_alpha: palette::TINT_MAX_ALPHA,
            scale: REFERENCE_SCALE,
            upper_wing: palette::UPPER_WING,
            lower_body: palette::LOWER_BODY,
            tail_fin: palette::TAIL_FIN,
            crease: palette::CREASE,
            crease_width: REFERENCE_CREASE_WIDTH,
            rounding: VertexRounding::Truncate,
        }
    }
}

impl IconStyle {
    /// Reference style resized to a `size` canvas. Glyph scale and crease
    /// width follow the canvas proportionally.
    pub fn for_size(size: u32) -> Self {
        let ratio = size as f64 / REFERENCE_SIZE as f64;
        Self {
            size,
            scale: REFERENCE_SCALE * ratio,
            crease_width: REFERENCE_CREASE_WIDTH * ratio,
            ..Self::default()
        }
    }

    /// Build the style described by command-line arguments.
    pub fn from_args(args: &Args) -> Result<Self> {
        if args.size == 0 {
            anyhow::bail!("Icon size must be greater than zero");
        }
        if args.size > MAX_SIZE {
            anyhow::bail!("Icon size {} exceeds the maximum of {}", args.size, MAX_SIZE);
        }
        // Single-size icon sets only take the 1024pt marketing icon
        if args.contents_json && args.size != REFERENCE_SIZE {
            anyhow::bail!(
                "--contents-json needs a {}x{} icon, got {}x{}",
                REFERENCE_SIZE,
                REFERENCE_SIZE,
                args.size,
                args.size
            );
        }

        let mut style = Self::for_size(args.size);
        style.gradient_top = palette::parse_css_color(&args.top_color)
            .context("Invalid --top-color")?;
        style.gradient_bottom = palette::parse_css_color(&args.bottom_color)
            .context("Invalid --bottom-color")?;
        if args.round_vertices {
            style.rounding = VertexRounding::Round;
        }

        Ok(style)
    }

    pub fn glyph(&self) -> PlaneGlyph {
        PlaneGlyph::for_canvas(self.size, self.scale, self.rounding)
    }
}

pub fn generate_icon(args: Args) -> Result<()> {
    let style = IconStyle::from_args(&args)?;
    log::info!("Rendering {}x{} icon", style.size, style.size);

    let icon = render_icon(&style);
    save_png(&icon, &args.output)?;
    println!("Saved: {}", args.output.display());

    if args.contents_json {
        write_contents_json(&args.output, style.size)?;
    }

    Ok(())
}

/// Run every drawing pass and flatten the result to opaque RGB.
pub fn render_icon(style: &IconStyle) -> RgbImage {
    let mut canvas = RgbaImage::from_pixel(style.size, style.size, Rgba([0, 0, 0, 255]));

    paint_background(&mut canvas, style);
    apply_tint_overlay(&mut canvas, style);
    draw_glyph(&mut canvas, style);

    flatten(canvas)
}

/// Vertical gradient, one row at a time.
pub fn paint_background(canvas: &mut RgbaImage, style: &IconStyle) {
    let size = canvas.height();
    for y in 0..size {
        let t = y as f64 / size as f64;
        let color = lerp_rgb(style.gradient_top, style.gradient_bottom, t);
        paint_row(canvas, y, with_alpha(color, 255));
    }
    log::debug!("Painted background gradient over {size} rows");
}

/// The translucent left-to-right tint layer, before compositing.
pub fn tint_overlay(style: &IconStyle, width: u32, height: u32) -> RgbaImage {
    let mut overlay = RgbaImage::new(width, height);

    for x in 0..width {
        let t = x as f64 / width as f64;
        let color = lerp_rgb(style.tint_left, style.tint_right, t);
        let alpha = (style.tint_max_alpha as f64 * t) as u8;
        paint_column(&mut overlay, x, with_alpha(color, alpha));
    }

    overlay
}

pub fn apply_tint_overlay(canvas: &mut RgbaImage, style: &IconStyle) {
    let overlay = tint_overlay(style, canvas.width(), canvas.height());
    composite_layer(canvas, &overlay);
    log::debug!("Composited tint overlay");
}

/// Three panels, then the two fold creases on top.
pub fn draw_glyph(canvas: &mut RgbaImage, style: &IconStyle) {
    let glyph = style.glyph();
    log::debug!("Glyph vertices: {glyph:?}");

    fill_polygon(canvas, &glyph.upper_wing(), style.upper_wing);
    fill_polygon(canvas, &glyph.lower_body(), style.lower_body);
    fill_polygon(canvas, &glyph.tail_fin(), style.tail_fin);

    for (from, to) in glyph.creases() {
        stroke_line(canvas, from, to, style.crease_width, style.crease);
    }
}

/// Drop the alpha channel, keeping the colours as they are.
pub fn flatten(canvas: RgbaImage) -> RgbImage {
    DynamicImage::ImageRgba8(canvas).to_rgb8()
}

/// Encode to PNG and persist without ever leaving a partial file at `path`.
///
/// The image is encoded in memory, written to a sibling temp file and renamed
/// into place. The parent directory is never created.
pub fn save_png(image: &RgbImage, path: &Path) -> Result<()> {
    let mut buf = Vec::new();
    write_png(image, &mut buf)?;
    log::debug!("Encoded {} bytes of PNG", buf.len());

    let tmp_path = temp_path_for(path);
    if let Err(err) = std::fs::write(&tmp_path, &buf) {
        let _ = std::fs::remove_file(&tmp_path);
        return Err(err)
            .with_context(|| format!("Failed to write PNG file: {}", path.display()));
    }

    if let Err(err) = std::fs::rename(&tmp_path, path) {
        let _ = std::fs::remove_file(&tmp_path);
        return Err(err)
            .with_context(|| format!("Failed to move PNG into place: {}", path.display()));
    }

    Ok(())
}

/// Encode as 8-bit RGB PNG, best compression.
pub fn write_png<W: Write>(image: &RgbImage, w: W) -> Result<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder
        .write_image(image.as_raw(), image.width(), image.height(), ColorType::Rgb8)
        .context("Failed to encode PNG")?;
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write Contents.json next to the icon so the directory is a valid icon set.
fn write_contents_json(icon_path: &Path, size: u32) -> Result<()> {
    let filename = icon_path
        .file_name()
        .and_then(|name| name.to_str())
        .context("Icon path has no UTF-8 file name")?
        .to_string();
    let dir = icon_path.parent().unwrap_or_else(|| Path::new("."));

    let contents = ContentsFile::single_size_app_icon(filename, size);
    let contents_json =
        serde_json::to_string_pretty(&contents).context("Failed to serialize Contents.json")?;

    let contents_path = dir.join("Contents.json");
    std::fs::write(&contents_path, contents_json)
        .with_context(|| format!("Failed to write {}", contents_path.display()))?;

    println!("✓ Generated Contents.json");
    Ok(())
}
