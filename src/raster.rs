//! Minimal raster primitives on top of `image::RgbaImage`.
//!
//! Everything here composites with the Porter-Duff "over" operator on
//! straight (non-premultiplied) alpha, so a translucent fill drawn on an
//! opaque canvas yields `src * a + dst * (1 - a)` per channel.

use image::{Rgba, RgbaImage};

/// A vertex in continuous canvas space. Pixel `(i, j)` covers `[i, i + 1) x [j, j + 1)`.
pub type Vertex = (f64, f64);

/// Composite `src` over `dst` in place.
pub fn blend_over(dst: &mut Rgba<u8>, src: Rgba<u8>) {
    if src[3] == 0 {
        return;
    }
    if src[3] == 255 {
        *dst = src;
        return;
    }

    let src_a = src[3] as f32 / 255.0;

    // Opaque destination stays opaque: plain src * a + dst * (1 - a)
    if dst[3] == 255 {
        for c in 0..3 {
            dst[c] = (src[c] as f32 * src_a + dst[c] as f32 * (1.0 - src_a)).round() as u8;
        }
        return;
    }

    let dst_a = dst[3] as f32 / 255.0;
    let out_a = src_a + dst_a * (1.0 - src_a);

    for c in 0..3 {
        let blended = (src[c] as f32 * src_a + dst[c] as f32 * dst_a * (1.0 - src_a)) / out_a;
        dst[c] = blended.round().clamp(0.0, 255.0) as u8;
    }
    dst[3] = (out_a * 255.0).round() as u8;
}

/// Alpha-composite a whole layer onto `dst`. Both images must share dimensions.
pub fn composite_layer(dst: &mut RgbaImage, layer: &RgbaImage) {
    debug_assert_eq!(dst.dimensions(), layer.dimensions());

    for (dst_px, src_px) in dst.pixels_mut().zip(layer.pixels()) {
        blend_over(dst_px, *src_px);
    }
}

/// Fill a vertical band `x` of the image, top to bottom, overwriting what was there.
pub fn paint_column(img: &mut RgbaImage, x: u32, color: Rgba<u8>) {
    for y in 0..img.height() {
        img.put_pixel(x, y, color);
    }
}

/// Fill a horizontal band `y` of the image, overwriting what was there.
pub fn paint_row(img: &mut RgbaImage, y: u32, color: Rgba<u8>) {
    for x in 0..img.width() {
        img.put_pixel(x, y, color);
    }
}

/// Scanline fill of a simple polygon using the even-odd rule.
///
/// A pixel is covered when its centre lies inside the polygon; pixels outside
/// the canvas are clipped. Fewer than three vertices draws nothing.
pub fn fill_polygon(img: &mut RgbaImage, vertices: &[Vertex], color: Rgba<u8>) {
    if vertices.len() < 3 {
        return;
    }

    let (width, height) = img.dimensions();
    let min_y = vertices.iter().map(|v| v.1).fold(f64::INFINITY, f64::min);
    let max_y = vertices.iter().map(|v| v.1).fold(f64::NEG_INFINITY, f64::max);

    let row_start = (min_y.floor().max(0.0)) as u32;
    let row_end = (max_y.ceil().min(height as f64)).max(0.0) as u32;

    let mut crossings: Vec<f64> = Vec::with_capacity(vertices.len());

    for y in row_start..row_end {
        let scan_y = y as f64 + 0.5;
        crossings.clear();

        for (i, &(x0, y0)) in vertices.iter().enumerate() {
            let (x1, y1) = vertices[(i + 1) % vertices.len()];
            // Half-open so a vertex shared by two edges is counted once
            if (y0 <= scan_y && scan_y < y1) || (y1 <= scan_y && scan_y < y0) {
                crossings.push(x0 + (scan_y - y0) * (x1 - x0) / (y1 - y0));
            }
        }

        crossings.sort_by(|a, b| a.total_cmp(b));

        for span in crossings.chunks_exact(2) {
            let first = (span[0] - 0.5).ceil().max(0.0);
            let last = (span[1] - 0.5).ceil().min(width as f64);
            if first >= last {
                continue;
            }
            for x in first as u32..last as u32 {
                blend_over(img.get_pixel_mut(x, y), color);
            }
        }
    }
}

/// Stroke a straight segment of the given width with butt caps.
///
/// The stroke is rasterised as the quadrilateral swept by the segment, so it
/// composites exactly once per covered pixel.
pub fn stroke_line(img: &mut RgbaImage, from: Vertex, to: Vertex, width: f64, color: Rgba<u8>) {
    let (dx, dy) = (to.0 - from.0, to.1 - from.1);
    let length = (dx * dx + dy * dy).sqrt();
    if length == 0.0 || width <= 0.0 {
        return;
    }

    let half = width / 2.0;
    let (nx, ny) = (-dy / length * half, dx / length * half);

    let quad = [
        (from.0 + nx, from.1 + ny),
        (to.0 + nx, to.1 + ny),
        (to.0 - nx, to.1 - ny),
        (from.0 - nx, from.1 - ny),
    ];
    fill_polygon(img, &quad, color);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas(size: u32, color: Rgba<u8>) -> RgbaImage {
        RgbaImage::from_pixel(size, size, color)
    }

    #[test]
    fn transparent_source_is_a_no_op() {
        let mut px = Rgba([10, 20, 30, 255]);
        blend_over(&mut px, Rgba([255, 255, 255, 0]));
        assert_eq!(px, Rgba([10, 20, 30, 255]));
    }

    #[test]
    fn over_on_opaque_background_mixes_by_alpha() {
        let mut px = Rgba([0, 0, 0, 255]);
        blend_over(&mut px, Rgba([255, 100, 0, 51]));
        // 51 / 255 = 0.2
        assert_eq!(px, Rgba([51, 20, 0, 255]));
    }

    #[test]
    fn over_on_transparent_keeps_source_color() {
        let mut px = Rgba([0, 0, 0, 0]);
        blend_over(&mut px, Rgba([200, 100, 50, 80]));
        assert_eq!(px, Rgba([200, 100, 50, 80]));
    }

    #[test]
    fn layer_composite_respects_per_pixel_alpha() {
        let mut base = canvas(2, Rgba([100, 100, 100, 255]));
        let mut layer = RgbaImage::new(2, 2);
        layer.put_pixel(1, 0, Rgba([200, 200, 200, 255]));

        composite_layer(&mut base, &layer);

        assert_eq!(*base.get_pixel(0, 0), Rgba([100, 100, 100, 255]));
        assert_eq!(*base.get_pixel(1, 0), Rgba([200, 200, 200, 255]));
    }

    #[test]
    fn fills_axis_aligned_square() {
        let mut img = canvas(10, Rgba([0, 0, 0, 255]));
        let white = Rgba([255, 255, 255, 255]);
        fill_polygon(&mut img, &[(2.0, 2.0), (6.0, 2.0), (6.0, 6.0), (2.0, 6.0)], white);

        let filled = img.pixels().filter(|p| **p == white).count();
        assert_eq!(filled, 16);
        assert_eq!(*img.get_pixel(2, 2), white);
        assert_eq!(*img.get_pixel(5, 5), white);
        assert_eq!(*img.get_pixel(6, 6), Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn triangle_covers_about_half_its_box() {
        let mut img = canvas(100, Rgba([0, 0, 0, 255]));
        let white = Rgba([255, 255, 255, 255]);
        fill_polygon(&mut img, &[(0.0, 0.0), (100.0, 0.0), (0.0, 100.0)], white);

        let filled = img.pixels().filter(|p| **p == white).count();
        assert!((4900..=5100).contains(&filled), "filled {filled}");
        assert_eq!(*img.get_pixel(1, 1), white);
        assert_eq!(*img.get_pixel(98, 98), Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn polygon_is_clipped_to_canvas() {
        let mut img = canvas(4, Rgba([0, 0, 0, 255]));
        let white = Rgba([255, 255, 255, 255]);
        fill_polygon(&mut img, &[(-10.0, -10.0), (20.0, -10.0), (20.0, 20.0), (-10.0, 20.0)], white);
        assert!(img.pixels().all(|p| *p == white));
    }

    #[test]
    fn degenerate_polygons_draw_nothing() {
        let mut img = canvas(4, Rgba([0, 0, 0, 255]));
        fill_polygon(&mut img, &[(0.0, 0.0), (3.0, 3.0)], Rgba([255, 0, 0, 255]));
        stroke_line(&mut img, (1.0, 1.0), (1.0, 1.0), 4.0, Rgba([255, 0, 0, 255]));
        assert!(img.pixels().all(|p| *p == Rgba([0, 0, 0, 255])));
    }

    #[test]
    fn horizontal_stroke_has_requested_width() {
        let mut img = canvas(20, Rgba([0, 0, 0, 255]));
        let red = Rgba([255, 0, 0, 255]);
        stroke_line(&mut img, (2.0, 10.0), (18.0, 10.0), 4.0, red);

        let column: Vec<_> = (0..20).filter(|&y| *img.get_pixel(10, y) == red).collect();
        assert_eq!(column, vec![8, 9, 10, 11]);
    }

    #[test]
    fn translucent_fill_composites_once() {
        let mut img = canvas(8, Rgba([0, 0, 0, 255]));
        let half_white = Rgba([255, 255, 255, 128]);
        fill_polygon(&mut img, &[(0.0, 0.0), (8.0, 0.0), (8.0, 8.0), (0.0, 8.0)], half_white);
        assert!(img.pixels().all(|p| *p == Rgba([128, 128, 128, 255])));
    }
}
