use image::io::Reader as ImageReader;
use image::ColorType;
use plane_icon::icon_gen::DEFAULT_OUTPUT;

fn main() {
    let path = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_OUTPUT.to_string());

    let img = ImageReader::open(&path)
        .expect("Failed to open image")
        .decode()
        .expect("Failed to decode image");

    let width = img.width();
    let height = img.height();

    println!("Checking icon: {}", path);
    println!("Image dimensions: {}x{}", width, height);
    println!("Color type: {:?}", img.color());

    let rgb_img = img.to_rgb8();

    // Corners show the gradient and the tint ramp
    let corners = [
        ("top-left", 0, 0),
        ("top-right", width - 1, 0),
        ("bottom-left", 0, height - 1),
        ("bottom-right", width - 1, height - 1),
    ];
    println!("\nCorner samples:");
    for (name, x, y) in corners {
        let p = rgb_img.get_pixel(x, y);
        println!("  {:<12} RGB: [{}, {}, {}]", name, p[0], p[1], p[2]);
    }

    // Just above the centre sits inside the upper wing
    let probe = rgb_img.get_pixel(width / 2, height / 2 - height / 16);
    println!("\nGlyph probe: RGB: [{}, {}, {}]", probe[0], probe[1], probe[2]);

    let mut ok = true;

    if width != height {
        println!("⚠ Icon is not square");
        ok = false;
    }
    if img.color() != ColorType::Rgb8 {
        println!("⚠ Icon carries an alpha channel or is not 8-bit RGB");
        ok = false;
    }
    if probe.0.iter().all(|&c| c > 180) {
        println!("✓ Paper plane detected!");
    } else {
        println!("⚠ Paper plane may not be drawn");
        ok = false;
    }

    if !ok {
        std::process::exit(1);
    }
}
