// Renderer properties: volume-to-height monotonicity, deterministic
// output, and the base64 PNG transport path.

use chem_lab_rust::color::Rgb;
use chem_lab_rust::flask::{liquid_height_px, png_base64, render_flask, render_flask_default};

use base64::{Engine as _, engine::general_purpose::STANDARD};
use image::Rgba;
use more_asserts::assert_ge;

fn liquid_pixel_count(volume_ml: u32, color: Rgb) -> usize {
    let img = render_flask_default(color, volume_ml);
    let fill = Rgba([color.r, color.g, color.b, 255]);
    img.pixels().filter(|p| **p == fill).count()
}

#[test]
fn liquid_grows_monotonically_with_volume() {
    let color = Rgb::from_hex("#00bfff").unwrap();

    let mut previous = liquid_pixel_count(0, color);
    assert_eq!(previous, 0, "zero volume must render no liquid");

    for volume in [50, 150, 300, 500, 750, 1000] {
        let count = liquid_pixel_count(volume, color);
        println!("{volume} mL -> {count} liquid pixels");
        assert_ge!(count, previous, "liquid shrank at {volume} mL");
        previous = count;
    }

    // A full flask holds visibly more than a splash.
    assert!(liquid_pixel_count(1000, color) > liquid_pixel_count(50, color));
}

#[test]
fn liquid_height_never_decreases() {
    let mut previous = 0;
    for volume in (0..=1500).step_by(100) {
        let height = liquid_height_px(volume, 300);
        assert_ge!(height, previous);
        previous = height;
    }
}

#[test]
fn overfilled_flask_clips_to_the_bulb() {
    // 1500 mL exceeds the nominal capacity; the mask is clamped to the
    // bulb, so the overfill renders the same as a full flask.
    let color = Rgb::from_hex("#800080").unwrap();
    assert_eq!(liquid_pixel_count(1500, color), liquid_pixel_count(1000, color));
}

#[test]
fn rendering_is_idempotent() {
    let color = Rgb::from_hex("#b9bbad").unwrap();
    let first = render_flask(color, 420, 200, 300);
    let second = render_flask(color, 420, 200, 300);
    assert_eq!(first.as_raw(), second.as_raw());
}

#[test]
fn background_stays_transparent() {
    let img = render_flask_default(Rgb::from_hex("#00bfff").unwrap(), 500);
    // corners are outside every shape
    assert_eq!(*img.get_pixel(0, 0), Rgba([0u8, 0, 0, 0]));
    assert_eq!(*img.get_pixel(199, 299), Rgba([0u8, 0, 0, 0]));
}

#[test]
fn png_base64_round_trips_the_signature() {
    let img = render_flask_default(Rgb::from_hex("#ff0000").unwrap(), 250);
    let encoded = png_base64(&img).unwrap();
    let bytes = STANDARD.decode(encoded).unwrap();
    assert_eq!(&bytes[..4], &[0x89, b'P', b'N', b'G']);
}
