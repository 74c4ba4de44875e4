// src/flask.rs - Procedural flask rendering with a volume-proportional liquid fill

use std::io::Cursor;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use image::{GrayImage, ImageFormat, Luma, Rgba, RgbaImage};
use imageproc::drawing::{
    draw_filled_ellipse_mut, draw_filled_rect_mut, draw_hollow_ellipse_mut, draw_hollow_rect_mut,
    draw_line_segment_mut,
};
use imageproc::rect::Rect;

use crate::color::Rgb;
use crate::constants::{
    FILL_BAND_FRACTION, FLASK_HEIGHT_PX, FLASK_WIDTH_PX, GLASS_FILL_RGBA, GLASS_OUTLINE_RGBA,
    NOMINAL_CAPACITY_ML, TICK_COUNT, TICK_RGBA,
};
use crate::error::{LabError, LabResult};

/// Liquid height in pixels for a given volume and image height.
///
/// 1000 mL maps linearly onto two thirds of the image height. Volumes
/// above the nominal capacity are NOT clamped here (known limitation,
/// preserved); the mask construction clips to the bulb instead.
pub fn liquid_height_px(volume_ml: u32, height: u32) -> i32 {
    let fraction = f64::from(volume_ml) / f64::from(NOMINAL_CAPACITY_ML);
    (fraction * (FILL_BAND_FRACTION * f64::from(height))).round() as i32
}

/// Render the flask at the default 200x300 size.
pub fn render_flask_default(liquid: Rgb, volume_ml: u32) -> RgbaImage {
    render_flask(liquid, volume_ml, FLASK_WIDTH_PX, FLASK_HEIGHT_PX)
}

/// Procedurally draw a flask on a transparent canvas: glass silhouette
/// (bulb, neck, mouth), then the liquid composited through a bulb-shaped
/// mask, then the decorative volume ticks.
///
/// Geometry is expressed as integer fractions of the image size, so the
/// output is deterministic for a given input. All drawing is clipped to
/// the canvas.
pub fn render_flask(liquid: Rgb, volume_ml: u32, width: u32, height: u32) -> RgbaImage {
    let mut img = RgbaImage::new(width, height);
    let w = width as i32;
    let h = height as i32;

    let glass = Rgba(GLASS_FILL_RGBA);
    let outline = Rgba(GLASS_OUTLINE_RGBA);

    // Bulb: ellipse over [w/4, 3w/4] x [h/3, 5h/6].
    let bulb_left = w / 4;
    let bulb_right = 3 * w / 4;
    let bulb_top = h / 3;
    let bulb_bottom = 5 * h / 6;
    let bulb_center = ((bulb_left + bulb_right) / 2, (bulb_top + bulb_bottom) / 2);
    let bulb_rx = (bulb_right - bulb_left) / 2;
    let bulb_ry = (bulb_bottom - bulb_top) / 2;
    draw_filled_ellipse_mut(&mut img, bulb_center, bulb_rx, bulb_ry, glass);
    draw_hollow_ellipse_mut(&mut img, bulb_center, bulb_rx, bulb_ry, outline);

    // Neck: [w/3, 2w/3] x [h/6, h/3]. Mouth: 10 px wider on each side,
    // [h/12, h/6].
    glass_rect(&mut img, w / 3, h / 6, 2 * w / 3, h / 3, glass, outline);
    glass_rect(
        &mut img,
        w / 3 - 10,
        h / 12,
        2 * w / 3 + 10,
        h / 6,
        glass,
        outline,
    );

    // Liquid: an ellipse mask anchored to the bulb's horizontal extent,
    // bottom on the bulb bottom, top `liquid_height` above it but never
    // above the bulb top.
    let liquid_height = liquid_height_px(volume_ml, height);
    if liquid_height > 0 {
        let liquid_top = (bulb_bottom - liquid_height).max(bulb_top);
        let mut mask = GrayImage::new(width, height);
        let mask_center = ((bulb_left + bulb_right) / 2, (liquid_top + bulb_bottom) / 2);
        let mask_ry = (bulb_bottom - liquid_top) / 2;
        draw_filled_ellipse_mut(&mut mask, mask_center, bulb_rx, mask_ry, Luma([255u8]));

        let fill = Rgba([liquid.r, liquid.g, liquid.b, 255]);
        for (x, y, m) in mask.enumerate_pixels() {
            if m[0] > 0 {
                img.put_pixel(x, y, fill);
            }
        }
    }

    // Volume ticks along the right side of the bulb, fixed positions.
    let tick = Rgba(TICK_RGBA);
    for i in 1..=TICK_COUNT {
        let y = (bulb_bottom - i * (h / 6)) as f32;
        draw_line_segment_mut(
            &mut img,
            ((bulb_right + 5) as f32, y),
            ((bulb_right + 15) as f32, y),
            tick,
        );
    }

    img
}

/// Filled rectangle with an outline, skipped when degenerate.
fn glass_rect(
    img: &mut RgbaImage,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    fill: Rgba<u8>,
    outline: Rgba<u8>,
) {
    if x1 <= x0 || y1 <= y0 {
        return;
    }
    let rect = Rect::at(x0, y0).of_size((x1 - x0) as u32, (y1 - y0) as u32);
    draw_filled_rect_mut(img, rect, fill);
    draw_hollow_rect_mut(img, rect, outline);
}

/// Encode a rendered flask as a base64 PNG string for transport.
pub fn png_base64(image: &RgbaImage) -> LabResult<String> {
    let mut buffer = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
        .map_err(|e| LabError::ImageEncoding(e.to_string()))?;
    Ok(STANDARD.encode(&buffer))
}
