// Render geometry and session defaults.

pub const FLASK_WIDTH_PX: u32 = 200; // default render width
pub const FLASK_HEIGHT_PX: u32 = 300; // default render height

pub const NOMINAL_CAPACITY_ML: u32 = 1000; // volume that spans the full fill band
pub const FILL_BAND_FRACTION: f64 = 2.0 / 3.0; // share of image height covered at nominal capacity

pub const MIN_ADDITION_VOLUME_ML: u32 = 1;
pub const DEFAULT_TEMPERATURE_C: i32 = 25;

pub const CANONICAL_WHITE_HEX: &str = "#ffffff"; // empty-mixture color

// Flask palette. Glass is a translucent blue-gray so the liquid reads through it.
pub const GLASS_FILL_RGBA: [u8; 4] = [220, 240, 255, 180];
pub const GLASS_OUTLINE_RGBA: [u8; 4] = [150, 150, 150, 255];
pub const TICK_RGBA: [u8; 4] = [100, 100, 100, 255];
pub const TICK_COUNT: i32 = 5;
