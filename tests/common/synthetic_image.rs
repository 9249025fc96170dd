use pixel_util::{set_argb, set_rgb, PixelBuffer};
use std::path::PathBuf;

/// Diagonal color ramp with alpha varying along x.
pub fn gradient_argb(width: u32, height: u32) -> PixelBuffer {
    assert!(width > 0 && height > 0, "image dimensions must be positive");

    let mut img = PixelBuffer::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let a = (255 * x / (width - 1).max(1)) as u8;
            let r = (x * 37 % 256) as u8;
            let g = (y * 53 % 256) as u8;
            let b = ((x + y) * 11 % 256) as u8;
            set_argb(&mut img, x.into(), y.into(), [a, r, g, b]).expect("in range");
        }
    }
    img
}

/// Opaque checkerboard of two colors.
pub fn checkerboard_rgb(width: u32, height: u32, cell: u32) -> PixelBuffer {
    assert!(cell > 0, "cell size must be positive");

    let mut img = PixelBuffer::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let color = if (x / cell + y / cell) & 1 == 0 {
                [32, 64, 96]
            } else {
                [220, 200, 180]
            };
            set_rgb(&mut img, x.into(), y.into(), color).expect("in range");
        }
    }
    img
}

/// A per-test file path under the system temp directory.
pub fn temp_path(name: &str, ext: &str) -> PathBuf {
    std::env::temp_dir().join(format!("pixel_util_{name}_{}.{ext}", std::process::id()))
}
