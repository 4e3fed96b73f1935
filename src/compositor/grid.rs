//! 中心十字線の描画

use image::{Rgba, RgbaImage};

/// 十字線の色（不透明な緑）
pub const GRID_COLOR: Rgba<u8> = Rgba([0, 255, 0, 255]);

/// 画像中心（整数の切り捨て除算）
pub fn center(width: u32, height: u32) -> (u32, u32) {
    (width / 2, height / 2)
}

/// 中心を通る水平線と垂直線（幅1px）を直接描き込む
pub fn draw_crosshair(image: &mut RgbaImage, color: Rgba<u8>) {
    let (width, height) = image.dimensions();
    let (center_x, center_y) = center(width, height);

    if center_y < height {
        for x in 0..width {
            image.put_pixel(x, center_y, color);
        }
    }
    if center_x < width {
        for y in 0..height {
            image.put_pixel(center_x, y, color);
        }
    }
}
