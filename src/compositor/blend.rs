//! アルファ設定とマスク付き貼り付け

use image::RgbaImage;

/// 波面画像に設定する透明度（0-255の約50%）
pub const OVERLAY_ALPHA: u8 = 128;

/// 全画素のアルファ値を一律に設定する（既存のアルファは上書き）
pub fn put_alpha(image: &mut RgbaImage, alpha: u8) {
    for pixel in image.pixels_mut() {
        pixel.0[3] = alpha;
    }
}

/// `overlay` 自身のアルファをマスクとして `base` の (x, y) に貼り付ける
///
/// アルファを含む全チャンネルを `out = (src*m + dst*(255-m)) / 255`（四捨五入）で合成する。
/// はみ出した部分は切り捨てる。
pub fn paste_with_mask(base: &mut RgbaImage, overlay: &RgbaImage, x: u32, y: u32) {
    let (base_w, base_h) = base.dimensions();
    if x >= base_w || y >= base_h {
        return;
    }
    let width = overlay.width().min(base_w - x);
    let height = overlay.height().min(base_h - y);

    for oy in 0..height {
        for ox in 0..width {
            let src = overlay.get_pixel(ox, oy);
            let mask = src.0[3];
            let dst = base.get_pixel_mut(x + ox, y + oy);
            for c in 0..4 {
                dst.0[c] = blend_channel(src.0[c], dst.0[c], mask);
            }
        }
    }
}

fn blend_channel(src: u8, dst: u8, mask: u8) -> u8 {
    let m = mask as u32;
    ((src as u32 * m + dst as u32 * (255 - m) + 127) / 255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_put_alpha_overwrites_every_pixel() {
        let mut img = RgbaImage::from_fn(3, 2, |x, _| Rgba([10, 20, 30, (x * 100) as u8]));
        put_alpha(&mut img, OVERLAY_ALPHA);
        assert!(img.pixels().all(|p| p.0[3] == 128));
        assert_eq!(img.get_pixel(1, 1).0[..3], [10, 20, 30]);
    }

    #[test]
    fn test_blend_channel_extremes() {
        assert_eq!(blend_channel(200, 50, 255), 200);
        assert_eq!(blend_channel(200, 50, 0), 50);
        assert_eq!(blend_channel(255, 255, 128), 255);
        assert_eq!(blend_channel(0, 0, 128), 0);
    }

    #[test]
    fn test_paste_half_alpha_over_opaque() {
        let mut base = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 255]));
        let overlay = RgbaImage::from_pixel(2, 2, Rgba([255, 255, 255, 128]));
        paste_with_mask(&mut base, &overlay, 0, 0);

        // (255*128 + 0*127 + 127) / 255 = 128
        // (128*128 + 255*127 + 127) / 255 = 191
        assert_eq!(base.get_pixel(0, 0), &Rgba([128, 128, 128, 191]));
        assert_eq!(base.get_pixel(1, 1), &Rgba([128, 128, 128, 191]));
    }

    #[test]
    fn test_paste_clips_to_base() {
        let mut base = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 255]));
        let overlay = RgbaImage::from_pixel(4, 4, Rgba([255, 0, 0, 255]));
        paste_with_mask(&mut base, &overlay, 1, 1);

        assert_eq!(base.get_pixel(0, 0), &Rgba([0, 0, 0, 255]));
        assert_eq!(base.get_pixel(1, 1), &Rgba([255, 0, 0, 255]));

        paste_with_mask(&mut base, &overlay, 5, 5);
        assert_eq!(base.get_pixel(0, 0), &Rgba([0, 0, 0, 255]));
    }
}
