//! 画像合成モジュール
//!
//! ケラトメータ画像に波面画像を半透明で重ね、中心に十字線を描いて保存する。
//! 出力サイズは常にケラトメータ画像のサイズになる。

pub mod blend;
pub mod grid;

use crate::error::{CompositeCause, MergeError, Result};
use eye_merge_common::Pair;
use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageFormat, RgbaImage};
use std::path::Path;

pub use blend::OVERLAY_ALPHA;
pub use grid::GRID_COLOR;

/// 波面画像のリサイズに使うフィルタ
const RESIZE_FILTER: FilterType = FilterType::CatmullRom;

/// 画像を開いてRGBAに変換する
pub fn open_rgba(path: &Path) -> std::result::Result<RgbaImage, CompositeCause> {
    let image = image::open(path).map_err(|source| CompositeCause::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(image.to_rgba8())
}

/// 2枚のRGBA画像を合成する（入力は変更しない）
pub fn composite(keratometer: &RgbaImage, wavefront: &RgbaImage) -> RgbaImage {
    let mut merged = keratometer.clone();
    let (width, height) = merged.dimensions();

    let mut overlay = imageops::resize(wavefront, width, height, RESIZE_FILTER);
    blend::put_alpha(&mut overlay, OVERLAY_ALPHA);
    blend::paste_with_mask(&mut merged, &overlay, 0, 0);

    grid::draw_crosshair(&mut merged, GRID_COLOR);
    merged
}

/// 2つのファイルを開いて合成する（保存はしない）
pub fn composite_files(
    keratometer_path: &Path,
    wavefront_path: &Path,
) -> std::result::Result<RgbaImage, CompositeCause> {
    let keratometer = open_rgba(keratometer_path)?;
    let wavefront = open_rgba(wavefront_path)?;
    Ok(composite(&keratometer, &wavefront))
}

/// 拡張子から形式を判定して保存する
///
/// アルファを持てない形式（JPEG）はアルファを捨ててRGBで保存する。
pub fn save_image(image: &RgbaImage, path: &Path) -> std::result::Result<(), CompositeCause> {
    let save_err = |source| CompositeCause::Save { source };
    let format = ImageFormat::from_path(path).map_err(save_err)?;

    match format {
        ImageFormat::Jpeg => DynamicImage::ImageRgba8(image.clone())
            .to_rgb8()
            .save_with_format(path, format)
            .map_err(save_err),
        _ => image.save_with_format(path, format).map_err(save_err),
    }
}

/// 1ペアを合成して出力先に保存する
pub fn process_pair(pair: &Pair) -> Result<()> {
    let output = &pair.output_path;
    let merged = composite_files(&pair.keratometer_path, &pair.wavefront_path)
        .map_err(|cause| MergeError::composite(output, cause))?;
    save_image(&merged, output).map_err(|cause| MergeError::composite(output, cause))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_composite_uses_keratometer_size() {
        let keratometer = RgbaImage::from_pixel(8, 6, Rgba([0, 0, 255, 255]));
        let wavefront = RgbaImage::from_pixel(3, 11, Rgba([255, 0, 0, 255]));

        let merged = composite(&keratometer, &wavefront);
        assert_eq!(merged.dimensions(), (8, 6));
    }

    #[test]
    fn test_composite_blends_and_draws_grid() {
        let keratometer = RgbaImage::from_pixel(8, 6, Rgba([0, 0, 255, 255]));
        let wavefront = RgbaImage::from_pixel(4, 4, Rgba([255, 0, 0, 255]));

        let merged = composite(&keratometer, &wavefront);

        // 十字線上
        assert_eq!(merged.get_pixel(4, 3), &GRID_COLOR);
        assert_eq!(merged.get_pixel(0, 3), &GRID_COLOR);
        assert_eq!(merged.get_pixel(4, 0), &GRID_COLOR);

        // 十字線外は赤と青の約50%合成
        assert_eq!(merged.get_pixel(0, 0), &Rgba([128, 0, 127, 191]));
    }

    #[test]
    fn test_composite_ignores_wavefront_alpha() {
        let keratometer = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]));
        let transparent = RgbaImage::from_pixel(4, 4, Rgba([255, 255, 255, 0]));

        let merged = composite(&keratometer, &transparent);
        assert_eq!(merged.get_pixel(0, 0), &Rgba([128, 128, 128, 191]));
    }

    #[test]
    fn test_composite_is_deterministic() {
        let keratometer = RgbaImage::from_fn(9, 7, |x, y| Rgba([x as u8 * 20, y as u8 * 30, 90, 255]));
        let wavefront = RgbaImage::from_fn(5, 13, |x, y| Rgba([200, x as u8 * 40, y as u8 * 15, 255]));

        let first = composite(&keratometer, &wavefront);
        let second = composite(&keratometer, &wavefront);
        assert_eq!(first.as_raw(), second.as_raw());
    }

    #[test]
    fn test_save_image_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let img = RgbaImage::new(2, 2);
        let result = save_image(&img, &dir.path().join("out.unknownext"));
        assert!(matches!(result, Err(CompositeCause::Save { .. })));
    }

    #[test]
    fn test_open_missing_file() {
        let result = open_rgba(Path::new("/nonexistent/eye_keratometer.jpg"));
        match result {
            Err(CompositeCause::Open { path, .. }) => {
                assert!(path.ends_with("eye_keratometer.jpg"));
            }
            other => panic!("unexpected: {:?}", other.map(|i| i.dimensions())),
        }
    }
}
