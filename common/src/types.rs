//! ペアリングの型定義
//!
//! - ImageRole: ファイル名から判定した画像の種類
//! - Pair: ケラトメータ画像と波面画像の組（出力先込み）

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::naming::{KERATOMETER_TOKEN, WAVEFRONT_TOKEN};

/// 画像の種類（ファイル名の部分一致で判定）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ImageRole {
    Keratometer,
    Wavefront,
    Unclassified,
}

impl ImageRole {
    /// ファイル名から種類を判定する（大文字小文字を区別）
    ///
    /// 両方のトークンを含むファイル名は `Keratometer` になる。
    /// 判定順序を固定したもので、`is_ambiguous` で検出できる。
    pub fn classify(file_name: &str) -> Self {
        if file_name.contains(KERATOMETER_TOKEN) {
            ImageRole::Keratometer
        } else if file_name.contains(WAVEFRONT_TOKEN) {
            ImageRole::Wavefront
        } else {
            ImageRole::Unclassified
        }
    }

    /// 両方のトークンを含む（ケラトメータ優先で判定された）ファイル名か
    pub fn is_ambiguous(file_name: &str) -> bool {
        file_name.contains(KERATOMETER_TOKEN) && file_name.contains(WAVEFRONT_TOKEN)
    }
}

impl std::fmt::Display for ImageRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageRole::Keratometer => write!(f, "keratometer"),
            ImageRole::Wavefront => write!(f, "wavefront"),
            ImageRole::Unclassified => write!(f, "unclassified"),
        }
    }
}

/// 合成対象のペア
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pair {
    pub keratometer_path: PathBuf,
    pub wavefront_path: PathBuf,
    /// 出力先（出力フォルダ + "processed_" + ケラトメータファイル名）
    pub output_path: PathBuf,
}
