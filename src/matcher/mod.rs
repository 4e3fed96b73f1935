mod types;

pub use types::MatchOutcome;

use crate::error::Result;
use crate::scanner::{self, ImageFile};
use eye_merge_common::{match_key, output_file_name, ImageRole, Pair};
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

/// ファイル名をキーにした画像の索引
///
/// 同名ファイルが複数のサブフォルダにある場合は後勝ち（走査順で後のもの）。
#[derive(Debug, Default)]
pub struct ImageIndex {
    keratometer_by_name: BTreeMap<String, PathBuf>,
    wavefront_by_name: HashMap<String, PathBuf>,
}

impl ImageIndex {
    pub fn from_images(images: impl IntoIterator<Item = ImageFile>) -> Self {
        let mut index = Self::default();
        for image in images {
            let replaced = match image.role {
                ImageRole::Keratometer => index
                    .keratometer_by_name
                    .insert(image.file_name.clone(), image.path),
                ImageRole::Wavefront => index
                    .wavefront_by_name
                    .insert(image.file_name.clone(), image.path),
                ImageRole::Unclassified => continue,
            };
            if let Some(old) = replaced {
                tracing::debug!("同名ファイルを上書き: {} ({})", image.file_name, old.display());
            }
        }
        index
    }

    pub fn keratometer_count(&self) -> usize {
        self.keratometer_by_name.len()
    }

    pub fn wavefront_count(&self) -> usize {
        self.wavefront_by_name.len()
    }

    /// ケラトメータ画像ごとの照合結果をファイル名順に返す
    pub fn outcomes<'a>(&'a self, output_root: &'a Path) -> impl Iterator<Item = MatchOutcome> + 'a {
        self.keratometer_by_name
            .iter()
            .map(move |(name, keratometer_path)| {
                match self.wavefront_by_name.get(&match_key(name)) {
                    Some(wavefront_path) => MatchOutcome::Matched(Pair {
                        keratometer_path: keratometer_path.clone(),
                        wavefront_path: wavefront_path.clone(),
                        output_path: output_root.join(output_file_name(name)),
                    }),
                    None => MatchOutcome::Unmatched {
                        keratometer: name.clone(),
                    },
                }
            })
    }
}

/// 入力フォルダと出力フォルダからペアを探す
///
/// `find` を呼ぶたびにフォルダを走査し直す（キャッシュしない）。
#[derive(Debug, Clone)]
pub struct PairFinder {
    input_root: PathBuf,
    output_root: PathBuf,
}

impl PairFinder {
    pub fn new(input_root: impl Into<PathBuf>, output_root: impl Into<PathBuf>) -> Self {
        Self {
            input_root: input_root.into(),
            output_root: output_root.into(),
        }
    }

    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    pub fn index(&self) -> Result<ImageIndex> {
        let images = scanner::scan_folder(&self.input_root)?;
        Ok(ImageIndex::from_images(images))
    }

    pub fn find(&self) -> Result<Vec<MatchOutcome>> {
        let index = self.index()?;
        Ok(index.outcomes(&self.output_root).collect())
    }
}
