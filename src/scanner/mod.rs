use crate::error::{MergeError, Result};
use eye_merge_common::{is_accepted_file_name, ImageRole};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct ImageFile {
    pub path: PathBuf,
    pub file_name: String,
    pub role: ImageRole,
}

impl ImageFile {
    fn new(path: PathBuf, file_name: String) -> Self {
        let role = ImageRole::classify(&file_name);
        if ImageRole::is_ambiguous(&file_name) {
            tracing::warn!(
                "ファイル名に keratometer と wavefront の両方が含まれています。keratometer として扱います: {}",
                path.display()
            );
        }
        Self { path, file_name, role }
    }
}

/// フォルダを再帰的にスキャンし、対象拡張子の画像を列挙する
///
/// 走査はファイル名順（サブフォルダも同じ規則）で、結果もその順序になる。
pub fn scan_folder(folder: &Path) -> Result<Vec<ImageFile>> {
    if !folder.is_dir() {
        return Err(MergeError::FolderNotFound(folder.display().to_string()));
    }

    let root = folder.canonicalize()?;
    let mut images = Vec::new();

    for entry in WalkDir::new(&root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if !entry.path().is_file() {
            continue;
        }

        let file_name = match entry.file_name().to_str() {
            Some(name) => name.to_string(),
            None => {
                tracing::debug!("UTF-8でないファイル名をスキップ: {}", entry.path().display());
                continue;
            }
        };

        if !is_accepted_file_name(&file_name) {
            continue;
        }

        images.push(ImageFile::new(entry.into_path(), file_name));
    }

    tracing::debug!("{}件の画像を検出: {}", images.len(), root.display());
    Ok(images)
}
