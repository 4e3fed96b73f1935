use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MergeError {
    #[error("選択されていません: {0}")]
    MissingFolderSelection(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("画像合成エラー ({}): {source}", .output.display())]
    Composite {
        output: PathBuf,
        #[source]
        source: CompositeCause,
    },

    #[error("画像表示エラー: {0}")]
    Viewer(String),

    #[error("設定エラー: {0}")]
    Config(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

/// 1ペアの合成失敗の原因
#[derive(Error, Debug)]
pub enum CompositeCause {
    #[error("画像読み込みエラー {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("画像保存エラー: {source}")]
    Save {
        #[source]
        source: image::ImageError,
    },
}

impl MergeError {
    pub fn composite(output: impl Into<PathBuf>, source: CompositeCause) -> Self {
        MergeError::Composite {
            output: output.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, MergeError>;
