use crate::error::{MergeError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// 前回選択した入力フォルダ
    pub input_folder: Option<PathBuf>,
    /// 前回選択した出力フォルダ
    pub output_folder: Option<PathBuf>,
    /// 合成結果を表示するコマンド（未設定ならOS標準）
    pub viewer: Option<String>,
    /// 一括処理を並列実行
    pub parallel: bool,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// 読み込みに失敗したら既定値を使う（CLI引数だけで実行できるように）
    pub fn load_or_default() -> Self {
        match Self::config_path() {
            Ok(path) => Self::load_or_default_from(&path),
            Err(e) => {
                tracing::warn!("設定を読み込めないため既定値を使います: {}", e);
                Self::default()
            }
        }
    }

    pub fn load_or_default_from(config_path: &Path) -> Self {
        Self::load_from(config_path).unwrap_or_else(|e| {
            tracing::warn!(
                "設定を読み込めないため既定値を使います ({}): {}",
                config_path.display(),
                e
            );
            Self::default()
        })
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| MergeError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("eye-merge").join("config.json"))
    }

    /// CLI引数を優先し、なければ設定値を使う
    pub fn resolve_folders(
        &self,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
    ) -> (Option<PathBuf>, Option<PathBuf>) {
        (
            input.or_else(|| self.input_folder.clone()),
            output.or_else(|| self.output_folder.clone()),
        )
    }
}
