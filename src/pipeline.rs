//! 一括処理と手動合成
//!
//! 一括処理ではペアごとに失敗を分離し、失敗があっても最後まで処理して完了を返す。

use crate::compositor;
use crate::error::{MergeError, Result};
use crate::matcher::{MatchOutcome, PairFinder};
use crate::viewer::ImageViewer;
use chrono::Local;
use eye_merge_common::Pair;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 手動合成の出力ファイル名（固定）
pub const MERGED_IMAGE_NAME: &str = "merged_image.png";

#[derive(Debug, Clone, Copy, Default)]
pub struct BatchOptions {
    /// ペアごとの合成を並列に実行
    pub parallel: bool,
    /// 進捗バーを表示
    pub show_progress: bool,
}

/// 合成に失敗したペア
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailureNotice {
    pub output: PathBuf,
    pub cause: String,
}

/// 一括処理の結果
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    pub started_at: String,
    pub finished_at: String,
    /// 保存できた出力ファイル
    pub processed: Vec<PathBuf>,
    /// 対応する波面画像がなかったケラトメータのファイル名
    pub unmatched: Vec<String>,
    pub failures: Vec<FailureNotice>,
    /// ペア以外の警告（入力フォルダが見つからない等）
    #[serde(default)]
    pub warnings: Vec<String>,
}

impl BatchReport {
    fn start() -> Self {
        Self {
            started_at: Local::now().to_rfc3339(),
            ..Default::default()
        }
    }

    pub fn pair_count(&self) -> usize {
        self.processed.len() + self.failures.len()
    }

    /// 未照合・失敗・警告がひとつもない
    pub fn is_clean(&self) -> bool {
        self.unmatched.is_empty() && self.failures.is_empty() && self.warnings.is_empty()
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

fn require<'a>(path: Option<&'a Path>, what: &str) -> Result<&'a Path> {
    path.filter(|p| !p.as_os_str().is_empty())
        .ok_or_else(|| MergeError::MissingFolderSelection(what.to_string()))
}

fn progress_bar(len: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::with_template("  [{bar:30}] {pos}/{len} {msg}") {
        pb.set_style(style.progress_chars("=> "));
    }
    pb
}

/// 入力フォルダのペアを全て合成して出力フォルダに保存する
///
/// フォルダが未選択なら何も読まずに `MissingFolderSelection` を返す。
/// それ以外（入力フォルダがない、出力フォルダを作れない、ペア単位の失敗）は
/// レポートに記録し、処理は最後まで続ける。
pub fn run_batch(
    input_folder: Option<&Path>,
    output_folder: Option<&Path>,
    options: BatchOptions,
) -> Result<BatchReport> {
    let input = require(input_folder, "入力フォルダ")?;
    let output = require(output_folder, "出力フォルダ")?;

    let mut report = BatchReport::start();
    let finder = PairFinder::new(input, output);

    let outcomes = match finder.find() {
        Ok(outcomes) => outcomes,
        Err(MergeError::FolderNotFound(folder)) => {
            let warning = format!("入力フォルダが見つかりません: {}", folder);
            tracing::warn!("{}", warning);
            report.warnings.push(warning);
            Vec::new()
        }
        Err(e) => return Err(e),
    };

    let mut pairs: Vec<Pair> = Vec::new();
    for outcome in outcomes {
        match outcome {
            MatchOutcome::Matched(pair) => pairs.push(pair),
            MatchOutcome::Unmatched { keratometer } => {
                tracing::warn!("対応する波面画像が見つかりません: {}", keratometer);
                report.unmatched.push(keratometer);
            }
        }
    }

    // 作成に失敗しても各ペアの保存エラーとして記録される
    if !pairs.is_empty() {
        if let Err(e) = std::fs::create_dir_all(finder.output_root()) {
            tracing::warn!(
                "出力フォルダを作成できません {}: {}",
                finder.output_root().display(),
                e
            );
        }
    }

    let pb = progress_bar(pairs.len(), options.show_progress);
    let process = |pair: Pair| {
        let result = compositor::process_pair(&pair);
        pb.inc(1);
        (pair, result)
    };
    let results: Vec<(Pair, Result<()>)> = if options.parallel {
        pairs.into_par_iter().map(process).collect()
    } else {
        pairs.into_iter().map(process).collect()
    };
    pb.finish_and_clear();

    for (pair, result) in results {
        match result {
            Ok(()) => {
                tracing::info!("保存しました: {}", pair.output_path.display());
                report.processed.push(pair.output_path);
            }
            Err(e) => {
                tracing::error!("{}", e);
                let cause = match e {
                    MergeError::Composite { source, .. } => source.to_string(),
                    other => other.to_string(),
                };
                report.failures.push(FailureNotice {
                    output: pair.output_path,
                    cause,
                });
            }
        }
    }

    report.finished_at = Local::now().to_rfc3339();
    tracing::info!(
        "完了: 成功 {} / 失敗 {} / 未照合 {} / 警告 {}",
        report.processed.len(),
        report.failures.len(),
        report.unmatched.len(),
        report.warnings.len()
    );
    Ok(report)
}

/// 手動合成の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutcome {
    pub output: PathBuf,
    pub displayed: bool,
}

/// 選択された2枚を合成し、`dest_dir/merged_image.png` に保存して表示する
///
/// `viewer` が `None` のときは保存のみ。失敗はそのまま呼び出し元に返す。
pub fn merge_pair(
    keratometer: Option<&Path>,
    wavefront: Option<&Path>,
    dest_dir: &Path,
    viewer: Option<&dyn ImageViewer>,
) -> Result<MergeOutcome> {
    let keratometer = require(keratometer, "ケラトメータ画像")?;
    let wavefront = require(wavefront, "波面画像")?;
    let output = dest_dir.join(MERGED_IMAGE_NAME);

    let merged = compositor::composite_files(keratometer, wavefront)
        .map_err(|cause| MergeError::composite(&output, cause))?;
    compositor::save_image(&merged, &output)
        .map_err(|cause| MergeError::composite(&output, cause))?;
    tracing::info!("合成画像を保存しました: {}", output.display());

    let displayed = match viewer {
        Some(viewer) => {
            viewer.show(&output)?;
            true
        }
        None => false,
    };

    Ok(MergeOutcome { output, displayed })
}
