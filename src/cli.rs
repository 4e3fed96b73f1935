use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "eye-merge")]
#[command(about = "ケラトメータ画像と波面画像を重ね合わせるツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 入力フォルダ内のペアを一括で合成
    Batch {
        /// 入力フォルダ（省略時は設定値）
        input: Option<PathBuf>,

        /// 出力フォルダ（省略時は設定値）
        output: Option<PathBuf>,

        /// ペアごとに並列処理
        #[arg(short, long)]
        parallel: bool,

        /// 処理結果をJSONで保存
        #[arg(short, long)]
        report: Option<PathBuf>,
    },

    /// 2枚の画像を合成して merged_image.png に保存・表示
    Merge {
        /// ケラトメータ画像（省略時は入力を求める）
        keratometer: Option<PathBuf>,

        /// 波面画像（省略時は入力を求める）
        wavefront: Option<PathBuf>,

        /// 保存のみ（表示しない）
        #[arg(long)]
        no_show: bool,
    },

    /// 設定を表示/編集
    Config {
        /// 入力フォルダを保存
        #[arg(long)]
        set_input: Option<PathBuf>,

        /// 出力フォルダを保存
        #[arg(long)]
        set_output: Option<PathBuf>,

        /// 表示コマンドを保存
        #[arg(long)]
        set_viewer: Option<String>,

        /// 一括処理の並列実行を既定にする
        #[arg(long)]
        parallel: Option<bool>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
