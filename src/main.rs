use clap::Parser;
use dialoguer::Input;
use eye_merge::{cli, config, logging, pipeline, viewer};
use cli::{Cli, Commands};
use config::Config;
use eye_merge::Result;
use std::path::PathBuf;
use viewer::{ImageViewer, SystemViewer};

/// パスを対話入力で求める（空欄なら未選択）
fn prompt_path(prompt: &str) -> Option<PathBuf> {
    let answer: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .ok()?;
    let trimmed = answer.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(PathBuf::from(trimmed))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_cli_logger(cli.verbose);

    match cli.command {
        Commands::Batch { input, output, parallel, report } => {
            println!("👁 eye-merge - 一括処理\n");
            let config = Config::load_or_default();

            let (input, output) = config.resolve_folders(input, output);
            let options = pipeline::BatchOptions {
                parallel: parallel || config.parallel,
                show_progress: true,
            };

            println!("[1/2] ペアを検索・合成中...{}", if options.parallel { " (並列)" } else { "" });
            let result = pipeline::run_batch(input.as_deref(), output.as_deref(), options)?;
            println!(
                "✔ {}ペアを処理（成功 {} / 失敗 {}）",
                result.pair_count(),
                result.processed.len(),
                result.failures.len()
            );

            for warning in &result.warnings {
                println!("⚠ {}", warning);
            }
            for name in &result.unmatched {
                println!("⚠ 波面画像が見つかりません: {}", name);
            }
            for failure in &result.failures {
                println!("✖ {}: {}", failure.output.display(), failure.cause);
            }

            if let Some(report_path) = report {
                println!("\n[2/2] レポートを保存中...");
                result.save(&report_path)?;
                println!("✔ レポートを保存: {}", report_path.display());
            }

            println!("\n✅ 処理完了");
        }

        Commands::Merge { keratometer, wavefront, no_show } => {
            println!("👁 eye-merge - 画像合成\n");
            let config = Config::load_or_default();

            let keratometer = keratometer.or_else(|| prompt_path("ケラトメータ画像"));
            let wavefront = wavefront.or_else(|| prompt_path("波面画像"));

            let system_viewer = SystemViewer::new(config.viewer.clone());
            let viewer: Option<&dyn ImageViewer> = if no_show { None } else { Some(&system_viewer) };

            let merged = pipeline::merge_pair(
                keratometer.as_deref(),
                wavefront.as_deref(),
                std::path::Path::new("."),
                viewer,
            )?;
            println!("✔ 合成画像を保存: {}", merged.output.display());
            if merged.displayed {
                println!("✔ ビューアで表示しました");
            }
        }

        Commands::Config { set_input, set_output, set_viewer, parallel, show } => {
            let mut config = Config::load()?;
            let changed = set_input.is_some()
                || set_output.is_some()
                || set_viewer.is_some()
                || parallel.is_some();

            if let Some(folder) = set_input {
                config.input_folder = Some(folder);
            }
            if let Some(folder) = set_output {
                config.output_folder = Some(folder);
            }
            if let Some(command) = set_viewer {
                config.viewer = Some(command);
            }
            if let Some(parallel) = parallel {
                config.parallel = parallel;
            }

            if changed {
                config.save()?;
                println!("✔ 設定を保存しました");
            }

            if show || !changed {
                let unset = || "未設定".to_string();
                println!("設定:");
                println!(
                    "  入力フォルダ: {}",
                    config.input_folder.as_ref().map(|p| p.display().to_string()).unwrap_or_else(unset)
                );
                println!(
                    "  出力フォルダ: {}",
                    config.output_folder.as_ref().map(|p| p.display().to_string()).unwrap_or_else(unset)
                );
                println!("  ビューア: {}", config.viewer.clone().unwrap_or_else(|| "OS標準".to_string()));
                println!("  並列処理: {}", if config.parallel { "有効" } else { "無効" });
            }
        }
    }

    Ok(())
}
