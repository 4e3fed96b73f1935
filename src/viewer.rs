//! 合成結果の表示

use crate::error::{MergeError, Result};
use std::path::Path;
use std::process::Command;

/// 画像を対話的に表示する手段
pub trait ImageViewer {
    fn show(&self, path: &Path) -> Result<()>;
}

/// OS標準のビューア（または設定されたコマンド）で開く
#[derive(Debug, Clone, Default)]
pub struct SystemViewer {
    command: Option<String>,
}

impl SystemViewer {
    pub fn new(command: Option<String>) -> Self {
        Self { command }
    }

    fn build_command(&self, path: &Path) -> Command {
        if let Some(program) = self.command.as_deref().filter(|c| !c.trim().is_empty()) {
            let mut cmd = Command::new(program.trim());
            cmd.arg(path);
            return cmd;
        }

        if cfg!(target_os = "windows") {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", "start", ""]).arg(path);
            cmd
        } else if cfg!(target_os = "macos") {
            let mut cmd = Command::new("open");
            cmd.arg(path);
            cmd
        } else {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(path);
            cmd
        }
    }
}

impl ImageViewer for SystemViewer {
    fn show(&self, path: &Path) -> Result<()> {
        let mut cmd = self.build_command(path);
        tracing::debug!("ビューアを起動: {:?}", cmd);
        cmd.spawn()
            .map(|_| ())
            .map_err(|e| MergeError::Viewer(format!("{}: {}", path.display(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_command_is_used() {
        let viewer = SystemViewer::new(Some("feh".to_string()));
        let cmd = viewer.build_command(Path::new("merged_image.png"));
        assert_eq!(cmd.get_program(), "feh");
        let args: Vec<_> = cmd.get_args().collect();
        assert_eq!(args, vec!["merged_image.png"]);
    }

    #[test]
    fn test_blank_command_falls_back_to_platform() {
        let viewer = SystemViewer::new(Some("  ".to_string()));
        let cmd = viewer.build_command(Path::new("merged_image.png"));
        assert_ne!(cmd.get_program(), "");
        assert_eq!(cmd.get_args().last().unwrap(), "merged_image.png");
    }

    #[test]
    fn test_missing_program_reports_viewer_error() {
        let viewer = SystemViewer::new(Some("/nonexistent/viewer-binary".to_string()));
        let result = viewer.show(Path::new("merged_image.png"));
        assert!(matches!(result, Err(MergeError::Viewer(_))));
    }
}
