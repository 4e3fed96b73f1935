use eye_merge_common::Pair;

/// 照合結果（ケラトメータ画像1枚ごと）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// 対応する波面画像が見つかった
    Matched(Pair),
    /// 対応する波面画像がない（処理は継続）
    Unmatched { keratometer: String },
}

impl MatchOutcome {
    pub fn pair(&self) -> Option<&Pair> {
        match self {
            MatchOutcome::Matched(pair) => Some(pair),
            MatchOutcome::Unmatched { .. } => None,
        }
    }
}
