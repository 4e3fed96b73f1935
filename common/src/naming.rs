//! ファイル名の規則
//!
//! 対象拡張子、照合キー、出力ファイル名の導出。ファイルシステムには触れない。

/// ケラトメータ画像を示すトークン
pub const KERATOMETER_TOKEN: &str = "keratometer";

/// 波面画像を示すトークン
pub const WAVEFRONT_TOKEN: &str = "wavefront";

/// 出力ファイル名の接頭辞
pub const OUTPUT_PREFIX: &str = "processed_";

/// 対象とする拡張子（大文字小文字を区別、正規化しない）
pub const ACCEPTED_SUFFIXES: &[&str] = &[".jpg", ".png"];

/// 対象拡張子で終わるファイル名か
pub fn is_accepted_file_name(file_name: &str) -> bool {
    ACCEPTED_SUFFIXES.iter().any(|s| file_name.ends_with(s))
}

/// ケラトメータのファイル名から対応する波面ファイル名（照合キー）を導出
///
/// トークンは全て置換する。
pub fn match_key(keratometer_file_name: &str) -> String {
    keratometer_file_name.replace(KERATOMETER_TOKEN, WAVEFRONT_TOKEN)
}

/// 出力ファイル名
pub fn output_file_name(keratometer_file_name: &str) -> String {
    format!("{}{}", OUTPUT_PREFIX, keratometer_file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepted_suffixes() {
        assert!(is_accepted_file_name("a_keratometer.jpg"));
        assert!(is_accepted_file_name("a_wavefront.png"));
        assert!(!is_accepted_file_name("a_keratometer.JPG"));
        assert!(!is_accepted_file_name("a_keratometer.jpeg"));
        assert!(!is_accepted_file_name("a_keratometer.PNG"));
        assert!(!is_accepted_file_name("readme.txt"));
        assert!(!is_accepted_file_name("jpg"));
    }

    #[test]
    fn test_match_key() {
        assert_eq!(match_key("eye1_keratometer.jpg"), "eye1_wavefront.jpg");
        assert_eq!(match_key("keratometer_left.png"), "wavefront_left.png");
    }

    #[test]
    fn test_match_key_replaces_all_occurrences() {
        assert_eq!(
            match_key("keratometer_keratometer.jpg"),
            "wavefront_wavefront.jpg"
        );
    }

    #[test]
    fn test_match_key_without_token_is_unchanged() {
        assert_eq!(match_key("eye1.jpg"), "eye1.jpg");
    }

    #[test]
    fn test_output_file_name() {
        assert_eq!(
            output_file_name("eye1_keratometer.jpg"),
            "processed_eye1_keratometer.jpg"
        );
    }
}
