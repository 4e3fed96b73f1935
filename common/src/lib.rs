//! Eye Merge Common Library
//!
//! ケラトメータ画像と波面画像のペアリング規則（I/Oなし）

pub mod naming;
pub mod types;

pub use naming::{is_accepted_file_name, match_key, output_file_name};
pub use types::{ImageRole, Pair};
