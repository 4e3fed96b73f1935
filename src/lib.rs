//! Eye Merge
//!
//! ケラトメータ画像と波面画像をファイル名で対応付け、重ね合わせて保存する。

pub mod cli;
pub mod compositor;
pub mod config;
pub mod error;
pub mod logging;
pub mod matcher;
pub mod pipeline;
pub mod scanner;
pub mod viewer;

pub use error::{MergeError, Result};
