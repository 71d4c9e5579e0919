//! パス処理ユーティリティ
//!
//! ユーザ入力のファイル名をファイルシステム呼び出し前に展開する

use crate::error::{file::Result, FileError};
use std::path::PathBuf;

/// ファイル名の `~` と環境変数を展開する
///
/// 展開はファイルシステム操作のためだけに行い、ステータスメッセージには
/// 入力された文字列をそのまま使う。`~user` 形式は未サポート。
pub fn expand_path(raw: &str) -> Result<PathBuf> {
    let tilde_expanded = expand_home(raw)?;

    match shellexpand::env(&tilde_expanded) {
        Ok(expanded) => Ok(PathBuf::from(expanded.as_ref())),
        Err(_) => Err(FileError::InvalidPath {
            path: raw.to_string(),
        }),
    }
}

/// ホームディレクトリ展開（~ → /home/user）
fn expand_home(raw: &str) -> Result<String> {
    if !raw.starts_with('~') {
        return Ok(raw.to_string());
    }

    let home = dirs::home_dir().ok_or_else(|| FileError::InvalidPath {
        path: raw.to_string(),
    })?;

    if raw == "~" {
        Ok(home.to_string_lossy().into_owned())
    } else if let Some(rest) = raw.strip_prefix("~/") {
        Ok(format!("{}/{}", home.to_string_lossy(), rest))
    } else {
        // ~user 形式
        Err(FileError::InvalidPath {
            path: raw.to_string(),
        })
    }
}
