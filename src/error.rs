//! エラーハンドリングシステム
//!
//! lined 全体で使用される統一されたエラー型とユーティリティを定義。
//! 行の不存在やコマンド不認識は通常の結果値であり、ここには含めない。

use thiserror::Error;

/// アプリケーション全体のエラー型
#[derive(Error, Debug, Clone)]
pub enum LinedError {
    /// ファイル操作エラー
    #[error("File operation failed")]
    File(#[from] FileError),

    /// 入力ストリームエラー（REPLにとって唯一の致命的条件）
    #[error("Input stream failed: {message}")]
    Input { message: String },

    /// アプリケーション論理エラー
    #[error("Application error: {0}")]
    Application(String),
}

/// ファイル操作固有のエラー
#[derive(Error, Debug, Clone)]
pub enum FileError {
    #[error("File not found: {path}")]
    NotFound { path: String },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: String },

    #[error("Invalid path: {path}")]
    InvalidPath { path: String },

    #[error("IO error: {message}")]
    Io { message: String },
}

impl FileError {
    /// std::io::Error を対象パス付きで分類
    pub fn from_io(error: &std::io::Error, path: &str) -> Self {
        match error.kind() {
            std::io::ErrorKind::NotFound => FileError::NotFound {
                path: path.to_string(),
            },
            std::io::ErrorKind::PermissionDenied => FileError::PermissionDenied {
                path: path.to_string(),
            },
            _ => FileError::Io {
                message: error.to_string(),
            },
        }
    }
}

// std::io::Error から LinedError への変換
impl From<std::io::Error> for LinedError {
    fn from(error: std::io::Error) -> Self {
        LinedError::File(FileError::Io {
            message: error.to_string(),
        })
    }
}

/// プロジェクト標準のResult型
pub type Result<T> = std::result::Result<T, LinedError>;

/// 各モジュール固有のResult型
pub mod file {
    pub type Result<T> = std::result::Result<T, super::FileError>;
}

/// パニックハンドラの設定
pub fn setup_panic_handler() {
    std::panic::set_hook(Box::new(|panic_info| {
        let location = panic_info
            .location()
            .unwrap_or_else(|| std::panic::Location::caller());

        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s
        } else {
            "Unknown panic payload"
        };

        eprintln!("PANIC at {}:{}: {}", location.file(), location.line(), message);
        eprintln!("Stack trace: {}", std::backtrace::Backtrace::capture());

        std::process::exit(1);
    }));
}
