//! lined - 行指向ドキュメントエディタ
//!
//! 行バッファエンジンとコマンド解釈のモジュール構成

// コアモジュール
pub mod error;
pub mod logging;
pub mod app;

// データ層
pub mod buffer;
pub mod file;

// ロジック層
pub mod command;

// 公開API
pub use app::App;
pub use buffer::{Line, LineBuffer};
pub use command::{Command, CommandInterpreter, Execution};
pub use error::{LinedError, Result};
pub use file::{DocumentStore, FsDocumentStore};
