//! ファイル操作モジュール
//!
//! ドキュメントの読み書きを担う協調者層：
//! - 読み込みはレコード全件が成功した場合のみバッファ側へ渡る
//! - 書き込みは一時ファイル経由で、途中失敗が既存ファイルを壊さない
//! - ファイル名の `~` と環境変数は展開する（表示は入力のまま）

pub mod io;
pub mod path;

// 公開API
pub use io::{DocumentStore, FsDocumentStore, read_lines, write_lines};
pub use path::expand_path;
