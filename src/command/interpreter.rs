//! コマンド実行
//!
//! 解析済みコマンドを行バッファとドキュメントストアに対して実行し、
//! 利用者へ表示するステータス行を組み立てる

use crate::buffer::{BufferOutcome, LineBuffer};
use crate::command::parser::Command;
use crate::file::DocumentStore;

/// コマンド実行の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Execution {
    /// 表示すべきステータス行（空のこともある）
    Output(Vec<String>),
    /// セッション終了（.exit による唯一の終端遷移）
    Quit,
}

impl Execution {
    fn single(message: impl Into<String>) -> Self {
        Execution::Output(vec![message.into()])
    }
}

/// コマンド解釈器
///
/// 呼び出し間で状態を持たず、渡されたバッファとストア越しにのみ
/// 世界へ作用する。
#[derive(Debug)]
pub struct CommandInterpreter<S: DocumentStore> {
    store: S,
}

impl<S: DocumentStore> CommandInterpreter<S> {
    /// ストアを協調者として解釈器を作成
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// コマンドを1つ実行し、結果を返す
    pub fn execute(&self, command: Command, buffer: &mut LineBuffer) -> Execution {
        let acknowledge = command.is_editing_statement();

        let mut execution = match command {
            Command::Append(text) => {
                buffer.append(text);
                Execution::single("Line added.")
            }
            Command::Save(filename) => self.save(&filename, buffer),
            Command::ShowAll => {
                let rows = buffer
                    .all_lines()
                    .map(|line| format!("{}: {}", line.number, line.text))
                    .collect();
                Execution::Output(rows)
            }
            Command::FindLine(number) => match buffer.find(number) {
                Some(line) => Execution::single(format!("Line {}: {}", line.number, line.text)),
                None => Execution::single(format!("Line {} not found.", number)),
            },
            Command::EditLine(number, text) => match buffer.edit(number, text) {
                BufferOutcome::Applied => Execution::Output(Vec::new()),
                BufferOutcome::NotFound => {
                    Execution::single(format!("Line {} not found for editing.", number))
                }
            },
            Command::DeleteLine(number) => match buffer.delete(number) {
                BufferOutcome::Applied => {
                    Execution::single(format!("Line {} deleted.", number))
                }
                BufferOutcome::NotFound => {
                    Execution::single(format!("Line {} not found for deletion.", number))
                }
            },
            Command::OpenDocument(filename) => self.open(&filename, buffer),
            Command::Exit => Execution::Quit,
            Command::Unrecognized(raw) => Execution::single(unrecognized_message(&raw)),
        };

        // 認識された編集コマンドには結果にかかわらず確認応答を付ける
        if acknowledge {
            if let Execution::Output(messages) = &mut execution {
                messages.push("Executed.".to_string());
            }
        }

        execution
    }

    /// バッファ全行をストアへ書き出す
    fn save(&self, filename: &str, buffer: &LineBuffer) -> Execution {
        match self.store.write_lines(filename, buffer.texts()) {
            Ok(()) => Execution::single(format!("Saved document to: {}", filename)),
            Err(error) => {
                log::warn!("save to {} failed: {}", filename, error);
                Execution::single(format!("Could not save document to: {}", filename))
            }
        }
    }

    /// ストアから全レコードを読み込み、バッファを置き換える
    ///
    /// 読み込みが完了した場合のみバッファに触れる。
    fn open(&self, filename: &str, buffer: &mut LineBuffer) -> Execution {
        if filename.is_empty() {
            return Execution::single("no filename provided");
        }

        match self.store.read_lines(filename) {
            Ok(records) => {
                buffer.replace_all(records);
                Execution::single(format!("Opened document: {}", filename))
            }
            Err(error) => {
                log::warn!("open of {} failed: {}", filename, error);
                Execution::single(format!("Could not open file: {}", filename))
            }
        }
    }
}

/// 不認識入力の報告文言
///
/// メタ形式（`.`）と編集形式（`-`）で文言を分ける
fn unrecognized_message(raw: &str) -> String {
    if raw.starts_with('.') {
        format!("Unrecognized command '{}'.", raw)
    } else {
        format!("Unrecognized keyword at start of '{}'.", raw)
    }
}
