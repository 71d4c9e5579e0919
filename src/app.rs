//! メインアプリケーション構造体
//!
//! REPLセッションの状態管理とメインループを実装。
//! 1コマンドの解析・実行が完了してから次の入力を読む逐次モデル。

use crate::buffer::LineBuffer;
use crate::command::{parse, CommandInterpreter, Execution};
use crate::error::{LinedError, Result};
use crate::file::DocumentStore;
use crate::logging::Logger;
use std::io::{BufRead, Write};

/// REPLの入力プロンプト
const PROMPT: &str = "> ";

/// メインアプリケーション構造体
///
/// 入力ソース・出力シンク・ドキュメントストアを協調者として受け取る。
/// 行バッファはセッションと同じ寿命で、このアプリが排他的に所有する。
pub struct App<R: BufRead, W: Write, S: DocumentStore> {
    /// アプリケーション実行状態
    running: bool,
    /// セッションの行バッファ
    buffer: LineBuffer,
    /// コマンド解釈器
    interpreter: CommandInterpreter<S>,
    /// 行単位の入力ソース
    input: R,
    /// ステータス行の出力シンク
    output: W,
    /// 開発者向けロガー
    logger: Logger,
}

impl<R: BufRead, W: Write, S: DocumentStore> App<R, W, S> {
    /// 新しいセッションを作成
    pub fn new(input: R, output: W, store: S) -> Self {
        Self {
            running: true,
            buffer: LineBuffer::new(),
            interpreter: CommandInterpreter::new(store),
            input,
            output,
            logger: Logger::for_session(),
        }
    }

    /// メインループを実行
    ///
    /// `.exit` で正常終了する。入力ソースの枯渇・読み取り失敗だけが
    /// 回復不能で、その場合は Err を返して失敗ステータスで終わる。
    pub fn run(&mut self) -> Result<()> {
        self.logger.log_info("session started", Some("repl"));

        while self.running {
            write!(self.output, "{}", PROMPT)?;
            self.output.flush()?;

            let raw = self.read_input()?;
            let command = parse(&raw);

            match self.interpreter.execute(command, &mut self.buffer) {
                Execution::Quit => self.running = false,
                Execution::Output(messages) => {
                    for message in messages {
                        writeln!(self.output, "{}", message)?;
                    }
                }
            }
        }

        self.logger.log_info("session ended", Some("repl"));
        Ok(())
    }

    /// 入力ソースから1行読む
    ///
    /// 末尾の改行（CRLFのCRを含む）は解析前に取り除く。
    fn read_input(&mut self) -> Result<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => Err(self.input_failure("input stream exhausted")),
            Ok(_) => {
                if line.ends_with('\n') {
                    line.pop();
                    if line.ends_with('\r') {
                        line.pop();
                    }
                }
                Ok(line)
            }
            Err(error) => Err(self.input_failure(&error.to_string())),
        }
    }

    /// 入力失敗の報告と致命的エラーへの変換
    fn input_failure(&mut self, message: &str) -> LinedError {
        let _ = writeln!(self.output, "Error reading input");
        self.logger
            .log_error_message(message, Some("input stream"));
        LinedError::Input {
            message: message.to_string(),
        }
    }

    /// アプリケーションが実行中かどうかを確認
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// セッションの行バッファを参照
    pub fn buffer(&self) -> &LineBuffer {
        &self.buffer
    }
}
