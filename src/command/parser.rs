//! コマンド解析
//!
//! 入力1行を固定の優先順位で分類する：
//! 1. `.` 始まり → メタコマンド（.exit / .open）
//! 2. `-` 始まり → 編集コマンド（-w / -p / -f / -e / -d）
//! 3. それ以外（空行を含む） → そのままドキュメント行として追加

/// `-w` でファイル名を省略した場合の保存先
pub const DEFAULT_DOCUMENT: &str = "document.txt";

/// 解析済みコマンド
///
/// 1回のREPL反復の中で生成・消費される一時値
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 入力テキストをそのまま新しい行として追加
    Append(String),
    /// バッファ全行を指定ファイルへ保存
    Save(String),
    /// 全行を番号付きで表示
    ShowAll,
    /// 指定番号の行を表示
    FindLine(usize),
    /// 指定番号の行テキストを置き換え
    EditLine(usize, String),
    /// 指定番号の行を削除
    DeleteLine(usize),
    /// 指定ファイルを読み込み、バッファを置き換え
    OpenDocument(String),
    /// セッション終了
    Exit,
    /// どの文法にも一致しない入力
    Unrecognized(String),
}

impl Command {
    /// `-` 始まりの編集コマンドとして解析されたかどうか
    ///
    /// 該当するコマンドの実行後には `Executed.` の確認応答が付く。
    pub fn is_editing_statement(&self) -> bool {
        matches!(
            self,
            Command::Save(_)
                | Command::ShowAll
                | Command::FindLine(_)
                | Command::EditLine(_, _)
                | Command::DeleteLine(_)
        )
    }
}

/// 入力1行を型付きコマンドへ解析する
pub fn parse(raw: &str) -> Command {
    if raw.starts_with('.') {
        parse_meta(raw)
    } else if raw.starts_with('-') {
        parse_editing(raw)
    } else {
        Command::Append(raw.to_string())
    }
}

/// メタコマンド（`.` 始まり）の解析
fn parse_meta(raw: &str) -> Command {
    if raw == ".exit" {
        return Command::Exit;
    }

    if let Some(rest) = raw.strip_prefix(".open") {
        // ファイル名はプレフィックス後の残り（先頭の空白は除去）。
        // 空のままなら実行側が "no filename provided" を報告する。
        if rest.is_empty() {
            return Command::OpenDocument(String::new());
        }
        if let Some(after_space) = rest.strip_prefix(' ') {
            return Command::OpenDocument(after_space.trim_start().to_string());
        }
    }

    Command::Unrecognized(raw.to_string())
}

/// 編集コマンド（`-` 始まり）の解析
fn parse_editing(raw: &str) -> Command {
    if raw == "-p" {
        return Command::ShowAll;
    }

    if let Some(rest) = raw.strip_prefix("-w") {
        if rest.is_empty() {
            return Command::Save(DEFAULT_DOCUMENT.to_string());
        }
        if rest.starts_with(' ') {
            let filename = rest.trim();
            return if filename.is_empty() {
                Command::Save(DEFAULT_DOCUMENT.to_string())
            } else {
                Command::Save(filename.to_string())
            };
        }
    }

    if let Some(number) = parse_numbered(raw, "-f") {
        return Command::FindLine(number);
    }

    if let Some(number) = parse_numbered(raw, "-d") {
        return Command::DeleteLine(number);
    }

    if let Some((number, text)) = parse_edit(raw) {
        return Command::EditLine(number, text);
    }

    Command::Unrecognized(raw.to_string())
}

/// `<prefix> <n>` 形式の解析（-f / -d 共通）
fn parse_numbered(raw: &str, prefix: &str) -> Option<usize> {
    let rest = raw.strip_prefix(prefix)?;
    let rest = rest.strip_prefix(' ')?;
    rest.trim().parse::<usize>().ok()
}

/// `-e <n> <text>` 形式の解析
///
/// 番号の後の最初の空白1つが区切りで、それ以降のテキストは一切
/// 加工しない。テキストが続かない形（`-e 3` など）は解析失敗として
/// 呼び出し側で Unrecognized に落とす。
fn parse_edit(raw: &str) -> Option<(usize, String)> {
    let rest = raw.strip_prefix("-e")?;
    let rest = rest.strip_prefix(' ')?;
    let (number_token, text) = rest.trim_start().split_once(' ')?;
    let number = number_token.parse::<usize>().ok()?;
    Some((number, text.to_string()))
}
