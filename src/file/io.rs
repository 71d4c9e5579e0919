//! ドキュメントI/O
//!
//! 改行区切りレコードとしてのドキュメント読み書き。保存形式に
//! ヘッダや行番号は含まれず、番号は読み込み時に順序から再構成される。

use crate::error::{file::Result, FileError};
use crate::file::path::expand_path;
use std::fs;
use std::io::Write;
use std::path::Path;

/// ドキュメント読み書きの協調者トレイト
///
/// インタプリタはこのトレイト越しにのみ永続化へ触れる。
pub trait DocumentStore {
    /// ファイルから全レコードを読み込む
    ///
    /// レコード末尾の改行は取り除いて返す。全件の読み込みが成功した
    /// 場合のみ Ok を返す。
    fn read_lines(&self, filename: &str) -> Result<Vec<String>>;

    /// 全レコードを改行終端で書き出す
    ///
    /// 一時ファイルに書き切ってから改名するため、失敗時に既存の
    /// 出力先が欠けた状態で残ることはない。
    fn write_lines<'a, I>(&self, filename: &str, lines: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a str>;
}

/// ファイルシステム上のドキュメントストア
#[derive(Debug, Default, Clone, Copy)]
pub struct FsDocumentStore;

impl DocumentStore for FsDocumentStore {
    fn read_lines(&self, filename: &str) -> Result<Vec<String>> {
        let path = expand_path(filename)?;

        if path.is_dir() {
            return Err(FileError::InvalidPath {
                path: filename.to_string(),
            });
        }

        let content =
            fs::read_to_string(&path).map_err(|e| FileError::from_io(&e, filename))?;

        Ok(split_records(&content, filename))
    }

    fn write_lines<'a, I>(&self, filename: &str, lines: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let path = expand_path(filename)?;

        create_parent_dirs(&path, filename)?;

        // 一時ファイルに書き込んでからアトミックに移動
        let temp_path = path.with_extension("tmp");
        let mut file =
            fs::File::create(&temp_path).map_err(|e| FileError::from_io(&e, filename))?;
        for line in lines {
            writeln!(file, "{}", line).map_err(|e| FileError::from_io(&e, filename))?;
        }
        file.sync_all()
            .map_err(|e| FileError::from_io(&e, filename))?;
        fs::rename(&temp_path, &path).map_err(|e| FileError::from_io(&e, filename))?;

        Ok(())
    }
}

/// ファイル内容を改行でレコードに分割する
///
/// 終端改行の後には空レコードを作らない。CRLFのCRも取り除く。
fn split_records(content: &str, filename: &str) -> Vec<String> {
    if content.is_empty() {
        return Vec::new();
    }

    let mut records: Vec<String> = content.split('\n').map(str::to_string).collect();
    if content.ends_with('\n') {
        records.pop();
    }

    if records.iter().any(|record| record.ends_with('\r')) {
        log::warn!("Non-LF line endings detected in {}, will be normalized", filename);
        for record in &mut records {
            if record.ends_with('\r') {
                record.pop();
            }
        }
    }

    records
}

fn create_parent_dirs(path: &Path, filename: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| FileError::from_io(&e, filename))?;
        }
    }
    Ok(())
}

/// ドキュメント読み込みの便利関数
pub fn read_lines(filename: &str) -> Result<Vec<String>> {
    FsDocumentStore.read_lines(filename)
}

/// ドキュメント書き込みの便利関数
pub fn write_lines<'a, I>(filename: &str, lines: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    FsDocumentStore.write_lines(filename, lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn write_then_read_round_trips_records() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("doc.txt");
        let filename = file_path.to_str().unwrap();

        write_lines(filename, ["first line", "second line", ""]).unwrap();
        let records = read_lines(filename).unwrap();

        assert_eq!(records, vec!["first line", "second line", ""]);
    }

    #[test]
    fn written_file_has_newline_terminated_records_and_no_numbering() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("doc.txt");
        let filename = file_path.to_str().unwrap();

        write_lines(filename, ["alpha", "beta"]).unwrap();

        let raw = std::fs::read_to_string(&file_path).unwrap();
        assert_eq!(raw, "alpha\nbeta\n");
    }

    #[test]
    fn missing_file_reports_not_found() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("absent.txt");

        let result = read_lines(file_path.to_str().unwrap());
        assert!(matches!(result, Err(FileError::NotFound { .. })));
    }

    #[test]
    fn directory_is_an_invalid_path() {
        let temp_dir = tempdir().unwrap();

        let result = read_lines(temp_dir.path().to_str().unwrap());
        assert!(matches!(result, Err(FileError::InvalidPath { .. })));
    }

    #[test]
    fn empty_file_yields_no_records() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("empty.txt");
        std::fs::write(&file_path, "").unwrap();

        let records = read_lines(file_path.to_str().unwrap()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn crlf_records_are_normalized() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("crlf.txt");
        std::fs::write(&file_path, "first\r\nsecond\r\n").unwrap();

        let records = read_lines(file_path.to_str().unwrap()).unwrap();
        assert_eq!(records, vec!["first", "second"]);
    }

    #[test]
    fn final_record_without_newline_is_kept() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("partial.txt");
        std::fs::write(&file_path, "first\nsecond").unwrap();

        let records = read_lines(file_path.to_str().unwrap()).unwrap();
        assert_eq!(records, vec!["first", "second"]);
    }

    #[test]
    fn write_creates_missing_parent_directories() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("a").join("b").join("doc.txt");
        let filename = file_path.to_str().unwrap();

        write_lines(filename, ["nested"]).unwrap();
        assert_eq!(read_lines(filename).unwrap(), vec!["nested"]);
    }

    #[test]
    fn failed_write_leaves_existing_file_untouched() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("doc.txt");
        let filename = file_path.to_str().unwrap();

        write_lines(filename, ["original"]).unwrap();

        // 出力先を上書きできない状況でも既存の内容は残る
        let blocked = temp_dir.path().join("doc.txt").join("impossible");
        assert!(write_lines(blocked.to_str().unwrap(), ["next"]).is_err());
        assert_eq!(read_lines(filename).unwrap(), vec!["original"]);
    }
}
