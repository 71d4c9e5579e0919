//! 行バッファ
//!
//! ドキュメントを構成する行の順序付きコレクション。行番号は1始まりの
//! 連番で、構造変更（削除・全置換）のたびに位置から導出し直す。
//! 番号は表示とメモリ上の概念であり、保存形式には含まれない。

/// バッファ内の1行のスナップショット
///
/// バッファ本体が行を所有し、外部へは現在の番号とテキストの複製だけを渡す。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// 1始まりの行番号
    pub number: usize,
    /// 行テキスト
    pub text: String,
}

/// 構造操作の結果
///
/// 対象行の不存在はエラーではなく、呼び出し側へ報告する通常の結果値
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferOutcome {
    /// 操作を適用した
    Applied,
    /// 指定番号の行が存在しない（バッファは無変更）
    NotFound,
}

impl BufferOutcome {
    /// 操作が適用されたかどうか
    pub fn is_applied(self) -> bool {
        matches!(self, BufferOutcome::Applied)
    }
}

/// 行バッファ本体
///
/// 内部表現は添字アドレスの動的配列。`lines[i]` の行番号は常に `i + 1`
/// なので、連番不変条件は構造上破れない。検索・編集・削除はO(n)、
/// 末尾追加は償却O(1)。
#[derive(Debug, Default, Clone)]
pub struct LineBuffer {
    lines: Vec<String>,
}

impl LineBuffer {
    /// 空のバッファを作成
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// 行数を取得
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// バッファが空かどうか
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// 行番号を内部添字へ変換
    fn index_of(&self, number: usize) -> Option<usize> {
        if number >= 1 && number <= self.lines.len() {
            Some(number - 1)
        } else {
            None
        }
    }

    /// 末尾に行を追加し、作成された行のスナップショットを返す
    ///
    /// 新しい行番号は現在の行数 + 1。失敗しない。
    pub fn append(&mut self, text: impl Into<String>) -> Line {
        let text = text.into();
        self.lines.push(text.clone());
        Line {
            number: self.lines.len(),
            text,
        }
    }

    /// 指定番号の行を取得
    ///
    /// バッファは変更しない。同じ番号で二度呼んでも結果は同一。
    pub fn find(&self, number: usize) -> Option<Line> {
        self.index_of(number).map(|index| Line {
            number,
            text: self.lines[index].clone(),
        })
    }

    /// 指定番号の行テキストをその場で置き換える
    ///
    /// 行番号は変わらない。
    pub fn edit(&mut self, number: usize, new_text: impl Into<String>) -> BufferOutcome {
        match self.index_of(number) {
            Some(index) => {
                self.lines[index] = new_text.into();
                BufferOutcome::Applied
            }
            None => BufferOutcome::NotFound,
        }
    }

    /// 指定番号の行を削除する
    ///
    /// 削除位置より後ろの行は詰められ、番号は位置から導出し直される。
    /// 隙間も欠番も残らない。
    pub fn delete(&mut self, number: usize) -> BufferOutcome {
        match self.index_of(number) {
            Some(index) => {
                self.lines.remove(index);
                BufferOutcome::Applied
            }
            None => BufferOutcome::NotFound,
        }
    }

    /// バッファ全体を破棄し、与えられた行列で作り直す
    ///
    /// 行番号は順に 1..n を割り当てる。ドキュメント読み込みで使用。
    pub fn replace_all<I>(&mut self, lines: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.lines = lines.into_iter().map(Into::into).collect();
    }

    /// 全行のスナップショットを番号昇順で走査する
    ///
    /// 呼び出しごとに現時点の内容から新しい走査を生成する。各要素は
    /// テキストを所有するため、収集済みの走査結果が後続の変更に
    /// 影響されることはない。
    pub fn all_lines(&self) -> impl Iterator<Item = Line> + '_ {
        self.lines.iter().enumerate().map(|(index, text)| Line {
            number: index + 1,
            text: text.clone(),
        })
    }

    /// 全行のテキストのみを順に参照する（保存用）
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }
}
