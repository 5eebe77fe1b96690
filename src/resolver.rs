//! 名簿1行ごとの写真解決
//!
//! 名と姓から `名-姓` 形式のキーを組み立て、完全一致→あいまい一致の順で
//! 写真を探して `pic_path` 列に書き込む。
//!
//! ## 処理フロー
//! 1. 氏名キーの組み立て（前後の空白は除去）
//! 2. 完全一致検索、なければあいまい一致検索
//! 3. 結果を表に書き戻し、集計に記録
//!
//! 1行の失敗はその行の記録にとどめ、残りの行の処理は続行する。

use crate::config::Config;
use crate::error::Result;
use crate::matcher::{self, types::MatchResult};
use crate::scanner::Candidate;
use crate::table::Table;
use serde::Serialize;
use tracing::{debug, error, warn};

/// 照合結果を書き込む列名
pub const OUTPUT_COLUMN: &str = "pic_path";

/// 1回の照合実行の集計
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    /// 処理した行数
    pub total_rows: usize,
    /// 完全一致した行数
    pub exact_matches: usize,
    /// あいまい一致で解決した行数
    pub fuzzy_matches: usize,
    /// 一致しなかった氏名キー（行順）
    pub unmatched: Vec<String>,
    /// 行単位のエラー（行順）
    pub errors: Vec<RowError>,
}

/// 1行分の処理エラー
#[derive(Debug, Clone, Serialize)]
pub struct RowError {
    /// データ行番号（ヘッダーを除く0始まり）
    pub row: usize,
    pub message: String,
}

impl RunSummary {
    /// 写真が見つかった行数
    pub fn matched(&self) -> usize {
        self.exact_matches + self.fuzzy_matches
    }

    /// 全行が写真に一致したか。不一致の行もエラーの行もないときだけtrue
    pub fn all_matched(&self) -> bool {
        self.unmatched.is_empty() && self.errors.is_empty()
    }
}

/// 名と姓から照合キーを組み立てる
pub fn build_key(name: &str, surname: &str) -> String {
    format!("{}-{}", name.trim(), surname.trim())
}

/// 1件の氏名キーを解決する。完全一致が優先、次にあいまい一致
pub fn resolve_row(key: &str, config: &Config, candidates: &[Candidate]) -> Result<MatchResult> {
    if let Some(path) = matcher::exact_match(key, &config.image_dir, &config.extensions)? {
        return Ok(MatchResult::Exact(path));
    }

    if let Some(candidate) = matcher::fuzzy_match(key, candidates, config.threshold) {
        return Ok(MatchResult::Fuzzy {
            path: candidate.path.clone(),
            matched_base: candidate.base_name.clone(),
        });
    }

    Ok(MatchResult::NoMatch)
}

/// 表の全行を照合し、`pic_path` 列に結果を書き込む。
///
/// `pic_path` 列は既存の値があっても毎回作り直す。
/// 名・姓の列が見つからない行は空文字として扱う。
pub fn resolve_table(table: &mut Table, config: &Config, candidates: &[Candidate]) -> RunSummary {
    let name_col = table.column_index(&config.name_column);
    let surname_col = table.column_index(&config.surname_column);
    if name_col.is_none() {
        warn!("名の列 '{}' が見つかりません", config.name_column);
    }
    if surname_col.is_none() {
        warn!("姓の列 '{}' が見つかりません", config.surname_column);
    }

    let output_col = table.reset_column(OUTPUT_COLUMN);

    let mut summary = RunSummary {
        total_rows: table.row_count(),
        ..Default::default()
    };

    for row in 0..table.row_count() {
        let name = name_col.and_then(|col| table.cell(row, col)).unwrap_or("");
        let surname = surname_col.and_then(|col| table.cell(row, col)).unwrap_or("");
        let key = build_key(name, surname);

        match resolve_row(&key, config, candidates) {
            Ok(MatchResult::Exact(path)) => {
                debug!("完全一致: {} -> {}", key, path.display());
                table.set_cell(row, output_col, path.to_string_lossy().to_string());
                summary.exact_matches += 1;
            }
            Ok(MatchResult::Fuzzy { path, matched_base }) => {
                warn!("あいまい一致を使用: '{}' -> '{}'", key, matched_base);
                table.set_cell(row, output_col, path.to_string_lossy().to_string());
                summary.fuzzy_matches += 1;
            }
            Ok(MatchResult::NoMatch) => {
                error!("一致する写真がありません: {}", key);
                summary.unmatched.push(key);
            }
            Err(e) => {
                error!("行{}の処理に失敗: {}", row, e);
                summary.errors.push(RowError {
                    row,
                    message: e.to_string(),
                });
            }
        }
    }

    summary
}
