//! 表データ（名簿）の読み書き

pub mod csv;
pub mod excel;

use crate::error::{PhotoMatchError, Result};
use std::path::Path;

/// 対応する表形式。拡張子から決まる
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Csv,
    Excel,
}

impl TableFormat {
    /// 拡張子（大文字小文字は無視）から形式を判定する
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "csv" => Ok(TableFormat::Csv),
            "xlsx" | "xls" => Ok(TableFormat::Excel),
            _ => Err(PhotoMatchError::UnsupportedFormat(
                path.display().to_string(),
            )),
        }
    }
}

/// ヘッダー付きの矩形な表。セルはすべて文字列として扱う
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// 行を追加する。列数が合わない行はヘッダーの列数に揃える
    pub fn push_row(&mut self, mut row: Vec<String>) {
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row).and_then(|r| r.get(col)).map(|s| s.as_str())
    }

    /// セルを書き換える。範囲外の指定は無視する
    pub fn set_cell(&mut self, row: usize, col: usize, value: String) {
        if let Some(cell) = self.rows.get_mut(row).and_then(|r| r.get_mut(col)) {
            *cell = value;
        }
    }

    /// 指定名の列を空の状態で用意し、その列番号を返す。
    /// 既存の列があれば全行クリアし、なければ末尾に追加する
    pub fn reset_column(&mut self, name: &str) -> usize {
        match self.column_index(name) {
            Some(col) => {
                for row in &mut self.rows {
                    if let Some(cell) = row.get_mut(col) {
                        cell.clear();
                    }
                }
                col
            }
            None => {
                self.headers.push(name.to_string());
                for row in &mut self.rows {
                    row.push(String::new());
                }
                self.headers.len() - 1
            }
        }
    }
}

/// 拡張子に応じた形式で表を読み込む
pub fn read_table(path: &Path) -> Result<Table> {
    match TableFormat::from_path(path)? {
        TableFormat::Csv => csv::read_csv(path),
        TableFormat::Excel => excel::read_excel(path),
    }
}

/// 拡張子に応じた形式で表を書き出す
pub fn write_table(table: &Table, path: &Path) -> Result<()> {
    match TableFormat::from_path(path)? {
        TableFormat::Csv => csv::write_csv(table, path),
        TableFormat::Excel => excel::write_excel(table, path),
    }
}
