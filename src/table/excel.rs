//! Excel形式の読み書き
//!
//! `.xls` 拡張子のファイルもxlsxデータとして読み書きする。
//! レガシーなバイナリxls形式には対応しない。

use crate::error::Result;
use crate::table::Table;
use calamine::{open_workbook, Data, Reader, Xlsx};
use rust_xlsxwriter::Workbook;
use std::path::Path;

/// 先頭シートを読み込む。1行目をヘッダーとして扱う
pub fn read_excel(path: &Path) -> Result<Table> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;

    let Some(range) = workbook.worksheet_range_at(0) else {
        return Ok(Table::default());
    };
    let range = range?;

    let mut rows = range.rows();
    let headers = match rows.next() {
        Some(header_row) => header_row.iter().map(cell_to_string).collect(),
        None => return Ok(Table::default()),
    };

    let mut table = Table::new(headers);
    for row in rows {
        table.push_row(row.iter().map(cell_to_string).collect());
    }

    Ok(table)
}

/// 表を単一シートのxlsxとして書き出す。全セルを文字列で書く
pub fn write_excel(table: &Table, path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, header) in table.headers.iter().enumerate() {
        worksheet.write_string(0, col as u16, header)?;
    }

    for (r, row) in table.rows.iter().enumerate() {
        for (c, value) in row.iter().enumerate() {
            worksheet.write_string(r as u32 + 1, c as u16, value)?;
        }
    }

    workbook.save(path)?;

    Ok(())
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt.as_f64().to_string(),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Error(e) => e.to_string(),
    }
}
