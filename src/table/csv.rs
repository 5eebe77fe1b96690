//! CSV形式の読み書き

use crate::error::Result;
use crate::table::Table;
use csv::{ReaderBuilder, WriterBuilder};
use std::path::Path;

/// CSVを読み込む。1行目をヘッダーとして扱う
pub fn read_csv(path: &Path) -> Result<Table> {
    let mut reader = ReaderBuilder::new().from_path(path)?;

    let headers = reader.headers()?.iter().map(|h| h.to_string()).collect();
    let mut table = Table::new(headers);

    for record in reader.records() {
        let record = record?;
        table.push_row(record.iter().map(|v| v.to_string()).collect());
    }

    Ok(table)
}

/// 表をCSVとして書き出す
pub fn write_csv(table: &Table, path: &Path) -> Result<()> {
    let mut writer = WriterBuilder::new().from_path(path)?;

    writer.write_record(&table.headers)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }
    writer.flush()?;

    Ok(())
}
