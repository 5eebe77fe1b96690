use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhotoMatchError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("未対応のファイル形式: {0}")]
    UnsupportedFormat(String),

    #[error("検索パターンが不正です: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("CSV処理エラー: {0}")]
    Csv(#[from] csv::Error),

    #[error("Excel読み込みエラー: {0}")]
    ExcelRead(#[from] calamine::XlsxError),

    #[error("Excel書き込みエラー: {0}")]
    ExcelWrite(#[from] rust_xlsxwriter::XlsxError),

    #[error("JSON出力エラー: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PhotoMatchError>;
