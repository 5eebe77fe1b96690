//! Photo Match
//!
//! 名簿（CSV/Excel）の氏名と写真ファイル名を照合し、
//! 一致した写真のパスを名簿に書き戻すツール

pub mod cli;
pub mod config;
pub mod error;
pub mod matcher;
pub mod resolver;
pub mod scanner;
pub mod table;

pub use config::{Config, Overrides};
pub use error::{PhotoMatchError, Result};
pub use matcher::types::MatchResult;
pub use matcher::{exact_match, fuzzy_match, similarity};
pub use resolver::{build_key, resolve_row, resolve_table, RowError, RunSummary};
pub use scanner::{collect_candidates, Candidate};
pub use table::{read_table, write_table, Table, TableFormat};
