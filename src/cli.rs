use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "photo-match")]
#[command(about = "名簿と写真ファイルの照合ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 名簿を読み込み、写真と照合して書き出す
    Run {
        /// 入力名簿ファイル (.csv/.xlsx/.xls)（省略時は環境変数 PHOTO_MATCH_INPUT）
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// 出力ファイル（省略時は環境変数 PHOTO_MATCH_OUTPUT）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 写真ディレクトリ（省略時は環境変数 PHOTO_MATCH_IMAGE_DIR）
        #[arg(short = 'd', long)]
        image_dir: Option<PathBuf>,

        /// 対象拡張子（カンマ区切り、デフォルト: jpg,jpeg,png,gif）
        #[arg(short, long)]
        extensions: Option<String>,

        /// あいまい一致のしきい値 (0.0-1.0、デフォルト0.7)
        #[arg(short, long)]
        threshold: Option<f64>,

        /// 名の列名（デフォルト: 名）
        #[arg(long)]
        name_column: Option<String>,

        /// 姓の列名（デフォルト: 姓）
        #[arg(long)]
        surname_column: Option<String>,

        /// 集計レポートをJSONで保存
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// 写真ディレクトリをスキャンして候補一覧を表示
    Scan {
        /// 写真ディレクトリ（省略時は環境変数 PHOTO_MATCH_IMAGE_DIR）
        #[arg(short = 'd', long)]
        image_dir: Option<PathBuf>,

        /// 対象拡張子（カンマ区切り）
        #[arg(short, long)]
        extensions: Option<String>,
    },

    /// 設定を表示
    Config {
        /// 現在の設定と環境変数の状態を表示
        #[arg(long)]
        show: bool,
    },
}
