use clap::Parser;
use photo_match_rust::{cli, config, error, resolver, scanner, table};
use cli::{Cli, Commands};
use config::{Config, Overrides};
use error::Result;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // .env があれば環境変数に取り込む（既存の環境変数が優先、無ければ無視）
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Run {
            input,
            output,
            image_dir,
            extensions,
            threshold,
            name_column,
            surname_column,
            report,
        } => {
            println!("🚀 photo-match - 名簿写真照合\n");

            let overrides = Overrides {
                input,
                output,
                image_dir,
                extensions,
                threshold,
                name_column,
                surname_column,
            };
            let config = Config::resolve(&overrides)?;

            // 1. 名簿読み込み
            println!("[1/4] 名簿を読み込み中...");
            let mut table = table::read_table(&config.input)?;
            println!("✔ {}行を読み込み: {}\n", table.row_count(), config.input.display());

            // 2. 写真スキャン
            println!("[2/4] 写真をスキャン中...");
            let candidates = scanner::collect_candidates(&config.image_dir, &config.extensions);
            println!("✔ {}件の候補を検出\n", candidates.len());

            // 3. 照合
            println!("[3/4] 照合中... (しきい値: {})", config.threshold);
            let summary = resolver::resolve_table(&mut table, &config, &candidates);
            println!(
                "✔ 照合完了（完全一致{} / あいまい一致{} / 不一致{} / エラー{}）\n",
                summary.exact_matches,
                summary.fuzzy_matches,
                summary.unmatched.len(),
                summary.errors.len()
            );

            // 4. 結果保存
            println!("[4/4] 結果を保存中...");
            table::write_table(&table, &config.output)?;
            println!("✔ 結果を保存: {}", config.output.display());

            if let Some(report_path) = report {
                let json = serde_json::to_string_pretty(&summary)?;
                std::fs::write(&report_path, json)?;
                println!("✔ レポートを保存: {}", report_path.display());
            }

            if summary.all_matched() {
                info!("全行の照合が完了しました");
            } else {
                if !summary.unmatched.is_empty() {
                    warn!("一致しなかった氏名:");
                    for key in &summary.unmatched {
                        warn!("  - {}", key);
                    }
                }
                if !summary.errors.is_empty() {
                    warn!("{}行の処理でエラーが発生しました", summary.errors.len());
                }
            }

            println!("\n✅ 完了");
        }

        Commands::Scan { image_dir, extensions } => {
            println!("📷 photo-match - 写真スキャン\n");

            let image_dir = image_dir
                .or_else(|| std::env::var(config::ENV_IMAGE_DIR).ok().map(PathBuf::from))
                .ok_or_else(|| {
                    error::PhotoMatchError::Config(format!(
                        "{} が設定されていません",
                        config::ENV_IMAGE_DIR
                    ))
                })?;
            let raw_extensions = extensions
                .or_else(|| std::env::var(config::ENV_EXTENSIONS).ok())
                .unwrap_or_else(|| config::DEFAULT_EXTENSIONS.to_string());
            let extensions = config::parse_extensions(&raw_extensions)?;

            let candidates = scanner::collect_candidates(&image_dir, &extensions);
            for candidate in &candidates {
                println!("{}", candidate.path.display());
            }
            println!("\n✔ {}件の候補を検出: {}", candidates.len(), image_dir.display());
        }

        Commands::Config { show } => {
            if show {
                println!("設定:");
                for (key, default) in config::ENV_KEYS {
                    match std::env::var(key) {
                        Ok(value) => println!("  {}: {}", key, value),
                        Err(_) => match default {
                            Some(value) => println!("  {}: {} (デフォルト)", key, value),
                            None => println!("  {}: 未設定", key),
                        },
                    }
                }
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
