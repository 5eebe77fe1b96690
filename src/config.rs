use crate::error::{PhotoMatchError, Result};
use std::path::PathBuf;

pub const ENV_INPUT: &str = "PHOTO_MATCH_INPUT";
pub const ENV_OUTPUT: &str = "PHOTO_MATCH_OUTPUT";
pub const ENV_IMAGE_DIR: &str = "PHOTO_MATCH_IMAGE_DIR";
pub const ENV_EXTENSIONS: &str = "PHOTO_MATCH_EXTENSIONS";
pub const ENV_THRESHOLD: &str = "PHOTO_MATCH_THRESHOLD";
pub const ENV_NAME_COLUMN: &str = "PHOTO_MATCH_NAME_COLUMN";
pub const ENV_SURNAME_COLUMN: &str = "PHOTO_MATCH_SURNAME_COLUMN";

pub const DEFAULT_EXTENSIONS: &str = "jpg,jpeg,png,gif";
pub const DEFAULT_THRESHOLD: f64 = 0.7;
pub const DEFAULT_NAME_COLUMN: &str = "名";
pub const DEFAULT_SURNAME_COLUMN: &str = "姓";

/// 環境変数キーとデフォルト値の一覧（`config --show` 用）
pub const ENV_KEYS: &[(&str, Option<&str>)] = &[
    (ENV_INPUT, None),
    (ENV_OUTPUT, None),
    (ENV_IMAGE_DIR, None),
    (ENV_EXTENSIONS, Some(DEFAULT_EXTENSIONS)),
    (ENV_THRESHOLD, Some("0.7")),
    (ENV_NAME_COLUMN, Some(DEFAULT_NAME_COLUMN)),
    (ENV_SURNAME_COLUMN, Some(DEFAULT_SURNAME_COLUMN)),
];

#[derive(Debug, Clone)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    pub image_dir: PathBuf,
    pub extensions: Vec<String>,
    pub threshold: f64,
    pub name_column: String,
    pub surname_column: String,
}

/// CLIフラグ由来の上書き値。Noneの項目は環境変数にフォールバックする
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub image_dir: Option<PathBuf>,
    pub extensions: Option<String>,
    pub threshold: Option<f64>,
    pub name_column: Option<String>,
    pub surname_column: Option<String>,
}

impl Config {
    /// CLI上書き値と環境変数から設定を組み立てる。
    /// 環境変数には起動時に `.env` から取り込まれた値も含まれる
    pub fn resolve(overrides: &Overrides) -> Result<Self> {
        Self::resolve_with(overrides, |key| std::env::var(key).ok())
    }

    /// 環境変数の参照を差し替え可能にした解決処理（テスト用に分離）
    fn resolve_with(
        overrides: &Overrides,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let input = overrides
            .input
            .clone()
            .or_else(|| env(ENV_INPUT).map(PathBuf::from))
            .ok_or_else(|| missing(ENV_INPUT))?;
        let output = overrides
            .output
            .clone()
            .or_else(|| env(ENV_OUTPUT).map(PathBuf::from))
            .ok_or_else(|| missing(ENV_OUTPUT))?;
        let image_dir = overrides
            .image_dir
            .clone()
            .or_else(|| env(ENV_IMAGE_DIR).map(PathBuf::from))
            .ok_or_else(|| missing(ENV_IMAGE_DIR))?;

        let raw_extensions = overrides
            .extensions
            .clone()
            .or_else(|| env(ENV_EXTENSIONS))
            .unwrap_or_else(|| DEFAULT_EXTENSIONS.to_string());
        let extensions = parse_extensions(&raw_extensions)?;

        let threshold = match overrides.threshold {
            Some(value) => value,
            None => match env(ENV_THRESHOLD) {
                Some(raw) => raw.trim().parse::<f64>().map_err(|_| {
                    PhotoMatchError::Config(format!(
                        "{} は数値で指定してください: {}",
                        ENV_THRESHOLD, raw
                    ))
                })?,
                None => DEFAULT_THRESHOLD,
            },
        };
        if !(0.0..=1.0).contains(&threshold) {
            return Err(PhotoMatchError::Config(format!(
                "しきい値は0.0〜1.0の範囲で指定してください: {}",
                threshold
            )));
        }

        let name_column = overrides
            .name_column
            .clone()
            .or_else(|| env(ENV_NAME_COLUMN))
            .unwrap_or_else(|| DEFAULT_NAME_COLUMN.to_string());
        let surname_column = overrides
            .surname_column
            .clone()
            .or_else(|| env(ENV_SURNAME_COLUMN))
            .unwrap_or_else(|| DEFAULT_SURNAME_COLUMN.to_string());

        Ok(Self {
            input,
            output,
            image_dir,
            extensions,
            threshold,
            name_column,
            surname_column,
        })
    }
}

/// カンマ区切りの拡張子リストを分解する。前後の空白は無視、空要素は除去
pub fn parse_extensions(raw: &str) -> Result<Vec<String>> {
    let extensions: Vec<String> = raw
        .split(',')
        .map(|ext| ext.trim().to_string())
        .filter(|ext| !ext.is_empty())
        .collect();

    if extensions.is_empty() {
        return Err(PhotoMatchError::Config(format!(
            "拡張子リストが空です: {:?}",
            raw
        )));
    }

    Ok(extensions)
}

fn missing(key: &str) -> PhotoMatchError {
    PhotoMatchError::Config(format!("{} が設定されていません", key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn resolve_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let map = env_map(pairs);
        Config::resolve_with(&Overrides::default(), |key| map.get(key).cloned())
    }

    #[test]
    fn test_resolve_with_defaults() {
        let config = resolve_from(&[
            (ENV_INPUT, "input.xlsx"),
            (ENV_OUTPUT, "output.xlsx"),
            (ENV_IMAGE_DIR, "images"),
        ])
        .unwrap();

        assert_eq!(config.input, PathBuf::from("input.xlsx"));
        assert_eq!(config.extensions, vec!["jpg", "jpeg", "png", "gif"]);
        assert_eq!(config.threshold, DEFAULT_THRESHOLD);
        assert_eq!(config.name_column, DEFAULT_NAME_COLUMN);
        assert_eq!(config.surname_column, DEFAULT_SURNAME_COLUMN);
    }

    #[test]
    fn test_resolve_missing_input_fails() {
        let result = resolve_from(&[(ENV_OUTPUT, "o.csv"), (ENV_IMAGE_DIR, "images")]);
        let err = result.unwrap_err();
        assert!(
            err.to_string().contains(ENV_INPUT),
            "エラーメッセージに環境変数名が含まれること: {}",
            err
        );
    }

    #[test]
    fn test_resolve_custom_threshold_and_extensions() {
        let config = resolve_from(&[
            (ENV_INPUT, "i.csv"),
            (ENV_OUTPUT, "o.csv"),
            (ENV_IMAGE_DIR, "images"),
            (ENV_THRESHOLD, "0.85"),
            (ENV_EXTENSIONS, " jpg , PNG ,webp "),
        ])
        .unwrap();

        assert_eq!(config.threshold, 0.85);
        assert_eq!(config.extensions, vec!["jpg", "PNG", "webp"]);
    }

    #[test]
    fn test_resolve_invalid_threshold_fails() {
        let result = resolve_from(&[
            (ENV_INPUT, "i.csv"),
            (ENV_OUTPUT, "o.csv"),
            (ENV_IMAGE_DIR, "images"),
            (ENV_THRESHOLD, "高め"),
        ]);
        assert!(result.is_err(), "数値でないしきい値はエラーになること");
    }

    #[test]
    fn test_resolve_threshold_out_of_range_fails() {
        let result = resolve_from(&[
            (ENV_INPUT, "i.csv"),
            (ENV_OUTPUT, "o.csv"),
            (ENV_IMAGE_DIR, "images"),
            (ENV_THRESHOLD, "1.5"),
        ]);
        assert!(result.is_err(), "範囲外のしきい値はエラーになること");
    }

    #[test]
    fn test_overrides_take_precedence() {
        let map = env_map(&[
            (ENV_INPUT, "env.csv"),
            (ENV_OUTPUT, "env_out.csv"),
            (ENV_IMAGE_DIR, "env_images"),
            (ENV_THRESHOLD, "0.7"),
        ]);
        let overrides = Overrides {
            input: Some(PathBuf::from("cli.csv")),
            threshold: Some(0.9),
            ..Default::default()
        };
        let config = Config::resolve_with(&overrides, |key| map.get(key).cloned()).unwrap();

        assert_eq!(config.input, PathBuf::from("cli.csv"));
        assert_eq!(config.output, PathBuf::from("env_out.csv"));
        assert_eq!(config.threshold, 0.9);
    }

    #[test]
    fn test_parse_extensions_empty_fails() {
        assert!(parse_extensions("").is_err());
        assert!(parse_extensions(" , , ").is_err());
    }

    #[test]
    fn test_parse_extensions_keeps_order() {
        let extensions = parse_extensions("png,jpg").unwrap();
        assert_eq!(extensions, vec!["png", "jpg"]);
    }
}
