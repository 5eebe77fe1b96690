//! 氏名キーと写真ファイル名の照合ロジック
//!
//! 2段階で照合する:
//! 1. 完全一致: `キー.拡張子` のパターンでディレクトリを直接検索
//! 2. あいまい一致: 正規化Levenshtein類似度がしきい値以上の候補から最良を選ぶ

pub mod types;

use crate::error::Result;
use crate::scanner::Candidate;
use glob::glob;
use std::path::{Path, PathBuf};
use strsim::normalized_levenshtein;

/// 2つの文字列の類似度（0.0〜1.0）。大文字小文字は区別する
pub fn similarity(a: &str, b: &str) -> f64 {
    normalized_levenshtein(a, b)
}

/// 完全一致検索。拡張子リストの順に `キー.拡張子` を探し、最初に見つかったパスを返す。
///
/// キーに含まれる `*` `?` `[` はglobパターンとして解釈される（エスケープしない）。
/// `[` が閉じていない等、パターンとして不正なキーはエラーになる。
pub fn exact_match(key: &str, directory: &Path, extensions: &[String]) -> Result<Option<PathBuf>> {
    for ext in extensions {
        let pattern = directory.join(format!("{}.{}", key, ext));

        for entry in glob(&pattern.to_string_lossy())? {
            if let Ok(path) = entry {
                return Ok(Some(path));
            }
        }
    }

    Ok(None)
}

/// あいまい一致検索。類似度がしきい値以上の候補のうち最良のものを返す。
///
/// 同率の場合は候補リストで先に現れたものを採用する。選ばれたベース名で
/// 候補リストを先頭から引き直すため、同名異拡張子は拡張子リスト順で決まる。
pub fn fuzzy_match<'a>(
    key: &str,
    candidates: &'a [Candidate],
    threshold: f64,
) -> Option<&'a Candidate> {
    let mut best: Option<(&str, f64)> = None;

    for candidate in candidates {
        let score = similarity(key, &candidate.base_name);
        if score < threshold {
            continue;
        }

        let replace = match best {
            Some((_, best_score)) => score > best_score,
            None => true,
        };
        if replace {
            best = Some((candidate.base_name.as_str(), score));
        }
    }

    let (matched_base, _) = best?;
    candidates.iter().find(|c| c.base_name == matched_base)
}
