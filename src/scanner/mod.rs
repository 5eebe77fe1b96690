use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 照合対象となる写真ファイル1件
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub path: PathBuf,
    /// 拡張子を除いたファイル名。氏名キーとの比較に使う
    pub base_name: String,
}

impl Candidate {
    pub fn new(path: PathBuf) -> Self {
        let base_name = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();

        Self { path, base_name }
    }
}

/// 写真ディレクトリ直下から対象拡張子のファイルを集める。
///
/// 戻り値は拡張子リストの順にグループ化し、同一拡張子内はファイル名順に並べる。
/// あいまい一致は先頭から走査するため、この並びがそのまま優先順位になる。
pub fn collect_candidates(directory: &Path, extensions: &[String]) -> Vec<Candidate> {
    let mut files = Vec::new();

    // 存在しないディレクトリはエントリなしとして扱う（エラーにしない）
    for entry in WalkDir::new(directory)
        .max_depth(1)  // 直下のみ（再帰しない）
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if path.is_file() {
            files.push(path.to_path_buf());
        }
    }

    // ファイル名でソート
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    let mut candidates = Vec::new();
    for target in extensions {
        for path in &files {
            let matched = path
                .extension()
                .map(|ext| ext.to_string_lossy() == target.as_str())
                .unwrap_or(false);

            if matched {
                candidates.push(Candidate::new(path.clone()));
            }
        }
    }

    candidates
}
