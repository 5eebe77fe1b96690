use std::path::{Path, PathBuf};

/// 1行分の照合結果
#[derive(Debug, Clone, PartialEq)]
pub enum MatchResult {
    /// 氏名キーとファイル名が完全一致した
    Exact(PathBuf),
    /// あいまい一致で採用した。`matched_base` は採用したファイルのベース名
    Fuzzy { path: PathBuf, matched_base: String },
    /// 一致する写真がなかった
    NoMatch,
}

impl MatchResult {
    /// 一致した写真のパス。不一致ならNone
    pub fn path(&self) -> Option<&Path> {
        match self {
            MatchResult::Exact(path) => Some(path),
            MatchResult::Fuzzy { path, .. } => Some(path),
            MatchResult::NoMatch => None,
        }
    }

    pub fn is_match(&self) -> bool {
        self.path().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_returns_matched_location() {
        let exact = MatchResult::Exact(PathBuf::from("photos/Ali-Rezaei.jpg"));
        assert_eq!(exact.path(), Some(Path::new("photos/Ali-Rezaei.jpg")));

        let fuzzy = MatchResult::Fuzzy {
            path: PathBuf::from("photos/Ali-Rezaei.jpg"),
            matched_base: "Ali-Rezaei".to_string(),
        };
        assert_eq!(fuzzy.path(), Some(Path::new("photos/Ali-Rezaei.jpg")));
    }

    #[test]
    fn test_no_match_has_no_path() {
        assert_eq!(MatchResult::NoMatch.path(), None);
        assert!(!MatchResult::NoMatch.is_match());
        assert!(MatchResult::Exact(PathBuf::from("a.jpg")).is_match());
    }
}
