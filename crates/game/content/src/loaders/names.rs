//! Star-system name list loader.

use std::path::Path;

use game_core::util::parse::parsed_values;

use crate::loaders::{LoadResult, read_file};

/// Loader for system name lists.
///
/// One system per line; only the first comma-separated field is used.
/// Blank lines and lines starting with `/`, `\`, `#` or `*` are skipped.
pub struct SystemNameLoader;

impl SystemNameLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<String>> {
        let content = read_file(path)?;
        Ok(Self::parse(&content))
    }

    pub fn parse(content: &str) -> Vec<String> {
        content
            .lines()
            .map(|line| line.trim_start_matches('\u{feff}'))
            .filter_map(|line| parsed_values(line, ',').into_iter().next())
            .filter(|name| !name.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_comments_and_extra_fields() {
        let names = SystemNameLoader::parse(
            "\u{feff}# core worlds\nSol, yellow\n\n// outer rim\nVega\n* reserved\n  Rigel  ,blue,giant\n",
        );
        assert_eq!(names, ["Sol", "Vega", "Rigel"]);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = SystemNameLoader::load(&dir.path().join("absent.txt")).unwrap_err();
        assert!(err.to_string().contains("absent.txt"));
    }
}
