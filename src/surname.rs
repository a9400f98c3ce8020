// 👪 Surname Segmenter - Where does the family name end?
// Heuristic, not a grammar: a curated set of compound surnames plus length rules.
//
// Rules:
// - First two glyphs are a known compound surname AND name has ≥ 3 glyphs → 2-glyph surname
// - Name is exactly 4 glyphs → 2-glyph surname (e.g. married 張簡 style names)
// - Otherwise → 1-glyph surname
//
// Compound surnames missing from the set are treated as single-glyph surnames.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Compound surnames recognized out of the box (Traditional and Simplified forms)
pub const DEFAULT_COMPOUND_SURNAMES: &[&str] = &[
    "歐陽", "司馬", "諸葛", "上官", "東方", "皇甫", "尉遲", "公孫", "慕容", "長孫",
    "宇文", "司徒", "司空", "夏侯", "令狐", "軒轅", "端木", "西門", "南宮", "獨孤",
    "鍾離", "呼延", "澹臺", "澹台", "太史", "聞人", "申屠", "百里", "東郭", "拓跋",
    "張簡", "范姜", "張廖", "第五", "万俟", "左丘", "公冶", "赫連", "宗政", "濮陽",
    "欧阳", "司马", "诸葛", "东方", "尉迟", "公孙", "长孙", "轩辕", "西门", "南宫",
    "独孤", "钟离", "闻人", "东郭", "张简", "张廖",
];

// ============================================================================
// NAME SEGMENTS
// ============================================================================

/// NameSegments - Surname / given-name split of a full name
///
/// `surname` is always a 1–2 glyph prefix of the full name; `given` is the rest
/// and may be empty for a one-glyph input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameSegments {
    pub surname: String,
    pub given: String,
}

impl NameSegments {
    pub fn surname_len(&self) -> usize {
        self.surname.chars().count()
    }

    pub fn given_len(&self) -> usize {
        self.given.chars().count()
    }

    pub fn full_name(&self) -> String {
        format!("{}{}", self.surname, self.given)
    }
}

// ============================================================================
// SURNAME REGISTRY
// ============================================================================

/// Registry of recognized compound surnames
///
/// Built once at startup and shared read-only.
#[derive(Debug, Clone)]
pub struct SurnameRegistry {
    compounds: HashSet<String>,
}

impl SurnameRegistry {
    /// Registry with the built-in compound surname set
    pub fn new() -> Self {
        Self::from_list(DEFAULT_COMPOUND_SURNAMES.iter().copied())
    }

    /// Registry that knows no compound surnames (length rule only)
    pub fn empty() -> Self {
        SurnameRegistry {
            compounds: HashSet::new(),
        }
    }

    /// Build from any list; entries that are not exactly two glyphs are skipped
    pub fn from_list<I, S>(surnames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let compounds = surnames
            .into_iter()
            .filter_map(|s| {
                let s = s.as_ref().trim();
                if s.chars().count() == 2 {
                    Some(s.to_string())
                } else {
                    warn!(entry = s, "skipping compound surname: not two glyphs");
                    None
                }
            })
            .collect();

        SurnameRegistry { compounds }
    }

    /// Load from a JSON array of strings: `["歐陽", "司馬"]`
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read surname list: {:?}", path.as_ref()))?;

        let list: Vec<String> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse surname list: {:?}", path.as_ref()))?;

        let registry = Self::from_list(list);
        info!(path = %path.as_ref().display(), entries = registry.len(), "surname list loaded");
        Ok(registry)
    }

    /// Load from file, falling back to the built-in set on failure
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::from_file(path) {
            Ok(registry) => registry,
            Err(e) => {
                warn!(error = %format!("{:#}", e), "surname list unavailable, using built-in set");
                Self::new()
            }
        }
    }

    /// Add a compound surname at bootstrap time
    pub fn add(&mut self, surname: &str) -> bool {
        if surname.chars().count() != 2 {
            return false;
        }
        self.compounds.insert(surname.to_string())
    }

    pub fn is_compound(&self, surname: &str) -> bool {
        self.compounds.contains(surname)
    }

    pub fn len(&self) -> usize {
        self.compounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.compounds.is_empty()
    }

    /// Split a full name into surname and given name
    ///
    /// Returns None only for an empty name.
    pub fn segment(&self, full_name: &str) -> Option<NameSegments> {
        let glyphs: Vec<char> = full_name.chars().collect();
        if glyphs.is_empty() {
            return None;
        }

        let surname_len = if self.takes_double_surname(&glyphs) { 2 } else { 1 };

        Some(NameSegments {
            surname: glyphs[..surname_len].iter().collect(),
            given: glyphs[surname_len..].iter().collect(),
        })
    }

    fn takes_double_surname(&self, glyphs: &[char]) -> bool {
        if glyphs.len() == 4 {
            return true;
        }

        if glyphs.len() >= 3 {
            let prefix: String = glyphs[..2].iter().collect();
            return self.is_compound(&prefix);
        }

        false
    }
}

impl Default for SurnameRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::io::Write;

    #[test]
    fn test_single_surname() {
        let registry = SurnameRegistry::new();
        let seg = registry.segment("李大同").unwrap();

        assert_eq!(seg.surname, "李");
        assert_eq!(seg.given, "大同");
    }

    #[test]
    fn test_known_compound_surname() {
        let registry = SurnameRegistry::new();
        let seg = registry.segment("歐陽修").unwrap();

        assert_eq!(seg.surname, "歐陽");
        assert_eq!(seg.given, "修");
        assert_eq!(seg.surname_len(), 2);
        assert_eq!(seg.given_len(), 1);
    }

    #[test]
    fn test_compound_needs_three_glyphs() {
        // "歐陽" alone is read as surname 歐 + given 陽
        let registry = SurnameRegistry::new();
        let seg = registry.segment("歐陽").unwrap();

        assert_eq!(seg.surname, "歐");
        assert_eq!(seg.given, "陽");
    }

    #[test]
    fn test_four_glyph_names_take_two_glyph_surname() {
        let registry = SurnameRegistry::empty();
        let seg = registry.segment("王陳美玲").unwrap();

        assert_eq!(seg.surname, "王陳");
        assert_eq!(seg.given, "美玲");
    }

    #[test]
    fn test_unlisted_compound_is_single() {
        let registry = SurnameRegistry::empty();
        let seg = registry.segment("司馬光").unwrap();

        assert_eq!(seg.surname, "司");
        assert_eq!(seg.given, "馬光");
    }

    #[test]
    fn test_one_glyph_name_has_empty_given() {
        let registry = SurnameRegistry::new();
        let seg = registry.segment("李").unwrap();

        assert_eq!(seg.surname, "李");
        assert!(seg.given.is_empty());
    }

    #[test]
    fn test_empty_name() {
        assert!(SurnameRegistry::new().segment("").is_none());
    }

    #[test]
    fn test_from_list_skips_bad_entries() {
        let registry = SurnameRegistry::from_list(["歐陽", "李", "諸葛亮"]);

        assert_eq!(registry.len(), 1);
        assert!(registry.is_compound("歐陽"));
    }

    #[test]
    fn test_add_compound() {
        let mut registry = SurnameRegistry::empty();

        assert!(registry.add("第五"));
        assert!(!registry.add("第五"));
        assert!(!registry.add("第"));
        assert_eq!(registry.segment("第五倫").unwrap().surname, "第五");
        assert_eq!(registry.segment("第倫").unwrap().surname, "第");
    }

    #[test]
    fn test_load_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"["呼延", "司馬"]"#).unwrap();

        let registry = SurnameRegistry::from_file(file.path()).unwrap();

        assert_eq!(registry.len(), 2);
        assert!(!registry.is_compound("歐陽"));
    }

    #[test]
    fn test_load_or_default_falls_back() {
        let registry = SurnameRegistry::load_or_default("/definitely/not/here/surnames.json");

        assert!(registry.is_compound("歐陽"));
    }

    proptest! {
        #[test]
        fn prop_segments_rebuild_full_name(name in "[\u{4e00}-\u{9fa5}]{1,6}") {
            let seg = SurnameRegistry::new().segment(&name).unwrap();

            prop_assert_eq!(seg.full_name(), name.clone());
            prop_assert!(name.starts_with(&seg.surname));
            prop_assert!((1..=2).contains(&seg.surname_len()));
        }

        #[test]
        fn prop_without_compounds_surname_is_first_glyph(name in "[\u{4e00}-\u{9fa5}]{1,6}") {
            prop_assume!(name.chars().count() != 4);
            let seg = SurnameRegistry::empty().segment(&name).unwrap();
            let first: String = name.chars().take(1).collect();

            prop_assert_eq!(seg.surname, first);
        }
    }
}
