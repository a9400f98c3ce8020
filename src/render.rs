// 🖨️ Text Rendering - Plain-text summary of a NameReading
// Rich card layouts belong to the chat front end; this is the terminal version.

use crate::engine::NameReading;
use std::fmt;

/// Shown wherever a birth year or Nayin is unavailable
pub const PLACEHOLDER: &str = "--";

/// Usage hint for input with no extractable name
pub const USAGE_HINT: &str = "請輸入姓名，可加出生年（民國或西元），例如：李大同1990 或 歐陽修 79";

/// Multi-line summary:
///
/// ```text
/// 李大同（李｜大同）
/// 李 7  大 3  同 6
/// 天格 8 金  人格 10 水  地格 9 水  外格 7 金
/// 總格 16 土
/// 出生年 1990（庚午）  納音 路旁土
/// ```
pub fn render_text(reading: &NameReading) -> String {
    let mut lines = Vec::new();

    lines.push(format!(
        "{}（{}｜{}）",
        reading.full_name,
        reading.surname,
        if reading.given_name.is_empty() { PLACEHOLDER } else { reading.given_name.as_str() }
    ));

    lines.push(
        reading
            .characters
            .iter()
            .map(|c| {
                if c.known {
                    format!("{} {}", c.glyph, c.strokes)
                } else {
                    format!("{} {}?", c.glyph, c.strokes)
                }
            })
            .collect::<Vec<_>>()
            .join("  "),
    );

    let g = &reading.grids;
    let e = &reading.elements;
    lines.push(format!(
        "天格 {} {}  人格 {} {}  地格 {} {}  外格 {} {}",
        g.heaven, e.heaven, g.person, e.person, g.earth, e.earth, g.outer, e.outer
    ));
    lines.push(format!("總格 {} {}", g.total, e.total));

    // An unresolvable token is echoed as typed so the user sees what was read
    let year = match (reading.birth_year, &reading.sexagenary_year, &reading.birth_year_raw_token) {
        (Some(y), Some(cycle), _) => format!("{}（{}）", y, cycle),
        (Some(y), None, _) => y.to_string(),
        (None, _, Some(raw)) => raw.clone(),
        (None, _, None) => PLACEHOLDER.to_string(),
    };
    lines.push(format!(
        "出生年 {}  納音 {}",
        year,
        reading.nayin.as_deref().unwrap_or(PLACEHOLDER)
    ));

    lines.join("\n")
}

impl fmt::Display for NameReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_text(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::NumerologyEngine;
    use crate::strokes::StrokeTable;
    use crate::surname::SurnameRegistry;

    fn engine() -> NumerologyEngine {
        let table = StrokeTable::from_pairs([('李', 7), ('大', 3), ('同', 6)]);
        NumerologyEngine::new(table, SurnameRegistry::new())
    }

    #[test]
    fn test_render_full_reading() {
        let reading = engine().evaluate("李大同1990", 2024).unwrap();
        let text = render_text(&reading);

        assert_eq!(
            text,
            "李大同（李｜大同）\n\
             李 7  大 3  同 6\n\
             天格 8 金  人格 10 水  地格 9 水  外格 7 金\n\
             總格 16 土\n\
             出生年 1990（庚午）  納音 路旁土"
        );
    }

    #[test]
    fn test_render_placeholders() {
        let reading = engine().evaluate("李", 2024).unwrap();
        let text = reading.to_string();

        assert!(text.starts_with("李（李｜--）"));
        assert!(text.ends_with("出生年 --  納音 --"));
    }

    #[test]
    fn test_render_marks_unknown_glyphs() {
        let reading = engine().evaluate("李龘", 2024).unwrap();

        assert!(render_text(&reading).contains("龘 10?"));
    }

    #[test]
    fn test_render_year_without_nayin() {
        let reading = engine().evaluate("李大同1900", 2024).unwrap();

        assert!(render_text(&reading).ends_with("出生年 1900  納音 --"));
    }

    #[test]
    fn test_render_unresolved_year_token() {
        let reading = engine().evaluate("李大同9999", 2024).unwrap();

        assert_eq!(reading.birth_year, None);
        assert!(render_text(&reading).ends_with("出生年 9999  納音 --"));
    }
}
