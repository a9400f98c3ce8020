// 🌳 Element Classifier - Five Elements (五行) by last digit
//
//   1,2 → 木   3,4 → 火   5,6 → 土   7,8 → 金   9,0 → 水

use crate::grid::GridSet;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    /// 木
    Wood,
    /// 火
    Fire,
    /// 土
    Earth,
    /// 金
    Metal,
    /// 水
    Water,
}

impl Element {
    /// Classify a grid value by its last decimal digit
    pub fn from_number(n: u32) -> Element {
        match n % 10 {
            1 | 2 => Element::Wood,
            3 | 4 => Element::Fire,
            5 | 6 => Element::Earth,
            7 | 8 => Element::Metal,
            _ => Element::Water,
        }
    }

    /// Parse one of 木/火/土/金/水
    pub fn from_glyph(glyph: char) -> Option<Element> {
        match glyph {
            '木' => Some(Element::Wood),
            '火' => Some(Element::Fire),
            '土' => Some(Element::Earth),
            '金' => Some(Element::Metal),
            '水' => Some(Element::Water),
            _ => None,
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Element::Wood => "木",
            Element::Fire => "火",
            Element::Earth => "土",
            Element::Metal => "金",
            Element::Water => "水",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

// Serialized as the glyph itself, which is what consumers render
impl Serialize for Element {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.glyph())
    }
}

impl<'de> Deserialize<'de> for Element {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        let mut chars = s.chars();
        let element = match (chars.next(), chars.next()) {
            (Some(glyph), None) => Element::from_glyph(glyph),
            _ => None,
        };
        element.ok_or_else(|| serde::de::Error::custom(format!("unknown element: {}", s)))
    }
}

/// Element of each grid in a GridSet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementSet {
    pub heaven: Element,
    pub person: Element,
    pub earth: Element,
    pub outer: Element,
    pub total: Element,
}

impl ElementSet {
    pub fn classify(grids: &GridSet) -> ElementSet {
        ElementSet {
            heaven: Element::from_number(grids.heaven),
            person: Element::from_number(grids.person),
            earth: Element::from_number(grids.earth),
            outer: Element::from_number(grids.outer),
            total: Element::from_number(grids.total),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_digit_table() {
        let expected = [
            (0, Element::Water),
            (1, Element::Wood),
            (2, Element::Wood),
            (3, Element::Fire),
            (4, Element::Fire),
            (5, Element::Earth),
            (6, Element::Earth),
            (7, Element::Metal),
            (8, Element::Metal),
            (9, Element::Water),
        ];

        for (n, element) in expected {
            assert_eq!(Element::from_number(n), element, "digit {}", n);
        }
    }

    #[test]
    fn test_multi_digit_values() {
        assert_eq!(Element::from_number(8), Element::Metal);
        assert_eq!(Element::from_number(32), Element::Wood);
        assert_eq!(Element::from_number(40), Element::Water);
        assert_eq!(Element::from_number(113), Element::Fire);
    }

    #[test]
    fn test_glyph_roundtrip() {
        for glyph in ['木', '火', '土', '金', '水'] {
            let element = Element::from_glyph(glyph).unwrap();
            assert_eq!(element.glyph(), glyph.to_string());
        }
        assert_eq!(Element::from_glyph('石'), None);
    }

    #[test]
    fn test_serializes_as_glyph() {
        let json = serde_json::to_string(&Element::Metal).unwrap();
        assert_eq!(json, "\"金\"");

        let back: Element = serde_json::from_str("\"水\"").unwrap();
        assert_eq!(back, Element::Water);
        assert!(serde_json::from_str::<Element>("\"水水\"").is_err());
    }

    #[test]
    fn test_classify_grid_set() {
        let grids = GridSet::compute(&[7], &[3, 6]).unwrap();
        let elements = ElementSet::classify(&grids);

        assert_eq!(elements.heaven, Element::Metal); // 8
        assert_eq!(elements.person, Element::Water); // 10
        assert_eq!(elements.earth, Element::Water); // 9
        assert_eq!(elements.outer, Element::Metal); // 7
        assert_eq!(elements.total, Element::Earth); // 16
    }

    proptest! {
        #[test]
        fn prop_element_periodic_in_ten(x in 0u32..100_000) {
            prop_assert_eq!(Element::from_number(x), Element::from_number(x + 10));
        }
    }
}
