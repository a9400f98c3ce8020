// ⚙️ Numerology Engine - The whole pipeline, one call per request
//
//   text → ParsedCommand → NameSegments → strokes → GridSet → ElementSet
//        ↘ year token → BirthYear → Nayin
//
// Shared data (stroke table, surname list) is immutable and behind Arc, so an
// engine can be cloned into any number of concurrent handlers.

use crate::element::ElementSet;
use crate::grid::GridSet;
use crate::nayin::{nayin_for_year, sexagenary_name};
use crate::parser::{parse_command, ParsedCommand};
use crate::strokes::{StrokeLookup, StrokeTable};
use crate::surname::SurnameRegistry;
use crate::year::{resolve_birth_year, YearEra};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

// ============================================================================
// RESULT TYPES
// ============================================================================

/// One glyph of the name with its stroke count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlyphStrokes {
    pub glyph: String,
    pub strokes: u32,
    /// false when the table didn't know the glyph and the default was used
    pub known: bool,
}

/// NameReading - Everything computed for one request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameReading {
    pub full_name: String,
    pub surname: String,
    pub given_name: String,

    /// Per-glyph strokes in name order
    pub characters: Vec<GlyphStrokes>,

    pub grids: GridSet,
    pub elements: ElementSet,

    pub birth_year: Option<i32>,
    pub birth_year_era: Option<YearEra>,
    pub birth_year_raw_token: Option<String>,

    pub nayin: Option<String>,
    pub nayin_last_glyph: Option<String>,
    pub sexagenary_year: Option<String>,
}

impl NameReading {
    /// Glyphs the stroke table didn't know
    pub fn unknown_glyphs(&self) -> Vec<&str> {
        self.characters
            .iter()
            .filter(|c| !c.known)
            .map(|c| c.glyph.as_str())
            .collect()
    }
}

// ============================================================================
// ENGINE
// ============================================================================

#[derive(Clone)]
pub struct NumerologyEngine {
    strokes: Arc<dyn StrokeLookup>,
    surnames: Arc<SurnameRegistry>,
}

impl NumerologyEngine {
    pub fn new<L: StrokeLookup + 'static>(strokes: L, surnames: SurnameRegistry) -> Self {
        NumerologyEngine {
            strokes: Arc::new(strokes),
            surnames: Arc::new(surnames),
        }
    }

    /// Engine with no stroke data: every glyph counts 10
    pub fn with_defaults() -> Self {
        Self::new(StrokeTable::empty(), SurnameRegistry::new())
    }

    pub fn surnames(&self) -> &SurnameRegistry {
        &self.surnames
    }

    /// Run the full pipeline on raw inbound text
    ///
    /// `reference_year` is the caller's current Gregorian year, used to tell
    /// Republic-calendar years from Gregorian ones. Returns None only when no
    /// name could be extracted.
    pub fn evaluate(&self, text: &str, reference_year: i32) -> Option<NameReading> {
        let Some(command) = parse_command(text) else {
            debug!(text, "no name in input, nothing to compute");
            return None;
        };

        self.evaluate_command(&command, reference_year)
    }

    /// Run the pipeline on an already parsed command
    pub fn evaluate_command(&self, command: &ParsedCommand, reference_year: i32) -> Option<NameReading> {
        let segments = self.surnames.segment(&command.full_name)?;

        let characters: Vec<GlyphStrokes> = command
            .full_name
            .chars()
            .map(|c| {
                let (strokes, known) = self.strokes.resolve(c);
                GlyphStrokes {
                    glyph: c.to_string(),
                    strokes,
                    known,
                }
            })
            .collect();

        let (surname_part, given_part) = characters.split_at(segments.surname_len());
        let surname_strokes: Vec<u32> = surname_part.iter().map(|c| c.strokes).collect();
        let given_strokes: Vec<u32> = given_part.iter().map(|c| c.strokes).collect();

        let grids = GridSet::compute(&surname_strokes, &given_strokes)?;
        let elements = ElementSet::classify(&grids);

        let birth = resolve_birth_year(command.year_token.as_deref(), reference_year);
        let nayin = birth.and_then(|b| nayin_for_year(b.gregorian));

        debug!(
            name = %command.full_name,
            surname = %segments.surname,
            total = grids.total,
            birth_year = ?birth.map(|b| b.gregorian),
            "name evaluated"
        );

        Some(NameReading {
            full_name: command.full_name.clone(),
            surname: segments.surname,
            given_name: segments.given,
            characters,
            grids,
            elements,
            birth_year: birth.map(|b| b.gregorian),
            birth_year_era: birth.map(|b| b.era),
            birth_year_raw_token: command.year_token.clone(),
            nayin: nayin.map(|n| n.label.to_string()),
            nayin_last_glyph: nayin.map(|n| n.last_glyph().to_string()),
            sexagenary_year: birth.and_then(|b| sexagenary_name(b.gregorian)),
        })
    }
}

impl Default for NumerologyEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}
