// ✍️ Stroke Resolver - Kangxi stroke counts per glyph
// The table is static data: loaded once at startup, read-only afterwards.
//
// Unknown glyphs are NOT errors. They resolve to DEFAULT_STROKE_COUNT so that
// grid arithmetic always has a value to work with.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Stroke count used for any glyph missing from the table
pub const DEFAULT_STROKE_COUNT: u32 = 10;

/// Largest stroke count accepted from a data source; no Kangxi glyph comes close
pub const MAX_STROKE_COUNT: u32 = 64;

// ============================================================================
// LOOKUP TRAIT
// ============================================================================

/// StrokeLookup - The only thing the engine needs from the data source
///
/// Only `lookup` is required. Counts outside 1..=MAX_STROKE_COUNT are treated
/// as unknown, so every glyph resolves to a count the grid arithmetic can use.
pub trait StrokeLookup: Send + Sync {
    /// Traditional (Kangxi) stroke count, or None if the source doesn't know the glyph
    fn lookup(&self, glyph: char) -> Option<u32>;

    /// Stroke count and whether the source supplied it
    fn resolve(&self, glyph: char) -> (u32, bool) {
        match self.lookup(glyph) {
            Some(count) if (1..=MAX_STROKE_COUNT).contains(&count) => (count, true),
            Some(count) => {
                warn!(%glyph, count, default = DEFAULT_STROKE_COUNT, "implausible stroke count from source");
                (DEFAULT_STROKE_COUNT, false)
            }
            None => {
                debug!(%glyph, default = DEFAULT_STROKE_COUNT, "glyph missing from stroke table");
                (DEFAULT_STROKE_COUNT, false)
            }
        }
    }

    /// Stroke count with the default applied
    fn stroke_count(&self, glyph: char) -> u32 {
        self.resolve(glyph).0
    }
}

// ============================================================================
// STROKE TABLE
// ============================================================================

/// In-memory glyph → stroke count table
#[derive(Debug, Clone, Default)]
pub struct StrokeTable {
    entries: HashMap<char, u32>,
}

impl StrokeTable {
    /// Empty table: every glyph resolves to the default
    pub fn empty() -> Self {
        StrokeTable::default()
    }

    /// Build from (glyph, strokes) pairs, dropping counts outside 1..=MAX_STROKE_COUNT
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (char, u32)>,
    {
        let entries = pairs
            .into_iter()
            .filter(|(glyph, strokes)| match *strokes {
                0 => {
                    warn!(%glyph, "skipping zero stroke count");
                    false
                }
                n if n > MAX_STROKE_COUNT => {
                    warn!(%glyph, strokes = n, max = MAX_STROKE_COUNT, "skipping implausible stroke count");
                    false
                }
                _ => true,
            })
            .collect();

        StrokeTable { entries }
    }

    /// Load table from a file, picking the format by extension (.csv or JSON)
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);

        let table = if is_csv {
            Self::from_csv_file(path)?
        } else {
            Self::from_json_file(path)?
        };

        info!(path = %path.display(), entries = table.len(), "stroke table loaded");
        Ok(table)
    }

    /// Load from a JSON object: `{"李": 7, "大": 3}`
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read stroke table: {:?}", path.as_ref()))?;

        Self::from_json_str(&content)
            .with_context(|| format!("Failed to parse stroke table: {:?}", path.as_ref()))
    }

    /// Parse a JSON object of glyph → stroke count
    pub fn from_json_str(content: &str) -> Result<Self> {
        let raw: HashMap<String, u32> =
            serde_json::from_str(content).context("Stroke table must be a JSON object of glyph → integer")?;

        Ok(Self::from_pairs(
            raw.into_iter().filter_map(|(key, strokes)| single_glyph(&key).map(|g| (g, strokes))),
        ))
    }

    /// Load from CSV with a header row: `glyph,strokes`
    pub fn from_csv_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = fs::File::open(path.as_ref())
            .with_context(|| format!("Failed to open stroke table: {:?}", path.as_ref()))?;

        Self::from_csv_reader(file)
            .with_context(|| format!("Failed to parse stroke table: {:?}", path.as_ref()))
    }

    /// Parse CSV records from any reader
    pub fn from_csv_reader<R: std::io::Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut pairs = Vec::new();
        for (line_num, record) in reader.records().enumerate() {
            // +2: 1-indexed plus header row
            let record = record.with_context(|| format!("Bad CSV record at line {}", line_num + 2))?;

            let key = record.get(0).unwrap_or("");
            let Some(glyph) = single_glyph(key) else {
                continue;
            };

            match record.get(1).unwrap_or("").parse::<u32>() {
                Ok(strokes) => pairs.push((glyph, strokes)),
                Err(_) => warn!(line = line_num + 2, %glyph, "skipping non-numeric stroke count"),
            }
        }

        Ok(Self::from_pairs(pairs))
    }

    /// Load the table, or fall back to an empty one if the file is unusable
    ///
    /// An empty table is a legal degraded state: every glyph gets the default.
    pub fn load_or_empty<P: AsRef<Path>>(path: P) -> Self {
        match Self::from_file(path.as_ref()) {
            Ok(table) => table,
            Err(e) => {
                warn!(error = %format!("{:#}", e), "stroke table unavailable, using default counts");
                Self::empty()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the table has an explicit count for this glyph
    pub fn contains(&self, glyph: char) -> bool {
        self.entries.contains_key(&glyph)
    }
}

impl StrokeLookup for StrokeTable {
    fn lookup(&self, glyph: char) -> Option<u32> {
        self.entries.get(&glyph).copied()
    }
}

/// Keys must be exactly one character
fn single_glyph(key: &str) -> Option<char> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(glyph), None) => Some(glyph),
        _ => {
            warn!(key, "skipping stroke entry: key is not a single glyph");
            None
        }
    }
}
