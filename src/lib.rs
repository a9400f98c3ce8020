// Five-Grid Name Engine - Core Library
// Exposes the computation pipeline for the CLI, the HTTP server, and tests

pub mod parser;
pub mod surname;
pub mod strokes;
pub mod grid;
pub mod element;
pub mod year;
pub mod nayin;
pub mod engine;
pub mod render;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use parser::{parse_command, ParsedCommand};
pub use surname::{NameSegments, SurnameRegistry, DEFAULT_COMPOUND_SURNAMES};
pub use strokes::{StrokeLookup, StrokeTable, DEFAULT_STROKE_COUNT, MAX_STROKE_COUNT};
pub use grid::GridSet;
pub use element::{Element, ElementSet};
pub use year::{resolve_birth_year, BirthYear, YearEra};
pub use nayin::{nayin_for_year, sexagenary_name, Nayin, NAYIN_EPOCH_YEAR, NAYIN_TABLE};
pub use engine::{GlyphStrokes, NameReading, NumerologyEngine};
pub use render::{render_text, PLACEHOLDER, USAGE_HINT};
pub use config::AppConfig;
pub use logging::init_logging;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
