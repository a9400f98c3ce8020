// 🧾 Command Parser - Free-form text → (name, year token)
//
// Accepted shapes (after trimming):
//   "李大同1990"   "李大同 1990"   "李大同+79"   "李大同-1990"   "歐陽修"
//
// Grammar:
//   name  = 1+ chars that are not a digit, '+', '-', or whitespace
//   sep   = 0+ of '+', '-', whitespace
//   year  = 0+ digits (ASCII or full-width), normalized to ASCII
//
// Anything after the year run is ignored. Glyph validity is not checked here;
// unknown glyphs degrade later in the stroke lookup.

use serde::{Deserialize, Serialize};

/// ParsedCommand - What the user asked about
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedCommand {
    /// Name run; never empty, never contains digits, separators, or whitespace
    pub full_name: String,

    /// Year digits as typed (ASCII-normalized), None if no digits followed the name
    pub year_token: Option<String>,
}

impl ParsedCommand {
    pub fn name_len(&self) -> usize {
        self.full_name.chars().count()
    }
}

/// Parse an inbound text message
///
/// Returns None when no name run can be extracted ("nothing to compute").
pub fn parse_command(input: &str) -> Option<ParsedCommand> {
    let mut chars = input.trim().chars().peekable();

    let mut full_name = String::new();
    while let Some(&c) = chars.peek() {
        if is_digit(c) || is_separator(c) {
            break;
        }
        full_name.push(c);
        chars.next();
    }

    if full_name.is_empty() {
        return None;
    }

    while chars.next_if(|&c| is_separator(c)).is_some() {}

    let mut year = String::new();
    while let Some(digit) = chars.peek().copied().and_then(ascii_digit) {
        year.push(digit);
        chars.next();
    }

    Some(ParsedCommand {
        full_name,
        year_token: if year.is_empty() { None } else { Some(year) },
    })
}

fn is_separator(c: char) -> bool {
    c == '+' || c == '-' || c.is_whitespace()
}

fn is_digit(c: char) -> bool {
    ascii_digit(c).is_some()
}

/// ASCII form of a decimal digit, accepting full-width ０-９
fn ascii_digit(c: char) -> Option<char> {
    match c {
        '0'..='9' => Some(c),
        '０'..='９' => char::from_u32(c as u32 - '０' as u32 + '0' as u32),
        _ => None,
    }
}
