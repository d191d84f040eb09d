//! Spreadsheet cell values, decoupled from the workbook reader so row
//! normalization can be tested without building a workbook.

use calamine::Data;

/// One heterogeneous cell value from a worksheet row.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl Cell {
    /// `true` for empty cells and whitespace-only text.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Trimmed text rendering of the cell, or `None` when blank.
    ///
    /// Whole floats render without a fractional part (`128.0` → `"128"`),
    /// since spreadsheets store typed-in integers as floats.
    #[must_use]
    pub fn as_text(&self) -> Option<String> {
        match self {
            Cell::Empty => None,
            Cell::Text(s) => {
                let trimmed = s.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            }
            Cell::Int(i) => Some(i.to_string()),
            Cell::Float(f) => Some(render_float(*f)),
            Cell::Bool(b) => Some(b.to_string()),
        }
    }

    /// Text rendering with blank cells mapped to `""`.
    #[must_use]
    pub fn text_or_empty(&self) -> String {
        self.as_text().unwrap_or_default()
    }

    /// Lenient numeric reading.
    ///
    /// Numeric cells are returned as-is. Text is read from its leading
    /// numeric prefix after dropping digit-grouping spaces, so `"79 990 ₽"`
    /// reads as `79990`. Returns `None` when no number can be read.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            #[allow(clippy::cast_precision_loss)]
            Cell::Int(i) => Some(*i as f64),
            Cell::Float(f) => Some(*f),
            Cell::Text(s) => parse_leading_number(s),
            Cell::Empty | Cell::Bool(_) => None,
        }
    }
}

impl From<&Data> for Cell {
    fn from(data: &Data) -> Self {
        match data {
            Data::Int(i) => Cell::Int(*i),
            Data::Float(f) => Cell::Float(*f),
            Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
            Data::Bool(b) => Cell::Bool(*b),
            Data::DateTime(dt) => Cell::Float(dt.as_f64()),
            Data::Error(_) | Data::Empty => Cell::Empty,
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        if s.is_empty() {
            Cell::Empty
        } else {
            Cell::Text(s.to_string())
        }
    }
}

fn render_float(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 {
        format!("{f:.0}")
    } else {
        f.to_string()
    }
}

fn parse_leading_number(raw: &str) -> Option<f64> {
    let compact: String = raw
        .trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '\u{a0}' | '\u{202f}'))
        .collect();

    // Digits, dots and an exponent; a sign may lead the number or follow `e`.
    let mut candidate = String::new();
    let mut prev: Option<char> = None;
    for c in compact.chars() {
        let sign_allowed = prev.is_none_or(|p| matches!(p, 'e' | 'E'));
        if c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E') || (sign_allowed && matches!(c, '+' | '-')) {
            candidate.push(c);
            prev = Some(c);
        } else {
            break;
        }
    }

    // Longest prefix that parses, e.g. "12.5.3" reads as 12.5 and "2e" as 2.
    (1..=candidate.len())
        .rev()
        .find_map(|end| candidate[..end].parse::<f64>().ok())
        .filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_detection() {
        assert!(Cell::Empty.is_blank());
        assert!(Cell::Text("  ".to_string()).is_blank());
        assert!(!Cell::Text("x".to_string()).is_blank());
        assert!(!Cell::Int(0).is_blank());
    }

    #[test]
    fn as_text_trims_and_renders_numbers() {
        assert_eq!(Cell::Text(" Blue ".to_string()).as_text().as_deref(), Some("Blue"));
        assert_eq!(Cell::Float(128.0).as_text().as_deref(), Some("128"));
        assert_eq!(Cell::Float(12.9).as_text().as_deref(), Some("12.9"));
        assert_eq!(Cell::Int(256).as_text().as_deref(), Some("256"));
        assert_eq!(Cell::Empty.as_text(), None);
    }

    #[test]
    fn as_number_reads_numeric_cells() {
        assert_eq!(Cell::Int(79_990).as_number(), Some(79_990.0));
        assert_eq!(Cell::Float(12.5).as_number(), Some(12.5));
        assert_eq!(Cell::Empty.as_number(), None);
        assert_eq!(Cell::Bool(true).as_number(), None);
    }

    #[test]
    fn as_number_reads_leading_numeric_prefix() {
        assert_eq!(Cell::from("79990").as_number(), Some(79_990.0));
        assert_eq!(Cell::from("79 990 ₽").as_number(), Some(79_990.0));
        assert_eq!(Cell::from("12.5.3").as_number(), Some(12.5));
        assert_eq!(Cell::from("-5").as_number(), Some(-5.0));
    }

    #[test]
    fn as_number_reads_exponent_notation() {
        assert_eq!(Cell::from("1e5").as_number(), Some(100_000.0));
        assert_eq!(Cell::from("1.5E3 rub").as_number(), Some(1_500.0));
        assert_eq!(Cell::from("2e-1").as_number(), Some(0.2));
        assert_eq!(Cell::from("2e").as_number(), Some(2.0));
        assert_eq!(Cell::from("e5").as_number(), None);
    }

    #[test]
    fn as_number_rejects_non_numeric_text() {
        assert_eq!(Cell::from("call us").as_number(), None);
        assert_eq!(Cell::from("inf").as_number(), None);
        assert_eq!(Cell::from("-").as_number(), None);
    }

    #[test]
    fn converts_from_calamine_data() {
        assert_eq!(Cell::from(&Data::Int(3)), Cell::Int(3));
        assert_eq!(
            Cell::from(&Data::String("iPhone".to_string())),
            Cell::Text("iPhone".to_string())
        );
        assert_eq!(Cell::from(&Data::Empty), Cell::Empty);
    }
}
