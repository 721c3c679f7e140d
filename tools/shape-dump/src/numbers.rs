//! Call numbers for the dump.
//!
//! A number file lists one call per line as `<name> <number>`, the number
//! in decimal or `0x` hex. Blank lines and lines starting with `#` are
//! ignored. Without a file, every name gets the next free number.

use shape_engine::NumberResolver;
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

/// First number handed out when no file is given.
const FIRST_GENERATED: u32 = 0x1000;

#[derive(Debug, thiserror::Error)]
pub enum NumberFileError {
    #[error("line {line}: expected `<name> <number>`")]
    Malformed { line: usize },
    #[error("line {line}: invalid number {text:?}")]
    BadNumber { line: usize, text: String },
}

pub enum Numbers {
    File(BTreeMap<String, u32>),
    Generated {
        next: Cell<u32>,
        assigned: RefCell<BTreeMap<String, u32>>,
    },
}

impl Numbers {
    #[must_use]
    pub fn generated() -> Self {
        Self::Generated {
            next: Cell::new(FIRST_GENERATED),
            assigned: RefCell::default(),
        }
    }

    /// Parses a number file.
    ///
    /// # Errors
    /// A line is not a name followed by a number.
    pub fn parse(text: &str) -> Result<Self, NumberFileError> {
        let mut numbers = BTreeMap::new();
        for (index, line) in text.lines().enumerate() {
            let line_no = index + 1;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut fields = line.split_whitespace();
            let (Some(name), Some(number), None) = (fields.next(), fields.next(), fields.next())
            else {
                return Err(NumberFileError::Malformed { line: line_no });
            };
            let number = parse_number(number).ok_or_else(|| NumberFileError::BadNumber {
                line: line_no,
                text: number.to_string(),
            })?;
            numbers.insert(name.to_string(), number);
        }
        Ok(Self::File(numbers))
    }
}

fn parse_number(text: &str) -> Option<u32> {
    match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16).ok(),
        None => text.parse().ok(),
    }
}

impl NumberResolver for Numbers {
    fn resolve_number(&self, name: &str) -> Option<u32> {
        match self {
            Self::File(numbers) => numbers.get(name).copied(),
            Self::Generated { next, assigned } => {
                let mut assigned = assigned.borrow_mut();
                if let Some(number) = assigned.get(name) {
                    return Some(*number);
                }
                let number = next.get();
                next.set(number + 1);
                assigned.insert(name.to_string(), number);
                Some(number)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_entries_resolve() {
        let numbers = Numbers::parse("# win7 x64\nNtUserGetDC 0x100A\n\nNtGdiFlush 4097\n").unwrap();
        assert_eq!(numbers.resolve_number("NtUserGetDC"), Some(0x100A));
        assert_eq!(numbers.resolve_number("NtGdiFlush"), Some(4097));
        assert_eq!(numbers.resolve_number("NtUserGetDCEx"), None);
    }

    #[test]
    fn malformed_lines_are_reported() {
        assert!(matches!(
            Numbers::parse("NtUserGetDC\n"),
            Err(NumberFileError::Malformed { line: 1 })
        ));
        assert!(matches!(
            Numbers::parse("NtUserGetDC 0x10\nNtGdiFlush ten\n"),
            Err(NumberFileError::BadNumber { line: 2, .. })
        ));
    }

    #[test]
    fn generated_numbers_are_stable_per_name() {
        let numbers = Numbers::generated();
        let first = numbers.resolve_number("NtUserGetDC");
        let second = numbers.resolve_number("NtGdiFlush");
        assert_eq!(first, Some(FIRST_GENERATED));
        assert_eq!(second, Some(FIRST_GENERATED + 1));
        assert_eq!(numbers.resolve_number("NtUserGetDC"), first);
    }
}
