//! # Secondary Dispatch
//!
//! Some kernel entry points (`NtUserCallOneParam`, `NtUserCallHwndLock`, ...)
//! are multiplexers: one argument slot carries an opcode that selects the
//! real operation. The opcode numbers are private to each Windows release, so
//! sub-contracts are named symbolically (`"NtUserCallOneParam.GETCURSORPOS"`)
//! and mapped to numbers through an [`OpcodeRow`] table with one column per
//! release.
//!
//! ```text
//!  name                              Win7  VistaSP2  VistaSP01  2003   XP  2000
//!  NtUserCallOneParam.GETCURSORPOS   0x2A    0x29      0x29     0x25  0x25  --
//! ```
//!
//! At initialization the [`VersionGate`](crate::VersionGate) picks a column and
//! [`SecondaryMap::build`] turns it into a name → opcode map. Names without a
//! number in that column are unavailable on the running release.

use crate::version::OpcodeColumn;
use alloc::collections::BTreeMap;
use log::warn;

/// Opcode numbers of one routine across releases.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct OpcodeRow {
    pub name: &'static str,
    pub opcodes: [Option<u16>; OpcodeColumn::COUNT],
}

impl OpcodeRow {
    /// Columns in [`OpcodeColumn::ALL`] order: Win7, Vista SP2, Vista SP0/1,
    /// Server 2003, XP, Windows 2000.
    #[must_use]
    pub const fn new(name: &'static str, opcodes: [Option<u16>; OpcodeColumn::COUNT]) -> Self {
        Self { name, opcodes }
    }

    #[inline]
    #[must_use]
    pub const fn opcode(&self, column: OpcodeColumn) -> Option<u16> {
        self.opcodes[column.index()]
    }
}

/// The multiplexer part of a secondary name: `"NtUserCallOneParam"` for
/// `"NtUserCallOneParam.GETCURSORPOS"`.
#[must_use]
pub fn primary_name(name: &str) -> Option<&str> {
    name.split_once('.').map(|(primary, _)| primary)
}

/// Name → opcode map for the running release.
#[derive(Debug, Clone)]
pub struct SecondaryMap {
    column: OpcodeColumn,
    opcodes: BTreeMap<&'static str, u16>,
}

impl SecondaryMap {
    #[must_use]
    pub fn build(rows: &[OpcodeRow], column: OpcodeColumn) -> Self {
        let mut opcodes = BTreeMap::new();
        for row in rows {
            let Some(opcode) = row.opcode(column) else {
                continue;
            };
            if opcodes.insert(row.name, opcode).is_some() {
                warn!("duplicate opcode row for {}", row.name);
            }
        }
        Self { column, opcodes }
    }

    #[inline]
    #[must_use]
    pub const fn column(&self) -> OpcodeColumn {
        self.column
    }

    /// The opcode for `name`, or `None` if the routine is unavailable.
    #[must_use]
    pub fn opcode(&self, name: &str) -> Option<u16> {
        self.opcodes.get(name).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.opcodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.opcodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, u16)> + '_ {
        self.opcodes.iter().map(|(name, op)| (*name, *op))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROWS: &[OpcodeRow] = &[
        OpcodeRow::new(
            "NtUserCallNoParam.CREATEMENU",
            [Some(0), Some(0), Some(0), Some(0), Some(0), Some(0)],
        ),
        OpcodeRow::new(
            "NtUserCallOneParam.GETCURSORPOS",
            [Some(0x2A), Some(0x29), Some(0x29), Some(0x25), Some(0x25), None],
        ),
    ];

    #[test]
    fn columns_select_numbers() {
        let w7 = SecondaryMap::build(ROWS, OpcodeColumn::Win7);
        let xp = SecondaryMap::build(ROWS, OpcodeColumn::Xp);
        assert_eq!(w7.opcode("NtUserCallOneParam.GETCURSORPOS"), Some(0x2A));
        assert_eq!(xp.opcode("NtUserCallOneParam.GETCURSORPOS"), Some(0x25));
    }

    #[test]
    fn missing_column_entry_is_unavailable() {
        let w2k = SecondaryMap::build(ROWS, OpcodeColumn::Win2000);
        assert_eq!(w2k.opcode("NtUserCallOneParam.GETCURSORPOS"), None);
        assert_eq!(w2k.opcode("NtUserCallNoParam.CREATEMENU"), Some(0));
        assert_eq!(w2k.len(), 1);
    }

    #[test]
    fn primary_part_of_name() {
        assert_eq!(
            primary_name("NtUserCallOneParam.GETCURSORPOS"),
            Some("NtUserCallOneParam")
        );
        assert_eq!(primary_name("NtUserGetDC"), None);
    }
}
