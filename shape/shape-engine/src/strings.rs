//! Bounded scans for nul-terminated strings in application memory.

use crate::env::{MemoryReader, ReadFault};
use shape_addresses::AppAddress;

/// Chunked reads never straddle a boundary of this alignment, so they do not
/// fault on a page that lies entirely past the terminator.
const CHUNK: u64 = 64;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CharWidth {
    Narrow,
    Wide,
}

impl CharWidth {
    #[inline]
    #[must_use]
    pub const fn bytes(self) -> u64 {
        match self {
            Self::Narrow => 1,
            Self::Wide => 2,
        }
    }
}

/// How much of a string the scan covered.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct StringExtent {
    /// Bytes up to and including the terminator, or up to where the scan stopped.
    pub bytes: u64,
    pub terminated: bool,
}

impl StringExtent {
    const fn terminated(bytes: u64) -> Self {
        Self {
            bytes,
            terminated: true,
        }
    }

    const fn unterminated(bytes: u64) -> Self {
        Self {
            bytes,
            terminated: false,
        }
    }
}

fn is_nul(ch: &[u8]) -> bool {
    ch.iter().all(|b| *b == 0)
}

/// Scans from `start` for a terminator, looking at no more than `max_bytes`.
///
/// # Errors
/// The first character is unreadable. A fault after at least one character
/// was read ends the scan as unterminated instead.
#[allow(clippy::cast_possible_truncation)]
pub fn scan_terminated(
    memory: &dyn MemoryReader,
    start: AppAddress,
    width: CharWidth,
    max_bytes: u64,
) -> Result<StringExtent, ReadFault> {
    let unit = width.bytes();
    let max_bytes = max_bytes - max_bytes % unit;
    let mut buf = [0u8; CHUNK as usize];
    let mut scanned = 0u64;

    while scanned < max_bytes {
        let at = start + scanned;
        let to_boundary = CHUNK - (at.as_u64() % CHUNK);
        let mut len = to_boundary.min(max_bytes - scanned);
        len -= len % unit;
        if len == 0 {
            len = unit;
        }
        let chunk = &mut buf[..len as usize];

        if memory.read(at, chunk).is_ok() {
            for (i, ch) in chunk.chunks_exact(unit as usize).enumerate() {
                if is_nul(ch) {
                    return Ok(StringExtent::terminated(scanned + (i as u64 + 1) * unit));
                }
            }
        } else {
            // Finer-grained than the chunk: walk one character at a time up
            // to the fault.
            let mut one = [0u8; 2];
            let ch = &mut one[..unit as usize];
            let mut offset = 0;
            while offset < len {
                if let Err(fault) = memory.read(at + offset, ch) {
                    return if scanned + offset == 0 {
                        Err(fault)
                    } else {
                        Ok(StringExtent::unterminated(scanned + offset))
                    };
                }
                if is_nul(ch) {
                    return Ok(StringExtent::terminated(scanned + offset + unit));
                }
                offset += unit;
            }
        }
        scanned += len;
    }

    Ok(StringExtent::unterminated(scanned))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Window {
        base: u64,
        bytes: Vec<u8>,
    }

    impl MemoryReader for Window {
        fn read(&self, addr: AppAddress, buf: &mut [u8]) -> Result<(), ReadFault> {
            let fault = ReadFault::new(addr, buf.len());
            let start = addr.as_u64().checked_sub(self.base).ok_or(fault)?;
            let start = usize::try_from(start).map_err(|_| fault)?;
            let src = self.bytes.get(start..start + buf.len()).ok_or(fault)?;
            buf.copy_from_slice(src);
            Ok(())
        }
    }

    fn wide(text: &str, base: u64) -> Window {
        let mut bytes: Vec<u8> = text.encode_utf16().flat_map(u16::to_le_bytes).collect();
        bytes.extend_from_slice(&[0, 0]);
        Window { base, bytes }
    }

    #[test]
    fn finds_wide_terminator() {
        let w = wide("Consolas", 0x1000);
        let extent = scan_terminated(&w, AppAddress::new(0x1000), CharWidth::Wide, 4096).unwrap();
        assert_eq!(extent, StringExtent { bytes: 18, terminated: true });
    }

    #[test]
    fn stops_at_mapping_end_without_crossing() {
        // The string ends exactly where the mapping does, mid-chunk.
        let w = wide("abc", 0x103A);
        let extent = scan_terminated(&w, AppAddress::new(0x103A), CharWidth::Wide, 4096).unwrap();
        assert_eq!(extent.bytes, 8);
        assert!(extent.terminated);
    }

    #[test]
    fn respects_the_bound() {
        let w = wide("a long string without room", 0x1000);
        let extent = scan_terminated(&w, AppAddress::new(0x1000), CharWidth::Wide, 10).unwrap();
        assert_eq!(extent, StringExtent { bytes: 10, terminated: false });
    }

    #[test]
    fn narrow_strings() {
        let w = Window {
            base: 0x2000,
            bytes: b"COM1\0".to_vec(),
        };
        let extent = scan_terminated(&w, AppAddress::new(0x2000), CharWidth::Narrow, 100).unwrap();
        assert_eq!(extent.bytes, 5);
    }

    #[test]
    fn unreadable_start_is_an_error() {
        let w = wide("x", 0x1000);
        assert!(scan_terminated(&w, AppAddress::new(0x9000), CharWidth::Wide, 100).is_err());
    }

    #[test]
    fn unterminated_until_fault() {
        let w = Window {
            base: 0x1000,
            bytes: vec![b'a'; 0x50],
        };
        let extent = scan_terminated(&w, AppAddress::new(0x1000), CharWidth::Narrow, 4096).unwrap();
        assert_eq!(extent, StringExtent { bytes: 0x50, terminated: false });
    }
}
