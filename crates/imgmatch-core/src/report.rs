//! Console rendering of matched pairs as two-element tuples.

use crate::matcher::MatchedPair;
use std::fmt::Write as _;
use std::io;

/// Format (Cf), separator (Zs other than space, Zl, Zp) and private-use (Co)
/// ranges. Together with `char::is_control` and noncharacters these are the
/// code points rendered as escapes rather than printed.
const NON_PRINTABLE: &[(u32, u32)] = &[
    (0x00A0, 0x00A0),
    (0x00AD, 0x00AD),
    (0x0600, 0x0605),
    (0x061C, 0x061C),
    (0x06DD, 0x06DD),
    (0x070F, 0x070F),
    (0x0890, 0x0891),
    (0x08E2, 0x08E2),
    (0x1680, 0x1680),
    (0x180E, 0x180E),
    (0x2000, 0x200F),
    (0x2028, 0x202F),
    (0x205F, 0x2064),
    (0x2066, 0x206F),
    (0x3000, 0x3000),
    (0xE000, 0xF8FF),
    (0xFDD0, 0xFDEF),
    (0xFEFF, 0xFEFF),
    (0xFFF9, 0xFFFB),
    (0x110BD, 0x110BD),
    (0x110CD, 0x110CD),
    (0x13430, 0x1343F),
    (0x1BCA0, 0x1BCA3),
    (0x1D173, 0x1D17A),
    (0xE0001, 0xE0001),
    (0xE0020, 0xE007F),
    (0xF0000, 0x10FFFF),
];

fn is_printable(c: char) -> bool {
    if c.is_control() {
        return false;
    }
    let cp = c as u32;
    if cp & 0xFFFE == 0xFFFE {
        return false;
    }
    !NON_PRINTABLE
        .iter()
        .any(|&(lo, hi)| (lo..=hi).contains(&cp))
}

/// `\xhh`, `\uhhhh` or `\Uhhhhhhhh` depending on the code point's width.
fn push_escape(out: &mut String, c: char) {
    let cp = c as u32;
    let _ = if cp <= 0xFF {
        write!(out, "\\x{:02x}", cp)
    } else if cp <= 0xFFFF {
        write!(out, "\\u{:04x}", cp)
    } else {
        write!(out, "\\U{:08x}", cp)
    };
}

/// Quotes a string the way a tuple of strings is conventionally printed:
/// single quotes unless the value holds a `'` and no `"`.
pub fn quote(s: &str) -> String {
    let q = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };
    let mut out = String::with_capacity(s.len() + 2);
    out.push(q);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == q => {
                out.push('\\');
                out.push(c);
            }
            c if !is_printable(c) => push_escape(&mut out, c),
            c => out.push(c),
        }
    }
    out.push(q);
    out
}

/// `('cat.png', '/images/abc/cat.png')`
pub fn format_pair(pair: &MatchedPair) -> String {
    format!("({}, {})", quote(&pair.file_name), quote(&pair.image_path))
}

/// Writes one line per pair.
pub fn write_pairs<W: io::Write>(out: &mut W, pairs: &[MatchedPair]) -> io::Result<()> {
    for pair in pairs {
        writeln!(out, "{}", format_pair(pair))?;
    }
    out.flush()
}
