//! Single-line, ASCII-only JSON encoding for the generated modules.
//!
//! The payloads are pasted into TypeScript source, so DEL and every non-ASCII
//! character are written as `\uXXXX` escapes and the layout is the familiar
//! `{"key": "value", "other": 1}` style.

use crate::utils::error::Result;
use serde::Serialize;
use serde_json::ser::Formatter;
use std::io;

#[derive(Debug, Default, Clone, Copy)]
pub struct AsciiFormatter;

impl Formatter for AsciiFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if fragment.bytes().all(|b| b != 0x7f && b.is_ascii()) {
            return writer.write_all(fragment.as_bytes());
        }

        let mut units = [0u16; 2];
        for ch in fragment.chars() {
            if ch.is_ascii() && ch != '\u{7f}' {
                writer.write_all(&[ch as u8])?;
            } else {
                for unit in ch.encode_utf16(&mut units) {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }
        Ok(())
    }
}

/// Serializes `value` with [`AsciiFormatter`].
pub fn to_ascii_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let mut serializer = serde_json::Serializer::with_formatter(Vec::new(), AsciiFormatter);
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8(serializer.into_inner())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::SectorListEntry;
    use serde_json::json;
    use std::collections::BTreeMap;

    #[test]
    fn test_layout_uses_spaced_separators() {
        let value = vec![
            SectorListEntry {
                name: "A".to_string(),
                nace: "1".to_string(),
            },
            SectorListEntry {
                name: "B".to_string(),
                nace: "2".to_string(),
            },
        ];
        assert_eq!(
            to_ascii_string(&value).unwrap(),
            r#"[{"name": "A", "nace": "1"}, {"name": "B", "nace": "2"}]"#
        );
    }

    #[test]
    fn test_empty_containers() {
        let empty: Vec<String> = Vec::new();
        assert_eq!(to_ascii_string(&empty).unwrap(), "[]");
        let empty: BTreeMap<String, String> = BTreeMap::new();
        assert_eq!(to_ascii_string(&empty).unwrap(), "{}");
    }

    #[test]
    fn test_non_ascii_is_escaped() {
        assert_eq!(
            to_ascii_string("Bränsle & café").unwrap(),
            r#""Br\u00e4nsle & caf\u00e9""#
        );
        // Astral characters become surrogate pairs.
        assert_eq!(to_ascii_string("🏭").unwrap(), r#""\ud83c\udfed""#);
    }

    #[test]
    fn test_quotes_and_controls_still_escaped() {
        assert_eq!(
            to_ascii_string("say \"hi\"\n").unwrap(),
            r#""say \"hi\"\n""#
        );
    }

    #[test]
    fn test_delete_is_escaped() {
        assert_eq!(to_ascii_string("a\u{7f}b").unwrap(), r#""a\u007fb""#);
        assert_eq!(to_ascii_string("\u{7f}é").unwrap(), r#""\u007f\u00e9""#);
    }

    #[test]
    fn test_output_decodes_to_same_value() {
        let value = json!({"name": "Återvinning – metall", "nace": "3832"});
        let encoded = to_ascii_string(&value).unwrap();
        assert!(encoded.is_ascii());
        let decoded: serde_json::Value = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, value);
    }
}
