// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF text-string decoding and encoding.
//
// PDF text strings are either UTF-16 BE with a BOM or single-byte
// (PDFDocEncoding, approximated here as Latin-1 with a UTF-8 first try,
// which matches what real-world producers emit).

use lopdf::{Object, StringFormat};

/// Decode the bytes of a PDF text string.
pub(crate) fn decode_text(bytes: &[u8]) -> String {
    if bytes.len() >= 2 && bytes[0] == 0xFE && bytes[1] == 0xFF {
        let units: Vec<u16> = bytes[2..]
            .chunks(2)
            .filter_map(|pair| {
                if pair.len() == 2 {
                    Some(u16::from_be_bytes([pair[0], pair[1]]))
                } else {
                    None
                }
            })
            .collect();
        String::from_utf16(&units).unwrap_or_else(|_| String::from_utf16_lossy(&units))
    } else {
        match std::str::from_utf8(bytes) {
            Ok(s) => s.to_string(),
            Err(_) => bytes.iter().map(|&b| b as char).collect(),
        }
    }
}

/// Encode a string as a PDF text string object.
///
/// Plain Latin-1 content stays single-byte; anything wider becomes UTF-16 BE
/// with a BOM.
pub(crate) fn encode_text(value: &str) -> Object {
    if value.chars().all(|c| (c as u32) < 0x100) {
        let bytes = value.chars().map(|c| c as u8).collect();
        Object::String(bytes, StringFormat::Literal)
    } else {
        let mut bytes = vec![0xFE, 0xFF];
        for unit in value.encode_utf16() {
            bytes.extend_from_slice(&unit.to_be_bytes());
        }
        Object::String(bytes, StringFormat::Literal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_round_trip() {
        let Object::String(bytes, _) = encode_text("hello") else {
            panic!("expected string object");
        };
        assert_eq!(decode_text(&bytes), "hello");
    }

    #[test]
    fn wide_text_round_trip() {
        let Object::String(bytes, _) = encode_text("Überblick — §2") else {
            panic!("expected string object");
        };
        assert_eq!(&bytes[..2], &[0xFE, 0xFF]);
        assert_eq!(decode_text(&bytes), "Überblick — §2");
    }

    #[test]
    fn latin1_fallback() {
        // 0xE9 is 'é' in Latin-1 and invalid as standalone UTF-8.
        assert_eq!(decode_text(&[0x63, 0x61, 0x66, 0xE9]), "café");
    }
}
