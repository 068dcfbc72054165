//! LZW compression and decompression.
//!
//! The encoder grows the longest known match one byte at a time and emits
//! the code of the match each time an extension misses, learning the missed
//! sequence while the dictionary has room. The decoder replays the same
//! learning one step later, inferring the newest entry when it is referenced
//! before the decoder could have learned it (the KwKwK case).
//!
//! Neither side writes a header. Strategy and `max_code` must be the same
//! on both ends; a mismatch is not detected and yields garbage.

use crate::error::{LzwError, Result};
use crate::io::{
    CodeReader, CodeStreamReader, CodeStreamWriter, CodeWriter, SymbolReader, SymbolWriter,
};
use crate::types::{Code, CodeStreamKind};
use std::io::{BufReader, BufWriter, Read, Write};

use super::dictionary::{DecodeDictionary, EncodeDictionary};

/// What a single compress or decompress call processed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CodingSummary {
    /// Uncompressed bytes read (compress) or written (decompress)
    pub symbols: u64,
    /// Codes written or read, not counting the EOF sentinel
    pub codes: u64,
    /// Dictionary entries at the end of the call, literals included
    pub dictionary_size: usize,
}

/// Compress `input` into `output` using the `kind` code stream.
///
/// The code stream is finished (EOF sentinel written, sink flushed) before
/// returning. This also happens when an error cuts the input short: the sink
/// then holds a well-formed stream of whatever was encoded so far, minus the
/// pending match. Discard the output whenever `Err` is returned.
pub fn compress<R: Read, W: Write>(
    input: R,
    output: W,
    kind: CodeStreamKind,
    max_code: Code,
) -> Result<CodingSummary> {
    let mut symbols = SymbolReader::new(BufReader::new(input));
    let mut codes = CodeStreamWriter::new(kind, BufWriter::new(output), max_code);

    let summary = encode(&mut symbols, &mut codes, max_code)?;
    codes.finish()?;

    log::debug!(
        "compressed {} bytes into {} {} codes (dictionary {} entries, max code {})",
        summary.symbols,
        summary.codes,
        kind,
        summary.dictionary_size,
        max_code
    );
    Ok(summary)
}

/// Decompress `input` into `output`, reading the `kind` code stream.
pub fn decompress<R: Read, W: Write>(
    input: R,
    output: W,
    kind: CodeStreamKind,
    max_code: Code,
) -> Result<CodingSummary> {
    let mut codes = CodeStreamReader::new(kind, BufReader::new(input), max_code);
    let mut symbols = SymbolWriter::new(BufWriter::new(output));

    let summary = decode(&mut codes, &mut symbols, max_code)?;
    symbols.flush()?;

    log::debug!(
        "decompressed {} {} codes into {} bytes (dictionary {} entries, max code {})",
        summary.codes,
        kind,
        summary.symbols,
        summary.dictionary_size,
        max_code
    );
    Ok(summary)
}

/// Run the encoder over an already wrapped symbol source and code sink.
///
/// Does not finish the code sink.
pub fn encode<R: Read, C: CodeWriter + ?Sized>(
    symbols: &mut SymbolReader<R>,
    codes: &mut C,
    max_code: Code,
) -> Result<CodingSummary> {
    let mut dictionary = EncodeDictionary::new(max_code);
    let mut current: Option<Code> = None;
    let mut emitted = 0u64;

    while let Some(symbol) = symbols.read_symbol()? {
        current = Some(match current {
            None => EncodeDictionary::literal(symbol),
            Some(prefix) => match dictionary.extend(prefix, symbol) {
                Some(code) => code,
                None => {
                    dictionary.insert(prefix, symbol);
                    codes.write_code(prefix)?;
                    emitted += 1;
                    EncodeDictionary::literal(symbol)
                }
            },
        });
    }

    if let Some(code) = current {
        codes.write_code(code)?;
        emitted += 1;
    }

    Ok(CodingSummary {
        symbols: symbols.symbols_read(),
        codes: emitted,
        dictionary_size: dictionary.len(),
    })
}

/// Run the decoder over an already wrapped code source and symbol sink.
///
/// Does not flush the symbol sink.
pub fn decode<C: CodeReader + ?Sized, W: Write>(
    codes: &mut C,
    symbols: &mut SymbolWriter<W>,
    max_code: Code,
) -> Result<CodingSummary> {
    let mut dictionary = DecodeDictionary::new(max_code);
    let mut previous: Vec<u8> = Vec::new();
    let mut consumed = 0u64;

    while let Some(code) = codes.read_code()? {
        consumed += 1;
        let entry = dictionary.resolve(code, &previous)?;
        symbols.write_symbols(&entry)?;

        if !previous.is_empty() && !dictionary.is_full() {
            let &first = entry
                .first()
                .ok_or_else(|| LzwError::Internal(format!("code {} resolved to nothing", code)))?;
            let mut learned = std::mem::take(&mut previous);
            learned.push(first);
            dictionary.insert(learned);
        }
        previous = entry;
    }

    Ok(CodingSummary {
        symbols: symbols.symbols_written(),
        codes: consumed,
        dictionary_size: dictionary.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DEFAULT_MAX_CODE;
    use std::io::Cursor;

    /// Code sink that just records what it is given.
    #[derive(Default)]
    struct Recorder {
        codes: Vec<Code>,
        finished: bool,
    }

    impl CodeWriter for Recorder {
        fn write_code(&mut self, code: Code) -> Result<()> {
            self.codes.push(code);
            Ok(())
        }

        fn finish(&mut self) -> Result<()> {
            self.finished = true;
            Ok(())
        }

        fn is_finished(&self) -> bool {
            self.finished
        }
    }

    /// Code source replaying a fixed list.
    struct Replay(std::vec::IntoIter<Code>);

    impl CodeReader for Replay {
        fn read_code(&mut self) -> Result<Option<Code>> {
            Ok(self.0.next())
        }
    }

    fn encode_codes(data: &[u8], max_code: Code) -> Vec<Code> {
        let mut symbols = SymbolReader::new(Cursor::new(data.to_vec()));
        let mut recorder = Recorder::default();
        encode(&mut symbols, &mut recorder, max_code).unwrap();
        recorder.codes
    }

    fn decode_codes(codes: Vec<Code>, max_code: Code) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        {
            let mut symbols = SymbolWriter::new(&mut out);
            decode(&mut Replay(codes.into_iter()), &mut symbols, max_code)?;
        }
        Ok(out)
    }

    #[test]
    fn test_encode_classic_example() {
        let codes = encode_codes(b"TOBEORNOTTOBEORTOBEORNOT", DEFAULT_MAX_CODE);
        let expected: Vec<Code> = vec![
            84, 79, 66, 69, 79, 82, 78, 79, 84, 257, 259, 261, 266, 260, 262, 264,
        ];
        assert_eq!(codes, expected);
    }

    #[test]
    fn test_encode_repeated_byte_hits_kwkwk() {
        let codes = encode_codes(b"AAAAAAAAAA", DEFAULT_MAX_CODE);
        assert_eq!(codes, vec![65, 257, 258, 259]);
        assert_eq!(decode_codes(codes, DEFAULT_MAX_CODE).unwrap(), b"AAAAAAAAAA");
    }

    #[test]
    fn test_encode_empty_input_emits_nothing() {
        assert!(encode_codes(b"", DEFAULT_MAX_CODE).is_empty());
        assert!(decode_codes(Vec::new(), DEFAULT_MAX_CODE).unwrap().is_empty());
    }

    #[test]
    fn test_degenerate_bound_emits_literals_only() {
        let data = b"abababababababab";
        let codes = encode_codes(data, 256);
        assert_eq!(codes.len(), data.len());
        assert!(codes.iter().all(|&c| c < 256));
        assert_eq!(decode_codes(codes, 256).unwrap(), data);
    }

    #[test]
    fn test_bound_below_literals_still_round_trips() {
        let data: Vec<u8> = (0..=255u8).chain(0..=255u8).collect();
        let codes = encode_codes(&data, 100);
        assert_eq!(codes.len(), data.len());
        assert_eq!(decode_codes(codes, 100).unwrap(), data);
    }

    #[test]
    fn test_small_bound_stops_learning() {
        let data = b"abcabcabcabcabcabc";
        let codes = encode_codes(data, 258);
        assert!(codes.iter().all(|&c| c <= 258));
        assert_eq!(decode_codes(codes, 258).unwrap(), data);
    }

    #[test]
    fn test_decode_rejects_unknown_first_code() {
        let err = decode_codes(vec![400, 65], DEFAULT_MAX_CODE).unwrap_err();
        assert!(matches!(err, LzwError::InvalidCode(400)));
    }

    #[test]
    fn test_summary_counts() {
        let data = b"AAAAAAAAAA";
        let mut out = Vec::new();
        let summary =
            compress(&data[..], &mut out, CodeStreamKind::Text, DEFAULT_MAX_CODE).unwrap();
        assert_eq!(summary.symbols, 10);
        assert_eq!(summary.codes, 4);
        assert_eq!(summary.dictionary_size, 256 + 3);
        assert_eq!(String::from_utf8(out.clone()).unwrap(), "65\n257\n258\n259\n256\n");

        let mut restored = Vec::new();
        let summary =
            decompress(&out[..], &mut restored, CodeStreamKind::Text, DEFAULT_MAX_CODE).unwrap();
        assert_eq!(summary.symbols, 10);
        assert_eq!(summary.codes, 4);
        assert_eq!(restored, data);
    }

    #[test]
    fn test_round_trip_every_strategy() {
        let data = b"It was the best of times, it was the worst of times.\0\n\xff";
        for kind in CodeStreamKind::ALL {
            let mut packed = Vec::new();
            compress(&data[..], &mut packed, kind, DEFAULT_MAX_CODE).unwrap();
            let mut restored = Vec::new();
            decompress(&packed[..], &mut restored, kind, DEFAULT_MAX_CODE).unwrap();
            assert_eq!(&restored[..], &data[..], "{kind}");
        }
    }
}
