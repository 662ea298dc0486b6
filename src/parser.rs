//! Parse byte-string filter text into raw bytes using PEST.

use pest::Parser;
use pest_derive::Parser as PestParser;

use crate::ftype::ValueError;

#[derive(PestParser)]
#[grammar = "grammar.pest"]
struct ByteStringParser;

/// Parse byte-string text (`"de:ad:be:ef"`, `"a-b-c"`, `"1.2.3"`) into raw
/// bytes. Each group of one or two hex digits becomes one byte; the three
/// separator characters are interchangeable. On failure nothing is
/// committed and the whole input is rejected.
pub fn parse_byte_string(s: &str) -> Result<Vec<u8>, ValueError> {
    let pairs = ByteStringParser::parse(Rule::byte_string, s)
        .map_err(|_| ValueError::InvalidByteString(s.to_string()))?;
    let pair = match pairs.into_iter().next() {
        Some(p) => p,
        None => return Ok(Vec::new()),
    };
    let mut bytes = Vec::new();
    for inner in pair.into_inner() {
        if inner.as_rule() == Rule::octet {
            let val = u8::from_str_radix(inner.as_str(), 16)
                .map_err(|_| ValueError::InvalidByteString(s.to_string()))?;
            bytes.push(val);
        }
    }
    Ok(bytes)
}
