//! Byte-string parser fuzz target: feed arbitrary text to the parser.
//! The parser must not panic; it returns Ok(bytes) or Err(ValueError).
//! Build with: cargo fuzz run byte_string_fuzz (requires nightly and cargo fuzz).

#![cfg_attr(fuzzing, no_main)]

#[cfg(fuzzing)]
use libfuzzer_sys::fuzz_target;

#[cfg(fuzzing)]
fuzz_target!(|data: &[u8]| {
    let s = match std::str::from_utf8(data) {
        Ok(x) => x,
        Err(_) => return,
    };
    let _ = ftval::parse_byte_string(s);
});

#[cfg(not(fuzzing))]
fn main() {
    eprintln!("Build with: cargo fuzz run byte_string_fuzz");
}
