//! Parse field-value text through the type registry and print the raw bytes.
//!
//! Usage: fvparse [--ether|-e | --ipv6|-6] VALUE...
//!
//! Values parse as generic byte strings by default; `--ether` and `--ipv6`
//! select the fixed-length address kinds (IPv6 text must be a literal).

use ftval::{init, lookup, FieldType, FieldTypeId, LiteralResolver};

fn main() -> anyhow::Result<()> {
    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let mut id = FieldTypeId::Bytes;
    if let Some(pos) = args.iter().position(|a| a == "--ether" || a == "-e") {
        args.remove(pos);
        id = FieldTypeId::Ether;
    }
    if let Some(pos) = args.iter().position(|a| a == "--ipv6" || a == "-6") {
        args.remove(pos);
        id = FieldTypeId::Ipv6;
    }
    if args.is_empty() {
        anyhow::bail!("usage: fvparse [--ether|--ipv6] VALUE...");
    }

    init();
    let ftype = lookup(id);
    for arg in &args {
        let mut value = ftype.construct(None);
        ftype.parse_text(&mut value, arg, &LiteralResolver)?;
        let hex: Vec<String> = ftype
            .value_bytes(&value)
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect();
        println!(
            "{}: {} ({} bytes, {})",
            arg,
            hex.join(":"),
            ftype.len(&value),
            ftype.name()
        );
    }
    Ok(())
}
