/// Packs the integer part of a `DATETIME2` field (5 bytes, biased).
#[allow(dead_code)]
pub fn datetime2(
    year: u64,
    month: u64,
    day: u64,
    hour: u64,
    minute: u64,
    second: u64,
) -> Vec<u8> {
    let ymd = ((year * 13 + month) << 5) | day;
    let hms = (hour << 12) | (minute << 6) | second;
    let packed = ((ymd << 17) | hms) + 0x80_0000_0000;

    packed.to_be_bytes()[3..].to_vec()
}

/// Packs the integer part of a `TIME2` field (3 bytes, biased).
#[allow(dead_code)]
pub fn time2(negative: bool, hour: i64, minute: i64, second: i64) -> Vec<u8> {
    let hms = (hour << 12) | (minute << 6) | second;
    let stored = if negative { 0x80_0000 - hms } else { 0x80_0000 + hms };

    stored.to_be_bytes()[5..].to_vec()
}

/// Appends a big-endian fraction of `width` bytes.
#[allow(dead_code)]
pub fn with_fraction(mut field: Vec<u8>, raw: u32, width: usize) -> Vec<u8> {
    field.extend_from_slice(&raw.to_be_bytes()[4 - width..]);
    field
}
