use crate::data::WorthRange;

// Net-worth color ramp, poorest to richest (red through amber to green).
pub const NET_WORTH_COLORS: [[u8; 3]; 15] = [
    [0xef, 0x30, 0x22],
    [0xf0, 0x4c, 0x34],
    [0xf2, 0x61, 0x32],
    [0xf4, 0x7f, 0x30],
    [0xf6, 0x8f, 0x32],
    [0xf9, 0x9d, 0x31],
    [0xfd, 0xba, 0x36],
    [0xfd, 0xca, 0x35],
    [0xff, 0xd9, 0x3b],
    [0xee, 0xe9, 0x37],
    [0xd5, 0xdf, 0x31],
    [0xb0, 0xce, 0x34],
    [0x7c, 0xb6, 0x43],
    [0x5d, 0xab, 0x46],
    [0x3a, 0x9f, 0x48],
];

/// Palette bucket for a net worth, normalized against the observed range.
/// The minimum maps to bucket 0, the maximum to the last bucket, and a
/// degenerate range (all items equal) maps everything to bucket 0.
#[inline]
pub fn worth_bucket(net_worth: f64, range: WorthRange) -> usize {
    let span = range.max - range.min;
    if span <= 0.0 {
        return 0;
    }
    let last = NET_WORTH_COLORS.len() as isize - 1;
    let idx = ((net_worth - range.min) / span * last as f64).floor() as isize;
    idx.clamp(0, last) as usize
}

/// Bucket color as linear-ish RGB in [0, 1] for the renderer.
#[inline]
pub fn worth_color(bucket: usize) -> [f32; 3] {
    let [r, g, b] = NET_WORTH_COLORS[bucket.min(NET_WORTH_COLORS.len() - 1)];
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0]
}
