//! src/core/sm3.rs
//! SM3 hash (GB/T 32905-2016): padding, message expansion, 64-round compression.
//! All word arithmetic is mod 2^32; rotations are circular left shifts.

use crate::core::error::CoreError;

pub const IV: [u32; 8] = [
    0x7380_166F, 0x4914_B2B9, 0x1724_42D7, 0xDA8A_0600,
    0xA96F_30BC, 0x1631_38AA, 0xE38D_EE4D, 0xB0FB_0E4E,
];

const T_EARLY: u32 = 0x79CC_4519; // rounds 0..=15
const T_LATE: u32 = 0x7A87_9D8A; // rounds 16..=63

#[inline]
fn rotl(x: u32, n: u32) -> u32 {
    x.rotate_left(n % 32)
}

#[inline]
fn ff(x: u32, y: u32, z: u32, j: usize) -> u32 {
    if j <= 15 { x ^ y ^ z } else { (x & y) | (x & z) | (y & z) }
}

#[inline]
fn gg(x: u32, y: u32, z: u32, j: usize) -> u32 {
    if j <= 15 { x ^ y ^ z } else { (x & y) | (!x & z) }
}

#[inline]
fn p0(x: u32) -> u32 {
    x ^ rotl(x, 9) ^ rotl(x, 17)
}

#[inline]
fn p1(x: u32) -> u32 {
    x ^ rotl(x, 15) ^ rotl(x, 23)
}

/// Pad `data` out to a multiple of 64 bytes: 0x80 sentinel, zero fill that
/// leaves exactly 8 bytes free in the last block, then the bit length as a
/// big-endian u64. Padding is never skipped, so empty input still yields one
/// full block.
fn pad(data: &[u8]) -> Vec<u8> {
    let bit_len = (data.len() as u64) << 3;
    let remainder = (data.len() + 1) % 64;
    let zeros = if remainder < 56 { 56 - remainder } else { 120 - remainder };

    let mut padded = Vec::with_capacity(data.len() + 1 + zeros + 8);
    padded.extend_from_slice(data);
    padded.push(0x80);
    padded.resize(padded.len() + zeros, 0);
    padded.extend_from_slice(&bit_len.to_be_bytes());
    debug_assert_eq!(padded.len() % 64, 0);
    padded
}

/// Expand one 16-word block into the 68-word W and 64-word W' schedules.
fn expand(block: &[u32; 16]) -> ([u32; 68], [u32; 64]) {
    let mut w = [0u32; 68];
    w[..16].copy_from_slice(block);
    for i in 16..68 {
        w[i] = p1(w[i - 16] ^ w[i - 9] ^ rotl(w[i - 3], 15)) ^ rotl(w[i - 13], 7) ^ w[i - 6];
    }
    let mut w1 = [0u32; 64];
    for i in 0..64 {
        w1[i] = w[i] ^ w[i + 4];
    }
    (w, w1)
}

/// Compression function: fold one block into the chaining state. The final
/// XOR against the incoming state is part of the construction, not cleanup.
fn compress(v: [u32; 8], block: &[u32; 16]) -> [u32; 8] {
    let (w, w1) = expand(block);
    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = v;

    for j in 0..64 {
        let t = if j <= 15 { T_EARLY } else { T_LATE };
        let ss1 = rotl(
            rotl(a, 12).wrapping_add(e).wrapping_add(rotl(t, j as u32)),
            7,
        );
        let ss2 = ss1 ^ rotl(a, 12);
        let tt1 = ff(a, b, c, j)
            .wrapping_add(d)
            .wrapping_add(ss2)
            .wrapping_add(w1[j]);
        let tt2 = gg(e, f, g, j)
            .wrapping_add(h)
            .wrapping_add(ss1)
            .wrapping_add(w[j]);
        d = c;
        c = rotl(b, 9);
        b = a;
        a = tt1;
        h = g;
        g = rotl(f, 19);
        f = e;
        e = p0(tt2);
    }

    [
        a ^ v[0], b ^ v[1], c ^ v[2], d ^ v[3],
        e ^ v[4], f ^ v[5], g ^ v[6], h ^ v[7],
    ]
}

/// Hash `data` and return the digest as 64 lowercase hex characters.
///
/// Rejects inputs whose bit length does not fit the 64-bit length field
/// (>= 2^61 bytes) instead of silently hashing a truncated count.
pub fn digest_hex(data: &[u8]) -> Result<String, CoreError> {
    if (data.len() as u128) << 3 > u64::MAX as u128 {
        return Err(CoreError::invalid_input(
            "input too large for SM3 64-bit length field",
        ));
    }

    let padded = pad(data);
    let mut v = IV;
    for chunk in padded.chunks_exact(64) {
        let mut block = [0u32; 16];
        for (word, bytes) in block.iter_mut().zip(chunk.chunks_exact(4)) {
            *word = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        }
        v = compress(v, &block);
    }

    let mut out = String::with_capacity(64);
    for word in v {
        out.push_str(&format!("{:08x}", word));
    }
    Ok(out)
}
