//! Shared test utilities for building flat 32 KiB cartridge images.
//!
//! Image layout produced here:
//! - bytes[0..4]   = b"NES\x1A" (the core ignores the header, but real images carry it)
//! - byte 4        = 2 (PRG size in 16 KiB units)
//! - bytes 5..16   = zero padding
//! - bytes[16..]   = 32 KiB PRG window mapped at $8000-$FFFF
//!
//! Vectors live at PRG offsets 0x7FFA..=0x7FFF (CPU $FFFA-$FFFF).

#![allow(dead_code)]

use crate::cartridge::{HEADER_SIZE, PRG_ROM_SIZE};

/// Build an image with `program` placed at PRG offset 0 ($8000) and the
/// RESET vector pointing at `reset`.
pub fn build_image(program: &[u8], reset: u16) -> Vec<u8> {
    build_image_at(&[(0x8000, program)], reset)
}

/// Build an image from `(cpu_address, bytes)` chunks. Addresses must lie in
/// $8000-$FFFF. Unused PRG bytes are zero.
pub fn build_image_at(chunks: &[(u16, &[u8])], reset: u16) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(HEADER_SIZE + PRG_ROM_SIZE);
    bytes.extend_from_slice(b"NES\x1A");
    bytes.push(2);
    bytes.extend(std::iter::repeat_n(0u8, HEADER_SIZE - 5));
    bytes.extend(std::iter::repeat_n(0u8, PRG_ROM_SIZE));

    for (addr, chunk) in chunks {
        assert!(*addr >= 0x8000, "chunk must be inside the PRG window");
        let start = HEADER_SIZE + (*addr as usize - 0x8000);
        bytes[start..start + chunk.len()].copy_from_slice(chunk);
    }

    write_le_u16(&mut bytes, HEADER_SIZE + 0x7FFC, reset);
    bytes
}

#[inline]
fn write_le_u16(buf: &mut [u8], offset: usize, value: u16) {
    buf[offset] = (value & 0x00FF) as u8;
    buf[offset + 1] = (value >> 8) as u8;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_image_with_vector() {
        let img = build_image(&[0xA9, 0x01, 0x02], 0x9000);
        assert_eq!(img.len(), HEADER_SIZE + PRG_ROM_SIZE);
        assert_eq!(&img[0..4], b"NES\x1A");
        assert_eq!(img[HEADER_SIZE], 0xA9);
        assert_eq!(img[HEADER_SIZE + 0x7FFC], 0x00);
        assert_eq!(img[HEADER_SIZE + 0x7FFD], 0x90);
    }

    #[test]
    fn places_chunks_at_cpu_addresses() {
        let img = build_image_at(&[(0x8000, &[0x20, 0x00, 0x90]), (0x9000, &[0x60])], 0x8000);
        assert_eq!(img[HEADER_SIZE + 0x1000], 0x60);
    }
}
