/*!
Cartridge image split into a 16-byte header and a flat 32 KiB PRG window.

Image layout:
- bytes [0, 16): header (kept verbatim; not consulted by the core)
- bytes [16, 16 + 32768): PRG ROM, mapped 1:1 onto CPU $8000-$FFFF

Notes:
- No mapper or bank switching; anything past the PRG window is ignored.
- The header usually starts with the iNES magic `NES<1A>`, but the core does not
  require it. `has_ines_magic` exists for hosts that want to check.
*/

use log::debug;

use crate::error::{EmuError, Result};

/// Size of the cartridge header in bytes.
pub const HEADER_SIZE: usize = 0x10;
/// Size of the PRG window mapped at $8000-$FFFF.
pub const PRG_ROM_SIZE: usize = 0x8000;
/// Minimum accepted image length.
pub const IMAGE_MIN_SIZE: usize = HEADER_SIZE + PRG_ROM_SIZE;

pub struct Cartridge {
    header: [u8; HEADER_SIZE],
    prg_rom: Box<[u8; PRG_ROM_SIZE]>,
}

impl std::fmt::Debug for Cartridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cartridge")
            .field("header", &self.header)
            .field("prg_rom_len", &self.prg_rom.len())
            .finish()
    }
}

impl Cartridge {
    /// Split a raw image into header and PRG window.
    ///
    /// Fails with `ImageTooShort` when fewer than `IMAGE_MIN_SIZE` bytes are supplied.
    pub fn from_image_bytes(data: &[u8]) -> Result<Self> {
        if data.len() < IMAGE_MIN_SIZE {
            return Err(EmuError::ImageTooShort {
                len: data.len(),
                required: IMAGE_MIN_SIZE,
            });
        }

        let mut header = [0u8; HEADER_SIZE];
        header.copy_from_slice(&data[..HEADER_SIZE]);

        let mut prg_rom = Box::new([0u8; PRG_ROM_SIZE]);
        prg_rom.copy_from_slice(&data[HEADER_SIZE..IMAGE_MIN_SIZE]);

        if data.len() > IMAGE_MIN_SIZE {
            debug!(
                "cartridge image has {} trailing bytes past the PRG window; ignored",
                data.len() - IMAGE_MIN_SIZE
            );
        }

        Ok(Self { header, prg_rom })
    }

    pub fn header(&self) -> &[u8; HEADER_SIZE] {
        &self.header
    }

    /// True if the header starts with `NES<1A>`.
    pub fn has_ines_magic(&self) -> bool {
        &self.header[0..4] == b"NES\x1A"
    }

    /// Read a PRG byte for a CPU address in $8000-$FFFF.
    #[inline]
    pub fn cpu_read(&self, addr: u16) -> u8 {
        self.prg_rom[(addr as usize) & (PRG_ROM_SIZE - 1)]
    }
}
