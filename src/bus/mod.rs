/*!
Bus abstraction mapping the CPU address space to RAM and the cartridge PRG window.

Address map (CPU):
- $0000-$07FF: 2 KiB internal RAM
- $0800-$7FFF: mirrors of $0000-$07FF (mask with & 0x07FF)
- $8000-$FFFF: cartridge PRG ROM (flat 32 KiB, read-only)

Notes:
- The address space is total: every address reads a byte and accepts a write.
- Writes to $8000-$FFFF are dropped.
- With no cartridge attached the PRG window reads as 0.
- I/O registers (PPU/APU/controllers) are not decoded; those addresses fall
  into the RAM mirror.
*/

pub mod ram;

use log::debug;

use crate::cartridge::Cartridge;
use crate::error::Result;
pub use ram::{CPU_RAM_SIZE, Ram};

/// Start of the cartridge PRG window.
pub const PRG_WINDOW_START: u16 = 0x8000;

#[derive(Debug, Default)]
pub struct Bus {
    ram: Ram,
    cartridge: Option<Cartridge>,
}

impl Bus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Split `bytes` into header + PRG and map the PRG at $8000.
    ///
    /// On failure the previously attached cartridge (if any) is kept.
    pub fn load_image(&mut self, bytes: &[u8]) -> Result<()> {
        let cart = Cartridge::from_image_bytes(bytes)?;
        debug!(
            "loaded cartridge image ({} bytes, iNES magic: {})",
            bytes.len(),
            cart.has_ines_magic()
        );
        self.attach_cartridge(cart);
        Ok(())
    }

    pub fn attach_cartridge(&mut self, cart: Cartridge) {
        self.cartridge = Some(cart);
    }

    pub fn has_image(&self) -> bool {
        self.cartridge.is_some()
    }

    /// The 16-byte header of the attached image, if any.
    pub fn header(&self) -> Option<&[u8; 16]> {
        self.cartridge.as_ref().map(Cartridge::header)
    }

    // -----------------------------
    // CPU-visible memory interface
    // -----------------------------

    pub fn read(&self, addr: u16) -> u8 {
        if addr < PRG_WINDOW_START {
            return self.ram.read(addr);
        }
        match &self.cartridge {
            Some(cart) => cart.cpu_read(addr),
            None => 0,
        }
    }

    pub fn write(&mut self, addr: u16, value: u8) {
        // PRG ROM is read-only
        if addr < PRG_WINDOW_START {
            self.ram.write(addr, value);
        }
    }

    /// Read a little-endian word (low byte at `addr`, high byte at `addr + 1`).
    pub fn read_word(&self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }
}
