//! Retained memory abstractions
//!
//! A retained word is a 32-bit cell in RAM that the runtime never
//! initializes or zero-fills. Its content survives a watchdog or software
//! reset, but not a loss of supply. After a true power-up it holds
//! whatever garbage the SRAM settled to.

/// A single word of reset-surviving RAM
///
/// Implementations must perform real memory accesses (volatile on target)
/// so that a write immediately before a reset is not optimized away.
pub trait RetainedWord {
    /// Read the raw word
    fn read(&self) -> u32;

    /// Write the raw word
    fn write(&mut self, value: u32);
}

impl<W: RetainedWord + ?Sized> RetainedWord for &mut W {
    fn read(&self) -> u32 {
        (**self).read()
    }

    fn write(&mut self, value: u32) {
        (**self).write(value)
    }
}
