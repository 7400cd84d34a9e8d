//! Finite Word Memory.
//!
//! A fixed-capacity array of 32-bit words addressed by `addr >> 2`. Misaligned
//! addresses are not faulted: the low two bits are simply dropped. Reads past
//! the end return zero; writes past the end are discarded.

use tracing::warn;

use crate::common::constants::WORD_ADDR_SHIFT;
use crate::common::error::SimError;
use crate::soc::traits::{DataMemory, InstructionMemory};

/// Word-addressed memory array.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordMemory {
    words: Vec<u32>,
}

impl WordMemory {
    /// Creates a zero-filled memory holding `capacity` words.
    pub fn new(capacity: usize) -> Self {
        Self {
            words: vec![0; capacity],
        }
    }

    /// Creates a memory of `capacity` words with `image` loaded at address 0.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::ImageTooLarge`] if the image does not fit.
    pub fn from_words(capacity: usize, image: &[u32]) -> Result<Self, SimError> {
        if image.len() > capacity {
            return Err(SimError::ImageTooLarge {
                words: image.len(),
                capacity,
            });
        }
        let mut mem = Self::new(capacity);
        mem.words[..image.len()].copy_from_slice(image);
        Ok(mem)
    }

    /// Capacity in words.
    pub fn capacity(&self) -> usize {
        self.words.len()
    }

    /// Word index addressed by `addr`.
    #[inline]
    const fn index(addr: u32) -> usize {
        (addr >> WORD_ADDR_SHIFT) as usize
    }

    /// Returns the word at `addr`, or 0 past the end.
    #[inline]
    pub fn load(&self, addr: u32) -> u32 {
        self.words.get(Self::index(addr)).copied().unwrap_or(0)
    }

    /// Stores `data` at `addr`; out-of-range stores are dropped.
    pub fn store(&mut self, addr: u32, data: u32) {
        match self.words.get_mut(Self::index(addr)) {
            Some(slot) => *slot = data,
            None => warn!(
                addr = format_args!("{addr:#010x}"),
                capacity = self.words.len(),
                "store outside data memory dropped"
            ),
        }
    }

    /// Read-only view of the backing words.
    pub fn as_words(&self) -> &[u32] {
        &self.words
    }
}

impl InstructionMemory for WordMemory {
    fn read(&self, addr: u32) -> u32 {
        self.load(addr)
    }
}

impl DataMemory for WordMemory {
    fn read(&self, addr: u32) -> u32 {
        self.load(addr)
    }

    fn write(&mut self, addr: u32, data: u32) {
        self.store(addr, data);
    }
}
