/// Bits per register.
const REGISTER_BITS: u32 = 6;
const REGISTER_MASK: u32 = (1 << REGISTER_BITS) - 1;
/// Registers packed into each `u32` word. The top two bits stay unused.
const REGISTERS_PER_WORD: usize = 5;

/// A dense array of six-bit registers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Registers {
    words: Vec<u32>,
    len: usize,
}

#[inline]
fn locate(idx: usize) -> (usize, u32) {
    (
        idx / REGISTERS_PER_WORD,
        (idx % REGISTERS_PER_WORD) as u32 * REGISTER_BITS,
    )
}

impl Registers {
    pub fn new(len: usize) -> Registers {
        Registers {
            words: vec![0; len.div_ceil(REGISTERS_PER_WORD)],
            len,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn get(&self, idx: usize) -> u8 {
        let (word, shift) = locate(idx);
        ((self.words[word] >> shift) & REGISTER_MASK) as u8
    }

    /// Store `value`, truncated to six bits.
    #[inline]
    pub fn set(&mut self, idx: usize, value: u8) {
        let (word, shift) = locate(idx);
        let w = &mut self.words[word];
        *w = (*w & !(REGISTER_MASK << shift)) | ((u32::from(value) & REGISTER_MASK) << shift);
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0..self.len).map(move |idx| self.get(idx))
    }
}
