//! The BIP85 deterministic random number generator.
//!
//! SHAKE256 seeded with 64 bytes of derived entropy, read as an
//! unbounded byte stream. Share payloads take one 5-bit symbol per
//! byte, from the high bits.

use sha3::digest::{ExtendableOutput, Update, XofReader};
use sha3::{Shake256, Shake256Reader};

pub struct Drng {
    reader: Shake256Reader,
}

impl Drng {
    pub fn new(entropy: &[u8]) -> Self {
        let mut hasher = Shake256::default();
        hasher.update(entropy);
        Drng {
            reader: hasher.finalize_xof(),
        }
    }

    pub fn read(&mut self, buf: &mut [u8]) {
        self.reader.read(buf);
    }

    /// One GF(32) symbol: the top five bits of the next stream byte.
    pub fn next_symbol(&mut self) -> u8 {
        let mut byte = [0u8; 1];
        self.reader.read(&mut byte);
        byte[0] >> 3
    }
}
