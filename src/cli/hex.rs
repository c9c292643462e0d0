//! The raw hex application (number 128169').
//!
//! Path layout: 83696968'/128169'/num_bytes'/index'.

use bitcoin::bip32::Xpriv;

use crate::entropy::{derive_entropy, hardened_path, BIP85_PURPOSE};
use crate::error::{Codex85Error, Result};

pub fn derive_hex(master: &Xpriv, num_bytes: usize, index: u32) -> Result<String> {
    if num_bytes < 16 || num_bytes > 64 {
        return Err(Codex85Error::InvalidParameter(format!(
            "byte count must be 16-64, got {}",
            num_bytes
        )));
    }
    let path = hardened_path(&[BIP85_PURPOSE, 128169, num_bytes as u32, index])?;
    let entropy = derive_entropy(master, &path)?;
    Ok(hex::encode(&entropy[..num_bytes]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::parse_xprv;

    const XPRV: &str = "xprv9s21ZrQH143K2LBWUUQRFXhucrQqBpKdRRxNVq2zBqsx8HVqFk2uYo8kmbaLLHRdqtQpUm98uKfu3vca1LqdGhUtyoFnCNkfmXRyPXLjbKb";

    #[test]
    fn test_thirty_two_bytes() {
        let master = parse_xprv(XPRV).unwrap();
        assert_eq!(
            derive_hex(&master, 32, 0).unwrap(),
            "ea3ceb0b02ee8e587779c63f4b7b3a21e950a213f1ec53cab608d13e8796e6dc"
        );
    }

    #[test]
    fn test_sixty_four_bytes() {
        let master = parse_xprv(XPRV).unwrap();
        assert_eq!(
            derive_hex(&master, 64, 0).unwrap(),
            "492db4698cf3b73a5a24998aa3e9d7fa96275d85724a91e71aa2d645442f8785\
             55d078fd1f1f67e368976f04137b1f7a0d19232136ca50c44614af72b5582a5c"
        );
        assert_eq!(
            derive_hex(&master, 64, 1234).unwrap(),
            "61d3c182f7388268463ef327c454a10bc01b3992fa9d2ee1b3891a6b487a5248\
             793e61271066be53660d24e8cb76ff0cfdd0e84e478845d797324c195df9ab8e"
        );
    }

    #[test]
    fn test_byte_count_bounds() {
        let master = parse_xprv(XPRV).unwrap();
        assert!(derive_hex(&master, 15, 0).is_err());
        assert!(derive_hex(&master, 65, 0).is_err());
        assert!(derive_hex(&master, 16, 0).is_ok());
    }
}
