use thiserror::Error;

#[derive(Error, Debug)]
pub enum Codex85Error {
    #[error("invalid character {0:?} in string")]
    InvalidCharacter(char),

    #[error("string mixes upper and lower case")]
    MixedCase,

    #[error("missing or misplaced hrp separator")]
    MissingSeparator,

    #[error("invalid string length: {0}")]
    InvalidLength(usize),

    #[error("threshold symbol {0:?} is not a digit")]
    InvalidThreshold(char),

    #[error("share index {0:?} is invalid: threshold 0 requires the secret index 's'")]
    InvalidShareIndex(char),

    #[error("checksum verification failed")]
    ChecksumMismatch,

    #[error("symbol {0} does not fit in {1} bits")]
    InvalidSymbol(u8, u32),

    #[error("leftover bits do not form a valid final group")]
    InvalidPadding,

    #[error("padding verification failed")]
    PaddingMismatch,

    #[error("share set mixes different hrp, threshold or identifier headers")]
    MixedHeaders,

    #[error("share set mixes different string lengths")]
    MixedLengths,

    #[error("duplicate share index {0:?} in set")]
    DuplicateShareIndex(char),

    #[error("share count {actual} does not match threshold {expected}")]
    WrongShareCount { expected: usize, actual: usize },

    #[error("empty share set")]
    EmptySet,

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("exhausted the share index space after {0} draws")]
    IndexSpaceExhausted(usize),

    #[error("secret payload must be 16-64 bytes, got {0}")]
    SecretLength(usize),

    #[error("hrp mismatch: expected {expected:?}, got {actual:?}")]
    HrpMismatch { expected: String, actual: String },

    #[error("generated share set failed self-check: {0}")]
    SelfCheck(String),

    #[error("BIP32 error: {0}")]
    Bip32(#[from] bitcoin::bip32::Error),

    #[error("secp256k1 error: {0}")]
    Secp(#[from] bitcoin::secp256k1::Error),

    #[error("mnemonic error: {0}")]
    Mnemonic(#[from] bip39::Error),

    #[error("hex error: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Codex85Error>;
