// src/consts.rs
//! Shared constants — alphabet and parameter defaults

/// The 27-symbol alphabet in cipher order: A–N, Ñ, O–Z
pub const ALPHABET: [char; 27] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'Ñ', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Number of symbols in [`ALPHABET`]
pub const ALPHABET_LEN: usize = ALPHABET.len();

/// Position of Ñ in [`ALPHABET`]
pub const ENYE_POSITION: usize = 14;

/// Number of Latin letters (A–Z, without Ñ)
pub const LATIN_LEN: usize = 26;

/// Smallest accepted Caesar shift
pub const MIN_SHIFT: i64 = 1;

/// Largest accepted Caesar shift
pub const MAX_SHIFT: i64 = 25;

/// Caesar shift used when the supplied one is missing or out of range
pub const DEFAULT_SHIFT: i64 = 3;

/// ROT13 rotation over the Latin letters
pub const ROT13_SHIFT: i64 = 13;

/// Keyword used when the cleaned Vigenère keyword is empty (net shift 0)
pub const FALLBACK_KEYWORD: &str = "A";

/// Environment variable naming the config file
pub const CONFIG_ENV_VAR: &str = "CIPHER_CONFIG";

/// Config file looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "cipher.toml";

/// Sub-directory of the platform config dir holding `config.toml`
pub const CONFIG_DIR_NAME: &str = "classical-cipher";
