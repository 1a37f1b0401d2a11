// src/consts.rs
//! Shared constants — cipher geometry and transport names

/// AES block size in bytes.
pub const BLOCK_SIZE: usize = 16;

/// Length of the IV prepended to every CBC envelope. Equals one block.
pub const IV_SIZE: usize = BLOCK_SIZE;

/// Key sizes the cipher accepts (AES-128/192/256).
pub const AES_KEY_SIZES: [usize; 3] = [16, 24, 32];

/// Transformation name the legacy transport uses for CBC payloads.
pub const AES_CBC: &str = "AES/CBC/PKCS5Padding";

/// Transformation name the legacy transport uses for ECB payloads.
pub const AES_ECB: &str = "AES/ECB/PKCS5Padding";

/// Build channel reported when none is configured.
pub const DEFAULT_CHANNEL: &str = "official";
