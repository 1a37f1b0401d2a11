// src/enums.rs
//! Public enum types used throughout the crate
//!
//! Central location for all #[derive(...)] enums that represent
//! user-visible choices: cipher modes, connectivity states, etc.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{AES_CBC, AES_ECB};
use crate::error::CodecError;

/// Block-cipher chaining mode, selecting framing and security properties.
///
/// CBC is the default. ECB is deterministic and leaks plaintext structure;
/// it exists only for payloads the legacy transport already framed that way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[non_exhaustive]
pub enum Mode {
    #[default]
    Cbc,
    Ecb,
    // Future:
    // Gcm,
}

impl Mode {
    /// Transformation name carried by the legacy transport.
    pub fn transformation(self) -> &'static str {
        match self {
            Mode::Cbc => AES_CBC,
            Mode::Ecb => AES_ECB,
        }
    }

    /// Whether envelopes of this mode start with an IV block.
    pub fn requires_iv(self) -> bool {
        matches!(self, Mode::Cbc)
    }
}

impl FromStr for Mode {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            AES_CBC => Ok(Mode::Cbc),
            AES_ECB => Ok(Mode::Ecb),
            other => Err(CodecError::Cipher(format!(
                "unsupported transformation: {other}"
            ))),
        }
    }
}

/// Connectivity classification reported by the network probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NetworkType {
    Wifi,
    Mobile,
    #[default]
    Unknown,
}

/// Best-effort emulator detection result. Platform probes are heuristics,
/// so `Unknown` is a first-class answer, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EmulatorStatus {
    Yes,
    No,
    #[default]
    Unknown,
}
