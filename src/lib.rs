// src/lib.rs
//! payload-codec — symmetric payload encryption for string-bridge transports
//!
//! Features:
//! - AES-128/192/256 in CBC (IV-framed envelope) and legacy ECB mode
//! - PKCS#7 padding
//! - base64 flavors for transports that only carry text
//! - typed errors instead of the legacy empty-string sentinel
//! - interface boundary for the platform collaborators (device report,
//!   connectivity probe, store redirect)

pub mod aliases;
pub mod bridge;
pub mod config;
pub mod consts;
pub mod crypto;
pub mod device;
pub mod enums;
pub mod error;
pub mod key_ops;

// Re-export everything users need at the crate root
pub use aliases::PayloadKey;
pub use bridge::{decrypt_base64, decrypt_utf8, encrypt_base64, encrypt_utf8};
pub use config::Config;
pub use crypto::{decrypt, encrypt};
pub use device::{ConnectivityProbe, DeviceInfo, DeviceInfoSource, StoreRedirect};
pub use enums::{EmulatorStatus, Mode, NetworkType};
pub use error::CodecError;
pub use key_ops::{key_from_utf8, key_representations, KeyRepr};
