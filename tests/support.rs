// tests/support.rs
//! Shared test utilities — fixed keys and logging setup

use payload_codec::aliases::PayloadKey;
use payload_codec::key_ops::key_from_utf8;

/// 16-byte ASCII key used across the suite
#[allow(dead_code)]
pub const KEY_128: &str = "0123456789abcdef";

/// 24-byte key
#[allow(dead_code)]
pub const KEY_192: &str = "0123456789abcdef01234567";

/// 32-byte key
#[allow(dead_code)]
pub const KEY_256: &str = "0123456789abcdef0123456789abcdef";

#[allow(dead_code)]
pub fn key_128() -> PayloadKey {
    key_from_utf8(KEY_128)
}

#[allow(dead_code)]
pub fn key_256() -> PayloadKey {
    key_from_utf8(KEY_256)
}

/// Initialize test-friendly logging. Idempotent, safe to call per test.
#[allow(dead_code)]
pub fn setup() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer())
        .with(EnvFilter::from_default_env())
        .try_init()
        .ok();
}
