//! Context to EVM storage opcodes (SSTORE and SLOAD).
//! Emulated in tests with a HashMap.
//!
//! Storage is independent of endian format. Bytes are read in the exact
//! format as they are stored.

#[cfg(test)]
use std::collections::HashMap;

// `stylus-sdk` 0.4.3 only binds `storage_load_bytes32`/`storage_store_bytes32`
// in its `hostio` module; the cache/flush VM hooks this crate uses are declared
// directly here, matching the reference `src/hostio.rs` bindings.
#[cfg(not(test))]
mod hostio {
    pub use stylus_sdk::hostio::storage_load_bytes32;

    #[link(wasm_import_module = "vm_hooks")]
    extern "C" {
        pub fn storage_cache_bytes32(key: *const u8, value: *const u8);
        pub fn storage_flush_cache(clear: bool);
    }
}

pub struct ArbContext {
    #[cfg(test)]
    inner: HashMap<[u8; 32], [u8; 32]>,
}

pub trait ContextActions {
    fn new() -> Self;

    fn sstore(&mut self, key: &[u8; 32], value: &[u8; 32]);

    fn sload(&self, key: &[u8; 32]) -> [u8; 32];

    fn storage_flush_cache(clear: bool);
}

#[cfg(test)]
impl ContextActions for ArbContext {
    fn new() -> Self {
        ArbContext {
            inner: HashMap::new(),
        }
    }

    fn sstore(&mut self, key: &[u8; 32], value: &[u8; 32]) {
        self.inner.insert(*key, *value);
    }

    fn sload(&self, key: &[u8; 32]) -> [u8; 32] {
        *self.inner.get(key).unwrap_or(&[0u8; 32])
    }

    fn storage_flush_cache(_clear: bool) {}
}

#[cfg(not(test))]
impl ContextActions for ArbContext {
    fn new() -> Self {
        ArbContext {}
    }

    fn sstore(&mut self, key: &[u8; 32], value: &[u8; 32]) {
        unsafe { hostio::storage_cache_bytes32(key.as_ptr(), value.as_ptr()) };
    }

    // important: call hostio::storage_flush_cache() before exiting or calling other contracts
    fn sload(&self, key: &[u8; 32]) -> [u8; 32] {
        let mut value = [0u8; 32];
        unsafe { hostio::storage_load_bytes32(key.as_ptr(), value.as_mut_ptr()) };

        value
    }

    fn storage_flush_cache(clear: bool) {
        unsafe { hostio::storage_flush_cache(clear) };
    }
}

#[cfg(not(test))]
impl Drop for ArbContext {
    fn drop(&mut self) {
        // Write cache to slot
        unsafe { hostio::storage_flush_cache(false) };
    }
}

pub trait SlotKey {
    fn get_key(&self) -> [u8; 32];
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_write_and_read() {
        let mut ctx = ArbContext::new();

        let key = &[1u8; 32];
        let mut value = [0u8; 32];
        value[31] = 0x2a;

        assert_eq!(ctx.sload(key), [0u8; 32]);

        ctx.sstore(key, &value);
        assert_eq!(ctx.sload(key), value);
    }
}
