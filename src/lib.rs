#![cfg_attr(not(test), no_main)]
#![cfg_attr(not(test), no_std)]
extern crate alloc;

#[global_allocator]
static ALLOC: mini_alloc::MiniAlloc = mini_alloc::MiniAlloc::INIT;

use alloc::vec::Vec;

use stylus_sdk::{
    alloy_primitives::{Address, U256},
    msg,
    prelude::*,
};

use program::processor::{lookup, register, unregister, update};
use state::{ArbContext, ContextActions};

pub mod program;
pub mod state;

// `alloy-primitives` is pulled in with its `native-keccak` feature (via
// `stylus-sdk`), so `keccak256` lowers to the `native_keccak256` VM hook.
// Native test binaries have no VM, so provide the symbol with a software
// keccak (matching the reference `src/hostio.rs` test emulation).
#[cfg(test)]
#[no_mangle]
unsafe extern "C" fn native_keccak256(bytes: *const u8, len: usize, output: *mut u8) {
    use tiny_keccak::{Hasher, Keccak};

    let input = core::slice::from_raw_parts(bytes, len);
    let mut hasher = Keccak::v256();
    hasher.update(input);
    let mut result = [0u8; 32];
    hasher.finalize(&mut result);
    core::slice::from_raw_parts_mut(output, 32).copy_from_slice(&result);
}

sol_storage! {
    #[entrypoint]
    pub struct KeyRegistry {}
}

#[external]
impl KeyRegistry {
    /// Claim a vacant key for the caller. Returns false if the key is
    /// already registered- use `update` to change an existing value.
    pub fn register(&mut self, key: U256, val: U256) -> Result<bool, Vec<u8>> {
        let mut ctx = ArbContext::new();
        let registered = register::process_register(&mut ctx, msg::sender(), key, val);
        ArbContext::storage_flush_cache(false);

        Ok(registered)
    }

    /// Clear the caller's entry. Returns false if there was nothing to clear.
    pub fn unregister(&mut self, key: U256) -> Result<bool, Vec<u8>> {
        let mut ctx = ArbContext::new();
        let unregistered = unregister::process_unregister(&mut ctx, msg::sender(), key);
        ArbContext::storage_flush_cache(false);

        Ok(unregistered)
    }

    /// Overwrite the caller's existing entry. Returns false if the key was
    /// never registered.
    pub fn update(&mut self, key: U256, val: U256) -> Result<bool, Vec<u8>> {
        let mut ctx = ArbContext::new();
        let updated = update::process_update(&mut ctx, msg::sender(), key, val);
        ArbContext::storage_flush_cache(false);

        Ok(updated)
    }

    /// Stored value under the caller's own key. Zero means unregistered.
    pub fn get_own_val(&self, key: U256) -> Result<U256, Vec<u8>> {
        let ctx = ArbContext::new();

        Ok(lookup::process_get_val(&ctx, msg::sender(), key))
    }

    /// Stored value under any owner's key. Zero means unregistered.
    pub fn get_val(&self, owner: Address, key: U256) -> Result<U256, Vec<u8>> {
        let ctx = ArbContext::new();

        Ok(lookup::process_get_val(&ctx, owner, key))
    }
}
