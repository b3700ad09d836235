use stylus_sdk::alloy_primitives::{Address, U256};

use crate::state::{ArbContext, RegistryValue};

/// Register `val` under the caller's `key`.
///
/// Only writes if the slot is vacant. An occupied slot is left untouched and
/// the call reports failure so the caller knows to use `update` instead.
///
/// # Arguments
///
/// * `ctx`
/// * `owner` - The calling account. Keys are scoped per owner.
/// * `key`
/// * `val` - Registering zero succeeds but leaves the key logically absent,
///   because zero is the vacancy sentinel.
///
pub fn process_register(ctx: &mut ArbContext, owner: Address, key: U256, val: U256) -> bool {
    // Read
    let current = RegistryValue::read_from_slot(ctx, owner, key);

    if current.is_registered() {
        return false;
    }

    // Write
    RegistryValue { value: val }.write_to_slot(ctx, owner, key);

    true
}
