use stylus_sdk::alloy_primitives::{Address, U256};

use crate::state::{ArbContext, RegistryValue};

/// Overwrite the caller's entry at `key` with `val`.
///
/// Returns false if the key was never registered. Updating to zero succeeds
/// but logically unregisters the key, since zero is the vacancy sentinel.
pub fn process_update(ctx: &mut ArbContext, owner: Address, key: U256, val: U256) -> bool {
    let current = RegistryValue::read_from_slot(ctx, owner, key);

    if !current.is_registered() {
        return false;
    }

    RegistryValue { value: val }.write_to_slot(ctx, owner, key);

    true
}
