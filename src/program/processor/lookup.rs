use stylus_sdk::alloy_primitives::{Address, U256};

use crate::state::{ArbContext, RegistryValue};

/// Raw stored value for any owner's `key`. Zero doubles as "absent", there
/// is no boolean wrapping.
///
/// Serves both getters: `get_own_val` passes the caller as `owner`.
pub fn process_get_val(ctx: &ArbContext, owner: Address, key: U256) -> U256 {
    RegistryValue::read_from_slot(ctx, owner, key).value
}
