use stylus_sdk::alloy_primitives::{Address, U256};

use super::{ArbContext, ContextActions, RegistryKey, SlotKey};

/// Value stored in a registry slot.
///
/// A zero word is the "unregistered" sentinel, so a stored value of zero is
/// indistinguishable from an absent slot.
#[derive(Default, Debug, PartialEq)]
pub struct RegistryValue {
    pub value: U256,
}

impl RegistryValue {
    pub fn read_from_slot(ctx: &ArbContext, owner: Address, key: U256) -> Self {
        let slot_key = RegistryKey { owner, key }.get_key();
        let slot = ctx.sload(&slot_key);

        Self::decode(&slot)
    }

    pub fn decode(slot: &[u8; 32]) -> Self {
        RegistryValue {
            value: U256::from_be_bytes(*slot),
        }
    }

    pub fn encode(&self) -> [u8; 32] {
        self.value.to_be_bytes::<32>()
    }

    pub fn write_to_slot(&self, ctx: &mut ArbContext, owner: Address, key: U256) {
        ctx.sstore(&RegistryKey { owner, key }.get_key(), &self.encode());
    }

    /// Whether the slot holds a registered entry
    pub fn is_registered(&self) -> bool {
        !self.value.is_zero()
    }
}
