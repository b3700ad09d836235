use stylus_sdk::alloy_primitives::{keccak256, Address, U256};

use super::SlotKey;

/// Storage location for an (owner, key) pair.
///
/// The preimage is the owner address left-padded to a 32 byte word followed
/// by the key word, so every owner gets a disjoint keyspace. Collisions are
/// not handled.
pub struct RegistryKey {
    pub owner: Address,
    pub key: U256,
}

impl SlotKey for RegistryKey {
    fn get_key(&self) -> [u8; 32] {
        let mut bytes = [0u8; 64];
        bytes[12..32].copy_from_slice(self.owner.as_slice());
        bytes[32..64].copy_from_slice(&self.key.to_be_bytes::<32>());

        keccak256(bytes).0
    }
}
