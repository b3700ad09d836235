use stylus_sdk::alloy_primitives::{Address, U256};

use crate::state::{ArbContext, RegistryValue};

/// Clear the caller's entry at `key` by storing the zero sentinel.
///
/// Returns false if there was nothing to unregister. The slot is overwritten,
/// never physically removed.
pub fn process_unregister(ctx: &mut ArbContext, owner: Address, key: U256) -> bool {
    let current = RegistryValue::read_from_slot(ctx, owner, key);

    if !current.is_registered() {
        return false;
    }

    RegistryValue::default().write_to_slot(ctx, owner, key);

    true
}

#[cfg(test)]
mod test {
    use stylus_sdk::alloy_primitives::{address, Address, U256};

    use crate::program::processor::register::process_register;
    use crate::state::{ArbContext, ContextActions, RegistryValue};

    use super::process_unregister;

    const OWNER: Address = address!("1111111111111111111111111111111111111111");

    #[test]
    fn test_unregister_clears_slot() {
        let mut ctx = ArbContext::new();
        let key = U256::from(1);

        assert!(process_register(&mut ctx, OWNER, key, U256::from(5)));

        assert!(process_unregister(&mut ctx, OWNER, key));
        assert_eq!(
            RegistryValue::read_from_slot(&ctx, OWNER, key).value,
            U256::ZERO
        );
    }

    #[test]
    fn test_unregister_vacant_key_fails() {
        let mut ctx = ArbContext::new();

        assert!(!process_unregister(&mut ctx, OWNER, U256::from(1)));
    }

    #[test]
    fn test_double_unregister_fails() {
        let mut ctx = ArbContext::new();
        let key = U256::from(1);

        assert!(process_register(&mut ctx, OWNER, key, U256::from(5)));
        assert!(process_unregister(&mut ctx, OWNER, key));

        assert!(!process_unregister(&mut ctx, OWNER, key));
    }

    #[test]
    fn test_unregistered_key_can_be_registered_again() {
        let mut ctx = ArbContext::new();
        let key = U256::from(1);

        assert!(process_register(&mut ctx, OWNER, key, U256::from(5)));
        assert!(process_unregister(&mut ctx, OWNER, key));

        assert!(process_register(&mut ctx, OWNER, key, U256::from(6)));
        assert_eq!(
            RegistryValue::read_from_slot(&ctx, OWNER, key).value,
            U256::from(6)
        );
    }
}
