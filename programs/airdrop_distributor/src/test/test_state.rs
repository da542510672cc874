#[cfg(test)]
mod tests {
    use crate::constants::*;
    use crate::state::{Airdrop, ClaimReceipt};

    #[test]
    fn test_allocation_pools_sum_to_total_supply() {
        let total = AIRDROP_POOL + DEV_POOL + LIQUIDITY_POOL + TREASURY_POOL;
        assert_eq!(total, TOTAL_SUPPLY);
    }

    #[test]
    fn test_unset_root_means_not_configured() {
        let mut airdrop = Airdrop::default();
        assert!(!airdrop.is_configured());

        airdrop.merkle_root = [7u8; 32];
        assert!(airdrop.is_configured());
    }

    #[test]
    fn test_claim_period_boundary() {
        let airdrop = Airdrop {
            claim_period_ends: 1_700_000_000,
            ..Default::default()
        };

        // The deadline itself is still inside the period
        assert!(!airdrop.claim_period_over(1_699_999_999));
        assert!(!airdrop.claim_period_over(1_700_000_000));
        assert!(airdrop.claim_period_over(1_700_000_001));
    }

    #[test]
    fn test_receipt_defaults_to_unclaimed() {
        let receipt = ClaimReceipt::default();
        assert!(!receipt.claimed);
        assert_eq!(receipt.amount, 0);
    }

    #[test]
    fn test_account_sizes_cover_discriminator() {
        assert!(Airdrop::LEN > 8 + 32 * 6 + 8 * 4);
        assert!(ClaimReceipt::LEN > 8);
    }
}
