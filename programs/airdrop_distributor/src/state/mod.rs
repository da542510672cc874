pub mod airdrop_state;
pub mod claim_receipt;

pub use airdrop_state::*;
pub use claim_receipt::*;
