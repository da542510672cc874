use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::hashv;

/// Computes the leaf hash for a (claimant, amount) eligibility pair
///
/// Both fields are fixed-width (32-byte pubkey, 8-byte little-endian amount),
/// so the encoding is unambiguous: no reordering or re-chunking of the bytes
/// hashes to the same leaf.
pub fn hash_leaf(claimant: &Pubkey, amount: u64) -> [u8; 32] {
    hashv(&[&claimant.to_bytes(), &amount.to_le_bytes()]).to_bytes()
}

/// Verifies a merkle proof against the committed root
///
/// At each step the running hash is combined with the sibling in
/// lexicographic order and re-hashed. The tree builder must use the same
/// pair ordering. An empty proof verifies iff the leaf is the root.
pub fn verify(proof: Vec<[u8; 32]>, root: [u8; 32], leaf: [u8; 32]) -> bool {
    let mut computed = leaf;
    for sibling in proof.iter() {
        computed = if computed <= *sibling {
            hashv(&[&computed, sibling]).to_bytes()
        } else {
            hashv(&[sibling, &computed]).to_bytes()
        };
    }
    computed == root
}
