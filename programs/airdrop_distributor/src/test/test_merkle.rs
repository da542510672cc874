use anchor_lang::solana_program::pubkey::Pubkey;

use crate::utils::{hash_leaf, verify};

#[derive(Debug, Clone)]
struct TreeNode {
    claimant: Pubkey,
    amount: u64,
}

struct SimpleMerkleTree {
    nodes: Vec<[u8; 32]>,
    leaf_count: usize,
}

impl SimpleMerkleTree {
    fn new(tree_nodes: Vec<TreeNode>) -> Self {
        let leaf_count = tree_nodes.len();
        let mut nodes = Vec::new();

        // Generate leaf hashes
        for node in tree_nodes {
            nodes.push(hash_leaf(&node.claimant, node.amount));
        }

        let mut tree = SimpleMerkleTree { nodes, leaf_count };

        // Build the tree
        tree.build_tree();
        tree
    }

    fn hash_intermediate(left: &[u8; 32], right: &[u8; 32]) -> [u8; 32] {
        // Same lexicographic pair ordering as the verify function
        use anchor_lang::solana_program::hash::hashv;
        if left <= right {
            hashv(&[left, right]).to_bytes()
        } else {
            hashv(&[right, left]).to_bytes()
        }
    }

    fn build_tree(&mut self) {
        let mut level_len = self.next_level_len(self.leaf_count);
        let mut level_start = self.leaf_count;
        let mut prev_level_len = self.leaf_count;
        let mut prev_level_start = 0;

        while level_len > 0 {
            for i in 0..level_len {
                let prev_level_idx = 2 * i;
                let left_sibling = &self.nodes[prev_level_start + prev_level_idx];
                let right_sibling = if prev_level_idx + 1 < prev_level_len {
                    &self.nodes[prev_level_start + prev_level_idx + 1]
                } else {
                    // Duplicate last entry if odd
                    &self.nodes[prev_level_start + prev_level_idx]
                };

                let hash = Self::hash_intermediate(left_sibling, right_sibling);
                self.nodes.push(hash);
            }

            prev_level_start = level_start;
            prev_level_len = level_len;
            level_start += level_len;
            level_len = self.next_level_len(level_len);
        }
    }

    fn next_level_len(&self, level_len: usize) -> usize {
        if level_len == 1 {
            0
        } else {
            (level_len + 1) / 2
        }
    }

    fn get_root(&self) -> Option<&[u8; 32]> {
        if self.nodes.is_empty() {
            None
        } else {
            Some(&self.nodes[self.nodes.len() - 1])
        }
    }

    /// Generate merkle proof for a leaf at given index
    fn get_proof(&self, index: usize) -> Result<Vec<[u8; 32]>, &'static str> {
        if index >= self.leaf_count {
            return Err("Index out of bounds");
        }

        let mut proof = Vec::new();
        let mut current_index = index;
        let mut level_start = 0;
        let mut level_len = self.leaf_count;

        while level_len > 1 {
            // Find sibling index
            let sibling_index = if current_index % 2 == 0 {
                if current_index + 1 < level_len {
                    current_index + 1
                } else {
                    // No right sibling, duplicate current node
                    current_index
                }
            } else {
                current_index - 1
            };

            proof.push(self.nodes[level_start + sibling_index]);

            // Move to next level
            current_index /= 2;
            level_start += level_len;
            level_len = self.next_level_len(level_len);
        }

        Ok(proof)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_test_data() -> Vec<TreeNode> {
        vec![
            TreeNode {
                claimant: Pubkey::new_unique(),
                amount: 1000,
            },
            TreeNode {
                claimant: Pubkey::new_unique(),
                amount: 2000,
            },
            TreeNode {
                claimant: Pubkey::new_unique(),
                amount: 3000,
            },
            TreeNode {
                claimant: Pubkey::new_unique(),
                amount: 4000,
            },
            TreeNode {
                claimant: Pubkey::new_unique(),
                amount: 0,
            },
        ]
    }

    #[test]
    fn test_get_proof_and_verify() {
        let tree_nodes = get_test_data();
        let merkle_tree = SimpleMerkleTree::new(tree_nodes.clone());
        let root = merkle_tree.get_root().unwrap();

        // Proof generation and verification for each leaf, the zero-amount
        // entry included
        for (index, node) in tree_nodes.iter().enumerate() {
            let leaf = hash_leaf(&node.claimant, node.amount);
            let proof = merkle_tree.get_proof(index).expect("Failed to get proof");

            assert!(
                verify(proof, *root, leaf),
                "Proof verification failed for index {}",
                index
            );
        }
    }

    #[test]
    fn test_invalid_proof() {
        let tree_nodes = get_test_data();
        let merkle_tree = SimpleMerkleTree::new(tree_nodes.clone());
        let root = merkle_tree.get_root().unwrap();

        // A leaf that was never in the tree does not verify
        let wrong_leaf = hash_leaf(&Pubkey::new_unique(), 9999);
        let proof = merkle_tree.get_proof(0).expect("Failed to get proof");
        assert!(!verify(proof, *root, wrong_leaf));

        // A tampered proof does not verify
        let correct_leaf = hash_leaf(&tree_nodes[0].claimant, tree_nodes[0].amount);
        let mut tampered_proof = merkle_tree.get_proof(0).expect("Failed to get proof");
        tampered_proof[0][0] = tampered_proof[0][0].wrapping_add(1);
        assert!(!verify(tampered_proof, *root, correct_leaf));
    }

    #[test]
    fn test_tampered_pair() {
        let tree_nodes = get_test_data();
        let merkle_tree = SimpleMerkleTree::new(tree_nodes.clone());
        let root = merkle_tree.get_root().unwrap();
        let proof = merkle_tree.get_proof(1).expect("Failed to get proof");

        // Same claimant, inflated amount
        let inflated = hash_leaf(&tree_nodes[1].claimant, tree_nodes[1].amount + 1);
        assert!(!verify(proof.clone(), *root, inflated));

        // Someone else's amount with a different claimant
        let stolen = hash_leaf(&Pubkey::new_unique(), tree_nodes[1].amount);
        assert!(!verify(proof, *root, stolen));
    }

    #[test]
    fn test_proof_against_different_root() {
        let tree_nodes = get_test_data();
        let merkle_tree = SimpleMerkleTree::new(tree_nodes.clone());
        let other_tree = SimpleMerkleTree::new(vec![
            TreeNode {
                claimant: Pubkey::new_unique(),
                amount: 500,
            },
            TreeNode {
                claimant: Pubkey::new_unique(),
                amount: 600,
            },
        ]);

        let leaf = hash_leaf(&tree_nodes[0].claimant, tree_nodes[0].amount);
        let proof = merkle_tree.get_proof(0).expect("Failed to get proof");

        // The proof is valid under its own root and under no other
        assert!(verify(proof.clone(), *merkle_tree.get_root().unwrap(), leaf));
        assert!(!verify(proof, *other_tree.get_root().unwrap(), leaf));
    }

    #[test]
    fn test_leaf_encoding_is_order_sensitive() {
        use anchor_lang::solana_program::hash::hashv;

        let claimant = Pubkey::new_unique();
        let amount: u64 = 1000;

        // Reordering the fields produces a different leaf
        let swapped = hashv(&[&amount.to_le_bytes(), &claimant.to_bytes()]).to_bytes();
        assert_ne!(hash_leaf(&claimant, amount), swapped);

        // Fixed-width encoding: amounts that share a byte prefix still differ
        assert_ne!(hash_leaf(&claimant, 1), hash_leaf(&claimant, 256));
    }

    #[test]
    fn test_proof_edge_cases() {
        // A single-node tree has the leaf as its root and an empty proof
        let single_node = vec![TreeNode {
            claimant: Pubkey::new_unique(),
            amount: 1000,
        }];

        let single_tree = SimpleMerkleTree::new(single_node.clone());
        let single_root = single_tree.get_root().unwrap();
        let single_proof = single_tree
            .get_proof(0)
            .expect("Failed to get proof for single node");
        assert_eq!(single_proof.len(), 0, "Single node should have empty proof");

        let single_leaf = hash_leaf(&single_node[0].claimant, single_node[0].amount);
        assert!(verify(single_proof, *single_root, single_leaf));

        // Out of bounds
        let merkle_tree = SimpleMerkleTree::new(get_test_data());
        assert!(merkle_tree.get_proof(10).is_err());
    }

    #[test]
    fn test_no_proof_verifies_against_unset_root() {
        // The all-zero root is the "not configured" sentinel; a committed
        // tree can never reduce to it
        let tree_nodes = get_test_data();
        let merkle_tree = SimpleMerkleTree::new(tree_nodes.clone());
        let leaf = hash_leaf(&tree_nodes[0].claimant, tree_nodes[0].amount);
        let proof = merkle_tree.get_proof(0).expect("Failed to get proof");

        assert!(!verify(proof, [0; 32], leaf));
        assert!(!verify(Vec::new(), [0; 32], leaf));
    }
}
