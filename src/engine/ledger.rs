// src/engine/ledger.rs
//
// In-memory hash-chained block store. Invariants enforced here and nowhere
// else: indices increase by exactly one, and every block's previous_hash
// equals its predecessor's hash.

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};
use thiserror::Error;

use super::types::BlockRecord;

pub const GENESIS_TYPE: &str = "genesis";

#[derive(Clone, Debug)]
pub struct Block {
    index: u64,
    timestamp: DateTime<Utc>,
    data_type: String,
    data: String,
    previous_hash: String,
    hash: String,
}

impl Block {
    pub fn index(&self) -> u64 {
        self.index
    }

    pub fn data_type(&self) -> &str {
        &self.data_type
    }

    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }

    pub fn record(&self) -> BlockRecord {
        BlockRecord {
            index: self.index,
            timestamp: self.timestamp,
            hash: self.hash.clone(),
            previous_hash: self.previous_hash.clone(),
            data_type: self.data_type.clone(),
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ChainError {
    #[error("block {index}: stored hash does not match its contents")]
    BadHash { index: u64 },
    #[error("block {index}: previous_hash does not match its predecessor")]
    BrokenLink { index: u64 },
    #[error("block {index}: expected index {expected}")]
    BadIndex { index: u64, expected: u64 },
}

/// The chain starts empty; a genesis block is written right before the
/// first data block, so a fresh engine reports an empty snapshot.
#[derive(Debug, Default)]
pub struct Ledger {
    blocks: Vec<Block>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn append(&mut self, data_type: &str, data: String) -> &Block {
        if self.blocks.is_empty() && data_type != GENESIS_TYPE {
            self.push(GENESIS_TYPE, String::new());
        }
        self.push(data_type, data)
    }

    fn push(&mut self, data_type: &str, data: String) -> &Block {
        let index = self.blocks.len() as u64;
        let timestamp = Utc::now();
        let previous_hash = match self.blocks.last() {
            Some(prev) => prev.hash.clone(),
            None => String::new(),
        };
        let hash = block_hash(index, &timestamp, data_type, &data, &previous_hash);
        self.blocks.push(Block {
            index,
            timestamp,
            data_type: data_type.to_owned(),
            data,
            previous_hash,
            hash,
        });
        // just pushed, cannot be empty
        self.blocks.last().unwrap()
    }

    /// Recompute every hash and check the links. Reports the first defect.
    pub fn verify(&self) -> Result<(), ChainError> {
        for (i, block) in self.blocks.iter().enumerate() {
            let expected = i as u64;
            if block.index != expected {
                return Err(ChainError::BadIndex {
                    index: block.index,
                    expected,
                });
            }
            let recomputed = block_hash(
                block.index,
                &block.timestamp,
                &block.data_type,
                &block.data,
                &block.previous_hash,
            );
            if recomputed != block.hash {
                return Err(ChainError::BadHash { index: block.index });
            }
            if i > 0 && block.previous_hash != self.blocks[i - 1].hash {
                return Err(ChainError::BrokenLink { index: block.index });
            }
        }
        Ok(())
    }

    /// Display/export projection, oldest first.
    pub fn snapshot(&self) -> Vec<BlockRecord> {
        self.blocks.iter().map(Block::record).collect()
    }
}

fn block_hash(
    index: u64,
    timestamp: &DateTime<Utc>,
    data_type: &str,
    data: &str,
    previous_hash: &str,
) -> String {
    let mut hasher = Sha256::new();
    hasher.update(index.to_le_bytes());
    hasher.update(timestamp.to_rfc3339().as_bytes());
    hasher.update(data_type.as_bytes());
    hasher.update(data.as_bytes());
    hasher.update(previous_hash.as_bytes());
    hex(&hasher.finalize())
}

pub(crate) fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex(&hasher.finalize())
}

fn hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        out.push_str(&format!("{b:02x}"));
    }
    out
}
