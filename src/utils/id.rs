use rand::Rng;
use std::sync::atomic::{AtomicU64, Ordering};

/// URL-safe alphabet used for short ids
const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ_-";

/// Source of fresh record identifiers
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Random short ids, e.g. `"PPBqWA9-x"`
#[derive(Debug, Clone)]
pub struct ShortIdGenerator {
    length: usize,
}

impl ShortIdGenerator {
    pub fn new(length: usize) -> Self {
        Self { length }
    }
}

impl Default for ShortIdGenerator {
    fn default() -> Self {
        Self::new(9)
    }
}

impl IdGenerator for ShortIdGenerator {
    fn generate(&self) -> String {
        let mut rng = rand::rng();

        (0..self.length)
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
            .collect()
    }
}

/// Deterministic ids: `"{prefix}1"`, `"{prefix}2"`, ...
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn generate(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}{}", self.prefix, n)
    }
}
