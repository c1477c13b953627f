//! Shared test utilities: random document generation

#![allow(dead_code)]

use ingestdoc::document::{IngestDocument, WriteableDocument, DEFAULT_SYSTEM_FIELDS};
use ingestdoc::value::{Value, ValueMap};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub fn random_string(rng: &mut StdRng) -> String {
    let len = rng.gen_range(1..12);
    (0..len)
        .map(|_| {
            // Mix ASCII with a multi-byte code point
            if rng.gen_bool(0.1) {
                'é'
            } else {
                rng.gen_range(b'a'..=b'z') as char
            }
        })
        .collect()
}

/// Random leaf or container value, bounded by `depth`
pub fn random_value(rng: &mut StdRng, depth: usize) -> Value {
    let max_kind = if depth == 0 { 5 } else { 7 };
    match rng.gen_range(0..max_kind) {
        0 => Value::Absent,
        1 => Value::Boolean(rng.gen()),
        2 => Value::Integer(rng.gen()),
        3 => Value::Float(rng.gen_range(-1.0e6..1.0e6)),
        4 => Value::Text(random_string(rng)),
        5 => {
            let len = rng.gen_range(0..4);
            Value::List((0..len).map(|_| random_value(rng, depth - 1)).collect())
        }
        _ => Value::Map(random_map(rng, depth - 1, 4)),
    }
}

pub fn random_map(rng: &mut StdRng, depth: usize, max_len: usize) -> ValueMap {
    let len = rng.gen_range(0..=max_len);
    (0..len)
        .map(|_| (random_string(rng), random_value(rng, depth)))
        .collect()
}

/// Document with 1..=7 known system fields, 1..=5 local fields and a nested payload
pub fn random_document(rng: &mut StdRng) -> WriteableDocument {
    let system_count = rng.gen_range(1..=DEFAULT_SYSTEM_FIELDS.len());
    let names: Vec<&str> = DEFAULT_SYSTEM_FIELDS
        .choose_multiple(rng, system_count)
        .copied()
        .collect();
    let system: Vec<(String, String)> = names
        .into_iter()
        .map(|name| (name.to_string(), random_string(rng)))
        .collect();

    let local_count = rng.gen_range(1..=5);
    let local: Vec<(String, String)> = (0..local_count)
        .map(|i| (format!("local_{}", i), random_string(rng)))
        .collect();

    let payload = random_map(rng, 3, 6);

    WriteableDocument::new(IngestDocument::new(system, payload, local))
}
