use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// A single drawing record. Its fields are carried through untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity(pub Value);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Block {
    pub entities: Vec<Entity>,
}

/// Typed view of the `pattern_json` payload.
///
/// Block order carries no meaning; the map is ordered only so listings are
/// stable between runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pattern {
    pub blocks: BTreeMap<String, Block>,
    pub entities: Vec<Entity>,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct CountReport {
    pub blocks: usize,
    pub block_entities: usize,
    pub top_level_entities: usize,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct BlockSummary {
    pub id: String,
    pub entities: usize,
}
