use crate::domain::models::{Block, BlockSummary, CountReport, Entity, Pattern};
use crate::error::PatternError;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

const PATTERN_FIELD: &str = "pattern_json";

fn field<'a>(
    obj: &'a Map<String, Value>,
    key: &str,
    path: &str,
) -> Result<&'a Value, PatternError> {
    obj.get(key)
        .ok_or_else(|| PatternError::missing(path))
}

fn as_object<'a>(
    value: &'a Value,
    path: &str,
) -> Result<&'a Map<String, Value>, PatternError> {
    value
        .as_object()
        .ok_or_else(|| PatternError::schema(path, "object"))
}

fn entities_at(obj: &Map<String, Value>, path: &str) -> Result<Vec<Entity>, PatternError> {
    let path = format!("{}.entities", path);
    field(obj, "entities", &path)?
        .as_array()
        .map(|items| items.iter().cloned().map(Entity).collect())
        .ok_or_else(|| PatternError::schema(path, "array"))
}

/// Validates the decoded document and converts its `pattern_json` payload
/// into a typed [`Pattern`]. Unknown fields are ignored at every level.
pub fn extract_pattern(document: &Value) -> Result<Pattern, PatternError> {
    let root = as_object(document, "$")?;
    let pattern = as_object(field(root, PATTERN_FIELD, PATTERN_FIELD)?, PATTERN_FIELD)?;

    let blocks_path = format!("{}.blocks", PATTERN_FIELD);
    let raw_blocks = as_object(field(pattern, "blocks", &blocks_path)?, &blocks_path)?;

    let mut blocks = BTreeMap::new();
    for (id, raw) in raw_blocks {
        let block_path = format!("{}[{:?}]", blocks_path, id);
        let block = as_object(raw, &block_path)?;
        blocks.insert(
            id.clone(),
            Block {
                entities: entities_at(block, &block_path)?,
            },
        );
    }

    let entities = entities_at(pattern, PATTERN_FIELD)?;
    tracing::debug!(
        blocks = blocks.len(),
        entities = entities.len(),
        "extracted pattern"
    );
    Ok(Pattern { blocks, entities })
}

pub fn count_blocks(pattern: &Pattern) -> usize {
    pattern.blocks.len()
}

pub fn count_block_entities(pattern: &Pattern) -> usize {
    pattern.blocks.values().map(|b| b.entities.len()).sum()
}

pub fn count_top_level_entities(pattern: &Pattern) -> usize {
    pattern.entities.len()
}

pub fn summarize(pattern: &Pattern) -> CountReport {
    CountReport {
        blocks: count_blocks(pattern),
        block_entities: count_block_entities(pattern),
        top_level_entities: count_top_level_entities(pattern),
    }
}

pub fn block_summaries(pattern: &Pattern) -> Vec<BlockSummary> {
    pattern
        .blocks
        .iter()
        .map(|(id, b)| BlockSummary {
            id: id.clone(),
            entities: b.entities.len(),
        })
        .collect()
}
