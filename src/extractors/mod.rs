// src/extractors/mod.rs
pub mod align;
pub mod headers;
pub mod lines;
pub mod person;
pub mod relation;

// Re-export key extraction types for convenience
#[allow(unused_imports)]
pub use relation::{
    max_entity_columns,
    parse_relations,
    RelationRecord,
};
