//! Impls - ports の実装
//!
//! # 含まれる実装
//! - **json**: `serde_json::Value` / `Map` 用の FieldLookup、QualifiedName の serde 対応
//! - **map**: `HashMap` / `BTreeMap<_, String>` 用の FieldLookup

pub mod json;
pub mod map;
