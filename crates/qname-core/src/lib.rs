//! qname-core
//!
//! Hierarchical qualified names for a multi-level data catalog
//! (`catalog/database/table/(partition | view)`).
//!
//! # モジュール構成
//! - **domain**: 値型（QualifiedName, Level, ParseHint, PartitionSpec, WildcardPattern, errors）
//! - **ports**: 抽象化レイヤー（FieldLookup）
//! - **impls**: ports の実装（serde_json / map アダプタ）
//!
//! ```
//! use qname_core::{ParseHint, QualifiedName};
//!
//! let name = QualifiedName::parse(" Prod/DB/events/DateInt=20240101 ", ParseHint::Heuristic)?;
//! assert!(name.is_partition_definition());
//! assert_eq!(name.to_string(), "prod/db/events/DateInt=20240101");
//! # Ok::<(), qname_core::QualifiedNameError>(())
//! ```

pub mod domain;
pub mod impls;
pub mod ports;

pub use domain::{
    ErrorKind, Level, ParseHint, PartitionSpec, QualifiedName, QualifiedNameError, StructuredName,
    WildcardPattern,
};
pub use ports::FieldLookup;
