//! Ports - 抽象化レイヤー
//!
//! ドメインが外部表現に依存しないための trait を定義します。
//! 具体的なフォーマット（JSON など）への対応は impls 側に置きます。

pub mod field_lookup;

pub use self::field_lookup::FieldLookup;
