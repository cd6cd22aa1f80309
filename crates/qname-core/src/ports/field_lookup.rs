//! FieldLookup port - 構造化入力の抽象化
//!
//! `QualifiedName::from_structured` は特定のドキュメント表現に依存しない。
//! JSON などの具体的な形式は impls 側のアダプタがこの trait を実装する。

/// Optional string field lookup by name.
///
/// Implementations return `None` both for a missing field and for a field
/// whose value is not a string.
pub trait FieldLookup {
    fn text_field(&self, name: &str) -> Option<&str>;
}

impl<T: FieldLookup + ?Sized> FieldLookup for &T {
    fn text_field(&self, name: &str) -> Option<&str> {
        (**self).text_field(name)
    }
}
