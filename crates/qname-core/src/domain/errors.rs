//! Errors - 修飾名の構築・参照エラーと分類

use thiserror::Error;

use super::level::Level;

/// ErrorKind は QualifiedNameError の分類
///
/// 呼び出し側がメッセージ文字列に依存せずに分岐できるようにする。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// catalog が空・空白のみ
    RequiredField,
    /// 親レベルなしで子レベルが指定された
    StructuralConsistency,
    /// 文字列として解釈できない
    InvalidFormat,
    /// 構造化入力に catalogName も qualifiedName もない
    MissingField,
    /// 存在しないレベルのアクセサを呼んだ
    IllegalState,
}

/// Failure to build or read a [`QualifiedName`](super::QualifiedName).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QualifiedNameError {
    #[error("{field} cannot be an empty string")]
    RequiredField { field: &'static str },

    #[error("{missing} is not present but {present} is present")]
    StructuralConsistency {
        missing: &'static str,
        present: &'static str,
    },

    #[error("unable to convert '{input}' into a qualified name: {reason}")]
    InvalidFormat { input: String, reason: &'static str },

    #[error("structured name is missing {field}")]
    MissingField { field: &'static str },

    #[error("this is not a {level} definition")]
    IllegalState { level: Level },
}

impl QualifiedNameError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            QualifiedNameError::RequiredField { .. } => ErrorKind::RequiredField,
            QualifiedNameError::StructuralConsistency { .. } => ErrorKind::StructuralConsistency,
            QualifiedNameError::InvalidFormat { .. } => ErrorKind::InvalidFormat,
            QualifiedNameError::MissingField { .. } => ErrorKind::MissingField,
            QualifiedNameError::IllegalState { .. } => ErrorKind::IllegalState,
        }
    }
}
