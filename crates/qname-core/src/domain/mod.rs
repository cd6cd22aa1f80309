//! Domain model (qualified names, levels, wildcard patterns, ...).
//!
//! I/O を一切持たない純粋な値型のみを置く。

pub mod errors;
pub mod level;
pub mod parse_hint;
pub mod partition;
pub mod qualified_name;
pub mod wildcard;

pub use self::errors::{ErrorKind, QualifiedNameError};
pub use self::level::{Level, QUALIFIED_NAME_KEY};
pub use self::parse_hint::ParseHint;
pub use self::partition::PartitionSpec;
pub use self::qualified_name::{DELIMITER, QualifiedName, StructuredName};
pub use self::wildcard::{WILDCARD, WildcardPattern, to_wildcard_string};
