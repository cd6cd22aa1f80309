//! Level - 階層レベル（catalog → database → table → partition | view）

use std::fmt;

use serde::{Deserialize, Serialize};

/// Key of the canonical string inside the structured form.
pub const QUALIFIED_NAME_KEY: &str = "qualifiedName";

/// One level of the naming hierarchy.
///
/// Variants are declared parents-first, so the derived `Ord` follows the
/// hierarchy depth. Partition and view both hang off a table and never
/// coexist in a parsed name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Catalog,
    Database,
    Table,
    Partition,
    View,
}

impl Level {
    /// All levels in rendering order.
    pub const ALL: [Level; 5] = [
        Level::Catalog,
        Level::Database,
        Level::Table,
        Level::Partition,
        Level::View,
    ];

    /// Key used for this level in the structured form (e.g. `catalogName`).
    pub fn field_name(self) -> &'static str {
        match self {
            Level::Catalog => "catalogName",
            Level::Database => "databaseName",
            Level::Table => "tableName",
            Level::Partition => "partitionName",
            Level::View => "viewName",
        }
    }

    /// Partition names keep their case; every other level is lower-cased.
    pub fn folds_case(self) -> bool {
        !matches!(self, Level::Partition)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Level::Catalog => "catalog",
            Level::Database => "database",
            Level::Table => "table",
            Level::Partition => "partition",
            Level::View => "view",
        };
        f.write_str(s)
    }
}
