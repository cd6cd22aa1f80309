//! QualifiedName - カタログ階層上のエンティティを一意に指す修飾名
//!
//! `catalog/database/table/(partition | view)` の形をとる不変の値型。
//!
//! # 構築経路
//! - `of_*` 系のコンストラクタ（セグメントを直接指定）
//! - `parse` / `FromStr`（`/` 区切りの文字列）
//! - `from_structured`（`FieldLookup` を実装した構造化入力）
//!
//! どの経路も private な `new` を通り、正規化と不変条件のチェックは一箇所で行う。
//! 文字列表現と構造化表現は構築時に一度だけ計算する。

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use tracing::{debug, trace};

use super::errors::QualifiedNameError;
use super::level::{Level, QUALIFIED_NAME_KEY};
use super::parse_hint::ParseHint;
use super::partition::PartitionSpec;
use super::wildcard;
use crate::ports::FieldLookup;

/// Separator between levels in the string form.
pub const DELIMITER: &str = "/";

/// `catalog/database/table/rest`: the fourth segment keeps any further `/`.
const MAX_SEGMENTS: usize = 4;

/// Structured (key-value) form of a qualified name.
pub type StructuredName = BTreeMap<&'static str, String>;

/// A fully qualified name that references a source of data.
///
/// Absent levels are stored as empty strings. Equality, hashing and ordering
/// only look at the five normalized levels.
#[derive(Clone)]
pub struct QualifiedName {
    catalog_name: String,
    database_name: String,
    table_name: String,
    partition_name: String,
    view_name: String,

    rendered: String,
    structured: StructuredName,
}

impl QualifiedName {
    fn new(
        catalog_name: &str,
        database_name: Option<&str>,
        table_name: Option<&str>,
        partition_name: Option<&str>,
        view_name: Option<&str>,
    ) -> Result<Self, QualifiedNameError> {
        Self::build(
            catalog_name,
            database_name,
            table_name,
            partition_name,
            view_name,
        )
        .inspect_err(|error| debug!(%error, catalog_name, "rejected qualified name"))
    }

    fn build(
        catalog_name: &str,
        database_name: Option<&str>,
        table_name: Option<&str>,
        partition_name: Option<&str>,
        view_name: Option<&str>,
    ) -> Result<Self, QualifiedNameError> {
        let catalog_name = standardize_required(Level::Catalog, catalog_name)?;
        let database_name = standardize_optional(Level::Database, database_name);
        let table_name = standardize_optional(Level::Table, table_name);
        let partition_name = standardize_optional(Level::Partition, partition_name);
        let view_name = standardize_optional(Level::View, view_name);

        if database_name.is_empty() && (!table_name.is_empty() || !partition_name.is_empty()) {
            let present = if table_name.is_empty() {
                Level::Partition
            } else {
                Level::Table
            };
            return Err(QualifiedNameError::StructuralConsistency {
                missing: Level::Database.field_name(),
                present: present.field_name(),
            });
        }
        if table_name.is_empty() && !partition_name.is_empty() {
            return Err(QualifiedNameError::StructuralConsistency {
                missing: Level::Table.field_name(),
                present: Level::Partition.field_name(),
            });
        }

        let mut name = Self {
            catalog_name,
            database_name,
            table_name,
            partition_name,
            view_name,
            rendered: String::new(),
            structured: StructuredName::new(),
        };
        name.rendered = name.render();
        name.structured = name.structure();
        Ok(name)
    }

    /// Creates the qualified name representing a catalog.
    pub fn of_catalog(catalog_name: &str) -> Result<Self, QualifiedNameError> {
        Self::new(catalog_name, None, None, None, None)
    }

    /// Creates the qualified name representing a database.
    pub fn of_database(catalog_name: &str, database_name: &str) -> Result<Self, QualifiedNameError> {
        Self::new(catalog_name, Some(database_name), None, None, None)
    }

    /// Creates the qualified name representing a table.
    pub fn of_table(
        catalog_name: &str,
        database_name: &str,
        table_name: &str,
    ) -> Result<Self, QualifiedNameError> {
        Self::new(catalog_name, Some(database_name), Some(table_name), None, None)
    }

    /// Creates the qualified name representing a view.
    pub fn of_view(
        catalog_name: &str,
        database_name: &str,
        table_name: &str,
        view_name: &str,
    ) -> Result<Self, QualifiedNameError> {
        Self::new(
            catalog_name,
            Some(database_name),
            Some(table_name),
            None,
            Some(view_name),
        )
    }

    /// Creates the qualified name representing a partition.
    pub fn of_partition(
        catalog_name: &str,
        database_name: &str,
        table_name: &str,
        partition_name: &str,
    ) -> Result<Self, QualifiedNameError> {
        Self::new(
            catalog_name,
            Some(database_name),
            Some(table_name),
            Some(partition_name),
            None,
        )
    }

    /// Creates the name of `partition` inside `table_name`.
    ///
    /// Fails with [`QualifiedNameError::IllegalState`] when the descriptor's
    /// own name carries no partition.
    pub fn of_partition_in(
        table_name: &QualifiedName,
        partition: &PartitionSpec,
    ) -> Result<Self, QualifiedNameError> {
        Self::of_partition(
            &table_name.catalog_name,
            &table_name.database_name,
            &table_name.table_name,
            partition.name.partition_name()?,
        )
    }

    /// Parses `catalog[/database[/table[/partition-or-view]]]`.
    ///
    /// The split is bounded to four segments, so a fourth segment may itself
    /// contain `/`. Whether it is a view or a partition is decided by `hint`.
    pub fn parse(raw: &str, hint: ParseHint) -> Result<Self, QualifiedNameError> {
        let name = raw.trim();
        if name.is_empty() {
            debug!(raw, "rejected empty qualified name");
            return Err(QualifiedNameError::InvalidFormat {
                input: raw.to_owned(),
                reason: "passed in an empty definition name",
            });
        }

        let parts: Vec<&str> = name.splitn(MAX_SEGMENTS, DELIMITER).collect();
        match parts.as_slice() {
            [catalog] => Self::of_catalog(catalog),
            [catalog, database] => Self::of_database(catalog, database),
            [catalog, database, table] => Self::of_table(catalog, database, table),
            [catalog, database, table, last] => {
                if hint.reads_as_view(last) {
                    trace!(segment = %last, ?hint, "reading fourth segment as view");
                    Self::of_view(catalog, database, table, last)
                } else {
                    trace!(segment = %last, ?hint, "reading fourth segment as partition");
                    Self::of_partition(catalog, database, table, last)
                }
            }
            _ => {
                debug!(raw, segments = parts.len(), "rejected qualified name");
                Err(QualifiedNameError::InvalidFormat {
                    input: raw.to_owned(),
                    reason: "expected one to four '/'-separated segments",
                })
            }
        }
    }

    /// Builds a name from a structured record.
    ///
    /// Reads `catalogName`, `databaseName`, `tableName`, `partitionName` and
    /// `viewName`. When `catalogName` is missing the `qualifiedName` string is
    /// parsed instead (with [`ParseHint::Heuristic`]).
    pub fn from_structured<F>(node: &F) -> Result<Self, QualifiedNameError>
    where
        F: FieldLookup + ?Sized,
    {
        let Some(catalog_name) = node.text_field(Level::Catalog.field_name()) else {
            return match node.text_field(QUALIFIED_NAME_KEY) {
                Some(name) => Self::parse(name, ParseHint::Heuristic),
                None => {
                    debug!("structured name has neither catalogName nor qualifiedName");
                    Err(QualifiedNameError::MissingField {
                        field: Level::Catalog.field_name(),
                    })
                }
            };
        };

        Self::new(
            catalog_name,
            node.text_field(Level::Database.field_name()),
            node.text_field(Level::Table.field_name()),
            node.text_field(Level::Partition.field_name()),
            node.text_field(Level::View.field_name()),
        )
    }

    /// Wildcard pattern for prefix search; see [`wildcard::to_wildcard_string`].
    pub fn to_wildcard_string(
        source_name: Option<&str>,
        database_name: Option<&str>,
        table_name: Option<&str>,
    ) -> Option<String> {
        wildcard::to_wildcard_string(source_name, database_name, table_name)
    }

    pub fn is_catalog_definition(&self) -> bool {
        !self.catalog_name.is_empty()
    }

    pub fn is_database_definition(&self) -> bool {
        !self.database_name.is_empty()
    }

    pub fn is_table_definition(&self) -> bool {
        !self.table_name.is_empty()
    }

    pub fn is_partition_definition(&self) -> bool {
        !self.partition_name.is_empty()
    }

    pub fn is_view_definition(&self) -> bool {
        !self.view_name.is_empty()
    }

    pub fn catalog_name(&self) -> &str {
        &self.catalog_name
    }

    pub fn database_name(&self) -> Result<&str, QualifiedNameError> {
        present(&self.database_name, Level::Database)
    }

    pub fn table_name(&self) -> Result<&str, QualifiedNameError> {
        present(&self.table_name, Level::Table)
    }

    pub fn partition_name(&self) -> Result<&str, QualifiedNameError> {
        present(&self.partition_name, Level::Partition)
    }

    /// The view name, empty when this is not a view.
    pub fn view_name(&self) -> &str {
        &self.view_name
    }

    /// Deepest level present in this name.
    pub fn level(&self) -> Level {
        self.fields()
            .into_iter()
            .rev()
            .find(|(_, value)| !value.is_empty())
            .map_or(Level::Catalog, |(level, _)| level)
    }

    /// Canonical `/`-delimited form.
    pub fn as_str(&self) -> &str {
        &self.rendered
    }

    /// `qualifiedName` plus one entry per present level.
    pub fn to_structured(&self) -> &StructuredName {
        &self.structured
    }

    fn fields(&self) -> [(Level, &str); 5] {
        [
            (Level::Catalog, self.catalog_name.as_str()),
            (Level::Database, self.database_name.as_str()),
            (Level::Table, self.table_name.as_str()),
            (Level::Partition, self.partition_name.as_str()),
            (Level::View, self.view_name.as_str()),
        ]
    }

    fn render(&self) -> String {
        self.fields()
            .into_iter()
            .map(|(_, value)| value)
            .filter(|value| !value.is_empty())
            .collect::<Vec<_>>()
            .join(DELIMITER)
    }

    fn structure(&self) -> StructuredName {
        let mut map = StructuredName::new();
        map.insert(QUALIFIED_NAME_KEY, self.rendered.clone());
        for (level, value) in self.fields() {
            if !value.is_empty() {
                map.insert(level.field_name(), value.to_owned());
            }
        }
        map
    }
}

fn standardize_required(level: Level, value: &str) -> Result<String, QualifiedNameError> {
    let value = standardize_optional(level, Some(value));
    if value.is_empty() {
        return Err(QualifiedNameError::RequiredField {
            field: level.field_name(),
        });
    }
    Ok(value)
}

fn standardize_optional(level: Level, value: Option<&str>) -> String {
    let Some(value) = value else {
        return String::new();
    };
    let trimmed = value.trim();
    if level.folds_case() {
        trimmed.to_ascii_lowercase()
    } else {
        trimmed.to_owned()
    }
}

fn present(value: &str, level: Level) -> Result<&str, QualifiedNameError> {
    if value.is_empty() {
        Err(QualifiedNameError::IllegalState { level })
    } else {
        Ok(value)
    }
}

impl PartialEq for QualifiedName {
    fn eq(&self, other: &Self) -> bool {
        self.fields() == other.fields()
    }
}

impl Eq for QualifiedName {}

impl Hash for QualifiedName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.catalog_name.hash(state);
        self.database_name.hash(state);
        self.table_name.hash(state);
        self.partition_name.hash(state);
        self.view_name.hash(state);
    }
}

impl PartialOrd for QualifiedName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QualifiedName {
    fn cmp(&self, other: &Self) -> Ordering {
        self.fields().cmp(&other.fields())
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendered)
    }
}

impl fmt::Debug for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("QualifiedName").field(&self.rendered).finish()
    }
}

impl AsRef<str> for QualifiedName {
    fn as_ref(&self) -> &str {
        &self.rendered
    }
}

impl FromStr for QualifiedName {
    type Err = QualifiedNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, ParseHint::Heuristic)
    }
}

impl TryFrom<&str> for QualifiedName {
    type Error = QualifiedNameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}
