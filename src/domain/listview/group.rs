use std::collections::BTreeMap;
use std::fmt;

use crate::domain::entities::record::{FieldValue, TableRow};

/// Display-partition key derived from one record field. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum GroupKey {
    Date(String),
    Year(i64),
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupKey::Date(date) => write!(f, "{date}"),
            GroupKey::Year(year) => write!(f, "{year}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Group<T> {
    pub key: GroupKey,
    pub rows: Vec<T>,
}

/// Partitions by a date-string field, most recent bucket first
/// (descending lexicographic on the raw stored value).
pub fn group_by_date<T: TableRow + Clone>(rows: &[T], column: &str) -> Vec<Group<T>> {
    let mut buckets: BTreeMap<String, Vec<T>> = BTreeMap::new();
    for row in rows {
        let date = row.field(column).search_text().into_owned();
        buckets.entry(date).or_default().push(row.clone());
    }
    buckets
        .into_iter()
        .rev()
        .map(|(date, rows)| Group {
            key: GroupKey::Date(date),
            rows,
        })
        .collect()
}

/// Partitions by an integer-year field, latest year first. Records with a
/// missing or zero year land in the `fallback` bucket.
pub fn group_by_year<T: TableRow + Clone>(rows: &[T], column: &str, fallback: i64) -> Vec<Group<T>> {
    let mut buckets: BTreeMap<i64, Vec<T>> = BTreeMap::new();
    for row in rows {
        let year = match row.field(column) {
            FieldValue::Num(v) if v != 0.0 => v as i64,
            _ => fallback,
        };
        buckets.entry(year).or_default().push(row.clone());
    }
    buckets
        .into_iter()
        .rev()
        .map(|(year, rows)| Group {
            key: GroupKey::Year(year),
            rows,
        })
        .collect()
}
