use csv::StringRecord;
use serde::Serialize;

use crate::error::{Error, Result};

/// One data row, holding exactly as many fields as the header has columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Record(Vec<String>);

impl Record {
    pub fn fields(&self) -> &[String] {
        &self.0
    }
}

impl From<Vec<String>> for Record {
    fn from(fields: Vec<String>) -> Self {
        Record(fields)
    }
}

/// All kept records of one input file, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Document {
    records: Vec<Record>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// How rows whose field count differs from the header are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlignPolicy {
    /// Pad short rows with empty fields and drop fields past the header.
    #[default]
    Lenient,
    /// Reject any row whose field count differs from the header.
    Strict,
}

/// True when no field of the raw row carries a value.
pub fn is_empty_row(row: &StringRecord) -> bool {
    row.iter().all(str::is_empty)
}

/// Aligns `row` positionally to a header of `arity` columns.
///
/// `index` is the zero-based data row index, used only for error reporting.
pub fn align(row: &StringRecord, arity: usize, policy: AlignPolicy, index: usize) -> Result<Record> {
    if policy == AlignPolicy::Strict && row.len() != arity {
        return Err(Error::FieldCount {
            row: index,
            expected: arity,
            found: row.len(),
        });
    }

    let mut fields: Vec<String> = row.iter().take(arity).map(str::to_owned).collect();
    fields.resize(arity, String::new());
    Ok(Record(fields))
}
