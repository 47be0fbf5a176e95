use crate::error::{Result, TellerError};
use crate::parser::RawTable;

/// User-selectable correspondence between file columns and the three semantic
/// fields. Index mode addresses columns by zero-based position; header mode by
/// the names declared in the file's first row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnMapping {
    Index {
        date: usize,
        description: usize,
        amount: usize,
    },
    Header {
        date: String,
        description: String,
        amount: String,
    },
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self::Index {
            date: 0,
            description: 1,
            amount: 2,
        }
    }
}

impl ColumnMapping {
    pub fn default_headers() -> Self {
        Self::Header {
            date: "date".to_string(),
            description: "description".to_string(),
            amount: "amount".to_string(),
        }
    }

    /// Build a mapping from CLI flags. In index mode each flag must parse as a
    /// zero-based column index; in header mode flags are taken as header names.
    pub fn from_flags(
        headers: bool,
        date: Option<&str>,
        description: Option<&str>,
        amount: Option<&str>,
    ) -> Result<Self> {
        if headers {
            let name = |v: Option<&str>, default: &str| {
                v.map(str::to_string).unwrap_or_else(|| default.to_string())
            };
            return Ok(Self::Header {
                date: name(date, "date"),
                description: name(description, "description"),
                amount: name(amount, "amount"),
            });
        }
        let index = |v: Option<&str>, default: usize, flag: &str| -> Result<usize> {
            match v {
                None => Ok(default),
                Some(raw) => raw.parse().map_err(|_| {
                    TellerError::Other(format!(
                        "{flag} must be a zero-based column index (got '{raw}'); \
                         use --headers to map columns by name"
                    ))
                }),
            }
        };
        Ok(Self::Index {
            date: index(date, 0, "--date-col")?,
            description: index(description, 1, "--description-col")?,
            amount: index(amount, 2, "--amount-col")?,
        })
    }

    /// Extract `(raw_date, raw_description, raw_amount)` from one row, or
    /// `None` when the row cannot satisfy the mapping. Pure — reprocessing a
    /// row set under a new mapping carries no state from the previous one.
    pub fn select<'a>(
        &self,
        table: &RawTable,
        row: &'a [String],
    ) -> Option<(&'a str, &'a str, &'a str)> {
        match self {
            Self::Index {
                date,
                description,
                amount,
            } => {
                let needed = *date.max(description).max(amount) + 1;
                if row.len() < needed {
                    return None;
                }
                Some((
                    row[*date].as_str(),
                    row[*description].as_str(),
                    row[*amount].as_str(),
                ))
            }
            Self::Header {
                date,
                description,
                amount,
            } => {
                let d = table.header_index(date)?;
                let s = table.header_index(description)?;
                let a = table.header_index(amount)?;
                Some((row.get(d)?.as_str(), row.get(s)?.as_str(), row.get(a)?.as_str()))
            }
        }
    }
}
