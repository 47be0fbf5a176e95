use serde::Serialize;

/// A row that survived column mapping and normalization.
/// `date` is always canonical `YYYY-MM-DD` and `amount` is always finite.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CleanRecord {
    pub date: String,
    pub description: String,
    pub amount: f64,
}

/// A record shaped for insertion — no id or timestamp yet, the store owns those.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub date: String,
    pub description: String,
    pub amount: f64,
    pub category: String,
    pub account: String,
}

#[derive(Debug, Clone)]
pub struct StoredTransaction {
    pub id: i64,
    pub date: String,
    pub description: String,
    pub amount: f64,
    pub category: String,
    pub account: String,
    pub created_at: String,
}
