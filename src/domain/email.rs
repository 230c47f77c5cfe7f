use serde::{Deserialize, Serialize};

/// One classified email as returned by the analysis API.
///
/// `priority` is whatever label the classifier produced. `High`, `Medium` and
/// `Low` are the expected values but nothing here rejects others.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailSummary {
    pub priority: String,
    pub category: String,
    pub subject: String,
    #[serde(rename = "from")]
    pub sender: String,
    pub summary: String,
    pub date: String,
}
