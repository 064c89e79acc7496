//! Sale record and field types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stable record identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordId(pub String);

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for RecordId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Status label for a client, drawn from a small closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClientStatus {
    Premium,
    Client,
    New,
}

impl fmt::Display for ClientStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ClientStatus::Premium => "Premium",
            ClientStatus::Client => "Client",
            ClientStatus::New => "New",
        };
        f.write_str(s)
    }
}

/// The client a sale belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    /// Display name.
    pub name: String,

    /// Status badge shown next to the name.
    pub status: ClientStatus,
}

/// One sale/order entity displayed in the table.
///
/// Records are loaded once at startup and treated as immutable for the
/// session. Display-oriented fields (`created_at`, `total`) arrive
/// pre-formatted; the pipeline only ever reads them as text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleRecord {
    /// Unique identifier within the record set.
    pub id: String,

    /// Creation timestamp, already formatted for display.
    pub created_at: String,

    /// Client name and status.
    pub client: Client,

    /// Free-form location text.
    pub location: String,

    /// Sales representative name.
    pub sales_rep: String,

    /// Total amount, pre-formatted currency text.
    pub total: String,

    /// Sale status label.
    pub sale_status: String,

    /// Workflow stage label.
    pub workflow: String,

    /// Stock verification status label.
    pub stock_verification: String,

    /// Percent progress, 0-100 inclusive. Not enforced here.
    pub completion: u8,
}

impl SaleRecord {
    /// Get the record's ID as a RecordId.
    pub fn record_id(&self) -> RecordId {
        RecordId(self.id.clone())
    }
}

/// A searchable/filterable/sortable/groupable field of a sale record.
///
/// This is the closed set of columns the query pipeline understands.
/// External field names (filter keys from the UI, query strings) parse
/// through [`FromStr`]; unknown names are an error so callers can drop
/// them instead of crashing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Id,
    CreatedAt,
    ClientName,
    ClientStatus,
    Location,
    SalesRep,
    Total,
    SaleStatus,
    Workflow,
    StockVerification,
    Completion,
}

impl Field {
    /// All fields, in column order. Search walks this list.
    pub const ALL: [Field; 11] = [
        Field::Id,
        Field::CreatedAt,
        Field::ClientName,
        Field::ClientStatus,
        Field::Location,
        Field::SalesRep,
        Field::Total,
        Field::SaleStatus,
        Field::Workflow,
        Field::StockVerification,
        Field::Completion,
    ];

    /// The field's wire/display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::CreatedAt => "createdAt",
            Field::ClientName => "clientName",
            Field::ClientStatus => "clientStatus",
            Field::Location => "location",
            Field::SalesRep => "salesRep",
            Field::Total => "total",
            Field::SaleStatus => "saleStatus",
            Field::Workflow => "workflow",
            Field::StockVerification => "stockVerification",
            Field::Completion => "completion",
        }
    }

    /// The record's value for this field, as display text.
    ///
    /// This is the single stringification used by search, filter and group.
    /// Completion renders as decimal text ("25", not "25%").
    pub fn value_of(&self, record: &SaleRecord) -> String {
        match self {
            Field::Id => record.id.clone(),
            Field::CreatedAt => record.created_at.clone(),
            Field::ClientName => record.client.name.clone(),
            Field::ClientStatus => record.client.status.to_string(),
            Field::Location => record.location.clone(),
            Field::SalesRep => record.sales_rep.clone(),
            Field::Total => record.total.clone(),
            Field::SaleStatus => record.sale_status.clone(),
            Field::Workflow => record.workflow.clone(),
            Field::StockVerification => record.stock_verification.clone(),
            Field::Completion => record.completion.to_string(),
        }
    }

    /// Whether this field orders numerically rather than lexicographically.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Field::Completion)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognized field name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownField(pub String);

impl fmt::Display for UnknownField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown field: {}", self.0)
    }
}

impl std::error::Error for UnknownField {}

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .iter()
            .copied()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samples::sample_records;

    #[test]
    fn test_field_round_trips_through_names() {
        for field in Field::ALL {
            assert_eq!(field.as_str().parse::<Field>().unwrap(), field);
        }
    }

    #[test]
    fn test_unknown_field_name_is_rejected() {
        let err = "client".parse::<Field>().unwrap_err();
        assert_eq!(err, UnknownField("client".to_string()));
    }

    #[test]
    fn test_value_of_renders_completion_as_decimal_text() {
        let records = sample_records();
        assert_eq!(Field::Completion.value_of(&records[0]), "25");
        assert_eq!(Field::Completion.value_of(&records[4]), "100");
    }

    #[test]
    fn test_value_of_reads_nested_client_fields() {
        let records = sample_records();
        assert_eq!(Field::ClientName.value_of(&records[0]), "Ivana Silvestro");
        assert_eq!(Field::ClientStatus.value_of(&records[0]), "Premium");
    }

    #[test]
    fn test_record_serde_uses_camel_case_names() {
        let records = sample_records();
        let json = serde_json::to_value(&records[0]).unwrap();
        assert_eq!(json["createdAt"], "Oct 22, 2024, 10:40");
        assert_eq!(json["client"]["status"], "Premium");
        assert_eq!(json["stockVerification"], "Awaiting Availability");
        assert_eq!(json["completion"], 25);
    }
}
