//! Demo record set and JSON loading.
//!
//! Records come from a static source, loaded once at startup and immutable
//! for the session. The five-record demo set below backs the preview binary
//! and most of the test suite.

use crate::error::DataError;
use crate::record::{Client, ClientStatus, SaleRecord};

/// Parse a record set from a JSON array.
pub fn records_from_json(json: &str) -> Result<Vec<SaleRecord>, DataError> {
    serde_json::from_str(json).map_err(|e| DataError::Parse(e.to_string()))
}

/// The demo sales data set.
pub fn sample_records() -> Vec<SaleRecord> {
    vec![
        SaleRecord {
            id: "SO168910".to_string(),
            created_at: "Oct 22, 2024, 10:40".to_string(),
            client: Client {
                name: "Ivana Silvestro".to_string(),
                status: ClientStatus::Premium,
            },
            location: "New York, USA".to_string(),
            sales_rep: "Bodini Carla".to_string(),
            total: "€2,991.80".to_string(),
            sale_status: "Quotation".to_string(),
            workflow: "Stock Verification".to_string(),
            stock_verification: "Awaiting Availability".to_string(),
            completion: 25,
        },
        SaleRecord {
            id: "ECOMMSO168899".to_string(),
            created_at: "Oct 22, 2024, 10:40".to_string(),
            client: Client {
                name: "Claude Munini".to_string(),
                status: ClientStatus::Client,
            },
            location: "Paris, France".to_string(),
            sales_rep: "Mollura Stefania".to_string(),
            total: "€804.92".to_string(),
            sale_status: "Quotation Sent".to_string(),
            workflow: "Stock Verification".to_string(),
            stock_verification: "Partially Available".to_string(),
            completion: 50,
        },
        SaleRecord {
            id: "SO168967".to_string(),
            created_at: "Oct 22, 2024, 10:40".to_string(),
            client: Client {
                name: "John Doe".to_string(),
                status: ClientStatus::Client,
            },
            location: "Zurich, Switzerland".to_string(),
            sales_rep: "Vanni Monica".to_string(),
            total: "€3,500.00".to_string(),
            sale_status: "Quotation Approved".to_string(),
            workflow: "Confirmed Order".to_string(),
            stock_verification: "Available".to_string(),
            completion: 25,
        },
        SaleRecord {
            id: "SO168974".to_string(),
            created_at: "Oct 22, 2024, 10:40".to_string(),
            client: Client {
                name: "Keuley Huang".to_string(),
                status: ClientStatus::Client,
            },
            location: "Taipei, Taiwan".to_string(),
            sales_rep: "Pinna Diana".to_string(),
            total: "€195.84".to_string(),
            sale_status: "Sales Order".to_string(),
            workflow: "Delivered Order".to_string(),
            stock_verification: "Completed".to_string(),
            completion: 75,
        },
        SaleRecord {
            id: "SO168744".to_string(),
            created_at: "Oct 22, 2024, 10:40".to_string(),
            client: Client {
                name: "Anna Schmidt".to_string(),
                status: ClientStatus::New,
            },
            location: "Munich, Germany".to_string(),
            sales_rep: "Vanni Monica".to_string(),
            total: "€3,900.00".to_string(),
            sale_status: "Sales Order".to_string(),
            workflow: "Completed Order".to_string(),
            stock_verification: "Completed".to_string(),
            completion: 100,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sample_ids_are_unique() {
        let records = sample_records();
        let ids: HashSet<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids.len(), records.len());
    }

    #[test]
    fn test_records_round_trip_through_json() {
        let records = sample_records();
        let json = serde_json::to_string(&records).unwrap();
        let parsed = records_from_json(&json).unwrap();
        assert_eq!(parsed, records);
    }

    #[test]
    fn test_broken_json_is_a_parse_error() {
        assert!(matches!(
            records_from_json("[{\"id\": }]"),
            Err(DataError::Parse(_))
        ));
    }
}
