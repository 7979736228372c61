//! The feature layout the trained classifier was fit against.
//!
//! Order and names are a contract with the model artifact: the classifier reads features by
//! position, so a reordered or renamed field produces silently wrong probabilities.

use serde::Serialize;

use super::domain::CreditRequest;

/// Feature names in the exact positional order the classifier expects.
pub const FEATURE_NAMES: [&str; 5] = [
    "monthly_income",
    "requested_amount",
    "term_in_months",
    "age",
    "monthly_debt",
];

/// Fixed-size, strongly named classifier input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureVector {
    pub monthly_income: f64,
    pub requested_amount: f64,
    pub term_in_months: f64,
    pub age: f64,
    pub monthly_debt: f64,
}

impl FeatureVector {
    /// The single mapping from a validated request to classifier input.
    pub fn from_request(request: &CreditRequest) -> Self {
        Self {
            monthly_income: request.monthly_income,
            requested_amount: request.requested_amount,
            term_in_months: f64::from(request.term_in_months),
            age: f64::from(request.age),
            monthly_debt: request.monthly_debt,
        }
    }

    /// Values ordered as in [`FEATURE_NAMES`].
    pub fn as_array(&self) -> [f64; 5] {
        [
            self.monthly_income,
            self.requested_amount,
            self.term_in_months,
            self.age,
            self.monthly_debt,
        ]
    }

    pub fn named(&self) -> impl Iterator<Item = (&'static str, f64)> {
        FEATURE_NAMES.into_iter().zip(self.as_array())
    }
}

impl From<&CreditRequest> for FeatureVector {
    fn from(request: &CreditRequest) -> Self {
        Self::from_request(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CreditRequest {
        CreditRequest {
            client_id: 42,
            age: 31,
            monthly_income: 5200.0,
            monthly_debt: 800.0,
            requested_amount: 15_000.0,
            term_in_months: 36,
        }
    }

    #[test]
    fn array_follows_trained_schema_order() {
        let vector = FeatureVector::from_request(&request());
        assert_eq!(vector.as_array(), [5200.0, 15_000.0, 36.0, 31.0, 800.0]);
    }

    #[test]
    fn named_pairs_match_feature_names() {
        let vector = FeatureVector::from_request(&request());
        let pairs: Vec<_> = vector.named().collect();
        assert_eq!(
            pairs,
            vec![
                ("monthly_income", 5200.0),
                ("requested_amount", 15_000.0),
                ("term_in_months", 36.0),
                ("age", 31.0),
                ("monthly_debt", 800.0),
            ]
        );
    }

    #[test]
    fn payload_key_order_does_not_change_the_vector() {
        let forward: CreditRequest = serde_json::from_str(
            r#"{"client_id":42,"age":31,"monthly_income":5200.0,"monthly_debt":800.0,
                "requested_amount":15000.0,"term_in_months":36}"#,
        )
        .expect("parses");
        let shuffled: CreditRequest = serde_json::from_str(
            r#"{"term_in_months":36,"monthly_debt":800.0,"requested_amount":15000.0,
                "age":31,"client_id":42,"monthly_income":5200.0}"#,
        )
        .expect("parses");

        assert_eq!(
            FeatureVector::from(&forward).as_array(),
            FeatureVector::from(&shuffled).as_array()
        );
    }

    #[test]
    fn client_id_does_not_reach_the_vector() {
        let mut other = request();
        other.client_id = 9_999;
        assert_eq!(
            FeatureVector::from_request(&request()),
            FeatureVector::from_request(&other)
        );
    }
}
