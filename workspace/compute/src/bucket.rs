use common::{Bucket, PredictionResponse};
use tracing::{debug, trace};

/// Result of looking up a bucket label in a forecast payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatchOutcome<'a> {
    Matched(&'a Bucket),
    /// No forecast for the requested window. Not an error; the map shows no predictions.
    NoMatchingBucket,
}

impl<'a> MatchOutcome<'a> {
    pub fn bucket(self) -> Option<&'a Bucket> {
        match self {
            Self::Matched(bucket) => Some(bucket),
            Self::NoMatchingBucket => None,
        }
    }

    pub fn is_match(self) -> bool {
        matches!(self, Self::Matched(_))
    }
}

/// Finds the first bucket whose label equals `label`, ignoring ASCII case.
///
/// When the payload repeats a label, the first occurrence wins.
pub fn match_bucket<'a>(response: Option<&'a PredictionResponse>, label: &str) -> MatchOutcome<'a> {
    let Some(response) = response else {
        trace!(label, "No forecast payload to match against");
        return MatchOutcome::NoMatchingBucket;
    };

    match response
        .buckets
        .iter()
        .find(|bucket| bucket.time_bucket.eq_ignore_ascii_case(label))
    {
        Some(bucket) => {
            trace!(label, zones = bucket.zone_predictions.len(), "Matched forecast bucket");
            MatchOutcome::Matched(bucket)
        }
        None => {
            debug!(
                label,
                available = response.buckets.len(),
                "No forecast bucket matches the selected window"
            );
            MatchOutcome::NoMatchingBucket
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bucket(label: &str, start: &str) -> Bucket {
        Bucket {
            time_bucket: label.to_string(),
            forecast_start_time: Some(start.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let response = PredictionResponse::new(vec![bucket("0-6H", "a"), bucket("6-12h", "b")]);
        let outcome = match_bucket(Some(&response), "0-6h");
        assert_eq!(outcome.bucket().unwrap().forecast_start_time.as_deref(), Some("a"));
    }

    #[test]
    fn test_first_duplicate_wins() {
        let response = PredictionResponse::new(vec![
            bucket("12-18h", "first"),
            bucket("12-18h", "second"),
        ]);
        let outcome = match_bucket(Some(&response), "12-18h");
        assert_eq!(outcome.bucket().unwrap().forecast_start_time.as_deref(), Some("first"));
    }

    #[test]
    fn test_unknown_label_is_no_matching_bucket() {
        let response = PredictionResponse::new(vec![bucket("0-6h", "a")]);
        assert_eq!(
            match_bucket(Some(&response), "42-48h"),
            MatchOutcome::NoMatchingBucket
        );
    }

    #[test]
    fn test_absent_or_empty_response_is_no_matching_bucket() {
        assert!(!match_bucket(None, "0-6h").is_match());
        assert!(!match_bucket(Some(&PredictionResponse::default()), "0-6h").is_match());
    }
}
