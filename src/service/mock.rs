use std::time::Duration;

use async_trait::async_trait;
use regex::Regex;

use super::{LocationService, NameValidator, ServiceError};

/// In-process stand-in for the remote validator and location APIs.
#[derive(Debug, Clone)]
pub struct MockApi {
    locations: Vec<String>,
    invalid_names: Vec<String>,
    name_pattern: Option<Regex>,
    validation_delay: Duration,
    locations_delay: Duration,
    fail_validation: bool,
    fail_locations: bool,
}

impl Default for MockApi {
    fn default() -> Self {
        Self::new(["Canada", "China", "USA", "Brazil"].map(String::from).to_vec())
    }
}

impl MockApi {
    /// Creates a mock serving `locations` with no delays and a single
    /// rejected name, `invalid name`.
    pub fn new(locations: Vec<String>) -> Self {
        Self {
            locations,
            invalid_names: vec!["invalid name".to_string()],
            name_pattern: None,
            validation_delay: Duration::ZERO,
            locations_delay: Duration::ZERO,
            fail_validation: false,
            fail_locations: false,
        }
    }

    /// Replaces the list of names the validator rejects (exact match).
    pub fn with_invalid_names(mut self, names: Vec<String>) -> Self {
        self.invalid_names = names;
        self
    }

    /// Rejects any name the pattern does not match.
    pub fn with_name_pattern(mut self, pattern: Regex) -> Self {
        self.name_pattern = Some(pattern);
        self
    }

    /// Sets the simulated latency of each call.
    pub fn with_delays(mut self, validation: Duration, locations: Duration) -> Self {
        self.validation_delay = validation;
        self.locations_delay = locations;
        self
    }

    /// Makes every name validation fail.
    pub fn failing_validation(mut self) -> Self {
        self.fail_validation = true;
        self
    }

    /// Makes the location fetch fail.
    pub fn failing_locations(mut self) -> Self {
        self.fail_locations = true;
        self
    }

    fn accepts(&self, name: &str) -> bool {
        let listed = self.invalid_names.iter().any(|n| n == name);
        let matches = self.name_pattern.as_ref().is_none_or(|re| re.is_match(name));
        !listed && matches
    }
}

#[async_trait]
impl NameValidator for MockApi {
    async fn is_name_valid(&self, name: &str) -> Result<bool, ServiceError> {
        tokio::time::sleep(self.validation_delay).await;
        if self.fail_validation {
            return Err(ServiceError::Unavailable("name validator".into()));
        }
        Ok(self.accepts(name))
    }
}

#[async_trait]
impl LocationService for MockApi {
    async fn locations(&self) -> Result<Vec<String>, ServiceError> {
        tokio::time::sleep(self.locations_delay).await;
        if self.fail_locations {
            return Err(ServiceError::Unavailable("location service".into()));
        }
        Ok(self.locations.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn default_locations() {
        let api = MockApi::default();
        assert_eq!(
            api.locations().await,
            Ok(vec![
                "Canada".to_string(),
                "China".to_string(),
                "USA".to_string(),
                "Brazil".to_string()
            ])
        );
    }

    #[tokio::test]
    async fn ordinary_name_is_valid() {
        assert_eq!(MockApi::default().is_name_valid("Al").await, Ok(true));
    }

    #[tokio::test]
    async fn listed_name_is_invalid() {
        assert_eq!(
            MockApi::default().is_name_valid("invalid name").await,
            Ok(false)
        );
    }

    #[tokio::test]
    async fn listed_names_match_exactly() {
        assert_eq!(
            MockApi::default().is_name_valid("Invalid Name").await,
            Ok(true)
        );
    }

    #[tokio::test]
    async fn custom_invalid_names() {
        let api = MockApi::default().with_invalid_names(vec!["root".into()]);
        assert_eq!(api.is_name_valid("root").await, Ok(false));
        assert_eq!(api.is_name_valid("invalid name").await, Ok(true));
    }

    #[tokio::test]
    async fn pattern_rejects_non_matching() {
        let api = MockApi::default().with_name_pattern(Regex::new(r"^[A-Za-z ]+$").unwrap());
        assert_eq!(api.is_name_valid("Al").await, Ok(true));
        assert_eq!(api.is_name_valid("Al9").await, Ok(false));
    }

    #[tokio::test]
    async fn failing_validation_errors() {
        let api = MockApi::default().failing_validation();
        assert!(matches!(
            api.is_name_valid("Al").await,
            Err(ServiceError::Unavailable(_))
        ));
    }

    #[tokio::test]
    async fn failing_locations_errors() {
        let api = MockApi::default().failing_locations();
        assert!(matches!(
            api.locations().await,
            Err(ServiceError::Unavailable(_))
        ));
    }

    #[tokio::test]
    async fn delays_are_honoured() {
        let api = MockApi::default().with_delays(Duration::from_millis(20), Duration::ZERO);
        let start = std::time::Instant::now();
        api.is_name_valid("Al").await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}
