//! ProviderSearch - 医療機関検索のスタブ
//!
//! 実際の検索は行わず、プレースホルダーの Notice を返します。

use async_trait::async_trait;
use tracing::{info, warn};

use super::actions::{FindProviders, RequestLocation};
use crate::domain::errors::{CarepageError, InputError};
use crate::domain::outcome::{Notice, Outcome};
use crate::typed::Handler;

#[derive(Debug, Clone, Copy, Default)]
pub struct ProviderSearch;

impl ProviderSearch {
    /// Any specialty is accepted, including an empty (unselected) one.
    /// A blank location is rejected before anything else happens.
    pub fn search(&self, specialty: &str, location: &str) -> Result<Notice, InputError> {
        let location = location.trim();
        if location.is_empty() {
            warn!("provider search without location rejected");
            return Err(InputError::MissingLocation);
        }
        info!(specialty, location, "provider search requested");
        Ok(Notice::new(format!(
            "Searching for {specialty} providers near {location}...\n\n\
             This would connect to Google Maps API and healthcare provider databases in a real application."
        )))
    }

    pub fn locate(&self) -> Notice {
        info!("current location requested");
        Notice::new(
            "Getting your current location...\n\n\
             In a real application, this would use the browser's Geolocation API with proper user permissions.",
        )
    }
}

#[async_trait]
impl Handler<FindProviders> for ProviderSearch {
    async fn handle(&self, action: FindProviders) -> Result<Outcome, CarepageError> {
        let notice = self.search(&action.specialty, &action.location)?;
        Ok(Outcome::Notice(notice))
    }
}

#[async_trait]
impl Handler<RequestLocation> for ProviderSearch {
    async fn handle(&self, _action: RequestLocation) -> Result<Outcome, CarepageError> {
        Ok(Outcome::Notice(self.locate()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Cardiology")]
    #[case("")]
    #[case("All Specialties")]
    fn search_with_location_proceeds_for_any_specialty(#[case] specialty: &str) {
        let notice = ProviderSearch.search(specialty, "Springfield").unwrap();
        assert!(notice.as_str().starts_with(&format!("Searching for {specialty} providers near Springfield...")));
        assert!(notice.as_str().contains("in a real application"));
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn search_without_location_is_rejected(#[case] location: &str) {
        let err = ProviderSearch.search("Cardiology", location).unwrap_err();
        assert_eq!(err, InputError::MissingLocation);
        assert_eq!(
            err.to_string(),
            "Please enter a location to find healthcare providers."
        );
    }

    #[test]
    fn location_is_trimmed_in_notice() {
        let notice = ProviderSearch.search("Dermatology", "  Austin ").unwrap();
        assert!(notice.as_str().contains("near Austin..."));
    }

    #[test]
    fn locate_mentions_geolocation() {
        assert!(ProviderSearch.locate().as_str().contains("Geolocation API"));
    }
}
