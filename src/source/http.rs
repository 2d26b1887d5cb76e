//! reqwest-backed client for the facility REST API.

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use super::{DataSourceClient, FacilityFilter};
use crate::errors::{AppError, SourceError};
use crate::models::{
    CapacityRecord, DoctorRecord, FacilityId, FacilityProfile, Page, TriageSummary,
};

/// User-Agent sent with every upstream request.
const USER_AGENT: &str = concat!("facility-dashboard/", env!("CARGO_PKG_VERSION"));

/// Data source reading from the facility API over HTTP.
///
/// No request timeout is configured here; a read that never settles keeps the
/// dashboard loading.
#[derive(Clone)]
pub struct HttpDataSource {
    client: Client,
    base_url: Url,
}

impl HttpDataSource {
    /// Creates a client for the API rooted at `base_url`.
    pub fn new(base_url: &str) -> Result<Self, AppError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| AppError::Config(format!("Invalid upstream URL {}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(AppError::Config(format!(
                "Upstream URL {} cannot be used as a base",
                base_url
            )));
        }

        let client = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self { client, base_url })
    }

    /// Builds `{base}/api/v1/facility/{id}/{resource}/`, escaping the id as a path segment.
    fn facility_url(&self, facility_id: &FacilityId, resource: Option<&str>) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["api", "v1", "facility", facility_id.as_str()]);
            if let Some(resource) = resource {
                segments.push(resource);
            }
            segments.push("");
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, SourceError> {
        debug!(%url, "Fetching upstream resource");

        let response = self.client.get(url).send().await?.error_for_status()?;
        let body = response.bytes().await?;
        trace!(bytes = body.len(), "Upstream response received");

        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(SourceError::MissingPayload);
        }

        let payload: Option<T> = serde_json::from_slice(&body)?;
        payload.ok_or(SourceError::MissingPayload)
    }

    async fn get_page<T: DeserializeOwned>(&self, url: Url) -> Result<Vec<T>, SourceError> {
        let page: Page<T> = self.get_json(url).await?;
        Ok(page.into_results())
    }
}

impl DataSourceClient for HttpDataSource {
    async fn fetch_facility(&self, facility_id: &FacilityId) -> Result<FacilityProfile, SourceError> {
        self.get_json(self.facility_url(facility_id, None)).await
    }

    async fn list_capacity(
        &self,
        filter: &FacilityFilter,
    ) -> Result<Vec<CapacityRecord>, SourceError> {
        self.get_page(self.facility_url(&filter.facility_id, Some("capacity")))
            .await
    }

    async fn list_doctors(&self, filter: &FacilityFilter) -> Result<Vec<DoctorRecord>, SourceError> {
        self.get_page(self.facility_url(&filter.facility_id, Some("hospital_doctor")))
            .await
    }

    async fn fetch_triage_summary(
        &self,
        filter: &FacilityFilter,
    ) -> Result<Vec<TriageSummary>, SourceError> {
        self.get_page(self.facility_url(&filter.facility_id, Some("patient_stats")))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn facility(id: &str) -> FacilityId {
        FacilityId::parse(id).unwrap()
    }

    #[test]
    fn test_facility_url() {
        let source = HttpDataSource::new("http://localhost:9000").unwrap();
        assert_eq!(
            source.facility_url(&facility("12"), None).as_str(),
            "http://localhost:9000/api/v1/facility/12/"
        );
        assert_eq!(
            source.facility_url(&facility("12"), Some("capacity")).as_str(),
            "http://localhost:9000/api/v1/facility/12/capacity/"
        );
    }

    #[test]
    fn test_facility_url_keeps_base_path_and_escapes_id() {
        let source = HttpDataSource::new("http://localhost:9000/care/").unwrap();
        assert_eq!(
            source
                .facility_url(&facility("a/b"), Some("patient_stats"))
                .as_str(),
            "http://localhost:9000/care/api/v1/facility/a%2Fb/patient_stats/"
        );
    }

    #[test]
    fn test_rejects_invalid_base_url() {
        assert!(matches!(
            HttpDataSource::new("not a url"),
            Err(AppError::Config(_))
        ));
        assert!(matches!(
            HttpDataSource::new("mailto:ops@example.com"),
            Err(AppError::Config(_))
        ));
    }
}
