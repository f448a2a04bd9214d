use crate::source::{
    AtomEnvelope, AtomSource, AtomsEnvelope, HistoryEnvelope, PositionsEnvelope,
    TrendingEnvelope,
};
use crate::{Error, Result};
use async_trait::async_trait;
use atomscope_engine::HistoryWindow;
use atomscope_types::{
    Atom, AtomDetail, FilterSpec, HistoryPoint, Position, SyncMode, SyncReport, TrendingPeriod,
};
use reqwest::{Client as ReqwestClient, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

/// Client for the REST backend rooted at `<api_url>/api/v1`.
///
/// ```ignore
/// let source = HttpSource::new("http://localhost:3000", Duration::from_secs(15))?;
/// let atoms = source.list_atoms(20, None).await?;
/// ```
#[derive(Debug, Clone)]
pub struct HttpSource {
    base_url: String,
    client: ReqwestClient,
}

#[derive(Debug, Serialize)]
struct SyncRequest {
    mode: SyncMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    limit: Option<usize>,
}

impl HttpSource {
    pub fn new(api_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = format!("{}/api/v1", api_url.trim_end_matches('/'));
        Url::parse(&base_url).map_err(|e| Error::InvalidUrl(format!("{}: {}", api_url, e)))?;
        let client = ReqwestClient::builder().timeout(timeout).build()?;
        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Endpoint URL; each segment is percent-encoded, so ids cannot alter the route
    fn url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = Url::parse(&self.base_url).map_err(|e| Error::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| Error::InvalidUrl(self.base_url.clone()))?
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = self.url(segments)?;
        debug!(%url, ?query, "GET");
        let response = self.client.get(url.clone()).query(query).send().await?;
        let (status, body) = read_body(response).await?;
        if !(200..300).contains(&status) {
            warn!(%url, status, "request failed");
            return Err(Error::Status {
                status,
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }
        Ok(serde_json::from_slice(&body)?)
    }
}

fn with_bounds(
    mut query: Vec<(&'static str, String)>,
    filters: Option<&FilterSpec>,
) -> Vec<(&'static str, String)> {
    if let Some(spec) = filters {
        query.extend(spec.bound_params());
    }
    query
}

async fn read_body(response: reqwest::Response) -> Result<(u16, Vec<u8>)> {
    let status = response.status().as_u16();
    let body = response.bytes().await?;
    Ok((status, body.to_vec()))
}

#[async_trait]
impl AtomSource for HttpSource {
    async fn list_atoms(&self, limit: usize, filters: Option<&FilterSpec>) -> Result<Vec<Atom>> {
        let query = with_bounds(vec![("limit", limit.to_string())], filters);
        let envelope: AtomsEnvelope = self.get_json(&["atoms"], &query).await?;
        Ok(envelope.atoms)
    }

    async fn get_atom(&self, id: &str) -> Result<AtomDetail> {
        let envelope: AtomEnvelope = self.get_json(&["atoms", id], &[]).await?;
        Ok(envelope.atom)
    }

    async fn atom_history(&self, id: &str, window: HistoryWindow) -> Result<Vec<HistoryPoint>> {
        let (key, value) = window.query_param();
        let envelope: HistoryEnvelope = self
            .get_json(&["atoms", id, "history"], &[(key, value.to_string())])
            .await?;
        Ok(envelope.data)
    }

    async fn trending(
        &self,
        period: TrendingPeriod,
        limit: usize,
        filters: Option<&FilterSpec>,
    ) -> Result<Vec<Atom>> {
        let query = with_bounds(
            vec![
                ("period", period.as_str().to_string()),
                ("limit", limit.to_string()),
            ],
            filters,
        );
        let envelope: TrendingEnvelope = self.get_json(&["trending"], &query).await?;
        Ok(envelope.trending)
    }

    async fn search(&self, query: &str, limit: usize) -> Result<Vec<Atom>> {
        let envelope: AtomsEnvelope = self
            .get_json(
                &["search"],
                &[("query", query.to_string()), ("limit", limit.to_string())],
            )
            .await?;
        Ok(envelope.atoms)
    }

    async fn sync(&self, mode: SyncMode, limit: Option<usize>) -> Result<SyncReport> {
        let url = self.url(&["sync"])?;
        debug!(%url, %mode, ?limit, "POST");
        let response = self
            .client
            .post(url)
            .json(&SyncRequest { mode, limit })
            .send()
            .await?;
        let (status, body) = read_body(response).await?;

        // A failed run still carries a report with the server's error text
        match serde_json::from_slice::<SyncReport>(&body) {
            Ok(report) if (200..300).contains(&status) => Ok(report),
            Ok(mut report) => {
                report.success = false;
                Ok(report)
            }
            Err(_) if !(200..300).contains(&status) => Err(Error::Status {
                status,
                body: String::from_utf8_lossy(&body).into_owned(),
            }),
            Err(err) => Err(Error::Decode(err)),
        }
    }

    async fn positions(
        &self,
        address: &str,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<Position>> {
        let address = atomscope_types::validate_address(address)?;
        let envelope: PositionsEnvelope = self
            .get_json(
                &["positions"],
                &[
                    ("address", address.to_string()),
                    ("limit", limit.to_string()),
                    ("offset", offset.to_string()),
                ],
            )
            .await?;
        Ok(envelope.positions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_normalized() {
        let source = HttpSource::new("http://localhost:3000/", Duration::from_secs(1)).unwrap();
        assert_eq!(source.base_url(), "http://localhost:3000/api/v1");
        assert_eq!(
            source.url(&["atoms"]).unwrap().as_str(),
            "http://localhost:3000/api/v1/atoms"
        );
    }

    #[test]
    fn test_id_segment_is_encoded() {
        let source = HttpSource::new("http://localhost:3000", Duration::from_secs(1)).unwrap();
        assert_eq!(
            source.url(&["atoms", "a/b?x=1", "history"]).unwrap().as_str(),
            "http://localhost:3000/api/v1/atoms/a%2Fb%3Fx=1/history"
        );
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let err = HttpSource::new("not a url", Duration::from_secs(1)).unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));
    }

    #[test]
    fn test_sync_request_body() {
        let body = serde_json::to_value(SyncRequest {
            mode: SyncMode::Full,
            limit: None,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "mode": "full" }));
    }
}
