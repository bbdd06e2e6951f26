//! Paged lookup streams for reference-selection widgets.
//!
//! Reference fields (`user_id`, `company_id`) are picked from
//! server-side searches. Each provider turns a query prefix into a
//! stream of candidates, fetching pages lazily as the consumer pulls.

use std::future::Future;
use std::sync::Arc;

use futures::stream::{self, BoxStream, StreamExt, TryStreamExt};

use crate::api::{AdminApi, ApiError};
use fleetdesk_core::types::EntityId;

/// One page of results per server round trip.
const PAGE_SIZE: i64 = 20;

/// A selectable reference candidate: the id that goes into the record
/// and the label shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub id: EntityId,
    pub label: String,
}

/// Source of reference candidates for one entity.
pub trait LookupProvider: Send + Sync {
    /// Stream candidates whose display label starts with `query`.
    ///
    /// The stream ends after the first page shorter than the server
    /// page size. Errors terminate the stream.
    fn search(&self, query: &str) -> BoxStream<'static, Result<Candidate, ApiError>>;
}

/// Flatten a page-fetching function into a stream of candidates.
///
/// `fetch` is called with increasing offsets until it returns a short
/// page.
fn paged<F, Fut>(fetch: F) -> BoxStream<'static, Result<Candidate, ApiError>>
where
    F: Fn(i64) -> Fut + Send + 'static,
    Fut: Future<Output = Result<Vec<Candidate>, ApiError>> + Send + 'static,
{
    stream::try_unfold((fetch, Some(0i64)), |(fetch, offset)| async move {
        let Some(offset) = offset else {
            return Ok::<_, ApiError>(None);
        };
        let page = fetch(offset).await?;
        let next = if (page.len() as i64) < PAGE_SIZE {
            None
        } else {
            Some(offset + PAGE_SIZE)
        };
        Ok(Some((page, (fetch, next))))
    })
    .map_ok(|page| stream::iter(page.into_iter().map(Ok::<_, ApiError>)))
    .try_flatten()
    .boxed()
}

/// Candidates drawn from users, labelled by email.
pub struct UserLookup {
    api: Arc<AdminApi>,
}

impl UserLookup {
    pub fn new(api: Arc<AdminApi>) -> Self {
        Self { api }
    }
}

impl LookupProvider for UserLookup {
    fn search(&self, query: &str) -> BoxStream<'static, Result<Candidate, ApiError>> {
        let api = Arc::clone(&self.api);
        let query = query.to_string();
        paged(move |offset| {
            let api = Arc::clone(&api);
            let query = query.clone();
            async move {
                let users = api.search_users(&query, PAGE_SIZE, offset).await?;
                Ok(users
                    .into_iter()
                    .map(|u| Candidate {
                        id: u.id,
                        label: u.email,
                    })
                    .collect())
            }
        })
    }
}

/// Candidates drawn from companies, labelled by name.
pub struct CompanyLookup {
    api: Arc<AdminApi>,
}

impl CompanyLookup {
    pub fn new(api: Arc<AdminApi>) -> Self {
        Self { api }
    }
}

impl LookupProvider for CompanyLookup {
    fn search(&self, query: &str) -> BoxStream<'static, Result<Candidate, ApiError>> {
        let api = Arc::clone(&self.api);
        let query = query.to_string();
        paged(move |offset| {
            let api = Arc::clone(&api);
            let query = query.clone();
            async move {
                let companies = api.search_companies(&query, PAGE_SIZE, offset).await?;
                Ok(companies
                    .into_iter()
                    .map(|c| Candidate {
                        id: c.id,
                        label: c.name,
                    })
                    .collect())
            }
        })
    }
}
