//! The cached strategy API client.
//!
//! This module provides [`StrategyClient`], which exposes the named
//! operations of the strategy API on top of a [`Transport`] and a
//! [`CacheStore`].

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::Value;

use crate::api::{ApiError, Namespace, OperationParameters};
use crate::api::{ActivityFilter, CategoryFilter, OrganizationSearch};
use crate::cache::{get_or_fetch, Arguments, CacheKey, CacheStore};
use crate::clients::{GraphqlClient, HttpClient, HttpMethod, HttpRequest, HttpResponse, Transport};
use crate::config::ClientConfig;

const ORGANIZATIONS_PATH: &str = "api/strategy_organizations";
const ORGANIZATION_CATEGORIES_PATH: &str = "api/strategy_organization_categories";
const ACTIVITIES_BY_FOCUS_PATH: &str = "api/activities_by_focuses";
const ACTIVITIES_BY_YEAR_PATH: &str = "api/activities_by_years";
const ACTIVITIES_BY_SECTOR_COUNCIL_PATH: &str = "api/activities_by_sector_councils";
const ACTIVITIES_TIMELINE_PATH: &str = "api/activities_timeline";

/// Client for the strategy API.
///
/// Every read operation goes through the cache: a hit is decoded and
/// returned without touching the network, a miss performs exactly one GET and
/// stores the raw body for the configured TTL. GraphQL queries and raw
/// requests are never cached.
///
/// # Thread Safety
///
/// `StrategyClient` is `Send + Sync` and cheap to clone; clones share the
/// cache and transport.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use strategy_api::{ApiKey, BaseUrl, ClientConfig, InMemoryCache, OrganizationSearch, StrategyClient};
///
/// let config = ClientConfig::builder()
///     .base_url(BaseUrl::new("https://strategy.example.com")?)
///     .api_key(ApiKey::new("secret")?)
///     .build()?;
/// let client = StrategyClient::new(config, Arc::new(InMemoryCache::new()))?;
///
/// let organizations = client
///     .search_organizations(&OrganizationSearch::new().title("ministry"))
///     .await?;
/// ```
#[derive(Clone)]
pub struct StrategyClient {
    config: ClientConfig,
    cache: Arc<dyn CacheStore>,
    transport: Arc<dyn Transport>,
    graphql: GraphqlClient,
}

// Verify StrategyClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StrategyClient>();
};

impl std::fmt::Debug for StrategyClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StrategyClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl StrategyClient {
    /// Creates a client that talks to the configured base URL over HTTPS.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the HTTP client cannot be created.
    pub fn new(config: ClientConfig, cache: Arc<dyn CacheStore>) -> Result<Self, ApiError> {
        let transport = Arc::new(HttpClient::new(&config)?);
        Ok(Self::with_transport(config, cache, transport))
    }

    /// Creates a client over an existing transport.
    #[must_use]
    pub fn with_transport(
        config: ClientConfig,
        cache: Arc<dyn CacheStore>,
        transport: Arc<dyn Transport>,
    ) -> Self {
        let graphql = GraphqlClient::new(Arc::clone(&transport));
        Self {
            config,
            cache,
            transport,
            graphql,
        }
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Derives the cache key an operation in `namespace` uses for `params`.
    #[must_use]
    pub fn cache_key<P: OperationParameters>(namespace: Namespace, params: &P) -> CacheKey {
        CacheKey::new(namespace.as_str(), &params.to_arguments())
    }

    /// Sends a request as-is and returns the unprocessed response.
    ///
    /// Nothing is cached and the status code is not inspected: a 4xx or 5xx
    /// response is returned as `Ok`. Call
    /// [`HttpResponse::into_content`] to turn an error status into
    /// [`HttpError::Response`](crate::clients::HttpError::Response), as the
    /// cached operations do.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] only if the request cannot be sent.
    pub async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        query: Option<BTreeMap<String, String>>,
        body: Option<Value>,
    ) -> Result<HttpResponse, ApiError> {
        let mut builder = HttpRequest::builder(method, path);
        if let Some(query) = query {
            builder = builder.query(query);
        }
        if let Some(body) = body {
            builder = builder.body(body);
        }
        Ok(self.transport.send(builder.build()).await?)
    }

    /// Executes a GraphQL query.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Graphql`] when the response reports errors,
    /// [`ApiError::Decode`] when it is not a JSON object and
    /// [`ApiError::Http`] on transport failures or error statuses.
    pub async fn get_graphql(&self, query: &str) -> Result<Value, ApiError> {
        Ok(self.graphql.query(query).await?)
    }

    /// Searches organizations by title, type and group.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn search_organizations(&self, search: &OrganizationSearch) -> Result<Value, ApiError> {
        self.cached_list(Namespace::SearchOrganization, ORGANIZATIONS_PATH, search)
            .await
    }

    /// Looks up an organization by its company registration number.
    ///
    /// Returns the first matching organization, or `None` when there is no
    /// match. An empty `crn` (including `"0"`) returns `None` without a cache
    /// lookup or request.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn get_organization_by_crn(&self, crn: &str) -> Result<Option<Value>, ApiError> {
        let mut arguments = Arguments::new();
        if !arguments.insert("ico", crn) {
            tracing::debug!("Skipping organization lookup for empty CRN");
            return Ok(None);
        }

        let key = CacheKey::new(Namespace::GetOrganization.as_str(), &arguments);
        let organizations = self
            .cached_get(&key, ORGANIZATIONS_PATH.to_string(), arguments.to_query())
            .await?;

        Ok(match organizations {
            Value::Array(items) => items.into_iter().next(),
            _ => None,
        })
    }

    /// Fetches an organization by its internal id.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn get_organization(&self, id: &str) -> Result<Value, ApiError> {
        self.cached_detail(Namespace::GetOrganization, ORGANIZATIONS_PATH, id)
            .await
    }

    /// Lists organization categories by level and parent.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn get_organization_categories(
        &self,
        filter: &CategoryFilter,
    ) -> Result<Value, ApiError> {
        self.cached_list(
            Namespace::GetOrganizationCategories,
            ORGANIZATION_CATEGORIES_PATH,
            filter,
        )
        .await
    }

    /// Lists activities grouped by focus.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn get_activities_by_focus(&self, filter: &ActivityFilter) -> Result<Value, ApiError> {
        self.cached_list(Namespace::ActivitiesByFocus, ACTIVITIES_BY_FOCUS_PATH, filter)
            .await
    }

    /// Lists activities grouped by year.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn get_activities_by_year(&self, filter: &ActivityFilter) -> Result<Value, ApiError> {
        self.cached_list(Namespace::ActivitiesByYear, ACTIVITIES_BY_YEAR_PATH, filter)
            .await
    }

    /// Lists activities grouped by sector council.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn get_activities_by_sector_council(
        &self,
        filter: &ActivityFilter,
    ) -> Result<Value, ApiError> {
        self.cached_list(
            Namespace::ActivitiesBySectorCouncil,
            ACTIVITIES_BY_SECTOR_COUNCIL_PATH,
            filter,
        )
        .await
    }

    /// Fetches the activities timeline.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn get_activities_timeline(&self) -> Result<Value, ApiError> {
        let key = CacheKey::new(Namespace::GetActivitiesTimeline.as_str(), &Arguments::new());
        self.cached_get(&key, format!("{ACTIVITIES_TIMELINE_PATH}/"), BTreeMap::new())
            .await
    }

    /// Fetches a single activity of the timeline.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn get_activity(&self, id: &str) -> Result<Value, ApiError> {
        self.cached_detail(Namespace::GetActivitiesTimeline, ACTIVITIES_TIMELINE_PATH, id)
            .await
    }

    async fn cached_list<P: OperationParameters + Sync>(
        &self,
        namespace: Namespace,
        path: &str,
        params: &P,
    ) -> Result<Value, ApiError> {
        let arguments = params.to_arguments();
        let key = CacheKey::new(namespace.as_str(), &arguments);
        self.cached_get(&key, path.to_string(), arguments.to_query())
            .await
    }

    async fn cached_detail(
        &self,
        namespace: Namespace,
        collection_path: &str,
        id: &str,
    ) -> Result<Value, ApiError> {
        let mut arguments = Arguments::new();
        arguments.insert_verbatim("id", id);
        let key = CacheKey::new(namespace.as_str(), &arguments);
        let path = format!("{collection_path}/{}", urlencoding::encode(id));
        self.cached_get(&key, path, BTreeMap::new()).await
    }

    /// Resolves `key` through the cache, fetching `path` on a miss, and
    /// decodes the body.
    async fn cached_get(
        &self,
        key: &CacheKey,
        path: String,
        query: BTreeMap<String, String>,
    ) -> Result<Value, ApiError> {
        let body = get_or_fetch(self.cache.as_ref(), key, self.config.cache_ttl(), || {
            self.fetch(path, query)
        })
        .await?;

        serde_json::from_str(&body).map_err(|e| {
            tracing::warn!("Response cached under {} is not valid JSON: {}", key, e);
            ApiError::Decode(e)
        })
    }

    async fn fetch(&self, path: String, query: BTreeMap<String, String>) -> Result<String, ApiError> {
        let request = HttpRequest::builder(HttpMethod::Get, path)
            .query(query)
            .build();
        Ok(self.transport.send(request).await?.into_content()?)
    }
}
