//! Short link creation, resolution and statistics.

use std::sync::Arc;

use crate::domain::entities::Link;
use crate::domain::repositories::{LinkStore, StoreError};
use crate::utils::code_generator::{CodeGenerator, GeneratorError};
use crate::utils::url_validator::{UrlValidationError, validate_url};

/// Attempts made by [`ShortenerService::create`] before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

/// Errors returned by [`ShortenerService`].
///
/// A duplicate id reported by the store is handled inside
/// [`ShortenerService::create`] and never appears here as such.
#[derive(Debug, thiserror::Error)]
pub enum ShortenError {
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] UrlValidationError),

    #[error("could not generate unique id after {attempts} attempts, too many collisions")]
    TooManyCollisions { attempts: usize },

    #[error("short link '{0}' not found")]
    NotFound(String),

    #[error(transparent)]
    Generator(#[from] GeneratorError),

    #[error(transparent)]
    Store(StoreError),
}

impl ShortenError {
    fn from_store(err: StoreError, id: &str) -> Self {
        match err {
            StoreError::NotFound => ShortenError::NotFound(id.to_string()),
            other => ShortenError::Store(other),
        }
    }
}

/// Orchestrates code generation and storage.
///
/// The service holds no state of its own. Uniqueness is decided by the store;
/// the service only retries with a new candidate when a save collides.
pub struct ShortenerService<S: ?Sized, G: ?Sized> {
    store: Arc<S>,
    generator: Arc<G>,
    max_attempts: usize,
}

impl<S, G> ShortenerService<S, G>
where
    S: LinkStore + ?Sized,
    G: CodeGenerator + ?Sized,
{
    /// Creates a service with the default retry budget.
    pub fn new(store: Arc<S>, generator: Arc<G>) -> Self {
        Self {
            store,
            generator,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Overrides the number of generate-and-save attempts per `create`.
    ///
    /// Values below 1 are raised to 1.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Retry budget of [`Self::create`].
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Shortens `url` and stores the new link with zero hits.
    ///
    /// # Collision Handling
    ///
    /// Attempt 0 feeds the raw URL to the generator; attempt `n` feeds
    /// `"{url}#{n}"`, so a deterministic generator yields a fresh candidate
    /// on every retry. A duplicate id moves on to the next attempt; any other
    /// store error ends the call.
    ///
    /// # Errors
    ///
    /// - [`ShortenError::InvalidUrl`] if `url` is not an absolute http(s) URL
    /// - [`ShortenError::TooManyCollisions`] once every attempt collided
    /// - [`ShortenError::Generator`] / [`ShortenError::Store`] on faults
    pub async fn create(&self, url: &str) -> Result<Link, ShortenError> {
        validate_url(url)?;

        for attempt in 0..self.max_attempts {
            let input = if attempt == 0 {
                url.to_string()
            } else {
                format!("{url}#{attempt}")
            };

            let id = self.generator.next(&input)?;
            let link = Link::fresh(id, url);

            match self.store.save(link.clone()).await {
                Ok(()) => return Ok(link),
                Err(StoreError::DuplicateId) => continue,
                Err(e) => return Err(ShortenError::Store(e)),
            }
        }

        Err(ShortenError::TooManyCollisions {
            attempts: self.max_attempts,
        })
    }

    /// Returns the URL behind `id` and records one hit.
    ///
    /// The hit is stored before the URL is returned; if the increment fails
    /// the whole call fails.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenError::NotFound`] if `id` is unknown, including the
    /// case where it disappears between lookup and increment.
    pub async fn resolve(&self, id: &str) -> Result<String, ShortenError> {
        let link = self
            .store
            .get(id)
            .await
            .map_err(|e| ShortenError::from_store(e, id))?;

        self.store
            .increment_hits(id)
            .await
            .map_err(|e| ShortenError::from_store(e, id))?;

        Ok(link.url)
    }

    /// Returns the stored record for `id` without counting a hit.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenError::NotFound`] if `id` is unknown.
    pub async fn stats(&self, id: &str) -> Result<Link, ShortenError> {
        self.store
            .get(id)
            .await
            .map_err(|e| ShortenError::from_store(e, id))
    }
}
