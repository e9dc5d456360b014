//! Prediction caching

use moka::future::Cache;
use std::sync::Arc;

use crate::prediction::Prediction;
use crate::query::SymptomQuery;

/// Bounded cache of finished predictions keyed by normalized query
///
/// The disease table is immutable, so entries never go stale; capacity is
/// the only bound. A capacity of 0 disables caching.
#[derive(Clone)]
pub struct PredictionCache {
    cache: Option<Cache<Vec<String>, Arc<Vec<Prediction>>>>,
}

impl PredictionCache {
    pub fn new(max_entries: u64) -> Self {
        let cache = (max_entries > 0).then(|| Cache::builder().max_capacity(max_entries).build());
        Self { cache }
    }

    pub fn is_enabled(&self) -> bool {
        self.cache.is_some()
    }

    pub async fn get(&self, query: &SymptomQuery) -> Option<Arc<Vec<Prediction>>> {
        match &self.cache {
            Some(cache) => cache.get(&query.cache_key()).await,
            None => None,
        }
    }

    pub async fn insert(&self, query: &SymptomQuery, predictions: Vec<Prediction>) {
        if let Some(cache) = &self.cache {
            cache.insert(query.cache_key(), Arc::new(predictions)).await;
        }
    }
}
