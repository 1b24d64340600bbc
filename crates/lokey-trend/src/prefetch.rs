//! Main-keyword derivation and concurrent prefetch.
//!
//! Candidate phrases number in the dozens, but their topics collapse onto
//! a handful of main keywords (category, place + category, category +
//! intent). Fetching trends once per main keyword and matching phrases
//! against them afterwards keeps the network cost flat.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinSet;

use lokey_config::TrendConfig;

use crate::cache::TrendCache;
use crate::source::{NaverNewsSource, NewsSignal, NewsSource};
use crate::{Hotness, TrendReport, TrendSnapshot, source};

/// The business slots main keywords are derived from.
#[derive(Debug, Clone, Default)]
pub struct TrendSubject {
    /// Primary business category.
    pub category: String,
    /// City slot, empty when unresolved.
    pub city: String,
    /// District slot, empty when unresolved.
    pub district: String,
    /// Dong slot.
    pub dong: Option<String>,
    /// Micro-area slot.
    pub micro_area: Option<String>,
    /// First menu item, if any.
    pub first_item: Option<String>,
    /// First feature, if any.
    pub first_feature: Option<String>,
}

/// Fetches and caches trend snapshots for a business.
pub struct TrendService {
    config: TrendConfig,
    source: Arc<dyn NewsSource + Send + Sync>,
    cache: Mutex<TrendCache>,
}

impl TrendService {
    /// Creates a service over an arbitrary news source.
    pub fn new(source: Arc<dyn NewsSource + Send + Sync>, config: TrendConfig) -> Self {
        let cache = Mutex::new(TrendCache::new(
            config.cache_capacity,
            Duration::from_secs(config.cache_ttl_secs),
        ));
        TrendService {
            config,
            source,
            cache,
        }
    }

    /// Creates a service backed by the Naver news API.
    pub fn naver(config: TrendConfig) -> Self {
        let timeout = Duration::from_millis(config.fetch_timeout_ms);
        TrendService::new(Arc::new(NaverNewsSource::new(timeout)), config)
    }

    /// Derives main keywords from the subject, broad to narrow, deduped,
    /// capped by configuration.
    pub fn main_keywords(&self, subject: &TrendSubject) -> Vec<String> {
        let category = subject.category.trim();
        if category.is_empty() {
            return Vec::new();
        }
        let mut raw: Vec<String> = vec![category.to_string()];
        if !subject.city.is_empty() {
            raw.push(format!("{} {category}", subject.city));
        }
        if !subject.district.is_empty() {
            raw.push(format!("{} {category}", subject.district));
        }
        raw.push(format!("{category} 추천"));
        if let Some(dong) = &subject.dong {
            raw.push(format!("{dong} {category}"));
        }
        if let Some(micro_area) = &subject.micro_area {
            raw.push(format!("{micro_area} {category}"));
        }
        if !subject.city.is_empty() {
            raw.push(format!("{} {category} 추천", subject.city));
        }
        if let Some(item) = &subject.first_item {
            raw.push(format!("{category} {item}"));
        }
        if let Some(feature) = &subject.first_feature {
            raw.push(format!("{feature} {category}"));
        }

        let mut out: Vec<String> = Vec::new();
        for keyword in raw {
            if !out.contains(&keyword) {
                out.push(keyword);
            }
            if out.len() >= self.config.max_main_keywords {
                break;
            }
        }
        out
    }

    /// Fetches snapshots for the subject's main keywords.
    ///
    /// Cache hits are served directly; misses are fetched concurrently,
    /// each bounded by the configured timeout. A failed or timed-out fetch
    /// yields a neutral snapshot and is not cached, so the next pass
    /// retries it.
    pub fn report(&self, subject: &TrendSubject) -> TrendReport {
        let keywords = self.main_keywords(subject);
        TrendReport::new(self.fetch_all(keywords))
    }

    fn fetch_all(&self, keywords: Vec<String>) -> Vec<TrendSnapshot> {
        let mut snapshots: Vec<Option<TrendSnapshot>> = vec![None; keywords.len()];
        let mut missing: Vec<(usize, String)> = Vec::new();
        {
            let mut cache = match self.cache.lock() {
                Ok(cache) => cache,
                Err(poisoned) => poisoned.into_inner(),
            };
            for (idx, keyword) in keywords.iter().enumerate() {
                match cache.get(keyword) {
                    Some(snapshot) => snapshots[idx] = Some(snapshot),
                    None => missing.push((idx, keyword.clone())),
                }
            }
        }

        if !missing.is_empty() {
            for (idx, keyword, fetched) in self.fetch_missing(missing) {
                if let Some(snapshot) = &fetched {
                    let mut cache = match self.cache.lock() {
                        Ok(cache) => cache,
                        Err(poisoned) => poisoned.into_inner(),
                    };
                    cache.insert(keyword.clone(), snapshot.clone());
                }
                snapshots[idx] = Some(fetched.unwrap_or_else(|| TrendSnapshot::empty(keyword)));
            }
        }

        snapshots
            .into_iter()
            .zip(keywords)
            .map(|(snapshot, keyword)| snapshot.unwrap_or_else(|| TrendSnapshot::empty(keyword)))
            .collect()
    }

    /// Runs the misses concurrently on a throwaway runtime. `None` marks a
    /// fetch that failed or timed out.
    fn fetch_missing(
        &self,
        missing: Vec<(usize, String)>,
    ) -> Vec<(usize, String, Option<TrendSnapshot>)> {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                log::error!("trend runtime unavailable: {err}");
                return missing
                    .into_iter()
                    .map(|(idx, keyword)| (idx, keyword, None))
                    .collect();
            }
        };
        let timeout = Duration::from_millis(self.config.fetch_timeout_ms);
        let config = self.config.clone();

        runtime.block_on(async {
            let mut tasks = JoinSet::new();
            for (idx, keyword) in missing {
                let source = Arc::clone(&self.source);
                let fetch_keyword = keyword.clone();
                tasks.spawn(async move {
                    let fetched = tokio::time::timeout(
                        timeout,
                        tokio::task::spawn_blocking(move || source.fetch(&fetch_keyword)),
                    )
                    .await;
                    (idx, keyword, fetched)
                });
            }

            let mut out = Vec::new();
            while let Some(joined) = tasks.join_next().await {
                let Ok((idx, keyword, fetched)) = joined else {
                    continue;
                };
                let snapshot = match fetched {
                    Ok(Ok(Ok(signal))) => Some(snapshot_from(&keyword, &signal, &config)),
                    Ok(Ok(Err(err))) => {
                        log::warn!("trend fetch for {keyword:?} failed: {err}");
                        None
                    }
                    Ok(Err(join_err)) => {
                        log::warn!("trend fetch task for {keyword:?} panicked: {join_err}");
                        None
                    }
                    Err(_) => {
                        log::warn!("trend fetch for {keyword:?} timed out");
                        None
                    }
                };
                out.push((idx, keyword, snapshot));
            }
            out
        })
    }

    /// Drops all cached snapshots.
    pub fn clear_cache(&self) {
        let mut cache = match self.cache.lock() {
            Ok(cache) => cache,
            Err(poisoned) => poisoned.into_inner(),
        };
        cache.clear();
    }
}

fn snapshot_from(keyword: &str, signal: &NewsSignal, config: &TrendConfig) -> TrendSnapshot {
    let hotness = if signal.total > config.high_count {
        Hotness::High
    } else if signal.total > config.medium_count {
        Hotness::Medium
    } else {
        Hotness::Low
    };
    TrendSnapshot {
        main_keyword: keyword.to_string(),
        hotness,
        is_urgent: signal.total > config.urgent_count,
        related_keywords: source::related_keywords(&signal.titles),
        article_count: signal.total,
    }
}
