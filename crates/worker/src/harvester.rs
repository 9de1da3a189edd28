//! Runs workers in order and persists the people they produce.

use std::sync::Arc;

use census_db::models::person::CreatePerson;
use census_db::repositories::{LocationRepo, PersonRepo};
use census_db::DbPool;

use crate::config::SourceConfig;
use crate::error::WorkerError;
use crate::fetch::{HttpFetcher, JsonFetcher};
use crate::record::PersonRecord;
use crate::sources::{GenderizeApi, JsonPlaceholderApi, PersonSource, RandomUserApi, UINamesApi};

/// Outcome of one worker within a harvest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarvestSummary {
    pub source: &'static str,
    pub persons_created: usize,
}

/// Ordered list of workers sharing one fetcher.
pub struct Harvester {
    sources: Vec<Box<dyn PersonSource>>,
    fetcher: Arc<dyn JsonFetcher>,
}

impl Harvester {
    pub fn new(fetcher: Arc<dyn JsonFetcher>) -> Self {
        Self {
            sources: Vec::new(),
            fetcher,
        }
    }

    /// Append a worker; workers run in the order they were added.
    pub fn with_source(mut self, source: impl PersonSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// RandomUser, then UINames, then JsonPlaceholder (gendered via Genderize).
    pub fn from_config(config: &SourceConfig, fetcher: Arc<dyn JsonFetcher>) -> Self {
        Self::new(fetcher)
            .with_source(RandomUserApi::new(
                &config.random_user_url,
                config.random_user_results,
            ))
            .with_source(UINamesApi::new(&config.ui_names_url, config.ui_names_amount))
            .with_source(JsonPlaceholderApi::new(
                &config.json_placeholder_url,
                GenderizeApi::new(&config.genderize_url),
            ))
    }

    /// [`Harvester::from_config`] over a fresh [`HttpFetcher`].
    pub fn over_http(config: &SourceConfig) -> Self {
        Self::from_config(config, Arc::new(HttpFetcher::new()))
    }

    pub fn source_names(&self) -> Vec<&'static str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    /// Run every worker once.
    ///
    /// Each worker collects its whole batch before anything is written and
    /// persists it in one transaction, so a failing worker writes nothing.
    /// The first error stops the run; rows written by earlier workers stay.
    pub async fn run(&self, pool: &DbPool) -> Result<Vec<HarvestSummary>, WorkerError> {
        let mut summaries = Vec::with_capacity(self.sources.len());

        for source in &self.sources {
            let name = source.name();
            let records = source.collect(self.fetcher.as_ref()).await.map_err(|e| {
                tracing::warn!(source = name, error = %e, "Worker failed");
                e
            })?;

            let persons_created = persist(pool, &records).await?;
            tracing::info!(source = name, persons_created, "Worker finished");

            summaries.push(HarvestSummary {
                source: name,
                persons_created,
            });
        }

        Ok(summaries)
    }
}

/// Write one worker's batch in a single transaction; on error nothing from
/// the batch is kept.
async fn persist(pool: &DbPool, records: &[PersonRecord]) -> Result<usize, WorkerError> {
    let mut tx = pool.begin().await?;
    for record in records {
        let location = LocationRepo::get_or_create(&mut *tx, &record.location).await?;
        PersonRepo::create(
            &mut *tx,
            &CreatePerson {
                gender: record.gender,
                first_name: record.first_name.clone(),
                last_name: record.last_name.clone(),
                location_id: location.id,
            },
        )
        .await?;
    }
    tx.commit().await?;
    Ok(records.len())
}
