use crate::clients::{RegistryClient, SearchClient};
use crate::results::{CompanyRecord, NO_DATA, RegistryDetails};
use std::time::Duration;

/// Limits and pacing for the enrichment loop
#[derive(Debug, Clone, Copy)]
pub struct EnrichOptions {
    /// Stop once this many records exist
    pub max_records: usize,
    /// Pause after each processed candidate
    pub delay: Duration,
    /// Search for the NIP directly when the registry has none
    pub nip_search_fallback: bool,
}

/// Enriches candidates in order until `max_records` records have been built.
///
/// Every processed candidate yields a record, enriched or not. Failures of
/// individual lookups never stop the loop.
pub async fn enrich_candidates(
    search: &SearchClient,
    registry: &RegistryClient,
    candidates: &[String],
    options: EnrichOptions,
) -> Vec<CompanyRecord> {
    let mut records = Vec::with_capacity(candidates.len().min(options.max_records));

    for company in candidates {
        if records.len() >= options.max_records {
            ::log::debug!("Reached {} records, skipping the rest", options.max_records);
            break;
        }

        ::log::info!("Processing company: {}", company);
        let record = enrich_company(search, registry, company, options.nip_search_fallback).await;
        ::log::debug!("{:?} (enriched: {})", record, record.is_enriched());
        records.push(record);

        if !options.delay.is_zero() {
            tokio::time::sleep(options.delay).await;
        }
    }

    records
}

/// KRS search, then registry lookup if a KRS number turned up
pub async fn enrich_company(
    search: &SearchClient,
    registry: &RegistryClient,
    company: &str,
    nip_search_fallback: bool,
) -> CompanyRecord {
    let mut details = match search.find_krs(company).await {
        Some(krs) => {
            ::log::debug!("{} has KRS {}", company, krs);
            registry.lookup(&krs).await
        }
        None => RegistryDetails::no_data(),
    };

    if nip_search_fallback && details.nip == NO_DATA {
        details.nip = search.find_nip(company).await;
    }

    CompanyRecord::new(company, details)
}
