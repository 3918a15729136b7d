//! Catalog assembly: load, index, compose.

use std::panic::resume_unwind;
use std::thread;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::catalog::lint::{ReferenceWarning, lint_references};
use crate::catalog::{DataProvider, Dataset, LoadError};
use crate::index::CatalogIndex;
use crate::localizer::Localizer;
use crate::render::{Card, compose_card};
use crate::types::{ActionRecord, ConditionRecord, Envelope, LicenseRecord, NoticeRecord};

/// The four datasets, parsed and unwrapped from their envelopes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Datasets {
    pub licenses: Vec<LicenseRecord>,
    pub actions: Vec<ActionRecord>,
    pub conditions: Vec<ConditionRecord>,
    pub notices: Vec<NoticeRecord>,
}

/// Parse one dataset document: a JSON array of `{ "data": record }`.
pub fn parse_dataset<T: DeserializeOwned>(
    dataset: Dataset,
    document: &str,
) -> Result<Vec<T>, LoadError> {
    let envelopes: Vec<Envelope<T>> = serde_json::from_str(document)
        .map_err(|source| LoadError::Parse { dataset, source })?;
    debug!(%dataset, records = envelopes.len(), "parsed dataset");
    Ok(envelopes.into_iter().map(|envelope| envelope.data).collect())
}

/// Compose one card per license, in input order.
///
/// This is the pure half of catalog building: it takes already-loaded
/// datasets and cannot fail.
pub fn assemble(datasets: Datasets, localizer: &Localizer) -> Vec<Card> {
    Catalog::from_datasets(datasets, localizer).into_cards()
}

/// A loaded catalog: the license records, their reference indices, and the
/// composed cards.
#[derive(Debug, Clone)]
pub struct Catalog {
    licenses: Vec<LicenseRecord>,
    index: CatalogIndex,
    cards: Vec<Card>,
}

impl Catalog {
    /// Fetch all four datasets and build the catalog.
    ///
    /// The fetches run concurrently and are joined before anything is
    /// indexed. If any fetch or parse fails, the whole build fails with the
    /// first error in [`Dataset::ALL`] order and no cards are produced.
    pub fn load<P: DataProvider + ?Sized>(
        provider: &P,
        localizer: &Localizer,
    ) -> Result<Catalog, LoadError> {
        let [licenses, actions, conditions, notices] = fetch_all(provider);
        let datasets = Datasets {
            licenses: parse_dataset(Dataset::Licenses, &licenses?)?,
            actions: parse_dataset(Dataset::Actions, &actions?)?,
            conditions: parse_dataset(Dataset::Conditions, &conditions?)?,
            notices: parse_dataset(Dataset::Notices, &notices?)?,
        };
        Ok(Catalog::from_datasets(datasets, localizer))
    }

    /// Build a catalog from datasets that are already in memory.
    pub fn from_datasets(datasets: Datasets, localizer: &Localizer) -> Catalog {
        let Datasets {
            licenses,
            actions,
            conditions,
            notices,
        } = datasets;
        let index = CatalogIndex::build(actions, conditions, notices);
        let cards = licenses
            .iter()
            .map(|license| compose_card(license, &index, localizer))
            .collect();
        Catalog {
            licenses,
            index,
            cards,
        }
    }

    /// Cards in license input order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }

    pub fn licenses(&self) -> &[LicenseRecord] {
        &self.licenses
    }

    pub fn index(&self) -> &CatalogIndex {
        &self.index
    }

    /// Dangling references and unknown condition nodes in the licenses.
    pub fn lint(&self) -> Vec<ReferenceWarning> {
        lint_references(&self.licenses, &self.index)
    }
}

/// Fetch every dataset on its own scoped thread and join them all.
fn fetch_all<P: DataProvider + ?Sized>(provider: &P) -> [Result<String, LoadError>; 4] {
    thread::scope(|scope| {
        Dataset::ALL
            .map(|dataset| scope.spawn(move || provider.fetch(dataset)))
            .map(|handle| handle.join().unwrap_or_else(|panic| resume_unwind(panic)))
    })
}
