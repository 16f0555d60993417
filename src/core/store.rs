//! The quote record store: a pure reducer over `QuoteRecord` plus the
//! per-side region→city fetch state machine.

use crate::core::format;
use crate::domain::model::{City, FieldChange, QuoteRecord, Region};
use crate::utils::error::Result;

/// Applies one field change and returns the next snapshot. `TotalValue` and
/// `SenderContact` are routed through their formatters; every other field is
/// stored verbatim. Selecting a region clears that side's city, since a city
/// from the previous region would be orphaned.
pub fn apply_field_change(record: &QuoteRecord, change: FieldChange) -> QuoteRecord {
    let mut next = record.clone();
    match change {
        FieldChange::ClientName(value) => next.client_name = value,
        FieldChange::OriginRegion(region) => {
            next.origin.region = region;
            next.origin.city = None;
        }
        FieldChange::OriginCity(city) => next.origin.city = city,
        FieldChange::OriginNeighborhood(value) => next.origin.neighborhood = value,
        FieldChange::DestinationRegion(region) => {
            next.destination.region = region;
            next.destination.city = None;
        }
        FieldChange::DestinationCity(city) => next.destination.city = city,
        FieldChange::DestinationNeighborhood(value) => next.destination.neighborhood = value,
        FieldChange::ServiceDate(value) => next.service_date = value,
        FieldChange::TotalValue(raw) => next.total_value = format::format_currency(&raw),
        FieldChange::Notes(value) => next.notes = value,
        FieldChange::SenderName(value) => next.sender_name = value,
        FieldChange::SenderCompany(value) => next.sender_company = value,
        FieldChange::SenderContact(raw) => next.sender_contact = format::format_phone(&raw),
    }
    next
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Origin,
    Destination,
}

/// City options for one side of the route. `Loading` carries the fetch id so
/// a stale completion can be told apart from the current one.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CityOptions {
    #[default]
    NoRegion,
    Loading {
        region: String,
        fetch_id: u64,
    },
    Ready {
        region: String,
        cities: Vec<City>,
    },
    Failed {
        region: String,
    },
}

impl CityOptions {
    /// The selectable cities; empty unless a fetch has completed successfully.
    pub fn cities(&self) -> &[City] {
        match self {
            CityOptions::Ready { cities, .. } => cities,
            _ => &[],
        }
    }
}

/// Ticket identifying one outstanding city fetch. Fetch ids are monotonic
/// across both sides.
#[derive(Debug, Clone, PartialEq)]
pub struct CityFetch {
    pub side: Side,
    pub region: String,
    pub fetch_id: u64,
}

#[derive(Debug, Default)]
pub struct QuoteStore {
    record: QuoteRecord,
    origin_options: CityOptions,
    destination_options: CityOptions,
    next_fetch_id: u64,
}

impl QuoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current immutable view of the record.
    pub fn snapshot(&self) -> &QuoteRecord {
        &self.record
    }

    pub fn city_options(&self, side: Side) -> &CityOptions {
        match side {
            Side::Origin => &self.origin_options,
            Side::Destination => &self.destination_options,
        }
    }

    fn options_mut(&mut self, side: Side) -> &mut CityOptions {
        match side {
            Side::Origin => &mut self.origin_options,
            Side::Destination => &mut self.destination_options,
        }
    }

    /// Applies one field change synchronously. A region selection additionally
    /// re-arms that side's city options and returns the fetch ticket the
    /// caller must complete with the directory response.
    pub fn apply(&mut self, change: FieldChange) -> Option<CityFetch> {
        let fetch = match &change {
            FieldChange::OriginRegion(region) => self.arm_city_fetch(Side::Origin, region.clone()),
            FieldChange::DestinationRegion(region) => {
                self.arm_city_fetch(Side::Destination, region.clone())
            }
            _ => None,
        };
        self.record = apply_field_change(&self.record, change);
        fetch
    }

    fn arm_city_fetch(&mut self, side: Side, region: Option<Region>) -> Option<CityFetch> {
        match region {
            None => {
                *self.options_mut(side) = CityOptions::NoRegion;
                None
            }
            Some(region) => {
                self.next_fetch_id += 1;
                let fetch_id = self.next_fetch_id;
                *self.options_mut(side) = CityOptions::Loading {
                    region: region.short_code.clone(),
                    fetch_id,
                };
                Some(CityFetch {
                    side,
                    region: region.short_code,
                    fetch_id,
                })
            }
        }
    }

    /// Merges a completed city fetch. Last snapshot wins: the result only
    /// lands if the ticket still matches the side's outstanding fetch, so a
    /// slow response for a superseded region is discarded.
    pub fn complete_city_fetch(&mut self, fetch: &CityFetch, result: Result<Vec<City>>) {
        let slot = self.options_mut(fetch.side);
        match slot {
            CityOptions::Loading { fetch_id, .. } if *fetch_id == fetch.fetch_id => {
                *slot = match result {
                    Ok(cities) => CityOptions::Ready {
                        region: fetch.region.clone(),
                        cities,
                    },
                    Err(e) => {
                        tracing::warn!("City list fetch for {} failed: {}", fetch.region, e);
                        CityOptions::Failed {
                            region: fetch.region.clone(),
                        }
                    }
                };
            }
            _ => {
                tracing::debug!("Discarding stale city list for {}", fetch.region);
            }
        }
    }
}
