use crate::core::format;
use crate::domain::model::{CardBlock, Place, QuoteRecord};

fn leg_display(place: &Place) -> String {
    let region = place
        .region
        .as_ref()
        .map(|r| r.short_code.as_str())
        .unwrap_or("");
    let city = place.city.as_ref().map(|c| c.name.as_str()).unwrap_or("");
    format::compose_address(region, city, &place.neighborhood)
}

/// Derives the display blocks for the card, in card order: client (if any),
/// route, date, price, notes (if any), footer. Pure: identical snapshots
/// always compose the same block set.
pub fn compose_card(record: &QuoteRecord) -> Vec<CardBlock> {
    let mut blocks = Vec::with_capacity(6);

    if !record.client_name.is_empty() {
        blocks.push(CardBlock::Client {
            name: record.client_name.clone(),
        });
    }

    blocks.push(CardBlock::Route {
        pickup: leg_display(&record.origin),
        delivery: leg_display(&record.destination),
    });

    blocks.push(CardBlock::ServiceDate {
        display: format::format_date_display(&record.service_date),
    });

    let price = if record.total_value.is_empty() {
        format::ZERO_CURRENCY.to_string()
    } else {
        record.total_value.clone()
    };
    blocks.push(CardBlock::Price { display: price });

    if !record.notes.is_empty() {
        blocks.push(CardBlock::Notes {
            text: record.notes.clone(),
        });
    }

    blocks.push(CardBlock::Footer {
        company: record.sender_company.clone(),
        sender: record.sender_name.clone(),
        contact: record.sender_contact.clone(),
    });

    blocks
}
