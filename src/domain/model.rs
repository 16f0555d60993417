use chrono::Local;
use serde::{Deserialize, Serialize};

/// Top-level administrative division (state) as served by the directory.
/// Field renames follow the IBGE wire names (`id`/`sigla`/`nome`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    #[serde(rename = "id")]
    pub code: u64,
    #[serde(rename = "sigla")]
    pub short_code: String,
    #[serde(rename = "nome")]
    pub name: String,
}

/// Second-level division, selectable only after a region is chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    #[serde(rename = "id")]
    pub code: u64,
    #[serde(rename = "nome")]
    pub name: String,
}

/// One leg of the route. The city only carries meaning alongside its region;
/// the neighborhood is free text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub region: Option<Region>,
    pub city: Option<City>,
    pub neighborhood: String,
}

/// The single in-progress quote. `total_value` and `sender_contact` hold
/// already-formatted display strings; formatting is one-way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRecord {
    pub client_name: String,
    pub origin: Place,
    pub destination: Place,
    /// ISO calendar date, `YYYY-MM-DD`. The display form is derived, never stored.
    pub service_date: String,
    pub total_value: String,
    pub notes: String,
    pub sender_name: String,
    pub sender_company: String,
    pub sender_contact: String,
}

impl Default for QuoteRecord {
    fn default() -> Self {
        Self {
            client_name: String::new(),
            origin: Place::default(),
            destination: Place::default(),
            service_date: Local::now().format("%Y-%m-%d").to_string(),
            total_value: String::new(),
            notes: String::new(),
            sender_name: "Seu Nome".to_string(),
            sender_company: "Nome da Transportadora".to_string(),
            sender_contact: String::new(),
        }
    }
}

/// One field update coming from the input surface.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldChange {
    ClientName(String),
    OriginRegion(Option<Region>),
    OriginCity(Option<City>),
    OriginNeighborhood(String),
    DestinationRegion(Option<Region>),
    DestinationCity(Option<City>),
    DestinationNeighborhood(String),
    ServiceDate(String),
    TotalValue(String),
    Notes(String),
    SenderName(String),
    SenderCompany(String),
    SenderContact(String),
}

/// A display block of the composed card, in card order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum CardBlock {
    Client {
        name: String,
    },
    Route {
        pickup: String,
        delivery: String,
    },
    ServiceDate {
        display: String,
    },
    Price {
        display: String,
    },
    Notes {
        text: String,
    },
    Footer {
        company: String,
        sender: String,
        contact: String,
    },
}

pub const CARD_WIDTH: u32 = 480;
pub const CARD_HEIGHT: u32 = 853;

/// The visual surface handed to the capture facility: a fixed 9:16 canvas
/// carrying the composed blocks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardSurface {
    pub width: u32,
    pub height: u32,
    pub blocks: Vec<CardBlock>,
}

impl CardSurface {
    pub fn new(blocks: Vec<CardBlock>) -> Self {
        Self {
            width: CARD_WIDTH,
            height: CARD_HEIGHT,
            blocks,
        }
    }
}

pub const JPEG_QUALITY: f32 = 0.95;
pub const CARD_BACKGROUND: [u8; 3] = [255, 255, 255];

/// Capture options. The background is always applied opaquely, regardless of
/// the surface's own transparency.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptureOptions {
    pub quality: f32,
    pub background: [u8; 3],
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self {
            quality: JPEG_QUALITY,
            background: CARD_BACKGROUND,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportArtifact {
    pub filename: String,
    pub size_bytes: usize,
}
