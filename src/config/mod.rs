pub mod cli;

#[cfg(feature = "cli")]
use crate::core::directory::IBGE_BASE_URL;
#[cfg(feature = "cli")]
use crate::domain::model::JPEG_QUALITY;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "quote-card")]
#[command(about = "Builds a freight quote card and exports it as a JPEG image")]
pub struct CliConfig {
    #[arg(long, default_value = "", help = "Client name shown on the card")]
    pub client: String,

    #[arg(long, help = "Origin region short code, e.g. SP")]
    pub origin_region: Option<String>,

    #[arg(long, help = "Origin city name")]
    pub origin_city: Option<String>,

    #[arg(long, default_value = "")]
    pub origin_neighborhood: String,

    #[arg(long, help = "Destination region short code, e.g. RJ")]
    pub destination_region: Option<String>,

    #[arg(long, help = "Destination city name")]
    pub destination_city: Option<String>,

    #[arg(long, default_value = "")]
    pub destination_neighborhood: String,

    #[arg(long, help = "Service date as YYYY-MM-DD (defaults to today)")]
    pub service_date: Option<String>,

    #[arg(
        long,
        default_value = "",
        help = "Raw price keystrokes, e.g. 15000 for R$ 150,00"
    )]
    pub total_value: String,

    #[arg(long, default_value = "")]
    pub notes: String,

    #[arg(long, help = "Sender name shown in the footer")]
    pub sender_name: Option<String>,

    #[arg(long, help = "Company name shown in the footer")]
    pub sender_company: Option<String>,

    #[arg(long, default_value = "", help = "Raw contact phone digits")]
    pub sender_contact: String,

    #[arg(long, default_value = IBGE_BASE_URL)]
    pub directory_endpoint: String,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, default_value_t = JPEG_QUALITY)]
    pub quality: f32,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("directory_endpoint", &self.directory_endpoint)?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_unit_interval("quality", self.quality)?;
        Ok(())
    }
}
