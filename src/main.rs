use clap::Parser;
use quote_card::core::card::compose_card;
use quote_card::core::store::{QuoteStore, Side};
use quote_card::domain::model::{CaptureOptions, CardBlock, FieldChange, Region, CARD_BACKGROUND};
use quote_card::domain::ports::RegionDirectory;
use quote_card::utils::{logger, validation::Validate};
use quote_card::{CliConfig, ExportPipeline, IbgeDirectory, LocalStorage, RasterCapture};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting quote-card CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let directory = IbgeDirectory::new(config.directory_endpoint.clone());
    let mut store = QuoteStore::new();

    // the directory is best-effort: offline means empty selection lists
    let regions = match directory.list_regions().await {
        Ok(regions) => regions,
        Err(e) => {
            tracing::warn!("Region directory unavailable: {}", e);
            Vec::new()
        }
    };

    apply_leg(
        &mut store,
        &directory,
        &regions,
        Side::Origin,
        config.origin_region.as_deref(),
        config.origin_city.as_deref(),
    )
    .await;
    apply_leg(
        &mut store,
        &directory,
        &regions,
        Side::Destination,
        config.destination_region.as_deref(),
        config.destination_city.as_deref(),
    )
    .await;

    store.apply(FieldChange::OriginNeighborhood(
        config.origin_neighborhood.clone(),
    ));
    store.apply(FieldChange::DestinationNeighborhood(
        config.destination_neighborhood.clone(),
    ));
    store.apply(FieldChange::ClientName(config.client.clone()));
    if let Some(date) = &config.service_date {
        store.apply(FieldChange::ServiceDate(date.clone()));
    }
    if !config.total_value.is_empty() {
        store.apply(FieldChange::TotalValue(config.total_value.clone()));
    }
    store.apply(FieldChange::Notes(config.notes.clone()));
    if let Some(name) = &config.sender_name {
        store.apply(FieldChange::SenderName(name.clone()));
    }
    if let Some(company) = &config.sender_company {
        store.apply(FieldChange::SenderCompany(company.clone()));
    }
    store.apply(FieldChange::SenderContact(config.sender_contact.clone()));

    if config.verbose {
        let snapshot_json = serde_json::to_string_pretty(store.snapshot())?;
        tracing::debug!("Final snapshot: {}", snapshot_json);
    }

    println!("Card preview:");
    for block in compose_card(store.snapshot()) {
        print_block(&block);
    }

    let sink = LocalStorage::new(config.output_path.clone());
    let options = CaptureOptions {
        quality: config.quality,
        background: CARD_BACKGROUND,
    };
    let pipeline = ExportPipeline::with_options(RasterCapture, sink, options);

    match pipeline.export(store.snapshot()).await {
        Ok(artifact) => {
            tracing::info!("Export completed: {}", artifact.filename);
            println!("Imagem gerada: {}/{}", config.output_path, artifact.filename);
        }
        Err(e) => {
            tracing::error!("Export failed: {}", e);
            eprintln!("Erro ao gerar imagem.");
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Resolves one leg's region and city selections against the directory and
/// applies them. Unresolvable selections degrade to a warning and leave the
/// leg showing the placeholder.
async fn apply_leg(
    store: &mut QuoteStore,
    directory: &IbgeDirectory,
    regions: &[Region],
    side: Side,
    region_arg: Option<&str>,
    city_arg: Option<&str>,
) {
    let Some(short_code) = region_arg else {
        return;
    };
    let Some(region) = regions
        .iter()
        .find(|r| r.short_code.eq_ignore_ascii_case(short_code))
        .cloned()
    else {
        tracing::warn!("Unknown region {:?}, leaving the leg unselected", short_code);
        return;
    };

    let change = match side {
        Side::Origin => FieldChange::OriginRegion(Some(region)),
        Side::Destination => FieldChange::DestinationRegion(Some(region)),
    };
    let Some(fetch) = store.apply(change) else {
        return;
    };
    let result = directory.list_cities(&fetch.region).await;
    store.complete_city_fetch(&fetch, result);

    let Some(city_name) = city_arg else {
        return;
    };
    let Some(city) = store
        .city_options(side)
        .cities()
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(city_name))
        .cloned()
    else {
        tracing::warn!("City {:?} not found in region {}", city_name, short_code);
        return;
    };
    let change = match side {
        Side::Origin => FieldChange::OriginCity(Some(city)),
        Side::Destination => FieldChange::DestinationCity(Some(city)),
    };
    store.apply(change);
}

fn print_block(block: &CardBlock) {
    match block {
        CardBlock::Client { name } => println!("  Cliente: {}", name),
        CardBlock::Route { pickup, delivery } => {
            println!("  Coleta: {}", pickup);
            println!("  Entrega: {}", delivery);
        }
        CardBlock::ServiceDate { display } => println!("  Data: {}", display),
        CardBlock::Price { display } => println!("  Valor Total: {}", display),
        CardBlock::Notes { text } => println!("  Observações: \"{}\"", text),
        CardBlock::Footer {
            company,
            sender,
            contact,
        } => println!("  {} | {} | {}", company, sender, contact),
    }
}
