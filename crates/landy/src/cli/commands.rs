//! Context wiring and per-command handlers.
//!
//! `run()` parses arguments, loads configuration, builds the API over
//! filesystem storage, and dispatches. The HTTP adapters are attached only
//! when the chosen subcommand actually generates content, so every local
//! command works without an API key.

use super::render;
use super::setup::{Cli, Commands};
use anyhow::{bail, Context, Result};
use clap::Parser;
use landyapp::api::{LandyApi, SectionRef};
use landyapp::config::LandyConfig;
use landyapp::crawler::HttpCrawler;
use landyapp::generator::HttpGenerator;
use landyapp::model::GenerationContext;
use landyapp::store::fs_backend::FsBackend;
use landyapp::store::DocumentStore;
use serde_json::{Map, Value};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

type FsStore = DocumentStore<FsBackend>;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = match &cli.config {
        Some(path) => LandyConfig::load_from(path)?,
        None => LandyConfig::load()?,
    };

    let mut api = init_api(&cli.command, &config)?;

    match cli.command {
        Commands::Generate {
            industry,
            offer,
            target_audience,
            brand_tone,
            competitor_url,
            json,
        } => {
            let context = GenerationContext {
                industry,
                offer,
                target_audience,
                brand_tone,
                competitor_url,
            };
            handle_generate(&mut api, context, json)
        }
        Commands::List { json } => handle_list(&api, json),
        Commands::Show { page, json } => handle_show(&api, page, json),
        Commands::Edit {
            page,
            section,
            content,
        } => handle_edit(&mut api, page, &section, &content),
        Commands::Regenerate { page, section } => handle_regenerate(&mut api, page, &section),
        Commands::Reorder { page, sections } => handle_reorder(&mut api, page, &sections),
        Commands::RemoveSection { page, section } => {
            handle_remove_section(&mut api, page, &section)
        }
        Commands::Publish { page } => handle_publish(&mut api, page),
        Commands::Delete { page } => handle_delete(&mut api, page),
    }
}

/// Route `tracing` diagnostics to stderr, filtered by `LANDY_LOG`.
/// Stdout stays reserved for command output.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("LANDY_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn init_api(command: &Commands, config: &LandyConfig) -> Result<LandyApi<FsStore>> {
    let store = DocumentStore::with_backend(FsBackend::new(config.data_dir()?));
    let mut api = LandyApi::new(store);

    if matches!(
        command,
        Commands::Generate { .. } | Commands::Regenerate { .. }
    ) {
        api = api.with_generator(Box::new(HttpGenerator::new(config)?));
    }
    if let Commands::Generate {
        competitor_url: Some(_),
        ..
    } = command
    {
        api = api.with_crawler(Box::new(HttpCrawler::new(config)?));
    }
    Ok(api)
}

fn handle_generate(
    api: &mut LandyApi<FsStore>,
    context: GenerationContext,
    json: bool,
) -> Result<()> {
    let result = api.generate_page(context)?;
    if json {
        if let Some(page) = &result.page {
            println!("{}", serde_json::to_string_pretty(page)?);
        }
        return Ok(());
    }
    if let Some(page) = &result.page {
        print!("{}", render::render_page(page));
    }
    render::print_messages(&result.messages);
    Ok(())
}

fn handle_list(api: &LandyApi<FsStore>, json: bool) -> Result<()> {
    let result = api.list_pages()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&result.listed_pages)?);
        return Ok(());
    }
    print!("{}", render::render_summary_list(&result.listed_pages));
    render::print_messages(&result.messages);
    Ok(())
}

fn handle_show(api: &LandyApi<FsStore>, page_id: Uuid, json: bool) -> Result<()> {
    let result = api.get_page(page_id)?;
    if json {
        if let Some(page) = &result.page {
            println!("{}", serde_json::to_string_pretty(page)?);
        }
        return Ok(());
    }
    if let Some(page) = &result.page {
        print!("{}", render::render_page(page));
    }
    render::print_messages(&result.messages);
    Ok(())
}

fn handle_edit(
    api: &mut LandyApi<FsStore>,
    page_id: Uuid,
    section: &SectionRef,
    content: &str,
) -> Result<()> {
    let content = parse_content_object(content)?;
    let result = api.edit_section(page_id, section, content)?;
    render::print_messages(&result.messages);
    Ok(())
}

fn handle_regenerate(
    api: &mut LandyApi<FsStore>,
    page_id: Uuid,
    section: &SectionRef,
) -> Result<()> {
    let result = api.regenerate_section(page_id, section)?;
    render::print_messages(&result.messages);
    Ok(())
}

fn handle_reorder(
    api: &mut LandyApi<FsStore>,
    page_id: Uuid,
    sections: &[SectionRef],
) -> Result<()> {
    let result = api.reorder_sections(page_id, sections)?;
    render::print_messages(&result.messages);
    Ok(())
}

fn handle_remove_section(
    api: &mut LandyApi<FsStore>,
    page_id: Uuid,
    section: &SectionRef,
) -> Result<()> {
    let result = api.delete_section(page_id, section)?;
    render::print_messages(&result.messages);
    Ok(())
}

fn handle_publish(api: &mut LandyApi<FsStore>, page_id: Uuid) -> Result<()> {
    let result = api.publish_page(page_id)?;
    render::print_messages(&result.messages);
    Ok(())
}

fn handle_delete(api: &mut LandyApi<FsStore>, page_id: Uuid) -> Result<()> {
    let result = api.delete_page(page_id)?;
    render::print_messages(&result.messages);
    Ok(())
}

fn parse_content_object(raw: &str) -> Result<Map<String, Value>> {
    let value: Value = serde_json::from_str(raw).context("--content is not valid JSON")?;
    match value {
        Value::Object(map) => Ok(map),
        _ => bail!("--content must be a JSON object, e.g. '{{\"headline\": \"New copy\"}}'"),
    }
}
