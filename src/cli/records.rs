use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use versemap::layout::Layout;
use versemap::storage::{sanitize_name, PassageRecord, RecordStore};

use crate::cli::{collect_references, load_config, load_engine, Cli, InputArgs, OutputFormat};

#[derive(Args, Debug, Clone)]
pub struct CreateArgs {
    /// Project name
    #[arg(long)]
    pub name: String,

    /// Output directory (defaults to VERSEMAP_OUTPUT_DIR)
    #[arg(long)]
    pub output_path: Option<PathBuf>,

    #[command(flatten)]
    pub input: InputArgs,
}

pub fn create(cli: &Cli, args: &CreateArgs) -> anyhow::Result<()> {
    let name = args.name.trim();
    anyhow::ensure!(!name.is_empty(), "Project name must not be blank");

    let config = load_config(cli)?;
    let (corpus, resolver) = load_engine(&config)?;
    let references = collect_references(&resolver, &args.input, &config)?;

    let layout = Layout::build(&corpus);
    let highlights = layout.highlight(&corpus, &references);

    let output_dir = args.output_path.clone().unwrap_or_else(|| config.output_dir.clone());
    let image_path = output_dir.join(format!("{}.png", sanitize_name(name)));
    tracing::info!(
        "Mapped {} of {} references onto a {}x{} layout for {}",
        highlights.len(),
        references.len(),
        layout.width(),
        layout.height(),
        image_path.display()
    );

    let store = RecordStore::new(&config.data_file);
    let record = store
        .save(
            name,
            &output_dir.display().to_string(),
            &image_path.display().to_string(),
            references,
            highlights,
        )
        .context("Failed to save record")?;

    match cli.format {
        OutputFormat::Text => println!("{}\tSaved passage map.", record.id),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "id": record.id,
                "message": "Saved passage map.",
            }))?
        ),
    }
    Ok(())
}

pub fn list(cli: &Cli) -> anyhow::Result<()> {
    let config = load_config(cli)?;
    let records = RecordStore::new(&config.data_file).list()?;

    match cli.format {
        OutputFormat::Text => {
            for record in &records {
                println!(
                    "{}\t{}\t{}\t{} verses",
                    record.id,
                    record.name,
                    record.created_at.format("%Y-%m-%d %H:%M"),
                    record.references.len()
                );
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&records)?),
    }
    Ok(())
}

pub fn show(cli: &Cli, id: &str) -> anyhow::Result<()> {
    let config = load_config(cli)?;
    let record = RecordStore::new(&config.data_file)
        .find_by_id(id)?
        .with_context(|| format!("No record with id {id}"))?;

    match cli.format {
        OutputFormat::Text => print_record(&record),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&record)?),
    }
    Ok(())
}

fn print_record(record: &PassageRecord) {
    println!("Record:  {}", record.id);
    println!("Name:    {}", record.name);
    println!("Output:  {}", record.output_path);
    println!("Image:   {}", record.image_path);
    println!("Created: {}", record.created_at.to_rfc3339());
    println!("Verses:  {}", record.references.len());
    for region in &record.highlights {
        println!(
            "  {:<24} x={} y={} w={} h={}",
            region.verse, region.x, region.y, region.width, region.height
        );
    }
}
