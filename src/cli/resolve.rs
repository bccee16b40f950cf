use crate::cli::{collect_references, load_engine, Cli, InputArgs, OutputFormat};

pub fn run(cli: &Cli, args: &InputArgs) -> anyhow::Result<()> {
    let config = crate::cli::load_config(cli)?;
    let (_corpus, resolver) = load_engine(&config)?;
    let references = collect_references(&resolver, args, &config)?;

    tracing::debug!("Resolved {} verses", references.len());

    match cli.format {
        OutputFormat::Text => {
            for reference in &references {
                println!("{reference}");
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&references)?);
        }
    }
    Ok(())
}
