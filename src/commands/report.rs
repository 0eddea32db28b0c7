use crate::*;

pub fn handle_commands(cli: &Cli) -> anyhow::Result<()> {
    let pattern = load_pattern(&cli.input)?;
    tracing::info!(path = %cli.input.display(), "loaded pattern");

    match cli.command() {
        Commands::Count => {
            let report = summarize(&pattern);
            print_lines(cli.json, report, |r| {
                vec![
                    r.blocks.to_string(),
                    r.block_entities.to_string(),
                    r.top_level_entities.to_string(),
                ]
            })?;
        }
        Commands::Blocks => {
            let rows = block_summaries(&pattern);
            print_out(cli.json, &rows, |b| format!("{}\t{}", b.id, b.entities))?;
        }
    }

    Ok(())
}
