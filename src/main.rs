//! pokesdk - look up Pokémon, generations and name listings from the command line

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pokesdk::cli::{parse_kind_arg, Cli, Command};
use pokesdk::{RequestContext, Resolver};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let resolver = Resolver::from_config(cli.config()?)?;
    let ctx = RequestContext::background();

    match cli.command {
        Command::Pokemon { id_or_name } => {
            let pokemon = resolver.pokemon(id_or_name).get_with_context(&ctx).await?;
            let types: Vec<&str> = pokemon.types.iter().map(|t| t.kind.name.as_str()).collect();
            println!("#{} {}", pokemon.id, pokemon.name);
            println!("Height: {} dm", pokemon.height);
            println!("Weight: {} hg", pokemon.weight);
            println!("Types:  {}", types.join(", "));
        }
        Command::Generation { id_or_name } => {
            let generation = resolver.generation(id_or_name).get_with_context(&ctx).await?;
            println!("#{} {}", generation.id, generation.localized_name("en").unwrap_or(&generation.name));
            println!("Main region: {}", generation.main_region.name);
            println!("Species introduced: {}", generation.pokemon_species.len());
        }
        Command::List {
            kind,
            page,
            page_size,
            all,
        } => {
            let kind = parse_kind_arg(&kind)?;
            let mut cursor = resolver.list(kind, page, page_size);
            let names = if all {
                cursor.collect_remaining(&ctx).await?
            } else {
                cursor.get_with_context(&ctx).await?
            };
            for name in names {
                println!("{name}");
            }
        }
    }

    Ok(())
}
