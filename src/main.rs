use clap::Parser;
use tagmark::application::{
    init::init, ConfigService, ListTagsService, RenderDocumentService, ScanDocumentsService,
    SuggestTagsService,
};
use tagmark::cli::{format_suggestions, format_tag_table, format_token_stream, Cli, Commands};
use tagmark::error::TagmarkError;
use tagmark::infrastructure::{FileSystemRepository, PortalRepository};

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), TagmarkError> {
    match cli.command {
        Some(Commands::Init { path }) => init(&path),
        Some(Commands::Render { file }) => {
            let repo = FileSystemRepository::discover()?;
            let service = RenderDocumentService::new(repo);
            let tokens = service.execute(&file)?;
            println!("{}", format_token_stream(&tokens));
            Ok(())
        }
        Some(Commands::Scan { dir }) => {
            let repo = FileSystemRepository::discover()?;
            let service = ScanDocumentsService::new(repo);
            let summary = service.execute(dir.as_deref())?;
            println!(
                "Scanned {} documents, registered {}",
                summary.documents, summary.registered
            );
            Ok(())
        }
        Some(Commands::Tags {
            namespace,
            popular,
            limit,
        }) => {
            let repo = FileSystemRepository::discover()?;
            let limit = if popular {
                let config = repo.load_config()?;
                Some(limit.unwrap_or(config.popular_limit))
            } else {
                limit
            };
            let service = ListTagsService::new(repo);
            let tags = service.execute(namespace.as_deref(), limit)?;
            println!("{}", format_tag_table(&tags));
            Ok(())
        }
        Some(Commands::Suggest { term }) => {
            let repo = FileSystemRepository::discover()?;
            let service = SuggestTagsService::new(repo);
            let suggestions = service.execute(&term)?;
            println!("{}", format_suggestions(&term, &suggestions));
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("suggestion_limit = {}", config.suggestion_limit);
                println!("popular_limit = {}", config.popular_limit);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: tagmark config [--list | <key> [<value>]]");
                println!("Valid keys: suggestion_limit, popular_limit, created");
                Ok(())
            }
        }
        None => {
            println!("tagmark - Markup tokenizer and tag registry");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
