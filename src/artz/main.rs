use artz::error::Result;
use artz::service::ArticleService;
use artz::store::file::FileStore;
use artz::store::memory::InMemoryStore;
use artz::store::ArticleStore;
use clap::Parser;
use colored::*;
use std::path::PathBuf;

mod args;
use args::{Backend, Cli};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // The only place a concrete backend is named. Everything past this
    // match works against the ArticleStore trait.
    match cli.backend {
        Backend::Memory => run_demo(ArticleService::new(InMemoryStore::new()), cli.json),
        Backend::File => {
            let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            run_demo(
                ArticleService::new(FileStore::new(cwd.join(".artz"))),
                cli.json,
            )
        }
    }
}

fn run_demo<S: ArticleStore>(mut service: ArticleService<S>, json: bool) -> Result<()> {
    seed_articles(&mut service)?;

    if json {
        let articles = service.get_articles()?;
        println!("{}", serde_json::to_string_pretty(&articles)?);
        return Ok(());
    }

    for title in service.get_titles() {
        println!("{}", title.bold());
        println!("{}\n", service.get_content(&title)?);
    }
    Ok(())
}

fn seed_articles<S: ArticleStore>(service: &mut ArticleService<S>) -> Result<()> {
    service.create_article(
        "Article 1",
        "High-level modules should not depend on low-level modules; \
         both should depend on abstractions.",
    )?;
    service.create_article(
        "Article 2",
        "Abstractions should not depend on details; \
         details should depend on abstractions.",
    )?;
    service.create_article(
        "Article 3",
        "A dependency is injected when the caller constructs it and hands it in, \
         instead of the component building its own.",
    )?;
    Ok(())
}
