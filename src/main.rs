use mahabharatam_corpus::corpus::Corpus;
use mahabharatam_corpus::engine::CorpusEngine;
use mahabharatam_corpus::loader::FsBookResources;

use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 3 {
        eprintln!(
            "Usage: {} --corpus <dir> [--search <text> | --book <n> [--chapter <c>]]",
            args[0]
        );
        eprintln!("Example: {} --corpus ./books --search krishna", args[0]);
        eprintln!("Example: {} --corpus ./books --book 6 --chapter 25", args[0]);

        std::process::exit(1);
    }

    let mut corpus_dir: Option<String> = None;
    let mut query: Option<String> = None;
    let mut book: Option<u32> = None;
    let mut chapter: Option<u32> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--corpus" => {
                corpus_dir = Some(args[i + 1].clone());
                i += 2;
            }
            "--search" => {
                query = Some(args[i + 1].clone());
                i += 2;
            }
            "--book" => {
                book = Some(args[i + 1].parse()?);
                i += 2;
            }
            "--chapter" => {
                chapter = Some(args[i + 1].parse()?);
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    let corpus_dir = corpus_dir.ok_or_else(|| anyhow::anyhow!("--corpus is required"))?;
    let resources = Arc::new(FsBookResources::new(corpus_dir.as_str()));
    let engine = CorpusEngine::new(Corpus::new(), resources);

    tracing::info!(
        "Corpus engine ready over '{}' ({} books)",
        corpus_dir,
        engine.list_books().len()
    );

    if let Some(query) = query {
        let outcome = engine.search(&query).await;

        for verse in &outcome.matches {
            println!("{}  {}", verse.reference(), verse.text);
        }
        println!("{} matches for '{}'", outcome.matches.len(), query.trim());

        if outcome.is_degraded() {
            for failure in &outcome.failures {
                tracing::warn!("Book {} was skipped: {}", failure.book, failure.error);
            }
            println!(
                "(degraded result: {} of 18 books could not be read)",
                outcome.failures.len()
            );
        }
        return Ok(());
    }

    if let Some(book) = book {
        match chapter {
            Some(chapter) => {
                let verses = engine.chapter(book, chapter).await?;
                if verses.is_empty() {
                    println!("Book {} has no chapter {}", book, chapter);
                }
                for verse in verses {
                    println!("{}  {}", verse.reference(), verse.text);
                }
            }
            None => {
                let handle = engine.book(book).await?;
                println!(
                    "Book {}: {} chapters, {} verses",
                    book,
                    handle.chapter_count(),
                    handle.verse_count()
                );
            }
        }
        return Ok(());
    }

    anyhow::bail!("nothing to do: pass --search or --book");
}
