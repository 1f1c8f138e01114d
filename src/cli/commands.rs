use std::sync::Arc;

use crate::app::{AppContext, NewswireError, Result};
use crate::domain::ArticleRecord;
use crate::feed::NewsFeed;
use crate::images::ImageLoader;

pub async fn list_articles(ctx: &AppContext, with_images: bool) -> Result<()> {
    let mut feed = NewsFeed::new(ctx.source.clone());
    feed.refresh().await;

    if let Some(err) = feed.state().error() {
        eprintln!("{}", err);
        return Ok(());
    }

    let articles = feed.visible_articles();
    if articles.is_empty() {
        println!("No articles");
        return Ok(());
    }

    print_articles(&articles);

    if with_images {
        fetch_thumbnails(ctx, &articles).await;
    }

    Ok(())
}

pub async fn search_articles(ctx: &AppContext, term: &str) -> Result<()> {
    let mut feed = NewsFeed::new(ctx.source.clone());
    feed.refresh().await;

    if let Some(err) = feed.state().error() {
        eprintln!("{}", err);
        return Ok(());
    }

    feed.set_search_term(term).await;

    let matches = feed.visible_articles();
    if matches.is_empty() {
        println!("No articles matching {:?}", term);
        return Ok(());
    }

    print_articles(&matches);
    Ok(())
}

pub async fn open_article(ctx: &AppContext, index: usize) -> Result<()> {
    let mut feed = NewsFeed::new(ctx.source.clone());
    feed.refresh().await;

    if let Some(err) = feed.state().error() {
        eprintln!("{}", err);
        return Ok(());
    }

    let url = feed
        .article_url(index)
        .ok_or(NewswireError::ArticleNotFound(index))?;

    open::that(&url)?;
    println!("Opened {}", url);
    Ok(())
}

fn print_articles(articles: &[ArticleRecord]) {
    for (index, article) in articles.iter().enumerate() {
        println!(
            "{:>3}  {:<16} {:<12} {}",
            index,
            article.source,
            article.date,
            article.display_title()
        );
    }
}

/// One task per thumbnail, mirroring how a visible row would load
/// independently. Failures show up as the placeholder marker.
async fn fetch_thumbnails(ctx: &AppContext, articles: &[ArticleRecord]) {
    let mut handles = Vec::new();

    for article in articles {
        let title = article.display_title();
        let Some(image_url) = article.image.clone() else {
            println!("  (no image)   {}", title);
            continue;
        };

        let fetcher = Arc::clone(&ctx.fetcher);
        handles.push(tokio::spawn(async move {
            let loader = ImageLoader::new(&image_url);
            loader.load(fetcher.as_ref()).await;
            (title, loader.bytes().len())
        }));
    }

    for handle in handles {
        match handle.await {
            Ok((title, 0)) => println!("  (placeholder) {}", title),
            Ok((title, len)) => println!("  {:>7} bytes  {}", len, title),
            Err(e) => {
                tracing::error!("Task join error: {}", e);
            }
        }
    }
}
