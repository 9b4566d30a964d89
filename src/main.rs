extern crate booktalk_search;

use anyhow::Context;
use clap::Parser;
use scraper::{Html, Selector};

use crate::booktalk_search::components::url;
use crate::booktalk_search::config::DEFAULT_LIMIT;
use crate::booktalk_search::{
    Config, SearchController, SearchForm, SelectionDispatcher, SubmitOutcome,
};

/// Search Open Library by title or author and forward a picked book to the
/// BookTalk server
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Text typed into the search box
    search: String,

    /// What the text is matched against: `title` or `author`
    #[arg(long, default_value = "title")]
    subject: String,

    /// Click the N-th result (1-based) and send its id to the server
    #[arg(long)]
    select: Option<usize>,

    /// Print the results container markup instead of a listing
    #[arg(long)]
    html: bool,

    /// Open Library base url
    #[arg(long, default_value = url::OPEN_LIB_URL)]
    open_lib_url: String,

    /// Cover images base url
    #[arg(long, default_value = url::COVERS_URL)]
    covers_url: String,

    /// BookTalk server base url
    #[arg(long, default_value = url::SERVER_URL)]
    server_url: String,

    /// Results per search
    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    limit: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    let config = Config {
        open_lib_url: args.open_lib_url,
        covers_url: args.covers_url,
        server_url: args.server_url,
        limit: args.limit,
    };

    let client = reqwest::Client::builder().build()?;
    let dispatcher = SelectionDispatcher::new(client.clone(), &config);
    let controller = SearchController::new(client, config);

    let outcome = controller
        .submit(&SearchForm::new(args.subject, args.search))
        .await?;

    if let SubmitOutcome::Rendered { skipped, .. } = outcome {
        if skipped > 0 {
            eprintln!("{} malformed result(s) skipped", skipped);
        }
    }

    let results = controller.results().await;

    if args.html {
        println!("{}", results.to_html());
    } else {
        for (i, tag) in results.tags().iter().enumerate() {
            let fragment = Html::parse_fragment(&tag.html);
            let lines = fragment
                .select(&Selector::parse("li").unwrap())
                .map(|li| li.text().collect::<String>())
                .collect::<Vec<_>>()
                .join(" / ");

            println!("{}. {} [{}]", i + 1, lines, tag.book_id);
        }
    }

    if let Some(n) = args.select {
        let document = Html::parse_fragment(&results.to_html());
        let cover = n
            .checked_sub(1)
            .and_then(|i| {
                document
                    .select(&Selector::parse(".book-tag > .cover-image").unwrap())
                    .nth(i)
            })
            .with_context(|| format!("no result #{} to select", n))?;

        let selection = dispatcher.select(cover).await?;

        println!("sent {} to the server: {}", selection.book_id, selection.status);
    }

    Ok(())
}
