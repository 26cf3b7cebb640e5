use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use homepage::{api, graphql, hn, pages::Route, AppState, Config};

#[derive(Parser)]
#[command(name = "homepage")]
#[command(about = "Personal website with writing, podcast, bookmarks and a Hacker News mirror")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve {
        /// Address to bind, overrides HOMEPAGE_BIND_ADDR
        #[arg(short, long)]
        bind: Option<String>,
    },
    /// Print a content API query document
    Query {
        /// One of: post, posts, episodes, bookmarks, home
        name: String,

        /// Slug for the `post` query
        #[arg(short, long)]
        slug: Option<String>,
    },
    /// Assemble one page and print its props as JSON
    Build {
        /// Site path, e.g. `/`, `/writing/hello`, `/hn/ask`
        path: String,
    },
    /// Print a Hacker News listing with its comment threads
    Thread {
        /// Listing: top, new, best, ask, show, jobs
        #[arg(default_value = "top")]
        category: String,

        /// Number of stories to expand
        #[arg(short, long, default_value = "5")]
        limit: usize,
    },
}

/// Initialize tracing; CLI output goes to stdout so logs go to stderr.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "homepage=debug,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn serve(config: Config) -> anyhow::Result<()> {
    let bind_addr = config.bind_addr.clone();
    let state = AppState::from_config(config)?;
    let app = api::create_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("homepage listening on http://{}", bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Some(Commands::Serve { bind }) => {
            let mut config = Config::from_env()?;
            if let Some(bind) = bind {
                config.bind_addr = bind;
            }
            serve(config).await?;
        }
        Some(Commands::Query { name, slug }) => {
            let document = graphql::by_name(&name, slug.as_deref()).ok_or_else(|| {
                anyhow::anyhow!(
                    "unknown query '{}' (expected one of: {}; `post` needs --slug)",
                    name,
                    graphql::QUERY_NAMES.join(", ")
                )
            })?;
            println!("{}", document);
        }
        Some(Commands::Build { path }) => {
            let route = Route::parse(&path)?;
            let state = AppState::from_config(Config::from_env()?)?;
            let props = route
                .assemble_json(state.content.as_ref(), state.feed.as_ref())
                .await?;
            println!("{}", serde_json::to_string_pretty(&props)?);
        }
        Some(Commands::Thread { category, limit }) => {
            let category: hn::HnCategory = category.parse()?;
            let config = Config::from_env()?;
            let client = hn::HnClient::from_config(&config)?.with_story_limit(limit);
            for post in hn::HnFeed::posts(&client, category).await? {
                println!("{}", hn::render_post(&post));
            }
        }
        None => {
            serve(Config::from_env()?).await?;
        }
    }

    Ok(())
}
