mod browse;

use clap::{Args, Parser, Subcommand};
use storefront_catalog::render::{render_detail, render_search};
use storefront_catalog::{CatalogPage, DetailPhase, DetailView, ListOutcome};
use storefront_client::CatalogClient;
use storefront_core::AppConfig;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "storefront")]
#[command(about = "Browse the store catalog from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List products matching a search term
    Search(SearchSource),
    /// Show full details for one product
    Show {
        /// Product identifier
        product_id: String,
    },
    /// Interactive listing with a product detail view
    Browse(SearchSource),
}

/// Where the initial search term comes from.
#[derive(Debug, Args)]
#[group(multiple = false)]
struct SearchSource {
    /// Search term (empty lists everything)
    #[arg(long)]
    query: Option<String>,
    /// Page URL whose `query` parameter seeds the search
    #[arg(long)]
    url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = storefront_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = CatalogClient::new(&config)?;
    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Search(source) => run_search(&config, client, &source).await,
        Commands::Show { product_id } => run_show(client, &product_id).await,
        Commands::Browse(source) => browse::run_browse(&config, client, &source).await,
    }
}

/// Seeds a page from `--query` or `--url`; with neither, loads the full listing.
async fn load_page(page: &mut CatalogPage<CatalogClient>, source: &SearchSource) -> ListOutcome {
    match (&source.query, &source.url) {
        (Some(term), _) => page.set_term(term).await,
        (None, Some(url)) => page.navigate(url).await,
        (None, None) => page.navigate("").await,
    }
}

/// Builds the absolute login URL for a redirect and returns it as an error.
fn login_redirect(client: &CatalogClient, login_path: &str) -> anyhow::Error {
    let target = client
        .base_url()
        .join(login_path.trim_start_matches('/'))
        .map_or_else(|_| login_path.to_owned(), |u| u.to_string());
    anyhow::anyhow!("session is not authorized; log in at {target}")
}

async fn run_search(
    config: &AppConfig,
    client: CatalogClient,
    source: &SearchSource,
) -> anyhow::Result<()> {
    let mut page = CatalogPage::new(client, config.login_path.clone());
    if let ListOutcome::Redirect(path) = load_page(&mut page, source).await {
        return Err(login_redirect(page.api(), &path));
    }
    println!("{}", render_search(page.search(), &config.placeholder_image));
    Ok(())
}

async fn run_show(client: CatalogClient, product_id: &str) -> anyhow::Result<()> {
    let mut detail = DetailView::new();
    if let Some(ticket) = detail.open(product_id) {
        let result = client.show_product(ticket.key()).await;
        detail.apply(&ticket, result);
    }
    println!("{}", render_detail(&detail));
    if let DetailPhase::Error(msg) = detail.phase() {
        anyhow::bail!("{msg}");
    }
    Ok(())
}
