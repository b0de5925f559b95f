// src/bin/storefront.rs

use clap::Parser;
use tracing_subscriber::EnvFilter;

use tuning_parts::storefront::client::DEFAULT_API_URL;
use tuning_parts::storefront::{CatalogClient, CategoryFilter, SortOrder, ViewMode};

/// Busca o catálogo na API e imprime a seção de cards em HTML.
#[derive(Parser, Debug)]
#[command(name = "storefront", version, about)]
struct Args {
    /// URL do endpoint de peças
    #[arg(long, env = "TUNING_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Ordenação: default, price-asc, price-desc ou name-asc
    #[arg(long)]
    sort: Option<SortOrder>,

    /// Categoria a filtrar (aplicada depois da ordenação); sem ela, todas
    #[arg(long)]
    category: Option<String>,

    /// Modo de exibição: grid ou list
    #[arg(long)]
    view: Option<ViewMode>,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Logs vão para stderr; stdout fica só com o HTML
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let client = CatalogClient::new(args.api_url);
    let mut page = client.load_page().await;

    // Mesma sequência da página: ordenar zera o filtro, então o filtro vem depois
    if let Some(order) = args.sort {
        page.change_sort(order);
    }
    if let Some(category) = args.category {
        page.select_category(CategoryFilter::category(category));
    }
    if let Some(mode) = args.view {
        page.set_view_mode(mode);
    }

    println!("{}", page.to_html());
}
