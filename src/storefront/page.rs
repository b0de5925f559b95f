// src/storefront/page.rs

use super::catalog::Catalog;
use super::client::ClientError;
use super::controls::{sorted, CategoryFilter, SortOrder, ViewMode, ViewState};
use super::render::{escape_html, render_cards, RenderedCard};

/// Mensagem mostrada quando o catálogo não pôde ser carregado.
pub const LOAD_ERROR_MESSAGE: &str = "Could not load parts. Please try again later.";
/// Catálogo carregado, mas vazio.
pub const EMPTY_MESSAGE: &str = "No parts available at the moment.";
/// Nenhum card visível para o filtro atual.
pub const NO_RESULTS_MESSAGE: &str = "No parts found in this category.";

/// Uma opção do filtro de categorias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub filter: CategoryFilter,
    pub label: String,
    pub checked: bool,
}

/// Estado da seção de catálogo da página: o catálogo retido, o estado dos
/// controles e o que está na tela (cards, opções de filtro, indicadores).
///
/// Ciclo de vida: `new()` (carregando) → `apply_load` → interações.
/// Nenhuma interação busca os dados de novo.
#[derive(Debug, Clone)]
pub struct CatalogPage {
    catalog: Option<Catalog>,
    state: ViewState,
    cards: Vec<RenderedCard>,
    filter_options: Vec<FilterOption>,
    loading_visible: bool,
    empty_state_visible: bool,
    no_results_visible: bool,
    error_message: Option<String>,
}

impl Default for CatalogPage {
    fn default() -> Self {
        CatalogPage::new()
    }
}

impl CatalogPage {
    pub fn new() -> Self {
        CatalogPage {
            catalog: None,
            state: ViewState::default(),
            cards: Vec::new(),
            filter_options: Vec::new(),
            loading_visible: true,
            empty_state_visible: false,
            no_results_visible: false,
            error_message: None,
        }
    }

    /// Aplica o resultado da busca. Em qualquer caso o indicador de carregamento some.
    pub fn apply_load(&mut self, result: Result<Catalog, ClientError>) {
        match result {
            Ok(catalog) => {
                tracing::debug!(parts = catalog.len(), "Catalog loaded");
                self.error_message = None;
                self.catalog = Some(catalog);
                self.state = ViewState::default();
                self.populate_filters();
                self.rerender();
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load catalog");
                self.catalog = None;
                self.cards.clear();
                self.filter_options.clear();
                self.empty_state_visible = false;
                self.no_results_visible = false;
                self.error_message = Some(LOAD_ERROR_MESSAGE.to_string());
            }
        }
        self.loading_visible = false;
    }

    /// Seleciona uma categoria. Só alterna a visibilidade dos cards já renderizados.
    pub fn select_category(&mut self, filter: CategoryFilter) {
        if self.catalog.is_none() {
            return;
        }
        self.state.filter = filter;
        self.apply_filter();
    }

    /// Troca a ordenação. O filtro volta para "all" e a lista é renderizada de novo.
    pub fn change_sort(&mut self, order: SortOrder) {
        if self.catalog.is_none() {
            return;
        }
        self.state.sort = order;
        self.state.filter = CategoryFilter::All;
        self.rerender();
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.state.view_mode = mode;
    }

    pub fn toggle_view_mode(&mut self) {
        self.state.view_mode = self.state.view_mode.toggled();
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        self.catalog.as_ref()
    }

    pub fn cards(&self) -> &[RenderedCard] {
        &self.cards
    }

    pub fn visible_cards(&self) -> impl Iterator<Item = &RenderedCard> {
        self.cards.iter().filter(|c| !c.hidden)
    }

    pub fn filter_options(&self) -> &[FilterOption] {
        &self.filter_options
    }

    pub fn is_loading(&self) -> bool {
        self.loading_visible
    }

    pub fn is_empty_state_visible(&self) -> bool {
        self.empty_state_visible
    }

    pub fn is_no_results_visible(&self) -> bool {
        self.no_results_visible
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Renderiza a seção completa do catálogo.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        html.push_str(r#"<section id="parts-catalog">"#);

        if self.loading_visible {
            html.push_str(r#"<div id="loading-indicator">Loading parts...</div>"#);
        }

        html.push_str(r#"<div id="filter-options" class="filter-bar">"#);
        for option in &self.filter_options {
            // "Todas" não usa data-filter, para não colidir com uma categoria "all"
            let target = match &option.filter {
                CategoryFilter::All => r#"data-filter-all="true""#.to_string(),
                CategoryFilter::Category(c) => format!(r#"data-filter="{}""#, escape_html(c)),
            };
            html.push_str(&format!(
                r#"<button class="filter-btn{active}" {target} aria-pressed="{checked}">{label}</button>"#,
                active = if option.checked { " active" } else { "" },
                target = target,
                checked = option.checked,
                label = escape_html(&option.label),
            ));
        }
        html.push_str("</div>");

        html.push_str(r#"<select id="sort-select">"#);
        for order in [SortOrder::Default, SortOrder::PriceAsc, SortOrder::PriceDesc, SortOrder::NameAsc] {
            html.push_str(&format!(
                r#"<option value="{value}"{selected}>{value}</option>"#,
                value = order.as_str(),
                selected = if order == self.state.sort { " selected" } else { "" },
            ));
        }
        html.push_str("</select>");

        for mode in [ViewMode::Grid, ViewMode::List] {
            html.push_str(&format!(
                r#"<button class="view-btn{active}" data-view="{view}">{view}</button>"#,
                active = if mode == self.state.view_mode { " active" } else { "" },
                view = mode.as_str(),
            ));
        }

        html.push_str(&format!(
            r#"<div id="parts-container" class="{}">"#,
            self.state.view_mode.container_class()
        ));
        match &self.error_message {
            Some(message) => {
                html.push_str(&format!(r#"<p class="load-error">{}</p>"#, escape_html(message)));
            }
            None => {
                for card in &self.cards {
                    if card.hidden {
                        html.push_str(r#"<div class="card-slot" style="display:none">"#);
                    } else {
                        html.push_str(r#"<div class="card-slot">"#);
                    }
                    html.push_str(&card.html);
                    html.push_str("</div>");
                }
            }
        }
        html.push_str("</div>");

        if self.empty_state_visible {
            html.push_str(&format!(r#"<p id="empty-state">{}</p>"#, EMPTY_MESSAGE));
        }
        if self.no_results_visible {
            html.push_str(&format!(r#"<p id="no-results">{}</p>"#, NO_RESULTS_MESSAGE));
        }

        html.push_str("</section>");
        html
    }

    fn populate_filters(&mut self) {
        let categories = self
            .catalog
            .as_ref()
            .map(Catalog::categories)
            .unwrap_or_default();

        let mut options = Vec::with_capacity(categories.len() + 1);
        options.push(FilterOption {
            filter: CategoryFilter::All,
            label: "All".to_string(),
            checked: true,
        });
        options.extend(categories.into_iter().map(|category| FilterOption {
            filter: CategoryFilter::category(category.clone()),
            label: category,
            checked: false,
        }));
        self.filter_options = options;
    }

    // Substitui os cards (nunca acrescenta) na ordem atual
    fn rerender(&mut self) {
        let Some(catalog) = self.catalog.as_ref() else {
            return;
        };

        self.cards = render_cards(sorted(catalog, self.state.sort));
        self.empty_state_visible = self.cards.is_empty();
        self.apply_filter();
    }

    fn apply_filter(&mut self) {
        let filter = &self.state.filter;
        for card in &mut self.cards {
            card.hidden = !filter.matches(&card.category);
        }
        for option in &mut self.filter_options {
            option.checked = option.filter == *filter;
        }

        let visible = self.cards.iter().filter(|c| !c.hidden).count();
        self.no_results_visible = visible == 0 && !self.cards.is_empty();
    }
}
