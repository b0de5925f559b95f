// src/storefront/render.rs

use super::catalog::CatalogItem;
use super::price::format_eur;
use super::stock::StockStatus;

/// Um card já renderizado. A visibilidade é alternada pelo filtro
/// sem gerar o HTML de novo.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedCard {
    pub sku: String,
    pub category: String,
    pub html: String,
    pub hidden: bool,
}

/// Renderiza a lista inteira, um card por peça, na ordem recebida.
pub fn render_cards<'a, I>(items: I) -> Vec<RenderedCard>
where
    I: IntoIterator<Item = &'a CatalogItem>,
{
    items
        .into_iter()
        .map(|item| RenderedCard {
            sku: item.sku.to_string(),
            category: item.category.clone(),
            html: render_card(item),
            hidden: false,
        })
        .collect()
}

/// HTML de um card de produto.
pub fn render_card(item: &CatalogItem) -> String {
    let stock = StockStatus::from_quantity(item.stock_quantity);
    let name = escape_html(&item.name);
    let category = escape_html(&item.category);

    let badge = if item.is_bestseller {
        r#"<span class="badge bestseller-badge">Bestseller</span>"#
    } else {
        ""
    };

    format!(
        concat!(
            r#"<article class="part-card" data-sku="{sku}" data-category="{category}">"#,
            r#"<div class="part-image">{badge}<img src="{image}" alt="{name}" loading="lazy"></div>"#,
            r#"<div class="part-info">"#,
            r#"<span class="part-category">{category}</span>"#,
            r#"<h3 class="part-name">{name}</h3>"#,
            r#"<p class="part-price">{price}</p>"#,
            r#"<p class="stock-status {stock_class}">{stock_label}</p>"#,
            r#"</div></article>"#,
        ),
        sku = escape_html(&item.sku.to_string()),
        category = category,
        badge = badge,
        image = escape_html(&item.image_url),
        name = name,
        price = format_eur(&item.price),
        stock_class = stock.css_class(),
        stock_label = stock.label(),
    )
}

/// Escapa texto para uso em conteúdo ou atributo HTML.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::shared_structs::Sku;
    use bigdecimal::BigDecimal;
    use std::str::FromStr;

    fn item(stock: u32, bestseller: bool) -> CatalogItem {
        CatalogItem {
            sku: Sku::Text("EXH-001".to_string()),
            name: "Cat-Back <Sport>".to_string(),
            category: "Exhaust".to_string(),
            price: BigDecimal::from_str("19.99").unwrap(),
            stock_quantity: stock,
            image_url: "img/exhaust.jpg".to_string(),
            is_bestseller: bestseller,
        }
    }

    #[test]
    fn card_contents() {
        let html = render_card(&item(0, false));

        assert!(html.contains(r#"<span class="part-category">Exhaust</span>"#));
        assert!(html.contains("Cat-Back &lt;Sport&gt;"));
        assert!(html.contains("19,99\u{a0}€"));
        assert!(html.contains(r#"<p class="stock-status out-of-stock">Out of Stock</p>"#));
        assert!(html.contains(r#"src="img/exhaust.jpg""#));
        assert!(!html.contains("bestseller-badge"));
    }

    #[test]
    fn bestseller_badge_and_low_stock() {
        let html = render_card(&item(2, true));

        assert!(html.contains("bestseller-badge"));
        assert!(html.contains("Low Stock: only 2 left"));
    }

    #[test]
    fn one_card_per_item_in_order() {
        let mut second = item(9, false);
        second.sku = Sku::Number(7);
        let items = vec![item(1, false), second];

        let cards = render_cards(&items);
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].sku, "EXH-001");
        assert_eq!(cards[1].sku, "7");
        assert!(cards.iter().all(|c| !c.hidden));
        assert_eq!(render_cards(&items), cards);
    }
}
