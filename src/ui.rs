use crate::catalog::Catalog;
use crate::client::CategoryFilter;
use crate::client::filter::{ACTIVE_CLASSES, ALL_CATEGORIES, INACTIVE_CLASS};
use crate::models::{EnergyPack, Item, Wallet};
use std::fmt::Write;

pub fn render_shop(wallet: &Wallet, catalog: &Catalog, filter: &CategoryFilter) -> String {
    let filter = &known_filter(catalog, filter);
    SHOP_HTML
        .replace("{{COINS}}", &wallet.coins.to_string())
        .replace("{{ENERGY}}", &wallet.energy.to_string())
        .replace("{{UNREAD}}", &wallet.unread_notifications().to_string())
        .replace("{{ENERGY_PACKS}}", &render_energy_packs(&catalog.energy_packs))
        .replace("{{FILTERS}}", &render_filters(&catalog.categories(), filter))
        .replace("{{ITEMS}}", &render_items(wallet, catalog, filter))
}

/// A category no active item carries would leave no button active, so it
/// falls back to `all`.
fn known_filter(catalog: &Catalog, filter: &CategoryFilter) -> CategoryFilter {
    match filter {
        CategoryFilter::Category(tag) if catalog.categories().contains(&tag.as_str()) => filter.clone(),
        _ => CategoryFilter::All,
    }
}

fn render_energy_packs(packs: &[EnergyPack]) -> String {
    let mut html = String::new();
    for pack in packs {
        let _ = write!(
            html,
            r#"
      <div class="card energy-card">
        <h3 class="card-title">{name}</h3>
        <p class="muted">{description}</p>
        <button class="btn btn-warning buy-energy" data-energy="{energy}" data-price="{price}">⚡ {energy} for {price} coins</button>
      </div>"#,
            name = escape_html(&pack.name),
            description = escape_html(&pack.description),
            energy = pack.energy_amount,
            price = pack.price,
        );
    }
    html
}

fn render_filters(categories: &[&str], selected: &CategoryFilter) -> String {
    let mut html = String::new();
    for key in std::iter::once(ALL_CATEGORIES).chain(categories.iter().copied()) {
        let classes = if selected.key() == key {
            ACTIVE_CLASSES.join(" ")
        } else {
            INACTIVE_CLASS.to_string()
        };
        let _ = write!(
            html,
            r#"
      <button class="btn filter-btn {classes}" data-filter="{key}">{label}</button>"#,
            key = escape_html(key),
            label = escape_html(&category_label(key)),
        );
    }
    html
}

fn render_items(wallet: &Wallet, catalog: &Catalog, filter: &CategoryFilter) -> String {
    let mut html = String::new();
    for item in catalog.active_items() {
        let display = if filter.matches(Some(item.item_type.as_str())) { "block" } else { "none" };
        let _ = write!(
            html,
            r#"
      <div class="item-card" data-type="{kind}" style="display: {display}">
        <div class="card">
          <h3 class="card-title">{name}</h3>
          <p class="muted">{price} coins</p>
          {action}
        </div>
      </div>"#,
            kind = escape_html(&item.item_type),
            name = escape_html(&item.name),
            price = item.price,
            action = item_action(wallet, item),
        );
    }
    html
}

fn item_action(wallet: &Wallet, item: &Item) -> String {
    if wallet.owns(item.id) {
        r#"<span class="badge">Owned</span>"#.to_string()
    } else {
        format!(r#"<button class="btn btn-success buy-item" data-item-id="{}">Buy</button>"#, item.id)
    }
}

fn category_label(key: &str) -> String {
    match key {
        ALL_CATEGORIES => "All".to_string(),
        "hat" => "Hats".to_string(),
        "clothes" => "Clothes".to_string(),
        "shoes" => "Shoes".to_string(),
        "accessory" => "Accessories".to_string(),
        other => {
            let mut chars = other.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
    }
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
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

const SHOP_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Eco Shop</title>
  <style>
    :root {
      --bg: #f1f7ee;
      --ink: #1f2d1f;
      --green: #2e8b57;
      --amber: #f0a202;
      --card: #ffffff;
      --shadow: 0 12px 30px rgba(31, 45, 31, 0.12);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      background: var(--bg);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      padding: 24px;
    }

    header {
      display: flex;
      justify-content: space-between;
      align-items: center;
      margin-bottom: 24px;
    }

    .stats span {
      margin-left: 16px;
      font-weight: 600;
    }

    .grid {
      display: grid;
      grid-template-columns: repeat(auto-fill, minmax(200px, 1fr));
      gap: 16px;
      margin-bottom: 32px;
    }

    .card {
      background: var(--card);
      border-radius: 16px;
      box-shadow: var(--shadow);
      padding: 16px;
      text-align: center;
    }

    .card-title {
      margin: 8px 0 4px;
      font-size: 1.1rem;
    }

    .muted {
      color: #5b6b5b;
      margin: 0 0 12px;
    }

    .btn {
      border-radius: 999px;
      border: 2px solid var(--green);
      padding: 8px 16px;
      font: inherit;
      cursor: pointer;
    }

    .btn-success {
      background: var(--green);
      color: #fff;
    }

    .btn-outline-success {
      background: transparent;
      color: var(--green);
    }

    .btn-warning {
      background: var(--amber);
      border-color: var(--amber);
      color: var(--ink);
    }

    .filters {
      display: flex;
      flex-wrap: wrap;
      gap: 8px;
      margin-bottom: 16px;
    }

    .badge {
      display: inline-block;
      padding: 6px 12px;
      border-radius: 999px;
      background: #dfeedd;
      color: var(--green);
      font-weight: 600;
    }
  </style>
</head>
<body>
  <header>
    <h1>Eco Shop</h1>
    <div class="stats">
      <span>🪙 {{COINS}} coins</span>
      <span>⚡ {{ENERGY}} / 100 energy</span>
      <span>🔔 {{UNREAD}}</span>
    </div>
  </header>

  <main>
    <h2>Energy</h2>
    <section class="grid">{{ENERGY_PACKS}}
    </section>

    <h2>Items</h2>
    <nav class="filters">{{FILTERS}}
    </nav>
    <section class="grid">{{ITEMS}}
    </section>
  </main>

  <script type="module">
    import init from '/pkg/eco_shop.js';
    init().catch((err) => console.error('failed to start shop handlers', err));
  </script>
</body>
</html>
"#;
