//! HTML rendering for the home and cart pages.
//!
//! Every function here is pure: it takes a snapshot of catalog and cart state
//! and returns markup. Handlers take the snapshots.

use crate::domain::cart::{Cart, CartLine};
use crate::domain::catalog::LoadStatus;
use crate::domain::product::Product;

/// Which page a cart form should send the shopper back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    Cart,
}

impl View {
    pub fn path(self) -> &'static str {
        match self {
            View::Home => "/",
            View::Cart => "/cart",
        }
    }

    fn form_value(self) -> &'static str {
        match self {
            View::Home => "home",
            View::Cart => "cart",
        }
    }
}

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn render_home(status: &LoadStatus, cart: &Cart) -> String {
    let catalog = match status {
        LoadStatus::Loading => r#"<div class="loading">Loading...</div>"#.to_string(),
        LoadStatus::Loaded(products) => render_products(products),
        LoadStatus::Error(message) => {
            format!(r#"<div class="error">Error: {}</div>"#, escape(message))
        }
    };

    let body = format!(
        "<p>Welcome to the online shop. Browse our products!</p>\n{}\n<h2>Cart</h2>\n{}",
        catalog,
        render_cart_lines(cart, View::Home)
    );
    layout("E-Commerce", cart, &body)
}

pub fn render_cart(cart: &Cart) -> String {
    layout("Cart", cart, &render_cart_lines(cart, View::Cart))
}

fn layout(title: &str, cart: &Cart, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>{title}</title></head>
<body>
<nav><a href="/">Home</a> | <a href="/cart">Cart ({count})</a></nav>
<h1>{title}</h1>
{body}
</body>
</html>
"#,
        title = escape(title),
        count = cart.item_count(),
        body = body,
    )
}

fn render_products(products: &[Product]) -> String {
    if products.is_empty() {
        return r#"<p class="empty">No products available.</p>"#.to_string();
    }
    let items: Vec<String> = products.iter().map(render_product).collect();
    format!("<ul class=\"products\">\n{}\n</ul>", items.join("\n"))
}

fn render_product(product: &Product) -> String {
    format!(
        r#"<li id="product-{id}">
<img src="{image}" alt="{title}">
<h3>{title}</h3>
<p>{description}</p>
<p class="price">{price}</p>
<p>Available: {qty}</p>
{form}
</li>"#,
        id = product.id,
        image = escape(&product.image),
        title = escape(&product.title),
        description = escape(&product.description),
        price = product.price,
        qty = product.available_qty,
        form = action_form("add", product.id, View::Home, "Add to cart"),
    )
}

fn render_cart_lines(cart: &Cart, view: View) -> String {
    if cart.is_empty() {
        return r#"<p class="empty">Your cart is empty.</p>"#.to_string();
    }
    let items: Vec<String> = cart
        .lines()
        .iter()
        .map(|line| render_cart_line(line, view))
        .collect();
    format!(
        "<ul class=\"cart\">\n{}\n</ul>\n<p class=\"total\">Total: {}</p>",
        items.join("\n"),
        cart.total_price()
    )
}

fn render_cart_line(line: &CartLine, view: View) -> String {
    format!(
        r#"<li id="cart-line-{id}">
<img src="{thumbnail}" alt="{title}">
<h3>{title}</h3>
<p>Quantity: {quantity}</p>
<p>Subtotal: {subtotal}</p>
{form}
</li>"#,
        id = line.product.id,
        thumbnail = escape(&line.product.thumbnail),
        title = escape(&line.product.title),
        quantity = line.quantity,
        subtotal = line.subtotal(),
        form = action_form("remove", line.product.id, view, "Remove"),
    )
}

fn action_form(action: &str, product_id: i64, return_to: View, label: &str) -> String {
    format!(
        r#"<form method="post" action="/cart/{action}/{id}"><input type="hidden" name="return_to" value="{view}"><button type="submit">{label}</button></form>"#,
        action = action,
        id = product_id,
        view = return_to.form_value(),
        label = label,
    )
}
