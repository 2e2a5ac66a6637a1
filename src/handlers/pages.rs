use actix_web::http::header;
use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::application::{CartHandle, CatalogLoader};
use crate::errors::AppError;
use crate::views::{self, View};

#[derive(Debug, Deserialize, Default, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum ReturnTo {
    #[default]
    Home,
    Cart,
}

impl From<ReturnTo> for View {
    fn from(r: ReturnTo) -> Self {
        match r {
            ReturnTo::Home => View::Home,
            ReturnTo::Cart => View::Cart,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CartActionForm {
    #[serde(default)]
    pub return_to: ReturnTo,
}

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}

fn see_other(view: View) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, view.path()))
        .finish()
}

/// GET /
pub async fn home(catalog: web::Data<CatalogLoader>, cart: web::Data<CartHandle>) -> HttpResponse {
    html(views::render_home(&catalog.status(), &cart.snapshot()))
}

/// GET /cart
pub async fn cart_page(cart: web::Data<CartHandle>) -> HttpResponse {
    html(views::render_cart(&cart.snapshot()))
}

/// POST /cart/add/{product_id}
///
/// Only products from the loaded catalog can be added.
pub async fn add_item(
    catalog: web::Data<CatalogLoader>,
    cart: web::Data<CartHandle>,
    path: web::Path<i64>,
    form: web::Form<CartActionForm>,
) -> Result<HttpResponse, AppError> {
    let product_id = path.into_inner();
    let product = super::lookup_product(&catalog, product_id)?;
    cart.add_to_cart(&product);
    Ok(see_other(form.return_to.into()))
}

/// POST /cart/remove/{product_id}
pub async fn remove_item(
    cart: web::Data<CartHandle>,
    path: web::Path<i64>,
    form: web::Form<CartActionForm>,
) -> HttpResponse {
    cart.remove_from_cart(path.into_inner());
    see_other(form.return_to.into())
}
