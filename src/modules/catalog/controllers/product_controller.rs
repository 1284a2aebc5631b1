use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::catalog::repositories::ProductRepository;

/// List the catalog snapshot
/// GET /products
pub async fn list_products(
    repo: web::Data<Arc<dyn ProductRepository>>,
) -> Result<HttpResponse, AppError> {
    let products = repo.list().await?;
    Ok(HttpResponse::Ok().json(products))
}

/// Get a single product
/// GET /products/{id}
pub async fn get_product(
    repo: web::Data<Arc<dyn ProductRepository>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let product = repo
        .find_by_id(id.clone())
        .await?
        .ok_or_else(|| AppError::not_found(format!("Product {}", id)))?;

    Ok(HttpResponse::Ok().json(product))
}
