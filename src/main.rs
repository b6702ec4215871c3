mod error;
mod forms;
mod model;
mod pages;
mod routes;

use std::sync::Arc;

use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use log::info;

use model::{OnnxModel, Predictor};

const DEFAULT_MODEL_PATH: &str = "models/student_performance.onnx";

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .format_module_path(false)
        .init();

    let model_path =
        std::env::var("MODEL_PATH").unwrap_or_else(|_| DEFAULT_MODEL_PATH.to_string());
    let model: Arc<dyn Predictor> = Arc::new(
        OnnxModel::load(&model_path)
            .with_context(|| format!("failed to load model from {model_path}"))?,
    );
    info!("model loaded from {model_path}");

    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "5000".to_string());
    let bind_address = format!("{host}:{port}");
    info!("listening on http://{bind_address}");

    let model_data = web::Data::from(model);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(model_data.clone())
            .configure(routes::config)
    })
    // Requests are handled synchronously one at a time.
    .workers(1)
    .bind(&bind_address)?
    .run()
    .await?;

    Ok(())
}
