use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse};
use log::info;

use crate::error::AppError;
use crate::forms::PredictForm;
use crate::model::Predictor;
use crate::pages;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/predict", web::post().to(predict));
}

async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(pages::form_page())
}

async fn predict(
    model: web::Data<dyn Predictor>,
    form: web::Form<PredictForm>,
) -> Result<HttpResponse, AppError> {
    let request = form.into_inner().parse()?;

    // Out-of-range input is reported as a message, not a failed request.
    if let Err(message) = request.validate() {
        return Ok(HttpResponse::Ok()
            .content_type(ContentType::plaintext())
            .body(format!("Error: {message}")));
    }

    let prediction = model.predict(&request.to_features())?;
    info!("predicted performance index {prediction:.2}");

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(pages::result_page(prediction)))
}
