//! Calculator HTTP endpoints
//!
//! The HTML form posts back to `/` and always answers with the page, showing
//! either the results or the field errors. The JSON API answers 422 with the
//! same per-field messages when validation fails.

use actix_web::{
    error::{JsonPayloadError, UrlencodedError},
    http::header::ContentType,
    web, HttpRequest, HttpResponse,
};
use serde::Serialize;

use crate::core::{AppError, FieldErrors};
use crate::middleware::request_id;
use crate::modules::burden::models::{CalcForm, Results};
use crate::modules::burden::services::{BurdenService, FormattedResults};
use crate::modules::burden::views::CalculatorPage;

/// JSON body returned by `POST /api/calculate`
#[derive(Debug, Serialize)]
pub struct CalculationResponse {
    #[serde(flatten)]
    pub results: Results,
    pub formatted: FormattedResults,
}

impl From<Results> for CalculationResponse {
    fn from(results: Results) -> Self {
        let formatted = FormattedResults::from(&results);
        Self { results, formatted }
    }
}

fn html_page(form: &CalcForm, errors: &FieldErrors, results: Option<&Results>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(CalculatorPage::new(form, errors, results).to_string())
}

/// Body extraction failures for the JSON API
fn json_error(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::warn!(path = %req.path(), error = %err, "Rejected JSON body");
    match err {
        JsonPayloadError::Deserialize(source) => AppError::Json(source),
        other => AppError::validation(other.to_string()),
    }
    .into()
}

/// Body extraction failures for the HTML form
fn form_error(err: UrlencodedError, req: &HttpRequest) -> actix_web::Error {
    tracing::warn!(path = %req.path(), error = %err, "Rejected form body");
    AppError::validation(err.to_string()).into()
}

fn evaluate(
    service: &BurdenService,
    req: &HttpRequest,
    form: &CalcForm,
) -> crate::core::Result<Results> {
    let id = request_id(req).unwrap_or_default();
    tracing::info_span!("calculation", request_id = %id).in_scope(|| service.evaluate(form))
}

/// GET /
pub async fn show_form() -> HttpResponse {
    html_page(&CalcForm::default(), &FieldErrors::new(), None)
}

/// POST /
///
/// Urlencoded form submission from the calculator page.
pub async fn submit_form(
    service: web::Data<BurdenService>,
    req: HttpRequest,
    form: web::Form<CalcForm>,
) -> Result<HttpResponse, AppError> {
    let form = form.into_inner();

    match evaluate(&service, &req, &form) {
        Ok(results) => Ok(html_page(&form, &FieldErrors::new(), Some(&results))),
        Err(AppError::InvalidFields(errors)) => Ok(html_page(&form, &errors, None)),
        Err(err) => Err(err),
    }
}

/// POST /api/calculate
pub async fn calculate(
    service: web::Data<BurdenService>,
    req: HttpRequest,
    request: web::Json<CalcForm>,
) -> Result<HttpResponse, AppError> {
    let results = evaluate(&service, &req, &request.into_inner())?;

    Ok(HttpResponse::Ok().json(CalculationResponse::from(results)))
}

/// Configure calculator routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::Data::new(BurdenService::new()))
        .app_data(web::JsonConfig::default().error_handler(json_error))
        .app_data(web::FormConfig::default().error_handler(form_error))
        .route("/", web::get().to(show_form))
        .route("/", web::post().to(submit_form))
        .service(web::scope("/api").route("/calculate", web::post().to(calculate)));
}
