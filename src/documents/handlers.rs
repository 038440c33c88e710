//! HTTP routes for generating and viewing PDFs.

use std::sync::OnceLock;

use actix_web::http::header;
use actix_web::{error, web, HttpRequest, HttpResponse, Responder};
use regex::Regex;

use crate::documents::bundle::FieldBundle;
use crate::documents::generators::common::{apply_request_defaults, today_polish_date};
use crate::documents::generators::Validator;
use crate::documents::kind::DocumentKind;
use crate::documents::models::{
    GenerateRequest, KindInfo, PackageDocument, PackageRequest, PackageResponse, ViewLink, ViewLinkResponse,
    PDF_MIME,
};
use crate::documents::registry::get_spec;
use crate::{AppState, ErrorResponse};

/// Largest accepted JSON body.
pub const MAX_BODY_BYTES: usize = 256 * 1024;

fn mobile_agent() -> &'static Regex {
    static MOBILE: OnceLock<Regex> = OnceLock::new();
    MOBILE.get_or_init(|| Regex::new(r"(?i)iPhone|iPad|iPod|Android").expect("mobile agent pattern is valid"))
}

/// Whether the caller gets a view link rather than the PDF bytes.
pub fn wants_link(req: &HttpRequest, return_url: Option<bool>) -> bool {
    if return_url.unwrap_or(false) {
        return true;
    }
    req.headers()
        .get(header::USER_AGENT)
        .and_then(|agent| agent.to_str().ok())
        .is_some_and(|agent| mobile_agent().is_match(agent))
}

fn view_url(state: &AppState, req: &HttpRequest, id: &str) -> String {
    let base = match &state.config.public_base_url {
        Some(base) => base.clone(),
        None => {
            let info = req.connection_info();
            format!("{}://{}", info.scheme(), info.host())
        }
    };
    format!("{base}/api/pdf/view/{id}")
}

fn validate(fields: &FieldBundle) -> Result<(), HttpResponse> {
    fields.validate().map_err(|message| {
        log::warn!("Rejected field bundle: {message}");
        HttpResponse::BadRequest().json(ErrorResponse::bad_request(&message))
    })
}

#[utoipa::path(
    post,
    path = "/api/pdf/{kind}",
    tag = "PDF Service",
    params(
        ("kind" = String, Path, description = "Document kind selector, e.g. `poa-single`")
    ),
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "PDF bytes, or a view link when requested or the caller is a mobile browser", body = ViewLinkResponse),
        (status = 400, description = "Unknown kind or invalid fields", body = ErrorResponse),
        (status = 500, description = "Document could not be generated", body = ErrorResponse)
    )
)]
pub async fn generate_document(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: HttpRequest,
    body: web::Json<GenerateRequest>,
) -> impl Responder {
    let selector = path.into_inner();
    let kind = match selector.parse::<DocumentKind>() {
        Ok(kind) => kind,
        Err(err) => return HttpResponse::BadRequest().json(ErrorResponse::bad_request(&err.to_string())),
    };
    let Some(generator) = state.orchestrator.generator(kind) else {
        return HttpResponse::BadRequest().json(ErrorResponse::bad_request(&format!(
            "unsupported document kind '{selector}'"
        )));
    };

    let GenerateRequest { mut fields, return_url } = body.into_inner();
    if let Err(response) = validate(&fields) {
        return response;
    }
    apply_request_defaults(&mut fields, kind, &today_polish_date());

    let document = match generator.generate(&fields).await {
        Ok(document) => document,
        Err(e) => {
            log::error!("Failed to generate {kind}: {e}");
            return HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error(&format!("Failed to generate {kind}: {e}")));
        }
    };
    log::info!("Generated {} ({} bytes)", document.filename, document.bytes.len());

    if wants_link(&req, return_url) {
        let id = state.cache.put(document.bytes, document.filename.clone()).await;
        let url = view_url(&state, &req, &id);
        return HttpResponse::Ok().json(ViewLinkResponse {
            id,
            url,
            filename: document.filename,
        });
    }

    HttpResponse::Ok()
        .content_type(PDF_MIME)
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", document.filename),
        ))
        .body(document.bytes)
}

#[utoipa::path(
    post,
    path = "/api/pdf/package",
    tag = "PDF Service",
    request_body = PackageRequest,
    responses(
        (status = 200, description = "Generated documents and per-document failures", body = PackageResponse),
        (status = 400, description = "Unknown kind or invalid fields", body = ErrorResponse)
    )
)]
pub async fn generate_package(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<PackageRequest>,
) -> impl Responder {
    let PackageRequest {
        fields,
        kinds,
        return_url,
    } = body.into_inner();
    if let Err(response) = validate(&fields) {
        return response;
    }

    let today = today_polish_date();
    let manifest = match state
        .orchestrator
        .generate_package_with(&fields, kinds.as_deref(), |kind, bundle| {
            apply_request_defaults(bundle, kind, &today)
        })
        .await
    {
        Ok(manifest) => manifest,
        Err(e) => return HttpResponse::BadRequest().json(ErrorResponse::bad_request(&e.to_string())),
    };

    let link = wants_link(&req, return_url);
    let mut documents = Vec::with_capacity(manifest.documents.len());
    for document in manifest.documents {
        if link {
            let id = state.cache.put(document.bytes, document.filename.clone()).await;
            let url = view_url(&state, &req, &id);
            documents.push(PackageDocument::linked(document.kind, document.filename, ViewLink { id, url }));
        } else {
            documents.push(PackageDocument::inline(document.kind, document.filename, &document.bytes));
        }
    }

    HttpResponse::Ok().json(PackageResponse {
        id: manifest.id,
        documents,
        failures: manifest.failures,
    })
}

#[utoipa::path(
    get,
    path = "/api/pdf/view/{id}",
    tag = "PDF Service",
    params(
        ("id" = String, Path, description = "Id returned with a view link")
    ),
    responses(
        (status = 200, description = "The cached PDF, shown inline"),
        (status = 404, description = "Unknown or expired id", body = ErrorResponse)
    )
)]
pub async fn view_document(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();
    match state.cache.get(&id).await {
        Some(cached) => HttpResponse::Ok()
            .content_type(PDF_MIME)
            .insert_header((
                header::CONTENT_DISPOSITION,
                format!("inline; filename=\"{}\"", cached.filename),
            ))
            .insert_header((header::CACHE_CONTROL, "no-cache"))
            .body(cached.bytes),
        None => {
            log::debug!("View link {id} missed the cache");
            HttpResponse::NotFound().json(ErrorResponse::not_found("PDF not found or expired"))
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/pdf/kinds",
    tag = "PDF Service",
    responses(
        (status = 200, description = "Supported document kinds", body = [KindInfo])
    )
)]
pub async fn list_kinds(state: web::Data<AppState>) -> impl Responder {
    let kinds: Vec<KindInfo> = state
        .orchestrator
        .kinds()
        .map(|kind| KindInfo {
            kind,
            filename: kind.filename().to_string(),
            pages: get_spec(kind).page_count(),
        })
        .collect();
    HttpResponse::Ok().json(kinds)
}

/// JSON extractor settings: body cap and JSON error bodies.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(MAX_BODY_BYTES)
        .error_handler(|err, _req| {
            let response = HttpResponse::BadRequest().json(ErrorResponse::bad_request(&err.to_string()));
            error::InternalError::from_response(err, response).into()
        })
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(web::resource("/pdf/kinds").route(web::get().to(list_kinds)))
        .service(web::resource("/pdf/view/{id}").route(web::get().to(view_document)))
        .service(web::resource("/pdf/package").route(web::post().to(generate_package)))
        .service(web::resource("/pdf/{kind}").route(web::post().to(generate_document)));
}
