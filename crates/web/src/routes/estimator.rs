//! Estimator page and estimate route handlers.
//!
//! The page is a single form; the quote panel and the photo preview panel
//! are swapped by HTMX fragments so user-entered field values survive
//! every round trip. The submit button is disabled while an estimate
//! request is in flight, so at most one request is outstanding at a time.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Multipart, Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use benchtop_core::{BenchtopSpec, Colour, Customer, ImagePayload, QuoteRequest, QuoteResult};
use serde::Deserialize;
use tracing::instrument;
use uuid::Uuid;

use crate::error::AppError;
use crate::filters;
use crate::state::AppState;

/// The estimator page.
#[derive(Template, WebTemplate)]
#[template(path = "estimator.html")]
pub struct EstimatorTemplate {
    pub colours: &'static [Colour],
    pub demo_mode: bool,
}

/// Estimate form data.
///
/// Every field defaults to empty so a bare submit still produces a valid
/// payload - the page enforces nothing and forwards text verbatim.
#[derive(Debug, Deserialize)]
pub struct EstimateForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub surname: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub postcode: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub material: String,
    #[serde(default)]
    pub thickness: String,
    #[serde(default)]
    pub colour: Colour,
    #[serde(default)]
    pub image_url: String,
}

impl EstimateForm {
    /// Build the webhook payload from the current field values.
    ///
    /// Only the remote image URL travels in the payload; an empty field
    /// (after trimming) becomes `null`, matching the preview rule that an
    /// empty URL is never an image reference.
    fn into_request(self) -> QuoteRequest {
        let url = self.image_url.trim();
        let image = ImagePayload {
            url: (!url.is_empty()).then(|| url.to_string()),
        };

        QuoteRequest {
            customer: Customer {
                name: self.name,
                surname: self.surname,
                address: self.address,
                postcode: self.postcode,
                email: self.email,
            },
            benchtop: BenchtopSpec {
                material: self.material,
                thickness: self.thickness,
                colour: self.colour,
            },
            image,
        }
    }
}

/// Quote fragment (replaces the quote panel via HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "estimate/quote.html")]
pub struct QuoteTemplate {
    pub quote: QuoteResult,
    pub colour: Colour,
}

/// Error fragment (replaces the quote panel via HTMX, clearing any prior
/// quote).
#[derive(Template, WebTemplate)]
#[template(path = "estimate/quote_error.html")]
pub struct QuoteErrorTemplate {
    pub message: String,
}

/// Photo preview fragment (replaces the preview panel and, out of band,
/// the hidden supersedes field).
#[derive(Template, WebTemplate)]
#[template(path = "estimate/preview.html")]
pub struct PreviewTemplate {
    pub preview_url: String,
    pub preview_id: Uuid,
}

/// Render the estimator page.
///
/// GET /
#[instrument(skip(state))]
pub async fn page(State(state): State<AppState>) -> EstimatorTemplate {
    EstimatorTemplate {
        colours: &Colour::ALL,
        demo_mode: state.quote().is_demo(),
    }
}

/// Run an estimate.
///
/// POST /estimate
///
/// Builds the webhook payload from the submitted field values and returns
/// either a quote fragment or an error fragment. Both replace the quote
/// panel wholesale, so a new attempt always clears the prior quote and the
/// prior error. Failures are rendered, never propagated - the user can
/// always retry.
#[instrument(skip(state, form), fields(colour = %form.colour))]
pub async fn estimate(
    State(state): State<AppState>,
    Form(form): Form<EstimateForm>,
) -> Response {
    let colour = form.colour;
    let request = form.into_request();

    match state.quote().request_quote(&request).await {
        Ok(quote) => {
            tracing::info!(slabs = quote.slabs, "Quote received");
            QuoteTemplate { quote, colour }.into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, "Quote request failed");
            QuoteErrorTemplate {
                message: e.to_string(),
            }
            .into_response()
        }
    }
}

/// Upload a kitchen photo for preview.
///
/// POST /estimate/preview
///
/// Stores the uploaded bytes and returns a preview fragment pointing at
/// the stored copy. The `supersedes` field carries the id of the previous
/// upload, which is released before the new one is stored. File type and
/// size are deliberately not validated.
#[instrument(skip_all)]
pub async fn upload_preview(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response, AppError> {
    let mut supersedes: Option<Uuid> = None;
    let mut file: Option<(String, bytes::Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        match field.name() {
            Some("supersedes") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                supersedes = text.trim().parse().ok();
            }
            Some("file") => {
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                file = Some((content_type, bytes));
            }
            _ => {}
        }
    }

    // No file selected: leave the current preview untouched.
    let Some((content_type, bytes)) = file.filter(|(_, bytes)| !bytes.is_empty()) else {
        return Ok(StatusCode::NO_CONTENT.into_response());
    };

    let size = bytes.len();
    let id = state.previews().store(content_type, bytes, supersedes).await;
    tracing::info!(preview_id = %id, size, superseded = ?supersedes, "Preview stored");

    Ok(PreviewTemplate {
        preview_url: format!("/estimate/preview/{id}"),
        preview_id: id,
    }
    .into_response())
}

/// Serve stored preview bytes.
///
/// GET /estimate/preview/{id}
#[instrument(skip(state))]
pub async fn preview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let stored = state
        .previews()
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("preview {id}")))?;

    Ok((
        [(header::CONTENT_TYPE, stored.content_type)],
        stored.bytes,
    ))
}
