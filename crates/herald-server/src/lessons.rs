use std::error::Error;
use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::routing::{get, post};
use herald_core::{AppError, http_status};
use herald_response::{DataResponder, FieldError, JsonResponse, ResponseError, flagged};
use http::StatusCode;
use serde::Deserialize;

use crate::catalogue::{Catalogue, Lesson};
use crate::extract::{PathParam, Payload, QueryParams};

const MAX_PAGE_SIZE: u64 = 100;

/// Shared state for the lesson routes
#[derive(Clone)]
pub struct LessonState {
    pub catalogue: Arc<Catalogue>,
    pub responder: DataResponder,
}

type HandlerResult = Result<JsonResponse, ResponseError>;

/// Lesson routes in both envelope shapes
pub fn router() -> Router<LessonState> {
    Router::new()
        .route("/lessons", get(list_lessons).post(create_lesson))
        .route("/lessons/{id}", get(get_lesson).delete(delete_lesson))
        .route("/v2/lessons/{id}", get(get_lesson_v2))
        .route("/v2/lessons/batch", post(batch_lessons_v2))
}

#[derive(Debug, Deserialize)]
struct PageQuery {
    #[serde(default = "default_page")]
    page: u64,
    #[serde(default = "default_page_size")]
    page_size: u64,
}

const fn default_page() -> u64 {
    1
}

const fn default_page_size() -> u64 {
    10
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NewLesson {
    #[serde(default)]
    title: String,
    #[serde(default)]
    duration_minutes: u32,
}

impl NewLesson {
    fn validate(&self) -> Vec<FieldError> {
        let mut fields = Vec::new();
        if self.title.trim().is_empty() {
            fields.push(FieldError::new("title", "required"));
        }
        if self.duration_minutes == 0 {
            fields.push(FieldError::new("durationMinutes", "must be positive"));
        }
        fields
    }
}

#[derive(Debug, Deserialize)]
struct BatchRequest {
    ids: Vec<u64>,
}

/// Write an application error as a `{success: false}` envelope
fn app_error(ctx: &mut JsonResponse, err: &AppError) -> Result<(), ResponseError> {
    flagged::error(ctx, http_status(err), err.message())
}

/// `GET /lessons?page=&page_size=`
async fn list_lessons(State(state): State<LessonState>, QueryParams(query): QueryParams<PageQuery>) -> HandlerResult {
    let mut ctx = JsonResponse::new();

    let mut fields = Vec::new();
    if query.page == 0 {
        fields.push(FieldError::new("page", "must be at least 1"));
    }
    if query.page_size == 0 || query.page_size > MAX_PAGE_SIZE {
        fields.push(FieldError::new("page_size", format!("must be between 1 and {MAX_PAGE_SIZE}")));
    }
    if !fields.is_empty() {
        flagged::validation_error(&mut ctx, fields)?;
        return Ok(ctx);
    }

    let lessons = state.catalogue.page(query.page, query.page_size);
    flagged::paginate(&mut ctx, query.page, query.page_size, state.catalogue.total(), lessons)?;
    Ok(ctx)
}

/// `GET /lessons/{id}`
async fn get_lesson(State(state): State<LessonState>, PathParam(id): PathParam<u64>) -> HandlerResult {
    let mut ctx = JsonResponse::new();

    match state.catalogue.get(id) {
        Ok(lesson) => flagged::ok(&mut ctx, lesson)?,
        Err(err) => app_error(&mut ctx, &err)?,
    }

    Ok(ctx)
}

/// `POST /lessons`
///
/// Echoes the lesson it would create; the catalogue itself is read-only.
async fn create_lesson(State(state): State<LessonState>, Payload(body): Payload<NewLesson>) -> HandlerResult {
    let mut ctx = JsonResponse::new();

    let fields = body.validate();
    if !fields.is_empty() {
        flagged::validation_error(&mut ctx, fields)?;
        return Ok(ctx);
    }

    let lesson = Lesson {
        id: state.catalogue.total() + 1,
        title: body.title.trim().to_owned(),
        duration_minutes: body.duration_minutes,
    };

    tracing::info!(lesson_id = lesson.id, "lesson accepted");
    flagged::created(&mut ctx, lesson)?;
    Ok(ctx)
}

/// `DELETE /lessons/{id}`
async fn delete_lesson(State(state): State<LessonState>, PathParam(id): PathParam<u64>) -> HandlerResult {
    let mut ctx = JsonResponse::new();

    match state.catalogue.get(id) {
        Ok(_) => flagged::no_content(&mut ctx)?,
        Err(err) => app_error(&mut ctx, &err)?,
    }

    Ok(ctx)
}

/// `GET /v2/lessons/{id}`
async fn get_lesson_v2(State(state): State<LessonState>, PathParam(id): PathParam<u64>) -> HandlerResult {
    let mut ctx = JsonResponse::new();

    match state.catalogue.get(id) {
        Ok(lesson) => state.responder.success(&mut ctx, StatusCode::OK, lesson)?,
        Err(err) => state.responder.error(&mut ctx, &err, None)?,
    }

    Ok(ctx)
}

/// `POST /v2/lessons/batch`
///
/// Returns every requested lesson, or every lookup failure.
async fn batch_lessons_v2(State(state): State<LessonState>, Payload(body): Payload<BatchRequest>) -> HandlerResult {
    let mut ctx = JsonResponse::new();

    let mut lessons = Vec::with_capacity(body.ids.len());
    let mut failures = Vec::new();
    for id in body.ids {
        match state.catalogue.get(id) {
            Ok(lesson) => lessons.push(lesson),
            Err(err) => failures.push(err),
        }
    }

    if failures.is_empty() {
        state.responder.success(&mut ctx, StatusCode::OK, lessons)?;
    } else {
        let failures: Vec<&(dyn Error + 'static)> = failures.iter().map(|err| err as &(dyn Error + 'static)).collect();
        state.responder.errors(&mut ctx, &failures)?;
    }

    Ok(ctx)
}
