//! Contingent HTTP handlers.
//!
//! ```text
//! GET    /api/contingent/page?name=&current=&size=
//! GET    /api/contingent/list?name=
//! GET    /api/contingent/detail/{id}
//! POST   /api/contingent/add
//! PUT    /api/contingent/edit/{id}
//! DELETE /api/contingent/delete/{id}
//! ```
//!
//! A missing record is reported as a successful envelope with
//! `"record not found"`, never as an HTTP error.

use actix_web::{HttpResponse, Scope, delete, get, post, put, web};
use chrono::{DateTime, Utc};
use pagination::Pager;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::error;
use utoipa::IntoParams;

use crate::domain::ports::{
    CreateContingentRequest, PageContingentsRequest, UpdateContingentRequest,
};
use crate::domain::{
    Attributes, CommandOutcome, Contingent, ContingentDraft, ContingentPayload, DeleteOutcome, Error,
    NameFilter, TraceId, UserId,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope::{
    ApiEnvelope, DELETE_SUCCEEDED, INSERT_SUCCEEDED, QUERY_SUCCEEDED, UPDATE_SUCCEEDED,
};
use crate::inbound::http::error::{json_error_handler, path_error_handler, query_error_handler};
use crate::inbound::http::schemas::{
    ContingentEnvelopeSchema, ContingentListEnvelopeSchema, ContingentRequestSchema,
    DeletedEnvelopeSchema, FailureEnvelopeSchema,
};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_contingent_id};

/// Query parameters for the paged listing.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// Case-sensitive substring filter on `name`.
    pub name: Option<String>,
    /// One-based page number; zero, negative or missing means 1.
    pub current: Option<i64>,
    /// Page size; zero, negative or missing means 10. Capped.
    pub size: Option<i64>,
}

/// Saturate a signed query value into the pager's range; non-positive
/// values become zero so the pager substitutes its default.
fn pager_param(raw: Option<i64>) -> Option<u32> {
    raw.map(|value| u32::try_from(value.max(0)).unwrap_or(u32::MAX))
}

/// Query parameters for the unbounded listing.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Case-sensitive substring filter on `name`.
    pub name: Option<String>,
}

/// Write payload as submitted.
///
/// `id`, `createTime` and `createUserId` are accepted so clients can post a
/// record back unchanged, but their values are ignored. Unknown fields are
/// kept as attributes.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContingentRequestBody {
    /// Ignored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    /// Required contingent name.
    #[serde(default)]
    pub name: Option<String>,
    /// Ignored; stamped by the server on create.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<Value>,
    /// Ignored; resolved from the session on create.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_user_id: Option<Value>,
    /// Every other field.
    #[serde(flatten)]
    pub attributes: Attributes,
}

impl ContingentRequestBody {
    fn to_payload(&self) -> ContingentPayload {
        ContingentPayload {
            name: self.name.clone(),
            attributes: self.attributes.clone(),
        }
    }
}

/// Record as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContingentBody {
    /// Store-assigned id.
    pub id: i64,
    /// Contingent name.
    pub name: String,
    /// Creation timestamp.
    pub create_time: DateTime<Utc>,
    /// Creating principal.
    pub create_user_id: UserId,
    /// Opaque attributes, flattened into the record.
    #[serde(flatten)]
    pub attributes: Attributes,
}

impl From<&Contingent> for ContingentBody {
    fn from(value: &Contingent) -> Self {
        Self {
            id: value.id().get(),
            name: value.name().to_string(),
            create_time: value.created_at(),
            create_user_id: value.created_by(),
            attributes: value.attributes().clone(),
        }
    }
}

/// `data` of a write response: the stored record or the echoed payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum WriteData {
    /// Record after the write.
    Record(ContingentBody),
    /// Payload as submitted.
    Echo(ContingentRequestBody),
}

fn current_trace_id() -> Option<String> {
    TraceId::current().map(|id| id.to_string())
}

fn render_write(
    outcome: CommandOutcome<Contingent>,
    success_message: &str,
    submitted: ContingentRequestBody,
) -> HttpResponse {
    match outcome {
        CommandOutcome::Completed(record) => HttpResponse::Ok().json(ApiEnvelope::success(
            success_message,
            WriteData::Record(ContingentBody::from(&record)),
        )),
        CommandOutcome::NotFound => {
            HttpResponse::Ok().json(ApiEnvelope::not_found(Some(WriteData::Echo(submitted))))
        }
        CommandOutcome::Rejected(violation) => HttpResponse::BadRequest().json(
            ApiEnvelope::rejected(violation.message(), WriteData::Echo(submitted))
                .with_trace_id(current_trace_id()),
        ),
    }
}

fn collection_len(items: &[ContingentBody]) -> Result<u64, Error> {
    u64::try_from(items.len()).map_err(|_| Error::internal("listing too large to count"))
}

/// Paged listing, newest first, with the total match count.
#[utoipa::path(
    get,
    path = "/api/contingent/page",
    params(PageQuery),
    responses(
        (status = 200, description = "Page of contingents", body = ContingentListEnvelopeSchema),
        (status = 400, description = "Invalid query", body = FailureEnvelopeSchema),
        (status = 503, description = "Store unavailable", body = FailureEnvelopeSchema)
    ),
    tags = ["contingents"],
    operation_id = "pageContingents"
)]
#[get("/page")]
pub async fn page_contingents(
    state: web::Data<HttpState>,
    query: web::Query<PageQuery>,
) -> ApiResult<HttpResponse> {
    let PageQuery {
        name,
        current,
        size,
    } = query.into_inner();
    let request = PageContingentsRequest {
        filter: NameFilter::new(name),
        pager: Pager::from_request(pager_param(current), pager_param(size)),
    };
    let page = state
        .contingents_query
        .page(request)
        .await
        .inspect_err(|err| error!(operation = "query", error = %err, "contingent page failed"))?;
    let items: Vec<ContingentBody> = page.items.iter().map(ContingentBody::from).collect();
    Ok(HttpResponse::Ok().json(ApiEnvelope::counted(items, page.total)))
}

/// Unbounded listing, newest first.
#[utoipa::path(
    get,
    path = "/api/contingent/list",
    params(ListQuery),
    responses(
        (status = 200, description = "All matching contingents", body = ContingentListEnvelopeSchema),
        (status = 400, description = "Invalid query", body = FailureEnvelopeSchema),
        (status = 503, description = "Store unavailable", body = FailureEnvelopeSchema)
    ),
    tags = ["contingents"],
    operation_id = "listContingents"
)]
#[get("/list")]
pub async fn list_contingents(
    state: web::Data<HttpState>,
    query: web::Query<ListQuery>,
) -> ApiResult<HttpResponse> {
    let filter = NameFilter::new(query.into_inner().name);
    let records = state
        .contingents_query
        .list(filter)
        .await
        .inspect_err(|err| error!(operation = "query", error = %err, "contingent list failed"))?;
    let items: Vec<ContingentBody> = records.iter().map(ContingentBody::from).collect();
    let count = collection_len(&items)?;
    Ok(HttpResponse::Ok().json(ApiEnvelope::counted(items, count)))
}

/// Single contingent.
#[utoipa::path(
    get,
    path = "/api/contingent/detail/{id}",
    params(("id" = i64, Path, description = "Contingent id")),
    responses(
        (status = 200, description = "Contingent, or null data when absent", body = ContingentEnvelopeSchema),
        (status = 400, description = "Invalid id", body = FailureEnvelopeSchema),
        (status = 503, description = "Store unavailable", body = FailureEnvelopeSchema)
    ),
    tags = ["contingents"],
    operation_id = "getContingent"
)]
#[get("/detail/{id}")]
pub async fn contingent_detail(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_contingent_id(&path.into_inner(), FieldName::new("id"))?;
    let found = state.contingents_query.get(id).await.inspect_err(
        |err| error!(operation = "query", id = %id, error = %err, "contingent lookup failed"),
    )?;
    let envelope = match found {
        Some(record) => ApiEnvelope::success(QUERY_SUCCEEDED, ContingentBody::from(&record)),
        None => ApiEnvelope::not_found(None),
    };
    Ok(HttpResponse::Ok().json(envelope))
}

/// Create a contingent owned by the session principal.
#[utoipa::path(
    post,
    path = "/api/contingent/add",
    request_body = ContingentRequestSchema,
    responses(
        (status = 200, description = "Contingent created", body = ContingentEnvelopeSchema),
        (status = 400, description = "Payload rejected; echoed in data", body = FailureEnvelopeSchema),
        (status = 401, description = "No session principal", body = FailureEnvelopeSchema),
        (status = 503, description = "Store unavailable", body = FailureEnvelopeSchema)
    ),
    tags = ["contingents"],
    operation_id = "createContingent",
    security(("SessionCookie" = []))
)]
#[post("/add")]
pub async fn add_contingent(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<ContingentRequestBody>,
) -> ApiResult<HttpResponse> {
    let submitted = payload.into_inner();
    // Payload errors take precedence over a missing login.
    if let Err(violation) = ContingentDraft::try_from(submitted.to_payload()) {
        return Ok(render_write(
            CommandOutcome::Rejected(violation),
            INSERT_SUCCEEDED,
            submitted,
        ));
    }
    let created_by = session.require_user_id()?;
    let request = CreateContingentRequest {
        payload: submitted.to_payload(),
        created_by,
    };
    let outcome = state
        .contingents
        .create(request)
        .await
        .inspect_err(|err| error!(operation = "insert", error = %err, "contingent insert failed"))?;
    Ok(render_write(outcome, INSERT_SUCCEEDED, submitted))
}

/// Replace name and attributes of a contingent.
#[utoipa::path(
    put,
    path = "/api/contingent/edit/{id}",
    params(("id" = i64, Path, description = "Contingent id; overrides any body id")),
    request_body = ContingentRequestSchema,
    responses(
        (status = 200, description = "Contingent updated, or not found with the payload echoed", body = ContingentEnvelopeSchema),
        (status = 400, description = "Payload rejected; echoed in data", body = FailureEnvelopeSchema),
        (status = 503, description = "Store unavailable", body = FailureEnvelopeSchema)
    ),
    tags = ["contingents"],
    operation_id = "updateContingent"
)]
#[put("/edit/{id}")]
pub async fn edit_contingent(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<ContingentRequestBody>,
) -> ApiResult<HttpResponse> {
    let id = parse_contingent_id(&path.into_inner(), FieldName::new("id"))?;
    let submitted = payload.into_inner();
    let request = UpdateContingentRequest {
        id,
        payload: submitted.to_payload(),
    };
    let outcome = state.contingents.update(request).await.inspect_err(
        |err| error!(operation = "update", id = %id, error = %err, "contingent update failed"),
    )?;
    Ok(render_write(outcome, UPDATE_SUCCEEDED, submitted))
}

/// Delete a contingent.
#[utoipa::path(
    delete,
    path = "/api/contingent/delete/{id}",
    params(("id" = i64, Path, description = "Contingent id")),
    responses(
        (status = 200, description = "Deleted id, or not found carrying the id", body = DeletedEnvelopeSchema),
        (status = 400, description = "Invalid id", body = FailureEnvelopeSchema),
        (status = 503, description = "Store unavailable", body = FailureEnvelopeSchema)
    ),
    tags = ["contingents"],
    operation_id = "deleteContingent"
)]
#[delete("/delete/{id}")]
pub async fn delete_contingent(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_contingent_id(&path.into_inner(), FieldName::new("id"))?;
    let outcome = state.contingents.delete(id).await.inspect_err(
        |err| error!(operation = "delete", id = %id, error = %err, "contingent delete failed"),
    )?;
    let envelope = match outcome {
        DeleteOutcome::Deleted(deleted) => ApiEnvelope::success(DELETE_SUCCEEDED, deleted.get()),
        DeleteOutcome::NotFound => ApiEnvelope::not_found(Some(id.get())),
    };
    Ok(HttpResponse::Ok().json(envelope))
}

/// `/api/contingent` scope with every handler and extractor error mapping.
pub fn contingent_scope() -> Scope {
    web::scope("/api/contingent")
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .service(page_contingents)
        .service(list_contingents)
        .service(contingent_detail)
        .service(add_contingent)
        .service(edit_contingent)
        .service(delete_contingent)
}

#[cfg(test)]
#[path = "contingents_tests.rs"]
mod tests;
