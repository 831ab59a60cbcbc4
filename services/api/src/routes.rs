use crate::infra::{deserialize_optional_date, AppState};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::{Local, NaiveDate};
use onboard_iq::assessment::{
    score_intake, synthesize_plan, ImplementationPlan, IntakeResponse, PlanRequest,
    ReadinessAssessment,
};
use onboard_iq::error::AppError;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Planning payload plus an optional anchor date. Pinning `today` makes
/// the recommended go-live date reproducible across calls.
#[derive(Debug, Deserialize)]
pub(crate) struct PlanEndpointRequest {
    #[serde(flatten)]
    pub(crate) request: PlanRequest,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AssessmentRequest {
    #[serde(flatten)]
    pub(crate) intake: IntakeResponse,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub(crate) struct AssessmentResponse {
    pub(crate) assessment: ReadinessAssessment,
    pub(crate) plan: ImplementationPlan,
}

pub(crate) fn assessment_router() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/assessment/score", post(score_endpoint))
        .route("/api/v1/assessment/plan", post(plan_endpoint))
        .route("/api/v1/assessment", post(assessment_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn score_endpoint(
    Json(payload): Json<serde_json::Value>,
) -> Result<Json<ReadinessAssessment>, AppError> {
    let intake: IntakeResponse = serde_json::from_value(payload)?;
    Ok(Json(score_intake(&intake)))
}

pub(crate) async fn plan_endpoint(
    Json(payload): Json<serde_json::Value>,
) -> Result<Json<ImplementationPlan>, AppError> {
    let payload: PlanEndpointRequest = serde_json::from_value(payload)?;
    let today = payload.today.unwrap_or_else(|| Local::now().date_naive());
    Ok(Json(synthesize_plan(&payload.request, today)))
}

pub(crate) async fn assessment_endpoint(
    Json(payload): Json<serde_json::Value>,
) -> Result<Json<AssessmentResponse>, AppError> {
    let payload: AssessmentRequest = serde_json::from_value(payload)?;
    let today = payload.today.unwrap_or_else(|| Local::now().date_naive());

    let assessment = score_intake(&payload.intake);
    let plan = synthesize_plan(&PlanRequest::from_intake(&payload.intake), today);

    Ok(Json(AssessmentResponse { assessment, plan }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    fn sample_score_payload() -> serde_json::Value {
        json!({
            "persona": "standard",
            "sections": {
                "company_profile": {
                    "company_name": "Northwind Legal Group",
                    "industry": "Legal Services",
                    "company_size": "201-1000",
                },
                "contract_operations": {
                    "monthly_contract_volume": "51-200",
                    "current_process": "Spreadsheets and shared drives",
                },
            },
        })
    }

    #[tokio::test]
    async fn score_endpoint_returns_assessment_with_rationales() {
        let Json(body) = score_endpoint(Json(sample_score_payload()))
            .await
            .expect("intake scores");

        assert!(body.score.overall <= 100);
        assert_eq!(body.score.breakdown.len(), 6);
        assert!(!body.status.label.is_empty());
        for section in body.sections.values() {
            assert!(section.score <= 100);
        }
    }

    #[tokio::test]
    async fn score_endpoint_rejects_malformed_persona() {
        let err = score_endpoint(Json(json!({ "persona": 7 })))
            .await
            .expect_err("bad persona rejected");
        assert!(matches!(err, AppError::Payload(_)));
    }

    #[tokio::test]
    async fn plan_endpoint_honors_the_anchor_date() {
        let payload = json!({
            "complexity": "high",
            "go_live_expectation": "8-12 weeks",
            "today": "2026-03-02",
        });

        let Json(plan) = plan_endpoint(Json(payload)).await.expect("plan builds");

        // 8 * 1.3 * 1.1 rounds to 11 weeks.
        assert_eq!(plan.estimated_timeline, "11 weeks");
        let anchor = NaiveDate::from_ymd_opt(2026, 3, 2).expect("valid anchor");
        assert_eq!(plan.recommended_go_live, anchor + chrono::Duration::weeks(11));
    }

    #[tokio::test]
    async fn assessment_endpoint_returns_score_and_plan_together() {
        let mut payload = sample_score_payload();
        payload["today"] = json!("2026-03-02");

        let Json(body) = assessment_endpoint(Json(payload))
            .await
            .expect("combined assessment builds");

        assert!(body.assessment.score.overall <= 100);
        assert!(!body.plan.phases.is_empty());
        for (index, phase) in body.plan.phases.iter().enumerate() {
            assert_eq!(phase.number, index as u32 + 1);
        }
    }

    #[tokio::test]
    async fn router_round_trips_the_score_endpoint() {
        let app = assessment_router();
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/assessment/score")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(sample_score_payload().to_string()))
            .expect("request builds");

        let response = app.oneshot(request).await.expect("router responds");
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        let body: serde_json::Value = serde_json::from_slice(&bytes).expect("body is json");
        assert_eq!(body["persona"], "standard");
        assert!(body["score"]["overall"].is_u64());
        assert!(body["sections"]["company_profile"]["rationale"].is_object());
    }

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let Json(body) = healthcheck().await;
        assert_eq!(body["status"], "ok");
    }
}
