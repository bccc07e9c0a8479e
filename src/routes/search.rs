use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::core::{adapter, build_question_set, catalog_for, classify, Ranker};
use crate::models::{
    ErrorResponse, HealthResponse, Market, MatchResult, MatchSource, Persona, Profile,
    QuestionSetQuery, QuestionSetResponse, SearchRequest, SearchResponse,
};
use crate::services::RemoteMatchClient;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub remote: Arc<RemoteMatchClient>,
    pub ranker: Ranker,
    pub max_limit: usize,
}

/// Configure all search-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/search", web::post().to(search))
        .route("/questions", web::get().to(question_set));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Question set endpoint
///
/// GET /api/v1/questions?market=ie
async fn question_set(query: web::Query<QuestionSetQuery>) -> impl Responder {
    let market = match query.market.as_deref() {
        Some(code) => match Market::from_code(code) {
            Some(market) => Some(market),
            None => {
                return HttpResponse::BadRequest().json(ErrorResponse {
                    error: "Unknown market".to_string(),
                    message: format!("'{}' is not a supported market code", code),
                    status_code: 400,
                });
            }
        },
        None => None,
    };

    HttpResponse::Ok().json(QuestionSetResponse {
        market: market.map(|m| m.code().to_string()),
        questions: build_question_set(market),
    })
}

/// Search endpoint
///
/// POST /api/v1/search
///
/// Request body:
/// ```json
/// {
///   "answers": { "location": "Cork", "budget": "€200K – €400K" },
///   "limit": 5
/// }
/// ```
async fn search(state: web::Data<AppState>, req: web::Json<SearchRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for search request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let profile = &req.answers;
    let limit = (req.limit as usize).min(state.max_limit);

    tracing::info!(
        "Running search: {} answers, limit {}",
        profile.answered_count(),
        limit
    );

    let (matches, persona, total_scored, source) =
        match remote_matches(&state, profile, limit).await {
            Some((matches, persona, total)) => (matches, persona, total, MatchSource::Remote),
            None => {
                let (matches, total) = local_matches(&state, profile, limit);
                (matches, classify(profile), total, MatchSource::Local)
            }
        };

    HttpResponse::Ok().json(SearchResponse {
        search_id: uuid::Uuid::new_v4().to_string(),
        persona,
        matches,
        total_scored,
        source,
    })
}

/// Try the remote matching service. Any failure, malformed entry, or an
/// empty shortlist routes the search to the built-in catalog instead.
async fn remote_matches(
    state: &AppState,
    profile: &Profile,
    limit: usize,
) -> Option<(Vec<MatchResult>, Persona, usize)> {
    let payload = match state.remote.find_matches(profile).await {
        Ok(payload) => payload,
        Err(e) => {
            tracing::warn!("Remote matching unavailable, using local catalog: {}", e);
            return None;
        }
    };

    let total = payload.matches.len();
    let mut matches = Vec::with_capacity(total.min(limit));
    for external in payload.matches {
        match adapter::adapt(external) {
            Ok(result) => matches.push(result),
            Err(e) => tracing::warn!("Skipping malformed remote match: {}", e),
        }
        if matches.len() == limit {
            break;
        }
    }

    if matches.is_empty() {
        tracing::warn!("Remote service returned no usable matches, using local catalog");
        return None;
    }

    let persona = payload.persona.unwrap_or_else(|| classify(profile));
    Some((matches, persona, total))
}

fn local_matches(state: &AppState, profile: &Profile, limit: usize) -> (Vec<MatchResult>, usize) {
    let market = profile.market().unwrap_or(Market::Ie);
    let catalog = catalog_for(market);
    let total = catalog.len();
    (state.ranker.rank(&catalog, profile, limit), total)
}
