//! Liveness and readiness probes.

use std::sync::atomic::{AtomicBool, Ordering};

use actix_web::{HttpResponse, get, http::header, web};

/// Probe state shared between the server and the health handlers.
pub struct HealthState {
    ready: AtomicBool,
    live: AtomicBool,
}

impl Default for HealthState {
    fn default() -> Self {
        Self {
            ready: AtomicBool::new(false),
            live: AtomicBool::new(true),
        }
    }
}

impl HealthState {
    /// Start live but not ready.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the server ready once the schema and pool are in place.
    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    /// Fail liveness probes, e.g. while draining for shutdown.
    pub fn mark_unhealthy(&self) {
        self.live.store(false, Ordering::Release);
    }

    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    pub fn is_alive(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    fn probe_response(probe_ok: bool) -> HttpResponse {
        let mut response = if probe_ok {
            HttpResponse::Ok()
        } else {
            HttpResponse::ServiceUnavailable()
        };

        response
            .insert_header((header::CACHE_CONTROL, "no-store"))
            .finish()
    }
}

/// Readiness probe: 200 once [`HealthState::mark_ready`] ran, 503 before.
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    HealthState::probe_response(state.is_ready())
}

/// Liveness probe: 200 until [`HealthState::mark_unhealthy`] runs.
#[get("/health/live")]
pub async fn live(state: web::Data<HealthState>) -> HttpResponse {
    HealthState::probe_response(state.is_alive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use rstest::rstest;

    async fn probe(state: web::Data<HealthState>, uri: &str) -> (StatusCode, Option<String>) {
        let app = test::init_service(App::new().app_data(state).service(ready).service(live)).await;
        let res = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        let cache = res
            .headers()
            .get(header::CACHE_CONTROL)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        (res.status(), cache)
    }

    #[rstest]
    #[case(false, StatusCode::SERVICE_UNAVAILABLE)]
    #[case(true, StatusCode::OK)]
    #[actix_web::test]
    async fn readiness_follows_state(#[case] mark_ready: bool, #[case] expected: StatusCode) {
        let state = web::Data::new(HealthState::new());
        if mark_ready {
            state.mark_ready();
        }
        let (status, cache) = probe(state, "/health/ready").await;
        assert_eq!(status, expected);
        assert_eq!(cache.as_deref(), Some("no-store"));
    }

    #[actix_web::test]
    async fn liveness_fails_once_unhealthy() {
        let state = web::Data::new(HealthState::new());
        assert_eq!(probe(state.clone(), "/health/live").await.0, StatusCode::OK);
        state.mark_unhealthy();
        assert_eq!(
            probe(state, "/health/live").await.0,
            StatusCode::SERVICE_UNAVAILABLE
        );
    }
}
