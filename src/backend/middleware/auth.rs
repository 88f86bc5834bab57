/**
 * Authentication Middleware
 *
 * First line of defense for every request. Each request moves through
 * `START → CLASSIFIED → {ALLOWED, REDIRECTED}`:
 *
 * - Public paths are allowed without looking at credentials.
 * - Otherwise the auth gate runs:
 *   - no credential on a protected path redirects to the login page;
 *     no credential on an unspecified path is allowed through
 *   - a presented but invalid credential (malformed, bad signature,
 *     expired) always redirects, and the session cookie is cleared
 *   - a valid credential is allowed and the identity is attached to the
 *     request extensions
 *
 * Handlers do not rely on this: `AuthUser` re-derives the identity from
 * the request's credentials, and handlers call `authorize` themselves.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{request::Parts, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::backend::auth::cookies;
use crate::backend::auth::error::AuthError;
use crate::backend::auth::gate::authenticate;
use crate::backend::auth::sessions::{AuthenticatedUser, TokenCodec};
use crate::backend::error::BackendError;
use crate::backend::middleware::routes::{RouteClass, RouteClassifier};
use crate::backend::server::state::AppState;

/// Terminal state of the middleware for one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// Forward the request, with the identity if one was verified
    Allowed(Option<AuthenticatedUser>),
    /// Short-circuit with a redirect to the login page
    Redirected(AuthError),
}

/// Decide what happens to a request
pub fn evaluate(
    path: &str,
    headers: &HeaderMap,
    classifier: &RouteClassifier,
    codec: &TokenCodec,
    cookie_name: &str,
) -> GateDecision {
    let class = classifier.classify(path);
    if class == RouteClass::Public {
        return GateDecision::Allowed(None);
    }

    match authenticate(headers, cookie_name, codec) {
        Ok(user) => GateDecision::Allowed(Some(user)),
        Err(AuthError::NoCredential) if class == RouteClass::Unspecified => {
            GateDecision::Allowed(None)
        }
        Err(reason) => GateDecision::Redirected(reason),
    }
}

/// Authentication middleware
///
/// Applied to the whole router with `axum::middleware::from_fn_with_state`.
pub async fn auth_middleware(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let decision = evaluate(
        request.uri().path(),
        request.headers(),
        &app_state.classifier,
        &app_state.tokens,
        app_state.cookie_name(),
    );

    match decision {
        GateDecision::Allowed(Some(user)) => {
            tracing::debug!(
                "Authenticated {} ({}) for {}",
                user.user_id,
                user.role,
                request.uri().path()
            );
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        GateDecision::Allowed(None) => next.run(request).await,
        GateDecision::Redirected(reason) => {
            tracing::warn!(
                "Redirecting {} to {}: {}",
                request.uri().path(),
                app_state.config.login_path,
                reason
            );
            let mut response = Redirect::to(&app_state.config.login_path).into_response();
            if reason.is_invalid_credential() {
                cookies::attach(&mut response, cookies::cleared_cookie(app_state.cookie_name()));
            }
            response
        }
    }
}

/// Axum extractor for authenticated user
///
/// Verifies the request's own credential instead of trusting the identity
/// the middleware attached. Rejects with 401.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = BackendError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = authenticate(&parts.headers, state.cookie_name(), &state.tokens)?;
        Ok(AuthUser(user))
    }
}
