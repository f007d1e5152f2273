//! Caller identity and policy checks.
//!
//! Authentication happens upstream: the identity proxy in front of this
//! service sets the headers below on every request it lets through. This
//! module only turns them into a [`Principal`] and asks the configured
//! [`Authorizer`](crate::domain::authorization::Authorizer) for a decision.

use std::future::{ready, Ready};

use actix_web::{dev::Payload, FromRequest, HttpRequest};

use crate::domain::authorization::{Policy, Principal};
use crate::errors::AppError;

use super::AppState;

pub const USER_HEADER: &str = "X-Authenticated-User";
pub const ROLES_HEADER: &str = "X-User-Roles";
pub const CLAIMS_HEADER: &str = "X-User-Claims";

fn header_list(req: &HttpRequest, name: &str) -> Vec<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(|v| {
            v.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn principal_from_request(req: &HttpRequest) -> Result<Principal, AppError> {
    let user = req
        .headers()
        .get(USER_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .ok_or(AppError::Unauthorized)?;

    Ok(Principal {
        user: user.to_string(),
        roles: header_list(req, ROLES_HEADER),
        claims: header_list(req, CLAIMS_HEADER),
    })
}

impl FromRequest for Principal {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(principal_from_request(req))
    }
}

/// Fails with `Forbidden` unless `principal` satisfies `policy`. Handlers call
/// this before touching any service.
pub fn require(state: &AppState, principal: &Principal, policy: Policy) -> Result<(), AppError> {
    if state.authorizer.authorize(principal, policy) {
        Ok(())
    } else {
        log::warn!(
            "user '{}' denied by policy {}",
            principal.user,
            policy.name()
        );
        Err(AppError::Forbidden)
    }
}
