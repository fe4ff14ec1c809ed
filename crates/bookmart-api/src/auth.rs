use axum::{Json, extract::State, extract::rejection::JsonRejection};
use tracing::info;

use bookmart_db::models::NewPrincipal;
use bookmart_types::api::{AuthOutcome, LoginRequest, SignupRequest, StatusResponse};
use bookmart_types::models::PrincipalKind;

use crate::error::AuthError;
use crate::records;
use crate::state::{AppState, blocking};
use crate::validate::required;

const LOGIN_FIELDS: &str = "Email and password required";
const SIGNUP_FIELDS: &str = "All fields required";

type JsonBody<T> = Result<Json<T>, JsonRejection>;

pub async fn admin_login(
    State(state): State<AppState>,
    body: JsonBody<LoginRequest>,
) -> Result<Json<StatusResponse>, AuthError> {
    login(PrincipalKind::Admin, state, body).await
}

pub async fn admin_signup(
    State(state): State<AppState>,
    body: JsonBody<SignupRequest>,
) -> Result<Json<StatusResponse>, AuthError> {
    signup(PrincipalKind::Admin, state, body).await
}

pub async fn seller_login(
    State(state): State<AppState>,
    body: JsonBody<LoginRequest>,
) -> Result<Json<StatusResponse>, AuthError> {
    login(PrincipalKind::Seller, state, body).await
}

pub async fn seller_signup(
    State(state): State<AppState>,
    body: JsonBody<SignupRequest>,
) -> Result<Json<StatusResponse>, AuthError> {
    signup(PrincipalKind::Seller, state, body).await
}

pub async fn user_login(
    State(state): State<AppState>,
    body: JsonBody<LoginRequest>,
) -> Result<Json<StatusResponse>, AuthError> {
    login(PrincipalKind::User, state, body).await
}

pub async fn user_signup(
    State(state): State<AppState>,
    body: JsonBody<SignupRequest>,
) -> Result<Json<StatusResponse>, AuthError> {
    signup(PrincipalKind::User, state, body).await
}

/// Unknown email, wrong password and success are three distinct tags, all
/// sent with HTTP 200.
async fn login(
    kind: PrincipalKind,
    state: AppState,
    body: JsonBody<LoginRequest>,
) -> Result<Json<StatusResponse>, AuthError> {
    let Json(req) = body?;
    let email = required(req.email, LOGIN_FIELDS)?;
    let password = required(req.password, LOGIN_FIELDS)?;

    let outcome = blocking(&state, move |s| {
        let Some(row) = s.store.find_principal_by_email(kind, &email)? else {
            return Ok(AuthOutcome::NoUser);
        };

        if !s.hasher.verify(&password, &row.password)? {
            return Ok(AuthOutcome::LoginFail);
        }

        Ok(AuthOutcome::Success(records::summary(row)))
    })
    .await?;

    if let AuthOutcome::Success(user) = &outcome {
        info!("{} {} logged in", kind.as_str(), user.id);
    }

    Ok(Json(StatusResponse::new(kind, outcome)))
}

async fn signup(
    kind: PrincipalKind,
    state: AppState,
    body: JsonBody<SignupRequest>,
) -> Result<Json<StatusResponse>, AuthError> {
    let Json(req) = body?;
    let name = required(req.name, SIGNUP_FIELDS)?;
    let email = required(req.email, SIGNUP_FIELDS)?;
    let password = required(req.password, SIGNUP_FIELDS)?;

    let outcome = blocking(&state, move |s| {
        if s.store.find_principal_by_email(kind, &email)?.is_some() {
            return Ok(AuthOutcome::Exists);
        }

        let password_hash = s.hasher.hash(&password)?;
        let row = s.store.insert_principal(
            kind,
            &NewPrincipal {
                name,
                email,
                password_hash,
            },
        )?;

        info!("New {} {} signed up", kind.as_str(), row.id);
        Ok(AuthOutcome::Created)
    })
    .await?;

    Ok(Json(StatusResponse::new(kind, outcome)))
}
