use std::sync::Arc;

use chrono::{Local, NaiveDate};
use minijinja::context;
use poem::{
    IntoResponse, Response, handler,
    http::StatusCode,
    web::{
        Data, Form, Html, Query, Redirect,
        cookie::{Cookie, CookieJar},
    },
};
use serde::Deserialize;

use crate::action::DashboardAction;
use crate::client::error::ClientError;
use crate::client::sales_api::{ApiReply, SalesBackend};
use crate::web::templates::{ActionView, Templates};

pub const TOKEN_COOKIE: &str = "sales_token";
const DATE_FORMAT: &str = "%Y-%m-%d";

pub struct DashboardState {
    pub backend: Arc<dyn SalesBackend>,
    pub templates: Templates,
}

#[derive(Debug, Default, Deserialize)]
pub struct IndexQuery {
    #[serde(default)]
    logged_in: bool,
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    email: String,
    password: String,
}

#[derive(Debug, Deserialize)]
pub struct ActionQuery {
    kind: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ActionForm {
    kind: String,
    key: Option<String>,
    start_date: Option<String>,
    end_date: Option<String>,
}

/// Outcome block shown under an action form.
#[derive(Debug, Default)]
struct ActionOutcome {
    result: Option<String>,
    error: Option<String>,
}

fn session_token(cookie_jar: &CookieJar) -> Option<String> {
    cookie_jar
        .get(TOKEN_COOKIE)
        .map(|cookie| cookie.value_str().to_string())
        .filter(|token| !token.is_empty())
}

fn parse_action(kind: &str) -> poem::Result<DashboardAction> {
    kind.parse::<DashboardAction>()
        .map_err(|e| poem::Error::from_string(e, StatusCode::BAD_REQUEST))
}

fn render_login(
    state: &DashboardState,
    email: &str,
    error: Option<String>,
) -> poem::Result<Html<String>> {
    let html = state
        .templates
        .render("login.html", context! { email, error })
        .map_err(poem::error::InternalServerError)?;
    Ok(Html(html))
}

fn render_action(
    state: &DashboardState,
    action: DashboardAction,
    form: &ActionForm,
    outcome: ActionOutcome,
    logged_in: bool,
) -> poem::Result<Html<String>> {
    let today = Local::now().date_naive().format(DATE_FORMAT).to_string();
    let actions: Vec<ActionView> = DashboardAction::ALL
        .into_iter()
        .map(ActionView::from)
        .collect();

    let html = state
        .templates
        .render(
            "action.html",
            context! {
                actions,
                current => ActionView::from(action),
                key => form.key.clone().unwrap_or_default(),
                start_date => form.start_date.clone().unwrap_or_else(|| today.clone()),
                end_date => form.end_date.clone().unwrap_or(today),
                result => outcome.result,
                error => outcome.error,
                logged_in
            },
        )
        .map_err(poem::error::InternalServerError)?;
    Ok(Html(html))
}

/// Query string the API expects for `action`.
///
/// Blank or absent dates fall back to `today`, the way the date pickers start out.
pub fn query_params(
    action: DashboardAction,
    form: &ActionForm,
    today: NaiveDate,
) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();
    if let Some((name, _)) = action.key_param() {
        params.push((name, form.key.clone().unwrap_or_default()));
    }
    if action.needs_dates() {
        let or_today = |value: &Option<String>| {
            value
                .clone()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| today.format(DATE_FORMAT).to_string())
        };
        params.push(("start_date", or_today(&form.start_date)));
        params.push(("end_date", or_today(&form.end_date)));
    }
    params
}

#[handler]
pub async fn index(
    cookie_jar: &CookieJar,
    Data(state): Data<&Arc<DashboardState>>,
    Query(query): Query<IndexQuery>,
) -> poem::Result<Html<String>> {
    match session_token(cookie_jar) {
        Some(_) => render_action(
            state,
            DashboardAction::SearchByEmployee,
            &ActionForm::default(),
            ActionOutcome::default(),
            query.logged_in,
        ),
        None => render_login(state, "", None),
    }
}

#[handler]
pub async fn login(
    cookie_jar: &CookieJar,
    Data(state): Data<&Arc<DashboardState>>,
    Form(form): Form<LoginForm>,
) -> poem::Result<Response> {
    match state.backend.login(&form.email, &form.password).await {
        Ok(token) => {
            let mut cookie = Cookie::new_with_str(TOKEN_COOKIE, token);
            cookie.set_http_only(true);
            cookie.set_path("/");
            cookie_jar.add(cookie);
            tracing::info!("Dashboard user signed in");
            Ok(Redirect::see_other("/?logged_in=true").into_response())
        }
        Err(e) => {
            tracing::warn!("Dashboard login failed: {e}");
            let message = match e {
                ClientError::LoginRejected(reason) => reason,
                other => other.to_string(),
            };
            Ok(render_login(state, &form.email, Some(message))?.into_response())
        }
    }
}

#[handler]
pub async fn logout(cookie_jar: &CookieJar) -> Redirect {
    cookie_jar.remove(TOKEN_COOKIE);
    Redirect::see_other("/")
}

#[handler]
pub async fn action_form(
    cookie_jar: &CookieJar,
    Data(state): Data<&Arc<DashboardState>>,
    Query(query): Query<ActionQuery>,
) -> poem::Result<Response> {
    if session_token(cookie_jar).is_none() {
        return Ok(Redirect::see_other("/").into_response());
    }
    let action = parse_action(&query.kind)?;

    Ok(render_action(
        state,
        action,
        &ActionForm::default(),
        ActionOutcome::default(),
        false,
    )?
    .into_response())
}

#[handler]
pub async fn run_action(
    cookie_jar: &CookieJar,
    Data(state): Data<&Arc<DashboardState>>,
    Form(form): Form<ActionForm>,
) -> poem::Result<Response> {
    let Some(token) = session_token(cookie_jar) else {
        return Ok(Redirect::see_other("/").into_response());
    };
    let action = parse_action(&form.kind)?;
    let params = query_params(action, &form, Local::now().date_naive());

    let outcome = match state.backend.query(action, &params, &token).await {
        Ok(reply @ ApiReply::Ok(_)) => ActionOutcome {
            result: Some(reply.render()),
            error: None,
        },
        Ok(reply) => ActionOutcome {
            result: None,
            error: Some(reply.render()),
        },
        Err(e) => ActionOutcome {
            result: None,
            error: Some(format!("Error: {}", e)),
        },
    };

    Ok(render_action(state, action, &form, outcome, false)?.into_response())
}
