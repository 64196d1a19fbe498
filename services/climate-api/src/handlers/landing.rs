//! Landing page handler.

use axum::{
    http::header,
    response::{Html, IntoResponse, Response},
};

/// Route index served at the root.
const LANDING_HTML: &str = "Welcome to the Hawaii Weather Data!<br/>\
Available Routes:<br/>\
<a href='/api/v1.0/precipitation'>Precipitation data for the last year</a><br/>\
<a href='/api/v1.0/stations'> List of stations </a><br/>\
<a href='/api/v1.0/tobs'> Temperature observations of the most active station for the last year of data. </a><br/>\
<a href='/api/v1.0/start'> Temperature for greater than and equal to the start date.</a><br/>\
<a href='/api/v1.0/start/end'> Temperature for dates between the start and end date inclusive.</a><br/>";

/// GET / - List all available API routes
pub async fn landing_handler() -> Response {
    (
        [(header::CACHE_CONTROL, "max-age=3600")],
        Html(LANDING_HTML),
    )
        .into_response()
}
