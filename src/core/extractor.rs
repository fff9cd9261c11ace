use std::collections::HashMap;

use axum::{
    body::{Body, Bytes},
    extract::{FromRequest, Query, Request},
    http::{HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};

use crate::shared::types::{HttpEvent, HttpResponse};

/// Builds the handler event from a live request.
///
/// Header names arrive lower-cased from the HTTP layer; values that are not
/// visible ASCII are dropped. An empty body becomes `None`; a body that is not
/// UTF-8 is recorded on the event and left for the handler to reject.
impl<S> FromRequest<S> for HttpEvent
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        let http_method = req.method().as_str().to_string();

        let headers = req
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_string(), value.to_string()))
            })
            .collect();

        let query_string_parameters = match req.uri().query() {
            Some(_) => {
                let Query(params) = Query::<HashMap<String, String>>::try_from_uri(req.uri())
                    .map_err(IntoResponse::into_response)?;
                Some(params)
            }
            None => None,
        };

        // Bytes extraction enforces the router's body limit
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;

        let (body, body_error) = match std::str::from_utf8(&bytes) {
            Ok(body) => ((!body.is_empty()).then(|| body.to_string()), None),
            Err(err) => (None, Some(err)),
        };

        Ok(Self {
            http_method,
            headers,
            query_string_parameters,
            body,
            body_error,
        })
    }
}

impl IntoResponse for HttpResponse {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let mut response = Response::new(Body::from(self.body));
        *response.status_mut() = status;

        for (name, value) in self.headers {
            match (
                HeaderName::from_bytes(name.as_bytes()),
                HeaderValue::from_str(&value),
            ) {
                (Ok(name), Ok(value)) => {
                    response.headers_mut().insert(name, value);
                }
                _ => tracing::warn!("Dropping invalid response header: {}", name),
            }
        }

        response
    }
}
