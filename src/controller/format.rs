use crate::{view_engine::TeraView, Result};
use axum::{
    body::Body,
    http::{response::Builder, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use hyper::header;
use serde::Serialize;

pub fn json<T: Serialize>(t: T) -> Result<Response> {
    Ok(Json(t).into_response())
}

pub fn empty() -> Result<Response> {
    Ok(().into_response())
}

#[must_use]
pub fn render() -> RenderBuilder {
    RenderBuilder::new()
}

#[derive(Debug, Default)]
pub struct RenderBuilder {
    response: Builder,
}

impl RenderBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            response: Builder::default(),
        }
    }

    pub fn view<S>(self, v: &TeraView, key: &str, data: S) -> Result<Response>
    where
        S: Serialize,
    {
        let content = v.render(key, data)?;
        self.html(&content)
    }

    /// Pages carry per-submission results and are sent with `no-store`.
    pub fn html(self, content: &str) -> Result<Response> {
        Ok(self
            .response
            .header(
                header::CONTENT_TYPE,
                HeaderValue::from_static(mime::TEXT_HTML_UTF_8.as_ref()),
            )
            .header(header::CACHE_CONTROL, HeaderValue::from_static("no-store"))
            .body(Body::from(content.to_string()))?)
    }
}
