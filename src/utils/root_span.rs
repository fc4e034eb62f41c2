use axum::http::StatusCode;
use tracing::{field, info_span, Span};

#[allow(dead_code)]
pub enum SamplingPriority {
    Zero,
    One,
}

/// Per-request span opened by the `trace_root` middleware and handed to
/// handlers through request extensions.
#[derive(Clone, Debug)]
pub struct RootSpan {
    span: Span,
}

impl RootSpan {
    pub fn new(method: &str, uri: &str) -> Self {
        Self {
            span: info_span!(
                "http_request",
                sampling.priority = tracing::field::Empty,
                method = %method,
                uri    = %uri,
                http_status_code = tracing::field::Empty,
                status = tracing::field::Empty,
                todo_id = tracing::field::Empty,
                todo_count = tracing::field::Empty,
            ),
        }
    }

    pub fn span(&self) -> &Span {
        &self.span
    }

    pub fn record(&self) -> RootSpanRecorder<'_> {
        RootSpanRecorder::new(&self.span)
    }
}

pub struct RootSpanRecorder<'a> {
    span: &'a Span,
}

impl<'a> RootSpanRecorder<'a> {
    pub fn new(span: &'a Span) -> Self {
        Self { span }
    }

    pub fn http_status_code(&self, status_code: &StatusCode) -> &Self {
        self.span.record("http_status_code", status_code.as_u16());
        self
    }

    pub fn status(&self, value: &str) -> &Self {
        self.span.record("status", field::display(value));
        self
    }

    pub fn todo_id(&self, id: &impl std::fmt::Display) -> &Self {
        self.span.record("todo_id", field::display(id));
        self
    }

    pub fn todo_count(&self, count: usize) -> &Self {
        self.span.record("todo_count", count);
        self
    }

    pub fn sampling_priority(&self, priority: SamplingPriority) -> &Self {
        let priority = match priority {
            SamplingPriority::One => 1,
            SamplingPriority::Zero => 0,
        };
        self.span
            .record("sampling.priority", field::display(priority));
        self
    }
}
