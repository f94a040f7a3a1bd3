use serde::Serialize;

/// Standard body for writes that return no resource.
#[derive(Debug, Serialize)]
pub struct ApiMessage {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse<I> {
    pub message: &'static str,
    pub id: I,
}
