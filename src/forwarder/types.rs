use serde::Serialize;

/// Body posted to the downstream query endpoint. An absent prompt is sent as `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OutboundRequest<'a> {
    pub input: Option<&'a str>,
}

impl<'a> OutboundRequest<'a> {
    pub fn new(input: Option<&'a str>) -> Self {
        Self { input }
    }
}
