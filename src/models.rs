use serde::Deserialize;

/// One country record as returned by the REST Countries endpoint.
///
/// The remote omits `area` for a handful of territories, so the field is
/// optional; a missing or `null` area must not fail the decode.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Country {
    pub name: String,
    pub region: String,
    #[serde(default)]
    pub area: Option<f64>,
}

impl Country {
    pub fn new(name: impl Into<String>, region: impl Into<String>, area: Option<f64>) -> Self {
        Self {
            name: name.into(),
            region: region.into(),
            area,
        }
    }
}
