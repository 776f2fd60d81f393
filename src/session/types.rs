use chrono::Utc;
use serde::{Deserialize, Deserializer};

/// One lesson-plan generation request as submitted by the frontend form.
///
/// Wire names are the Spanish form field ids. Every field is optional,
/// untrusted free-form text; missing or blank values get the documented
/// defaults when the request is resolved into [`SessionDetails`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionRequest {
    #[serde(default)]
    pub institucion: Option<String>,
    #[serde(default)]
    pub grado: Option<String>,
    #[serde(default)]
    pub docente: Option<String>,
    #[serde(default)]
    pub fecha: Option<String>,
    /// The form submits this as a string, hand-written clients as a number.
    #[serde(default, deserialize_with = "minutes")]
    pub duracion: Option<u32>,
    #[serde(default)]
    pub campo: Option<String>,
    #[serde(default)]
    pub transversal: Option<String>,
    #[serde(default)]
    pub situacion: Option<String>,
    /// Caller-built prompt. When present it is sent upstream verbatim in
    /// place of the server template.
    #[serde(default)]
    pub prompt: Option<String>,
}

/// A fully-resolved session request: all defaults applied, no `Option`s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionDetails {
    pub institucion: String,
    pub grado: String,
    pub docente: String,
    pub fecha: String,
    pub duracion: u32,
    pub campo: String,
    pub transversal: String,
    pub situacion: String,
}

pub const DEFAULT_INSTITUCION: &str = "I.E. (no especificada)";
pub const DEFAULT_GRADO: &str = "no especificado";
pub const DEFAULT_DOCENTE: &str = "(docente no especificado)";
pub const DEFAULT_DURACION: u32 = 45;
pub const DEFAULT_CAMPO: &str = "no especificado";
pub const DEFAULT_TRANSVERSAL: &str = "no especificado";
pub const DEFAULT_SITUACION: &str = "no especificada";

impl SessionRequest {
    /// Resolves the request, substituting the default for every missing or
    /// blank field. Defaulting happens here and nowhere else.
    pub fn details(&self) -> SessionDetails {
        SessionDetails {
            institucion: text_or(&self.institucion, DEFAULT_INSTITUCION),
            grado: text_or(&self.grado, DEFAULT_GRADO),
            docente: text_or(&self.docente, DEFAULT_DOCENTE),
            fecha: text_or_else(&self.fecha, today),
            duracion: self.duracion.unwrap_or(DEFAULT_DURACION),
            campo: text_or(&self.campo, DEFAULT_CAMPO),
            transversal: text_or(&self.transversal, DEFAULT_TRANSVERSAL),
            situacion: text_or(&self.situacion, DEFAULT_SITUACION),
        }
    }
}

/// Current UTC date as `YYYY-MM-DD`, the same value the form would submit.
fn today() -> String {
    Utc::now().date_naive().to_string()
}

fn text_or(value: &Option<String>, default: &str) -> String {
    text_or_else(value, || default.to_string())
}

fn text_or_else(value: &Option<String>, default: impl FnOnce() -> String) -> String {
    match value {
        Some(s) if !s.trim().is_empty() => s.clone(),
        _ => default(),
    }
}

/// Accepts the duration as a JSON number or a numeric string. Anything that
/// is not a positive integer resolves to `None` and therefore the default;
/// the contract is presence checks with defaults, not validation failures.
fn minutes<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let minutes = match Option::<serde_json::Value>::deserialize(deserializer)? {
        Some(serde_json::Value::Number(n)) => n
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .filter(|n| *n > 0),
        Some(serde_json::Value::String(s)) => s.trim().parse::<u32>().ok().filter(|n| *n > 0),
        _ => None,
    };
    Ok(minutes)
}
