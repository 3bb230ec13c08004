use url::form_urlencoded::byte_serialize;

/// A single query parameter value.
///
/// Only text and integer values are sent to the API. Both kinds have a
/// "zero" value (`""` and `0`) that is left out of the query string, so a
/// caller can never explicitly ask for `limit=0` or `query=`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Str(String),
    Int(i64),
}

impl ParamValue {
    fn is_zero(&self) -> bool {
        match self {
            ParamValue::Str(value) => value.is_empty(),
            ParamValue::Int(value) => *value == 0,
        }
    }

    fn render(&self) -> String {
        match self {
            ParamValue::Str(value) => value.clone(),
            ParamValue::Int(value) => value.to_string(),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Int(i64::from(value))
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

/// Declares the query parameters a request object contributes.
///
/// Implementors list their fields in the order they should appear in the
/// query string. The encoder takes care of naming, zero suppression and
/// percent-encoding.
pub trait QueryParams {
    fn query_fields(&self) -> Vec<(&'static str, ParamValue)>;
}

impl QueryParams for () {
    fn query_fields(&self) -> Vec<(&'static str, ParamValue)> {
        Vec::new()
    }
}

/// Builds the query string for a request.
///
/// The country code is always the first pair, whatever `params` contains.
/// Fields holding an empty string or zero are skipped; every other field is
/// emitted once as `name=value` with its name lower-camel-cased.
///
/// # Example
///
/// ```
/// let params = PaginationParams { offset: 0, limit: 10 };
/// assert_eq!(encode_params("AU", Some(&params)), "countryCode=AU&limit=10");
/// ```
pub fn encode_params(country_code: &str, params: Option<&dyn QueryParams>) -> String {
    let mut pairs = vec![format!("countryCode={}", escape(country_code))];

    if let Some(params) = params {
        for (name, value) in params.query_fields() {
            if value.is_zero() {
                continue;
            }

            pairs.push(format!(
                "{}={}",
                escape(&lowercase_first_letter(name)),
                escape(&value.render())
            ));
        }
    }

    pairs.join("&")
}

/// Lowercases the first character of `value`, leaving the rest untouched.
pub fn lowercase_first_letter(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Joins resource IDs into the comma separated form the `ids` filter expects.
pub fn join_ids<S: AsRef<str>>(ids: &[S]) -> String {
    ids.iter()
        .map(|id| id.as_ref())
        .collect::<Vec<_>>()
        .join(",")
}

fn escape(value: &str) -> String {
    byte_serialize(value.as_bytes()).collect()
}
