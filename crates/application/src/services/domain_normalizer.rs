use hickory_proto::rr::Name;
use tracing::warn;

/// Converts internationalized labels to their punycode form.
///
/// ASCII input is returned as is. When conversion fails the error is logged
/// and the input comes back unchanged.
pub fn normalize_domain(domain: &str) -> String {
    if domain.is_ascii() {
        return domain.to_string();
    }

    match Name::from_utf8(domain) {
        Ok(name) => name.to_ascii(),
        Err(e) => {
            warn!(domain = %domain, error = %e, "Error normalizing domain, using it unchanged");
            domain.to_string()
        }
    }
}
