use crate::models::RecordId;

/// Prefix shared by every backend endpoint
pub const API_PREFIX: &str = "/api";

pub const LOGIN_PATH: &str = "/api/login/";
pub const REGISTER_PATH: &str = "/api/register/";

/// Id of the element the app mounts into
pub const ROOT_ELEMENT_ID: &str = "app";

pub const BRAND_NAME: &str = "MyApp";

/// `/api/{collection}/`
pub fn collection_path(collection: &str) -> String {
    format!("{}/{}/", API_PREFIX, collection)
}

/// `/api/{collection}/{id}/`
pub fn record_path(collection: &str, id: RecordId) -> String {
    format!("{}/{}/{}/", API_PREFIX, collection, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_keep_trailing_slash() {
        assert_eq!(collection_path("company"), "/api/company/");
        assert_eq!(record_path("department", 42), "/api/department/42/");
    }
}
