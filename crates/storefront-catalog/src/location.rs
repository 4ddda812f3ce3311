use storefront_client::Url;

const QUERY_PARAM: &str = "query";

/// Reads the `query` parameter from a page URL.
///
/// Accepts absolute URLs (`https://shop/search?query=lamp`), routes
/// (`/search?query=lamp`) and bare query strings (`?query=lamp`). Values are
/// percent-decoded with `+` read as a space. Returns `None` when the parameter
/// is absent, so callers keep whatever term they already have.
#[must_use]
pub fn extract_search_term(page_url: &str) -> Option<String> {
    let url = Url::parse(page_url).ok().or_else(|| {
        Url::parse("http://localhost/")
            .ok()
            .and_then(|base| base.join(page_url).ok())
    })?;

    url.query_pairs()
        .find(|(k, _)| k == QUERY_PARAM)
        .map(|(_, v)| v.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_query_from_absolute_url() {
        assert_eq!(
            extract_search_term("https://shop.example.com/search?query=lamp").as_deref(),
            Some("lamp")
        );
    }

    #[test]
    fn reads_query_from_route() {
        assert_eq!(
            extract_search_term("/search?page=2&query=desk%20lamp").as_deref(),
            Some("desk lamp")
        );
    }

    #[test]
    fn plus_decodes_as_space() {
        assert_eq!(
            extract_search_term("?query=floor+lamp").as_deref(),
            Some("floor lamp")
        );
    }

    #[test]
    fn empty_value_is_an_empty_term() {
        assert_eq!(extract_search_term("/search?query=").as_deref(), Some(""));
    }

    #[test]
    fn missing_param_is_none() {
        assert!(extract_search_term("/search?page=2").is_none());
        assert!(extract_search_term("/search").is_none());
    }

    #[test]
    fn first_occurrence_wins() {
        assert_eq!(
            extract_search_term("?query=a&query=b").as_deref(),
            Some("a")
        );
    }
}
