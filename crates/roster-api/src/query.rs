// Query construction for the listing endpoint
//
// Two URL forms exist: the plain listing (`/users?...`) and the filtered
// listing (`/users/filter?key=..&value=..&...`). Sorting, paging and field
// selection are shared by both.

use std::fmt;

use url::Url;

use crate::error::Error;

/// Fields requested from the server on every listing call.
pub const SELECT_FIELDS: &[&str] = &[
    "id",
    "firstName",
    "lastName",
    "maidenName",
    "age",
    "gender",
    "address",
    "height",
    "weight",
    "phone",
    "email",
    "image",
];

/// Sort direction as understood by the `order` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One listing request.
///
/// Built with the chained setters; `url()` renders it against a base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserQuery {
    pub limit: usize,
    pub skip: usize,
    /// `(sortBy, order)`; omitted from the URL when `None`.
    pub sort: Option<(String, SortOrder)>,
    /// `(key, value)`; switches to the `/users/filter` form when `Some`.
    pub filter: Option<(String, String)>,
    pub select: Vec<String>,
}

impl UserQuery {
    /// A plain page request selecting [`SELECT_FIELDS`].
    pub fn page(limit: usize, skip: usize) -> Self {
        Self {
            limit,
            skip,
            sort: None,
            filter: None,
            select: SELECT_FIELDS.iter().map(|s| (*s).to_owned()).collect(),
        }
    }

    pub fn sort_by(mut self, field: impl Into<String>, order: SortOrder) -> Self {
        self.sort = Some((field.into(), order));
        self
    }

    /// Add a filter clause. An empty value leaves the query unfiltered.
    pub fn filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let value = value.into();
        self.filter = if value.is_empty() {
            None
        } else {
            Some((key.into(), value))
        };
        self
    }

    /// Whether this query uses the filtered URL form.
    pub fn is_filtered(&self) -> bool {
        self.filter.is_some()
    }

    /// Render the full request URL: `{base}/users[/filter]?...`
    pub fn url(&self, base: &Url) -> Result<Url, Error> {
        let base = base.as_str().trim_end_matches('/');
        let path = if self.is_filtered() {
            "users/filter"
        } else {
            "users"
        };
        let mut url = Url::parse(&format!("{base}/{path}"))?;

        {
            let mut pairs = url.query_pairs_mut();
            if let Some((key, value)) = &self.filter {
                pairs.append_pair("key", key);
                pairs.append_pair("value", value);
            }
            if let Some((field, order)) = &self.sort {
                pairs.append_pair("sortBy", field);
                pairs.append_pair("order", order.as_str());
            }
            pairs.append_pair("limit", &self.limit.to_string());
            pairs.append_pair("skip", &self.skip.to_string());
            if !self.select.is_empty() {
                pairs.append_pair("select", &self.select.join(","));
            }
        }

        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn base() -> Url {
        Url::parse("https://dummyjson.com").expect("static URL")
    }

    fn pairs(url: &Url) -> Vec<(String, String)> {
        url.query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn plain_query_omits_sort_and_filter() {
        let url = UserQuery::page(10, 20).url(&base()).expect("valid URL");

        assert_eq!(url.path(), "/users");
        let pairs = pairs(&url);
        assert!(pairs.iter().all(|(k, _)| k != "sortBy" && k != "order" && k != "key"));
        assert!(pairs.contains(&("limit".into(), "10".into())));
        assert!(pairs.contains(&("skip".into(), "20".into())));
        assert!(pairs.contains(&("select".into(), SELECT_FIELDS.join(","))));
    }

    #[test]
    fn filtered_query_uses_filter_path() {
        let url = UserQuery::page(10, 0)
            .filter("lastName", "Doe")
            .sort_by("age", SortOrder::Desc)
            .url(&base())
            .expect("valid URL");

        assert_eq!(url.path(), "/users/filter");
        let pairs = pairs(&url);
        assert_eq!(pairs[0], ("key".into(), "lastName".into()));
        assert_eq!(pairs[1], ("value".into(), "Doe".into()));
        assert!(pairs.contains(&("sortBy".into(), "age".into())));
        assert!(pairs.contains(&("order".into(), "desc".into())));
    }

    #[test]
    fn empty_filter_value_keeps_plain_form() {
        let query = UserQuery::page(10, 0).filter("firstName", "");
        assert!(!query.is_filtered());
        assert_eq!(query.url(&base()).expect("valid URL").path(), "/users");
    }

    #[test]
    fn filter_value_is_url_encoded() {
        let url = UserQuery::page(5, 0)
            .filter("email", "a&b=c d")
            .url(&base())
            .expect("valid URL");

        assert!(url.as_str().contains("value=a%26b%3Dc+d"), "{url}");
        assert!(pairs(&url).contains(&("value".into(), "a&b=c d".into())));
    }

    #[test]
    fn base_with_path_prefix_and_trailing_slash() {
        let base = Url::parse("http://localhost:8080/mirror/").expect("static URL");
        let url = UserQuery::page(10, 0).url(&base).expect("valid URL");
        assert_eq!(url.path(), "/mirror/users");
    }
}
