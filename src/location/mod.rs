//! Location parsing and rendering for the workflow template routes.
//!
//! Two routes exist:
//! - `workflow-templates/{namespace}[?sidePanel=true]` - the listing page
//! - `workflow-templates/{namespace}/{name}` - a template's detail page
//!
//! An empty namespace segment means "all namespaces". Namespace and name
//! segments are percent-encoded on render and decoded on parse so any string
//! survives a round trip.

pub mod history;

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, TemplateError};
use crate::types::TemplateIdentity;

pub use history::{History, HistoryEntry, MemoryHistory, NavigationKind};

/// First path segment shared by every route this crate owns
pub const ROUTE_PREFIX: &str = "workflow-templates";

/// Query parameter controlling the creation side panel
pub const SIDE_PANEL_PARAM: &str = "sidePanel";

/// Location of the listing page: the namespace filter plus panel visibility
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListLocation {
    pub namespace: String,
    pub side_panel: bool,
}

impl ListLocation {
    pub fn new(namespace: impl Into<String>, side_panel: bool) -> Self {
        Self {
            namespace: namespace.into(),
            side_panel,
        }
    }

    /// Render the canonical location string
    pub fn to_path(&self) -> String {
        let mut path = format!("{ROUTE_PREFIX}/{}", urlencoding::encode(&self.namespace));
        if self.side_panel {
            path.push_str(&format!("?{SIDE_PANEL_PARAM}=true"));
        }
        path
    }

    /// Parse a listing location; detail locations are rejected
    pub fn parse(location: &str) -> Result<Self> {
        match Route::parse(location)? {
            Route::List(list) => Ok(list),
            Route::Detail(identity) => Err(TemplateError::InvalidLocation(
                location.to_string(),
                format!("points at template {identity}, not a listing"),
            )),
        }
    }
}

impl fmt::Display for ListLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path())
    }
}

/// Any route owned by this crate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    List(ListLocation),
    Detail(TemplateIdentity),
}

impl Route {
    /// Parse a location string such as `/workflow-templates/prod?sidePanel=true`.
    ///
    /// A leading slash and any `#fragment` are ignored.
    pub fn parse(location: &str) -> Result<Self> {
        let invalid = |reason: &str| TemplateError::InvalidLocation(location.to_string(), reason.to_string());

        let trimmed = location.trim();
        let without_fragment = trimmed.split('#').next().unwrap_or_default();
        let (path, query) = match without_fragment.split_once('?') {
            Some((path, query)) => (path, query),
            None => (without_fragment, ""),
        };

        let mut segments = path.trim_start_matches('/').split('/');
        if segments.next() != Some(ROUTE_PREFIX) {
            return Err(invalid(&format!("expected path to start with '{ROUTE_PREFIX}'")));
        }

        let namespace = decode_segment(segments.next().unwrap_or_default())
            .map_err(|_| invalid("namespace is not valid UTF-8 after decoding"))?;
        let name = decode_segment(segments.next().unwrap_or_default())
            .map_err(|_| invalid("name is not valid UTF-8 after decoding"))?;

        if segments.any(|s| !s.is_empty()) {
            return Err(invalid("too many path segments"));
        }

        if name.is_empty() {
            return Ok(Route::List(ListLocation {
                namespace,
                side_panel: side_panel_flag(query),
            }));
        }

        if namespace.is_empty() {
            return Err(invalid("a template name requires a namespace"));
        }

        Ok(Route::Detail(TemplateIdentity::new(namespace, name)))
    }

    /// Render the canonical location string
    pub fn to_path(&self) -> String {
        match self {
            Route::List(list) => list.to_path(),
            Route::Detail(identity) => detail_path(identity),
        }
    }

    /// Namespace this route is scoped to
    pub fn namespace(&self) -> &str {
        match self {
            Route::List(list) => &list.namespace,
            Route::Detail(identity) => &identity.namespace,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path())
    }
}

impl FromStr for Route {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self> {
        Route::parse(s)
    }
}

/// Detail route for a template
pub fn detail_path(identity: &TemplateIdentity) -> String {
    format!(
        "{ROUTE_PREFIX}/{}/{}",
        urlencoding::encode(&identity.namespace),
        urlencoding::encode(&identity.name)
    )
}

fn decode_segment(segment: &str) -> std::result::Result<String, std::string::FromUtf8Error> {
    urlencoding::decode(segment).map(|s| s.into_owned())
}

/// `sidePanel=true` (first occurrence wins) opens the panel; anything else keeps it closed
fn side_panel_flag(query: &str) -> bool {
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == SIDE_PANEL_PARAM)
        .is_some_and(|(_, value)| value == "true")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_with_namespace() {
        let route = Route::parse("workflow-templates/prod").unwrap();
        assert_eq!(route, Route::List(ListLocation::new("prod", false)));
    }

    #[test]
    fn test_parse_list_leading_slash_and_panel() {
        let route = Route::parse("/workflow-templates/prod?sidePanel=true").unwrap();
        assert_eq!(route, Route::List(ListLocation::new("prod", true)));
    }

    #[test]
    fn test_parse_all_namespaces() {
        for location in ["workflow-templates", "workflow-templates/", "/workflow-templates/?"] {
            let route = Route::parse(location).unwrap();
            assert_eq!(route, Route::List(ListLocation::default()), "{location}");
        }
    }

    #[test]
    fn test_side_panel_only_true_opens() {
        let cases = [
            ("?sidePanel=true", true),
            ("?sidePanel=TRUE", false),
            ("?sidePanel=1", false),
            ("?sidePanel=", false),
            ("?sidePanel", false),
            ("?other=true", false),
            ("?other=x&sidePanel=true", true),
            ("?sidePanel=false&sidePanel=true", false),
        ];
        for (query, expected) in cases {
            let location = format!("workflow-templates/prod{query}");
            let parsed = ListLocation::parse(&location).unwrap();
            assert_eq!(parsed.side_panel, expected, "{location}");
        }
    }

    #[test]
    fn test_parse_detail() {
        let route = Route::parse("workflow-templates/prod/etl-1").unwrap();
        assert_eq!(route, Route::Detail(TemplateIdentity::new("prod", "etl-1")));
        assert_eq!(route.namespace(), "prod");
    }

    #[test]
    fn test_list_location_rejects_detail() {
        assert!(ListLocation::parse("workflow-templates/prod/etl-1").is_err());
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Route::parse("workflows/prod").is_err());
        assert!(Route::parse("").is_err());
        assert!(Route::parse("workflow-templates//etl-1").is_err());
        assert!(Route::parse("workflow-templates/prod/etl-1/extra").is_err());
    }

    #[test]
    fn test_render_list() {
        assert_eq!(ListLocation::new("prod", false).to_path(), "workflow-templates/prod");
        assert_eq!(
            ListLocation::new("prod", true).to_path(),
            "workflow-templates/prod?sidePanel=true"
        );
        assert_eq!(ListLocation::new("", false).to_path(), "workflow-templates/");
    }

    #[test]
    fn test_render_detail() {
        insta::assert_snapshot!(
            detail_path(&TemplateIdentity::new("prod", "etl-1")),
            @"workflow-templates/prod/etl-1"
        );
    }

    #[test]
    fn test_round_trip_encoded_namespace() {
        for namespace in ["", "prod", "team a", "a/b", "ns?x=1", "ünïcode", "100%"] {
            for side_panel in [false, true] {
                let original = ListLocation::new(namespace, side_panel);
                let parsed = ListLocation::parse(&original.to_path()).unwrap();
                assert_eq!(parsed, original, "{}", original.to_path());
            }
        }
    }

    #[test]
    fn test_fragment_ignored() {
        let parsed = ListLocation::parse("workflow-templates/prod?sidePanel=true#top").unwrap();
        assert_eq!(parsed, ListLocation::new("prod", true));
    }
}
