//! JSON:API document shapes.
//!
//! Pure data transformation only; no business logic lives here.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single resource object: `{type, id, attributes}`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Resource<T> {
    /// Resource type, e.g. "products"
    #[serde(rename = "type")]
    pub kind: String,
    /// Resource identifier as a string
    pub id: String,
    /// Wire-facing attributes (server-only fields never appear here)
    pub attributes: T,
}

/// Top-level links member.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct Links {
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
}

impl Links {
    pub fn self_href(href: impl Into<String>) -> Self {
        Self {
            self_link: Some(href.into()),
        }
    }
}

/// Top-level meta member with pagination counts.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    pub total_count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<u64>,
}

impl Meta {
    /// Meta for a plain list response
    pub fn total(total_count: u64) -> Self {
        Self {
            total_count,
            page: None,
            size: None,
            total_pages: None,
        }
    }

    /// Meta for a paginated response
    pub fn paged(total_count: u64, page: u64, size: u64, total_pages: u64) -> Self {
        Self {
            total_count,
            page: Some(page),
            size: Some(size),
            total_pages: Some(total_pages),
        }
    }
}

/// Single-resource response document: `{data, links}`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Document<T> {
    pub data: Resource<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
}

impl<T> Document<T> {
    pub fn new(kind: impl Into<String>, id: impl Into<String>, attributes: T) -> Self {
        Self {
            data: Resource {
                kind: kind.into(),
                id: id.into(),
                attributes,
            },
            links: None,
        }
    }

    pub fn with_self_link(mut self, href: impl Into<String>) -> Self {
        self.links = Some(Links::self_href(href));
        self
    }
}

/// List/page response document: `{data: [...], links, meta}`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ListDocument<T> {
    pub data: Vec<Resource<T>>,
    pub links: Links,
    pub meta: Meta,
}

impl<T> ListDocument<T> {
    pub fn new(data: Vec<Resource<T>>, links: Links, meta: Meta) -> Self {
        Self { data, links, meta }
    }
}

/// Request envelope: `{"data": {"attributes": {...}}}`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RequestDocument<T> {
    pub data: RequestResource<T>,
}

/// Resource object of a request document; clients do not supply ids.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RequestResource<T> {
    pub attributes: T,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
    struct Attrs {
        name: String,
    }

    #[test]
    fn single_document_serializes_with_type_and_self_link() {
        let doc = Document::new(
            "widgets",
            "42",
            Attrs {
                name: "Widget".to_string(),
            },
        )
        .with_self_link("/api/widgets/42");

        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value["data"]["type"], "widgets");
        assert_eq!(value["data"]["id"], "42");
        assert_eq!(value["data"]["attributes"]["name"], "Widget");
        assert_eq!(value["links"]["self"], "/api/widgets/42");
    }

    #[test]
    fn list_document_carries_camel_case_meta() {
        let doc: ListDocument<Attrs> = ListDocument::new(
            vec![],
            Links::self_href("/api/widgets"),
            Meta::paged(7, 2, 3, 3),
        );

        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value["meta"]["totalCount"], 7);
        assert_eq!(value["meta"]["page"], 2);
        assert_eq!(value["meta"]["size"], 3);
        assert_eq!(value["meta"]["totalPages"], 3);
    }

    #[test]
    fn plain_list_meta_omits_page_fields() {
        let value = serde_json::to_value(Meta::total(5)).unwrap();
        assert_eq!(value["totalCount"], 5);
        assert!(value.get("page").is_none());
        assert!(value.get("size").is_none());
    }

    #[test]
    fn request_document_parses_nested_attributes() {
        let doc: RequestDocument<Attrs> =
            serde_json::from_str(r#"{"data":{"attributes":{"name":"Widget"}}}"#).unwrap();
        assert_eq!(doc.data.attributes.name, "Widget");
    }
}
