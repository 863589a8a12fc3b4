//! Collection, item and action routes, generic over the resource kind.
//!
//! | Method | Path | Operation |
//! |---|---|---|
//! | GET | `/{collection}` | list every record |
//! | POST | `/{collection}` | create, 201 with `Location` |
//! | GET | `/{collection}/{id}` | read, with `ETag` |
//! | PUT | `/{collection}/{id}` | replace attributes, honours `If-Match` |
//! | DELETE | `/{collection}/{id}` | delete, 204 |
//! | PUT, POST, DELETE | `/{collection}/{id}/{action}` | named transition |

use super::error::ApiError;
use super::representation::{decode, encode, encode_collection, Representation};
use crate::clients::ServiceClient;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, put};
use axum::{Json, Router};
use resource_framework::{Linked, ResourceId, SELF_REL};
use serde_json::Value;

pub fn resource_routes<K, C>(client: C) -> Router
where
    K: Representation,
    C: ServiceClient<K>,
{
    let collection = format!("/{}", K::COLLECTION);
    let item = format!("{collection}/:id");
    let action = format!("{item}/:action");

    Router::new()
        .route(&collection, get(list::<K, C>).post(create::<K, C>))
        .route(
            &item,
            get(read::<K, C>)
                .put(replace::<K, C>)
                .delete(remove::<K, C>),
        )
        .route(
            &action,
            put(transition::<K, C>)
                .post(transition::<K, C>)
                .delete(transition::<K, C>),
        )
        .with_state(client)
}

async fn list<K, C>(State(client): State<C>) -> Result<Json<Value>, ApiError>
where
    K: Representation,
    C: ServiceClient<K>,
{
    let collection = client.list_all().await?;
    Ok(Json(encode_collection(&collection)))
}

async fn create<K, C>(State(client): State<C>, body: Bytes) -> Result<Response, ApiError>
where
    K: Representation,
    C: ServiceClient<K>,
{
    let attributes = decode::<K>(&parse_body(&body)?)?;
    let created = client.create(attributes).await?;
    let location = created.links.get(SELF_REL).unwrap_or_default().to_string();
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location), (header::ETAG, etag(&created))],
        Json(encode(&created)),
    )
        .into_response())
}

async fn read<K, C>(State(client): State<C>, Path(id): Path<String>) -> Result<Response, ApiError>
where
    K: Representation,
    C: ServiceClient<K>,
{
    let found = client.get(parse_id(&id)?).await?;
    Ok(with_etag(&found))
}

async fn replace<K, C>(
    State(client): State<C>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ApiError>
where
    K: Representation,
    C: ServiceClient<K>,
{
    let id = parse_id(&id)?;
    let expected_version = if_match(&headers)?;
    let attributes = decode::<K>(&parse_body(&body)?)?;
    let updated = client.update(id, attributes, expected_version).await?;
    Ok(with_etag(&updated))
}

async fn remove<K, C>(State(client): State<C>, Path(id): Path<String>) -> Result<StatusCode, ApiError>
where
    K: Representation,
    C: ServiceClient<K>,
{
    client.delete(parse_id(&id)?).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn transition<K, C>(
    State(client): State<C>,
    Path((id, action)): Path<(String, String)>,
) -> Result<Response, ApiError>
where
    K: Representation,
    C: ServiceClient<K>,
{
    let moved = client.transition(parse_id(&id)?, &action).await?;
    Ok(with_etag(&moved))
}

fn parse_id(raw: &str) -> Result<ResourceId, ApiError> {
    raw.parse::<u64>()
        .map(ResourceId)
        .map_err(|_| ApiError::BadRequest(format!("Invalid id '{raw}'")))
}

fn parse_body(body: &[u8]) -> Result<Value, ApiError> {
    serde_json::from_slice(body).map_err(|e| ApiError::BadRequest(format!("Malformed JSON body: {e}")))
}

fn etag<K: Representation>(linked: &Linked<K>) -> String {
    format!("\"{}\"", linked.resource.version)
}

fn with_etag<K: Representation>(linked: &Linked<K>) -> Response {
    ([(header::ETAG, etag(linked))], Json(encode(linked))).into_response()
}

/// The version named by `If-Match`, if any. `*` matches every version.
fn if_match(headers: &HeaderMap) -> Result<Option<u64>, ApiError> {
    let Some(value) = headers.get(header::IF_MATCH) else {
        return Ok(None);
    };
    let raw = value
        .to_str()
        .map_err(|_| ApiError::BadRequest("If-Match must be visible ASCII".into()))?
        .trim();
    if raw == "*" {
        return Ok(None);
    }
    raw.trim_start_matches("W/")
        .trim_matches('"')
        .parse()
        .map(Some)
        .map_err(|_| ApiError::BadRequest(format!("Unrecognized If-Match value {raw}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn if_match_accepts_strong_weak_and_wildcard() {
        let mut headers = HeaderMap::new();
        assert_eq!(if_match(&headers).unwrap(), None);

        headers.insert(header::IF_MATCH, HeaderValue::from_static("\"3\""));
        assert_eq!(if_match(&headers).unwrap(), Some(3));

        headers.insert(header::IF_MATCH, HeaderValue::from_static("W/\"4\""));
        assert_eq!(if_match(&headers).unwrap(), Some(4));

        headers.insert(header::IF_MATCH, HeaderValue::from_static("*"));
        assert_eq!(if_match(&headers).unwrap(), None);

        headers.insert(header::IF_MATCH, HeaderValue::from_static("\"v2\""));
        assert!(matches!(if_match(&headers), Err(ApiError::BadRequest(_))));
    }

    #[test]
    fn ids_must_be_numbers() {
        assert_eq!(parse_id("17").unwrap(), ResourceId(17));
        assert!(matches!(parse_id("abc"), Err(ApiError::BadRequest(_))));
    }
}
