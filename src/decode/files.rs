use crate::constants::{
    ASSET_CACHE_VERSION, ASSET_OWNER_TABLE, IMAGE_PROXY_PREFIX, NOTION_ORIGIN,
};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::Url;

/// Characters `encodeURIComponent` escapes: everything but `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_uri_component(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}

/// Builds the proxied URL of an attachment stored at `raw_path` on block `owner_id`.
///
/// Paths already routed through the image proxy are kept; anything else
/// (usually an S3 URL) is escaped into a single proxy path segment.
pub fn asset_url(raw_path: &str, owner_id: &str) -> Result<Url, url::ParseError> {
    let path = if raw_path.starts_with(IMAGE_PROXY_PREFIX) {
        raw_path.to_string()
    } else {
        format!("{}/{}", IMAGE_PROXY_PREFIX, encode_uri_component(raw_path))
    };

    let mut url = Url::parse(&format!("{}{}", NOTION_ORIGIN, path))?;
    set_query_params(
        &mut url,
        &[
            ("table", ASSET_OWNER_TABLE),
            ("id", owner_id),
            ("cache", ASSET_CACHE_VERSION),
        ],
    );
    Ok(url)
}

/// Sets each parameter the way `URLSearchParams.set` does: the first existing
/// pair takes the new value and later duplicates go, otherwise it is appended.
fn set_query_params(url: &mut Url, params: &[(&str, &str)]) {
    let mut pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();

    for (key, value) in params {
        let mut seen = false;
        pairs.retain_mut(|(k, v)| {
            if k.as_str() != *key {
                return true;
            }
            if seen {
                return false;
            }
            seen = true;
            *v = value.to_string();
            true
        });
        if !seen {
            pairs.push((key.to_string(), value.to_string()));
        }
    }

    url.query_pairs_mut().clear().extend_pairs(pairs);
}
