//! # Referrer Parsing
//!
//! The host does not send the client identity in a dedicated header. It is
//! embedded in the page-frame URL carried by the referrer:
//!
//! ```text
//! https://servicewechat.com/{identity}/{version}/page-frame.html
//! ```
//!
//! `{identity}` ends at the first `/` after the host. `{version}` is opaque
//! and may contain anything, including further slashes.

use super::entities::ClientIdentity;

const PAGE_FRAME_ORIGIN: &str = "https://servicewechat.com/";
const PAGE_FRAME_SUFFIX: &str = "/page-frame.html";

/// Extract the claimed client identity from a referrer value.
///
/// Returns `None` when the referrer is not a page-frame URL or when the
/// identity segment is empty.
pub fn extract_identity(referrer: &str) -> Option<ClientIdentity> {
    let path = referrer.strip_prefix(PAGE_FRAME_ORIGIN)?;
    let (identity, rest) = path.split_once('/')?;

    // `rest` starts at the version segment; an empty version leaves the
    // suffix at position zero.
    if identity.is_empty() || !rest.contains(PAGE_FRAME_SUFFIX) {
        return None;
    }

    Some(ClientIdentity::new(identity))
}
