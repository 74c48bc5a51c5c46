//! Outbound link helpers: mailto composition for the contact affordance.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// RFC 6068 hpart encoding: reserve everything that would change the URL
/// structure. Spaces become %20, not '+'.
const MAILTO_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'=');

/// Compose a mailto URL with an encoded subject and body.
pub fn mailto(to: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{to}?subject={}&body={}",
        utf8_percent_encode(subject, MAILTO_SET),
        utf8_percent_encode(body, MAILTO_SET),
    )
}
