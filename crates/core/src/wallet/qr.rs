//! QR rendering is delegated to a public image API keyed by the encoded
//! ticket code.

const QR_API_BASE: &str = "https://api.qrserver.com/v1/create-qr-code/";
const QR_SIZE: &str = "200x200";

/// Build the QR image URL for a ticket code.
pub fn qr_image_url(ticket_code: &str) -> String {
    format!("{QR_API_BASE}?size={QR_SIZE}&data={}", percent_encode(ticket_code))
}

/// Minimal percent-encoding of a query value: unreserved characters pass
/// through, everything else is encoded byte-wise.
fn percent_encode(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char);
            }
            _ => {
                encoded.push('%');
                encoded.push_str(&format!("{byte:02X}"));
            }
        }
    }
    encoded
}

#[cfg(test)]
mod tests {
    use super::{percent_encode, qr_image_url};

    #[test]
    fn plain_codes_pass_through() {
        let url = qr_image_url("ING-0123abcd");
        assert_eq!(
            url,
            "https://api.qrserver.com/v1/create-qr-code/?size=200x200&data=ING-0123abcd"
        );
    }

    #[test]
    fn reserved_characters_are_escaped() {
        assert_eq!(percent_encode("a b&c=d"), "a%20b%26c%3Dd");
        assert_eq!(percent_encode("ção"), "%C3%A7%C3%A3o");
    }
}
