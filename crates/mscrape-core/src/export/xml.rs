use crate::record::{ProfileRecord, FIELD_NAMES};

const DECLARATION: &str = "<?xml version='1.0' encoding='utf-8'?>\n";

/// Escapes element text and drops characters XML 1.0 cannot carry.
fn escape_text(s: &str) -> String {
    let printable: String = s
        .chars()
        .filter(|&c| !c.is_control() || matches!(c, '\t' | '\n' | '\r'))
        .collect();
    html_escape::encode_text(&printable).into_owned()
}

/// `<records>` root, one `<record>` per record, one child per field;
/// absent fields are empty elements.
pub(super) fn encode(records: &[ProfileRecord]) -> Vec<u8> {
    let mut out = String::from(DECLARATION);
    if records.is_empty() {
        out.push_str("<records />");
        return out.into_bytes();
    }
    out.push_str("<records>");
    for record in records {
        out.push_str("<record>");
        for (name, value) in FIELD_NAMES.iter().zip(record.values()) {
            match value {
                Some(v) if !v.is_empty() => {
                    out.push_str(&format!("<{name}>{}</{name}>", escape_text(v)));
                }
                _ => out.push_str(&format!("<{name} />")),
            }
        }
        out.push_str("</record>");
    }
    out.push_str("</records>");
    out.into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::test_support::sample;

    #[test]
    fn escapes_and_empty_elements() {
        let out = String::from_utf8(encode(&sample())).unwrap();
        assert!(out.starts_with("<?xml version='1.0' encoding='utf-8'?>\n<records><record>"));
        assert!(out.contains("<title>Alice, \"the\" &lt;Writer&gt;</title>"));
        assert!(out.contains("<snippet>Essays &amp; notes</snippet>"));
        assert!(out.contains("<email_domain>example.com</email_domain>"));
        assert!(out.contains("<title>Bob</title><url>https://medium.com/@bob</url><snippet /><email />"));
        assert!(out.ends_with("</record></records>"));
    }

    #[test]
    fn empty_set() {
        let out = String::from_utf8(encode(&[])).unwrap();
        assert_eq!(out, "<?xml version='1.0' encoding='utf-8'?>\n<records />");
    }

    #[test]
    fn control_chars_dropped() {
        assert_eq!(escape_text("a\u{0}b\tc"), "ab\tc");
    }
}
