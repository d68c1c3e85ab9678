pub struct Class {
    pub name: &'static str,
    pub doc: &'static str,
    pub bytes: Vec<u8>,
}

const DIGIT: &[u8] = b"0123456789";
const UPPER: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWER: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

// RFC 3986 section 2.2
const GEN_DELIMS: &[u8] = b":/?#[]@";
const SUB_DELIMS: &[u8] = b"!$&'()*+,;=";

fn concat(parts: &[&[u8]]) -> Vec<u8> {
    parts.concat()
}

pub fn classes() -> Vec<Class> {
    vec![
        Class {
            name: "ASCII_DIGIT",
            doc: "ASCII decimal digits `0-9`.",
            bytes: DIGIT.to_vec(),
        },
        Class {
            name: "ASCII_HEXDIGIT",
            doc: "ASCII hexadecimal digits `0-9`, `A-F`, `a-f`.",
            bytes: concat(&[DIGIT, b"ABCDEF", b"abcdef"]),
        },
        Class {
            name: "ASCII_ALPHA",
            doc: "ASCII letters `A-Z` and `a-z`.",
            bytes: concat(&[UPPER, LOWER]),
        },
        Class {
            name: "ASCII_ALPHANUMERIC",
            doc: "ASCII letters and digits.",
            bytes: concat(&[DIGIT, UPPER, LOWER]),
        },
        Class {
            name: "ASCII_WHITESPACE",
            doc: "Tab, line feed, form feed, carriage return and space.",
            bytes: b"\t\n\x0C\r ".to_vec(),
        },
        Class {
            name: "URL_GEN_DELIMS",
            doc: "URL `gen-delims`: `:/?#[]@`.",
            bytes: GEN_DELIMS.to_vec(),
        },
        Class {
            name: "URL_SUB_DELIMS",
            doc: "URL `sub-delims`: `!$&'()*+,;=`.",
            bytes: SUB_DELIMS.to_vec(),
        },
        Class {
            name: "URL_RESERVED",
            doc: "URL `reserved` characters, the union of `gen-delims` and `sub-delims`.",
            bytes: concat(&[GEN_DELIMS, SUB_DELIMS]),
        },
        Class {
            name: "URL_UNRESERVED",
            doc: "URL `unreserved` characters: letters, digits and `-._~`.",
            bytes: concat(&[UPPER, LOWER, DIGIT, b"-._~"]),
        },
    ]
}
