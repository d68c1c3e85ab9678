// Generated by generate/src/main.rs. Do not edit.

use crate::Charmap;

/// ASCII decimal digits `0-9`.
pub static ASCII_DIGIT: Charmap = Charmap::from_words([
    0x00000000, 0x03FF0000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x00000000, 0x00000000,
]);

/// ASCII hexadecimal digits `0-9`, `A-F`, `a-f`.
pub static ASCII_HEXDIGIT: Charmap = Charmap::from_words([
    0x00000000, 0x03FF0000, 0x0000007E, 0x0000007E,
    0x00000000, 0x00000000, 0x00000000, 0x00000000,
]);

/// ASCII letters `A-Z` and `a-z`.
pub static ASCII_ALPHA: Charmap = Charmap::from_words([
    0x00000000, 0x00000000, 0x07FFFFFE, 0x07FFFFFE,
    0x00000000, 0x00000000, 0x00000000, 0x00000000,
]);

/// ASCII letters and digits.
pub static ASCII_ALPHANUMERIC: Charmap = Charmap::from_words([
    0x00000000, 0x03FF0000, 0x07FFFFFE, 0x07FFFFFE,
    0x00000000, 0x00000000, 0x00000000, 0x00000000,
]);

/// Tab, line feed, form feed, carriage return and space.
pub static ASCII_WHITESPACE: Charmap = Charmap::from_words([
    0x00003600, 0x00000001, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x00000000, 0x00000000,
]);

/// URL `gen-delims`: `:/?#[]@`.
pub static URL_GEN_DELIMS: Charmap = Charmap::from_words([
    0x00000000, 0x84008008, 0x28000001, 0x00000000,
    0x00000000, 0x00000000, 0x00000000, 0x00000000,
]);

/// URL `sub-delims`: `!$&'()*+,;=`.
pub static URL_SUB_DELIMS: Charmap = Charmap::from_words([
    0x00000000, 0x28001FD2, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x00000000, 0x00000000,
]);

/// URL `reserved` characters, the union of `gen-delims` and `sub-delims`.
pub static URL_RESERVED: Charmap = Charmap::from_words([
    0x00000000, 0xAC009FDA, 0x28000001, 0x00000000,
    0x00000000, 0x00000000, 0x00000000, 0x00000000,
]);

/// URL `unreserved` characters: letters, digits and `-._~`.
pub static URL_UNRESERVED: Charmap = Charmap::from_words([
    0x00000000, 0x03FF6000, 0x87FFFFFE, 0x47FFFFFE,
    0x00000000, 0x00000000, 0x00000000, 0x00000000,
]);
