//! Percent-encoding helpers shared by the parser and the query map.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters that separate URL components and must survive pre-encoding.
pub(crate) const DELIMITERS: [char; 7] = [':', '/', '@', '?', '&', '=', '#'];

/// Characters escaped inside a run of non-delimiter text before splitting.
///
/// `+` and `~` stay literal so schemes like `svn+ssh` remain recognisable and
/// form-encoded query text is not altered before it is decoded.
const RUN_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'+')
    .remove(b'~');

/// Characters escaped in query names and values. Space is handled separately.
const FORM_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

/// Percent-encode every run of characters that is not a URL delimiter.
///
/// Whole runs are encoded at once so multi-byte characters and stray `%`
/// signs can never be confused with delimiters by the splitter.
pub(crate) fn pre_encode(input: &str) -> String {
    let mut encoded = String::with_capacity(input.len() * 3);
    let mut run_start = None;

    for (idx, ch) in input.char_indices() {
        if DELIMITERS.contains(&ch) {
            if let Some(start) = run_start.take() {
                encoded.extend(utf8_percent_encode(&input[start..idx], RUN_ENCODE_SET));
            }
            encoded.push(ch);
        } else if run_start.is_none() {
            run_start = Some(idx);
        }
    }

    if let Some(start) = run_start {
        encoded.extend(utf8_percent_encode(&input[start..], RUN_ENCODE_SET));
    }

    encoded
}

/// Decode `%XX` escapes. Invalid UTF-8 is replaced rather than rejected.
pub(crate) fn decode(input: &str) -> String {
    percent_decode_str(input).decode_utf8_lossy().into_owned()
}

/// Form-encode a query name or value, mapping spaces to `+`.
pub(crate) fn form_encode(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut first = true;
    for chunk in input.split(' ') {
        if !first {
            result.push('+');
        }
        first = false;
        result.extend(utf8_percent_encode(chunk, FORM_ENCODE_SET));
    }
    result
}

/// Inverse of [`form_encode`]: `+` becomes a space, then escapes are decoded.
pub(crate) fn form_decode(input: &str) -> String {
    decode(&input.replace('+', " "))
}
