//! Unit tests for [`completion_client::mask_token`].
//!
//! Ensures API keys are masked for safe logging: first 7 chars + `***` + last 4 chars.
//! Keys of 11 chars or fewer are fully masked as `***` to avoid leaking any segment.

use completion_client::mask_token;

/// **Test: Short or empty tokens are fully masked.**
///
/// **Expected:** Any token of length ≤ 11 returns `"***"` (no prefix/suffix shown).
#[test]
fn mask_token_short_returns_all_star() {
    assert_eq!(mask_token(""), "***");
    assert_eq!(mask_token("a"), "***");
    assert_eq!(mask_token("gsk_1234"), "***");
    assert_eq!(mask_token("gsk_1234567"), "***");
}

/// **Test: Long tokens show first 7 and last 4 characters.**
///
/// **Expected:** For length > 11, result is `head(7) + "***" + tail(4)`.
#[test]
fn mask_token_long_shows_head_and_tail() {
    assert_eq!(mask_token("gsk_abcdefghijklmnop"), "gsk_abc***mnop");
    assert_eq!(mask_token("gsk_abcdxyzw"), "gsk_abc***xyzw");
}

/// **Test: Typical long Groq key format.**
///
/// **Expected:** Masked string starts with `gsk_`, ends with last 4 chars, contains `***`, total length 14.
#[test]
fn mask_token_typical_groq_key() {
    let key = "gsk_1234567890abcdefghijklmnopqrstuvwxyz";
    let masked = mask_token(key);
    assert!(masked.starts_with("gsk_"));
    assert!(masked.ends_with("wxyz"));
    assert!(masked.contains("***"));
    assert_eq!(masked.len(), 7 + 3 + 4);
}

/// **Test: Tokens with multi-byte characters are cut on char boundaries.**
///
/// **Expected:** No panic; head and tail are counted in chars, so accented characters
/// survive intact even when a byte index would land inside one.
#[test]
fn mask_token_multibyte_safe() {
    // "é" spans bytes 6..8 here, so a byte cut at 7 would be inside it.
    assert_eq!(mask_token("abcdefémañana123"), "abcdefé***a123");
    // 6 chars but 12 bytes: still short enough to be fully masked.
    assert_eq!(mask_token("éééééé"), "***");
}
