/*!
 * ASCII folding.
 *
 * Text is compatibility-decomposed (NFKD) so accented letters split into a
 * base letter plus combining marks, then everything outside 7-bit ASCII is
 * dropped. Nothing is approximated: characters without an ASCII base vanish.
 */

use unicode_normalization::UnicodeNormalization;

/// Fold text to ASCII, removing diacritics and non-ASCII symbols
pub fn fold_ascii(text: &str) -> String {
    text.nfkd().filter(|c| c.is_ascii()).collect()
}
