//! Search-text normalization: lower-casing plus diacritic folding, applied
//! identically to queries and pizza names so matching is case- and
//! accent-insensitive in both directions.

/// Normalize a raw search string or pizza name for matching.
///
/// Lower-cases the input, then folds decomposable Latin characters to their
/// base letter ("é" → "e", "à" → "a", "œ" → "oe"). Characters without a
/// folding rule pass through unchanged. Total and idempotent: it never
/// fails, and normalizing twice equals normalizing once.
pub fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars().flat_map(char::to_lowercase) {
        fold_char(c, &mut out);
    }
    out
}

/// True when a pizza name matches an already-normalized query. The empty
/// query matches every name.
pub fn name_matches(name: &str, normalized_query: &str) -> bool {
    normalize(name).contains(normalized_query)
}

// Fixed folding table for decomposable Latin characters, lower-case side
// only (inputs are lower-cased first).
fn fold_char(c: char, out: &mut String) {
    let folded = match c {
        'à'..='å' | 'ā' | 'ă' | 'ą' => "a",
        'æ' => "ae",
        'ç' | 'ć' | 'ĉ' | 'ċ' | 'č' => "c",
        'ď' | 'đ' | 'ð' => "d",
        'è'..='ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => "e",
        'ĝ' | 'ğ' | 'ġ' | 'ģ' => "g",
        'ĥ' | 'ħ' => "h",
        'ì'..='ï' | 'ĩ' | 'ī' | 'ĭ' | 'į' | 'ı' => "i",
        'ĳ' => "ij",
        'ĵ' => "j",
        'ķ' => "k",
        'ĺ' | 'ļ' | 'ľ' | 'ŀ' | 'ł' => "l",
        'ñ' | 'ń' | 'ņ' | 'ň' | 'ŉ' => "n",
        'ò'..='ö' | 'ø' | 'ō' | 'ŏ' | 'ő' => "o",
        'œ' => "oe",
        'ŕ' | 'ŗ' | 'ř' => "r",
        'ś' | 'ŝ' | 'ş' | 'š' => "s",
        'ţ' | 'ť' | 'ŧ' => "t",
        'ù'..='ü' | 'ũ' | 'ū' | 'ŭ' | 'ů' | 'ű' | 'ų' => "u",
        'ŵ' => "w",
        'ý' | 'ÿ' | 'ŷ' => "y",
        'ź' | 'ż' | 'ž' => "z",
        other => {
            out.push(other);
            return;
        }
    };
    out.push_str(folded);
}
