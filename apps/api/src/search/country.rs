//! Country detection for provider routing.
//!
//! Lowercased string matching of well-known city and country names against
//! a fixed table. Adzuna needs the code as a URL path segment and JSearch
//! takes it as a query parameter; everything unrecognized falls back to `us`.

pub const DEFAULT_COUNTRY: &str = "us";

/// Marker → ISO 3166-1 alpha-2 code. Longer phrases are checked as
/// substrings; markers of three characters or fewer must match a whole
/// token so "uk" does not fire inside "ukraine".
const COUNTRY_MARKERS: &[(&str, &str)] = &[
    ("united states", "us"),
    ("usa", "us"),
    ("new york", "us"),
    ("san francisco", "us"),
    ("seattle", "us"),
    ("austin", "us"),
    ("boston", "us"),
    ("chicago", "us"),
    ("united kingdom", "gb"),
    ("uk", "gb"),
    ("london", "gb"),
    ("manchester", "gb"),
    ("edinburgh", "gb"),
    ("india", "in"),
    ("bangalore", "in"),
    ("bengaluru", "in"),
    ("mumbai", "in"),
    ("hyderabad", "in"),
    ("pune", "in"),
    ("chennai", "in"),
    ("delhi", "in"),
    ("canada", "ca"),
    ("toronto", "ca"),
    ("vancouver", "ca"),
    ("montreal", "ca"),
    ("australia", "au"),
    ("sydney", "au"),
    ("melbourne", "au"),
    ("germany", "de"),
    ("berlin", "de"),
    ("munich", "de"),
    ("france", "fr"),
    ("paris", "fr"),
    ("netherlands", "nl"),
    ("amsterdam", "nl"),
    ("singapore", "sg"),
    ("spain", "es"),
    ("madrid", "es"),
    ("barcelona", "es"),
    ("italy", "it"),
    ("milan", "it"),
    ("poland", "pl"),
    ("warsaw", "pl"),
    ("krakow", "pl"),
    ("brazil", "br"),
    ("sao paulo", "br"),
    ("mexico", "mx"),
    ("new zealand", "nz"),
    ("auckland", "nz"),
    ("south africa", "za"),
    ("cape town", "za"),
    ("johannesburg", "za"),
    ("switzerland", "ch"),
    ("zurich", "ch"),
    ("austria", "at"),
    ("vienna", "at"),
    ("belgium", "be"),
    ("brussels", "be"),
];

/// Detects the country code for a free-form location string.
pub fn detect_country(location: &str) -> &'static str {
    let lower = location.to_lowercase();
    if lower.trim().is_empty() {
        return DEFAULT_COUNTRY;
    }

    for (marker, code) in COUNTRY_MARKERS {
        let matched = if marker.len() <= 3 {
            lower
                .split(|c: char| !c.is_alphanumeric())
                .any(|token| token == *marker)
        } else {
            lower.contains(marker)
        };
        if matched {
            return code;
        }
    }

    DEFAULT_COUNTRY
}
