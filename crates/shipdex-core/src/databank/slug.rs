//! Databank slug derivation: curated overrides, generic slugify, suffix variants.

/// Names whose databank slug differs from what [`slugify`] produces.
/// Exact match on the raw catalog name, checked before the generic transform.
const SLUG_OVERRIDES: &[(&str, &str)] = &[
    ("CR90 corvette", "cr90-corvette"),
    ("Sentinel-class landing craft", "sentinel-class-landing-craft"),
    ("Y-wing", "y-wing-starfighter"),
    ("X-wing", "x-wing-starfighter"),
    ("TIE Advanced x1", "tie-advanced-x1"),
    ("Rebel transport", "rebel-transport"),
    ("Calamari Cruiser", "mon-calamari-cruiser"),
    ("A-wing", "a-wing-starfighter"),
    ("Droid control ship", "droid-control-ship"),
    ("J-type diplomatic barge", "j-type-diplomatic-barge"),
    ("Republic Assault ship", "republic-assault-ship"),
    ("Trade Federation cruiser", "trade-federation-cruiser"),
    ("Theta-class T-2c shuttle", "theta-class-t-2c-shuttle"),
    ("Naboo star skiff", "naboo-star-skiff"),
    ("Jedi Interceptor", "jedi-interceptor"),
    ("arc-170", "arc-170-starfighter"),
    ("Banking clan frigte", "banking-clan-frigate"),
    ("Belbullab-22 starfighter", "belbullab-22-starfighter"),
    ("V-wing", "v-wing-starfighter"),
];

/// Suffixes stripped (one at a time, from the full slug) to form fallback candidates.
const STRIPPED_SUFFIXES: [&str; 3] = ["-class", "-starfighter", "-fighter"];

/// Curated slug for `name`, if there is one.
pub fn slug_override(name: &str) -> Option<&'static str> {
    SLUG_OVERRIDES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, slug)| *slug)
}

/// Generic URL slug:
///
/// - lowercases, `&` becomes `and`
/// - drops `'` and each of `â`, `€`, `™` (bytes of a mis-decoded `’`);
///   a correctly decoded `’` is just another separator
/// - collapses every run of characters outside `[a-z0-9]` to one `-`
/// - no leading or trailing `-`
pub fn slugify(value: &str) -> String {
    let lowered = value
        .to_lowercase()
        .replace('&', "and")
        .replace(['â', '€', '™', '\''], "");

    let mut out = String::with_capacity(lowered.len());
    let mut pending_hyphen = false;
    for c in lowered.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(c);
        } else {
            pending_hyphen = true;
        }
    }
    out
}

/// Override if present, else [`slugify`].
pub fn databank_slug(name: &str) -> String {
    slug_override(name)
        .map(str::to_string)
        .unwrap_or_else(|| slugify(name))
}

/// The slug, then the slug minus each known suffix. Empty and repeated
/// candidates are dropped, so there are at most four.
pub fn slug_candidates(slug: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(1 + STRIPPED_SUFFIXES.len());
    let stripped = STRIPPED_SUFFIXES
        .iter()
        .map(|suffix| slug.strip_suffix(suffix).unwrap_or(slug));
    for candidate in std::iter::once(slug).chain(stripped) {
        if !candidate.is_empty() && !out.iter().any(|c| c == candidate) {
            out.push(candidate.to_string());
        }
    }
    out
}
