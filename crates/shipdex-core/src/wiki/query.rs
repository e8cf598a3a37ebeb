//! Request URLs and lookup candidates for the wiki source.

use url::Url;

/// Title variants probed directly, in order.
pub fn title_candidates(name: &str) -> [String; 4] {
    [
        name.to_string(),
        format!("{name} (starship)"),
        format!("{name} (starship class)"),
        format!("{name} (Star Wars)"),
    ]
}

/// Full-text search queries tried after every direct title missed.
pub fn search_queries(name: &str) -> [String; 3] {
    [
        format!("incategory:Starships {name}"),
        format!("incategory:\"Starships\" {name}"),
        format!("{name} starship"),
    ]
}

pub fn page_images_url(api: &str, title: &str, thumb_size: u32) -> Result<String, url::ParseError> {
    let thumb_size = thumb_size.to_string();
    let url = Url::parse_with_params(
        api,
        &[
            ("action", "query"),
            ("prop", "pageimages"),
            ("titles", title),
            ("pithumbsize", thumb_size.as_str()),
            ("piprop", "thumbnail|original"),
            ("format", "json"),
            ("origin", "*"),
        ],
    )?;
    Ok(url.into())
}

pub fn search_url(api: &str, query: &str, limit: usize) -> Result<String, url::ParseError> {
    let limit = limit.to_string();
    let url = Url::parse_with_params(
        api,
        &[
            ("action", "query"),
            ("list", "search"),
            ("srsearch", query),
            ("srlimit", limit.as_str()),
            ("format", "json"),
            ("origin", "*"),
        ],
    )?;
    Ok(url.into())
}
