//! Small word-table generators for demo content. Not meant to be
//! linguistically interesting, only plausible enough for a storefront
//! preview.

use rand::Rng;

const COMPANY_NAMES: &[&str] = &[
    "Northwind", "Acme", "Fabrikam", "Contoso", "Globex", "Initech", "Umbra", "Vandelay",
    "Aperture", "Wayfarer", "Bluebird", "Hollowbrook",
];

const COMPANY_SUFFIXES: &[&str] = &[
    "GmbH", "AG", "Ltd", "Inc", "& Sons", "Group", "Trading Co.", "Logistics",
];

const FILLER_WORDS: &[&str] = &[
    "the", "season", "collection", "arrives", "with", "new", "colors", "and", "materials",
    "crafted", "for", "everyday", "use", "our", "designers", "selected", "durable", "fabrics",
    "that", "feel", "light", "while", "keeping", "their", "shape", "every", "piece", "ships",
    "from", "local", "warehouses", "within", "days",
];

/// A company-style display name, e.g. `Northwind GmbH`.
pub fn company_name(rng: &mut impl Rng) -> String {
    format!(
        "{} {}",
        pick(rng, COMPANY_NAMES),
        pick(rng, COMPANY_SUFFIXES)
    )
}

/// A short body paragraph of two to four sentences.
pub fn paragraph(rng: &mut impl Rng) -> String {
    let sentences = rng.random_range(2..=4);
    let mut out = String::new();
    for i in 0..sentences {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&sentence(rng));
    }
    out
}

/// A placeholder image URL with a cache-busting token in `1..=9999`.
pub fn random_image_url(rng: &mut impl Rng) -> String {
    format!(
        "https://source.unsplash.com/random?t={}",
        rng.random_range(1..=9999)
    )
}

fn sentence(rng: &mut impl Rng) -> String {
    let words = rng.random_range(6..=12);
    let mut out = String::new();
    for i in 0..words {
        let word = pick(rng, FILLER_WORDS);
        if i == 0 {
            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                out.push(first.to_ascii_uppercase());
                out.push_str(chars.as_str());
            }
        } else {
            out.push(' ');
            out.push_str(word);
        }
    }
    out.push('.');
    out
}

fn pick<'a>(rng: &mut impl Rng, pool: &'a [&'a str]) -> &'a str {
    pool[rng.random_range(0..pool.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_url_token_stays_in_range() {
        let mut rng = rand::rng();
        for _ in 0..200 {
            let url = random_image_url(&mut rng);
            let token = url
                .strip_prefix("https://source.unsplash.com/random?t=")
                .expect("unexpected url prefix");
            let token: u32 = token.parse().expect("token must be an integer");
            assert!((1..=9999).contains(&token), "token {token} out of range");
        }
    }

    #[test]
    fn company_name_has_name_and_suffix() {
        let mut rng = rand::rng();
        let name = company_name(&mut rng);
        assert!(name.split(' ').count() >= 2);
    }

    #[test]
    fn paragraph_is_sentence_shaped() {
        let mut rng = rand::rng();
        let text = paragraph(&mut rng);
        assert!(text.ends_with('.'));
        assert!(text.chars().next().unwrap().is_ascii_uppercase());
    }
}
