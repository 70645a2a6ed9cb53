//! Variant picker.
//!
//! A `Variant` is one random combination of fragments for a single article.
//! Picking is a pure function of the random source and the keyword, so a
//! seeded `StdRng` reproduces the same article.

use super::fragments::{ANGLES, BENEFITS, CITIES, NOTES, OPENERS, RELATIONS};
use crate::config::Flavor;
use rand::{Rng, seq::IndexedRandom};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    pub keyword: String,
    pub city: String,
    /// Present only for the rich flavor.
    pub relation: Option<String>,
    pub title: String,
    pub h1: String,
    pub benefit: String,
    pub description: String,
    pub note: String,
}

/// Draw one keyword uniformly. `None` only for an empty list.
pub fn pick_keyword<'a, R: Rng + ?Sized>(rng: &mut R, keywords: &'a [String]) -> Option<&'a str> {
    keywords.choose(rng).map(String::as_str)
}

/// Compose a variant for `keyword`.
pub fn pick_variant<R: Rng + ?Sized>(rng: &mut R, keyword: &str, flavor: Flavor) -> Variant {
    let city = pick(rng, CITIES);
    let opener = pick(rng, OPENERS);
    let benefit = pick(rng, BENEFITS);
    let angle = pick(rng, ANGLES);
    let note = pick(rng, NOTES).replace("{city}", city);
    let relation = flavor.is_rich().then(|| pick(rng, RELATIONS));

    let mut title = format!("{opener}: {} in {city}", title_case(keyword));
    if let Some(relation) = relation {
        title.push_str(" for ");
        title.push_str(relation);
    }

    Variant {
        keyword: keyword.to_string(),
        city: city.to_string(),
        relation: relation.map(str::to_string),
        h1: format!("{opener} in {city}"),
        description: format!("{benefit}. {angle} for families searching '{keyword}'."),
        benefit: benefit.to_string(),
        note,
        title,
    }
}

#[inline]
fn pick<R: Rng + ?Sized>(rng: &mut R, table: &[&'static str]) -> &'static str {
    table.choose(rng).copied().unwrap_or_default()
}

/// Capitalize the first letter of every word, lowercase the rest.
fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("online obituary"), "Online Obituary");
        assert_eq!(title_case("QR code  funeral"), "Qr Code Funeral");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_same_seed_same_variant() {
        let a = pick_variant(&mut StdRng::seed_from_u64(42), "tribute page", Flavor::Rich);
        let b = pick_variant(&mut StdRng::seed_from_u64(42), "tribute page", Flavor::Rich);
        assert_eq!(a, b);
    }

    #[test]
    fn test_fields_come_from_tables() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let v = pick_variant(&mut rng, "memorial website", Flavor::Basic);
            assert!(CITIES.contains(&v.city.as_str()));
            assert!(BENEFITS.contains(&v.benefit.as_str()));
            assert!(ANGLES.iter().any(|a| v.description.contains(a)));
            assert!(v.title.ends_with(&format!("Memorial Website in {}", v.city)));
            assert!(v.h1.ends_with(&format!(" in {}", v.city)));
            assert!(v.description.contains("'memorial website'"));
            assert!(v.note.contains(&v.city));
            assert!(!v.note.contains("{city}"));
        }
    }

    #[test]
    fn test_relation_only_for_rich() {
        let mut rng = StdRng::seed_from_u64(3);
        let basic = pick_variant(&mut rng, "tribute page", Flavor::Basic);
        assert_eq!(basic.relation, None);

        let rich = pick_variant(&mut rng, "tribute page", Flavor::Rich);
        let relation = rich.relation.as_deref().unwrap();
        assert!(RELATIONS.contains(&relation));
        assert!(rich.title.ends_with(&format!(" for {relation}")));
    }

    #[test]
    fn test_pick_keyword() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(pick_keyword(&mut rng, &[]), None);

        let keywords = vec!["a".to_string(), "b".to_string()];
        for _ in 0..20 {
            let kw = pick_keyword(&mut rng, &keywords).unwrap();
            assert!(kw == "a" || kw == "b");
        }
    }

    #[test]
    fn test_keyword_kept_verbatim() {
        let mut rng = StdRng::seed_from_u64(9);
        let v = pick_variant(&mut rng, "<script>alert(1)</script>", Flavor::Basic);
        assert_eq!(v.keyword, "<script>alert(1)</script>");
    }
}
