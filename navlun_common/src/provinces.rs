use std::collections::HashMap;

use crate::data::PROVINCES;
use crate::regions::Region;

/// One of Turkey's 81 administrative divisions (spec.md §3 `Province`).
/// Immutable; keyed by `ascii_name` or any of its `aliases`.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Province {
    pub code: u8,
    pub canonical_name: String,
    pub ascii_name: String,
    pub region: Region,
    pub aliases: Vec<String>,
}

lazy_static! {
    static ref BY_ASCII_OR_ALIAS: HashMap<&'static str, Province> = {
        let mut map = HashMap::new();
        for row in PROVINCES {
            let province = Province {
                code: row.code,
                canonical_name: row.canonical.to_string(),
                ascii_name: row.ascii.to_string(),
                region: row.region,
                aliases: row.aliases.iter().map(|a| a.to_string()).collect(),
            };
            map.insert(row.ascii, province.clone());
            for alias in row.aliases {
                map.insert(*alias, province.clone());
            }
        }
        map
    };
    static ref NEIGHBORS: HashMap<&'static str, Vec<&'static str>> = {
        let mut map = HashMap::new();
        for row in PROVINCES {
            map.insert(row.ascii, row.neighbors.to_vec());
        }
        // Symmetrize: the source table is authored one-directionally in
        // places, but the neighbor relation itself is always symmetric.
        let pairs: Vec<(&'static str, &'static str)> = map
            .iter()
            .flat_map(|(&ascii, neighbors)| neighbors.iter().map(move |&n| (n, ascii)))
            .collect();
        for (ascii, back_ref) in pairs {
            let entry = map.entry(ascii).or_default();
            if !entry.contains(&back_ref) {
                entry.push(back_ref);
            }
        }
        map
    };
}

/// Resolve an ascii province name or alias (e.g. `antep`, `urfa`, `ist`) to
/// its canonical `Province`. Total: returns `None` on no match, never panics.
pub fn resolve_province(ascii: &str) -> Option<Province> {
    BY_ASCII_OR_ALIAS.get(ascii).cloned()
}

/// Symmetric neighbor-province ascii names for `province_ascii`.
pub fn neighbors(province_ascii: &str) -> &'static [&'static str] {
    NEIGHBORS
        .get(province_ascii)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn all_81_provinces_present() {
        let mut codes: Vec<u8> = PROVINCES.iter().map(|r| r.code).collect();
        codes.sort_unstable();
        assert_eq!(codes, (1..=81).collect::<Vec<u8>>());
    }

    #[test]
    fn resolves_alias() {
        let p = resolve_province("antep").unwrap();
        assert_eq!(p.ascii_name, "gaziantep");
        let p = resolve_province("urfa").unwrap();
        assert_eq!(p.ascii_name, "sanliurfa");
        let p = resolve_province("ist").unwrap();
        assert_eq!(p.ascii_name, "istanbul");
        let p = resolve_province("izmit").unwrap();
        assert_eq!(p.ascii_name, "kocaeli");
        let p = resolve_province("icel").unwrap();
        assert_eq!(p.ascii_name, "mersin");
    }

    #[test]
    fn unknown_province_is_none() {
        assert!(resolve_province("narnia").is_none());
    }

    #[test]
    fn neighbors_are_symmetric() {
        assert!(neighbors("istanbul").contains(&"kocaeli"));
        assert!(neighbors("kocaeli").contains(&"istanbul"));
    }
}
