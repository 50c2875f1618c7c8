use std::collections::HashMap;

use crate::data::PROVINCES;

/// The seven standard Turkish geographic regions (spec.md §6.2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Region {
    Marmara,
    Ege,
    Akdeniz,
    IcAnadolu,
    Karadeniz,
    DoguAnadolu,
    GuneydoguAnadolu,
}

impl Region {
    /// The ascii-normalized keys this region is recognized under in free text.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Region::Marmara => &["marmara"],
            Region::Ege => &["ege", "egebolgesi"],
            Region::Akdeniz => &["akdeniz"],
            Region::IcAnadolu => &["icanadolu", "ic anadolu"],
            Region::Karadeniz => &["karadeniz"],
            Region::DoguAnadolu => &["doguanadolu", "dogu anadolu"],
            Region::GuneydoguAnadolu => &["guneydoguanadolu", "guneydogu anadolu"],
        }
    }
}

lazy_static! {
    static ref REGION_PROVINCES: HashMap<Region, Vec<&'static str>> = {
        let mut map: HashMap<Region, Vec<&'static str>> = HashMap::new();
        for row in PROVINCES {
            map.entry(row.region).or_default().push(row.ascii);
        }
        map
    };
    static ref REGION_BY_ALIAS: HashMap<&'static str, Region> = {
        let mut map = HashMap::new();
        for region in [
            Region::Marmara,
            Region::Ege,
            Region::Akdeniz,
            Region::IcAnadolu,
            Region::Karadeniz,
            Region::DoguAnadolu,
            Region::GuneydoguAnadolu,
        ] {
            for alias in region.aliases() {
                map.insert(*alias, region);
            }
        }
        map
    };
}

/// All province ascii names belonging to `region`, in plate-code order.
pub fn region_provinces(region: Region) -> &'static [&'static str] {
    REGION_PROVINCES
        .get(&region)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Resolve a normalized region token/alias (e.g. `ege`, `icanadolu`) to a `Region`.
pub fn resolve_region(ascii: &str) -> Option<Region> {
    REGION_BY_ALIAS.get(ascii).copied()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn region_counts_match_spec() {
        assert_eq!(region_provinces(Region::Marmara).len(), 11);
        assert_eq!(region_provinces(Region::Ege).len(), 8);
        assert_eq!(region_provinces(Region::Akdeniz).len(), 8);
        assert_eq!(region_provinces(Region::IcAnadolu).len(), 13);
        assert_eq!(region_provinces(Region::Karadeniz).len(), 18);
        assert_eq!(region_provinces(Region::DoguAnadolu).len(), 14);
        assert_eq!(region_provinces(Region::GuneydoguAnadolu).len(), 9);
    }

    #[test]
    fn resolves_ege_alias() {
        assert_eq!(resolve_region("ege"), Some(Region::Ege));
    }
}
