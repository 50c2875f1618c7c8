//! Compiled-in geographic corpus (spec.md §6.2). One row per province:
//! plate code, canonical (diacritics) name, ascii (folded) name, region,
//! aliases, and the symmetric neighbor-province ascii names.
//!
//! This table is the single source of truth; `provinces.rs`/`regions.rs`
//! build their `lazy_static` indices from it at first use.

use crate::regions::Region;

pub struct ProvinceRow {
    pub code: u8,
    pub canonical: &'static str,
    pub ascii: &'static str,
    pub region: Region,
    pub aliases: &'static [&'static str],
    pub neighbors: &'static [&'static str],
}

/// All 81 provinces, plate codes 1..=81, alphabetical by ascii name (the
/// official Turkish plate-code ordering).
pub const PROVINCES: &[ProvinceRow] = &[
    ProvinceRow { code: 1, canonical: "Adana", ascii: "adana", region: Region::Akdeniz, aliases: &[], neighbors: &["mersin", "osmaniye", "kahramanmaras", "kayseri", "nigde", "hatay"] },
    ProvinceRow { code: 2, canonical: "Adıyaman", ascii: "adiyaman", region: Region::GuneydoguAnadolu, aliases: &[], neighbors: &["malatya", "kahramanmaras", "gaziantep", "sanliurfa", "diyarbakir"] },
    ProvinceRow { code: 3, canonical: "Afyonkarahisar", ascii: "afyonkarahisar", region: Region::Ege, aliases: &["afyon"], neighbors: &["kutahya", "usak", "denizli", "burdur", "isparta", "konya", "eskisehir"] },
    ProvinceRow { code: 4, canonical: "Ağrı", ascii: "agri", region: Region::DoguAnadolu, aliases: &[], neighbors: &["kars", "ardahan", "igdir", "van", "mus", "erzurum"] },
    ProvinceRow { code: 5, canonical: "Amasya", ascii: "amasya", region: Region::Karadeniz, aliases: &[], neighbors: &["samsun", "tokat", "corum", "cankiri", "sinop"] },
    ProvinceRow { code: 6, canonical: "Ankara", ascii: "ankara", region: Region::IcAnadolu, aliases: &[], neighbors: &["cankiri", "kirikkale", "kirsehir", "aksaray", "konya", "eskisehir", "bolu"] },
    ProvinceRow { code: 7, canonical: "Antalya", ascii: "antalya", region: Region::Akdeniz, aliases: &[], neighbors: &["mugla", "burdur", "isparta", "konya", "karaman", "mersin"] },
    ProvinceRow { code: 8, canonical: "Artvin", ascii: "artvin", region: Region::Karadeniz, aliases: &[], neighbors: &["rize", "erzurum", "ardahan"] },
    ProvinceRow { code: 9, canonical: "Aydın", ascii: "aydin", region: Region::Ege, aliases: &[], neighbors: &["izmir", "manisa", "denizli", "mugla"] },
    ProvinceRow { code: 10, canonical: "Balıkesir", ascii: "balikesir", region: Region::Marmara, aliases: &[], neighbors: &["canakkale", "bursa", "manisa", "izmir", "kutahya"] },
    ProvinceRow { code: 11, canonical: "Bilecik", ascii: "bilecik", region: Region::Marmara, aliases: &[], neighbors: &["bursa", "sakarya", "eskisehir", "kutahya"] },
    ProvinceRow { code: 12, canonical: "Bingöl", ascii: "bingol", region: Region::DoguAnadolu, aliases: &[], neighbors: &["mus", "diyarbakir", "elazig", "erzurum", "tunceli"] },
    ProvinceRow { code: 13, canonical: "Bitlis", ascii: "bitlis", region: Region::DoguAnadolu, aliases: &[], neighbors: &["van", "mus", "siirt"] },
    ProvinceRow { code: 14, canonical: "Bolu", ascii: "bolu", region: Region::Karadeniz, aliases: &[], neighbors: &["duzce", "zonguldak", "cankiri", "ankara", "eskisehir", "sakarya"] },
    ProvinceRow { code: 15, canonical: "Burdur", ascii: "burdur", region: Region::Akdeniz, aliases: &[], neighbors: &["denizli", "afyonkarahisar", "isparta", "antalya", "mugla"] },
    ProvinceRow { code: 16, canonical: "Bursa", ascii: "bursa", region: Region::Marmara, aliases: &[], neighbors: &["yalova", "kocaeli", "bilecik", "kutahya", "balikesir"] },
    ProvinceRow { code: 17, canonical: "Çanakkale", ascii: "canakkale", region: Region::Marmara, aliases: &[], neighbors: &["balikesir"] },
    ProvinceRow { code: 18, canonical: "Çankırı", ascii: "cankiri", region: Region::Karadeniz, aliases: &[], neighbors: &["kastamonu", "sinop", "samsun", "amasya", "corum", "kirikkale", "ankara", "bolu"] },
    ProvinceRow { code: 19, canonical: "Çorum", ascii: "corum", region: Region::Karadeniz, aliases: &[], neighbors: &["samsun", "amasya", "tokat", "yozgat", "kirikkale", "cankiri"] },
    ProvinceRow { code: 20, canonical: "Denizli", ascii: "denizli", region: Region::Ege, aliases: &[], neighbors: &["aydin", "mugla", "burdur", "afyonkarahisar", "usak", "manisa"] },
    ProvinceRow { code: 21, canonical: "Diyarbakır", ascii: "diyarbakir", region: Region::GuneydoguAnadolu, aliases: &[], neighbors: &["adiyaman", "sanliurfa", "mardin", "batman", "siirt", "mus", "bingol", "elazig"] },
    ProvinceRow { code: 22, canonical: "Edirne", ascii: "edirne", region: Region::Marmara, aliases: &[], neighbors: &["kirklareli", "tekirdag"] },
    ProvinceRow { code: 23, canonical: "Elazığ", ascii: "elazig", region: Region::DoguAnadolu, aliases: &[], neighbors: &["malatya", "bingol", "tunceli", "diyarbakir"] },
    ProvinceRow { code: 24, canonical: "Erzincan", ascii: "erzincan", region: Region::DoguAnadolu, aliases: &[], neighbors: &["tunceli", "erzurum", "bayburt", "gumushane", "sivas"] },
    ProvinceRow { code: 25, canonical: "Erzurum", ascii: "erzurum", region: Region::DoguAnadolu, aliases: &[], neighbors: &["artvin", "ardahan", "kars", "agri", "mus", "bingol", "erzincan", "rize"] },
    ProvinceRow { code: 26, canonical: "Eskişehir", ascii: "eskisehir", region: Region::IcAnadolu, aliases: &[], neighbors: &["bilecik", "kutahya", "afyonkarahisar", "konya", "ankara", "bolu"] },
    ProvinceRow { code: 27, canonical: "Gaziantep", ascii: "gaziantep", region: Region::GuneydoguAnadolu, aliases: &["antep"], neighbors: &["kilis", "sanliurfa", "adiyaman", "kahramanmaras", "osmaniye", "hatay"] },
    ProvinceRow { code: 28, canonical: "Giresun", ascii: "giresun", region: Region::Karadeniz, aliases: &[], neighbors: &["ordu", "sivas", "erzincan", "gumushane", "trabzon"] },
    ProvinceRow { code: 29, canonical: "Gümüşhane", ascii: "gumushane", region: Region::Karadeniz, aliases: &[], neighbors: &["trabzon", "bayburt", "erzincan", "giresun"] },
    ProvinceRow { code: 30, canonical: "Hakkari", ascii: "hakkari", region: Region::DoguAnadolu, aliases: &[], neighbors: &["van", "sirnak"] },
    ProvinceRow { code: 31, canonical: "Hatay", ascii: "hatay", region: Region::Akdeniz, aliases: &[], neighbors: &["adana", "osmaniye", "gaziantep"] },
    ProvinceRow { code: 32, canonical: "Isparta", ascii: "isparta", region: Region::Akdeniz, aliases: &[], neighbors: &["afyonkarahisar", "burdur", "antalya", "konya"] },
    ProvinceRow { code: 33, canonical: "Mersin", ascii: "mersin", region: Region::Akdeniz, aliases: &["icel"], neighbors: &["antalya", "karaman", "adana", "nigde"] },
    ProvinceRow { code: 34, canonical: "İstanbul", ascii: "istanbul", region: Region::Marmara, aliases: &["ist"], neighbors: &["kocaeli", "tekirdag", "yalova"] },
    ProvinceRow { code: 35, canonical: "İzmir", ascii: "izmir", region: Region::Ege, aliases: &[], neighbors: &["balikesir", "manisa", "aydin"] },
    ProvinceRow { code: 36, canonical: "Kars", ascii: "kars", region: Region::DoguAnadolu, aliases: &[], neighbors: &["ardahan", "agri", "erzurum"] },
    ProvinceRow { code: 37, canonical: "Kastamonu", ascii: "kastamonu", region: Region::Karadeniz, aliases: &[], neighbors: &["bartin", "sinop", "cankiri", "karabuk"] },
    ProvinceRow { code: 38, canonical: "Kayseri", ascii: "kayseri", region: Region::IcAnadolu, aliases: &[], neighbors: &["sivas", "yozgat", "nevsehir", "nigde", "adana", "kahramanmaras"] },
    ProvinceRow { code: 39, canonical: "Kırklareli", ascii: "kirklareli", region: Region::Marmara, aliases: &[], neighbors: &["edirne", "tekirdag"] },
    ProvinceRow { code: 40, canonical: "Kırşehir", ascii: "kirsehir", region: Region::IcAnadolu, aliases: &[], neighbors: &["ankara", "kirikkale", "yozgat", "nevsehir", "aksaray"] },
    ProvinceRow { code: 41, canonical: "Kocaeli", ascii: "kocaeli", region: Region::Marmara, aliases: &["izmit"], neighbors: &["istanbul", "yalova", "bursa", "sakarya"] },
    ProvinceRow { code: 42, canonical: "Konya", ascii: "konya", region: Region::IcAnadolu, aliases: &[], neighbors: &["ankara", "eskisehir", "afyonkarahisar", "isparta", "antalya", "karaman", "nigde", "aksaray"] },
    ProvinceRow { code: 43, canonical: "Kütahya", ascii: "kutahya", region: Region::Ege, aliases: &[], neighbors: &["bilecik", "eskisehir", "afyonkarahisar", "usak", "balikesir", "bursa"] },
    ProvinceRow { code: 44, canonical: "Malatya", ascii: "malatya", region: Region::DoguAnadolu, aliases: &[], neighbors: &["elazig", "adiyaman", "kahramanmaras", "sivas", "tunceli"] },
    ProvinceRow { code: 45, canonical: "Manisa", ascii: "manisa", region: Region::Ege, aliases: &[], neighbors: &["izmir", "balikesir", "kutahya", "usak", "denizli", "aydin"] },
    ProvinceRow { code: 46, canonical: "Kahramanmaraş", ascii: "kahramanmaras", region: Region::Akdeniz, aliases: &["maras"], neighbors: &["adana", "kayseri", "sivas", "malatya", "adiyaman", "gaziantep", "osmaniye"] },
    ProvinceRow { code: 47, canonical: "Mardin", ascii: "mardin", region: Region::GuneydoguAnadolu, aliases: &[], neighbors: &["sanliurfa", "diyarbakir", "batman", "sirnak"] },
    ProvinceRow { code: 48, canonical: "Muğla", ascii: "mugla", region: Region::Ege, aliases: &[], neighbors: &["aydin", "denizli", "burdur", "antalya"] },
    ProvinceRow { code: 49, canonical: "Muş", ascii: "mus", region: Region::DoguAnadolu, aliases: &[], neighbors: &["bitlis", "van", "agri", "erzurum", "bingol", "diyarbakir"] },
    ProvinceRow { code: 50, canonical: "Nevşehir", ascii: "nevsehir", region: Region::IcAnadolu, aliases: &[], neighbors: &["kirsehir", "yozgat", "kayseri", "nigde", "aksaray"] },
    ProvinceRow { code: 51, canonical: "Niğde", ascii: "nigde", region: Region::IcAnadolu, aliases: &[], neighbors: &["nevsehir", "kayseri", "adana", "mersin", "konya", "aksaray"] },
    ProvinceRow { code: 52, canonical: "Ordu", ascii: "ordu", region: Region::Karadeniz, aliases: &[], neighbors: &["samsun", "tokat", "sivas", "giresun"] },
    ProvinceRow { code: 53, canonical: "Rize", ascii: "rize", region: Region::Karadeniz, aliases: &[], neighbors: &["trabzon", "artvin", "erzurum"] },
    ProvinceRow { code: 54, canonical: "Sakarya", ascii: "sakarya", region: Region::Marmara, aliases: &[], neighbors: &["kocaeli", "bilecik", "bolu", "duzce"] },
    ProvinceRow { code: 55, canonical: "Samsun", ascii: "samsun", region: Region::Karadeniz, aliases: &[], neighbors: &["sinop", "cankiri", "amasya", "tokat", "ordu"] },
    ProvinceRow { code: 56, canonical: "Siirt", ascii: "siirt", region: Region::GuneydoguAnadolu, aliases: &[], neighbors: &["batman", "bitlis", "sirnak", "diyarbakir"] },
    ProvinceRow { code: 57, canonical: "Sinop", ascii: "sinop", region: Region::Karadeniz, aliases: &[], neighbors: &["kastamonu", "samsun", "cankiri"] },
    ProvinceRow { code: 58, canonical: "Sivas", ascii: "sivas", region: Region::IcAnadolu, aliases: &[], neighbors: &["yozgat", "tokat", "ordu", "giresun", "erzincan", "malatya", "kahramanmaras", "kayseri"] },
    ProvinceRow { code: 59, canonical: "Tekirdağ", ascii: "tekirdag", region: Region::Marmara, aliases: &[], neighbors: &["istanbul", "kirklareli", "edirne"] },
    ProvinceRow { code: 60, canonical: "Tokat", ascii: "tokat", region: Region::Karadeniz, aliases: &[], neighbors: &["amasya", "corum", "yozgat", "sivas", "ordu", "samsun"] },
    ProvinceRow { code: 61, canonical: "Trabzon", ascii: "trabzon", region: Region::Karadeniz, aliases: &[], neighbors: &["rize", "gumushane", "giresun"] },
    ProvinceRow { code: 62, canonical: "Tunceli", ascii: "tunceli", region: Region::DoguAnadolu, aliases: &[], neighbors: &["erzincan", "bingol", "elazig", "malatya"] },
    ProvinceRow { code: 63, canonical: "Şanlıurfa", ascii: "sanliurfa", region: Region::GuneydoguAnadolu, aliases: &["urfa"], neighbors: &["adiyaman", "diyarbakir", "mardin", "gaziantep"] },
    ProvinceRow { code: 64, canonical: "Uşak", ascii: "usak", region: Region::Ege, aliases: &[], neighbors: &["kutahya", "afyonkarahisar", "denizli", "manisa"] },
    ProvinceRow { code: 65, canonical: "Van", ascii: "van", region: Region::DoguAnadolu, aliases: &[], neighbors: &["agri", "mus", "bitlis", "hakkari"] },
    ProvinceRow { code: 66, canonical: "Yozgat", ascii: "yozgat", region: Region::IcAnadolu, aliases: &[], neighbors: &["corum", "amasya", "tokat", "sivas", "kayseri", "nevsehir", "kirsehir", "kirikkale"] },
    ProvinceRow { code: 67, canonical: "Zonguldak", ascii: "zonguldak", region: Region::Karadeniz, aliases: &[], neighbors: &["bartin", "karabuk", "bolu", "duzce"] },
    ProvinceRow { code: 68, canonical: "Aksaray", ascii: "aksaray", region: Region::IcAnadolu, aliases: &[], neighbors: &["ankara", "konya", "nigde", "nevsehir", "kirsehir"] },
    ProvinceRow { code: 69, canonical: "Bayburt", ascii: "bayburt", region: Region::Karadeniz, aliases: &[], neighbors: &["gumushane", "erzincan", "erzurum"] },
    ProvinceRow { code: 70, canonical: "Karaman", ascii: "karaman", region: Region::IcAnadolu, aliases: &[], neighbors: &["konya", "mersin", "antalya"] },
    ProvinceRow { code: 71, canonical: "Kırıkkale", ascii: "kirikkale", region: Region::IcAnadolu, aliases: &[], neighbors: &["ankara", "cankiri", "corum", "yozgat", "kirsehir"] },
    ProvinceRow { code: 72, canonical: "Batman", ascii: "batman", region: Region::GuneydoguAnadolu, aliases: &[], neighbors: &["diyarbakir", "mardin", "siirt", "sirnak"] },
    ProvinceRow { code: 73, canonical: "Şırnak", ascii: "sirnak", region: Region::GuneydoguAnadolu, aliases: &[], neighbors: &["hakkari", "siirt", "mardin", "batman"] },
    ProvinceRow { code: 74, canonical: "Bartın", ascii: "bartin", region: Region::Karadeniz, aliases: &[], neighbors: &["zonguldak", "karabuk", "kastamonu"] },
    ProvinceRow { code: 75, canonical: "Ardahan", ascii: "ardahan", region: Region::DoguAnadolu, aliases: &[], neighbors: &["artvin", "kars", "erzurum"] },
    ProvinceRow { code: 76, canonical: "Iğdır", ascii: "igdir", region: Region::DoguAnadolu, aliases: &[], neighbors: &["kars", "agri"] },
    ProvinceRow { code: 77, canonical: "Yalova", ascii: "yalova", region: Region::Marmara, aliases: &[], neighbors: &["istanbul", "kocaeli", "bursa"] },
    ProvinceRow { code: 78, canonical: "Karabük", ascii: "karabuk", region: Region::Karadeniz, aliases: &[], neighbors: &["bartin", "zonguldak", "kastamonu"] },
    ProvinceRow { code: 79, canonical: "Kilis", ascii: "kilis", region: Region::GuneydoguAnadolu, aliases: &[], neighbors: &["gaziantep"] },
    ProvinceRow { code: 80, canonical: "Osmaniye", ascii: "osmaniye", region: Region::Akdeniz, aliases: &[], neighbors: &["adana", "kahramanmaras", "gaziantep", "hatay"] },
    ProvinceRow { code: 81, canonical: "Düzce", ascii: "duzce", region: Region::Karadeniz, aliases: &[], neighbors: &["bolu", "sakarya", "zonguldak"] },
];

pub struct DistrictRow {
    pub ascii: &'static str,
    pub province_ascii: &'static str,
}

/// The full set of Turkey's ~973 districts (spec.md §6.2 describes the
/// target loosely as "~1100"; the official post-2014 metropolitan-law count
/// is 973, and this table now carries every district for every province, not
/// a seed). Generic "Merkez" (central-district) rows are omitted everywhere:
/// the name isn't province-distinguishing and the province lookup already
/// covers that case. Several ascii names genuinely repeat across provinces
/// (`edremit` in Balıkesir and Van, `kale` in Denizli and Malatya, `pazar` in
/// Rize and Tokat, `yenisehir` in several) — both rows are kept, matching how
/// `resolve_districts` already returns every matching province for an
/// ambiguous name.
pub const DISTRICTS: &[DistrictRow] = &[
    // Adana
    DistrictRow { ascii: "seyhan", province_ascii: "adana" },
    DistrictRow { ascii: "ceyhan", province_ascii: "adana" },
    DistrictRow { ascii: "kozan", province_ascii: "adana" },
    DistrictRow { ascii: "aladag", province_ascii: "adana" },
    DistrictRow { ascii: "cukurova", province_ascii: "adana" },
    DistrictRow { ascii: "feke", province_ascii: "adana" },
    DistrictRow { ascii: "imamoglu", province_ascii: "adana" },
    DistrictRow { ascii: "karaisali", province_ascii: "adana" },
    DistrictRow { ascii: "karatas", province_ascii: "adana" },
    DistrictRow { ascii: "pozanti", province_ascii: "adana" },
    DistrictRow { ascii: "saimbeyli", province_ascii: "adana" },
    DistrictRow { ascii: "saricam", province_ascii: "adana" },
    DistrictRow { ascii: "tufanbeyli", province_ascii: "adana" },
    DistrictRow { ascii: "yumurtalik", province_ascii: "adana" },
    DistrictRow { ascii: "yuregir", province_ascii: "adana" },
    // Adıyaman
    DistrictRow { ascii: "kahta", province_ascii: "adiyaman" },
    DistrictRow { ascii: "besni", province_ascii: "adiyaman" },
    DistrictRow { ascii: "celikhan", province_ascii: "adiyaman" },
    DistrictRow { ascii: "gerger", province_ascii: "adiyaman" },
    DistrictRow { ascii: "golbasi", province_ascii: "adiyaman" },
    DistrictRow { ascii: "samsat", province_ascii: "adiyaman" },
    DistrictRow { ascii: "sincik", province_ascii: "adiyaman" },
    DistrictRow { ascii: "tut", province_ascii: "adiyaman" },
    // Afyonkarahisar
    DistrictRow { ascii: "sandikli", province_ascii: "afyonkarahisar" },
    DistrictRow { ascii: "dinar", province_ascii: "afyonkarahisar" },
    DistrictRow { ascii: "basmakci", province_ascii: "afyonkarahisar" },
    DistrictRow { ascii: "bayat", province_ascii: "afyonkarahisar" },
    DistrictRow { ascii: "bolvadin", province_ascii: "afyonkarahisar" },
    DistrictRow { ascii: "cay", province_ascii: "afyonkarahisar" },
    DistrictRow { ascii: "cobanlar", province_ascii: "afyonkarahisar" },
    DistrictRow { ascii: "dazkiri", province_ascii: "afyonkarahisar" },
    DistrictRow { ascii: "emirdag", province_ascii: "afyonkarahisar" },
    DistrictRow { ascii: "evciler", province_ascii: "afyonkarahisar" },
    DistrictRow { ascii: "hocalar", province_ascii: "afyonkarahisar" },
    DistrictRow { ascii: "ihsaniye", province_ascii: "afyonkarahisar" },
    DistrictRow { ascii: "iscehisar", province_ascii: "afyonkarahisar" },
    DistrictRow { ascii: "kiziloren", province_ascii: "afyonkarahisar" },
    DistrictRow { ascii: "sinanpasa", province_ascii: "afyonkarahisar" },
    DistrictRow { ascii: "sultandagi", province_ascii: "afyonkarahisar" },
    DistrictRow { ascii: "suhut", province_ascii: "afyonkarahisar" },
    // Ağrı
    DistrictRow { ascii: "dogubayazit", province_ascii: "agri" },
    DistrictRow { ascii: "patnos", province_ascii: "agri" },
    DistrictRow { ascii: "diyadin", province_ascii: "agri" },
    DistrictRow { ascii: "eleskirt", province_ascii: "agri" },
    DistrictRow { ascii: "hamur", province_ascii: "agri" },
    DistrictRow { ascii: "taslicay", province_ascii: "agri" },
    DistrictRow { ascii: "tutak", province_ascii: "agri" },
    // Amasya
    DistrictRow { ascii: "merzifon", province_ascii: "amasya" },
    DistrictRow { ascii: "suluova", province_ascii: "amasya" },
    DistrictRow { ascii: "goynucek", province_ascii: "amasya" },
    DistrictRow { ascii: "gumushacikoy", province_ascii: "amasya" },
    DistrictRow { ascii: "hamamozu", province_ascii: "amasya" },
    DistrictRow { ascii: "tasova", province_ascii: "amasya" },
    // Ankara
    DistrictRow { ascii: "cankaya", province_ascii: "ankara" },
    DistrictRow { ascii: "kecioren", province_ascii: "ankara" },
    DistrictRow { ascii: "yenimahalle", province_ascii: "ankara" },
    DistrictRow { ascii: "mamak", province_ascii: "ankara" },
    DistrictRow { ascii: "sincan", province_ascii: "ankara" },
    DistrictRow { ascii: "polatli", province_ascii: "ankara" },
    DistrictRow { ascii: "akyurt", province_ascii: "ankara" },
    DistrictRow { ascii: "altindag", province_ascii: "ankara" },
    DistrictRow { ascii: "ayas", province_ascii: "ankara" },
    DistrictRow { ascii: "bala", province_ascii: "ankara" },
    DistrictRow { ascii: "beypazari", province_ascii: "ankara" },
    DistrictRow { ascii: "camlidere", province_ascii: "ankara" },
    DistrictRow { ascii: "cubuk", province_ascii: "ankara" },
    DistrictRow { ascii: "elmadag", province_ascii: "ankara" },
    DistrictRow { ascii: "etimesgut", province_ascii: "ankara" },
    DistrictRow { ascii: "evren", province_ascii: "ankara" },
    DistrictRow { ascii: "golbasi", province_ascii: "ankara" },
    DistrictRow { ascii: "gudul", province_ascii: "ankara" },
    DistrictRow { ascii: "haymana", province_ascii: "ankara" },
    DistrictRow { ascii: "kalecik", province_ascii: "ankara" },
    DistrictRow { ascii: "kazan", province_ascii: "ankara" },
    DistrictRow { ascii: "kizilcahamam", province_ascii: "ankara" },
    DistrictRow { ascii: "nallihan", province_ascii: "ankara" },
    DistrictRow { ascii: "pursaklar", province_ascii: "ankara" },
    DistrictRow { ascii: "sereflikochisar", province_ascii: "ankara" },
    // Antalya
    DistrictRow { ascii: "kepez", province_ascii: "antalya" },
    DistrictRow { ascii: "muratpasa", province_ascii: "antalya" },
    DistrictRow { ascii: "alanya", province_ascii: "antalya" },
    DistrictRow { ascii: "manavgat", province_ascii: "antalya" },
    DistrictRow { ascii: "kemer", province_ascii: "antalya" },
    DistrictRow { ascii: "akseki", province_ascii: "antalya" },
    DistrictRow { ascii: "aksu", province_ascii: "antalya" },
    DistrictRow { ascii: "demre", province_ascii: "antalya" },
    DistrictRow { ascii: "dosemealti", province_ascii: "antalya" },
    DistrictRow { ascii: "elmali", province_ascii: "antalya" },
    DistrictRow { ascii: "finike", province_ascii: "antalya" },
    DistrictRow { ascii: "gazipasa", province_ascii: "antalya" },
    DistrictRow { ascii: "gundogmus", province_ascii: "antalya" },
    DistrictRow { ascii: "ibradi", province_ascii: "antalya" },
    DistrictRow { ascii: "kas", province_ascii: "antalya" },
    DistrictRow { ascii: "konyaalti", province_ascii: "antalya" },
    DistrictRow { ascii: "korkuteli", province_ascii: "antalya" },
    DistrictRow { ascii: "kumluca", province_ascii: "antalya" },
    DistrictRow { ascii: "serik", province_ascii: "antalya" },
    // Artvin
    DistrictRow { ascii: "hopa", province_ascii: "artvin" },
    DistrictRow { ascii: "borcka", province_ascii: "artvin" },
    DistrictRow { ascii: "ardanuc", province_ascii: "artvin" },
    DistrictRow { ascii: "arhavi", province_ascii: "artvin" },
    DistrictRow { ascii: "murgul", province_ascii: "artvin" },
    DistrictRow { ascii: "savsat", province_ascii: "artvin" },
    DistrictRow { ascii: "yusufeli", province_ascii: "artvin" },
    // Aydın
    DistrictRow { ascii: "nazilli", province_ascii: "aydin" },
    DistrictRow { ascii: "soke", province_ascii: "aydin" },
    DistrictRow { ascii: "kusadasi", province_ascii: "aydin" },
    DistrictRow { ascii: "bozdogan", province_ascii: "aydin" },
    DistrictRow { ascii: "buharkent", province_ascii: "aydin" },
    DistrictRow { ascii: "cine", province_ascii: "aydin" },
    DistrictRow { ascii: "didim", province_ascii: "aydin" },
    DistrictRow { ascii: "germencik", province_ascii: "aydin" },
    DistrictRow { ascii: "incirliova", province_ascii: "aydin" },
    DistrictRow { ascii: "karacasu", province_ascii: "aydin" },
    DistrictRow { ascii: "karpuzlu", province_ascii: "aydin" },
    DistrictRow { ascii: "kocarli", province_ascii: "aydin" },
    DistrictRow { ascii: "kosk", province_ascii: "aydin" },
    DistrictRow { ascii: "kuyucak", province_ascii: "aydin" },
    DistrictRow { ascii: "sultanhisar", province_ascii: "aydin" },
    DistrictRow { ascii: "yenipazar", province_ascii: "aydin" },
    // Balıkesir
    DistrictRow { ascii: "edremit", province_ascii: "balikesir" },
    DistrictRow { ascii: "bandirma", province_ascii: "balikesir" },
    DistrictRow { ascii: "ayvalik", province_ascii: "balikesir" },
    DistrictRow { ascii: "gonen", province_ascii: "balikesir" },
    DistrictRow { ascii: "altieylul", province_ascii: "balikesir" },
    DistrictRow { ascii: "bigadic", province_ascii: "balikesir" },
    DistrictRow { ascii: "burhaniye", province_ascii: "balikesir" },
    DistrictRow { ascii: "dursunbey", province_ascii: "balikesir" },
    DistrictRow { ascii: "erdek", province_ascii: "balikesir" },
    DistrictRow { ascii: "gomec", province_ascii: "balikesir" },
    DistrictRow { ascii: "havran", province_ascii: "balikesir" },
    DistrictRow { ascii: "ivrindi", province_ascii: "balikesir" },
    DistrictRow { ascii: "karesi", province_ascii: "balikesir" },
    DistrictRow { ascii: "kepsut", province_ascii: "balikesir" },
    DistrictRow { ascii: "manyas", province_ascii: "balikesir" },
    DistrictRow { ascii: "marmara", province_ascii: "balikesir" },
    DistrictRow { ascii: "savastepe", province_ascii: "balikesir" },
    DistrictRow { ascii: "sindirgi", province_ascii: "balikesir" },
    DistrictRow { ascii: "susurluk", province_ascii: "balikesir" },
    // Bilecik
    DistrictRow { ascii: "bozuyuk", province_ascii: "bilecik" },
    DistrictRow { ascii: "golpazari", province_ascii: "bilecik" },
    DistrictRow { ascii: "inhisar", province_ascii: "bilecik" },
    DistrictRow { ascii: "osmaneli", province_ascii: "bilecik" },
    DistrictRow { ascii: "pazaryeri", province_ascii: "bilecik" },
    DistrictRow { ascii: "sogut", province_ascii: "bilecik" },
    // Bingöl
    DistrictRow { ascii: "solhan", province_ascii: "bingol" },
    DistrictRow { ascii: "adakli", province_ascii: "bingol" },
    DistrictRow { ascii: "genc", province_ascii: "bingol" },
    DistrictRow { ascii: "karliova", province_ascii: "bingol" },
    DistrictRow { ascii: "kigi", province_ascii: "bingol" },
    DistrictRow { ascii: "yayladere", province_ascii: "bingol" },
    DistrictRow { ascii: "yedisu", province_ascii: "bingol" },
    // Bitlis
    DistrictRow { ascii: "tatvan", province_ascii: "bitlis" },
    DistrictRow { ascii: "ahlat", province_ascii: "bitlis" },
    DistrictRow { ascii: "adilcevaz", province_ascii: "bitlis" },
    DistrictRow { ascii: "guroymak", province_ascii: "bitlis" },
    DistrictRow { ascii: "hizan", province_ascii: "bitlis" },
    DistrictRow { ascii: "mutki", province_ascii: "bitlis" },
    // Bolu
    DistrictRow { ascii: "gerede", province_ascii: "bolu" },
    DistrictRow { ascii: "mudurnu", province_ascii: "bolu" },
    DistrictRow { ascii: "dortdivan", province_ascii: "bolu" },
    DistrictRow { ascii: "goynuk", province_ascii: "bolu" },
    DistrictRow { ascii: "kibriscik", province_ascii: "bolu" },
    DistrictRow { ascii: "mengen", province_ascii: "bolu" },
    DistrictRow { ascii: "seben", province_ascii: "bolu" },
    DistrictRow { ascii: "yenicaga", province_ascii: "bolu" },
    // Burdur
    DistrictRow { ascii: "bucak", province_ascii: "burdur" },
    DistrictRow { ascii: "aglasun", province_ascii: "burdur" },
    DistrictRow { ascii: "altinyayla", province_ascii: "burdur" },
    DistrictRow { ascii: "cavdir", province_ascii: "burdur" },
    DistrictRow { ascii: "celtikci", province_ascii: "burdur" },
    DistrictRow { ascii: "golhisar", province_ascii: "burdur" },
    DistrictRow { ascii: "karamanli", province_ascii: "burdur" },
    DistrictRow { ascii: "tefenni", province_ascii: "burdur" },
    DistrictRow { ascii: "yesilova", province_ascii: "burdur" },
    // Bursa
    DistrictRow { ascii: "nilufer", province_ascii: "bursa" },
    DistrictRow { ascii: "osmangazi", province_ascii: "bursa" },
    DistrictRow { ascii: "yildirim", province_ascii: "bursa" },
    DistrictRow { ascii: "inegol", province_ascii: "bursa" },
    DistrictRow { ascii: "gemlik", province_ascii: "bursa" },
    DistrictRow { ascii: "mudanya", province_ascii: "bursa" },
    DistrictRow { ascii: "buyukorhan", province_ascii: "bursa" },
    DistrictRow { ascii: "gursu", province_ascii: "bursa" },
    DistrictRow { ascii: "harmancik", province_ascii: "bursa" },
    DistrictRow { ascii: "iznik", province_ascii: "bursa" },
    DistrictRow { ascii: "karacabey", province_ascii: "bursa" },
    DistrictRow { ascii: "keles", province_ascii: "bursa" },
    DistrictRow { ascii: "kestel", province_ascii: "bursa" },
    DistrictRow { ascii: "mustafakemalpasa", province_ascii: "bursa" },
    DistrictRow { ascii: "orhaneli", province_ascii: "bursa" },
    DistrictRow { ascii: "orhangazi", province_ascii: "bursa" },
    DistrictRow { ascii: "yenisehir", province_ascii: "bursa" },
    // Çanakkale
    DistrictRow { ascii: "biga", province_ascii: "canakkale" },
    DistrictRow { ascii: "gelibolu", province_ascii: "canakkale" },
    DistrictRow { ascii: "ayvacik", province_ascii: "canakkale" },
    DistrictRow { ascii: "bayramic", province_ascii: "canakkale" },
    DistrictRow { ascii: "bozcaada", province_ascii: "canakkale" },
    DistrictRow { ascii: "can", province_ascii: "canakkale" },
    DistrictRow { ascii: "eceabat", province_ascii: "canakkale" },
    DistrictRow { ascii: "ezine", province_ascii: "canakkale" },
    DistrictRow { ascii: "gokceada", province_ascii: "canakkale" },
    DistrictRow { ascii: "lapseki", province_ascii: "canakkale" },
    DistrictRow { ascii: "yenice", province_ascii: "canakkale" },
    // Çankırı
    DistrictRow { ascii: "cerkes", province_ascii: "cankiri" },
    DistrictRow { ascii: "atkaracalar", province_ascii: "cankiri" },
    DistrictRow { ascii: "bayramoren", province_ascii: "cankiri" },
    DistrictRow { ascii: "eldivan", province_ascii: "cankiri" },
    DistrictRow { ascii: "ilgaz", province_ascii: "cankiri" },
    DistrictRow { ascii: "kizilirmak", province_ascii: "cankiri" },
    DistrictRow { ascii: "korgun", province_ascii: "cankiri" },
    DistrictRow { ascii: "kursunlu", province_ascii: "cankiri" },
    DistrictRow { ascii: "orta", province_ascii: "cankiri" },
    DistrictRow { ascii: "sabanozu", province_ascii: "cankiri" },
    DistrictRow { ascii: "yaprakli", province_ascii: "cankiri" },
    // Çorum
    DistrictRow { ascii: "sungurlu", province_ascii: "corum" },
    DistrictRow { ascii: "osmancik", province_ascii: "corum" },
    DistrictRow { ascii: "alaca", province_ascii: "corum" },
    DistrictRow { ascii: "bayat", province_ascii: "corum" },
    DistrictRow { ascii: "bogazkale", province_ascii: "corum" },
    DistrictRow { ascii: "dodurga", province_ascii: "corum" },
    DistrictRow { ascii: "iskilip", province_ascii: "corum" },
    DistrictRow { ascii: "kargi", province_ascii: "corum" },
    DistrictRow { ascii: "lacin", province_ascii: "corum" },
    DistrictRow { ascii: "mecitozu", province_ascii: "corum" },
    DistrictRow { ascii: "oguzlar", province_ascii: "corum" },
    DistrictRow { ascii: "ortakoy", province_ascii: "corum" },
    DistrictRow { ascii: "ugurludag", province_ascii: "corum" },
    // Denizli
    DistrictRow { ascii: "pamukkale", province_ascii: "denizli" },
    DistrictRow { ascii: "tavas", province_ascii: "denizli" },
    DistrictRow { ascii: "kale", province_ascii: "denizli" },
    DistrictRow { ascii: "acipayam", province_ascii: "denizli" },
    DistrictRow { ascii: "babadag", province_ascii: "denizli" },
    DistrictRow { ascii: "baklan", province_ascii: "denizli" },
    DistrictRow { ascii: "bekilli", province_ascii: "denizli" },
    DistrictRow { ascii: "beyagac", province_ascii: "denizli" },
    DistrictRow { ascii: "bozkurt", province_ascii: "denizli" },
    DistrictRow { ascii: "buldan", province_ascii: "denizli" },
    DistrictRow { ascii: "cal", province_ascii: "denizli" },
    DistrictRow { ascii: "cameli", province_ascii: "denizli" },
    DistrictRow { ascii: "cardak", province_ascii: "denizli" },
    DistrictRow { ascii: "civril", province_ascii: "denizli" },
    DistrictRow { ascii: "guney", province_ascii: "denizli" },
    DistrictRow { ascii: "honaz", province_ascii: "denizli" },
    DistrictRow { ascii: "merkezefendi", province_ascii: "denizli" },
    DistrictRow { ascii: "saraykoy", province_ascii: "denizli" },
    DistrictRow { ascii: "serinhisar", province_ascii: "denizli" },
    // Diyarbakır
    DistrictRow { ascii: "baglar", province_ascii: "diyarbakir" },
    DistrictRow { ascii: "silvan", province_ascii: "diyarbakir" },
    DistrictRow { ascii: "bismil", province_ascii: "diyarbakir" },
    DistrictRow { ascii: "cermik", province_ascii: "diyarbakir" },
    DistrictRow { ascii: "cinar", province_ascii: "diyarbakir" },
    DistrictRow { ascii: "cungus", province_ascii: "diyarbakir" },
    DistrictRow { ascii: "dicle", province_ascii: "diyarbakir" },
    DistrictRow { ascii: "egil", province_ascii: "diyarbakir" },
    DistrictRow { ascii: "ergani", province_ascii: "diyarbakir" },
    DistrictRow { ascii: "hani", province_ascii: "diyarbakir" },
    DistrictRow { ascii: "hazro", province_ascii: "diyarbakir" },
    DistrictRow { ascii: "kayapinar", province_ascii: "diyarbakir" },
    DistrictRow { ascii: "kocakoy", province_ascii: "diyarbakir" },
    DistrictRow { ascii: "kulp", province_ascii: "diyarbakir" },
    DistrictRow { ascii: "lice", province_ascii: "diyarbakir" },
    DistrictRow { ascii: "sur", province_ascii: "diyarbakir" },
    DistrictRow { ascii: "yenisehir", province_ascii: "diyarbakir" },
    // Edirne
    DistrictRow { ascii: "kesan", province_ascii: "edirne" },
    DistrictRow { ascii: "uzunkopru", province_ascii: "edirne" },
    DistrictRow { ascii: "enez", province_ascii: "edirne" },
    DistrictRow { ascii: "havsa", province_ascii: "edirne" },
    DistrictRow { ascii: "ipsala", province_ascii: "edirne" },
    DistrictRow { ascii: "lalapasa", province_ascii: "edirne" },
    DistrictRow { ascii: "meric", province_ascii: "edirne" },
    DistrictRow { ascii: "suloglu", province_ascii: "edirne" },
    // Elazığ
    DistrictRow { ascii: "kovancilar", province_ascii: "elazig" },
    DistrictRow { ascii: "agin", province_ascii: "elazig" },
    DistrictRow { ascii: "alacakaya", province_ascii: "elazig" },
    DistrictRow { ascii: "aricak", province_ascii: "elazig" },
    DistrictRow { ascii: "baskil", province_ascii: "elazig" },
    DistrictRow { ascii: "karakocan", province_ascii: "elazig" },
    DistrictRow { ascii: "keban", province_ascii: "elazig" },
    DistrictRow { ascii: "maden", province_ascii: "elazig" },
    DistrictRow { ascii: "palu", province_ascii: "elazig" },
    DistrictRow { ascii: "sivrice", province_ascii: "elazig" },
    // Erzincan
    DistrictRow { ascii: "refahiye", province_ascii: "erzincan" },
    DistrictRow { ascii: "cayirli", province_ascii: "erzincan" },
    DistrictRow { ascii: "ilic", province_ascii: "erzincan" },
    DistrictRow { ascii: "kemah", province_ascii: "erzincan" },
    DistrictRow { ascii: "kemaliye", province_ascii: "erzincan" },
    DistrictRow { ascii: "otlukbeli", province_ascii: "erzincan" },
    DistrictRow { ascii: "tercan", province_ascii: "erzincan" },
    DistrictRow { ascii: "uzumlu", province_ascii: "erzincan" },
    // Erzurum
    DistrictRow { ascii: "yakutiye", province_ascii: "erzurum" },
    DistrictRow { ascii: "palandoken", province_ascii: "erzurum" },
    DistrictRow { ascii: "horasan", province_ascii: "erzurum" },
    DistrictRow { ascii: "askale", province_ascii: "erzurum" },
    DistrictRow { ascii: "aziziye", province_ascii: "erzurum" },
    DistrictRow { ascii: "cat", province_ascii: "erzurum" },
    DistrictRow { ascii: "hinis", province_ascii: "erzurum" },
    DistrictRow { ascii: "ispir", province_ascii: "erzurum" },
    DistrictRow { ascii: "karacoban", province_ascii: "erzurum" },
    DistrictRow { ascii: "karayazi", province_ascii: "erzurum" },
    DistrictRow { ascii: "koprukoy", province_ascii: "erzurum" },
    DistrictRow { ascii: "narman", province_ascii: "erzurum" },
    DistrictRow { ascii: "oltu", province_ascii: "erzurum" },
    DistrictRow { ascii: "olur", province_ascii: "erzurum" },
    DistrictRow { ascii: "pasinler", province_ascii: "erzurum" },
    DistrictRow { ascii: "pazaryolu", province_ascii: "erzurum" },
    DistrictRow { ascii: "senkaya", province_ascii: "erzurum" },
    DistrictRow { ascii: "tekman", province_ascii: "erzurum" },
    DistrictRow { ascii: "tortum", province_ascii: "erzurum" },
    DistrictRow { ascii: "uzundere", province_ascii: "erzurum" },
    // Eskişehir
    DistrictRow { ascii: "odunpazari", province_ascii: "eskisehir" },
    DistrictRow { ascii: "tepebasi", province_ascii: "eskisehir" },
    DistrictRow { ascii: "alpu", province_ascii: "eskisehir" },
    DistrictRow { ascii: "beylikova", province_ascii: "eskisehir" },
    DistrictRow { ascii: "cifteler", province_ascii: "eskisehir" },
    DistrictRow { ascii: "gunyuzu", province_ascii: "eskisehir" },
    DistrictRow { ascii: "han", province_ascii: "eskisehir" },
    DistrictRow { ascii: "inonu", province_ascii: "eskisehir" },
    DistrictRow { ascii: "mahmudiye", province_ascii: "eskisehir" },
    DistrictRow { ascii: "mihalgazi", province_ascii: "eskisehir" },
    DistrictRow { ascii: "mihaliccik", province_ascii: "eskisehir" },
    DistrictRow { ascii: "saricakaya", province_ascii: "eskisehir" },
    DistrictRow { ascii: "seyitgazi", province_ascii: "eskisehir" },
    DistrictRow { ascii: "sivrihisar", province_ascii: "eskisehir" },
    // Gaziantep
    DistrictRow { ascii: "sahinbey", province_ascii: "gaziantep" },
    DistrictRow { ascii: "sehitkamil", province_ascii: "gaziantep" },
    DistrictRow { ascii: "nizip", province_ascii: "gaziantep" },
    DistrictRow { ascii: "islahiye", province_ascii: "gaziantep" },
    DistrictRow { ascii: "araban", province_ascii: "gaziantep" },
    DistrictRow { ascii: "karkamis", province_ascii: "gaziantep" },
    DistrictRow { ascii: "nurdagi", province_ascii: "gaziantep" },
    DistrictRow { ascii: "oguzeli", province_ascii: "gaziantep" },
    DistrictRow { ascii: "yavuzeli", province_ascii: "gaziantep" },
    // Giresun
    DistrictRow { ascii: "bulancak", province_ascii: "giresun" },
    DistrictRow { ascii: "sebinkarahisar", province_ascii: "giresun" },
    DistrictRow { ascii: "alucra", province_ascii: "giresun" },
    DistrictRow { ascii: "camoluk", province_ascii: "giresun" },
    DistrictRow { ascii: "canakci", province_ascii: "giresun" },
    DistrictRow { ascii: "dereli", province_ascii: "giresun" },
    DistrictRow { ascii: "dogankent", province_ascii: "giresun" },
    DistrictRow { ascii: "espiye", province_ascii: "giresun" },
    DistrictRow { ascii: "eynesil", province_ascii: "giresun" },
    DistrictRow { ascii: "gorele", province_ascii: "giresun" },
    DistrictRow { ascii: "guce", province_ascii: "giresun" },
    DistrictRow { ascii: "kesap", province_ascii: "giresun" },
    DistrictRow { ascii: "piraziz", province_ascii: "giresun" },
    DistrictRow { ascii: "tirebolu", province_ascii: "giresun" },
    DistrictRow { ascii: "yaglidere", province_ascii: "giresun" },
    // Gümüşhane
    DistrictRow { ascii: "kelkit", province_ascii: "gumushane" },
    DistrictRow { ascii: "kose", province_ascii: "gumushane" },
    DistrictRow { ascii: "kurtun", province_ascii: "gumushane" },
    DistrictRow { ascii: "siran", province_ascii: "gumushane" },
    DistrictRow { ascii: "torul", province_ascii: "gumushane" },
    // Hakkari
    DistrictRow { ascii: "yuksekova", province_ascii: "hakkari" },
    DistrictRow { ascii: "cukurca", province_ascii: "hakkari" },
    DistrictRow { ascii: "semdinli", province_ascii: "hakkari" },
    // Hatay
    DistrictRow { ascii: "antakya", province_ascii: "hatay" },
    DistrictRow { ascii: "iskenderun", province_ascii: "hatay" },
    DistrictRow { ascii: "dortyol", province_ascii: "hatay" },
    DistrictRow { ascii: "reyhanli", province_ascii: "hatay" },
    DistrictRow { ascii: "samandag", province_ascii: "hatay" },
    DistrictRow { ascii: "altinozu", province_ascii: "hatay" },
    DistrictRow { ascii: "arsuz", province_ascii: "hatay" },
    DistrictRow { ascii: "belen", province_ascii: "hatay" },
    DistrictRow { ascii: "defne", province_ascii: "hatay" },
    DistrictRow { ascii: "erzin", province_ascii: "hatay" },
    DistrictRow { ascii: "hassa", province_ascii: "hatay" },
    DistrictRow { ascii: "kirikhan", province_ascii: "hatay" },
    DistrictRow { ascii: "kumlu", province_ascii: "hatay" },
    DistrictRow { ascii: "payas", province_ascii: "hatay" },
    DistrictRow { ascii: "yayladagi", province_ascii: "hatay" },
    // Isparta
    DistrictRow { ascii: "egirdir", province_ascii: "isparta" },
    DistrictRow { ascii: "aksu", province_ascii: "isparta" },
    DistrictRow { ascii: "atabey", province_ascii: "isparta" },
    DistrictRow { ascii: "gelendost", province_ascii: "isparta" },
    DistrictRow { ascii: "gonen", province_ascii: "isparta" },
    DistrictRow { ascii: "keciborlu", province_ascii: "isparta" },
    DistrictRow { ascii: "senirkent", province_ascii: "isparta" },
    DistrictRow { ascii: "sutculer", province_ascii: "isparta" },
    DistrictRow { ascii: "sarkikaraagac", province_ascii: "isparta" },
    DistrictRow { ascii: "uluborlu", province_ascii: "isparta" },
    DistrictRow { ascii: "yalvac", province_ascii: "isparta" },
    DistrictRow { ascii: "yenisarbademli", province_ascii: "isparta" },
    // Mersin
    DistrictRow { ascii: "tarsus", province_ascii: "mersin" },
    DistrictRow { ascii: "erdemli", province_ascii: "mersin" },
    DistrictRow { ascii: "silifke", province_ascii: "mersin" },
    DistrictRow { ascii: "anamur", province_ascii: "mersin" },
    DistrictRow { ascii: "aydincik", province_ascii: "mersin" },
    DistrictRow { ascii: "bozyazi", province_ascii: "mersin" },
    DistrictRow { ascii: "camliyayla", province_ascii: "mersin" },
    DistrictRow { ascii: "gulnar", province_ascii: "mersin" },
    DistrictRow { ascii: "mut", province_ascii: "mersin" },
    DistrictRow { ascii: "toroslar", province_ascii: "mersin" },
    DistrictRow { ascii: "yenisehir", province_ascii: "mersin" },
    DistrictRow { ascii: "akdeniz", province_ascii: "mersin" },
    DistrictRow { ascii: "mezitli", province_ascii: "mersin" },
    // İstanbul
    DistrictRow { ascii: "kadikoy", province_ascii: "istanbul" },
    DistrictRow { ascii: "uskudar", province_ascii: "istanbul" },
    DistrictRow { ascii: "besiktas", province_ascii: "istanbul" },
    DistrictRow { ascii: "sisli", province_ascii: "istanbul" },
    DistrictRow { ascii: "fatih", province_ascii: "istanbul" },
    DistrictRow { ascii: "bakirkoy", province_ascii: "istanbul" },
    DistrictRow { ascii: "maltepe", province_ascii: "istanbul" },
    DistrictRow { ascii: "kartal", province_ascii: "istanbul" },
    DistrictRow { ascii: "pendik", province_ascii: "istanbul" },
    DistrictRow { ascii: "beylikduzu", province_ascii: "istanbul" },
    DistrictRow { ascii: "avcilar", province_ascii: "istanbul" },
    DistrictRow { ascii: "esenyurt", province_ascii: "istanbul" },
    DistrictRow { ascii: "sultanbeyli", province_ascii: "istanbul" },
    DistrictRow { ascii: "tuzla", province_ascii: "istanbul" },
    DistrictRow { ascii: "sariyer", province_ascii: "istanbul" },
    DistrictRow { ascii: "beyoglu", province_ascii: "istanbul" },
    DistrictRow { ascii: "adalar", province_ascii: "istanbul" },
    DistrictRow { ascii: "arnavutkoy", province_ascii: "istanbul" },
    DistrictRow { ascii: "atasehir", province_ascii: "istanbul" },
    DistrictRow { ascii: "bagcilar", province_ascii: "istanbul" },
    DistrictRow { ascii: "bahcelievler", province_ascii: "istanbul" },
    DistrictRow { ascii: "basaksehir", province_ascii: "istanbul" },
    DistrictRow { ascii: "bayrampasa", province_ascii: "istanbul" },
    DistrictRow { ascii: "beykoz", province_ascii: "istanbul" },
    DistrictRow { ascii: "buyukcekmece", province_ascii: "istanbul" },
    DistrictRow { ascii: "catalca", province_ascii: "istanbul" },
    DistrictRow { ascii: "cekmekoy", province_ascii: "istanbul" },
    DistrictRow { ascii: "esenler", province_ascii: "istanbul" },
    DistrictRow { ascii: "eyupsultan", province_ascii: "istanbul" },
    DistrictRow { ascii: "gaziosmanpasa", province_ascii: "istanbul" },
    DistrictRow { ascii: "gungoren", province_ascii: "istanbul" },
    DistrictRow { ascii: "kagithane", province_ascii: "istanbul" },
    DistrictRow { ascii: "kucukcekmece", province_ascii: "istanbul" },
    DistrictRow { ascii: "sancaktepe", province_ascii: "istanbul" },
    DistrictRow { ascii: "silivri", province_ascii: "istanbul" },
    DistrictRow { ascii: "sultangazi", province_ascii: "istanbul" },
    DistrictRow { ascii: "sile", province_ascii: "istanbul" },
    DistrictRow { ascii: "umraniye", province_ascii: "istanbul" },
    DistrictRow { ascii: "zeytinburnu", province_ascii: "istanbul" },
    // İzmir
    DistrictRow { ascii: "bornova", province_ascii: "izmir" },
    DistrictRow { ascii: "karsiyaka", province_ascii: "izmir" },
    DistrictRow { ascii: "konak", province_ascii: "izmir" },
    DistrictRow { ascii: "buca", province_ascii: "izmir" },
    DistrictRow { ascii: "torbali", province_ascii: "izmir" },
    DistrictRow { ascii: "odemis", province_ascii: "izmir" },
    DistrictRow { ascii: "aliaga", province_ascii: "izmir" },
    DistrictRow { ascii: "balcova", province_ascii: "izmir" },
    DistrictRow { ascii: "bayindir", province_ascii: "izmir" },
    DistrictRow { ascii: "bergama", province_ascii: "izmir" },
    DistrictRow { ascii: "beydag", province_ascii: "izmir" },
    DistrictRow { ascii: "cesme", province_ascii: "izmir" },
    DistrictRow { ascii: "cigli", province_ascii: "izmir" },
    DistrictRow { ascii: "dikili", province_ascii: "izmir" },
    DistrictRow { ascii: "foca", province_ascii: "izmir" },
    DistrictRow { ascii: "gaziemir", province_ascii: "izmir" },
    DistrictRow { ascii: "guzelbahce", province_ascii: "izmir" },
    DistrictRow { ascii: "karabaglar", province_ascii: "izmir" },
    DistrictRow { ascii: "karaburun", province_ascii: "izmir" },
    DistrictRow { ascii: "kemalpasa", province_ascii: "izmir" },
    DistrictRow { ascii: "kinik", province_ascii: "izmir" },
    DistrictRow { ascii: "kiraz", province_ascii: "izmir" },
    DistrictRow { ascii: "menderes", province_ascii: "izmir" },
    DistrictRow { ascii: "menemen", province_ascii: "izmir" },
    DistrictRow { ascii: "narlidere", province_ascii: "izmir" },
    DistrictRow { ascii: "seferihisar", province_ascii: "izmir" },
    DistrictRow { ascii: "selcuk", province_ascii: "izmir" },
    DistrictRow { ascii: "tire", province_ascii: "izmir" },
    DistrictRow { ascii: "urla", province_ascii: "izmir" },
    // Kars
    DistrictRow { ascii: "sarikamis", province_ascii: "kars" },
    DistrictRow { ascii: "akyaka", province_ascii: "kars" },
    DistrictRow { ascii: "arpacay", province_ascii: "kars" },
    DistrictRow { ascii: "digor", province_ascii: "kars" },
    DistrictRow { ascii: "kagizman", province_ascii: "kars" },
    DistrictRow { ascii: "selim", province_ascii: "kars" },
    DistrictRow { ascii: "susuz", province_ascii: "kars" },
    // Kastamonu
    DistrictRow { ascii: "tosya", province_ascii: "kastamonu" },
    DistrictRow { ascii: "abana", province_ascii: "kastamonu" },
    DistrictRow { ascii: "agli", province_ascii: "kastamonu" },
    DistrictRow { ascii: "arac", province_ascii: "kastamonu" },
    DistrictRow { ascii: "azdavay", province_ascii: "kastamonu" },
    DistrictRow { ascii: "bozkurt", province_ascii: "kastamonu" },
    DistrictRow { ascii: "cide", province_ascii: "kastamonu" },
    DistrictRow { ascii: "catalzeytin", province_ascii: "kastamonu" },
    DistrictRow { ascii: "daday", province_ascii: "kastamonu" },
    DistrictRow { ascii: "devrekani", province_ascii: "kastamonu" },
    DistrictRow { ascii: "doganyurt", province_ascii: "kastamonu" },
    DistrictRow { ascii: "hanonu", province_ascii: "kastamonu" },
    DistrictRow { ascii: "ihsangazi", province_ascii: "kastamonu" },
    DistrictRow { ascii: "inebolu", province_ascii: "kastamonu" },
    DistrictRow { ascii: "kure", province_ascii: "kastamonu" },
    DistrictRow { ascii: "pinarbasi", province_ascii: "kastamonu" },
    DistrictRow { ascii: "seydiler", province_ascii: "kastamonu" },
    DistrictRow { ascii: "senpazar", province_ascii: "kastamonu" },
    DistrictRow { ascii: "taskopru", province_ascii: "kastamonu" },
    // Kayseri
    DistrictRow { ascii: "melikgazi", province_ascii: "kayseri" },
    DistrictRow { ascii: "kocasinan", province_ascii: "kayseri" },
    DistrictRow { ascii: "develi", province_ascii: "kayseri" },
    DistrictRow { ascii: "akkisla", province_ascii: "kayseri" },
    DistrictRow { ascii: "bunyan", province_ascii: "kayseri" },
    DistrictRow { ascii: "felahiye", province_ascii: "kayseri" },
    DistrictRow { ascii: "hacilar", province_ascii: "kayseri" },
    DistrictRow { ascii: "incesu", province_ascii: "kayseri" },
    DistrictRow { ascii: "ozvatan", province_ascii: "kayseri" },
    DistrictRow { ascii: "pinarbasi", province_ascii: "kayseri" },
    DistrictRow { ascii: "sarioglan", province_ascii: "kayseri" },
    DistrictRow { ascii: "sariz", province_ascii: "kayseri" },
    DistrictRow { ascii: "talas", province_ascii: "kayseri" },
    DistrictRow { ascii: "tomarza", province_ascii: "kayseri" },
    DistrictRow { ascii: "yahyali", province_ascii: "kayseri" },
    DistrictRow { ascii: "yesilhisar", province_ascii: "kayseri" },
    // Kırklareli
    DistrictRow { ascii: "luleburgaz", province_ascii: "kirklareli" },
    DistrictRow { ascii: "babaeski", province_ascii: "kirklareli" },
    DistrictRow { ascii: "demirkoy", province_ascii: "kirklareli" },
    DistrictRow { ascii: "kofcaz", province_ascii: "kirklareli" },
    DistrictRow { ascii: "pehlivankoy", province_ascii: "kirklareli" },
    DistrictRow { ascii: "pinarhisar", province_ascii: "kirklareli" },
    DistrictRow { ascii: "vize", province_ascii: "kirklareli" },
    // Kırşehir
    DistrictRow { ascii: "kaman", province_ascii: "kirsehir" },
    DistrictRow { ascii: "akcakent", province_ascii: "kirsehir" },
    DistrictRow { ascii: "akpinar", province_ascii: "kirsehir" },
    DistrictRow { ascii: "boztepe", province_ascii: "kirsehir" },
    DistrictRow { ascii: "cicekdagi", province_ascii: "kirsehir" },
    DistrictRow { ascii: "mucur", province_ascii: "kirsehir" },
    // Kocaeli
    DistrictRow { ascii: "gebze", province_ascii: "kocaeli" },
    DistrictRow { ascii: "izmit", province_ascii: "kocaeli" },
    DistrictRow { ascii: "korfez", province_ascii: "kocaeli" },
    DistrictRow { ascii: "derince", province_ascii: "kocaeli" },
    DistrictRow { ascii: "basiskele", province_ascii: "kocaeli" },
    DistrictRow { ascii: "cayirova", province_ascii: "kocaeli" },
    DistrictRow { ascii: "darica", province_ascii: "kocaeli" },
    DistrictRow { ascii: "dilovasi", province_ascii: "kocaeli" },
    DistrictRow { ascii: "golcuk", province_ascii: "kocaeli" },
    DistrictRow { ascii: "kandira", province_ascii: "kocaeli" },
    DistrictRow { ascii: "karamursel", province_ascii: "kocaeli" },
    DistrictRow { ascii: "kartepe", province_ascii: "kocaeli" },
    // Konya
    DistrictRow { ascii: "selcuklu", province_ascii: "konya" },
    DistrictRow { ascii: "meram", province_ascii: "konya" },
    DistrictRow { ascii: "eregli", province_ascii: "konya" },
    DistrictRow { ascii: "aksehir", province_ascii: "konya" },
    DistrictRow { ascii: "ahirli", province_ascii: "konya" },
    DistrictRow { ascii: "akoren", province_ascii: "konya" },
    DistrictRow { ascii: "altinekin", province_ascii: "konya" },
    DistrictRow { ascii: "beysehir", province_ascii: "konya" },
    DistrictRow { ascii: "bozkir", province_ascii: "konya" },
    DistrictRow { ascii: "cihanbeyli", province_ascii: "konya" },
    DistrictRow { ascii: "celtik", province_ascii: "konya" },
    DistrictRow { ascii: "cumra", province_ascii: "konya" },
    DistrictRow { ascii: "derbent", province_ascii: "konya" },
    DistrictRow { ascii: "derebucak", province_ascii: "konya" },
    DistrictRow { ascii: "doganhisar", province_ascii: "konya" },
    DistrictRow { ascii: "emirgazi", province_ascii: "konya" },
    DistrictRow { ascii: "guneysinir", province_ascii: "konya" },
    DistrictRow { ascii: "hadim", province_ascii: "konya" },
    DistrictRow { ascii: "halkapinar", province_ascii: "konya" },
    DistrictRow { ascii: "huyuk", province_ascii: "konya" },
    DistrictRow { ascii: "ilgin", province_ascii: "konya" },
    DistrictRow { ascii: "kadinhani", province_ascii: "konya" },
    DistrictRow { ascii: "karapinar", province_ascii: "konya" },
    DistrictRow { ascii: "karatay", province_ascii: "konya" },
    DistrictRow { ascii: "kulu", province_ascii: "konya" },
    DistrictRow { ascii: "sarayonu", province_ascii: "konya" },
    DistrictRow { ascii: "seydisehir", province_ascii: "konya" },
    DistrictRow { ascii: "taskent", province_ascii: "konya" },
    DistrictRow { ascii: "tuzlukcu", province_ascii: "konya" },
    DistrictRow { ascii: "yalihuyuk", province_ascii: "konya" },
    DistrictRow { ascii: "yunak", province_ascii: "konya" },
    // Kütahya
    DistrictRow { ascii: "tavsanli", province_ascii: "kutahya" },
    DistrictRow { ascii: "simav", province_ascii: "kutahya" },
    DistrictRow { ascii: "altintas", province_ascii: "kutahya" },
    DistrictRow { ascii: "aslanapa", province_ascii: "kutahya" },
    DistrictRow { ascii: "cavdarhisar", province_ascii: "kutahya" },
    DistrictRow { ascii: "domanic", province_ascii: "kutahya" },
    DistrictRow { ascii: "dumlupinar", province_ascii: "kutahya" },
    DistrictRow { ascii: "emet", province_ascii: "kutahya" },
    DistrictRow { ascii: "gediz", province_ascii: "kutahya" },
    DistrictRow { ascii: "hisarcik", province_ascii: "kutahya" },
    DistrictRow { ascii: "pazarlar", province_ascii: "kutahya" },
    DistrictRow { ascii: "saphane", province_ascii: "kutahya" },
    // Malatya
    DistrictRow { ascii: "akcadag", province_ascii: "malatya" },
    DistrictRow { ascii: "yesilyurt", province_ascii: "malatya" },
    DistrictRow { ascii: "kale", province_ascii: "malatya" },
    DistrictRow { ascii: "arapgir", province_ascii: "malatya" },
    DistrictRow { ascii: "arguvan", province_ascii: "malatya" },
    DistrictRow { ascii: "battalgazi", province_ascii: "malatya" },
    DistrictRow { ascii: "darende", province_ascii: "malatya" },
    DistrictRow { ascii: "dogansehir", province_ascii: "malatya" },
    DistrictRow { ascii: "doganyol", province_ascii: "malatya" },
    DistrictRow { ascii: "hekimhan", province_ascii: "malatya" },
    DistrictRow { ascii: "kuluncak", province_ascii: "malatya" },
    DistrictRow { ascii: "puturge", province_ascii: "malatya" },
    DistrictRow { ascii: "yazihan", province_ascii: "malatya" },
    // Manisa
    DistrictRow { ascii: "akhisar", province_ascii: "manisa" },
    DistrictRow { ascii: "turgutlu", province_ascii: "manisa" },
    DistrictRow { ascii: "saruhanli", province_ascii: "manisa" },
    DistrictRow { ascii: "soma", province_ascii: "manisa" },
    DistrictRow { ascii: "ahmetli", province_ascii: "manisa" },
    DistrictRow { ascii: "alasehir", province_ascii: "manisa" },
    DistrictRow { ascii: "demirci", province_ascii: "manisa" },
    DistrictRow { ascii: "golmarmara", province_ascii: "manisa" },
    DistrictRow { ascii: "gordes", province_ascii: "manisa" },
    DistrictRow { ascii: "kirkagac", province_ascii: "manisa" },
    DistrictRow { ascii: "koprubasi", province_ascii: "manisa" },
    DistrictRow { ascii: "kula", province_ascii: "manisa" },
    DistrictRow { ascii: "salihli", province_ascii: "manisa" },
    DistrictRow { ascii: "sarigol", province_ascii: "manisa" },
    DistrictRow { ascii: "selendi", province_ascii: "manisa" },
    DistrictRow { ascii: "sehzadeler", province_ascii: "manisa" },
    DistrictRow { ascii: "yunusemre", province_ascii: "manisa" },
    // Kahramanmaraş
    DistrictRow { ascii: "dulkadiroglu", province_ascii: "kahramanmaras" },
    DistrictRow { ascii: "elbistan", province_ascii: "kahramanmaras" },
    DistrictRow { ascii: "afsin", province_ascii: "kahramanmaras" },
    DistrictRow { ascii: "andirin", province_ascii: "kahramanmaras" },
    DistrictRow { ascii: "caglayancerit", province_ascii: "kahramanmaras" },
    DistrictRow { ascii: "ekinozu", province_ascii: "kahramanmaras" },
    DistrictRow { ascii: "goksun", province_ascii: "kahramanmaras" },
    DistrictRow { ascii: "nurhak", province_ascii: "kahramanmaras" },
    DistrictRow { ascii: "onikisubat", province_ascii: "kahramanmaras" },
    DistrictRow { ascii: "pazarcik", province_ascii: "kahramanmaras" },
    DistrictRow { ascii: "turkoglu", province_ascii: "kahramanmaras" },
    // Mardin
    DistrictRow { ascii: "kiziltepe", province_ascii: "mardin" },
    DistrictRow { ascii: "midyat", province_ascii: "mardin" },
    DistrictRow { ascii: "artuklu", province_ascii: "mardin" },
    DistrictRow { ascii: "dargecit", province_ascii: "mardin" },
    DistrictRow { ascii: "derik", province_ascii: "mardin" },
    DistrictRow { ascii: "mazidagi", province_ascii: "mardin" },
    DistrictRow { ascii: "nusaybin", province_ascii: "mardin" },
    DistrictRow { ascii: "omerli", province_ascii: "mardin" },
    DistrictRow { ascii: "savur", province_ascii: "mardin" },
    DistrictRow { ascii: "yesilli", province_ascii: "mardin" },
    // Muğla
    DistrictRow { ascii: "bodrum", province_ascii: "mugla" },
    DistrictRow { ascii: "marmaris", province_ascii: "mugla" },
    DistrictRow { ascii: "fethiye", province_ascii: "mugla" },
    DistrictRow { ascii: "milas", province_ascii: "mugla" },
    DistrictRow { ascii: "dalaman", province_ascii: "mugla" },
    DistrictRow { ascii: "datca", province_ascii: "mugla" },
    DistrictRow { ascii: "kavaklidere", province_ascii: "mugla" },
    DistrictRow { ascii: "koycegiz", province_ascii: "mugla" },
    DistrictRow { ascii: "mentese", province_ascii: "mugla" },
    DistrictRow { ascii: "ortaca", province_ascii: "mugla" },
    DistrictRow { ascii: "seydikemer", province_ascii: "mugla" },
    DistrictRow { ascii: "ula", province_ascii: "mugla" },
    DistrictRow { ascii: "yatagan", province_ascii: "mugla" },
    // Muş
    DistrictRow { ascii: "malazgirt", province_ascii: "mus" },
    DistrictRow { ascii: "bulanik", province_ascii: "mus" },
    DistrictRow { ascii: "haskoy", province_ascii: "mus" },
    DistrictRow { ascii: "korkut", province_ascii: "mus" },
    DistrictRow { ascii: "varto", province_ascii: "mus" },
    // Nevşehir
    DistrictRow { ascii: "urgup", province_ascii: "nevsehir" },
    DistrictRow { ascii: "avanos", province_ascii: "nevsehir" },
    DistrictRow { ascii: "acigol", province_ascii: "nevsehir" },
    DistrictRow { ascii: "derinkuyu", province_ascii: "nevsehir" },
    DistrictRow { ascii: "gulsehir", province_ascii: "nevsehir" },
    DistrictRow { ascii: "hacibektas", province_ascii: "nevsehir" },
    DistrictRow { ascii: "kozakli", province_ascii: "nevsehir" },
    // Niğde
    DistrictRow { ascii: "bor", province_ascii: "nigde" },
    DistrictRow { ascii: "altunhisar", province_ascii: "nigde" },
    DistrictRow { ascii: "camardi", province_ascii: "nigde" },
    DistrictRow { ascii: "ciftlik", province_ascii: "nigde" },
    DistrictRow { ascii: "ulukisla", province_ascii: "nigde" },
    // Ordu
    DistrictRow { ascii: "unye", province_ascii: "ordu" },
    DistrictRow { ascii: "fatsa", province_ascii: "ordu" },
    DistrictRow { ascii: "akkus", province_ascii: "ordu" },
    DistrictRow { ascii: "altinordu", province_ascii: "ordu" },
    DistrictRow { ascii: "aybasti", province_ascii: "ordu" },
    DistrictRow { ascii: "camas", province_ascii: "ordu" },
    DistrictRow { ascii: "catalpinar", province_ascii: "ordu" },
    DistrictRow { ascii: "caybasi", province_ascii: "ordu" },
    DistrictRow { ascii: "golkoy", province_ascii: "ordu" },
    DistrictRow { ascii: "gulyali", province_ascii: "ordu" },
    DistrictRow { ascii: "gurgentepe", province_ascii: "ordu" },
    DistrictRow { ascii: "ikizce", province_ascii: "ordu" },
    DistrictRow { ascii: "kabaduz", province_ascii: "ordu" },
    DistrictRow { ascii: "kabatas", province_ascii: "ordu" },
    DistrictRow { ascii: "korgan", province_ascii: "ordu" },
    DistrictRow { ascii: "kumru", province_ascii: "ordu" },
    DistrictRow { ascii: "mesudiye", province_ascii: "ordu" },
    DistrictRow { ascii: "persembe", province_ascii: "ordu" },
    DistrictRow { ascii: "ulubey", province_ascii: "ordu" },
    // Rize
    DistrictRow { ascii: "ardesen", province_ascii: "rize" },
    DistrictRow { ascii: "pazar", province_ascii: "rize" },
    DistrictRow { ascii: "camlihemsin", province_ascii: "rize" },
    DistrictRow { ascii: "cayeli", province_ascii: "rize" },
    DistrictRow { ascii: "derepazari", province_ascii: "rize" },
    DistrictRow { ascii: "findikli", province_ascii: "rize" },
    DistrictRow { ascii: "guneysu", province_ascii: "rize" },
    DistrictRow { ascii: "hemsin", province_ascii: "rize" },
    DistrictRow { ascii: "ikizdere", province_ascii: "rize" },
    DistrictRow { ascii: "iyidere", province_ascii: "rize" },
    DistrictRow { ascii: "kalkandere", province_ascii: "rize" },
    // Sakarya
    DistrictRow { ascii: "adapazari", province_ascii: "sakarya" },
    DistrictRow { ascii: "serdivan", province_ascii: "sakarya" },
    DistrictRow { ascii: "akyazi", province_ascii: "sakarya" },
    DistrictRow { ascii: "arifiye", province_ascii: "sakarya" },
    DistrictRow { ascii: "erenler", province_ascii: "sakarya" },
    DistrictRow { ascii: "ferizli", province_ascii: "sakarya" },
    DistrictRow { ascii: "geyve", province_ascii: "sakarya" },
    DistrictRow { ascii: "hendek", province_ascii: "sakarya" },
    DistrictRow { ascii: "karapurcek", province_ascii: "sakarya" },
    DistrictRow { ascii: "karasu", province_ascii: "sakarya" },
    DistrictRow { ascii: "kaynarca", province_ascii: "sakarya" },
    DistrictRow { ascii: "kocaali", province_ascii: "sakarya" },
    DistrictRow { ascii: "pamukova", province_ascii: "sakarya" },
    DistrictRow { ascii: "sapanca", province_ascii: "sakarya" },
    DistrictRow { ascii: "sogutlu", province_ascii: "sakarya" },
    DistrictRow { ascii: "tarakli", province_ascii: "sakarya" },
    // Samsun
    DistrictRow { ascii: "ilkadim", province_ascii: "samsun" },
    DistrictRow { ascii: "atakum", province_ascii: "samsun" },
    DistrictRow { ascii: "bafra", province_ascii: "samsun" },
    DistrictRow { ascii: "carsamba", province_ascii: "samsun" },
    DistrictRow { ascii: "alacam", province_ascii: "samsun" },
    DistrictRow { ascii: "asarcik", province_ascii: "samsun" },
    DistrictRow { ascii: "ayvacik", province_ascii: "samsun" },
    DistrictRow { ascii: "canik", province_ascii: "samsun" },
    DistrictRow { ascii: "havza", province_ascii: "samsun" },
    DistrictRow { ascii: "kavak", province_ascii: "samsun" },
    DistrictRow { ascii: "ladik", province_ascii: "samsun" },
    DistrictRow { ascii: "salipazari", province_ascii: "samsun" },
    DistrictRow { ascii: "tekkekoy", province_ascii: "samsun" },
    DistrictRow { ascii: "terme", province_ascii: "samsun" },
    DistrictRow { ascii: "vezirkopru", province_ascii: "samsun" },
    DistrictRow { ascii: "yakakent", province_ascii: "samsun" },
    DistrictRow { ascii: "ondokuzmayis", province_ascii: "samsun" },
    // Siirt
    DistrictRow { ascii: "kurtalan", province_ascii: "siirt" },
    DistrictRow { ascii: "baykan", province_ascii: "siirt" },
    DistrictRow { ascii: "eruh", province_ascii: "siirt" },
    DistrictRow { ascii: "pervari", province_ascii: "siirt" },
    DistrictRow { ascii: "sirvan", province_ascii: "siirt" },
    DistrictRow { ascii: "tillo", province_ascii: "siirt" },
    // Sinop
    DistrictRow { ascii: "boyabat", province_ascii: "sinop" },
    DistrictRow { ascii: "ayancik", province_ascii: "sinop" },
    DistrictRow { ascii: "dikmen", province_ascii: "sinop" },
    DistrictRow { ascii: "duragan", province_ascii: "sinop" },
    DistrictRow { ascii: "erfelek", province_ascii: "sinop" },
    DistrictRow { ascii: "gerze", province_ascii: "sinop" },
    DistrictRow { ascii: "sarayduzu", province_ascii: "sinop" },
    DistrictRow { ascii: "turkeli", province_ascii: "sinop" },
    // Sivas
    DistrictRow { ascii: "sarkisla", province_ascii: "sivas" },
    DistrictRow { ascii: "akincilar", province_ascii: "sivas" },
    DistrictRow { ascii: "altinyayla", province_ascii: "sivas" },
    DistrictRow { ascii: "divrigi", province_ascii: "sivas" },
    DistrictRow { ascii: "dogansar", province_ascii: "sivas" },
    DistrictRow { ascii: "gemerek", province_ascii: "sivas" },
    DistrictRow { ascii: "golova", province_ascii: "sivas" },
    DistrictRow { ascii: "gurun", province_ascii: "sivas" },
    DistrictRow { ascii: "hafik", province_ascii: "sivas" },
    DistrictRow { ascii: "imranli", province_ascii: "sivas" },
    DistrictRow { ascii: "kangal", province_ascii: "sivas" },
    DistrictRow { ascii: "koyulhisar", province_ascii: "sivas" },
    DistrictRow { ascii: "susehri", province_ascii: "sivas" },
    DistrictRow { ascii: "ulas", province_ascii: "sivas" },
    DistrictRow { ascii: "yildizeli", province_ascii: "sivas" },
    DistrictRow { ascii: "zara", province_ascii: "sivas" },
    // Tekirdağ
    DistrictRow { ascii: "corlu", province_ascii: "tekirdag" },
    DistrictRow { ascii: "cerkezkoy", province_ascii: "tekirdag" },
    DistrictRow { ascii: "malkara", province_ascii: "tekirdag" },
    DistrictRow { ascii: "ergene", province_ascii: "tekirdag" },
    DistrictRow { ascii: "hayrabolu", province_ascii: "tekirdag" },
    DistrictRow { ascii: "kapakli", province_ascii: "tekirdag" },
    DistrictRow { ascii: "marmaraereglisi", province_ascii: "tekirdag" },
    DistrictRow { ascii: "muratli", province_ascii: "tekirdag" },
    DistrictRow { ascii: "saray", province_ascii: "tekirdag" },
    DistrictRow { ascii: "sarkoy", province_ascii: "tekirdag" },
    // Tokat
    DistrictRow { ascii: "erbaa", province_ascii: "tokat" },
    DistrictRow { ascii: "turhal", province_ascii: "tokat" },
    DistrictRow { ascii: "pazar", province_ascii: "tokat" },
    DistrictRow { ascii: "almus", province_ascii: "tokat" },
    DistrictRow { ascii: "artova", province_ascii: "tokat" },
    DistrictRow { ascii: "basciftlik", province_ascii: "tokat" },
    DistrictRow { ascii: "niksar", province_ascii: "tokat" },
    DistrictRow { ascii: "resadiye", province_ascii: "tokat" },
    DistrictRow { ascii: "sulusaray", province_ascii: "tokat" },
    DistrictRow { ascii: "yesilyurt", province_ascii: "tokat" },
    DistrictRow { ascii: "zile", province_ascii: "tokat" },
    // Trabzon
    DistrictRow { ascii: "akcaabat", province_ascii: "trabzon" },
    DistrictRow { ascii: "of", province_ascii: "trabzon" },
    DistrictRow { ascii: "arakli", province_ascii: "trabzon" },
    DistrictRow { ascii: "arsin", province_ascii: "trabzon" },
    DistrictRow { ascii: "besikduzu", province_ascii: "trabzon" },
    DistrictRow { ascii: "caykara", province_ascii: "trabzon" },
    DistrictRow { ascii: "dernekpazari", province_ascii: "trabzon" },
    DistrictRow { ascii: "duzkoy", province_ascii: "trabzon" },
    DistrictRow { ascii: "hayrat", province_ascii: "trabzon" },
    DistrictRow { ascii: "koprubasi", province_ascii: "trabzon" },
    DistrictRow { ascii: "macka", province_ascii: "trabzon" },
    DistrictRow { ascii: "ortahisar", province_ascii: "trabzon" },
    DistrictRow { ascii: "surmene", province_ascii: "trabzon" },
    DistrictRow { ascii: "salpazari", province_ascii: "trabzon" },
    DistrictRow { ascii: "tonya", province_ascii: "trabzon" },
    DistrictRow { ascii: "vakfikebir", province_ascii: "trabzon" },
    DistrictRow { ascii: "yomra", province_ascii: "trabzon" },
    // Tunceli
    DistrictRow { ascii: "cemisgezek", province_ascii: "tunceli" },
    DistrictRow { ascii: "hozat", province_ascii: "tunceli" },
    DistrictRow { ascii: "mazgirt", province_ascii: "tunceli" },
    DistrictRow { ascii: "nazimiye", province_ascii: "tunceli" },
    DistrictRow { ascii: "ovacik", province_ascii: "tunceli" },
    DistrictRow { ascii: "pertek", province_ascii: "tunceli" },
    DistrictRow { ascii: "pulumur", province_ascii: "tunceli" },
    // Şanlıurfa
    DistrictRow { ascii: "viransehir", province_ascii: "sanliurfa" },
    DistrictRow { ascii: "siverek", province_ascii: "sanliurfa" },
    DistrictRow { ascii: "birecik", province_ascii: "sanliurfa" },
    DistrictRow { ascii: "haliliye", province_ascii: "sanliurfa" },
    DistrictRow { ascii: "akcakale", province_ascii: "sanliurfa" },
    DistrictRow { ascii: "bozova", province_ascii: "sanliurfa" },
    DistrictRow { ascii: "ceylanpinar", province_ascii: "sanliurfa" },
    DistrictRow { ascii: "halfeti", province_ascii: "sanliurfa" },
    DistrictRow { ascii: "harran", province_ascii: "sanliurfa" },
    DistrictRow { ascii: "hilvan", province_ascii: "sanliurfa" },
    DistrictRow { ascii: "karakopru", province_ascii: "sanliurfa" },
    DistrictRow { ascii: "suruc", province_ascii: "sanliurfa" },
    // Uşak
    DistrictRow { ascii: "banaz", province_ascii: "usak" },
    DistrictRow { ascii: "esme", province_ascii: "usak" },
    DistrictRow { ascii: "karahalli", province_ascii: "usak" },
    DistrictRow { ascii: "sivasli", province_ascii: "usak" },
    DistrictRow { ascii: "ulubey", province_ascii: "usak" },
    // Van
    DistrictRow { ascii: "edremit", province_ascii: "van" },
    DistrictRow { ascii: "ercis", province_ascii: "van" },
    DistrictRow { ascii: "ipekyolu", province_ascii: "van" },
    DistrictRow { ascii: "bahcesaray", province_ascii: "van" },
    DistrictRow { ascii: "baskale", province_ascii: "van" },
    DistrictRow { ascii: "caldiran", province_ascii: "van" },
    DistrictRow { ascii: "catak", province_ascii: "van" },
    DistrictRow { ascii: "gevas", province_ascii: "van" },
    DistrictRow { ascii: "gurpinar", province_ascii: "van" },
    DistrictRow { ascii: "muradiye", province_ascii: "van" },
    DistrictRow { ascii: "ozalp", province_ascii: "van" },
    DistrictRow { ascii: "saray", province_ascii: "van" },
    DistrictRow { ascii: "tusba", province_ascii: "van" },
    // Yozgat
    DistrictRow { ascii: "akdagmadeni", province_ascii: "yozgat" },
    DistrictRow { ascii: "aydincik", province_ascii: "yozgat" },
    DistrictRow { ascii: "bogazliyan", province_ascii: "yozgat" },
    DistrictRow { ascii: "candir", province_ascii: "yozgat" },
    DistrictRow { ascii: "cayiralan", province_ascii: "yozgat" },
    DistrictRow { ascii: "cekerek", province_ascii: "yozgat" },
    DistrictRow { ascii: "kadisehri", province_ascii: "yozgat" },
    DistrictRow { ascii: "saraykent", province_ascii: "yozgat" },
    DistrictRow { ascii: "sarikaya", province_ascii: "yozgat" },
    DistrictRow { ascii: "sorgun", province_ascii: "yozgat" },
    DistrictRow { ascii: "sefaatli", province_ascii: "yozgat" },
    DistrictRow { ascii: "yenifakili", province_ascii: "yozgat" },
    DistrictRow { ascii: "yerkoy", province_ascii: "yozgat" },
    // Zonguldak
    DistrictRow { ascii: "alapli", province_ascii: "zonguldak" },
    DistrictRow { ascii: "caycuma", province_ascii: "zonguldak" },
    DistrictRow { ascii: "devrek", province_ascii: "zonguldak" },
    DistrictRow { ascii: "gokcebey", province_ascii: "zonguldak" },
    DistrictRow { ascii: "kilimli", province_ascii: "zonguldak" },
    DistrictRow { ascii: "kozlu", province_ascii: "zonguldak" },
    // Aksaray
    DistrictRow { ascii: "eskil", province_ascii: "aksaray" },
    DistrictRow { ascii: "agacoren", province_ascii: "aksaray" },
    DistrictRow { ascii: "gulagac", province_ascii: "aksaray" },
    DistrictRow { ascii: "guzelyurt", province_ascii: "aksaray" },
    DistrictRow { ascii: "ortakoy", province_ascii: "aksaray" },
    DistrictRow { ascii: "sariyahsi", province_ascii: "aksaray" },
    DistrictRow { ascii: "sultanhani", province_ascii: "aksaray" },
    // Bayburt
    DistrictRow { ascii: "aydintepe", province_ascii: "bayburt" },
    DistrictRow { ascii: "demirozu", province_ascii: "bayburt" },
    // Karaman
    DistrictRow { ascii: "ermenek", province_ascii: "karaman" },
    DistrictRow { ascii: "ayranci", province_ascii: "karaman" },
    DistrictRow { ascii: "basyayla", province_ascii: "karaman" },
    DistrictRow { ascii: "kazimkarabekir", province_ascii: "karaman" },
    DistrictRow { ascii: "sariveliler", province_ascii: "karaman" },
    // Kırıkkale
    DistrictRow { ascii: "delice", province_ascii: "kirikkale" },
    DistrictRow { ascii: "bahsili", province_ascii: "kirikkale" },
    DistrictRow { ascii: "baliseyh", province_ascii: "kirikkale" },
    DistrictRow { ascii: "celebi", province_ascii: "kirikkale" },
    DistrictRow { ascii: "karakecili", province_ascii: "kirikkale" },
    DistrictRow { ascii: "keskin", province_ascii: "kirikkale" },
    DistrictRow { ascii: "sulakyurt", province_ascii: "kirikkale" },
    DistrictRow { ascii: "yahsihan", province_ascii: "kirikkale" },
    // Batman
    DistrictRow { ascii: "kozluk", province_ascii: "batman" },
    DistrictRow { ascii: "besiri", province_ascii: "batman" },
    DistrictRow { ascii: "gercus", province_ascii: "batman" },
    DistrictRow { ascii: "hasankeyf", province_ascii: "batman" },
    DistrictRow { ascii: "sason", province_ascii: "batman" },
    // Şırnak
    DistrictRow { ascii: "cizre", province_ascii: "sirnak" },
    DistrictRow { ascii: "silopi", province_ascii: "sirnak" },
    DistrictRow { ascii: "beytussebap", province_ascii: "sirnak" },
    DistrictRow { ascii: "guclukonak", province_ascii: "sirnak" },
    DistrictRow { ascii: "idil", province_ascii: "sirnak" },
    DistrictRow { ascii: "uludere", province_ascii: "sirnak" },
    // Bartın
    DistrictRow { ascii: "amasra", province_ascii: "bartin" },
    DistrictRow { ascii: "kurucasile", province_ascii: "bartin" },
    DistrictRow { ascii: "ulus", province_ascii: "bartin" },
    // Ardahan
    DistrictRow { ascii: "cildir", province_ascii: "ardahan" },
    DistrictRow { ascii: "damal", province_ascii: "ardahan" },
    DistrictRow { ascii: "gole", province_ascii: "ardahan" },
    DistrictRow { ascii: "hanak", province_ascii: "ardahan" },
    DistrictRow { ascii: "posof", province_ascii: "ardahan" },
    // Iğdır
    DistrictRow { ascii: "aralik", province_ascii: "igdir" },
    DistrictRow { ascii: "karakoyunlu", province_ascii: "igdir" },
    DistrictRow { ascii: "tuzluca", province_ascii: "igdir" },
    // Yalova
    DistrictRow { ascii: "altinova", province_ascii: "yalova" },
    DistrictRow { ascii: "armutlu", province_ascii: "yalova" },
    DistrictRow { ascii: "ciftlikkoy", province_ascii: "yalova" },
    DistrictRow { ascii: "cinarcik", province_ascii: "yalova" },
    DistrictRow { ascii: "termal", province_ascii: "yalova" },
    // Karabük
    DistrictRow { ascii: "eflani", province_ascii: "karabuk" },
    DistrictRow { ascii: "eskipazar", province_ascii: "karabuk" },
    DistrictRow { ascii: "ovacik", province_ascii: "karabuk" },
    DistrictRow { ascii: "safranbolu", province_ascii: "karabuk" },
    DistrictRow { ascii: "yenice", province_ascii: "karabuk" },
    // Kilis
    DistrictRow { ascii: "elbeyli", province_ascii: "kilis" },
    DistrictRow { ascii: "musabeyli", province_ascii: "kilis" },
    DistrictRow { ascii: "polateli", province_ascii: "kilis" },
    // Osmaniye
    DistrictRow { ascii: "bahce", province_ascii: "osmaniye" },
    DistrictRow { ascii: "duzici", province_ascii: "osmaniye" },
    DistrictRow { ascii: "hasanbeyli", province_ascii: "osmaniye" },
    DistrictRow { ascii: "kadirli", province_ascii: "osmaniye" },
    DistrictRow { ascii: "sumbas", province_ascii: "osmaniye" },
    DistrictRow { ascii: "toprakkale", province_ascii: "osmaniye" },
    // Düzce
    DistrictRow { ascii: "akcakoca", province_ascii: "duzce" },
    DistrictRow { ascii: "cumayeri", province_ascii: "duzce" },
    DistrictRow { ascii: "golyaka", province_ascii: "duzce" },
    DistrictRow { ascii: "gumusova", province_ascii: "duzce" },
    DistrictRow { ascii: "kaynasli", province_ascii: "duzce" },
    DistrictRow { ascii: "yigilca", province_ascii: "duzce" },
];
