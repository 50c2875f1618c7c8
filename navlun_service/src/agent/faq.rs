//! FAQ handler (spec.md §4.7 step 6): longest-specific-first keyword table.
//! Job-price keywords are checked before the generic price/subscription
//! handler so "navlun ne kadar" doesn't fall into the app-pricing reply.

struct FaqEntry {
    keywords: &'static [&'static str],
    reply: &'static str,
}

const JOB_PRICE_ENTRY: FaqEntry = FaqEntry {
    keywords: &["navlun", "yuk fiyat", "kac para"],
    reply: "navlun fiyati ilandan ilana degisir, ilandaki telefon numarasini arayip dogrudan sormali.",
};

const ENTRIES: &[FaqEntry] = &[
    FaqEntry {
        keywords: &["deneme suresi", "trial"],
        reply: "deneme suresi 7 gun, bu surede tum ozellikler acik.",
    },
    FaqEntry {
        keywords: &["yukumluluk", "zorunlu mu", "abone olmak zorunda"],
        reply: "kullanmak icin herhangi bir yukumluluk yok, istedigin zaman birakabilirsin.",
    },
    FaqEntry {
        keywords: &["bildirim", "notification", "haber ver"],
        reply: "aradigin rota icin ilan yoksa bildirim almak istedigini soyleyebilirsin, yeni ilan geldiginde sana yazarim.",
    },
    FaqEntry {
        keywords: &["nasil kullanilir", "nasil arar", "yardim"],
        reply: "nereden nereye arac/yuk ariyorsan yaz, orn: \"antalya istanbul tir ariyorum\".",
    },
    FaqEntry {
        keywords: &["nerede is", "is nerede", "nerede calis"],
        reply: "turkiye genelindeki gruplardan toplanan guncel ilanlari burada gorebilirsin.",
    },
    FaqEntry {
        keywords: &["fiyat", "ucret", "ne kadar", "abonelik"],
        reply: "uygulama ucretsiz, istersen premium ozellikler icin abonelik var.",
    },
];

/// Returns the matched FAQ reply, or `None` if no keyword fired.
pub fn match_faq(normalized_text: &str) -> Option<&'static str> {
    if JOB_PRICE_ENTRY.keywords.iter().any(|k| normalized_text.contains(k)) {
        return Some(JOB_PRICE_ENTRY.reply);
    }
    ENTRIES
        .iter()
        .find(|entry| entry.keywords.iter().any(|k| normalized_text.contains(k)))
        .map(|entry| entry.reply)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn job_price_wins_over_generic_price_handler() {
        assert_eq!(match_faq("navlun ne kadar"), Some(JOB_PRICE_ENTRY.reply));
    }

    #[test]
    fn generic_price_handler_matches_app_pricing() {
        assert_eq!(match_faq("uygulama ucretsiz mi, fiyat nedir"), Some(ENTRIES.last().unwrap().reply));
    }

    #[test]
    fn unmatched_text_returns_none() {
        assert_eq!(match_faq("merhaba nasilsin"), None);
    }
}
