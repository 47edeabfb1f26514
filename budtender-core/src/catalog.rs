//! Static choices offered by the survey and review forms, plus the terpene
//! reference shown on recommendation cards.

pub struct EffectOption {
    pub name: &'static str,
    pub description: &'static str,
}

pub const SURVEY_EFFECTS: [EffectOption; 3] = [
    EffectOption {
        name: "Relaxed",
        description: "Feeling calm and stress-free.",
    },
    EffectOption {
        name: "Happy",
        description: "Uplifted mood.",
    },
    EffectOption {
        name: "Sleepy",
        description: "Promotes restful sleep.",
    },
];

pub const TERPENES: [&str; 16] = [
    "Bisabolol",
    "Caryophyllene",
    "Eucalyptol",
    "Farnesene",
    "Geraniol",
    "Humulene",
    "Limonene",
    "Linalool",
    "Myrcene",
    "Nerolidol",
    "Ocimene",
    "Phytol",
    "Pinene",
    "Sabinene",
    "Terpinolene",
    "Valencene",
];

pub const CONDITIONS: [&str; 10] = [
    "Anxiety",
    "Chronic Pain",
    "Depression",
    "Insomnia",
    "Stress",
    "Headaches",
    "Appetite Loss",
    "Fibromyalgia",
    "Migraines",
    "Muscle Spasms",
];

/// Effect chips on the review form.
pub const REVIEW_EFFECTS: [&str; 10] = [
    "Relaxed",
    "Euphoric",
    "Happy",
    "Uplifted",
    "Focused",
    "Creative",
    "Energetic",
    "Sleepy",
    "Pain Relief",
    "Stress Relief",
];

pub struct TerpeneInfo {
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub taste: &'static [&'static str],
}

static GENERIC_TERPENE: TerpeneInfo = TerpeneInfo {
    name: "",
    icon: "🌿",
    description: "A beneficial cannabis compound that contributes to the strain's unique effects.",
    taste: &[],
};

static TERPENE_INFO: [TerpeneInfo; 16] = [
    TerpeneInfo {
        name: "Myrcene",
        icon: "🥭",
        description: "Mango-like with earthy, musky notes. Known for sedative and relaxing effects. May help with sleep and muscle tension.",
        taste: &["earthy", "herbal", "musky", "spicy", "tropical"],
    },
    TerpeneInfo {
        name: "Limonene",
        icon: "🍋",
        description: "Citrusy and uplifting. Associated with mood elevation and stress relief.",
        taste: &["citrus", "fresh", "zesty"],
    },
    TerpeneInfo {
        name: "Pinene",
        icon: "🌲",
        description: "Fresh pine aroma. Promotes alertness and may improve memory.",
        taste: &["earthy", "fresh", "pine", "sharp", "woody"],
    },
    TerpeneInfo {
        name: "Caryophyllene",
        icon: "🌶️",
        description: "Spicy, peppery profile. Known for pain relief and anti-inflammatory properties. Binds to CB2 receptors.",
        taste: &["spicy", "woody", "earthy", "peppery"],
    },
    TerpeneInfo {
        name: "Linalool",
        icon: "🌸",
        description: "Floral and calming, lavender-like. Helps with anxiety and sleep.",
        taste: &["citrus", "floral", "herbal", "sweet"],
    },
    TerpeneInfo {
        name: "Humulene",
        icon: "🍺",
        description: "Hoppy and earthy. May help with appetite control and inflammation.",
        taste: &["woody", "earthy", "spicy", "hoppy"],
    },
    TerpeneInfo {
        name: "Terpinolene",
        icon: "🍏",
        description: "Complex aroma with floral and herbal notes. Sedative with antioxidant benefits.",
        taste: &["floral", "pine", "lime", "herbal"],
    },
    TerpeneInfo {
        name: "Ocimene",
        icon: "🌿",
        description: "Sweet and herbaceous. Known for antiviral and anti-inflammatory properties.",
        taste: &["citrus", "herbal", "sweet", "woody"],
    },
    TerpeneInfo {
        name: "Eucalyptol",
        icon: "🌿",
        description: "Fresh and minty. Supports respiratory health and cognitive function.",
        taste: &["cool", "fresh", "medicinal", "mint"],
    },
    TerpeneInfo {
        name: "Nerolidol",
        icon: "🌺",
        description: "Subtle floral aroma. Promotes restful sleep and has antifungal properties.",
        taste: &["apple", "citrus", "floral", "woody"],
    },
    TerpeneInfo {
        name: "Geraniol",
        icon: "🌹",
        description: "Sweet floral scent. Offers neuroprotective and antioxidant benefits.",
        taste: &["floral", "fruity", "sweet"],
    },
    TerpeneInfo {
        name: "Bisabolol",
        icon: "🌼",
        description: "Gentle floral aroma. Known for anti-inflammatory and skin healing properties.",
        taste: &["chamomile-like", "floral", "sweet"],
    },
    TerpeneInfo {
        name: "Farnesene",
        icon: "🍏",
        description: "Light citrus and green apple notes. Anti-inflammatory and antioxidant.",
        taste: &["citrus", "floral", "sweet", "woody"],
    },
    TerpeneInfo {
        name: "Phytol",
        icon: "🍵",
        description: "Grassy, floral aroma. Supports sleep and anxiety relief.",
        taste: &["balsamic", "floral", "grassy", "green"],
    },
    TerpeneInfo {
        name: "Sabinene",
        icon: "🌰",
        description: "Spicy woody aroma. Offers antioxidant and anti-inflammatory benefits.",
        taste: &["citrus", "spicy", "woody"],
    },
    TerpeneInfo {
        name: "Valencene",
        icon: "🍊",
        description: "Sweet citrus aroma. Known for anti-inflammatory and mood-lifting properties.",
        taste: &["citrus", "sweet"],
    },
];

/// Reference entry for `name`, matched case-insensitively; unknown terpenes get
/// a generic description.
#[must_use]
pub fn terpene_info(name: &str) -> &'static TerpeneInfo {
    TERPENE_INFO
        .iter()
        .find(|info| info.name.eq_ignore_ascii_case(name.trim()))
        .unwrap_or(&GENERIC_TERPENE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_survey_terpene_has_reference_info() {
        for terpene in TERPENES {
            assert_eq!(terpene_info(terpene).name, terpene);
        }
    }

    #[test]
    fn lookup_ignores_case_and_falls_back() {
        assert_eq!(terpene_info("myrcene").icon, "🥭");
        assert!(terpene_info("unobtanium").name.is_empty());
    }
}
