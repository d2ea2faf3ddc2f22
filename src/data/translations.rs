//! Translation editions understood by the remote verse service.

/// One translation edition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translation {
    /// Edition identifier used in the request path (e.g. `en.asad`).
    pub identifier: &'static str,
    /// Translator name shown in the picker.
    pub english_name: &'static str,
    /// Language of the rendering.
    pub language: &'static str,
}

/// Look up a translation by identifier. Empty ids mean "no translation".
pub fn translation_by_id(id: &str) -> Option<&'static Translation> {
    TRANSLATIONS.iter().find(|t| t.identifier == id)
}

pub static TRANSLATIONS: &[Translation] = &[
    Translation { identifier: "en.asad", english_name: "Muhammad Asad", language: "English" },
    Translation { identifier: "en.pickthall", english_name: "Mohammed Marmaduke William Pickthall", language: "English" },
    Translation { identifier: "en.sahih", english_name: "Saheeh International", language: "English" },
    Translation { identifier: "en.yusufali", english_name: "Abdullah Yusuf Ali", language: "English" },
    Translation { identifier: "en.ahmedali", english_name: "Ahmed Ali", language: "English" },
    Translation { identifier: "en.hilali", english_name: "Hilali & Khan", language: "English" },
    Translation { identifier: "fr.hamidullah", english_name: "Muhammad Hamidullah", language: "French" },
    Translation { identifier: "de.aburida", english_name: "Abu Rida Muhammad ibn Ahmad", language: "German" },
    Translation { identifier: "es.cortes", english_name: "Julio Cortes", language: "Spanish" },
    Translation { identifier: "id.indonesian", english_name: "Bahasa Indonesia", language: "Indonesian" },
    Translation { identifier: "tr.diyanet", english_name: "Diyanet İşleri", language: "Turkish" },
    Translation { identifier: "ur.jalandhry", english_name: "Fateh Muhammad Jalandhry", language: "Urdu" },
    Translation { identifier: "ru.kuliev", english_name: "Elmir Kuliev", language: "Russian" },
    Translation { identifier: "ml.abdulhameed", english_name: "Abdul Hameed & Kunhi Mohammed", language: "Malayalam" },
    Translation { identifier: "bn.bengali", english_name: "Muhiuddin Khan", language: "Bengali" },
];
