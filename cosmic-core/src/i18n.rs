use std::fmt;
use std::str::FromStr;

use crate::codec::{LANGUAGE_KEY, load_or_default};
use crate::error::{CosmicError, Result};
use crate::store::KvStore;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    En,
    Ar,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    /// Text direction for the document root.
    pub fn dir(self) -> &'static str {
        match self {
            Language::En => "ltr",
            Language::Ar => "rtl",
        }
    }

    pub fn load(store: &dyn KvStore) -> Self {
        load_or_default(
            store,
            LANGUAGE_KEY,
            |key, raw| {
                raw.parse::<Language>()
                    .map_err(|_| CosmicError::corrupt(key, format!("language {raw:?}")))
            },
            Language::default(),
        )
    }

    pub fn save(self, store: &dyn KvStore) -> Result<()> {
        store.set(LANGUAGE_KEY, self.code())
    }
}

impl FromStr for Language {
    type Err = CosmicError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "en" => Ok(Language::En),
            "ar" => Ok(Language::Ar),
            other => Err(CosmicError::Format(format!("unsupported language {other:?}"))),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// (key, en, ar)
const STRINGS: &[(&str, &str, &str)] = &[
    ("dashboard.greeting", "Welcome Back,", "مرحباً بك،"),
    ("dashboard.continueReading", "Continue Reading", "متابعة القراءة"),
    ("dashboard.searchPlaceholder", "Search subjects...", "بحث عن المواد..."),
    ("dashboard.examCountdown", "Exam Countdown", "العد التنازلي للاختبارات"),
    ("dashboard.daysLeft", "Days Left", "أيام متبقية"),
    ("dashboard.nextExam", "Next: ", "التالي: "),
    ("dashboard.noExams", "No upcoming exams", "لا توجد اختبارات قادمة"),
    ("viewer.zenMode", "Zen Mode", "وضع التركيز"),
    ("viewer.exitZen", "Exit Zen Mode (Esc)", "خروج من وضع التركيز (Esc)"),
    ("viewer.page", "Page", "صفحة"),
    ("viewer.bookmark", "Bookmark", "إشارة مرجعية"),
    ("gen.loading", "Loading...", "جاري التحميل..."),
    ("gen.back", "Back", "رجوع"),
    ("gen.home", "Home", "الرئيسية"),
    ("gen.language", "Language", "اللغة"),
];

/// Looks up a UI string; unknown keys come back unchanged.
pub fn translate(key: &str, lang: Language) -> &str {
    STRINGS
        .iter()
        .find(|(k, _, _)| *k == key)
        .map(|(_, en, ar)| match lang {
            Language::En => *en,
            Language::Ar => *ar,
        })
        .unwrap_or(key)
}
