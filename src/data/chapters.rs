//! The 114 surahs with their canonical verse counts.

/// One chapter (surah) of the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chapter {
    /// 1-based chapter number.
    pub number: u16,
    /// Transliterated name, as the remote service spells it.
    pub english_name: &'static str,
    /// Arabic name, shown in the card footer.
    pub name: &'static str,
    /// Number of verses in this chapter.
    pub verse_count: u16,
}

/// Look up a chapter by its string id (the form stored in view state).
///
/// Returns `None` for anything that does not parse to a number in 1..=114.
pub fn chapter_by_id(id: &str) -> Option<&'static Chapter> {
    let number: usize = id.parse().ok()?;
    CHAPTERS.get(number.checked_sub(1)?)
}

pub static CHAPTERS: &[Chapter] = &[
    Chapter { number: 1, english_name: "Al-Faatiha", name: "الفاتحة", verse_count: 7 },
    Chapter { number: 2, english_name: "Al-Baqara", name: "البقرة", verse_count: 286 },
    Chapter { number: 3, english_name: "Aal-i-Imraan", name: "آل عمران", verse_count: 200 },
    Chapter { number: 4, english_name: "An-Nisaa", name: "النساء", verse_count: 176 },
    Chapter { number: 5, english_name: "Al-Maaida", name: "المائدة", verse_count: 120 },
    Chapter { number: 6, english_name: "Al-An'aam", name: "الأنعام", verse_count: 165 },
    Chapter { number: 7, english_name: "Al-A'raaf", name: "الأعراف", verse_count: 206 },
    Chapter { number: 8, english_name: "Al-Anfaal", name: "الأنفال", verse_count: 75 },
    Chapter { number: 9, english_name: "At-Tawba", name: "التوبة", verse_count: 129 },
    Chapter { number: 10, english_name: "Yunus", name: "يونس", verse_count: 109 },
    Chapter { number: 11, english_name: "Hud", name: "هود", verse_count: 123 },
    Chapter { number: 12, english_name: "Yusuf", name: "يوسف", verse_count: 111 },
    Chapter { number: 13, english_name: "Ar-Ra'd", name: "الرعد", verse_count: 43 },
    Chapter { number: 14, english_name: "Ibrahim", name: "ابراهيم", verse_count: 52 },
    Chapter { number: 15, english_name: "Al-Hijr", name: "الحجر", verse_count: 99 },
    Chapter { number: 16, english_name: "An-Nahl", name: "النحل", verse_count: 128 },
    Chapter { number: 17, english_name: "Al-Israa", name: "الإسراء", verse_count: 111 },
    Chapter { number: 18, english_name: "Al-Kahf", name: "الكهف", verse_count: 110 },
    Chapter { number: 19, english_name: "Maryam", name: "مريم", verse_count: 98 },
    Chapter { number: 20, english_name: "Taa-Haa", name: "طه", verse_count: 135 },
    Chapter { number: 21, english_name: "Al-Anbiyaa", name: "الأنبياء", verse_count: 112 },
    Chapter { number: 22, english_name: "Al-Hajj", name: "الحج", verse_count: 78 },
    Chapter { number: 23, english_name: "Al-Muminoon", name: "المؤمنون", verse_count: 118 },
    Chapter { number: 24, english_name: "An-Noor", name: "النور", verse_count: 64 },
    Chapter { number: 25, english_name: "Al-Furqaan", name: "الفرقان", verse_count: 77 },
    Chapter { number: 26, english_name: "Ash-Shu'araa", name: "الشعراء", verse_count: 227 },
    Chapter { number: 27, english_name: "An-Naml", name: "النمل", verse_count: 93 },
    Chapter { number: 28, english_name: "Al-Qasas", name: "القصص", verse_count: 88 },
    Chapter { number: 29, english_name: "Al-Ankaboot", name: "العنكبوت", verse_count: 69 },
    Chapter { number: 30, english_name: "Ar-Room", name: "الروم", verse_count: 60 },
    Chapter { number: 31, english_name: "Luqman", name: "لقمان", verse_count: 34 },
    Chapter { number: 32, english_name: "As-Sajda", name: "السجدة", verse_count: 30 },
    Chapter { number: 33, english_name: "Al-Ahzaab", name: "الأحزاب", verse_count: 73 },
    Chapter { number: 34, english_name: "Saba", name: "سبإ", verse_count: 54 },
    Chapter { number: 35, english_name: "Faatir", name: "فاطر", verse_count: 45 },
    Chapter { number: 36, english_name: "Yaseen", name: "يس", verse_count: 83 },
    Chapter { number: 37, english_name: "As-Saaffaat", name: "الصافات", verse_count: 182 },
    Chapter { number: 38, english_name: "Saad", name: "ص", verse_count: 88 },
    Chapter { number: 39, english_name: "Az-Zumar", name: "الزمر", verse_count: 75 },
    Chapter { number: 40, english_name: "Ghafir", name: "غافر", verse_count: 85 },
    Chapter { number: 41, english_name: "Fussilat", name: "فصلت", verse_count: 54 },
    Chapter { number: 42, english_name: "Ash-Shura", name: "الشورى", verse_count: 53 },
    Chapter { number: 43, english_name: "Az-Zukhruf", name: "الزخرف", verse_count: 89 },
    Chapter { number: 44, english_name: "Ad-Dukhaan", name: "الدخان", verse_count: 59 },
    Chapter { number: 45, english_name: "Al-Jaathiya", name: "الجاثية", verse_count: 37 },
    Chapter { number: 46, english_name: "Al-Ahqaf", name: "الأحقاف", verse_count: 35 },
    Chapter { number: 47, english_name: "Muhammad", name: "محمد", verse_count: 38 },
    Chapter { number: 48, english_name: "Al-Fath", name: "الفتح", verse_count: 29 },
    Chapter { number: 49, english_name: "Al-Hujuraat", name: "الحجرات", verse_count: 18 },
    Chapter { number: 50, english_name: "Qaaf", name: "ق", verse_count: 45 },
    Chapter { number: 51, english_name: "Adh-Dhaariyat", name: "الذاريات", verse_count: 60 },
    Chapter { number: 52, english_name: "At-Tur", name: "الطور", verse_count: 49 },
    Chapter { number: 53, english_name: "An-Najm", name: "النجم", verse_count: 62 },
    Chapter { number: 54, english_name: "Al-Qamar", name: "القمر", verse_count: 55 },
    Chapter { number: 55, english_name: "Ar-Rahmaan", name: "الرحمن", verse_count: 78 },
    Chapter { number: 56, english_name: "Al-Waaqia", name: "الواقعة", verse_count: 96 },
    Chapter { number: 57, english_name: "Al-Hadid", name: "الحديد", verse_count: 29 },
    Chapter { number: 58, english_name: "Al-Mujaadila", name: "المجادلة", verse_count: 22 },
    Chapter { number: 59, english_name: "Al-Hashr", name: "الحشر", verse_count: 24 },
    Chapter { number: 60, english_name: "Al-Mumtahana", name: "الممتحنة", verse_count: 13 },
    Chapter { number: 61, english_name: "As-Saff", name: "الصف", verse_count: 14 },
    Chapter { number: 62, english_name: "Al-Jumu'a", name: "الجمعة", verse_count: 11 },
    Chapter { number: 63, english_name: "Al-Munaafiqoon", name: "المنافقون", verse_count: 11 },
    Chapter { number: 64, english_name: "At-Taghaabun", name: "التغابن", verse_count: 18 },
    Chapter { number: 65, english_name: "At-Talaaq", name: "الطلاق", verse_count: 12 },
    Chapter { number: 66, english_name: "At-Tahrim", name: "التحريم", verse_count: 12 },
    Chapter { number: 67, english_name: "Al-Mulk", name: "الملك", verse_count: 30 },
    Chapter { number: 68, english_name: "Al-Qalam", name: "القلم", verse_count: 52 },
    Chapter { number: 69, english_name: "Al-Haaqqa", name: "الحاقة", verse_count: 52 },
    Chapter { number: 70, english_name: "Al-Ma'aarij", name: "المعارج", verse_count: 44 },
    Chapter { number: 71, english_name: "Nooh", name: "نوح", verse_count: 28 },
    Chapter { number: 72, english_name: "Al-Jinn", name: "الجن", verse_count: 28 },
    Chapter { number: 73, english_name: "Al-Muzzammil", name: "المزمل", verse_count: 20 },
    Chapter { number: 74, english_name: "Al-Muddaththir", name: "المدثر", verse_count: 56 },
    Chapter { number: 75, english_name: "Al-Qiyaama", name: "القيامة", verse_count: 40 },
    Chapter { number: 76, english_name: "Al-Insaan", name: "الانسان", verse_count: 31 },
    Chapter { number: 77, english_name: "Al-Mursalaat", name: "المرسلات", verse_count: 50 },
    Chapter { number: 78, english_name: "An-Naba", name: "النبإ", verse_count: 40 },
    Chapter { number: 79, english_name: "An-Naazi'aat", name: "النازعات", verse_count: 46 },
    Chapter { number: 80, english_name: "Abasa", name: "عبس", verse_count: 42 },
    Chapter { number: 81, english_name: "At-Takwir", name: "التكوير", verse_count: 29 },
    Chapter { number: 82, english_name: "Al-Infitaar", name: "الإنفطار", verse_count: 19 },
    Chapter { number: 83, english_name: "Al-Mutaffifin", name: "المطففين", verse_count: 36 },
    Chapter { number: 84, english_name: "Al-Inshiqaaq", name: "الإنشقاق", verse_count: 25 },
    Chapter { number: 85, english_name: "Al-Burooj", name: "البروج", verse_count: 22 },
    Chapter { number: 86, english_name: "At-Taariq", name: "الطارق", verse_count: 17 },
    Chapter { number: 87, english_name: "Al-A'laa", name: "الأعلى", verse_count: 19 },
    Chapter { number: 88, english_name: "Al-Ghaashiya", name: "الغاشية", verse_count: 26 },
    Chapter { number: 89, english_name: "Al-Fajr", name: "الفجر", verse_count: 30 },
    Chapter { number: 90, english_name: "Al-Balad", name: "البلد", verse_count: 20 },
    Chapter { number: 91, english_name: "Ash-Shams", name: "الشمس", verse_count: 15 },
    Chapter { number: 92, english_name: "Al-Lail", name: "الليل", verse_count: 21 },
    Chapter { number: 93, english_name: "Ad-Dhuhaa", name: "الضحى", verse_count: 11 },
    Chapter { number: 94, english_name: "Ash-Sharh", name: "الشرح", verse_count: 8 },
    Chapter { number: 95, english_name: "At-Tin", name: "التين", verse_count: 8 },
    Chapter { number: 96, english_name: "Al-Alaq", name: "العلق", verse_count: 19 },
    Chapter { number: 97, english_name: "Al-Qadr", name: "القدر", verse_count: 5 },
    Chapter { number: 98, english_name: "Al-Bayyina", name: "البينة", verse_count: 8 },
    Chapter { number: 99, english_name: "Az-Zalzala", name: "الزلزلة", verse_count: 8 },
    Chapter { number: 100, english_name: "Al-Aadiyaat", name: "العاديات", verse_count: 11 },
    Chapter { number: 101, english_name: "Al-Qaari'a", name: "القارعة", verse_count: 11 },
    Chapter { number: 102, english_name: "At-Takaathur", name: "التكاثر", verse_count: 8 },
    Chapter { number: 103, english_name: "Al-Asr", name: "العصر", verse_count: 3 },
    Chapter { number: 104, english_name: "Al-Humaza", name: "الهمزة", verse_count: 9 },
    Chapter { number: 105, english_name: "Al-Fil", name: "الفيل", verse_count: 5 },
    Chapter { number: 106, english_name: "Quraish", name: "قريش", verse_count: 4 },
    Chapter { number: 107, english_name: "Al-Maa'un", name: "الماعون", verse_count: 7 },
    Chapter { number: 108, english_name: "Al-Kawthar", name: "الكوثر", verse_count: 3 },
    Chapter { number: 109, english_name: "Al-Kaafiroon", name: "الكافرون", verse_count: 6 },
    Chapter { number: 110, english_name: "An-Nasr", name: "النصر", verse_count: 3 },
    Chapter { number: 111, english_name: "Al-Masad", name: "المسد", verse_count: 5 },
    Chapter { number: 112, english_name: "Al-Ikhlaas", name: "الإخلاص", verse_count: 4 },
    Chapter { number: 113, english_name: "Al-Falaq", name: "الفلق", verse_count: 5 },
    Chapter { number: 114, english_name: "An-Naas", name: "الناس", verse_count: 6 },
];
