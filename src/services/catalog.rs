use crate::models::PersonalityType;

/// Reference interests for codes the catalog does not know
pub const FALLBACK_CATALOG: &[&str] = &["Membaca", "Traveling", "Musik"];

/// Ordered reference interests for a known personality type
pub fn interests_for(personality: PersonalityType) -> &'static [&'static str] {
    match personality {
        PersonalityType::Intj => &["Membaca", "Catur", "Strategi Game", "Pemrograman", "Investasi Saham"],
        PersonalityType::Intp => &["Coding", "Video Game", "Fisika/Sains", "Debat Filosofi", "Menulis Sci-Fi"],
        PersonalityType::Entj => &["Public Speaking", "Manajemen Bisnis", "Olahraga Kompetitif", "Networking"],
        PersonalityType::Entp => &["Debat", "Traveling", "Stand-up Comedy", "Entrepreneurship", "Trivia"],
        PersonalityType::Infj => &["Menulis", "Psikologi", "Meditasi", "Museum Seni", "Relawan Sosial"],
        PersonalityType::Infp => &["Puisi", "Fotografi", "Musik (Indie)", "Cosplay", "Daydreaming"],
        PersonalityType::Enfj => &["Mentoring", "Event Organizing", "Memasak", "Klub Buku"],
        PersonalityType::Enfp => &["Seni Teater", "Blogging", "Alat Musik", "Festival Musik", "Backpacker"],
        PersonalityType::Istj => &["Sejarah", "Akuntansi", "Golf", "DIY (Perbaikan)", "Koleksi Barang"],
        PersonalityType::Isfj => &["Berkebun", "Memasak/Baking", "Kerajinan Tangan", "Menonton Film"],
        PersonalityType::Estj => &["Organisasi Komunitas", "Olahraga Tim", "Manajemen Proyek", "Acara Amal"],
        PersonalityType::Esfj => &["Hosting Pesta", "Belanja", "Dekorasi Rumah", "Dinamika Sosial"],
        PersonalityType::Istp => &["Otomotif", "Extreme Sports", "Pertukangan", "Teknisi"],
        PersonalityType::Isfp => &["Melukis/Sketsa", "Fashion", "Mendaki Gunung", "Fotografi Alam", "Keramik"],
        PersonalityType::Estp => &["Olahraga Ekstrem", "Pesta/Klubbing", "Gadget Baru", "Negosiasi"],
        PersonalityType::Esfp => &["Menari/Dance", "Performing Arts", "Jalan-jalan Spontan", "Fashion Styling"],
    }
}

/// Looks up reference interests by upper-cased code
///
/// Unknown or malformed codes get [`FALLBACK_CATALOG`]; this never fails.
pub fn reference_interests(code: &str) -> &'static [&'static str] {
    code.parse::<PersonalityType>()
        .map(interests_for)
        .unwrap_or(FALLBACK_CATALOG)
}
