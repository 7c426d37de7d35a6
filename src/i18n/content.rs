/// Localized content block for a single language
///
/// Text is stored exactly as authored: line breaks and `**emphasis**`
/// markers are kept so the rendering layer can display it verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedContent {
    /// ISO 639-1 code this block belongs to (e.g., "en", "hi")
    pub language_code: &'static str,

    /// Numbered parenting guidelines, one per line
    pub guidelines: &'static str,
}

// ==================== English Content ====================

/// English guidelines (default language)
pub const ENGLISH_CONTENT: LocalizedContent = LocalizedContent {
    language_code: "en",
    guidelines: "1. Breastfeed exclusively for the first 6 months.\n\
2. Follow the **vaccination schedule** recommended by your pediatrician.\n\
3. Always put your baby to sleep **on their back** in a safe, uncluttered crib.\n\
4. Keep the umbilical cord stump clean and dry until it falls off.\n\
5. Wash your hands before holding, bathing or feeding your baby.\n\
6. Start complementary foods at 6 months while continuing to breastfeed.\n\
7. Track weight, growth and developmental milestones at every check-up.\n\
8. Seek medical help **immediately** if your baby has a fever, trouble breathing or refuses to feed.\n\
9. Talk, sing and play with your baby every day and give plenty of skin-to-skin contact.\n\
10. Look after your own health and rest, and ask family for support when you need it.",
};

// ==================== Hindi Content ====================

/// Hindi guidelines
pub const HINDI_CONTENT: LocalizedContent = LocalizedContent {
    language_code: "hi",
    guidelines: "1. पहले 6 महीनों तक बच्चे को केवल स्तनपान कराएं।\n\
2. **टीकाकरण शेड्यूल का पालन करें** और कोई भी टीका न छोड़ें।\n\
3. बच्चे को हमेशा **पीठ के बल** एक सुरक्षित और साफ पालने में सुलाएं।\n\
4. नाभि नाल के ठूंठ को गिरने तक साफ और सूखा रखें।\n\
5. बच्चे को गोद में लेने, नहलाने या खिलाने से पहले हाथ धोएं।\n\
6. 6 महीने पूरे होने पर स्तनपान जारी रखते हुए पूरक आहार शुरू करें।\n\
7. हर जांच में बच्चे के वज़न, विकास और पड़ावों पर नज़र रखें।\n\
8. बुखार, सांस लेने में तकलीफ या दूध न पीने पर **तुरंत** डॉक्टर से संपर्क करें।\n\
9. रोज़ बच्चे से बात करें, गाना गाएं, खेलें और त्वचा से त्वचा का संपर्क दें।\n\
10. अपने स्वास्थ्य और आराम का भी ध्यान रखें, और ज़रूरत पड़ने पर परिवार से मदद लें।",
};
