//! Stopword filtering by set membership.

use crate::normalizer::Normalize;
use ahash::AHashSet;

/// Hindi function words.
pub const HINDI_STOPWORDS: &[&str] = &[
    "मैं", "मुझको", "मेरा", "अपने", "आप", "को", "हमने", "हमारा", "अपना", "हम", "आपका",
    "तुम्हारा", "स्वयं", "वह", "इसे", "उसके", "खुद", "कि", "उसकी", "उसका", "ही", "यह", "इसके",
    "उन्होने", "क्या", "जो", "किसे", "किसको", "ये", "हूँ", "होता", "है", "रहे", "थी", "थे",
    "होना", "गया", "किया", "जा", "रहा", "पडा", "होने", "करना", "करता है", "रही", "एक", "लेकिन",
    "अगर", "या", "क्यूंकि", "जैसा", "जब", "तक", "जबकि", "की", "पर", "द्वारा", "के लिए", "साथ",
    "के", "बारे", "में", "खिलाफ", "बीच", "से", "दौरान", "सेे", "के बाद", "ऊपर", "नीचे",
    "से नीचे", "करने में", "निकल", "बंद", "से अधिक", "तहत", "दुबारा", "आगे", "फिर", "एक बार",
    "यहाँ", "वहाँ", "कब", "कहाँ", "क्यों", "कैसे", "सारे", "किसी", "दोनो", "प्रत्येक",
    "ज्यादा", "अधिकांश", "अन्य", "में कुछ", "ऐसा", "में कोई", "मात्र", "समान", "इसलिए", "बहुत",
    "सकता", "जायेंगे", "जरा", "चाहिए", "अभी", "और", "कर दिया", "रखें", "का", "हैं", "इस",
    "करने", "ने", "बनी", "तो", "हो", "इसका", "था", "हुआ", "वाले", "बाद", "लिए", "सकते",
    "इसमें", "दो", "वे", "करते", "कहा", "वर्ग", "कई", "करें", "होती", "अपनी", "उनके", "यदि",
    "हुई", "कहते", "होते", "कोई", "हुए", "व", "जैसे", "सभी", "करता", "उनकी", "तरह", "उस",
    "आदि", "इसकी", "उनका", "इसी", "पे", "तथा", "भी", "परंतु", "इन", "कम", "दूर", "पूरे", "गये",
    "तुम", "मै", "यहां", "हुये", "कभी", "अथवा", "गयी", "प्रति", "जाता", "इन्हें", "गई", "अब",
    "जिसमें", "लिया", "बड़ा", "जाती", "तब", "उसे", "जाते", "लेकर", "बड़े", "दूसरे", "जाने",
    "बाहर", "स्थान", "उन्हें", "गए", "ऐसे", "जिससे", "समय", "दोनों", "किए", "रहती", "इनके",
    "इनका", "इनकी", "सकती", "आज", "कल", "जिन्हें", "जिन्हों", "तिन्हें", "तिन्हों", "किन्हों",
    "किन्हें", "इत्यादि", "इन्हों", "उन्हों", "बिलकुल", "निहायत", "इन्हीं", "उन्हीं", "जितना",
    "दूसरा", "कितना", "साबुत", "वग़ैरह", "कौनसा", "लिये", "दिया", "जिसे", "तिसे", "काफ़ी",
    "पहले", "बाला", "मानो", "अंदर", "भीतर", "पूरा", "सारा", "उनको", "वहीं", "जहाँ", "जीधर",
    "एवं", "कुछ", "कुल", "जिस", "जिन", "तिस", "तिन", "कौन", "किस", "संग", "यही", "बही", "उसी",
    "मगर", "कर", "मे", "एस", "उन", "सो", "अत",
];

/// A fixed set of tokens to drop.
#[derive(Debug, Clone, Default)]
pub struct StopwordFilter {
    words: AHashSet<String>,
}

impl StopwordFilter {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_string())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// The shipped Hindi list.
    pub fn hindi() -> Self {
        Self::new(HINDI_STOPWORDS)
    }

    /// The same list passed through `normalizer`, so that it matches tokens
    /// taken from normalized text.
    pub fn normalized_with<N: Normalize + ?Sized>(&self, normalizer: &N) -> Self {
        Self::new(self.words.iter().map(|w| normalizer.normalize(w)))
    }

    pub fn is_stopword(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    /// Keep the tokens that are not stopwords, in order.
    pub fn filter<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<String> {
        tokens
            .iter()
            .map(AsRef::as_ref)
            .filter(|t| !self.is_stopword(t))
            .map(str::to_string)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
