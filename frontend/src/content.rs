//! Fixed page copy. Everything here is rendered verbatim and in order.

use crate::components::icons::Icon;

#[derive(Debug, PartialEq)]
pub struct OnboardingStep {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

#[derive(Debug, PartialEq)]
pub struct FeatureEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

#[derive(Debug, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct VideoStat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const STEPS: &[OnboardingStep] = &[
    OnboardingStep {
        title: "Ustvarite svoj profil",
        description: "Registrirajte se z e-poštnim naslovom in vzpostavite varno digitalno okolje za svoje zadeve.",
        icon: Icon::Shield,
    },
    OnboardingStep {
        title: "Uvozite svoje dokumente",
        description: "Varno naložite pravne dokumente, pogodbe ali sodno prakso, ki jih želite analizirati z uporabo Lexore.",
        icon: Icon::FileText,
    },
    OnboardingStep {
        title: "Začnite z delom",
        description: "Uporabite moč AI za pripravo osnutkov, iskanje po dokumentih in hitro analizo kompleksnih pravnih vprašanj.",
        icon: Icon::Zap,
    },
];

pub const FEATURES: &[FeatureEntry] = &[
    FeatureEntry {
        title: "Analiza in razumevanje dokumentov",
        description: "Lexora hitro pregleda pogodbe, sodbe ali vloge, izpostavi ključne točke, tveganja in pravna vprašanja ter pripravi jasen povzetek.",
        icon: Icon::Search,
    },
    FeatureEntry {
        title: "Priprava osnutkov pravnih dokumentov",
        description: "Na podlagi vaših navodil in dejstev zadeve pripravi strukturirane osnutke tožb, odgovorov, pogodb ali pravnih mnenj.",
        icon: Icon::FileText,
    },
    FeatureEntry {
        title: "Iskanje zakonodaje in sodne prakse",
        description: "Poišče relevantne člene zakonov in sodne odločbe glede na konkretno situacijo ter povzame bistvena pravna stališča.",
        icon: Icon::BookOpen,
    },
    FeatureEntry {
        title: "Oblikovanje pravne argumentacije",
        description: "Pomaga razviti jasno, logično in prepričljivo argumentacijo ter predlaga možne protiargumente.",
        icon: Icon::Shield,
    },
    FeatureEntry {
        title: "Pregled in optimizacija klavzul",
        description: "Analizira posamezne pogodbene določbe, opozori na tveganja ter predlaga izboljšave ali alternativne formulacije.",
        icon: Icon::MessageSquare,
    },
    FeatureEntry {
        title: "In še veliko več",
        description: "Od klepeta z dokumenti, preverjanja skladnosti in priprave povzetkov do podpore pri vsakodnevnih pravnih opravilih - Lexora je vaš AI asistent skozi celoten delovni proces.",
        icon: Icon::Scale,
    },
];

pub const FAQS: &[FaqEntry] = &[
    FaqEntry {
        question: "1. Kaj je Lexora?",
        answer: "Lexora je AI pravni agent, zasnovan posebej za pravnike in odvetnike. Združuje napredne modele umetne inteligence z dostopom do slovenske in evropske zakonodaje ter sodne prakse ter vam pomaga pri analizi, raziskavi in pripravi dokumentov.",
    },
    FaqEntry {
        question: "2. Kako se Lexora razlikuje od generičnih AI orodij?",
        answer: "Lexora ni splošen chatbot. Deluje znotraj vaših konkretnih zadev, analizira naložene dokumente in jih povezuje z veljavno zakonodajo ter sodno prakso. Razvita je za profesionalno uporabo v pravnem okolju.",
    },
    // TODO: answer duplicates the onboarding copy about the video guide; needs real security copy from the product team.
    FaqEntry {
        question: "3. Ali so moji podatki varni?",
        answer: "Platforma je zasnovana intuitivno. Večina uporabnikov postane popolnoma suverenih že po ogledu 5-minutnega video vodiča.",
    },
    FaqEntry {
        question: "4. Ali Lexora nadomešča pravnika?",
        answer: "Ne. Lexora je orodje za podporo odločanju in povečanje učinkovitosti. Končna presoja, strategija in odgovornost vedno ostanejo v rokah pravnika.",
    },
    FaqEntry {
        question: "5. Katere naloge lahko z Lexoro avtomatiziram?",
        answer: "Pripravo osnutkov, povzetkov, analizo pogodb, preverjanje klavzul, iskanje sodne prakse, oblikovanje argumentacije ter odgovarjanje na pravna vprašanja na podlagi dokumentov vaše zadeve.",
    },
    FaqEntry {
        question: "6. Kako začnem uporabljati Lexoro?",
        answer: "Ustvarite profil, odprite novo zadevo in naložite dokumente. Nato lahko začnete z analizo, pripravo osnutkov ali raziskavo. Priporočamo, da Lexoro preizkusite na čim več korakih svojega delovnega procesa, da v celoti izkoristite njen potencial.",
    },
];

pub const VIDEO_STATS: &[VideoStat] = &[
    VideoStat { value: "10 minut", label: "Trajanje vodiča" },
    VideoStat { value: "Vsi ključni moduli", label: "Pokrita vsebina" },
    VideoStat { value: "Takojšnja uporaba", label: "Cilj izobraževanja" },
];

pub const TIP_CHECKLIST: &[&str] = &[
    "Delo znotraj konkretne pravne zadeve",
    "Povezava z zakonodajo in sodno prakso",
    "Varnost in zaupnost na profesionalni ravni",
];

/// Section anchors shared by the nav links and the section ids.
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const SECTION_LINKS: &[NavLink] = &[
    NavLink { label: "Video vodič", href: "#video" },
    NavLink { label: "Postopek", href: "#koraki" },
    NavLink { label: "Funkcionalnosti", href: "#funkcije" },
];

pub const CTA_LABEL: &str = "Preizkusi Lexoro";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_lengths() {
        assert_eq!(STEPS.len(), 3);
        assert_eq!(FEATURES.len(), 6);
        assert_eq!(FAQS.len(), 6);
        assert_eq!(VIDEO_STATS.len(), 3);
        assert_eq!(TIP_CHECKLIST.len(), 3);
    }

    #[test]
    fn test_no_empty_copy() {
        for step in STEPS {
            assert!(!step.title.is_empty() && !step.description.is_empty());
        }
        for feature in FEATURES {
            assert!(!feature.title.is_empty() && !feature.description.is_empty());
        }
        for faq in FAQS {
            assert!(!faq.question.is_empty() && !faq.answer.is_empty());
        }
    }

    #[test]
    fn test_faq_questions_are_numbered_in_order() {
        for (index, faq) in FAQS.iter().enumerate() {
            assert!(faq.question.starts_with(&format!("{}. ", index + 1)));
        }
    }

    #[test]
    fn test_section_links_are_anchors() {
        for link in SECTION_LINKS {
            assert!(link.href.starts_with('#'));
        }
    }
}
