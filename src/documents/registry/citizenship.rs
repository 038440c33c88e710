//! Wniosek o stwierdzenie posiadania obywatelstwa polskiego: four-page layout.

use super::{
    Binding, ChoiceOption, DocumentSpec, FieldSpec, Footer, PageLayout, Paragraph, StaticRule,
    StaticText,
};
use crate::documents::kind::DocumentKind;
use crate::documents::pdf::canvas::PageSize;

const APPLICANT_NAME: Binding = Binding::Joined(&["applicant.firstName", "applicant.lastName"]);

const APPLICATION_TYPE: &[ChoiceOption] = &[
    ChoiceOption {
        label: "[ ] o stwierdzenie posiadania obywatelstwa polskiego (confirmation of citizenship)",
        x: 50.0,
        y: 712.0,
        mark: (50.0, 712.0),
        matches: &["confirmation", "posiadanie", "stwierdzenie posiadania"],
    },
    ChoiceOption {
        label: "[ ] o stwierdzenie utraty obywatelstwa polskiego (confirmation of loss)",
        x: 50.0,
        y: 692.0,
        mark: (50.0, 692.0),
        matches: &["loss", "utrata", "stwierdzenie utraty"],
    },
];

const GENDER: &[ChoiceOption] = &[
    ChoiceOption {
        label: "[ ] kobieta (female)",
        x: 160.0,
        y: 657.0,
        mark: (160.0, 657.0),
        matches: &["kobieta", "female", "f", "k", "woman"],
    },
    ChoiceOption {
        label: "[ ] mężczyzna (male)",
        x: 300.0,
        y: 657.0,
        mark: (300.0, 657.0),
        matches: &["mezczyzna", "male", "m", "man"],
    },
];

const MARITAL_STATUS: &[ChoiceOption] = &[
    ChoiceOption {
        label: "[ ] kawaler/panna (single)",
        x: 160.0,
        y: 607.0,
        mark: (160.0, 607.0),
        matches: &["single", "kawaler", "panna", "kawaler/panna"],
    },
    ChoiceOption {
        label: "[ ] żonaty/zamężna (married)",
        x: 340.0,
        y: 607.0,
        mark: (340.0, 607.0),
        matches: &["married", "zonaty", "zamezna", "mezatka", "zonaty/zamezna"],
    },
    ChoiceOption {
        label: "[ ] rozwiedziony/a (divorced)",
        x: 160.0,
        y: 590.0,
        mark: (160.0, 590.0),
        matches: &["divorced", "rozwiedziony", "rozwiedziona", "rozwiedziony/a"],
    },
    ChoiceOption {
        label: "[ ] wdowiec/wdowa (widowed)",
        x: 340.0,
        y: 590.0,
        mark: (340.0, 590.0),
        matches: &["widowed", "wdowiec", "wdowa", "wdowiec/wdowa"],
    },
];

const fn yes_no(y: f32) -> [ChoiceOption; 2] {
    [
        ChoiceOption {
            label: "[ ] tak (yes)",
            x: 370.0,
            y,
            mark: (370.0, y),
            matches: &["true", "tak", "yes"],
        },
        ChoiceOption {
            label: "[ ] nie (no)",
            x: 450.0,
            y,
            mark: (450.0, y),
            matches: &["false", "nie", "no"],
        },
    ]
}

const PREVIOUS_DECISION: &[ChoiceOption] = &yes_no(520.0);
const CITIZENSHIP_CHANGE: &[ChoiceOption] = &yes_no(420.0);

const APPLICANT_PAGE: PageLayout = PageLayout {
    size: PageSize::A4_PORTRAIT,
    texts: &[
        StaticText::bold("WNIOSEK", 267.0, 792.0, 16.0),
        StaticText::new("o stwierdzenie posiadania obywatelstwa polskiego", 157.0, 772.0, 12.0),
        StaticText::new("(application for confirmation of Polish citizenship)", 160.0, 757.0, 9.0),
        StaticText::new(
            "(wzór określony w rozporządzeniu MSWiA z dnia 3 maja 2012 r.)",
            50.0,
            742.0,
            8.0,
        ),
        StaticText::bold("WNIOSKODAWCA (APPLICANT):", 50.0, 650.0, 12.0),
        StaticText::bold("WNIOSEK DOTYCZY OSOBY (THE APPLICATION CONCERNS):", 50.0, 480.0, 12.0),
    ],
    paragraphs: &[],
    rules: &[],
    fields: &[&[
        FieldSpec::choice("", 50.0, 712.0, 0.0, APPLICATION_TYPE, Binding::Field("application.type")),
        FieldSpec::underlined("Imię i nazwisko:", 50.0, 620.0, 230.0, 137.0, APPLICANT_NAME),
        FieldSpec::underlined("Adres:", 300.0, 620.0, 250.0, 337.0, Binding::Field("applicant.address")),
        FieldSpec::underlined("Województwo:", 50.0, 595.0, 160.0, 112.0, Binding::Field("applicant.province")),
        FieldSpec::underlined("Gmina:", 220.0, 595.0, 160.0, 257.0, Binding::Field("applicant.municipality")),
        FieldSpec::underlined("Powiat:", 390.0, 595.0, 160.0, 432.0, Binding::Field("applicant.county")),
        FieldSpec::underlined("Ulica:", 50.0, 570.0, 200.0, 87.0, Binding::Field("applicant.street")),
        FieldSpec::underlined("Nr domu:", 270.0, 570.0, 100.0, 317.0, Binding::Field("applicant.houseNumber")),
        FieldSpec::underlined(
            "Nr mieszkania:",
            390.0,
            570.0,
            160.0,
            467.0,
            Binding::Field("applicant.apartmentNumber"),
        ),
        FieldSpec::underlined("Kod pocztowy:", 50.0, 545.0, 160.0, 122.0, Binding::Field("applicant.postalCode")),
        FieldSpec::underlined("Miasto:", 220.0, 545.0, 160.0, 262.0, Binding::Field("applicant.city")),
        FieldSpec::underlined("Telefon:", 390.0, 545.0, 160.0, 437.0, Binding::Field("applicant.phone")),
        FieldSpec::underlined("Imię i nazwisko:", 50.0, 450.0, 500.0, 137.0, APPLICANT_NAME),
        FieldSpec::boxed(
            "Dodatkowe informacje faktyczne (additional information):",
            50.0,
            420.0,
            500.0,
            60.0,
            Binding::Field("application.additionalInfo"),
        ),
        FieldSpec::boxed(
            "Cel, w jakim osoba trzecia występuje z wnioskiem (third-party purpose):",
            50.0,
            320.0,
            500.0,
            60.0,
            Binding::Field("application.thirdPartyPurpose"),
        ),
    ]],
};

const PERSONAL_PAGE: PageLayout = PageLayout {
    size: PageSize::A4_PORTRAIT,
    texts: &[
        StaticText::bold("CZĘŚĆ I", 50.0, 792.0, 14.0),
        StaticText::new(
            "Dane osoby, której dotyczy wniosek (personal data of the person concerned)",
            50.0,
            772.0,
            12.0,
        ),
        StaticText::bold("MATKA (MOTHER):", 50.0, 450.0, 12.0),
    ],
    paragraphs: &[],
    rules: &[],
    fields: &[
        &[
            FieldSpec::underlined("Nazwisko:", 50.0, 732.0, 230.0, 102.0, Binding::Field("applicant.lastName")),
            FieldSpec::underlined(
                "Nazwisko rodowe:",
                300.0,
                732.0,
                250.0,
                387.0,
                Binding::Field("applicant.maidenName"),
            ),
            FieldSpec::underlined("Imiona:", 50.0, 707.0, 230.0, 92.0, Binding::Field("applicant.firstName")),
            FieldSpec::underlined("Imię ojca:", 300.0, 707.0, 250.0, 357.0, Binding::Field("father.firstName")),
            FieldSpec::underlined(
                "Nazwisko rodowe matki:",
                50.0,
                682.0,
                230.0,
                167.0,
                Binding::Field("mother.maidenName"),
            ),
            FieldSpec::underlined(
                "Data urodzenia:",
                300.0,
                682.0,
                250.0,
                382.0,
                Binding::Field("applicant.birthDate"),
            ),
            FieldSpec::choice("Płeć:", 50.0, 657.0, 100.0, GENDER, Binding::Field("applicant.gender")),
            FieldSpec::underlined(
                "Miejsce urodzenia:",
                50.0,
                632.0,
                500.0,
                147.0,
                Binding::Field("applicant.birthPlace"),
            ),
            FieldSpec::choice(
                "Stan cywilny:",
                50.0,
                607.0,
                100.0,
                MARITAL_STATUS,
                Binding::Field("applicant.maritalStatus"),
            ),
            FieldSpec::underlined("PESEL:", 50.0, 565.0, 230.0, 87.0, Binding::Field("applicant.pesel")),
            FieldSpec::underlined(
                "Używane nazwiska:",
                300.0,
                565.0,
                250.0,
                392.0,
                Binding::Field("applicant.usedSurnames"),
            ),
            FieldSpec::boxed(
                "Obywatelstwa obce z datami (foreign citizenships with dates):",
                50.0,
                535.0,
                500.0,
                40.0,
                Binding::Field("applicant.foreignCitizenships"),
            ),
        ],
        &[
            FieldSpec::underlined("Nazwisko:", 50.0, 425.0, 230.0, 102.0, Binding::Field("mother.lastName")),
            FieldSpec::underlined(
                "Nazwisko rodowe:",
                300.0,
                425.0,
                250.0,
                387.0,
                Binding::Field("mother.maidenName"),
            ),
            FieldSpec::underlined("Imiona:", 50.0, 400.0, 230.0, 92.0, Binding::Field("mother.firstName")),
            FieldSpec::underlined("Data urodzenia:", 300.0, 400.0, 250.0, 382.0, Binding::Field("mother.birthDate")),
            FieldSpec::underlined(
                "Miejsce urodzenia:",
                50.0,
                375.0,
                500.0,
                147.0,
                Binding::Field("mother.birthPlace"),
            ),
            FieldSpec::underlined(
                "Stan cywilny:",
                50.0,
                350.0,
                230.0,
                122.0,
                Binding::Field("mother.maritalStatus"),
            ),
            FieldSpec::underlined("PESEL:", 300.0, 350.0, 250.0, 337.0, Binding::Field("mother.pesel")),
            FieldSpec::underlined(
                "Data zawarcia małżeństwa:",
                50.0,
                325.0,
                230.0,
                182.0,
                Binding::Field("mother.marriageDate"),
            ),
            FieldSpec::underlined(
                "Miejsce zawarcia małżeństwa:",
                300.0,
                325.0,
                250.0,
                447.0,
                Binding::Field("mother.marriagePlace"),
            ),
            FieldSpec::underlined(
                "Imię ojca matki:",
                50.0,
                300.0,
                230.0,
                137.0,
                Binding::Field("motherGrandpa.firstName"),
            ),
            FieldSpec::underlined(
                "Nazwisko rodowe jej matki:",
                300.0,
                300.0,
                250.0,
                437.0,
                Binding::Field("motherGrandma.maidenName"),
            ),
            FieldSpec::underlined(
                "Obywatelstwa przy urodzeniu:",
                50.0,
                275.0,
                500.0,
                197.0,
                Binding::Field("mother.citizenshipAtBirth"),
            ),
            FieldSpec::underlined(
                "Używane nazwiska:",
                50.0,
                250.0,
                500.0,
                142.0,
                Binding::Field("mother.usedSurnames"),
            ),
        ],
    ],
};

const FATHER_PAGE: PageLayout = PageLayout {
    size: PageSize::A4_PORTRAIT,
    texts: &[
        StaticText::bold("OJCIEC (FATHER):", 50.0, 792.0, 12.0),
        StaticText::bold(
            "CZĘŚĆ II - INFORMACJE DODATKOWE (ADDITIONAL INFORMATION)",
            50.0,
            550.0,
            12.0,
        ),
    ],
    paragraphs: &[],
    rules: &[],
    fields: &[
        &[
            FieldSpec::underlined("Nazwisko:", 50.0, 767.0, 230.0, 102.0, Binding::Field("father.lastName")),
            FieldSpec::underlined(
                "Nazwisko rodowe:",
                300.0,
                767.0,
                250.0,
                387.0,
                Binding::Field("father.maidenName"),
            ),
            FieldSpec::underlined("Imiona:", 50.0, 742.0, 230.0, 92.0, Binding::Field("father.firstName")),
            FieldSpec::underlined("Data urodzenia:", 300.0, 742.0, 250.0, 382.0, Binding::Field("father.birthDate")),
            FieldSpec::underlined(
                "Miejsce urodzenia:",
                50.0,
                717.0,
                500.0,
                147.0,
                Binding::Field("father.birthPlace"),
            ),
            FieldSpec::underlined(
                "Stan cywilny:",
                50.0,
                692.0,
                230.0,
                122.0,
                Binding::Field("father.maritalStatus"),
            ),
            FieldSpec::underlined("PESEL:", 300.0, 692.0, 250.0, 337.0, Binding::Field("father.pesel")),
            FieldSpec::underlined(
                "Data zawarcia małżeństwa:",
                50.0,
                667.0,
                230.0,
                182.0,
                Binding::Field("father.marriageDate"),
            ),
            FieldSpec::underlined(
                "Miejsce zawarcia małżeństwa:",
                300.0,
                667.0,
                250.0,
                447.0,
                Binding::Field("father.marriagePlace"),
            ),
            FieldSpec::underlined(
                "Imię ojca ojca:",
                50.0,
                642.0,
                230.0,
                132.0,
                Binding::Field("fatherGrandpa.firstName"),
            ),
            FieldSpec::underlined(
                "Nazwisko rodowe jego matki:",
                300.0,
                642.0,
                250.0,
                442.0,
                Binding::Field("fatherGrandma.maidenName"),
            ),
            FieldSpec::underlined(
                "Obywatelstwa przy urodzeniu:",
                50.0,
                617.0,
                500.0,
                197.0,
                Binding::Field("father.citizenshipAtBirth"),
            ),
            FieldSpec::underlined(
                "Używane nazwiska:",
                50.0,
                592.0,
                500.0,
                142.0,
                Binding::Field("father.usedSurnames"),
            ),
        ],
        &[
            FieldSpec::choice(
                "Wcześniejsza decyzja w sprawie obywatelstwa:",
                50.0,
                520.0,
                300.0,
                PREVIOUS_DECISION,
                Binding::Field("application.previousDecision"),
            ),
            FieldSpec::boxed(
                "Szczegóły decyzji (decision details):",
                50.0,
                495.0,
                500.0,
                40.0,
                Binding::Field("application.previousDecisionDetails"),
            ),
            FieldSpec::choice(
                "Wniosek o zmianę obywatelstwa:",
                50.0,
                420.0,
                250.0,
                CITIZENSHIP_CHANGE,
                Binding::Field("application.citizenshipChange"),
            ),
            FieldSpec::boxed(
                "Szczegóły (details):",
                50.0,
                395.0,
                500.0,
                40.0,
                Binding::Field("application.citizenshipChangeDetails"),
            ),
            FieldSpec::boxed(
                "Historia zamieszkania (residence history):",
                50.0,
                320.0,
                500.0,
                60.0,
                Binding::Field("application.residenceHistory"),
            ),
        ],
    ],
};

const GRANDPARENTS_PAGE: PageLayout = PageLayout {
    size: PageSize::A4_PORTRAIT,
    texts: &[
        StaticText::bold("DZIADKOWIE (GRANDPARENTS):", 50.0, 792.0, 12.0),
        StaticText::new("Ze strony matki (maternal side):", 50.0, 762.0, 10.0),
        StaticText::new("Ze strony ojca (paternal side):", 50.0, 652.0, 10.0),
        StaticText::bold("OŚWIADCZENIE (DECLARATION)", 50.0, 520.0, 12.0),
        StaticText::new(
            "Data i podpis wnioskodawcy (date and signature of the applicant):",
            50.0,
            200.0,
            10.0,
        ),
        StaticText::new("(data)", 50.0, 145.0, 8.0),
        StaticText::new("(podpis)", 400.0, 145.0, 8.0),
    ],
    paragraphs: &[Paragraph::new(
        &[
            "Oświadczam, że dane zawarte we wniosku są zgodne z prawdą.",
            "(I declare that the information provided in this application is true.)",
        ],
        50.0,
        495.0,
        10.0,
        15.0,
    )],
    rules: &[
        StaticRule::new((50.0, 160.0), (200.0, 160.0), 1.0),
        StaticRule::new((300.0, 160.0), (500.0, 160.0), 1.0),
    ],
    fields: &[
        &[
            FieldSpec::underlined(
                "Dziadek - imiona i nazwisko:",
                50.0,
                742.0,
                500.0,
                250.0,
                Binding::Joined(&["motherGrandpa.firstName", "motherGrandpa.lastName"]),
            ),
            FieldSpec::underlined(
                "Data i miejsce urodzenia:",
                50.0,
                722.0,
                500.0,
                250.0,
                Binding::Joined(&["motherGrandpa.birthDate", "motherGrandpa.birthPlace"]),
            ),
            FieldSpec::underlined(
                "Babka - imiona i nazwisko rodowe:",
                50.0,
                702.0,
                500.0,
                250.0,
                Binding::Joined(&["motherGrandma.firstName", "motherGrandma.maidenName"]),
            ),
            FieldSpec::underlined(
                "Data i miejsce urodzenia:",
                50.0,
                682.0,
                500.0,
                250.0,
                Binding::Joined(&["motherGrandma.birthDate", "motherGrandma.birthPlace"]),
            ),
        ],
        &[
            FieldSpec::underlined(
                "Dziadek - imiona i nazwisko:",
                50.0,
                632.0,
                500.0,
                250.0,
                Binding::Joined(&["fatherGrandpa.firstName", "fatherGrandpa.lastName"]),
            ),
            FieldSpec::underlined(
                "Data i miejsce urodzenia:",
                50.0,
                612.0,
                500.0,
                250.0,
                Binding::Joined(&["fatherGrandpa.birthDate", "fatherGrandpa.birthPlace"]),
            ),
            FieldSpec::underlined(
                "Babka - imiona i nazwisko rodowe:",
                50.0,
                592.0,
                500.0,
                250.0,
                Binding::Joined(&["fatherGrandma.firstName", "fatherGrandma.maidenName"]),
            ),
            FieldSpec::underlined(
                "Data i miejsce urodzenia:",
                50.0,
                572.0,
                500.0,
                250.0,
                Binding::Joined(&["fatherGrandma.birthDate", "fatherGrandma.birthPlace"]),
            ),
        ],
        &[FieldSpec::bare(50.0, 165.0, 10.0, Binding::Field("document.date"))],
    ],
};

pub static CITIZENSHIP_APPLICATION: DocumentSpec = DocumentSpec {
    kind: DocumentKind::CitizenshipApplication,
    title: "Wniosek o stwierdzenie posiadania obywatelstwa polskiego",
    pages: &[&APPLICANT_PAGE, &PERSONAL_PAGE, &FATHER_PAGE, &GRANDPARENTS_PAGE],
    footer: Some(Footer {
        caption: None,
        y: 30.0,
        size: 8.0,
    }),
    template: None,
};
