//! Pełnomocnictwo (power of attorney) layouts for the four variants, plus the
//! form-field table shared by template fill and template overlay.

use super::{Binding, DocumentSpec, FieldSpec, Footer, PageLayout, Paragraph, StaticRule, StaticText};
use crate::documents::kind::{DocumentKind, PoaVariant};
use crate::documents::pdf::canvas::PageSize;

const TITLE: &str = "Pełnomocnictwo (Power of Attorney)";

const APPLICANT_NAME: Binding = Binding::Joined(&["applicant.firstName", "applicant.lastName"]);
const SPOUSE_NAME: Binding = Binding::Joined(&["spouse.firstName", "spouse.lastName"]);
const CHILD_NAME: Binding = Binding::Joined(&["child.firstName", "child.lastName"]);

const HEADER: StaticText = StaticText::bold(TITLE, 200.0, 750.0, 16.0);

/// A named AcroForm field of the fillable templates and the anchor used when
/// the same value has to be drawn over the template instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemplateBinding {
    pub field: &'static str,
    pub binding: Binding,
    /// Looked up only when the bound value is present.
    pub optional: bool,
    pub anchor: (f32, f32),
    pub bold: bool,
}

pub const TEMPLATE_TEXT_SIZE: f32 = 11.0;

pub const TEMPLATE_BINDINGS: &[TemplateBinding] = &[
    TemplateBinding {
        field: "imie_nazwisko_wniosko",
        binding: APPLICANT_NAME,
        optional: false,
        anchor: (242.0, 672.0),
        bold: true,
    },
    TemplateBinding {
        field: "nr_dok_tozsamosci",
        binding: Binding::Field("applicant.passportNumber"),
        optional: false,
        anchor: (242.0, 624.0),
        bold: true,
    },
    TemplateBinding {
        field: "imie_nazwisko_dziecka",
        binding: CHILD_NAME,
        optional: true,
        anchor: (243.0, 519.0),
        bold: true,
    },
    TemplateBinding {
        field: "data_pelnomocnictwa",
        binding: Binding::Field("document.date"),
        optional: false,
        anchor: (72.0, 217.0),
        bold: false,
    },
];

const fn identity_block(
    name: Binding,
    birth_date: &'static str,
    birth_place: &'static str,
    address: &'static str,
    document: &'static str,
) -> [FieldSpec; 5] {
    [
        FieldSpec::captioned("imię i nazwisko / full name:", 100.0, 675.0, 300.0, 11.0, name),
        FieldSpec::captioned(
            "data urodzenia / date of birth:",
            100.0,
            650.0,
            300.0,
            11.0,
            Binding::Field(birth_date),
        ),
        FieldSpec::captioned(
            "miejsce urodzenia / place of birth:",
            100.0,
            625.0,
            300.0,
            11.0,
            Binding::Field(birth_place),
        ),
        FieldSpec::captioned("adres / address:", 100.0, 600.0, 300.0, 11.0, Binding::Field(address)),
        FieldSpec::captioned(
            "nr dokumentu / document no.:",
            100.0,
            575.0,
            300.0,
            11.0,
            Binding::Field(document),
        ),
    ]
}

const fn attorney_block(rows: [f32; 3]) -> [FieldSpec; 3] {
    [
        FieldSpec::captioned(
            "pełnomocnik / attorney:",
            100.0,
            rows[0],
            300.0,
            11.0,
            Binding::Field("attorney.fullName"),
        ),
        FieldSpec::captioned(
            "nr dokumentu / document no.:",
            100.0,
            rows[1],
            300.0,
            11.0,
            Binding::Field("attorney.documentNumber"),
        ),
        FieldSpec::captioned(
            "adres / address:",
            100.0,
            rows[2],
            300.0,
            11.0,
            Binding::Field("attorney.address"),
        ),
    ]
}

const APPLICANT_IDENTITY: &[FieldSpec] = &identity_block(
    APPLICANT_NAME,
    "applicant.birthDate",
    "applicant.birthPlace",
    "applicant.address",
    "applicant.passportNumber",
);

const SPOUSE_IDENTITY: &[FieldSpec] = &identity_block(
    SPOUSE_NAME,
    "spouse.birthDate",
    "spouse.birthPlace",
    "spouse.address",
    "spouse.passportNumber",
);

const ATTORNEY: &[FieldSpec] = &attorney_block([510.0, 485.0, 460.0]);
const MINOR_ATTORNEY: &[FieldSpec] = &attorney_block([425.0, 400.0, 375.0]);

const UNDERSIGNED: StaticText = StaticText::new("Ja, niżej podpisany/a (I, the undersigned):", 50.0, 700.0, 11.0);

const PRINCIPAL_PAGE: PageLayout = PageLayout {
    size: PageSize::A4_PORTRAIT,
    texts: &[
        HEADER,
        UNDERSIGNED,
        StaticText::bold("upoważniam (hereby authorise):", 50.0, 535.0, 11.0),
    ],
    paragraphs: &[],
    rules: &[],
    fields: &[APPLICANT_IDENTITY, ATTORNEY],
};

const SPOUSE_PRINCIPAL_PAGE: PageLayout = PageLayout {
    size: PageSize::A4_PORTRAIT,
    texts: &[
        HEADER,
        UNDERSIGNED,
        StaticText::bold("upoważniam (hereby authorise):", 50.0, 535.0, 11.0),
    ],
    paragraphs: &[],
    rules: &[],
    fields: &[SPOUSE_IDENTITY, ATTORNEY],
};

const MINOR_PRINCIPAL_PAGE: PageLayout = PageLayout {
    size: PageSize::A4_PORTRAIT,
    texts: &[
        HEADER,
        UNDERSIGNED,
        StaticText::new(
            "działając w imieniu mojego małoletniego dziecka (acting on behalf of my minor child):",
            50.0,
            540.0,
            11.0,
        ),
        StaticText::bold("upoważniam (hereby authorise):", 50.0, 450.0, 11.0),
    ],
    paragraphs: &[],
    rules: &[],
    fields: &[
        APPLICANT_IDENTITY,
        &[
            FieldSpec::captioned(
                "imię i nazwisko dziecka / child's full name:",
                100.0,
                515.0,
                360.0,
                11.0,
                CHILD_NAME,
            ),
            FieldSpec::captioned(
                "data urodzenia dziecka / child's date of birth:",
                100.0,
                490.0,
                360.0,
                11.0,
                Binding::Field("child.birthDate"),
            ),
        ],
        MINOR_ATTORNEY,
    ],
};

const SCOPE: Paragraph = Paragraph::new(
    &[
        "do reprezentowania mnie w następujących sprawach:",
        "(to represent me in the following matters:)",
    ],
    50.0,
    700.0,
    11.0,
    18.0,
);

const SCOPE_ITEMS: Paragraph = Paragraph::new(
    &[
        "• reprezentowanie przed wszystkimi urzędami w Polsce",
        "  (representation before all public authorities in Poland)",
        "• składanie wniosków o stwierdzenie posiadania obywatelstwa polskiego",
        "  (filing applications for confirmation of Polish citizenship)",
        "• odbieranie dokumentów i korespondencji",
        "  (collecting documents and correspondence)",
        "• uzyskiwanie odpisów aktów stanu cywilnego z archiwów",
        "  (obtaining civil-status records from archives)",
    ],
    60.0,
    650.0,
    10.0,
    18.0,
);

const DELEGATION_LINES: &[&str] = &[
    "Pełnomocnik może udzielić dalszego pełnomocnictwa.",
    "(The attorney may grant further power of attorney.)",
    "",
    "Jednocześnie unieważniam wszelkie inne pełnomocnictwa udzielone przeze mnie",
    "lub w moim imieniu w w/w sprawach.",
    "(I hereby revoke all other powers of attorney granted by me or on my behalf",
    "in the above matters.)",
];

const DELEGATION: Paragraph = Paragraph::new(DELEGATION_LINES, 50.0, 400.0, 11.0, 18.0);

const SIGNATURE_DATE: FieldSpec =
    FieldSpec::captioned("data / date:", 100.0, 200.0, 170.0, 10.0, Binding::Field("document.date"));

const SCOPE_PAGE: PageLayout = PageLayout {
    size: PageSize::A4_PORTRAIT,
    texts: &[HEADER],
    paragraphs: &[SCOPE, SCOPE_ITEMS],
    rules: &[],
    fields: &[],
};

const SIGNATURE_PAGE: PageLayout = PageLayout {
    size: PageSize::A4_PORTRAIT,
    texts: &[HEADER, StaticText::new("podpis / signature", 400.0, 200.0, 10.0)],
    paragraphs: &[Paragraph::new(DELEGATION_LINES, 50.0, 700.0, 11.0, 18.0)],
    rules: &[StaticRule::new((380.0, 180.0), (500.0, 180.0), 0.5)],
    fields: &[&[SIGNATURE_DATE]],
};

const SPOUSES_STATEMENT_PAGE: PageLayout = PageLayout {
    size: PageSize::A4_PORTRAIT,
    texts: &[
        StaticText::bold("Oświadczenie małżonków (Spouses statement)", 180.0, 750.0, 16.0),
        StaticText::new("My, niżej podpisani (We, the undersigned):", 50.0, 700.0, 11.0),
        StaticText::new("podpis małżonka 1 / spouse 1 signature", 80.0, 165.0, 9.0),
        StaticText::new("podpis małżonka 2 / spouse 2 signature", 330.0, 165.0, 9.0),
    ],
    paragraphs: &[
        Paragraph::new(
            &[
                "oświadczamy, że po zawarciu małżeństwa nosimy następujące nazwiska:",
                "(declare that after the marriage we bear the following surnames:)",
            ],
            50.0,
            570.0,
            11.0,
            18.0,
        ),
        Paragraph::new(
            &[
                "Wyrażamy zgodę na prowadzenie spraw o stwierdzenie posiadania obywatelstwa",
                "polskiego przez wskazanego pełnomocnika w imieniu każdego z nas.",
                "(We consent to the appointed attorney conducting citizenship confirmation",
                "matters on behalf of each of us.)",
            ],
            50.0,
            420.0,
            11.0,
            18.0,
        ),
    ],
    rules: &[
        StaticRule::new((80.0, 180.0), (250.0, 180.0), 0.5),
        StaticRule::new((330.0, 180.0), (500.0, 180.0), 0.5),
    ],
    fields: &[&[
        FieldSpec::captioned("małżonek 1 / spouse 1:", 100.0, 675.0, 300.0, 11.0, APPLICANT_NAME),
        FieldSpec::captioned("małżonek 2 / spouse 2:", 100.0, 650.0, 300.0, 11.0, SPOUSE_NAME),
        FieldSpec::captioned(
            "data ślubu / date of marriage:",
            100.0,
            625.0,
            300.0,
            11.0,
            Binding::Field("spouse.marriageDate"),
        ),
        FieldSpec::captioned(
            "miejsce ślubu / place of marriage:",
            100.0,
            600.0,
            300.0,
            11.0,
            Binding::Field("spouse.marriagePlace"),
        ),
        FieldSpec::captioned(
            "nazwisko małżonka 1 / spouse 1 surname:",
            100.0,
            525.0,
            340.0,
            11.0,
            Binding::Field("applicant.lastName"),
        ),
        FieldSpec::captioned(
            "nazwisko małżonka 2 / spouse 2 surname:",
            100.0,
            500.0,
            340.0,
            11.0,
            Binding::Field("spouse.lastName"),
        ),
        FieldSpec::captioned(
            "nazwisko dzieci / children's surname:",
            100.0,
            475.0,
            340.0,
            11.0,
            Binding::Field("spouse.childrenSurname"),
        ),
    ]],
};

const MARRIED_CLOSING_PAGE: PageLayout = PageLayout {
    size: PageSize::A4_PORTRAIT,
    texts: &[
        HEADER,
        StaticText::new("podpis małżonka 1 / spouse 1 signature", 80.0, 165.0, 9.0),
        StaticText::new("podpis małżonka 2 / spouse 2 signature", 330.0, 165.0, 9.0),
    ],
    paragraphs: &[SCOPE, SCOPE_ITEMS, DELEGATION],
    rules: &[
        StaticRule::new((80.0, 180.0), (250.0, 180.0), 0.5),
        StaticRule::new((330.0, 180.0), (500.0, 180.0), 0.5),
    ],
    fields: &[&[FieldSpec::captioned(
        "data / date:",
        100.0,
        230.0,
        170.0,
        10.0,
        Binding::Field("document.date"),
    )]],
};

const ARCHIVES_PAGE: PageLayout = PageLayout {
    size: PageSize::A4_PORTRAIT,
    texts: &[
        HEADER,
        UNDERSIGNED,
        StaticText::bold("upoważniam (hereby authorise):", 50.0, 615.0, 11.0),
        StaticText::new("podpis / signature", 400.0, 150.0, 10.0),
    ],
    paragraphs: &[
        Paragraph::new(
            &[
                "do reprezentowania mnie w Urzędzie Wojewódzkim / Ministerstwie Spraw Wewnętrznych",
                "i Administracji celem prowadzenia spraw o stwierdzenie posiadania / przywrócenie",
                "obywatelstwa polskiego przeze mnie",
            ],
            50.0,
            520.0,
            10.0,
            14.0,
        ),
        Paragraph::new(
            &[
                "oraz w Urzędach Stanu Cywilnego, Archiwach Państwowych, Instytucie Pamięci Narodowej",
                "i wszelkich innych archiwach / instytucjach / urzędach celem uzyskania / sprostowania /",
                "uzupełnienia / odtworzenia i uzyskania poświadczonych kopii mojego / moich krewnych",
                "polskiego aktu urodzenia / małżeństwa / zgonu oraz innych polskich dokumentów dotyczących",
                "mnie i mojej rodziny a także transkrypcji / umiejscowienia zagranicznych dokumentów",
                "w polskich aktach stanu cywilnego oraz w sprawie o nadanie numeru PESEL. Wyrażam również",
                "zgodę na sprostowanie / uzupełnienie odp. aktów stanu cywilnego.",
            ],
            50.0,
            450.0,
            10.0,
            14.0,
        ),
        Paragraph::new(
            &[
                "(and before civil registry offices, the State Archives, the Institute of National Remembrance",
                "and any other archive, institution or office, to obtain, correct, supplement or reconstruct",
                "certified copies of Polish birth, marriage and death records of me and my relatives, to",
                "transcribe foreign records into Polish civil registers and to apply for a PESEL number.)",
            ],
            50.0,
            345.0,
            9.0,
            12.0,
        ),
        Paragraph::new(
            &[
                "Jednocześnie unieważniam wszelkie inne pełnomocnictwa udzielone przeze mnie lub w moim",
                "imieniu w w/w sprawach. Pełnomocnik może udzielić dalszego pełnomocnictwa.",
                "(I revoke all other powers of attorney in the above matters. The attorney may delegate.)",
            ],
            50.0,
            285.0,
            10.0,
            14.0,
        ),
    ],
    rules: &[StaticRule::new((380.0, 130.0), (500.0, 130.0), 0.5)],
    fields: &[
        &[
            FieldSpec::captioned("imię i nazwisko / full name:", 100.0, 675.0, 300.0, 11.0, APPLICANT_NAME),
            FieldSpec::captioned(
                "nr dokumentu / document no.:",
                100.0,
                650.0,
                300.0,
                11.0,
                Binding::Field("applicant.passportNumber"),
            ),
        ],
        &[
            FieldSpec::captioned(
                "pełnomocnik / attorney:",
                100.0,
                590.0,
                300.0,
                11.0,
                Binding::Field("attorney.fullName"),
            ),
            FieldSpec::captioned(
                "nr dokumentu / document no.:",
                100.0,
                570.0,
                300.0,
                11.0,
                Binding::Field("attorney.documentNumber"),
            ),
            FieldSpec::captioned(
                "adres / address:",
                100.0,
                550.0,
                300.0,
                11.0,
                Binding::Field("attorney.address"),
            ),
        ],
        &[
            FieldSpec::captioned(
                "oraz moje małoletnie dziecko / and my minor child:",
                100.0,
                480.0,
                390.0,
                11.0,
                CHILD_NAME,
            )
            .optional(),
            FieldSpec::captioned("data / date:", 100.0, 150.0, 170.0, 10.0, Binding::Field("document.date")),
        ],
    ],
};

const FOOTER: Option<Footer> = Some(Footer {
    caption: Some(TITLE),
    y: 50.0,
    size: 10.0,
});

pub static POA_SINGLE: DocumentSpec = DocumentSpec {
    kind: DocumentKind::PoaSingle,
    title: TITLE,
    pages: &[&PRINCIPAL_PAGE, &SCOPE_PAGE, &SIGNATURE_PAGE],
    footer: FOOTER,
    template: Some("POA_Citizenship_Single.pdf"),
};

pub static POA_MARRIED: DocumentSpec = DocumentSpec {
    kind: DocumentKind::PoaMarried,
    title: TITLE,
    pages: &[
        &PRINCIPAL_PAGE,
        &SPOUSES_STATEMENT_PAGE,
        &SPOUSE_PRINCIPAL_PAGE,
        &MARRIED_CLOSING_PAGE,
    ],
    footer: FOOTER,
    template: Some("POA_Citizenship_Married.pdf"),
};

pub static POA_MINOR: DocumentSpec = DocumentSpec {
    kind: DocumentKind::PoaMinor,
    title: TITLE,
    pages: &[&MINOR_PRINCIPAL_PAGE, &SCOPE_PAGE, &SIGNATURE_PAGE],
    footer: FOOTER,
    template: Some("POA_Citizenship_Minor.pdf"),
};

pub static POA_ARCHIVES: DocumentSpec = DocumentSpec {
    kind: DocumentKind::PoaArchives,
    title: TITLE,
    pages: &[&ARCHIVES_PAGE],
    footer: FOOTER,
    template: Some("POA_Citizenship_Archives.pdf"),
};

pub fn spec_for(variant: PoaVariant) -> &'static DocumentSpec {
    match variant {
        PoaVariant::Single => &POA_SINGLE,
        PoaVariant::Married => &POA_MARRIED,
        PoaVariant::Minor => &POA_MINOR,
        PoaVariant::Archives => &POA_ARCHIVES,
    }
}
