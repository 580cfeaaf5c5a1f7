//! Static reference data: maturity scales per role and checklist boards per
//! practice category.
//!
//! Level titles and checklist labels follow David Loertscher's school library
//! taxonomies. The tables are immutable for the lifetime of the program.

use std::fmt;

/// Number of checklist items on every practice board. The progress bar's
/// quarter markers assume this splits into four equal quartiles.
pub const CHECKLIST_LEN: usize = 16;

/// Number of practice categories.
pub const CATEGORY_COUNT: usize = 4;

/// One rung on a role's ordered maturity scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaturityLevel {
    pub level: u8,
    pub title: &'static str,
    pub description: &'static str,
}

/// The fixed set of roles that can be assessed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    Librarian,
    Teacher,
    Principal,
}

impl Role {
    /// All roles in display order.
    pub const ALL: [Role; 3] = [Role::Librarian, Role::Teacher, Role::Principal];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Librarian => "librarian",
            Role::Teacher => "teacher",
            Role::Principal => "principal",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Role::Librarian => "Bibliotekariens roll",
            Role::Teacher => "Lärarens samverkan",
            Role::Principal => "Rektorns ledarskap",
        }
    }

    /// The role's scale, ordered by strictly increasing level starting at 1.
    pub fn levels(self) -> &'static [MaturityLevel] {
        match self {
            Role::Librarian => LIBRARIAN_LEVELS,
            Role::Teacher => TEACHER_LEVELS,
            Role::Principal => PRINCIPAL_LEVELS,
        }
    }

    /// Highest level defined for this role. Scales are contiguous from 1, so
    /// this equals the number of levels.
    pub fn max_level(self) -> u8 {
        self.levels().last().map_or(0, |l| l.level)
    }

    pub fn level(self, level: u8) -> Option<&'static MaturityLevel> {
        self.levels().iter().find(|l| l.level == level)
    }

    pub fn has_level(self, level: u8) -> bool {
        self.level(level).is_some()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier of a practice category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CategoryId {
    Mik,
    Reading,
    Culture,
    Democracy,
}

impl CategoryId {
    /// All categories in display order.
    pub const ALL: [CategoryId; CATEGORY_COUNT] = [
        CategoryId::Mik,
        CategoryId::Reading,
        CategoryId::Culture,
        CategoryId::Democracy,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CategoryId::Mik => "mik",
            CategoryId::Reading => "reading",
            CategoryId::Culture => "culture",
            CategoryId::Democracy => "democracy",
        }
    }

    pub fn category(self) -> &'static PracticeCategory {
        match self {
            CategoryId::Mik => &PRACTICE_CATEGORIES[0],
            CategoryId::Reading => &PRACTICE_CATEGORIES[1],
            CategoryId::Culture => &PRACTICE_CATEGORIES[2],
            CategoryId::Democracy => &PRACTICE_CATEGORIES[3],
        }
    }

    /// Position in [`CategoryId::ALL`].
    pub(crate) fn index(self) -> usize {
        match self {
            CategoryId::Mik => 0,
            CategoryId::Reading => 1,
            CategoryId::Culture => 2,
            CategoryId::Democracy => 3,
        }
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named checklist board. The item count is part of the type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PracticeCategory {
    pub id: CategoryId,
    pub title: &'static str,
    pub prompt: &'static str,
    pub items: [&'static str; CHECKLIST_LEN],
}

const fn level(level: u8, title: &'static str, description: &'static str) -> MaturityLevel {
    MaturityLevel {
        level,
        title,
        description,
    }
}

pub static LIBRARIAN_LEVELS: &[MaturityLevel] = &[
    level(
        1,
        "Ingen inblandning",
        "Biblioteket ignoreras helt i undervisningen.",
    ),
    level(
        2,
        "Självbetjäningslager",
        "Biblioteket tillhandahåller material, men användarna får klara sig själva.",
    ),
    level(
        3,
        "Individuell referenshjälp",
        "Bibliotekarien hjälper elever och lärare att hitta specifikt material vid förfrågan.",
    ),
    level(
        4,
        "Spontan samverkan",
        "Bibliotekarien hjälper klasser eller grupper som dyker upp utan förvarning.",
    ),
    level(
        5,
        "Informell planering",
        "Korta möten i korridorer eller personalrum där bibliotekarien ger tips på material eller tillgängliggör en lånetid i biblioteket.",
    ),
    level(
        6,
        "Referenssamtal",
        "Läraren ber i förväg bibliotekarien att plocka fram material till ett specifikt projekt.",
    ),
    level(
        7,
        "Läsfrämjande",
        "Bibliotekarien arbetar aktivt med t ex bokprat, bokattacker och utställningar",
    ),
    level(
        8,
        "Formell planering i stödroll",
        "Bibliotekarien deltar i planering men endast som serviceperson; läraren styr helt innehållet.",
    ),
    level(
        9,
        "Pedagogisk design I",
        "Bibliotekarien planerar, genomför och utvärderar delar av undervisningen tillsammans med läraren.",
    ),
    level(
        10,
        "Pedagogisk design II",
        "Biblioteket är kärnan i undervisningen; informationssökning är helt integrerad i ämnet.",
    ),
    level(
        11,
        "Läroplansutveckling",
        "Bibliotekarien deltar i att forma skolans övergripande pedagogiska innehåll och kursplaner.",
    ),
];

pub static TEACHER_LEVELS: &[MaturityLevel] = &[
    level(
        1,
        "Helt självständig",
        "Läraren använder endast läroböcker och eget material.",
    ),
    level(
        2,
        "Privat samling",
        "Läraren förlitar sig på egna böcker i klassrummet.",
    ),
    level(
        3,
        "Lånad samling",
        "Läraren lånar material från biblioteket men sköter allt i klassrummet.",
    ),
    level(
        4,
        "Bibliotekarien som idégivare",
        "Läraren söker inspiration eller tips från bibliotekarien vid enstaka tillfällen.",
    ),
    level(
        5,
        "Biblioteket som berikning",
        "Biblioteket används för att ge 'det lilla extra' till ett temaområde.",
    ),
    level(
        6,
        "Biblioteket som innehåll",
        "Läraren planerar tillsammans med bibliotekarien för att integrera medier i kursmomentet.",
    ),
    level(
        7,
        "Partnerskap",
        "Lärare och bibliotekarie samarbetar som jämlika partners genom hela lärprocessen.",
    ),
    level(
        8,
        "Läroplansutveckling",
        "Läraren samråder med bibliotekarien vid långsiktig utveckling av ämnen och kursplaner.",
    ),
];

pub static PRINCIPAL_LEVELS: &[MaturityLevel] = &[
    level(
        1,
        "Ambivalent inställning",
        "Biblioteket får inget aktivt stöd p.g.a. bristande intresse eller prioriteringar.",
    ),
    level(
        2,
        "Införskaffa kunskap (Nivå 2)",
        "Rektorn börjar förstå bibliotekets roll i skolan.",
    ),
    level(
        3,
        "Införskaffa kunskap (Nivå 3)",
        "Rektorn anställer en visionär bibliotekarie.",
    ),
    level(
        4,
        "Införskaffa kunskap (Nivå 4)",
        "Rektorn inkluderar bibliotekarien i ledningsteamet.",
    ),
    level(
        5,
        "Bygga struktur",
        "Rektorn skapar en organisation där biblioteket är tillgängligt och ställer krav på användning.",
    ),
    level(
        6,
        "Utöva ledarskap (Nivå 6)",
        "Rektorn har en långsiktig ekonomisk plan för biblioteket.",
    ),
    level(
        7,
        "Utöva ledarskap (Nivå 7)",
        "Ser till att bibliotekets arbete bidrar till elevernas resultat.",
    ),
    level(
        8,
        "Utvärdera resultat",
        "Rektorn utvärderar systematiskt hur biblioteksverksamheten påverkar elevernas måluppfyllelse.",
    ),
];

pub static PRACTICE_CATEGORIES: [PracticeCategory; CATEGORY_COUNT] = [
    PracticeCategory {
        id: CategoryId::Mik,
        title: "MIK & digital kompetens",
        prompt: "Undervisas eleverna systematiskt i medie- och informationskunnighet?",
        items: [
            "Källkritik i digitala miljöer",
            "Förståelse för algoritmer",
            "AI-läskunnighet",
            "Upphovsrätt & CC",
            "Digitalt skapande",
            "Värdera olika källor",
            "Integritet på nätet",
            "Reklam- & medieanalys",
            "Informationssökning",
            "Källkritik av bild/video",
            "Förstå filterbubblor",
            "Hantera desinformation",
            "Digital säkerhet",
            "Källhänvisning",
            "Medieproduktion",
            "Kritiskt tänkande",
        ],
    },
    PracticeCategory {
        id: CategoryId::Reading,
        title: "Läsning & språkutveckling",
        prompt: "Stödjer biblioteket elevernas språkliga och litterära utveckling?",
        items: [
            "Läsfrämjande insatser",
            "Ordförrådsutveckling",
            "Boksamtal i grupp",
            "Skrivande i genrer",
            "Berättande (storytelling)",
            "Modersmålsstöd",
            "Litteratur på olika språk",
            "Högläsning",
            "Lässtrategier",
            "Multimodalitet (bild/text)",
            "Genremedvetenhet",
            "Språklig medvetenhet",
            "Lustfyllt läsande",
            "Skönlitteratur i ämnen",
            "Poesi och dramatik",
            "Digitalt berättande",
        ],
    },
    PracticeCategory {
        id: CategoryId::Culture,
        title: "Litteratur & kultur",
        prompt: "Erbjuder biblioteket ett brett utbud av kultur och litteratur?",
        items: [
            "Bokprat & bokattacker",
            "Aktuellt bokbestånd",
            "Författarbesök",
            "Kulturella events",
            "Skyltning & exponering",
            "Samarbete med kulturskola",
            "Film & media",
            "Konstutställningar",
            "Elevinflytande vid inköp",
            "Mångfald i utbudet",
            "Litteraturkanon-diskussion",
            "Kulturarv & samtid",
            "Skapande verksamhet",
            "Teater & drama",
            "Musik & ljud",
            "Globala perspektiv",
        ],
    },
    PracticeCategory {
        id: CategoryId::Democracy,
        title: "Demokrati & värdegrund",
        prompt: "Fungerar biblioteket som en demokratisk arena för alla elever?",
        items: [
            "Elevinflytande i bibblan",
            "Samtal om svåra frågor",
            "Yttrandefrihet & censur",
            "Inkludering & mångfald",
            "Delaktighet i inköp",
            "Biblioteket som mötesplats",
            "Kritiskt granskande av makt",
            "Mänskliga rättigheter",
            "Demokratiska processer",
            "Trygg miljö för alla",
            "Representation i hyllan",
            "Medborgarfostran",
            "Etiska diskussioner",
            "Tillgång till fri info",
            "Globala målen i bibblan",
            "Elevrådssamarbete",
        ],
    },
];
