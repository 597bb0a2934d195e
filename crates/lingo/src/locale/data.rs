//! Static locale metadata tables.
//!
//! One `LocaleData` instance per known locale, shared by reference.
//! Formatting behavior is data-driven: the tables plus a small set of named
//! strategies (ordinal style) replace any per-language type hierarchy.

use chrono::Weekday;

use super::plural::PluralCategory;

/// How a locale writes ordinal day numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrdinalStyle {
    /// English-style suffixes: 1st, 2nd, 3rd, 4th.
    Suffix,
    /// Trailing period: 1., 2., 3.
    Dot,
    /// First day only gets a suffix: 1er, 2, 3.
    FirstEr,
    /// Plain number: 1, 2, 3.
    Plain,
}

/// Formatting metadata for one known locale.
///
/// Immutable once constructed; the registry holds one static instance per
/// known code. Day name arrays start at Sunday, month arrays at January.
#[derive(Debug, PartialEq, Eq)]
pub struct LocaleData {
    /// Locale code, lowercase (e.g. "no").
    pub code: &'static str,
    /// Native-language title (e.g. "Norsk").
    pub title: &'static str,
    /// Codes appended to the fallback chain after this locale.
    pub sublocales: &'static [&'static str],

    pub week_start: Weekday,
    pub wday_names: [&'static str; 7],
    pub wday_abbrs: [&'static str; 7],

    /// Month names as used inside dates (genitive in Slavic languages).
    pub month_names: [&'static str; 12],
    /// Month names as used on their own (calendar headers).
    pub month_standalone: [&'static str; 12],
    pub month_abbrs: [&'static str; 12],

    pub date_format: &'static str,
    pub time_format: &'static str,
    /// Full-date pattern; `%e` is replaced by the ordinalized day.
    pub full_format: &'static str,
    /// Year wrapper for full dates; `_` marks the full-date slot.
    pub year_format: &'static str,

    pub number_decimal: &'static str,
    pub number_group: &'static str,

    /// The plural categories this locale uses, in CLDR order. List-valued
    /// translation entries hold one form per category, in this order.
    pub plural_categories: &'static [PluralCategory],
    pub ordinal: OrdinalStyle,
}

impl LocaleData {
    /// Find a known locale by code. Matching is case-insensitive and falls
    /// back to the language part of region-qualified codes ("en-GB" matches
    /// "en").
    pub fn find(code: &str) -> Option<&'static LocaleData> {
        let normalized = normalize_code(code);
        if let Some(data) = LOCALES.iter().find(|l| l.code == normalized) {
            return Some(data);
        }
        let language = normalized.split('-').next()?;
        LOCALES.iter().find(|l| l.code == language)
    }

    /// All known locales, in code order.
    pub fn all() -> &'static [LocaleData] {
        LOCALES
    }

    /// The language part of this locale's code.
    pub fn language(&self) -> &'static str {
        self.code.split('-').next().unwrap_or(self.code)
    }
}

/// Lowercase a locale code and unify separators ("pt_BR" -> "pt-br").
pub(crate) fn normalize_code(code: &str) -> String {
    code.trim().replace('_', "-").to_lowercase()
}

const CARDINAL_TWO: &[PluralCategory] = &[PluralCategory::One, PluralCategory::Other];
const CARDINAL_SLAVIC: &[PluralCategory] = &[
    PluralCategory::One,
    PluralCategory::Few,
    PluralCategory::Many,
    PluralCategory::Other,
];

static LOCALES: &[LocaleData] = &[
    LocaleData {
        code: "de",
        title: "Deutsch",
        sublocales: &[],
        week_start: Weekday::Mon,
        wday_names: [
            "Sonntag", "Montag", "Dienstag", "Mittwoch", "Donnerstag", "Freitag", "Samstag",
        ],
        wday_abbrs: ["So", "Mo", "Di", "Mi", "Do", "Fr", "Sa"],
        month_names: [
            "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August", "September",
            "Oktober", "November", "Dezember",
        ],
        month_standalone: [
            "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August", "September",
            "Oktober", "November", "Dezember",
        ],
        month_abbrs: [
            "Jan", "Feb", "Mär", "Apr", "Mai", "Jun", "Jul", "Aug", "Sep", "Okt", "Nov", "Dez",
        ],
        date_format: "%d.%m.%Y",
        time_format: "%H:%M",
        full_format: "%e %B",
        year_format: "_ %Y",
        number_decimal: ",",
        number_group: ".",
        plural_categories: CARDINAL_TWO,
        ordinal: OrdinalStyle::Dot,
    },
    LocaleData {
        code: "en",
        title: "English",
        sublocales: &[],
        week_start: Weekday::Sun,
        wday_names: [
            "Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday",
        ],
        wday_abbrs: ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
        month_names: [
            "January", "February", "March", "April", "May", "June", "July", "August", "September",
            "October", "November", "December",
        ],
        month_standalone: [
            "January", "February", "March", "April", "May", "June", "July", "August", "September",
            "October", "November", "December",
        ],
        month_abbrs: [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ],
        date_format: "%m/%d/%Y",
        time_format: "%H:%M",
        full_format: "%e of %B",
        year_format: "_, %Y",
        number_decimal: ".",
        number_group: ",",
        plural_categories: CARDINAL_TWO,
        ordinal: OrdinalStyle::Suffix,
    },
    LocaleData {
        code: "es",
        title: "Español",
        sublocales: &[],
        week_start: Weekday::Mon,
        wday_names: [
            "domingo", "lunes", "martes", "miércoles", "jueves", "viernes", "sábado",
        ],
        wday_abbrs: ["dom", "lun", "mar", "mié", "jue", "vie", "sáb"],
        month_names: [
            "enero", "febrero", "marzo", "abril", "mayo", "junio", "julio", "agosto",
            "septiembre", "octubre", "noviembre", "diciembre",
        ],
        month_standalone: [
            "enero", "febrero", "marzo", "abril", "mayo", "junio", "julio", "agosto",
            "septiembre", "octubre", "noviembre", "diciembre",
        ],
        month_abbrs: [
            "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sep", "oct", "nov", "dic",
        ],
        date_format: "%d/%m/%Y",
        time_format: "%H:%M",
        full_format: "%e de %B",
        year_format: "_ de %Y",
        number_decimal: ",",
        number_group: ".",
        plural_categories: CARDINAL_TWO,
        ordinal: OrdinalStyle::Plain,
    },
    LocaleData {
        code: "fr",
        title: "Français",
        sublocales: &[],
        week_start: Weekday::Mon,
        wday_names: [
            "dimanche", "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi",
        ],
        wday_abbrs: ["dim", "lun", "mar", "mer", "jeu", "ven", "sam"],
        month_names: [
            "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août",
            "septembre", "octobre", "novembre", "décembre",
        ],
        month_standalone: [
            "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août",
            "septembre", "octobre", "novembre", "décembre",
        ],
        month_abbrs: [
            "jan", "fév", "mar", "avr", "mai", "juin", "juil", "aoû", "sep", "oct", "nov", "déc",
        ],
        date_format: "%d/%m/%Y",
        time_format: "%H:%M",
        full_format: "%e %B",
        year_format: "_ %Y",
        number_decimal: ",",
        number_group: " ",
        plural_categories: CARDINAL_TWO,
        ordinal: OrdinalStyle::FirstEr,
    },
    LocaleData {
        code: "it",
        title: "Italiano",
        sublocales: &[],
        week_start: Weekday::Mon,
        wday_names: [
            "domenica", "lunedì", "martedì", "mercoledì", "giovedì", "venerdì", "sabato",
        ],
        wday_abbrs: ["dom", "lun", "mar", "mer", "gio", "ven", "sab"],
        month_names: [
            "gennaio", "febbraio", "marzo", "aprile", "maggio", "giugno", "luglio", "agosto",
            "settembre", "ottobre", "novembre", "dicembre",
        ],
        month_standalone: [
            "gennaio", "febbraio", "marzo", "aprile", "maggio", "giugno", "luglio", "agosto",
            "settembre", "ottobre", "novembre", "dicembre",
        ],
        month_abbrs: [
            "gen", "feb", "mar", "apr", "mag", "giu", "lug", "ago", "set", "ott", "nov", "dic",
        ],
        date_format: "%d/%m/%Y",
        time_format: "%H:%M",
        full_format: "%e %B",
        year_format: "_ %Y",
        number_decimal: ",",
        number_group: ".",
        plural_categories: CARDINAL_TWO,
        ordinal: OrdinalStyle::Plain,
    },
    LocaleData {
        code: "no",
        title: "Norsk",
        sublocales: &[],
        week_start: Weekday::Mon,
        wday_names: [
            "Søndag", "Mandag", "Tirsdag", "Onsdag", "Torsdag", "Fredag", "Lørdag",
        ],
        wday_abbrs: ["Søn", "Man", "Tir", "Ons", "Tor", "Fre", "Lør"],
        month_names: [
            "januar", "februar", "mars", "april", "mai", "juni", "juli", "august",
            "september", "oktober", "november", "desember",
        ],
        month_standalone: [
            "Januar", "Februar", "Mars", "April", "Mai", "Juni", "Juli", "August",
            "September", "Oktober", "November", "Desember",
        ],
        month_abbrs: [
            "jan", "feb", "mar", "apr", "mai", "jun", "jul", "aug", "sep", "okt", "nov", "des",
        ],
        date_format: "%d.%m.%Y",
        time_format: "%k.%M",
        full_format: "%e av %B",
        year_format: "_, %Y",
        number_decimal: ",",
        number_group: " ",
        plural_categories: CARDINAL_TWO,
        ordinal: OrdinalStyle::Dot,
    },
    LocaleData {
        code: "pl",
        title: "Polski",
        sublocales: &[],
        week_start: Weekday::Mon,
        wday_names: [
            "niedziela", "poniedziałek", "wtorek", "środa", "czwartek", "piątek", "sobota",
        ],
        wday_abbrs: ["nie", "pon", "wto", "śro", "czw", "pią", "sob"],
        month_names: [
            "stycznia", "lutego", "marca", "kwietnia", "maja", "czerwca", "lipca", "sierpnia",
            "września", "października", "listopada", "grudnia",
        ],
        month_standalone: [
            "styczeń", "luty", "marzec", "kwiecień", "maj", "czerwiec", "lipiec", "sierpień",
            "wrzesień", "październik", "listopad", "grudzień",
        ],
        month_abbrs: [
            "sty", "lut", "mar", "kwi", "maj", "cze", "lip", "sie", "wrz", "paź", "lis", "gru",
        ],
        date_format: "%d.%m.%Y",
        time_format: "%H:%M",
        full_format: "%e %B",
        year_format: "_ %Y",
        number_decimal: ",",
        number_group: " ",
        plural_categories: CARDINAL_SLAVIC,
        ordinal: OrdinalStyle::Plain,
    },
    LocaleData {
        code: "ru",
        title: "Русский",
        sublocales: &[],
        week_start: Weekday::Mon,
        wday_names: [
            "воскресенье", "понедельник", "вторник", "среда", "четверг", "пятница", "суббота",
        ],
        wday_abbrs: ["Вс", "Пн", "Вт", "Ср", "Чт", "Пт", "Сб"],
        month_names: [
            "января", "февраля", "марта", "апреля", "мая", "июня", "июля", "августа",
            "сентября", "октября", "ноября", "декабря",
        ],
        month_standalone: [
            "Январь", "Февраль", "Март", "Апрель", "Май", "Июнь", "Июль", "Август",
            "Сентябрь", "Октябрь", "Ноябрь", "Декабрь",
        ],
        month_abbrs: [
            "янв", "фев", "мар", "апр", "май", "июн", "июл", "авг", "сен", "окт", "ноя", "дек",
        ],
        date_format: "%d.%m.%Y",
        time_format: "%H:%M",
        full_format: "%e %B",
        year_format: "_ %Y",
        number_decimal: ",",
        number_group: " ",
        plural_categories: CARDINAL_SLAVIC,
        ordinal: OrdinalStyle::Plain,
    },
];
