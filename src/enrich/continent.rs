//! Static country-to-continent reference data.
//!
//! Classification chains three lookups: ISO 3166-1 alpha-3 → alpha-2,
//! alpha-2 → two-letter continent code, continent code → display name.
//! The tables cover the full officially assigned ISO 3166-1 set, so a miss
//! means the code is not a country at all (region aggregates like `WLD` or
//! `ARB`, or pseudo-codes like `XKX`).

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// ISO 3166-1 alpha-3 → alpha-2, sorted by alpha-3.
static ALPHA3_TO_ALPHA2: &[(&str, &str)] = &[
    ("ABW", "AW"), ("AFG", "AF"), ("AGO", "AO"), ("AIA", "AI"), ("ALA", "AX"),
    ("ALB", "AL"), ("AND", "AD"), ("ARE", "AE"), ("ARG", "AR"), ("ARM", "AM"),
    ("ASM", "AS"), ("ATA", "AQ"), ("ATF", "TF"), ("ATG", "AG"), ("AUS", "AU"),
    ("AUT", "AT"), ("AZE", "AZ"), ("BDI", "BI"), ("BEL", "BE"), ("BEN", "BJ"),
    ("BES", "BQ"), ("BFA", "BF"), ("BGD", "BD"), ("BGR", "BG"), ("BHR", "BH"),
    ("BHS", "BS"), ("BIH", "BA"), ("BLM", "BL"), ("BLR", "BY"), ("BLZ", "BZ"),
    ("BMU", "BM"), ("BOL", "BO"), ("BRA", "BR"), ("BRB", "BB"), ("BRN", "BN"),
    ("BTN", "BT"), ("BVT", "BV"), ("BWA", "BW"), ("CAF", "CF"), ("CAN", "CA"),
    ("CCK", "CC"), ("CHE", "CH"), ("CHL", "CL"), ("CHN", "CN"), ("CIV", "CI"),
    ("CMR", "CM"), ("COD", "CD"), ("COG", "CG"), ("COK", "CK"), ("COL", "CO"),
    ("COM", "KM"), ("CPV", "CV"), ("CRI", "CR"), ("CUB", "CU"), ("CUW", "CW"),
    ("CXR", "CX"), ("CYM", "KY"), ("CYP", "CY"), ("CZE", "CZ"), ("DEU", "DE"),
    ("DJI", "DJ"), ("DMA", "DM"), ("DNK", "DK"), ("DOM", "DO"), ("DZA", "DZ"),
    ("ECU", "EC"), ("EGY", "EG"), ("ERI", "ER"), ("ESH", "EH"), ("ESP", "ES"),
    ("EST", "EE"), ("ETH", "ET"), ("FIN", "FI"), ("FJI", "FJ"), ("FLK", "FK"),
    ("FRA", "FR"), ("FRO", "FO"), ("FSM", "FM"), ("GAB", "GA"), ("GBR", "GB"),
    ("GEO", "GE"), ("GGY", "GG"), ("GHA", "GH"), ("GIB", "GI"), ("GIN", "GN"),
    ("GLP", "GP"), ("GMB", "GM"), ("GNB", "GW"), ("GNQ", "GQ"), ("GRC", "GR"),
    ("GRD", "GD"), ("GRL", "GL"), ("GTM", "GT"), ("GUF", "GF"), ("GUM", "GU"),
    ("GUY", "GY"), ("HKG", "HK"), ("HMD", "HM"), ("HND", "HN"), ("HRV", "HR"),
    ("HTI", "HT"), ("HUN", "HU"), ("IDN", "ID"), ("IMN", "IM"), ("IND", "IN"),
    ("IOT", "IO"), ("IRL", "IE"), ("IRN", "IR"), ("IRQ", "IQ"), ("ISL", "IS"),
    ("ISR", "IL"), ("ITA", "IT"), ("JAM", "JM"), ("JEY", "JE"), ("JOR", "JO"),
    ("JPN", "JP"), ("KAZ", "KZ"), ("KEN", "KE"), ("KGZ", "KG"), ("KHM", "KH"),
    ("KIR", "KI"), ("KNA", "KN"), ("KOR", "KR"), ("KWT", "KW"), ("LAO", "LA"),
    ("LBN", "LB"), ("LBR", "LR"), ("LBY", "LY"), ("LCA", "LC"), ("LIE", "LI"),
    ("LKA", "LK"), ("LSO", "LS"), ("LTU", "LT"), ("LUX", "LU"), ("LVA", "LV"),
    ("MAC", "MO"), ("MAF", "MF"), ("MAR", "MA"), ("MCO", "MC"), ("MDA", "MD"),
    ("MDG", "MG"), ("MDV", "MV"), ("MEX", "MX"), ("MHL", "MH"), ("MKD", "MK"),
    ("MLI", "ML"), ("MLT", "MT"), ("MMR", "MM"), ("MNE", "ME"), ("MNG", "MN"),
    ("MNP", "MP"), ("MOZ", "MZ"), ("MRT", "MR"), ("MSR", "MS"), ("MTQ", "MQ"),
    ("MUS", "MU"), ("MWI", "MW"), ("MYS", "MY"), ("MYT", "YT"), ("NAM", "NA"),
    ("NCL", "NC"), ("NER", "NE"), ("NFK", "NF"), ("NGA", "NG"), ("NIC", "NI"),
    ("NIU", "NU"), ("NLD", "NL"), ("NOR", "NO"), ("NPL", "NP"), ("NRU", "NR"),
    ("NZL", "NZ"), ("OMN", "OM"), ("PAK", "PK"), ("PAN", "PA"), ("PCN", "PN"),
    ("PER", "PE"), ("PHL", "PH"), ("PLW", "PW"), ("PNG", "PG"), ("POL", "PL"),
    ("PRI", "PR"), ("PRK", "KP"), ("PRT", "PT"), ("PRY", "PY"), ("PSE", "PS"),
    ("PYF", "PF"), ("QAT", "QA"), ("REU", "RE"), ("ROU", "RO"), ("RUS", "RU"),
    ("RWA", "RW"), ("SAU", "SA"), ("SDN", "SD"), ("SEN", "SN"), ("SGP", "SG"),
    ("SGS", "GS"), ("SHN", "SH"), ("SJM", "SJ"), ("SLB", "SB"), ("SLE", "SL"),
    ("SLV", "SV"), ("SMR", "SM"), ("SOM", "SO"), ("SPM", "PM"), ("SRB", "RS"),
    ("SSD", "SS"), ("STP", "ST"), ("SUR", "SR"), ("SVK", "SK"), ("SVN", "SI"),
    ("SWE", "SE"), ("SWZ", "SZ"), ("SXM", "SX"), ("SYC", "SC"), ("SYR", "SY"),
    ("TCA", "TC"), ("TCD", "TD"), ("TGO", "TG"), ("THA", "TH"), ("TJK", "TJ"),
    ("TKL", "TK"), ("TKM", "TM"), ("TLS", "TL"), ("TON", "TO"), ("TTO", "TT"),
    ("TUN", "TN"), ("TUR", "TR"), ("TUV", "TV"), ("TWN", "TW"), ("TZA", "TZ"),
    ("UGA", "UG"), ("UKR", "UA"), ("UMI", "UM"), ("URY", "UY"), ("USA", "US"),
    ("UZB", "UZ"), ("VAT", "VA"), ("VCT", "VC"), ("VEN", "VE"), ("VGB", "VG"),
    ("VIR", "VI"), ("VNM", "VN"), ("VUT", "VU"), ("WLF", "WF"), ("WSM", "WS"),
    ("YEM", "YE"), ("ZAF", "ZA"), ("ZMB", "ZM"), ("ZWE", "ZW"),
];

/// ISO 3166-1 alpha-2 → two-letter continent code, sorted by alpha-2.
static ALPHA2_TO_CONTINENT_CODE: &[(&str, &str)] = &[
    ("AD", "EU"), ("AE", "AS"), ("AF", "AS"), ("AG", "NA"), ("AI", "NA"),
    ("AL", "EU"), ("AM", "AS"), ("AO", "AF"), ("AQ", "AN"), ("AR", "SA"),
    ("AS", "OC"), ("AT", "EU"), ("AU", "OC"), ("AW", "NA"), ("AX", "EU"),
    ("AZ", "AS"), ("BA", "EU"), ("BB", "NA"), ("BD", "AS"), ("BE", "EU"),
    ("BF", "AF"), ("BG", "EU"), ("BH", "AS"), ("BI", "AF"), ("BJ", "AF"),
    ("BL", "NA"), ("BM", "NA"), ("BN", "AS"), ("BO", "SA"), ("BQ", "NA"),
    ("BR", "SA"), ("BS", "NA"), ("BT", "AS"), ("BV", "AN"), ("BW", "AF"),
    ("BY", "EU"), ("BZ", "NA"), ("CA", "NA"), ("CC", "AS"), ("CD", "AF"),
    ("CF", "AF"), ("CG", "AF"), ("CH", "EU"), ("CI", "AF"), ("CK", "OC"),
    ("CL", "SA"), ("CM", "AF"), ("CN", "AS"), ("CO", "SA"), ("CR", "NA"),
    ("CU", "NA"), ("CV", "AF"), ("CW", "NA"), ("CX", "AS"), ("CY", "AS"),
    ("CZ", "EU"), ("DE", "EU"), ("DJ", "AF"), ("DK", "EU"), ("DM", "NA"),
    ("DO", "NA"), ("DZ", "AF"), ("EC", "SA"), ("EE", "EU"), ("EG", "AF"),
    ("EH", "AF"), ("ER", "AF"), ("ES", "EU"), ("ET", "AF"), ("FI", "EU"),
    ("FJ", "OC"), ("FK", "SA"), ("FM", "OC"), ("FO", "EU"), ("FR", "EU"),
    ("GA", "AF"), ("GB", "EU"), ("GD", "NA"), ("GE", "AS"), ("GF", "SA"),
    ("GG", "EU"), ("GH", "AF"), ("GI", "EU"), ("GL", "NA"), ("GM", "AF"),
    ("GN", "AF"), ("GP", "NA"), ("GQ", "AF"), ("GR", "EU"), ("GS", "AN"),
    ("GT", "NA"), ("GU", "OC"), ("GW", "AF"), ("GY", "SA"), ("HK", "AS"),
    ("HM", "AN"), ("HN", "NA"), ("HR", "EU"), ("HT", "NA"), ("HU", "EU"),
    ("ID", "AS"), ("IE", "EU"), ("IL", "AS"), ("IM", "EU"), ("IN", "AS"),
    ("IO", "AS"), ("IQ", "AS"), ("IR", "AS"), ("IS", "EU"), ("IT", "EU"),
    ("JE", "EU"), ("JM", "NA"), ("JO", "AS"), ("JP", "AS"), ("KE", "AF"),
    ("KG", "AS"), ("KH", "AS"), ("KI", "OC"), ("KM", "AF"), ("KN", "NA"),
    ("KP", "AS"), ("KR", "AS"), ("KW", "AS"), ("KY", "NA"), ("KZ", "AS"),
    ("LA", "AS"), ("LB", "AS"), ("LC", "NA"), ("LI", "EU"), ("LK", "AS"),
    ("LR", "AF"), ("LS", "AF"), ("LT", "EU"), ("LU", "EU"), ("LV", "EU"),
    ("LY", "AF"), ("MA", "AF"), ("MC", "EU"), ("MD", "EU"), ("ME", "EU"),
    ("MF", "NA"), ("MG", "AF"), ("MH", "OC"), ("MK", "EU"), ("ML", "AF"),
    ("MM", "AS"), ("MN", "AS"), ("MO", "AS"), ("MP", "OC"), ("MQ", "NA"),
    ("MR", "AF"), ("MS", "NA"), ("MT", "EU"), ("MU", "AF"), ("MV", "AS"),
    ("MW", "AF"), ("MX", "NA"), ("MY", "AS"), ("MZ", "AF"), ("NA", "AF"),
    ("NC", "OC"), ("NE", "AF"), ("NF", "OC"), ("NG", "AF"), ("NI", "NA"),
    ("NL", "EU"), ("NO", "EU"), ("NP", "AS"), ("NR", "OC"), ("NU", "OC"),
    ("NZ", "OC"), ("OM", "AS"), ("PA", "NA"), ("PE", "SA"), ("PF", "OC"),
    ("PG", "OC"), ("PH", "AS"), ("PK", "AS"), ("PL", "EU"), ("PM", "NA"),
    ("PN", "OC"), ("PR", "NA"), ("PS", "AS"), ("PT", "EU"), ("PW", "OC"),
    ("PY", "SA"), ("QA", "AS"), ("RE", "AF"), ("RO", "EU"), ("RS", "EU"),
    ("RU", "EU"), ("RW", "AF"), ("SA", "AS"), ("SB", "OC"), ("SC", "AF"),
    ("SD", "AF"), ("SE", "EU"), ("SG", "AS"), ("SH", "AF"), ("SI", "EU"),
    ("SJ", "EU"), ("SK", "EU"), ("SL", "AF"), ("SM", "EU"), ("SN", "AF"),
    ("SO", "AF"), ("SR", "SA"), ("SS", "AF"), ("ST", "AF"), ("SV", "NA"),
    ("SX", "NA"), ("SY", "AS"), ("SZ", "AF"), ("TC", "NA"), ("TD", "AF"),
    ("TF", "AN"), ("TG", "AF"), ("TH", "AS"), ("TJ", "AS"), ("TK", "OC"),
    ("TL", "AS"), ("TM", "AS"), ("TN", "AF"), ("TO", "OC"), ("TR", "AS"),
    ("TT", "NA"), ("TV", "OC"), ("TW", "AS"), ("TZ", "AF"), ("UA", "EU"),
    ("UG", "AF"), ("UM", "OC"), ("US", "NA"), ("UY", "SA"), ("UZ", "AS"),
    ("VA", "EU"), ("VC", "NA"), ("VE", "SA"), ("VG", "NA"), ("VI", "NA"),
    ("VN", "AS"), ("VU", "OC"), ("WF", "OC"), ("WS", "OC"), ("YE", "AS"),
    ("YT", "AF"), ("ZA", "AF"), ("ZM", "AF"), ("ZW", "AF"),
];

/// Continent code → display name.
static CONTINENT_NAMES: &[(&str, &str)] = &[
    ("AF", "Africa"),
    ("AN", "Antarctica"),
    ("AS", "Asia"),
    ("EU", "Europe"),
    ("NA", "North America"),
    ("OC", "Oceania"),
    ("SA", "South America"),
];

static ALPHA3_INDEX: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| ALPHA3_TO_ALPHA2.iter().copied().collect());
static ALPHA2_INDEX: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| ALPHA2_TO_CONTINENT_CODE.iter().copied().collect());
static NAME_INDEX: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| CONTINENT_NAMES.iter().copied().collect());

/// Map an ISO alpha-3 country code to its continent name.
///
/// Lookups are exact and case-sensitive; anything outside ISO 3166-1 yields
/// `None`, which callers must treat as an expected outcome rather than an
/// error.
pub fn classify(alpha3: &str) -> Option<&'static str> {
    let alpha2 = ALPHA3_INDEX.get(alpha3)?;
    let code = ALPHA2_INDEX.get(alpha2)?;
    NAME_INDEX.get(code).copied()
}
