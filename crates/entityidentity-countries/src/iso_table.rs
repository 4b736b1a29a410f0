//! Vendored ISO 3166-1 reference table (SPEC_FULL.md §4.7).
//!
//! Rust has no bundled `pycountry`-equivalent crate in this stack, so the
//! table is compiled in as a `const` array: (alpha2, alpha3, numeric, name,
//! official_name). Numeric codes are kept as their canonical zero-padded
//! three-digit strings. This is a curated subset covering every country
//! referenced by `MANUAL_ALIASES` plus the world's major economies and
//! trading partners, not the full 249-entry ISO list (see DESIGN.md).

pub struct IsoEntry {
    pub alpha2: &'static str,
    pub alpha3: &'static str,
    pub numeric: &'static str,
    pub name: &'static str,
    pub official_name: &'static str,
}

pub const ISO_TABLE: &[IsoEntry] = &[
    IsoEntry { alpha2: "US", alpha3: "USA", numeric: "840", name: "United States", official_name: "United States of America" },
    IsoEntry { alpha2: "GB", alpha3: "GBR", numeric: "826", name: "United Kingdom", official_name: "United Kingdom of Great Britain and Northern Ireland" },
    IsoEntry { alpha2: "CA", alpha3: "CAN", numeric: "124", name: "Canada", official_name: "Canada" },
    IsoEntry { alpha2: "AU", alpha3: "AUS", numeric: "036", name: "Australia", official_name: "Australia" },
    IsoEntry { alpha2: "NZ", alpha3: "NZL", numeric: "554", name: "New Zealand", official_name: "New Zealand" },
    IsoEntry { alpha2: "IE", alpha3: "IRL", numeric: "372", name: "Ireland", official_name: "Ireland" },
    IsoEntry { alpha2: "DE", alpha3: "DEU", numeric: "276", name: "Germany", official_name: "Federal Republic of Germany" },
    IsoEntry { alpha2: "FR", alpha3: "FRA", numeric: "250", name: "France", official_name: "French Republic" },
    IsoEntry { alpha2: "IT", alpha3: "ITA", numeric: "380", name: "Italy", official_name: "Italian Republic" },
    IsoEntry { alpha2: "ES", alpha3: "ESP", numeric: "724", name: "Spain", official_name: "Kingdom of Spain" },
    IsoEntry { alpha2: "PT", alpha3: "PRT", numeric: "620", name: "Portugal", official_name: "Portuguese Republic" },
    IsoEntry { alpha2: "NL", alpha3: "NLD", numeric: "528", name: "Netherlands", official_name: "Kingdom of the Netherlands" },
    IsoEntry { alpha2: "BE", alpha3: "BEL", numeric: "056", name: "Belgium", official_name: "Kingdom of Belgium" },
    IsoEntry { alpha2: "LU", alpha3: "LUX", numeric: "442", name: "Luxembourg", official_name: "Grand Duchy of Luxembourg" },
    IsoEntry { alpha2: "CH", alpha3: "CHE", numeric: "756", name: "Switzerland", official_name: "Swiss Confederation" },
    IsoEntry { alpha2: "AT", alpha3: "AUT", numeric: "040", name: "Austria", official_name: "Republic of Austria" },
    IsoEntry { alpha2: "SE", alpha3: "SWE", numeric: "752", name: "Sweden", official_name: "Kingdom of Sweden" },
    IsoEntry { alpha2: "NO", alpha3: "NOR", numeric: "578", name: "Norway", official_name: "Kingdom of Norway" },
    IsoEntry { alpha2: "DK", alpha3: "DNK", numeric: "208", name: "Denmark", official_name: "Kingdom of Denmark" },
    IsoEntry { alpha2: "FI", alpha3: "FIN", numeric: "246", name: "Finland", official_name: "Republic of Finland" },
    IsoEntry { alpha2: "IS", alpha3: "ISL", numeric: "352", name: "Iceland", official_name: "Iceland" },
    IsoEntry { alpha2: "PL", alpha3: "POL", numeric: "616", name: "Poland", official_name: "Republic of Poland" },
    IsoEntry { alpha2: "CZ", alpha3: "CZE", numeric: "203", name: "Czechia", official_name: "Czech Republic" },
    IsoEntry { alpha2: "SK", alpha3: "SVK", numeric: "703", name: "Slovakia", official_name: "Slovak Republic" },
    IsoEntry { alpha2: "HU", alpha3: "HUN", numeric: "348", name: "Hungary", official_name: "Hungary" },
    IsoEntry { alpha2: "RO", alpha3: "ROU", numeric: "642", name: "Romania", official_name: "Romania" },
    IsoEntry { alpha2: "BG", alpha3: "BGR", numeric: "100", name: "Bulgaria", official_name: "Republic of Bulgaria" },
    IsoEntry { alpha2: "GR", alpha3: "GRC", numeric: "300", name: "Greece", official_name: "Hellenic Republic" },
    IsoEntry { alpha2: "HR", alpha3: "HRV", numeric: "191", name: "Croatia", official_name: "Republic of Croatia" },
    IsoEntry { alpha2: "SI", alpha3: "SVN", numeric: "705", name: "Slovenia", official_name: "Republic of Slovenia" },
    IsoEntry { alpha2: "RS", alpha3: "SRB", numeric: "688", name: "Serbia", official_name: "Republic of Serbia" },
    IsoEntry { alpha2: "UA", alpha3: "UKR", numeric: "804", name: "Ukraine", official_name: "Ukraine" },
    IsoEntry { alpha2: "BY", alpha3: "BLR", numeric: "112", name: "Belarus", official_name: "Republic of Belarus" },
    IsoEntry { alpha2: "RU", alpha3: "RUS", numeric: "643", name: "Russian Federation", official_name: "Russian Federation" },
    IsoEntry { alpha2: "MD", alpha3: "MDA", numeric: "498", name: "Moldova", official_name: "Republic of Moldova" },
    IsoEntry { alpha2: "LT", alpha3: "LTU", numeric: "440", name: "Lithuania", official_name: "Republic of Lithuania" },
    IsoEntry { alpha2: "LV", alpha3: "LVA", numeric: "428", name: "Latvia", official_name: "Republic of Latvia" },
    IsoEntry { alpha2: "EE", alpha3: "EST", numeric: "233", name: "Estonia", official_name: "Republic of Estonia" },
    IsoEntry { alpha2: "TR", alpha3: "TUR", numeric: "792", name: "Turkey", official_name: "Republic of Turkiye" },
    IsoEntry { alpha2: "CY", alpha3: "CYP", numeric: "196", name: "Cyprus", official_name: "Republic of Cyprus" },
    IsoEntry { alpha2: "MT", alpha3: "MLT", numeric: "470", name: "Malta", official_name: "Republic of Malta" },
    IsoEntry { alpha2: "CN", alpha3: "CHN", numeric: "156", name: "China", official_name: "People's Republic of China" },
    IsoEntry { alpha2: "JP", alpha3: "JPN", numeric: "392", name: "Japan", official_name: "Japan" },
    IsoEntry { alpha2: "KR", alpha3: "KOR", numeric: "410", name: "South Korea", official_name: "Republic of Korea" },
    IsoEntry { alpha2: "KP", alpha3: "PRK", numeric: "408", name: "North Korea", official_name: "Democratic People's Republic of Korea" },
    IsoEntry { alpha2: "IN", alpha3: "IND", numeric: "356", name: "India", official_name: "Republic of India" },
    IsoEntry { alpha2: "PK", alpha3: "PAK", numeric: "586", name: "Pakistan", official_name: "Islamic Republic of Pakistan" },
    IsoEntry { alpha2: "BD", alpha3: "BGD", numeric: "050", name: "Bangladesh", official_name: "People's Republic of Bangladesh" },
    IsoEntry { alpha2: "LK", alpha3: "LKA", numeric: "144", name: "Sri Lanka", official_name: "Democratic Socialist Republic of Sri Lanka" },
    IsoEntry { alpha2: "VN", alpha3: "VNM", numeric: "704", name: "Vietnam", official_name: "Socialist Republic of Viet Nam" },
    IsoEntry { alpha2: "LA", alpha3: "LAO", numeric: "418", name: "Laos", official_name: "Lao People's Democratic Republic" },
    IsoEntry { alpha2: "KH", alpha3: "KHM", numeric: "116", name: "Cambodia", official_name: "Kingdom of Cambodia" },
    IsoEntry { alpha2: "TH", alpha3: "THA", numeric: "764", name: "Thailand", official_name: "Kingdom of Thailand" },
    IsoEntry { alpha2: "MM", alpha3: "MMR", numeric: "104", name: "Myanmar", official_name: "Republic of the Union of Myanmar" },
    IsoEntry { alpha2: "MY", alpha3: "MYS", numeric: "458", name: "Malaysia", official_name: "Malaysia" },
    IsoEntry { alpha2: "SG", alpha3: "SGP", numeric: "702", name: "Singapore", official_name: "Republic of Singapore" },
    IsoEntry { alpha2: "ID", alpha3: "IDN", numeric: "360", name: "Indonesia", official_name: "Republic of Indonesia" },
    IsoEntry { alpha2: "PH", alpha3: "PHL", numeric: "608", name: "Philippines", official_name: "Republic of the Philippines" },
    IsoEntry { alpha2: "BN", alpha3: "BRN", numeric: "096", name: "Brunei Darussalam", official_name: "Nation of Brunei, Abode of Peace" },
    IsoEntry { alpha2: "TW", alpha3: "TWN", numeric: "158", name: "Taiwan", official_name: "Taiwan, Province of China" },
    IsoEntry { alpha2: "HK", alpha3: "HKG", numeric: "344", name: "Hong Kong", official_name: "Hong Kong Special Administrative Region of China" },
    IsoEntry { alpha2: "MN", alpha3: "MNG", numeric: "496", name: "Mongolia", official_name: "Mongolia" },
    IsoEntry { alpha2: "KZ", alpha3: "KAZ", numeric: "398", name: "Kazakhstan", official_name: "Republic of Kazakhstan" },
    IsoEntry { alpha2: "UZ", alpha3: "UZB", numeric: "860", name: "Uzbekistan", official_name: "Republic of Uzbekistan" },
    IsoEntry { alpha2: "AE", alpha3: "ARE", numeric: "784", name: "United Arab Emirates", official_name: "United Arab Emirates" },
    IsoEntry { alpha2: "SA", alpha3: "SAU", numeric: "682", name: "Saudi Arabia", official_name: "Kingdom of Saudi Arabia" },
    IsoEntry { alpha2: "QA", alpha3: "QAT", numeric: "634", name: "Qatar", official_name: "State of Qatar" },
    IsoEntry { alpha2: "KW", alpha3: "KWT", numeric: "414", name: "Kuwait", official_name: "State of Kuwait" },
    IsoEntry { alpha2: "BH", alpha3: "BHR", numeric: "048", name: "Bahrain", official_name: "Kingdom of Bahrain" },
    IsoEntry { alpha2: "OM", alpha3: "OMN", numeric: "512", name: "Oman", official_name: "Sultanate of Oman" },
    IsoEntry { alpha2: "IL", alpha3: "ISR", numeric: "376", name: "Israel", official_name: "State of Israel" },
    IsoEntry { alpha2: "PS", alpha3: "PSE", numeric: "275", name: "Palestine", official_name: "State of Palestine" },
    IsoEntry { alpha2: "JO", alpha3: "JOR", numeric: "400", name: "Jordan", official_name: "Hashemite Kingdom of Jordan" },
    IsoEntry { alpha2: "LB", alpha3: "LBN", numeric: "422", name: "Lebanon", official_name: "Lebanese Republic" },
    IsoEntry { alpha2: "SY", alpha3: "SYR", numeric: "760", name: "Syrian Arab Republic", official_name: "Syrian Arab Republic" },
    IsoEntry { alpha2: "IQ", alpha3: "IRQ", numeric: "368", name: "Iraq", official_name: "Republic of Iraq" },
    IsoEntry { alpha2: "IR", alpha3: "IRN", numeric: "364", name: "Iran", official_name: "Islamic Republic of Iran" },
    IsoEntry { alpha2: "AF", alpha3: "AFG", numeric: "004", name: "Afghanistan", official_name: "Islamic Emirate of Afghanistan" },
    IsoEntry { alpha2: "EG", alpha3: "EGY", numeric: "818", name: "Egypt", official_name: "Arab Republic of Egypt" },
    IsoEntry { alpha2: "ZA", alpha3: "ZAF", numeric: "710", name: "South Africa", official_name: "Republic of South Africa" },
    IsoEntry { alpha2: "NG", alpha3: "NGA", numeric: "566", name: "Nigeria", official_name: "Federal Republic of Nigeria" },
    IsoEntry { alpha2: "KE", alpha3: "KEN", numeric: "404", name: "Kenya", official_name: "Republic of Kenya" },
    IsoEntry { alpha2: "ET", alpha3: "ETH", numeric: "231", name: "Ethiopia", official_name: "Federal Democratic Republic of Ethiopia" },
    IsoEntry { alpha2: "GH", alpha3: "GHA", numeric: "288", name: "Ghana", official_name: "Republic of Ghana" },
    IsoEntry { alpha2: "CI", alpha3: "CIV", numeric: "384", name: "Cote d'Ivoire", official_name: "Republic of Cote d'Ivoire" },
    IsoEntry { alpha2: "CV", alpha3: "CPV", numeric: "132", name: "Cabo Verde", official_name: "Republic of Cabo Verde" },
    IsoEntry { alpha2: "MA", alpha3: "MAR", numeric: "504", name: "Morocco", official_name: "Kingdom of Morocco" },
    IsoEntry { alpha2: "DZ", alpha3: "DZA", numeric: "012", name: "Algeria", official_name: "People's Democratic Republic of Algeria" },
    IsoEntry { alpha2: "TN", alpha3: "TUN", numeric: "788", name: "Tunisia", official_name: "Republic of Tunisia" },
    IsoEntry { alpha2: "LY", alpha3: "LBY", numeric: "434", name: "Libya", official_name: "State of Libya" },
    IsoEntry { alpha2: "CD", alpha3: "COD", numeric: "180", name: "DR Congo", official_name: "Democratic Republic of the Congo" },
    IsoEntry { alpha2: "CG", alpha3: "COG", numeric: "178", name: "Congo", official_name: "Republic of the Congo" },
    IsoEntry { alpha2: "ZM", alpha3: "ZMB", numeric: "894", name: "Zambia", official_name: "Republic of Zambia" },
    IsoEntry { alpha2: "ZW", alpha3: "ZWE", numeric: "716", name: "Zimbabwe", official_name: "Republic of Zimbabwe" },
    IsoEntry { alpha2: "TZ", alpha3: "TZA", numeric: "834", name: "Tanzania", official_name: "United Republic of Tanzania" },
    IsoEntry { alpha2: "UG", alpha3: "UGA", numeric: "800", name: "Uganda", official_name: "Republic of Uganda" },
    IsoEntry { alpha2: "MZ", alpha3: "MOZ", numeric: "508", name: "Mozambique", official_name: "Republic of Mozambique" },
    IsoEntry { alpha2: "NA", alpha3: "NAM", numeric: "516", name: "Namibia", official_name: "Republic of Namibia" },
    IsoEntry { alpha2: "BW", alpha3: "BWA", numeric: "072", name: "Botswana", official_name: "Republic of Botswana" },
    IsoEntry { alpha2: "SZ", alpha3: "SWZ", numeric: "748", name: "Eswatini", official_name: "Kingdom of Eswatini" },
    IsoEntry { alpha2: "MW", alpha3: "MWI", numeric: "454", name: "Malawi", official_name: "Republic of Malawi" },
    IsoEntry { alpha2: "SN", alpha3: "SEN", numeric: "686", name: "Senegal", official_name: "Republic of Senegal" },
    IsoEntry { alpha2: "ML", alpha3: "MLI", numeric: "466", name: "Mali", official_name: "Republic of Mali" },
    IsoEntry { alpha2: "GN", alpha3: "GIN", numeric: "324", name: "Guinea", official_name: "Republic of Guinea" },
    IsoEntry { alpha2: "BR", alpha3: "BRA", numeric: "076", name: "Brazil", official_name: "Federative Republic of Brazil" },
    IsoEntry { alpha2: "MX", alpha3: "MEX", numeric: "484", name: "Mexico", official_name: "United Mexican States" },
    IsoEntry { alpha2: "AR", alpha3: "ARG", numeric: "032", name: "Argentina", official_name: "Argentine Republic" },
    IsoEntry { alpha2: "CL", alpha3: "CHL", numeric: "152", name: "Chile", official_name: "Republic of Chile" },
    IsoEntry { alpha2: "PE", alpha3: "PER", numeric: "604", name: "Peru", official_name: "Republic of Peru" },
    IsoEntry { alpha2: "CO", alpha3: "COL", numeric: "170", name: "Colombia", official_name: "Republic of Colombia" },
    IsoEntry { alpha2: "VE", alpha3: "VEN", numeric: "862", name: "Venezuela", official_name: "Bolivarian Republic of Venezuela" },
    IsoEntry { alpha2: "EC", alpha3: "ECU", numeric: "218", name: "Ecuador", official_name: "Republic of Ecuador" },
    IsoEntry { alpha2: "BO", alpha3: "BOL", numeric: "068", name: "Bolivia", official_name: "Plurinational State of Bolivia" },
    IsoEntry { alpha2: "PY", alpha3: "PRY", numeric: "600", name: "Paraguay", official_name: "Republic of Paraguay" },
    IsoEntry { alpha2: "UY", alpha3: "URY", numeric: "858", name: "Uruguay", official_name: "Oriental Republic of Uruguay" },
    IsoEntry { alpha2: "GY", alpha3: "GUY", numeric: "328", name: "Guyana", official_name: "Co-operative Republic of Guyana" },
    IsoEntry { alpha2: "SR", alpha3: "SUR", numeric: "740", name: "Suriname", official_name: "Republic of Suriname" },
    IsoEntry { alpha2: "PA", alpha3: "PAN", numeric: "591", name: "Panama", official_name: "Republic of Panama" },
    IsoEntry { alpha2: "CR", alpha3: "CRI", numeric: "188", name: "Costa Rica", official_name: "Republic of Costa Rica" },
    IsoEntry { alpha2: "GT", alpha3: "GTM", numeric: "320", name: "Guatemala", official_name: "Republic of Guatemala" },
    IsoEntry { alpha2: "HN", alpha3: "HND", numeric: "340", name: "Honduras", official_name: "Republic of Honduras" },
    IsoEntry { alpha2: "SV", alpha3: "SLV", numeric: "222", name: "El Salvador", official_name: "Republic of El Salvador" },
    IsoEntry { alpha2: "NI", alpha3: "NIC", numeric: "558", name: "Nicaragua", official_name: "Republic of Nicaragua" },
    IsoEntry { alpha2: "CU", alpha3: "CUB", numeric: "192", name: "Cuba", official_name: "Republic of Cuba" },
    IsoEntry { alpha2: "DO", alpha3: "DOM", numeric: "214", name: "Dominican Republic", official_name: "Dominican Republic" },
    IsoEntry { alpha2: "JM", alpha3: "JAM", numeric: "388", name: "Jamaica", official_name: "Jamaica" },
    IsoEntry { alpha2: "TT", alpha3: "TTO", numeric: "780", name: "Trinidad and Tobago", official_name: "Republic of Trinidad and Tobago" },
    IsoEntry { alpha2: "FM", alpha3: "FSM", numeric: "583", name: "Micronesia", official_name: "Federated States of Micronesia" },
    IsoEntry { alpha2: "VA", alpha3: "VAT", numeric: "336", name: "Holy See", official_name: "Holy See" },
    IsoEntry { alpha2: "XK", alpha3: "XKX", numeric: "000", name: "Kosovo", official_name: "Republic of Kosovo" },
];
