//! Colloquial country-name aliases that aren't ISO 3166-1 short/official
//! names but resolve unambiguously to one (`fuzzycountry.py::manual_aliases`).

pub const MANUAL_ALIASES: &[(&str, &str)] = &[
    ("england", "GB"),
    ("scotland", "GB"),
    ("wales", "GB"),
    ("northern ireland", "GB"),
    ("uk", "GB"),
    ("britain", "GB"),
    ("great britain", "GB"),
    ("holland", "NL"),
    ("ivory coast", "CI"),
    ("cote d ivoire", "CI"),
    ("laos", "LA"),
    ("moldova", "MD"),
    ("russia", "RU"),
    ("south korea", "KR"),
    ("north korea", "KP"),
    ("vietnam", "VN"),
    ("viet nam", "VN"),
    ("syria", "SY"),
    ("palestine", "PS"),
    ("bolivia", "BO"),
    ("brunei", "BN"),
    ("cape verde", "CV"),
    ("czechia", "CZ"),
    ("czech republic", "CZ"),
    ("eswatini", "SZ"),
    ("swaziland", "SZ"),
    ("micronesia", "FM"),
    ("vatican", "VA"),
    ("venezuela", "VE"),
    ("uae", "AE"),
    ("emirates", "AE"),
    ("myanmar", "MM"),
    ("burma", "MM"),
    ("taiwan", "TW"),
    ("america", "US"),
    ("usa", "US"),
    ("united states of america", "US"),
    ("kosovo", "XK"),
];
