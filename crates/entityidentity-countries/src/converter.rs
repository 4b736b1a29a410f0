//! External alias converter table (spec.md §4.7 stage 1): "a library that
//! maps many popular variants... directly to ISO-2" — native-language
//! endonyms and common abbreviations, as opposed to `aliases.rs`'s
//! hand-curated English colloquialisms (stage 3). Grounded on
//! `country_converter`'s regex-based name table, which `fuzzycountry.py`
//! calls before ever reaching its own manual alias dict
//! (`examples/original_source/entityidentity/countries/fuzzycountry.py`'s
//! docstring cites `country_identifier("Deutschland") == 'DE'` via this
//! stage).

pub const CONVERTER_ALIASES: &[(&str, &str)] = &[
    ("deutschland", "DE"),
    ("allemagne", "DE"),
    ("espana", "ES"),
    ("italia", "IT"),
    ("brasil", "BR"),
    ("nihon", "JP"),
    ("nippon", "JP"),
    ("zhongguo", "CN"),
    ("zhonghua", "CN"),
    ("nederland", "NL"),
    ("sverige", "SE"),
    ("norge", "NO"),
    ("suomi", "FI"),
    ("polska", "PL"),
    ("hellas", "GR"),
    ("ellada", "GR"),
    ("misr", "EG"),
    ("osterreich", "AT"),
    ("schweiz", "CH"),
    ("suisse", "CH"),
    ("svizzera", "CH"),
    ("hrvatska", "HR"),
    ("eire", "IE"),
    ("turkiye", "TR"),
    ("bharat", "IN"),
    ("magyarorszag", "HU"),
    ("usa", "US"),
    ("ivory coast", "CI"),
];
