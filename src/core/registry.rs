//! Static ISO 3166-1 country registry with official currencies and continent codes.

use serde::Serialize;
use std::fmt::Display;

/// A single registry entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryEntry {
    pub alpha2: &'static str,
    pub alpha3: &'static str,
    pub name: &'static str,
    /// ISO 4217 code; territories without a currency of their own carry `None`.
    pub currency: Option<&'static str>,
    /// Two-letter continent code (AF, AS, OC, EU, NA, SA, AN).
    pub continent_code: Option<&'static str>,
}

const fn entry(
    alpha2: &'static str,
    alpha3: &'static str,
    name: &'static str,
    currency: &'static str,
    continent_code: &'static str,
) -> CountryEntry {
    CountryEntry {
        alpha2,
        alpha3,
        name,
        currency: if currency.is_empty() { None } else { Some(currency) },
        continent_code: if continent_code.is_empty() {
            None
        } else {
            Some(continent_code)
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Continent {
    Africa,
    Americas,
    Asia,
    Europe,
    Oceania,
    Antarctica,
}

impl Continent {
    /// Maps a continent code to its label. North and South America are merged.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "AF" => Some(Continent::Africa),
            "AS" => Some(Continent::Asia),
            "OC" => Some(Continent::Oceania),
            "EU" => Some(Continent::Europe),
            "NA" | "SA" => Some(Continent::Americas),
            "AN" => Some(Continent::Antarctica),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Continent::Africa => "Africa",
            Continent::Americas => "Americas",
            Continent::Asia => "Asia",
            Continent::Europe => "Europe",
            Continent::Oceania => "Oceania",
            Continent::Antarctica => "Antarctica",
        }
    }
}

impl Display for Continent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Names in everyday use, keyed by alpha-2.
pub const COMMON_NAMES: &[(&str, &str)] = &[
    ("BN", "Brunei"),
    ("BO", "Bolivia"),
    ("CD", "DR Congo"),
    ("CI", "Ivory Coast"),
    ("CV", "Cape Verde"),
    ("CZ", "Czech Republic"),
    ("FM", "Micronesia"),
    ("IR", "Iran"),
    ("KP", "North Korea"),
    ("KR", "South Korea"),
    ("LA", "Laos"),
    ("MD", "Moldova"),
    ("PS", "Palestine"),
    ("RU", "Russia"),
    ("SY", "Syria"),
    ("TR", "Turkey"),
    ("TW", "Taiwan"),
    ("TZ", "Tanzania"),
    ("VA", "Vatican City"),
    ("VE", "Venezuela"),
    ("VN", "Vietnam"),
];

pub const OFFICIAL_NAMES: &[(&str, &str)] = &[
    ("AR", "Argentine Republic"),
    ("AT", "Republic of Austria"),
    ("AU", "Commonwealth of Australia"),
    ("BE", "Kingdom of Belgium"),
    ("BR", "Federative Republic of Brazil"),
    ("CH", "Swiss Confederation"),
    ("CL", "Republic of Chile"),
    ("CN", "People's Republic of China"),
    ("CO", "Republic of Colombia"),
    ("CZ", "Czech Republic"),
    ("DE", "Federal Republic of Germany"),
    ("DK", "Kingdom of Denmark"),
    ("EG", "Arab Republic of Egypt"),
    ("ES", "Kingdom of Spain"),
    ("ET", "Federal Democratic Republic of Ethiopia"),
    ("FI", "Republic of Finland"),
    ("FR", "French Republic"),
    ("GB", "United Kingdom of Great Britain and Northern Ireland"),
    ("GH", "Republic of Ghana"),
    ("GR", "Hellenic Republic"),
    ("ID", "Republic of Indonesia"),
    ("IN", "Republic of India"),
    ("IT", "Italian Republic"),
    ("KE", "Republic of Kenya"),
    ("KR", "Republic of Korea"),
    ("MA", "Kingdom of Morocco"),
    ("MX", "United Mexican States"),
    ("NG", "Federal Republic of Nigeria"),
    ("NL", "Kingdom of the Netherlands"),
    ("NO", "Kingdom of Norway"),
    ("NZ", "New Zealand"),
    ("PL", "Republic of Poland"),
    ("PT", "Portuguese Republic"),
    ("SA", "Kingdom of Saudi Arabia"),
    ("SE", "Kingdom of Sweden"),
    ("TR", "Republic of Türkiye"),
    ("US", "United States of America"),
    ("ZA", "Republic of South Africa"),
];

pub const COUNTRIES: &[CountryEntry] = &[
    entry("AD", "AND", "Andorra", "EUR", "EU"),
    entry("AE", "ARE", "United Arab Emirates", "AED", "AS"),
    entry("AF", "AFG", "Afghanistan", "AFN", "AS"),
    entry("AG", "ATG", "Antigua and Barbuda", "XCD", "NA"),
    entry("AI", "AIA", "Anguilla", "XCD", "NA"),
    entry("AL", "ALB", "Albania", "ALL", "EU"),
    entry("AM", "ARM", "Armenia", "AMD", "AS"),
    entry("AO", "AGO", "Angola", "AOA", "AF"),
    entry("AQ", "ATA", "Antarctica", "", "AN"),
    entry("AR", "ARG", "Argentina", "ARS", "SA"),
    entry("AS", "ASM", "American Samoa", "USD", "OC"),
    entry("AT", "AUT", "Austria", "EUR", "EU"),
    entry("AU", "AUS", "Australia", "AUD", "OC"),
    entry("AW", "ABW", "Aruba", "AWG", "NA"),
    entry("AX", "ALA", "Åland Islands", "EUR", "EU"),
    entry("AZ", "AZE", "Azerbaijan", "AZN", "AS"),
    entry("BA", "BIH", "Bosnia and Herzegovina", "BAM", "EU"),
    entry("BB", "BRB", "Barbados", "BBD", "NA"),
    entry("BD", "BGD", "Bangladesh", "BDT", "AS"),
    entry("BE", "BEL", "Belgium", "EUR", "EU"),
    entry("BF", "BFA", "Burkina Faso", "XOF", "AF"),
    entry("BG", "BGR", "Bulgaria", "EUR", "EU"),
    entry("BH", "BHR", "Bahrain", "BHD", "AS"),
    entry("BI", "BDI", "Burundi", "BIF", "AF"),
    entry("BJ", "BEN", "Benin", "XOF", "AF"),
    entry("BL", "BLM", "Saint Barthélemy", "EUR", "NA"),
    entry("BM", "BMU", "Bermuda", "BMD", "NA"),
    entry("BN", "BRN", "Brunei Darussalam", "BND", "AS"),
    entry("BO", "BOL", "Bolivia, Plurinational State of", "BOB", "SA"),
    entry("BQ", "BES", "Bonaire, Sint Eustatius and Saba", "USD", "NA"),
    entry("BR", "BRA", "Brazil", "BRL", "SA"),
    entry("BS", "BHS", "Bahamas", "BSD", "NA"),
    entry("BT", "BTN", "Bhutan", "BTN", "AS"),
    entry("BV", "BVT", "Bouvet Island", "NOK", "AN"),
    entry("BW", "BWA", "Botswana", "BWP", "AF"),
    entry("BY", "BLR", "Belarus", "BYN", "EU"),
    entry("BZ", "BLZ", "Belize", "BZD", "NA"),
    entry("CA", "CAN", "Canada", "CAD", "NA"),
    entry("CC", "CCK", "Cocos (Keeling) Islands", "AUD", "AS"),
    entry("CD", "COD", "Congo, The Democratic Republic of the", "CDF", "AF"),
    entry("CF", "CAF", "Central African Republic", "XAF", "AF"),
    entry("CG", "COG", "Congo", "XAF", "AF"),
    entry("CH", "CHE", "Switzerland", "CHF", "EU"),
    entry("CI", "CIV", "Côte d'Ivoire", "XOF", "AF"),
    entry("CK", "COK", "Cook Islands", "NZD", "OC"),
    entry("CL", "CHL", "Chile", "CLP", "SA"),
    entry("CM", "CMR", "Cameroon", "XAF", "AF"),
    entry("CN", "CHN", "China", "CNY", "AS"),
    entry("CO", "COL", "Colombia", "COP", "SA"),
    entry("CR", "CRI", "Costa Rica", "CRC", "NA"),
    entry("CU", "CUB", "Cuba", "CUP", "NA"),
    entry("CV", "CPV", "Cabo Verde", "CVE", "AF"),
    entry("CW", "CUW", "Curaçao", "ANG", "NA"),
    entry("CX", "CXR", "Christmas Island", "AUD", "AS"),
    entry("CY", "CYP", "Cyprus", "EUR", "EU"),
    entry("CZ", "CZE", "Czechia", "CZK", "EU"),
    entry("DE", "DEU", "Germany", "EUR", "EU"),
    entry("DJ", "DJI", "Djibouti", "DJF", "AF"),
    entry("DK", "DNK", "Denmark", "DKK", "EU"),
    entry("DM", "DMA", "Dominica", "XCD", "NA"),
    entry("DO", "DOM", "Dominican Republic", "DOP", "NA"),
    entry("DZ", "DZA", "Algeria", "DZD", "AF"),
    entry("EC", "ECU", "Ecuador", "USD", "SA"),
    entry("EE", "EST", "Estonia", "EUR", "EU"),
    entry("EG", "EGY", "Egypt", "EGP", "AF"),
    entry("EH", "ESH", "Western Sahara", "MAD", ""),
    entry("ER", "ERI", "Eritrea", "ERN", "AF"),
    entry("ES", "ESP", "Spain", "EUR", "EU"),
    entry("ET", "ETH", "Ethiopia", "ETB", "AF"),
    entry("FI", "FIN", "Finland", "EUR", "EU"),
    entry("FJ", "FJI", "Fiji", "FJD", "OC"),
    entry("FK", "FLK", "Falkland Islands (Malvinas)", "FKP", "SA"),
    entry("FM", "FSM", "Micronesia, Federated States of", "USD", "OC"),
    entry("FO", "FRO", "Faroe Islands", "DKK", "EU"),
    entry("FR", "FRA", "France", "EUR", "EU"),
    entry("GA", "GAB", "Gabon", "XAF", "AF"),
    entry("GB", "GBR", "United Kingdom", "GBP", "EU"),
    entry("GD", "GRD", "Grenada", "XCD", "NA"),
    entry("GE", "GEO", "Georgia", "GEL", "AS"),
    entry("GF", "GUF", "French Guiana", "EUR", "SA"),
    entry("GG", "GGY", "Guernsey", "GBP", "EU"),
    entry("GH", "GHA", "Ghana", "GHS", "AF"),
    entry("GI", "GIB", "Gibraltar", "GIP", "EU"),
    entry("GL", "GRL", "Greenland", "DKK", "NA"),
    entry("GM", "GMB", "Gambia", "GMD", "AF"),
    entry("GN", "GIN", "Guinea", "GNF", "AF"),
    entry("GP", "GLP", "Guadeloupe", "EUR", "NA"),
    entry("GQ", "GNQ", "Equatorial Guinea", "XAF", "AF"),
    entry("GR", "GRC", "Greece", "EUR", "EU"),
    entry("GS", "SGS", "South Georgia and the South Sandwich Islands", "GBP", "AN"),
    entry("GT", "GTM", "Guatemala", "GTQ", "NA"),
    entry("GU", "GUM", "Guam", "USD", "OC"),
    entry("GW", "GNB", "Guinea-Bissau", "XOF", "AF"),
    entry("GY", "GUY", "Guyana", "GYD", "SA"),
    entry("HK", "HKG", "Hong Kong", "HKD", "AS"),
    entry("HM", "HMD", "Heard Island and McDonald Islands", "AUD", "AN"),
    entry("HN", "HND", "Honduras", "HNL", "NA"),
    entry("HR", "HRV", "Croatia", "EUR", "EU"),
    entry("HT", "HTI", "Haiti", "HTG", "NA"),
    entry("HU", "HUN", "Hungary", "HUF", "EU"),
    entry("ID", "IDN", "Indonesia", "IDR", "AS"),
    entry("IE", "IRL", "Ireland", "EUR", "EU"),
    entry("IL", "ISR", "Israel", "ILS", "AS"),
    entry("IM", "IMN", "Isle of Man", "GBP", "EU"),
    entry("IN", "IND", "India", "INR", "AS"),
    entry("IO", "IOT", "British Indian Ocean Territory", "USD", "AS"),
    entry("IQ", "IRQ", "Iraq", "IQD", "AS"),
    entry("IR", "IRN", "Iran, Islamic Republic of", "IRR", "AS"),
    entry("IS", "ISL", "Iceland", "ISK", "EU"),
    entry("IT", "ITA", "Italy", "EUR", "EU"),
    entry("JE", "JEY", "Jersey", "GBP", "EU"),
    entry("JM", "JAM", "Jamaica", "JMD", "NA"),
    entry("JO", "JOR", "Jordan", "JOD", "AS"),
    entry("JP", "JPN", "Japan", "JPY", "AS"),
    entry("KE", "KEN", "Kenya", "KES", "AF"),
    entry("KG", "KGZ", "Kyrgyzstan", "KGS", "AS"),
    entry("KH", "KHM", "Cambodia", "KHR", "AS"),
    entry("KI", "KIR", "Kiribati", "AUD", "OC"),
    entry("KM", "COM", "Comoros", "KMF", "AF"),
    entry("KN", "KNA", "Saint Kitts and Nevis", "XCD", "NA"),
    entry("KP", "PRK", "Korea, Democratic People's Republic of", "KPW", "AS"),
    entry("KR", "KOR", "Korea, Republic of", "KRW", "AS"),
    entry("KW", "KWT", "Kuwait", "KWD", "AS"),
    entry("KY", "CYM", "Cayman Islands", "KYD", "NA"),
    entry("KZ", "KAZ", "Kazakhstan", "KZT", "AS"),
    entry("LA", "LAO", "Lao People's Democratic Republic", "LAK", "AS"),
    entry("LB", "LBN", "Lebanon", "LBP", "AS"),
    entry("LC", "LCA", "Saint Lucia", "XCD", "NA"),
    entry("LI", "LIE", "Liechtenstein", "CHF", "EU"),
    entry("LK", "LKA", "Sri Lanka", "LKR", "AS"),
    entry("LR", "LBR", "Liberia", "LRD", "AF"),
    entry("LS", "LSO", "Lesotho", "LSL", "AF"),
    entry("LT", "LTU", "Lithuania", "EUR", "EU"),
    entry("LU", "LUX", "Luxembourg", "EUR", "EU"),
    entry("LV", "LVA", "Latvia", "EUR", "EU"),
    entry("LY", "LBY", "Libya", "LYD", "AF"),
    entry("MA", "MAR", "Morocco", "MAD", "AF"),
    entry("MC", "MCO", "Monaco", "EUR", "EU"),
    entry("MD", "MDA", "Moldova, Republic of", "MDL", "EU"),
    entry("ME", "MNE", "Montenegro", "EUR", "EU"),
    entry("MF", "MAF", "Saint Martin (French part)", "EUR", "NA"),
    entry("MG", "MDG", "Madagascar", "MGA", "AF"),
    entry("MH", "MHL", "Marshall Islands", "USD", "OC"),
    entry("MK", "MKD", "North Macedonia", "MKD", "EU"),
    entry("ML", "MLI", "Mali", "XOF", "AF"),
    entry("MM", "MMR", "Myanmar", "MMK", "AS"),
    entry("MN", "MNG", "Mongolia", "MNT", "AS"),
    entry("MO", "MAC", "Macao", "MOP", "AS"),
    entry("MP", "MNP", "Northern Mariana Islands", "USD", "OC"),
    entry("MQ", "MTQ", "Martinique", "EUR", "NA"),
    entry("MR", "MRT", "Mauritania", "MRU", "AF"),
    entry("MS", "MSR", "Montserrat", "XCD", "NA"),
    entry("MT", "MLT", "Malta", "EUR", "EU"),
    entry("MU", "MUS", "Mauritius", "MUR", "AF"),
    entry("MV", "MDV", "Maldives", "MVR", "AS"),
    entry("MW", "MWI", "Malawi", "MWK", "AF"),
    entry("MX", "MEX", "Mexico", "MXN", "NA"),
    entry("MY", "MYS", "Malaysia", "MYR", "AS"),
    entry("MZ", "MOZ", "Mozambique", "MZN", "AF"),
    entry("NA", "NAM", "Namibia", "NAD", "AF"),
    entry("NC", "NCL", "New Caledonia", "XPF", "OC"),
    entry("NE", "NER", "Niger", "XOF", "AF"),
    entry("NF", "NFK", "Norfolk Island", "AUD", "OC"),
    entry("NG", "NGA", "Nigeria", "NGN", "AF"),
    entry("NI", "NIC", "Nicaragua", "NIO", "NA"),
    entry("NL", "NLD", "Netherlands", "EUR", "EU"),
    entry("NO", "NOR", "Norway", "NOK", "EU"),
    entry("NP", "NPL", "Nepal", "NPR", "AS"),
    entry("NR", "NRU", "Nauru", "AUD", "OC"),
    entry("NU", "NIU", "Niue", "NZD", "OC"),
    entry("NZ", "NZL", "New Zealand", "NZD", "OC"),
    entry("OM", "OMN", "Oman", "OMR", "AS"),
    entry("PA", "PAN", "Panama", "PAB", "NA"),
    entry("PE", "PER", "Peru", "PEN", "SA"),
    entry("PF", "PYF", "French Polynesia", "XPF", "OC"),
    entry("PG", "PNG", "Papua New Guinea", "PGK", "OC"),
    entry("PH", "PHL", "Philippines", "PHP", "AS"),
    entry("PK", "PAK", "Pakistan", "PKR", "AS"),
    entry("PL", "POL", "Poland", "PLN", "EU"),
    entry("PM", "SPM", "Saint Pierre and Miquelon", "EUR", "NA"),
    entry("PN", "PCN", "Pitcairn", "NZD", ""),
    entry("PR", "PRI", "Puerto Rico", "USD", "NA"),
    entry("PS", "PSE", "Palestine, State of", "ILS", "AS"),
    entry("PT", "PRT", "Portugal", "EUR", "EU"),
    entry("PW", "PLW", "Palau", "USD", "OC"),
    entry("PY", "PRY", "Paraguay", "PYG", "SA"),
    entry("QA", "QAT", "Qatar", "QAR", "AS"),
    entry("RE", "REU", "Réunion", "EUR", "AF"),
    entry("RO", "ROU", "Romania", "RON", "EU"),
    entry("RS", "SRB", "Serbia", "RSD", "EU"),
    entry("RU", "RUS", "Russian Federation", "RUB", "EU"),
    entry("RW", "RWA", "Rwanda", "RWF", "AF"),
    entry("SA", "SAU", "Saudi Arabia", "SAR", "AS"),
    entry("SB", "SLB", "Solomon Islands", "SBD", "OC"),
    entry("SC", "SYC", "Seychelles", "SCR", "AF"),
    entry("SD", "SDN", "Sudan", "SDG", "AF"),
    entry("SE", "SWE", "Sweden", "SEK", "EU"),
    entry("SG", "SGP", "Singapore", "SGD", "AS"),
    entry("SH", "SHN", "Saint Helena, Ascension and Tristan da Cunha", "SHP", "AF"),
    entry("SI", "SVN", "Slovenia", "EUR", "EU"),
    entry("SJ", "SJM", "Svalbard and Jan Mayen", "NOK", "EU"),
    entry("SK", "SVK", "Slovakia", "EUR", "EU"),
    entry("SL", "SLE", "Sierra Leone", "SLE", "AF"),
    entry("SM", "SMR", "San Marino", "EUR", "EU"),
    entry("SN", "SEN", "Senegal", "XOF", "AF"),
    entry("SO", "SOM", "Somalia", "SOS", "AF"),
    entry("SR", "SUR", "Suriname", "SRD", "SA"),
    entry("SS", "SSD", "South Sudan", "SSP", "AF"),
    entry("ST", "STP", "Sao Tome and Principe", "STN", "AF"),
    entry("SV", "SLV", "El Salvador", "USD", "NA"),
    entry("SX", "SXM", "Sint Maarten (Dutch part)", "ANG", ""),
    entry("SY", "SYR", "Syrian Arab Republic", "SYP", "AS"),
    entry("SZ", "SWZ", "Eswatini", "SZL", "AF"),
    entry("TC", "TCA", "Turks and Caicos Islands", "USD", "NA"),
    entry("TD", "TCD", "Chad", "XAF", "AF"),
    entry("TF", "ATF", "French Southern Territories", "EUR", ""),
    entry("TG", "TGO", "Togo", "XOF", "AF"),
    entry("TH", "THA", "Thailand", "THB", "AS"),
    entry("TJ", "TJK", "Tajikistan", "TJS", "AS"),
    entry("TK", "TKL", "Tokelau", "NZD", "OC"),
    entry("TL", "TLS", "Timor-Leste", "USD", ""),
    entry("TM", "TKM", "Turkmenistan", "TMT", "AS"),
    entry("TN", "TUN", "Tunisia", "TND", "AF"),
    entry("TO", "TON", "Tonga", "TOP", "OC"),
    entry("TR", "TUR", "Türkiye", "TRY", "AS"),
    entry("TT", "TTO", "Trinidad and Tobago", "TTD", "NA"),
    entry("TV", "TUV", "Tuvalu", "AUD", "OC"),
    entry("TW", "TWN", "Taiwan, Province of China", "TWD", "AS"),
    entry("TZ", "TZA", "Tanzania, United Republic of", "TZS", "AF"),
    entry("UA", "UKR", "Ukraine", "UAH", "EU"),
    entry("UG", "UGA", "Uganda", "UGX", "AF"),
    entry("UM", "UMI", "United States Minor Outlying Islands", "USD", ""),
    entry("US", "USA", "United States", "USD", "NA"),
    entry("UY", "URY", "Uruguay", "UYU", "SA"),
    entry("UZ", "UZB", "Uzbekistan", "UZS", "AS"),
    entry("VA", "VAT", "Holy See (Vatican City State)", "EUR", ""),
    entry("VC", "VCT", "Saint Vincent and the Grenadines", "XCD", "NA"),
    entry("VE", "VEN", "Venezuela, Bolivarian Republic of", "VES", "SA"),
    entry("VG", "VGB", "Virgin Islands, British", "USD", "NA"),
    entry("VI", "VIR", "Virgin Islands, U.S.", "USD", "NA"),
    entry("VN", "VNM", "Viet Nam", "VND", "AS"),
    entry("VU", "VUT", "Vanuatu", "VUV", "OC"),
    entry("WF", "WLF", "Wallis and Futuna", "XPF", "OC"),
    entry("WS", "WSM", "Samoa", "WST", "OC"),
    entry("YE", "YEM", "Yemen", "YER", "AS"),
    entry("YT", "MYT", "Mayotte", "EUR", "AF"),
    entry("ZA", "ZAF", "South Africa", "ZAR", "AF"),
    entry("ZM", "ZMB", "Zambia", "ZMW", "AF"),
    entry("ZW", "ZWE", "Zimbabwe", "ZWG", "AF"),
];
