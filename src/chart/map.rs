//! Region and code tables for map charts.

use crate::{Result, SmartChartError};

/// Region shown when none is given.
pub const DEFAULT_REGION: &str = "world";

/// Regions the map chart can draw.
pub const REGIONS: &[&str] = &[
    "africa",
    "asia",
    "europe",
    "middle_east",
    "south_america",
    "usa",
    "world",
];

/// Region whose labels are US state codes instead of country codes.
pub const USA_REGION: &str = "usa";

/// Two-letter codes of the fifty US states.
pub const US_STATE_CODES: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", "HI", "ID", "IL", "IN", "IA",
    "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ",
    "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT",
    "VA", "WA", "WV", "WI", "WY",
];

/// ISO 3166-1 alpha-2 country codes.
pub const COUNTRY_CODES: &[&str] = &[
    "AD", "AE", "AF", "AG", "AI", "AL", "AM", "AO", "AQ", "AR", "AS", "AT", "AU", "AW", "AX",
    "AZ", "BA", "BB", "BD", "BE", "BF", "BG", "BH", "BI", "BJ", "BL", "BM", "BN", "BO", "BQ",
    "BR", "BS", "BT", "BV", "BW", "BY", "BZ", "CA", "CC", "CD", "CF", "CG", "CH", "CI", "CK",
    "CL", "CM", "CN", "CO", "CR", "CU", "CV", "CW", "CX", "CY", "CZ", "DE", "DJ", "DK", "DM",
    "DO", "DZ", "EC", "EE", "EG", "EH", "ER", "ES", "ET", "FI", "FJ", "FK", "FM", "FO", "FR",
    "GA", "GB", "GD", "GE", "GF", "GG", "GH", "GI", "GL", "GM", "GN", "GP", "GQ", "GR", "GS",
    "GT", "GU", "GW", "GY", "HK", "HM", "HN", "HR", "HT", "HU", "ID", "IE", "IL", "IM", "IN",
    "IO", "IQ", "IR", "IS", "IT", "JE", "JM", "JO", "JP", "KE", "KG", "KH", "KI", "KM", "KN",
    "KP", "KR", "KW", "KY", "KZ", "LA", "LB", "LC", "LI", "LK", "LR", "LS", "LT", "LU", "LV",
    "LY", "MA", "MC", "MD", "ME", "MF", "MG", "MH", "MK", "ML", "MM", "MN", "MO", "MP", "MQ",
    "MR", "MS", "MT", "MU", "MV", "MW", "MX", "MY", "MZ", "NA", "NC", "NE", "NF", "NG", "NI",
    "NL", "NO", "NP", "NR", "NU", "NZ", "OM", "PA", "PE", "PF", "PG", "PH", "PK", "PL", "PM",
    "PN", "PR", "PS", "PT", "PW", "PY", "QA", "RE", "RO", "RS", "RU", "RW", "SA", "SB", "SC",
    "SD", "SE", "SG", "SH", "SI", "SJ", "SK", "SL", "SM", "SN", "SO", "SR", "SS", "ST", "SV",
    "SX", "SY", "SZ", "TC", "TD", "TF", "TG", "TH", "TJ", "TK", "TL", "TM", "TN", "TO", "TR",
    "TT", "TV", "TW", "TZ", "UA", "UG", "UM", "US", "UY", "UZ", "VA", "VC", "VE", "VG", "VI",
    "VN", "VU", "WF", "WS", "YE", "YT", "ZA", "ZM", "ZW",
];

/// # Errors
/// Returns [`SmartChartError::DataFormat`] naming the valid regions.
pub fn check_region(region: &str) -> Result<()> {
    if REGIONS.contains(&region) {
        return Ok(());
    }
    Err(SmartChartError::DataFormat(format!(
        "Region '{region}' is not valid. Try one of: {}",
        REGIONS.join(", ")
    )))
}

/// Checks every label against the code table of `region`.
///
/// # Errors
/// Returns [`SmartChartError::DataFormat`] listing all unknown codes.
pub fn check_codes<'a>(region: &str, labels: impl IntoIterator<Item = &'a str>) -> Result<()> {
    let (table, kind) = if region == USA_REGION {
        (US_STATE_CODES, "US state")
    } else {
        (COUNTRY_CODES, "country")
    };
    let invalid: Vec<&str> = labels
        .into_iter()
        .filter(|label| !table.contains(label))
        .collect();
    if invalid.is_empty() {
        return Ok(());
    }
    Err(SmartChartError::DataFormat(format!(
        "Invalid {kind} code(s): {}",
        invalid.join(", ")
    )))
}

#[cfg(test)]
#[path = "map_tests.rs"]
mod tests;
