use once_cell::sync::Lazy;

/// One entry in the static country table used to derive phone dialing codes
/// and flags from free-text country input.
#[derive(Debug, Clone)]
pub struct Country {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub dial_code: &'static str,
    pub flag: &'static str,
}

static COUNTRIES: Lazy<Vec<Country>> = Lazy::new(|| {
    vec![
        Country { name: "United States", aliases: &["usa", "us", "america"], dial_code: "+1", flag: "\u{1F1FA}\u{1F1F8}" },
        Country { name: "United Kingdom", aliases: &["uk", "great britain", "england"], dial_code: "+44", flag: "\u{1F1EC}\u{1F1E7}" },
        Country { name: "United Arab Emirates", aliases: &["uae", "emirates"], dial_code: "+971", flag: "\u{1F1E6}\u{1F1EA}" },
        Country { name: "Canada", aliases: &[], dial_code: "+1", flag: "\u{1F1E8}\u{1F1E6}" },
        Country { name: "Australia", aliases: &[], dial_code: "+61", flag: "\u{1F1E6}\u{1F1FA}" },
        Country { name: "Germany", aliases: &["deutschland"], dial_code: "+49", flag: "\u{1F1E9}\u{1F1EA}" },
        Country { name: "France", aliases: &[], dial_code: "+33", flag: "\u{1F1EB}\u{1F1F7}" },
        Country { name: "Italy", aliases: &[], dial_code: "+39", flag: "\u{1F1EE}\u{1F1F9}" },
        Country { name: "Spain", aliases: &[], dial_code: "+34", flag: "\u{1F1EA}\u{1F1F8}" },
        Country { name: "Netherlands", aliases: &["holland"], dial_code: "+31", flag: "\u{1F1F3}\u{1F1F1}" },
        Country { name: "Pakistan", aliases: &[], dial_code: "+92", flag: "\u{1F1F5}\u{1F1F0}" },
        Country { name: "India", aliases: &[], dial_code: "+91", flag: "\u{1F1EE}\u{1F1F3}" },
        Country { name: "Bangladesh", aliases: &[], dial_code: "+880", flag: "\u{1F1E7}\u{1F1E9}" },
        Country { name: "China", aliases: &[], dial_code: "+86", flag: "\u{1F1E8}\u{1F1F3}" },
        Country { name: "Japan", aliases: &[], dial_code: "+81", flag: "\u{1F1EF}\u{1F1F5}" },
        Country { name: "South Korea", aliases: &["korea"], dial_code: "+82", flag: "\u{1F1F0}\u{1F1F7}" },
        Country { name: "Saudi Arabia", aliases: &["ksa"], dial_code: "+966", flag: "\u{1F1F8}\u{1F1E6}" },
        Country { name: "Turkey", aliases: &["turkiye"], dial_code: "+90", flag: "\u{1F1F9}\u{1F1F7}" },
        Country { name: "Brazil", aliases: &[], dial_code: "+55", flag: "\u{1F1E7}\u{1F1F7}" },
        Country { name: "Mexico", aliases: &[], dial_code: "+52", flag: "\u{1F1F2}\u{1F1FD}" },
        Country { name: "Egypt", aliases: &[], dial_code: "+20", flag: "\u{1F1EA}\u{1F1EC}" },
        Country { name: "Nigeria", aliases: &[], dial_code: "+234", flag: "\u{1F1F3}\u{1F1EC}" },
        Country { name: "South Africa", aliases: &[], dial_code: "+27", flag: "\u{1F1FF}\u{1F1E6}" },
        Country { name: "Indonesia", aliases: &[], dial_code: "+62", flag: "\u{1F1EE}\u{1F1E9}" },
        Country { name: "Malaysia", aliases: &[], dial_code: "+60", flag: "\u{1F1F2}\u{1F1FE}" },
        Country { name: "Singapore", aliases: &[], dial_code: "+65", flag: "\u{1F1F8}\u{1F1EC}" },
        Country { name: "Russia", aliases: &[], dial_code: "+7", flag: "\u{1F1F7}\u{1F1FA}" },
        Country { name: "Sweden", aliases: &[], dial_code: "+46", flag: "\u{1F1F8}\u{1F1EA}" },
        Country { name: "Norway", aliases: &[], dial_code: "+47", flag: "\u{1F1F3}\u{1F1F4}" },
        Country { name: "Ireland", aliases: &[], dial_code: "+353", flag: "\u{1F1EE}\u{1F1EA}" },
    ]
});

/// Case-insensitive match of free-text input against the country table.
///
/// Name prefix matches win over name substring matches, which win over alias
/// matches, so typing "United" settles on United States while "UK" still
/// reaches United Kingdom. Empty input matches nothing.
pub fn match_country(input: &str) -> Option<&'static Country> {
    let needle = input.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    COUNTRIES
        .iter()
        .find(|c| c.name.to_lowercase().starts_with(&needle))
        .or_else(|| {
            COUNTRIES
                .iter()
                .find(|c| c.name.to_lowercase().contains(&needle))
        })
        .or_else(|| {
            COUNTRIES.iter().find(|c| {
                c.aliases
                    .iter()
                    .any(|a| *a == needle || a.starts_with(&needle))
            })
        })
}

/// Dialing code for the given country input, if it matches the table.
pub fn dial_code_for(input: &str) -> Option<&'static str> {
    match_country(input).map(|c| c.dial_code)
}
