use strum_macros::{Display, EnumIter, EnumString};

/// Named groups of counties used by the comparison views.
#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "kebab-case")]
pub enum RegionGroup {
    BayArea,
    CentralValley,
    SouthernCalifornia,
    NorthernCalifornia,
    LosAngelesRegion,
}

impl RegionGroup {
    pub fn fips_codes(&self) -> &'static [&'static str] {
        match self {
            // Alameda, Contra Costa, Marin, Napa, San Francisco,
            // San Mateo, Santa Clara, Solano, Sonoma
            Self::BayArea => &[
                "06001", "06013", "06041", "06055", "06075", "06081", "06085", "06095", "06097",
            ],
            Self::CentralValley => &[
                "06007", "06019", "06029", "06031", "06039", "06047", "06053", "06059", "06061",
                "06063", "06069", "06071", "06073", "06077", "06079",
            ],
            Self::SouthernCalifornia => &[
                "06037", "06065", "06071", "06073", "06079", "06083", "06099", "06107", "06111",
            ],
            Self::NorthernCalifornia => &[
                "06003", "06005", "06009", "06011", "06015", "06017", "06021", "06023", "06025",
                "06027", "06033", "06035", "06043", "06045", "06049", "06051", "06057", "06067",
                "06087", "06089", "06091", "06093", "06099", "06101", "06103", "06105",
            ],
            Self::LosAngelesRegion => &["06037", "06059", "06065", "06071"],
        }
    }
}
