use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Service categories offered by the laundry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ServiceCategory {
    DryClean,
    Ironing,
    WashAndFold,
}

impl ServiceCategory {
    /// All categories, in the order the app presents them
    pub const ALL: [ServiceCategory; 3] = [
        ServiceCategory::DryClean,
        ServiceCategory::Ironing,
        ServiceCategory::WashAndFold,
    ];
}

impl fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceCategory::DryClean => write!(f, "dryClean"),
            ServiceCategory::Ironing => write!(f, "ironing"),
            ServiceCategory::WashAndFold => write!(f, "washAndFold"),
        }
    }
}

impl FromStr for ServiceCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dryclean" => Ok(ServiceCategory::DryClean),
            "ironing" => Ok(ServiceCategory::Ironing),
            "washandfold" => Ok(ServiceCategory::WashAndFold),
            _ => Err(format!("Invalid service category: {}", s)),
        }
    }
}
