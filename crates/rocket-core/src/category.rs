//! Categorical labels derived from raw codes
//!
//! Each recoder is a total function from its raw integer code to a label.
//! Codes outside the documented range map to `Na` instead of failing.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Generates `as_str`, `Display` and an ordered `ALL` list for a label enum
macro_rules! labels {
    ($ty:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        impl $ty {
            /// Every label, in ordinal order
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($ty::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

/// Generic yes/no category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YesNo {
    No,
    Yes,
}

labels!(YesNo { No => "no", Yes => "yes" });

impl From<bool> for YesNo {
    fn from(value: bool) -> Self {
        if value {
            YesNo::Yes
        } else {
            YesNo::No
        }
    }
}

impl YesNo {
    pub fn is_yes(&self) -> bool {
        matches!(self, YesNo::Yes)
    }
}

/// Waterfront flag (raw 0/1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Waterfront {
    No,
    Yes,
    Na,
}

labels!(Waterfront { No => "no", Yes => "yes", Na => "na" });

impl Waterfront {
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Waterfront::No,
            1 => Waterfront::Yes,
            _ => Waterfront::Na,
        }
    }
}

/// Quality of the view (raw 0-4)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewQuality {
    #[serde(rename = "no view")]
    NoView,
    Fair,
    Average,
    Good,
    Excelent,
    Na,
}

labels!(ViewQuality {
    NoView => "no view",
    Fair => "fair",
    Average => "average",
    Good => "good",
    Excelent => "excelent",
    Na => "na",
});

impl ViewQuality {
    pub fn from_code(code: i32) -> Self {
        const BY_CODE: [ViewQuality; 5] = [
            ViewQuality::NoView,
            ViewQuality::Fair,
            ViewQuality::Average,
            ViewQuality::Good,
            ViewQuality::Excelent,
        ];
        usize::try_from(code)
            .ok()
            .and_then(|i| BY_CODE.get(i).copied())
            .unwrap_or(ViewQuality::Na)
    }
}

/// Overall condition (raw 1-5)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    Bad,
    Fair,
    Average,
    Good,
    Excelent,
    Na,
}

labels!(Condition {
    Bad => "bad",
    Fair => "fair",
    Average => "average",
    Good => "good",
    Excelent => "excelent",
    Na => "na",
});

impl Condition {
    pub fn from_code(code: i32) -> Self {
        const BY_CODE: [Condition; 5] = [
            Condition::Bad,
            Condition::Fair,
            Condition::Average,
            Condition::Good,
            Condition::Excelent,
        ];
        usize::try_from(code - 1)
            .ok()
            .and_then(|i| BY_CODE.get(i).copied())
            .unwrap_or(Condition::Na)
    }
}

/// Construction grade bucket (raw 1-13)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grade {
    Poor,
    Fair,
    Average,
    Good,
    Excelent,
    Na,
}

labels!(Grade {
    Poor => "poor",
    Fair => "fair",
    Average => "average",
    Good => "good",
    Excelent => "excelent",
    Na => "na",
});

/// Inclusive upper bound of each grade bucket, ascending
const GRADE_BUCKETS: [(i32, Grade); 5] = [
    (3, Grade::Poor),
    (5, Grade::Fair),
    (8, Grade::Average),
    (10, Grade::Good),
    (13, Grade::Excelent),
];

impl Grade {
    /// Bucket a raw grade; anything above 13 is `Na`
    ///
    /// Codes below 1 fall in the lowest bucket, `Poor`.
    pub fn from_code(code: i32) -> Self {
        GRADE_BUCKETS
            .iter()
            .find(|(upper, _)| code <= *upper)
            .map(|(_, grade)| *grade)
            .unwrap_or(Grade::Na)
    }
}

/// Meteorological season of a sale
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Fall,
}

labels!(Season {
    Winter => "winter",
    Spring => "spring",
    Summer => "summer",
    Fall => "fall",
});
