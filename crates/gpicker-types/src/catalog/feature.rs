use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Picker behaviour flag
///
/// Several symbolic names share one external value (for example
/// `MULTISELECT_ENABLED` and `daa` both resolve to `"multiselectEnabled"`).
/// The upstream catalog is mirrored as-is: every name is its own variant and
/// values are allowed to collide.
///
/// Serialized as the external value. Deserialization accepts a symbolic name,
/// or an external value which resolves to the first variant declaring it.
///
/// See <https://developers.google.com/drive/picker/reference#feature>.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    Cba,
    E9,
    Hba,
    I8,
    Jca,
    K9,
    /// Show only items owned by the user
    MineOnly,
    /// Allow selecting more than one item
    MultiselectEnabled,
    /// Hide the navigation pane
    NavHidden,
    SimpleUploadEnabled,
    /// Include shared drives
    SupportDrives,
    /// Legacy spelling of shared drive support
    SupportTeamDrives,
    TDollar,
    UDollar,
    Uaa,
    VDollar,
    ADollar,
    Bca,
    Daa,
    GDollar,
    Iaa,
    Kaa,
    Laa,
    M9,
    Maa,
    N9,
    Oca,
    Qca,
    Waa,
}

impl Feature {
    const ALL: [Feature; 29] = [
        Feature::Cba,
        Feature::E9,
        Feature::Hba,
        Feature::I8,
        Feature::Jca,
        Feature::K9,
        Feature::MineOnly,
        Feature::MultiselectEnabled,
        Feature::NavHidden,
        Feature::SimpleUploadEnabled,
        Feature::SupportDrives,
        Feature::SupportTeamDrives,
        Feature::TDollar,
        Feature::UDollar,
        Feature::Uaa,
        Feature::VDollar,
        Feature::ADollar,
        Feature::Bca,
        Feature::Daa,
        Feature::GDollar,
        Feature::Iaa,
        Feature::Kaa,
        Feature::Laa,
        Feature::M9,
        Feature::Maa,
        Feature::N9,
        Feature::Oca,
        Feature::Qca,
        Feature::Waa,
    ];

    /// Every feature in declaration order
    pub fn all() -> &'static [Feature] {
        &Self::ALL
    }

    /// External value understood by the picker service
    pub fn as_str(&self) -> &'static str {
        match self {
            Feature::Cba => "shadeDialog",
            Feature::E9 => "ftd",
            Feature::Hba => "simpleUploadEnabled",
            Feature::I8 => "cropA11y",
            Feature::Jca => "urlInputVisible",
            Feature::K9 => "formsEnabled",
            Feature::MineOnly => "mineOnly",
            Feature::MultiselectEnabled => "multiselectEnabled",
            Feature::NavHidden => "navHidden",
            Feature::SimpleUploadEnabled => "simpleUploadEnabled",
            Feature::SupportDrives => "sdr",
            Feature::SupportTeamDrives => "std",
            Feature::TDollar => "mineOnly",
            Feature::UDollar => "minimal",
            Feature::Uaa => "profilePhoto",
            Feature::VDollar => "minew",
            Feature::ADollar => "horizNav",
            Feature::Bca => "sawffmi",
            Feature::Daa => "multiselectEnabled",
            Feature::GDollar => "ignoreLimits",
            Feature::Iaa => "navHidden",
            Feature::Kaa => "newDriveView",
            Feature::Laa => "newHorizNav",
            Feature::M9 => "showAttach",
            Feature::Maa => "newPhotoGridView",
            Feature::N9 => "edbe",
            Feature::Oca => "sdr",
            Feature::Qca => "std",
            Feature::Waa => "odv",
        }
    }

    /// Upstream symbolic name
    pub fn name(&self) -> &'static str {
        match self {
            Feature::Cba => "Cba",
            Feature::E9 => "E9",
            Feature::Hba => "Hba",
            Feature::I8 => "I8",
            Feature::Jca => "Jca",
            Feature::K9 => "K9",
            Feature::MineOnly => "MINE_ONLY",
            Feature::MultiselectEnabled => "MULTISELECT_ENABLED",
            Feature::NavHidden => "NAV_HIDDEN",
            Feature::SimpleUploadEnabled => "SIMPLE_UPLOAD_ENABLED",
            Feature::SupportDrives => "SUPPORT_DRIVES",
            Feature::SupportTeamDrives => "SUPPORT_TEAM_DRIVES",
            Feature::TDollar => "T_DOLLAR",
            Feature::UDollar => "U_DOLLAR",
            Feature::Uaa => "Uaa",
            Feature::VDollar => "V_DOLLAR",
            Feature::ADollar => "A_DOLLAR",
            Feature::Bca => "bca",
            Feature::Daa => "daa",
            Feature::GDollar => "G_DOLLAR",
            Feature::Iaa => "iaa",
            Feature::Kaa => "kaa",
            Feature::Laa => "laa",
            Feature::M9 => "m9",
            Feature::Maa => "maa",
            Feature::N9 => "n9",
            Feature::Oca => "oca",
            Feature::Qca => "qca",
            Feature::Waa => "waa",
        }
    }

    /// Look up a feature by its symbolic name (case-sensitive, `"bca"` and `"MINE_ONLY"`)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|feature| feature.name() == name)
    }

    /// Every symbolic name that resolves to `value`, in declaration order
    pub fn with_value(value: &str) -> Vec<Self> {
        Self::ALL
            .iter()
            .copied()
            .filter(|feature| feature.as_str() == value)
            .collect()
    }

    /// Other symbolic names sharing this feature's external value
    pub fn aliases(&self) -> Vec<Self> {
        Self::with_value(self.as_str())
            .into_iter()
            .filter(|other| other != self)
            .collect()
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Feature {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
            .or_else(|| Self::with_value(s).into_iter().next())
            .ok_or_else(|| Error::invalid(format!("unknown feature '{}'", s)))
    }
}

impl Serialize for Feature {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Feature {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
