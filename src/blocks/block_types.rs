use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

//=====================================================================
// Enum of all collision process types found in LXCat files. Each
// block in a file opens with one of these keywords on its own line.
// Keywords are matched exactly, capitals included.
//=====================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, AsRefStr)]
#[strum(serialize_all = "UPPERCASE")]
pub enum ProcessType {
    Elastic,    // Elastic momentum transfer, carries a mass ratio
    Effective,  // Effective momentum transfer, carries a mass ratio
    Excitation, // Carries a threshold and optional statistical weight ratio
    Attachment, // No parameters
    Ionization, // Carries a threshold
    Rotation,   // Carries lower and upper level energies and weights
}

impl ProcessType {
    // Keyword as written in the file, e.g. "EXCITATION"
    pub fn keyword(&self) -> &'static str {
        match self {
            ProcessType::Elastic => "ELASTIC",
            ProcessType::Effective => "EFFECTIVE",
            ProcessType::Excitation => "EXCITATION",
            ProcessType::Attachment => "ATTACHMENT",
            ProcessType::Ionization => "IONIZATION",
            ProcessType::Rotation => "ROTATION",
        }
    }

    // Processes whose cross section is forced to zero at and below a threshold energy
    pub fn has_threshold(&self) -> bool {
        matches!(self, ProcessType::Excitation | ProcessType::Ionization | ProcessType::Rotation)
    }

    // Recognise a block header line. Only the first whitespace-delimited
    // token is inspected, anything following it is ignored.
    pub fn from_header_line(line: &str) -> Option<Self> {
        line.split_whitespace().next()?.parse().ok()
    }
}

//=====================================================================
// Sections of a single block, used to point at where a load failed.
//=====================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Section {
    Header,
    Species,
    Parameters,
    Info,
    Data,
}
