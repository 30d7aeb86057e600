use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Preset research categories offered alongside free-form topics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrendTab {
    #[serde(rename = "CMF")]
    Cmf,
    #[serde(rename = "ID")]
    Id,
    #[serde(rename = "TOOLING")]
    Tooling,
    #[serde(rename = "UX")]
    Ux,
    #[serde(rename = "UI")]
    Ui,
    #[serde(rename = "PACKAGE")]
    Package,
    #[serde(rename = "VISUAL_COMM")]
    VisualComm,
    Custom,
}

/// Static description of a preset category. Reference data only.
#[derive(Debug, Clone, Serialize)]
pub struct Strategy {
    pub description: &'static str,
    pub keywords: &'static [&'static str],
    pub filter_criteria: &'static str,
}

impl TrendTab {
    pub const ALL: [TrendTab; 8] = [
        TrendTab::Cmf,
        TrendTab::Id,
        TrendTab::Tooling,
        TrendTab::Ux,
        TrendTab::Ui,
        TrendTab::Package,
        TrendTab::VisualComm,
        TrendTab::Custom,
    ];

    /// Topic added to the topic set when this preset is picked.
    pub fn preset_topic(&self) -> Option<&'static str> {
        match self {
            TrendTab::Cmf => Some("CMF Design"),
            TrendTab::Id => Some("Industrial Design"),
            TrendTab::Tooling => Some("Manufacturing Tooling"),
            TrendTab::Ux => Some("User Experience"),
            TrendTab::Ui => Some("User Interface"),
            TrendTab::Package => Some("Packaging Design"),
            TrendTab::VisualComm => Some("Visual Communication"),
            TrendTab::Custom => None,
        }
    }

    pub fn strategy(&self) -> Strategy {
        match self {
            TrendTab::Cmf => Strategy {
                description: "Color, Material, and Finish Analysis",
                keywords: &[
                    "innovative materials consumer electronics 2025",
                    "new surface finishing trends tech",
                    "sustainable CMF design",
                    "eco-friendly electronic materials",
                ],
                filter_criteria: "Focus on material innovation, coating processes, tactile qualities and color trends.",
            },
            TrendTab::Id => Strategy {
                description: "Industrial Design & Form Factors",
                keywords: &[
                    "consumer electronics industrial design trends",
                    "new form factor smartphones",
                    "minimalist hardware aesthetics",
                    "ergonomic electronics design",
                ],
                filter_criteria: "Focus on form language, ergonomics and physical interaction.",
            },
            TrendTab::Tooling => Strategy {
                description: "Manufacturing & Prototyping",
                keywords: &[
                    "injection molding innovation electronics",
                    "CNC machining techniques for prototypes",
                    "new manufacturing process tech",
                    "additive manufacturing electronics",
                ],
                filter_criteria: "Focus on production processes, mass-production solutions and prototyping techniques.",
            },
            TrendTab::Ux => Strategy {
                description: "User Experience & Interaction",
                keywords: &[
                    "user experience trends consumer electronics",
                    "HMI innovation 2025",
                    "gesture control technology",
                    "voice interface trends",
                ],
                filter_criteria: "Focus on user experience, human-machine interfaces and interaction design.",
            },
            TrendTab::Ui => Strategy {
                description: "User Interface Design",
                keywords: &[
                    "mobile app UI trends 2025",
                    "consumer electronics interface design",
                    "digital product design trends",
                    "spatial computing UI patterns",
                ],
                filter_criteria: "Focus on screen interface design, visual hierarchy, motion and graphical UI.",
            },
            TrendTab::Package => Strategy {
                description: "Packaging Design",
                keywords: &[
                    "sustainable electronics packaging trends",
                    "unboxing experience design",
                    "innovative packaging materials",
                    "minimalist packaging structures",
                ],
                filter_criteria: "Focus on packaging structure, material sustainability and unboxing experience.",
            },
            TrendTab::VisualComm => Strategy {
                description: "Visual Communication",
                keywords: &[
                    "tech brand visual identity trends",
                    "consumer electronics marketing visuals",
                    "3D motion graphics for tech products",
                    "typography trends in technology",
                ],
                filter_criteria: "Focus on brand identity, visual communication, marketing visuals and motion graphics.",
            },
            TrendTab::Custom => Strategy {
                description: "Custom Topic Analysis",
                keywords: &[],
                filter_criteria: "Filter according to the user-defined topics.",
            },
        }
    }
}

impl fmt::Display for TrendTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrendTab::Cmf => write!(f, "CMF"),
            TrendTab::Id => write!(f, "ID"),
            TrendTab::Tooling => write!(f, "TOOLING"),
            TrendTab::Ux => write!(f, "UX"),
            TrendTab::Ui => write!(f, "UI"),
            TrendTab::Package => write!(f, "PACKAGE"),
            TrendTab::VisualComm => write!(f, "VISUAL_COMM"),
            TrendTab::Custom => write!(f, "Custom"),
        }
    }
}

impl FromStr for TrendTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().replace('-', "_").as_str() {
            "CMF" => Ok(TrendTab::Cmf),
            "ID" => Ok(TrendTab::Id),
            "TOOLING" => Ok(TrendTab::Tooling),
            "UX" => Ok(TrendTab::Ux),
            "UI" => Ok(TrendTab::Ui),
            "PACKAGE" => Ok(TrendTab::Package),
            "VISUAL_COMM" => Ok(TrendTab::VisualComm),
            "CUSTOM" => Ok(TrendTab::Custom),
            _ => Err(format!("Unknown trend tab: {s}")),
        }
    }
}
