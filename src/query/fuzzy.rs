use serde_json::Value as Json;


/// Maximum edit distance of a fuzzy query
///
/// Elasticsearch accepts at most two edits, so only those distances can be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fuzziness {
    Auto,
    Zero,
    One,
    Two,
}


impl Default for Fuzziness {
    fn default() -> Fuzziness {
        Fuzziness::Auto
    }
}


impl Fuzziness {
    pub fn edits(edits: u8) -> Option<Fuzziness> {
        match edits {
            0 => Some(Fuzziness::Zero),
            1 => Some(Fuzziness::One),
            2 => Some(Fuzziness::Two),
            _ => None,
        }
    }

    pub fn to_json(&self) -> Json {
        match *self {
            Fuzziness::Auto => Json::String("AUTO".to_string()),
            Fuzziness::Zero => Json::from(0),
            Fuzziness::One => Json::from(1),
            Fuzziness::Two => Json::from(2),
        }
    }
}
