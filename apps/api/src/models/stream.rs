use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the three broad academic tracks a student can follow after class 10.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Stream {
    Science,
    Commerce,
    Arts,
}

impl Stream {
    /// Evaluation order for tie-breaks: science, then commerce, then arts.
    pub const ALL: [Stream; 3] = [Stream::Science, Stream::Commerce, Stream::Arts];

    pub fn label(self) -> &'static str {
        match self {
            Stream::Science => "Science",
            Stream::Commerce => "Commerce",
            Stream::Arts => "Arts",
        }
    }
}

impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
