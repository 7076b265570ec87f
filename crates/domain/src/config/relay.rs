use serde::{Deserialize, Serialize};

/// How the single-question queries of one packet are sent upstream.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FanOut {
    /// All questions in flight at once, results rejoined in question order.
    #[default]
    Parallel,

    /// One question at a time.
    Sequential,
}

impl FanOut {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Parallel => "parallel",
            Self::Sequential => "sequential",
        }
    }
}

/// How upstream answers are placed into the merged response.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AnswerNames {
    /// Byte-for-byte copy. Compression pointers keep their upstream offsets.
    #[default]
    Verbatim,

    /// Owner names and NS/CNAME/PTR/MX rdata names rewritten uncompressed.
    Expand,
}

impl AnswerNames {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Verbatim => "verbatim",
            Self::Expand => "expand",
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RelayConfig {
    #[serde(default)]
    pub fan_out: FanOut,

    #[serde(default)]
    pub answer_names: AnswerNames,

    /// Answer packets that fail to relay with SERVFAIL instead of dropping them.
    #[serde(default)]
    pub servfail_on_error: bool,
}
