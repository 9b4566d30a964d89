use log::{error, info, warn};

/// Reports one pipeline step of submission `id`.
pub fn update(id: u64, stage: Stage) {
    match stage {
        Stage::Fail(err) => error!("{}: {}: {:#}", id, stage.to_string(), err),
        Stage::Skipped(ref detail) | Stage::Discarded(ref detail) => {
            warn!("{}: {}: {}", id, stage.to_string(), detail)
        }
        Stage::Submitted(ref detail)
        | Stage::Fetched(ref detail)
        | Stage::Rendered(ref detail)
        | Stage::Selected(ref detail)
        | Stage::Enriched(ref detail) => info!("{}: {}: {}", id, stage.to_string(), detail),
    }
}

pub enum Stage<'a> {
    Submitted(String),
    Fetched(String),
    Rendered(String),
    Skipped(String),
    Discarded(String),
    Selected(String),
    Enriched(String),
    Fail(&'a (dyn std::error::Error + 'a)),
}

impl<'a> ToString for Stage<'a> {
    fn to_string(&self) -> String {
        let r = match self {
            Self::Submitted(_) => "Submitted",
            Self::Fetched(_) => "Fetched",
            Self::Rendered(_) => "Rendered",
            Self::Skipped(_) => "Skipped",
            Self::Discarded(_) => "Discarded",
            Self::Selected(_) => "Selected",
            Self::Enriched(_) => "Enriched",
            Self::Fail(_) => "Fail",
        };

        r.to_string()
    }
}
