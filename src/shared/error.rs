/***************************************/
/*        3rd party libraries          */
/***************************************/
use thiserror::Error;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Debug, Error)]
pub enum SimError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[source] toml::de::Error),

    #[error("failed to parse scenario: {0}")]
    ScenarioParse(#[source] toml::de::Error),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid building state: {0}")]
    InvalidBuilding(String),

    #[error("failed to draw frame: {0}")]
    Render(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
