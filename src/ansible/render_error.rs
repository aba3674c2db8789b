#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("failed to serialize inventory as YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
