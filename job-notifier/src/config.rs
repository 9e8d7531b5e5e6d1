use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct JobExecutorConfig {
    #[serde(default = "default_catch_panics")]
    pub catch_panics: bool,
}

impl Default for JobExecutorConfig {
    fn default() -> Self {
        Self {
            catch_panics: default_catch_panics(),
        }
    }
}

fn default_catch_panics() -> bool {
    true
}
