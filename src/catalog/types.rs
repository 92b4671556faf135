use serde::Deserialize;

/// A stage of a security assessment workflow.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Phase {
    #[serde(rename = "phase")]
    pub name: String,
    #[serde(rename = "phaseDescription", default)]
    pub description: String,
    #[serde(default)]
    pub tools: Vec<Tool>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Tool {
    #[serde(rename = "toolName")]
    pub name: String,
    #[serde(rename = "toolDescription", default)]
    pub description: String,
    #[serde(rename = "toolStartCommand", default)]
    pub start_command: String,
    #[serde(rename = "toolCommands", default)]
    pub commands: Vec<Command>,
}

/// One documented invocation of a tool.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Command {
    #[serde(rename = "toolCommand")]
    pub command_text: String,
    #[serde(rename = "commandDescription", default)]
    pub description: String,
}
