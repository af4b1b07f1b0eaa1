use rmcp::{
    handler::server::{tool::ToolRouter, wrapper::Parameters},
    model::*,
    tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler,
};

use crate::tools::{SaveAudioParams, SpeakTextParams, VoiceTools};

pub const INSTRUCTIONS: &str = "VOICEVOX text-to-speech. Use list_speakers to find a \
speaker_id, save_audio to write speech to a .wav file, and speak_text to play speech \
on this machine. speed, pitch, intonation and volume are optional scale factors.";

/// MCP server exposing the VOICEVOX tools. Every tool answers with text; a
/// failed call is reported in that text rather than as a protocol error.
#[derive(Clone)]
pub struct VoicevoxMcpServer {
    tools: VoiceTools,
    tool_router: ToolRouter<Self>,
}

impl VoicevoxMcpServer {
    pub fn new(tools: VoiceTools) -> Self {
        Self {
            tools,
            tool_router: Self::tool_router(),
        }
    }

    /// Tools advertised to clients
    pub fn advertised_tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }
}

fn text_result(message: String) -> Result<CallToolResult, McpError> {
    Ok(CallToolResult::success(vec![Content::text(message)]))
}

#[tool_router]
impl VoicevoxMcpServer {
    #[tool(
        description = "VOICEVOX Engineで利用可能なスピーカー（キャラクター）の一覧を取得します。"
    )]
    async fn list_speakers(&self) -> Result<CallToolResult, McpError> {
        text_result(self.tools.list_speakers().await)
    }

    #[tool(description = "テキストをVOICEVOXで音声合成し、WAVファイルとして保存します。")]
    async fn save_audio(
        &self,
        Parameters(params): Parameters<SaveAudioParams>,
    ) -> Result<CallToolResult, McpError> {
        text_result(self.tools.save_audio(params).await)
    }

    #[tool(description = "テキストをVOICEVOXで音声合成し、スピーカーから再生します。")]
    async fn speak_text(
        &self,
        Parameters(params): Parameters<SpeakTextParams>,
    ) -> Result<CallToolResult, McpError> {
        text_result(self.tools.speak_text(params).await)
    }
}

#[tool_handler]
impl ServerHandler for VoicevoxMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(INSTRUCTIONS.to_string()),
            ..Default::default()
        }
    }
}
