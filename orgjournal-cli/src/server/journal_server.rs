//! Tool server exposing the journal queries over MCP on stdio.

use anyhow::Result;
use orgjournal_core::{
    GetEntriesByTagParams, GetJournalEntriesParams, GetRecentEntriesParams, JournalError,
    OrgJournal, SearchJournalParams, ToolName,
};
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::schema_for_type,
    model::{
        CallToolRequestParams, CallToolResult, Content, Implementation, JsonObject,
        ListToolsResult, PaginatedRequestParams, ServerCapabilities, ServerInfo, Tool,
    },
    service::{RequestContext, RoleServer},
    transport::stdio,
};
use serde_json::Value;
use std::str::FromStr;
use std::sync::Arc;
use strum::IntoEnumIterator;
use tracing::{debug, info, warn};

const SERVER_NAME: &str = "orgjournal";
const INSTRUCTIONS: &str = "Read-only access to an org-mode journal kept as monthly \
journal-YYYY-MM.org files. Dates are YYYY-MM-DD; timestamps are local time.";

/// Serves the four journal tools. The queries underneath are synchronous.
#[derive(Clone)]
pub struct JournalServer {
    journal: Arc<OrgJournal>,
}

impl JournalServer {
    pub fn new(journal: OrgJournal) -> Self {
        Self {
            journal: Arc::new(journal),
        }
    }

    /// Serves stdin/stdout until the client disconnects.
    pub async fn run(self) -> Result<()> {
        info!(dir = %self.journal.config.journal_dir.display(), "tool server listening on stdio");
        let server = self.serve(stdio()).await?;
        server.waiting().await?;
        info!("client disconnected, shutting down");
        Ok(())
    }

    fn tools() -> Vec<Tool> {
        ToolName::iter()
            .map(|tool| {
                let schema = match tool {
                    ToolName::GetJournalEntries => schema_for_type::<GetJournalEntriesParams>(),
                    ToolName::SearchJournal => schema_for_type::<SearchJournalParams>(),
                    ToolName::GetRecentEntries => schema_for_type::<GetRecentEntriesParams>(),
                    ToolName::GetEntriesByTag => schema_for_type::<GetEntriesByTagParams>(),
                };
                Tool::new(tool.as_ref().to_string(), tool.description(), schema)
            })
            .collect()
    }

    /// Unknown tools and arguments that do not fit the tool are protocol errors.
    /// A query that fails on its own terms comes back as an error result.
    fn run_tool(&self, name: &str, arguments: Option<JsonObject>) -> Result<CallToolResult, McpError> {
        let tool = ToolName::from_str(name)
            .map_err(|_| McpError::invalid_params(format!("unknown tool: {name}"), None))?;
        debug!(tool = name, "tool call");

        let arguments = Value::Object(arguments.unwrap_or_default());
        match self.journal.call_tool(tool, arguments) {
            Ok(envelope) => {
                let text = serde_json::to_string_pretty(&envelope)
                    .map_err(|err| McpError::internal_error(err.to_string(), None))?;
                Ok(CallToolResult::success(vec![Content::text(text)]))
            }
            Err(err @ JournalError::InvalidArguments { .. }) => {
                Err(McpError::invalid_params(err.to_string(), None))
            }
            Err(err) => {
                warn!(tool = name, "tool call failed: {err}");
                Ok(CallToolResult::error(vec![Content::text(err.to_string())]))
            }
        }
    }
}

impl ServerHandler for JournalServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                title: Some("Org journal".to_string()),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                website_url: None,
            },
            instructions: Some(INSTRUCTIONS.to_string()),
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            meta: None,
            tools: Self::tools(),
            next_cursor: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        self.run_tool(request.name.as_ref(), request.arguments)
    }
}
