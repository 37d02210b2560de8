use routefind_core::format::OutputFormat;
use routefind_core::graph::NodeId;

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse a node id from string
pub fn parse_node_id(s: &str) -> std::result::Result<NodeId, String> {
    s.trim()
        .parse::<NodeId>()
        .map_err(|_| format!("node ids are non-negative integers, found `{}`", s))
}
