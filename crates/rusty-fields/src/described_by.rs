// File: rusty-fields/src/described_by.rs
// Purpose: Compose the aria-describedby id list for a field

/// Inputs to [`described_by`]
#[derive(Debug, Clone, Copy, Default)]
pub struct DescriptorParams<'a> {
    pub error: Option<&'a str>,
    pub support_text: Option<&'a str>,
    pub tool_tip: Option<&'a str>,
    pub id: &'a str,
    pub name: &'a str,
}

/// Id of the node showing a field's error or support text
pub fn help_id(id: &str, name: &str) -> String {
    format!("{}_{}-help", id, name)
}

/// Id of the node holding a field's tooltip text
pub fn tooltip_id(id: &str, name: &str) -> String {
    format!("{}_{}-tooltip", id, name)
}

/// Empty strings count as absent
pub(crate) fn present(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.is_empty())
}

/// Space-separated ids describing a field, or `None` when the field has no
/// error, support text or tooltip.
///
/// Error and support text share one node, so they contribute a single id.
pub fn described_by(params: &DescriptorParams<'_>) -> Option<String> {
    let help = present(params.error).or(present(params.support_text)).is_some();
    let tip = present(params.tool_tip).is_some();

    let ids: Vec<String> = [
        help.then(|| help_id(params.id, params.name)),
        tip.then(|| tooltip_id(params.id, params.name)),
    ]
    .into_iter()
    .flatten()
    .collect();

    if ids.is_empty() {
        None
    } else {
        Some(ids.join(" "))
    }
}
