use anyhow::Result;
use meetai_core::meeting::{Meeting, MeetingRenderState, MeetingStatus};
use serde_json::json;
use strum::IntoEnumIterator;

/// Prints the render state of a meeting with `status`, or of every status.
pub fn resolve(status: Option<&str>, meeting_id: &str) -> Result<()> {
    let statuses = match status {
        Some(raw) => vec![MeetingStatus::parse(raw)?],
        None => MeetingStatus::iter().collect(),
    };

    let states: Vec<_> = statuses
        .into_iter()
        .map(|status| {
            let meeting = Meeting {
                id: meeting_id.to_string(),
                name: String::new(),
                agent_id: String::new(),
                status,
                agent_name: String::new(),
                started_at: None,
                ended_at: None,
                transcript_url: None,
                summary: None,
            };
            let state = MeetingRenderState::resolve(&meeting);
            json!({
                "status": status,
                "title": state.title(),
                "description": state.description(),
                "readOnly": state.is_read_only(),
                "affordances": state.affordances(),
                "renderState": state,
            })
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&states)?);
    Ok(())
}
